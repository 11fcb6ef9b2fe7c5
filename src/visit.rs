//! Dispatch of a [`Visitor`] over the active alternative of a [`Number`].
//!
//! Dispatch is a single-level match: it never walks into a sequence by itself.
//! A visitor that wants to traverse a tree calls [`dispatch`] again on each
//! element from inside [`Visitor::visit_sequence`].

use crate::number::{Number, Recursive, Sequence};
use tracing::trace;

/// One case per alternative of [`Number`].
///
/// None of the methods have default bodies, so a visitor that leaves an
/// alternative unhandled fails to compile.
pub trait Visitor {
    type Output;

    fn visit_integer(&mut self, value: i32) -> Self::Output;
    fn visit_single(&mut self, value: f32) -> Self::Output;
    fn visit_double(&mut self, value: f64) -> Self::Output;
    fn visit_sequence(&mut self, sequence: &Sequence) -> Self::Output;
}

impl<V: ?Sized + Visitor> Visitor for &mut V {
    type Output = V::Output;

    #[inline]
    fn visit_integer(&mut self, value: i32) -> Self::Output {
        (**self).visit_integer(value)
    }

    #[inline]
    fn visit_single(&mut self, value: f32) -> Self::Output {
        (**self).visit_single(value)
    }

    #[inline]
    fn visit_double(&mut self, value: f64) -> Self::Output {
        (**self).visit_double(value)
    }

    #[inline]
    fn visit_sequence(&mut self, sequence: &Sequence) -> Self::Output {
        (**self).visit_sequence(sequence)
    }
}

/// Something a [`Visitor`] can be dispatched against, either a [`Number`] or a
/// wrapper around one.
pub trait Visitable {
    fn accept<V: ?Sized + Visitor>(&self, visitor: &mut V) -> V::Output;
}

impl Visitable for Number {
    fn accept<V: ?Sized + Visitor>(&self, visitor: &mut V) -> V::Output {
        trace!(kind = %self.kind(), "dispatch");
        match self {
            Number::Integer(x) => visitor.visit_integer(*x),
            Number::Single(x) => visitor.visit_single(*x),
            Number::Double(x) => visitor.visit_double(*x),
            Number::Sequence(x) => visitor.visit_sequence(x),
        }
    }
}

impl<T: Visitable> Visitable for Recursive<T> {
    #[inline]
    fn accept<V: ?Sized + Visitor>(&self, visitor: &mut V) -> V::Output {
        self.as_inner().accept(visitor)
    }
}

impl<T: ?Sized + Visitable> Visitable for &T {
    #[inline]
    fn accept<V: ?Sized + Visitor>(&self, visitor: &mut V) -> V::Output {
        (**self).accept(visitor)
    }
}

/// Invokes the case of `visitor` matching the active alternative of `value`,
/// exactly once, and returns what that case returns.
#[inline]
pub fn dispatch<V, T>(visitor: &mut V, value: &T) -> V::Output
where
    V: ?Sized + Visitor,
    T: ?Sized + Visitable,
{
    value.accept(visitor)
}

#[cfg(test)]
mod tests {
    use super::{dispatch, Visitor};
    use crate::number::{Number, NumberKind, Recursive, Sequence};

    /// Records every case it is called with and does not recurse.
    #[derive(Default)]
    struct Shallow {
        calls: Vec<NumberKind>,
    }

    impl Visitor for Shallow {
        type Output = ();

        fn visit_integer(&mut self, _: i32) {
            self.calls.push(NumberKind::Integer);
        }

        fn visit_single(&mut self, _: f32) {
            self.calls.push(NumberKind::Single);
        }

        fn visit_double(&mut self, _: f64) {
            self.calls.push(NumberKind::Double);
        }

        fn visit_sequence(&mut self, _: &Sequence) {
            self.calls.push(NumberKind::Sequence);
        }
    }

    #[test]
    fn dispatch_does_not_recurse_on_its_own() {
        let number = Number::sequence([1, 2, 3]);
        let mut visitor = Shallow::default();
        dispatch(&mut visitor, &number);
        assert_eq!(visitor.calls, [NumberKind::Sequence]);
    }

    #[test]
    fn wrappers_are_unwrapped() {
        let wrapped = Recursive::new(Number::from(1.0f32));
        let mut visitor = Shallow::default();
        dispatch(&mut visitor, &wrapped);
        dispatch(&mut visitor, &&wrapped);
        assert_eq!(visitor.calls, [NumberKind::Single, NumberKind::Single]);
    }

    #[test]
    fn visitor_by_mutable_reference() {
        let mut visitor = Shallow::default();
        let mut by_ref = &mut visitor;
        dispatch(&mut by_ref, &Number::from(2.0));
        assert_eq!(visitor.calls, [NumberKind::Double]);
    }
}
