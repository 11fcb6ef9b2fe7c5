use crate::{
    number::{NumberKind, Sequence},
    visit::{dispatch, Visitable, Visitor},
};

/// Counts the leaves of a tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeafCount;

impl Visitor for LeafCount {
    type Output = usize;

    fn visit_integer(&mut self, _: i32) -> usize {
        1
    }

    fn visit_single(&mut self, _: f32) -> usize {
        1
    }

    fn visit_double(&mut self, _: f64) -> usize {
        1
    }

    fn visit_sequence(&mut self, sequence: &Sequence) -> usize {
        return sequence.iter().map(|x| dispatch(self, x)).sum();
    }
}

/// Measures how many sequences deep a tree goes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Depth;

impl Visitor for Depth {
    type Output = usize;

    fn visit_integer(&mut self, _: i32) -> usize {
        0
    }

    fn visit_single(&mut self, _: f32) -> usize {
        0
    }

    fn visit_double(&mut self, _: f64) -> usize {
        0
    }

    fn visit_sequence(&mut self, sequence: &Sequence) -> usize {
        let deepest = sequence.iter().map(|x| dispatch(self, x)).max();
        return 1 + deepest.unwrap_or(0);
    }
}

/// Collects the kind of every leaf, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct Kinds {
    pub kinds: Vec<NumberKind>,
}

impl Kinds {
    pub fn collect<T: ?Sized + Visitable>(value: &T) -> Vec<NumberKind> {
        let mut visitor = Self::default();
        dispatch(&mut visitor, value);
        return visitor.kinds;
    }
}

impl Visitor for Kinds {
    type Output = ();

    fn visit_integer(&mut self, _: i32) {
        self.kinds.push(NumberKind::Integer)
    }

    fn visit_single(&mut self, _: f32) {
        self.kinds.push(NumberKind::Single)
    }

    fn visit_double(&mut self, _: f64) {
        self.kinds.push(NumberKind::Double)
    }

    fn visit_sequence(&mut self, sequence: &Sequence) {
        for element in sequence {
            dispatch(self, element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Depth, Kinds, LeafCount};
    use crate::{dispatch, Number, NumberKind, Sequence};

    #[test]
    fn empty_sequence_has_no_leaves() {
        let empty = Number::from(Sequence::new());
        assert_eq!(dispatch(&mut LeafCount, &empty), 0);
        assert_eq!(dispatch(&mut Depth, &empty), 1);
        assert!(Kinds::collect(&empty).is_empty());
    }

    #[test]
    fn kinds_follow_element_order() {
        let number = Number::sequence([
            Number::from(1.0f32),
            Number::sequence([Number::from(2), Number::from(3.0)]),
        ]);
        assert_eq!(
            Kinds::collect(&number),
            [NumberKind::Single, NumberKind::Integer, NumberKind::Double]
        );
    }
}
