use super::{Number, Recursive};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Ordered, exclusively owned list of [`Number`]s.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    elements: Vec<Recursive<Number>>,
}

impl Sequence {
    #[inline]
    pub const fn new() -> Self {
        return Self {
            elements: Vec::new(),
        };
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        return Self {
            elements: Vec::with_capacity(capacity),
        };
    }

    #[inline]
    pub fn push(&mut self, value: impl Into<Number>) {
        self.elements.push(Recursive::new(value.into()));
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.elements.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.elements.is_empty();
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Number> {
        return self.elements.get(index).map(Recursive::as_inner);
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Number> {
        return self.elements.get_mut(index).map(Recursive::as_inner_mut);
    }

    /// The wrapped elements, as stored.
    #[inline]
    pub fn elements(&self) -> &[Recursive<Number>] {
        return &self.elements;
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Number> + ExactSizeIterator {
        return self.elements.iter().map(Recursive::as_inner);
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut Number> + ExactSizeIterator {
        return self.elements.iter_mut().map(Recursive::as_inner_mut);
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl FromIterator<Number> for Sequence {
    fn from_iter<I: IntoIterator<Item = Number>>(iter: I) -> Self {
        return Self {
            elements: iter.into_iter().map(Recursive::new).collect(),
        };
    }
}

impl Extend<Number> for Sequence {
    fn extend<I: IntoIterator<Item = Number>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Recursive::new))
    }
}

impl From<Vec<Number>> for Sequence {
    #[inline]
    fn from(value: Vec<Number>) -> Self {
        value.into_iter().collect()
    }
}

impl<const N: usize> From<[Number; N]> for Sequence {
    #[inline]
    fn from(value: [Number; N]) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for Sequence {
    type Item = Number;
    type IntoIter =
        std::iter::Map<std::vec::IntoIter<Recursive<Number>>, fn(Recursive<Number>) -> Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements
            .into_iter()
            .map(Recursive::into_inner as fn(Recursive<Number>) -> Number)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Number;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Recursive<Number>>,
        fn(&'a Recursive<Number>) -> &'a Number,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.elements
            .iter()
            .map(Recursive::as_inner as fn(&'a Recursive<Number>) -> &'a Number)
    }
}
