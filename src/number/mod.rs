use crate::{
    error::{Error, Result},
    visit::dispatch,
    visitors::{Depth, LeafCount},
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub use self::{kind::NumberKind, recursive::Recursive, sequence::Sequence};

pub mod kind;
pub mod recursive;
pub mod sequence;

/// A number that is exactly one of three numeric leaves, or a sequence of
/// further numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Integer(i32),
    Single(f32),
    Double(f64),
    Sequence(Sequence),
}

impl Number {
    #[inline]
    pub const fn integer(value: i32) -> Self {
        return Self::Integer(value);
    }

    #[inline]
    pub const fn single(value: f32) -> Self {
        return Self::Single(value);
    }

    #[inline]
    pub const fn double(value: f64) -> Self {
        return Self::Double(value);
    }

    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Number>,
    {
        return Self::Sequence(elements.into_iter().map(Into::into).collect());
    }

    pub const fn kind(&self) -> NumberKind {
        return match self {
            Number::Integer(_) => NumberKind::Integer,
            Number::Single(_) => NumberKind::Single,
            Number::Double(_) => NumberKind::Double,
            Number::Sequence(_) => NumberKind::Sequence,
        };
    }

    /// Sets a new alternative, returning the previous value.
    #[inline]
    pub fn replace(&mut self, value: impl Into<Number>) -> Number {
        return std::mem::replace(self, value.into());
    }

    /// Number of leaves in the whole tree.
    pub fn leaf_count(&self) -> usize {
        return dispatch(&mut LeafCount, self);
    }

    /// Nesting depth. Leaves have depth 0, a sequence is one deeper than its
    /// deepest element.
    pub fn depth(&self) -> usize {
        return dispatch(&mut Depth, self);
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Number::Integer(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_single(&self) -> Option<f32> {
        match self {
            Number::Single(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Number::Double(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Number::Sequence(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Number::Sequence(x) => Some(x),
            _ => None,
        }
    }

    pub fn into_integer(self) -> Result<i32> {
        match self {
            Number::Integer(x) => Ok(x),
            other => Err(Error::kind_mismatch(NumberKind::Integer, other.kind())),
        }
    }

    pub fn into_single(self) -> Result<f32> {
        match self {
            Number::Single(x) => Ok(x),
            other => Err(Error::kind_mismatch(NumberKind::Single, other.kind())),
        }
    }

    pub fn into_double(self) -> Result<f64> {
        match self {
            Number::Double(x) => Ok(x),
            other => Err(Error::kind_mismatch(NumberKind::Double, other.kind())),
        }
    }

    pub fn into_sequence(self) -> Result<Sequence> {
        match self {
            Number::Sequence(x) => Ok(x),
            other => Err(Error::kind_mismatch(NumberKind::Sequence, other.kind())),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Integer(0)
    }
}

/// Writes the literal notation read back by [`crate::parse`].
impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(x) => write!(f, "{x}i"),
            Number::Single(x) => write!(f, "{x}f"),
            Number::Double(x) => write!(f, "{x}d"),
            Number::Sequence(x) => Display::fmt(x, f),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Single(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}

impl From<Sequence> for Number {
    fn from(value: Sequence) -> Self {
        Number::Sequence(value)
    }
}

impl From<Vec<Number>> for Number {
    fn from(value: Vec<Number>) -> Self {
        Number::Sequence(value.into())
    }
}

impl From<Recursive<Number>> for Number {
    fn from(value: Recursive<Number>) -> Self {
        value.into_inner()
    }
}

impl FromIterator<Number> for Number {
    fn from_iter<I: IntoIterator<Item = Number>>(iter: I) -> Self {
        Number::Sequence(iter.into_iter().collect())
    }
}
