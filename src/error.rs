use crate::number::NumberKind;
use std::fmt::Display;

pub type Result<T, E = Error> = ::core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{message} at offset {offset}")]
    Parse { offset: usize, message: Box<str> },
    #[error("Expected {expected}, found {found}")]
    KindMismatch {
        expected: NumberKind,
        found: NumberKind,
    },
    #[error("Nesting depth exceeds the limit of {limit}")]
    DepthExceeded { limit: usize },
    #[error("{0}")]
    Custom(Box<str>),
}

impl Error {
    #[inline]
    pub fn msg(msg: impl Display) -> Self {
        return Self::Custom(msg.to_string().into_boxed_str());
    }

    pub(crate) fn parse(offset: usize, message: impl Display) -> Self {
        return Self::Parse {
            offset,
            message: message.to_string().into_boxed_str(),
        };
    }

    pub(crate) fn kind_mismatch(expected: NumberKind, found: NumberKind) -> Self {
        return Self::KindMismatch { expected, found };
    }
}
