use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The alternative a [`Number`](super::Number) currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    /// A 32-bit signed integer
    Integer,
    /// A 32-bit float
    Single,
    /// A 64-bit float
    Double,
    /// An ordered list of numbers
    Sequence,
}

impl NumberKind {
    pub const LEAVES: [NumberKind; 3] = [Self::Integer, Self::Single, Self::Double];

    /// Suffix appended to a printed leaf. Sequences have none.
    pub const fn suffix(self) -> Option<char> {
        return match self {
            NumberKind::Integer => Some('i'),
            NumberKind::Single => Some('f'),
            NumberKind::Double => Some('d'),
            NumberKind::Sequence => None,
        };
    }

    pub const fn from_suffix(suffix: char) -> Option<Self> {
        return match suffix {
            'i' => Some(NumberKind::Integer),
            'f' => Some(NumberKind::Single),
            'd' => Some(NumberKind::Double),
            _ => None,
        };
    }

    pub const fn name(self) -> &'static str {
        return match self {
            NumberKind::Integer => "integer",
            NumberKind::Single => "single",
            NumberKind::Double => "double",
            NumberKind::Sequence => "sequence",
        };
    }

    pub const fn is_leaf(self) -> bool {
        return !matches!(self, NumberKind::Sequence);
    }
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
