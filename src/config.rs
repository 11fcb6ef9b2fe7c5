use serde::{Deserialize, Serialize};

/// Options for [`Printer`](crate::printer::Printer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fixed number of fractional digits for floating point leaves. When
    /// unset, the shortest representation that reads back to the same value
    /// is printed.
    pub precision: Option<usize>,
    /// Maximum number of nested sequences. Unlimited when unset.
    pub max_depth: Option<usize>,
}

impl Config {
    #[inline]
    pub const fn new() -> Self {
        return Self {
            precision: None,
            max_depth: None,
        };
    }

    pub fn set_precision(&mut self, precision: impl Into<Option<usize>>) -> &mut Self {
        self.precision = precision.into();
        self
    }

    pub fn set_max_depth(&mut self, max_depth: impl Into<Option<usize>>) -> &mut Self {
        self.max_depth = max_depth.into();
        self
    }
}
