use serde::{Deserialize, Serialize};
use std::fmt;

/// The three travel modes. Each vertical carries its own catalog and
/// fare rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Flight,
    Train,
    Bus,
}

impl Vertical {
    /// Three-letter prefix used in booking reference ids.
    pub fn reference_prefix(&self) -> &'static str {
        match self {
            Vertical::Flight => "FLT",
            Vertical::Train => "TRN",
            Vertical::Bus => "BUS",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertical::Flight => write!(f, "flight"),
            Vertical::Train => write!(f, "train"),
            Vertical::Bus => write!(f, "bus"),
        }
    }
}
