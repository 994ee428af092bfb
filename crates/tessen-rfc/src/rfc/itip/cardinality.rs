//! Presence constraints from the RFC 5546 per-method tables.

use std::fmt;

use serde::Serialize;

/// How many instances of a property or sub-component a context admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// `0`: must not be present.
    None,
    /// `1`: must be present exactly once.
    ExactlyOne,
    /// `0 or 1`: optional, not repeatable.
    AtMostOne,
    /// `1+`: required, repeatable.
    AtLeastOne,
    /// `0+`: unconstrained.
    Any,
}

impl Cardinality {
    /// Returns whether `count` instances satisfy this constraint.
    #[must_use]
    pub const fn admits(self, count: usize) -> bool {
        match self {
            Self::None => count == 0,
            Self::ExactlyOne => count == 1,
            Self::AtMostOne => count <= 1,
            Self::AtLeastOne => count >= 1,
            Self::Any => true,
        }
    }

    /// Returns whether at least one instance is required.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::ExactlyOne | Self::AtLeastOne)
    }

    /// Returns whether any instance may be present at all.
    #[must_use]
    pub const fn permits_presence(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the notation used in the RFC tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::ExactlyOne => "1",
            Self::AtMostOne => "0 or 1",
            Self::AtLeastOne => "1+",
            Self::Any => "0+",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
