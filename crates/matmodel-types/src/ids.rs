//! Strongly-typed model identifier.
//!
//! The registry stores identifiers as `&'static str` constants so they can
//! be used in `const` contexts. [`ModelUuid`] is the parsed form handed to
//! code that compares or serializes identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MatModelError, MatModelResult};

/// UUID tagging one material model variant.
///
/// Serializes as the lowercase hyphenated string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelUuid(pub Uuid);

impl ModelUuid {
    /// Parses a UUID string.
    ///
    /// Accepts the hyphenated, simple and braced forms in either case.
    /// Empty or malformed input is rejected.
    pub fn parse(s: &str) -> MatModelResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MatModelError::InvalidUuid("empty string".into()));
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|e| MatModelError::InvalidUuid(format!("'{s}': {e}")))
    }

    /// Returns the inner [`Uuid`].
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true for the all-zero UUID.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for ModelUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ModelUuid {
    type Err = MatModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for ModelUuid {
    fn from(val: Uuid) -> Self {
        Self(val)
    }
}
