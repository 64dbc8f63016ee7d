//! Three-valued boolean used throughout the PMode model.

use super::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A boolean that may also be explicitly unspecified.
///
/// `Undefined` is a first-class value meaning "not decided by
/// configuration". It is not interchangeable with `False`: profile rules can
/// require a flag to be defined independently of requiring a specific value.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::domain::TriState;
///
/// assert!(TriState::Undefined.is_undefined());
/// assert_eq!(TriState::from(true).as_bool(), Some(true));
/// assert!(!TriState::False.is_true());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    /// Explicitly enabled.
    True,
    /// Explicitly disabled.
    False,
    /// Not configured.
    #[default]
    Undefined,
}

impl TriState {
    /// Converts a concrete boolean.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    /// Returns `true` when the value is [`TriState::True`].
    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Returns `true` when the value is [`TriState::False`].
    #[must_use]
    pub const fn is_false(self) -> bool {
        matches!(self, Self::False)
    }

    /// Returns `true` when the value is [`TriState::Undefined`].
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` when the value is either `True` or `False`.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Returns the concrete boolean, or `None` when undefined.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Undefined => None,
        }
    }

    /// Returns the concrete boolean, or `default` when undefined.
    #[must_use]
    pub const fn as_bool_or(self, default: bool) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Undefined => default,
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Undefined => "undefined",
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Undefined, Self::from)
    }
}

impl TryFrom<&str> for TriState {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            "undefined" | "" => Ok(Self::Undefined),
            _ => Err(ParseEnumError::new("tri-state", value)),
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
