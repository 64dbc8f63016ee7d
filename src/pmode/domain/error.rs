//! Error types for PMode model construction and parsing.

use thiserror::Error;

/// Errors returned while constructing or checking PMode values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PModeDomainError {
    /// The PMode identifier is empty after trimming.
    #[error("PMode identifier must not be empty")]
    EmptyPModeId,

    /// The profile identifier is empty after trimming.
    #[error("profile identifier must not be empty")]
    EmptyProfileId,

    /// A party identifier is empty after trimming.
    #[error("{0} identifier must not be empty")]
    EmptyPartyId(&'static str),

    /// The responder address is empty after trimming.
    #[error("responder address must not be empty")]
    EmptyAddress,

    /// The PMode has no first leg.
    #[error("PMode {0} is missing leg 1")]
    MissingLeg1(String),

    /// The PMode is two-way but has no second leg.
    #[error("PMode {0} is two-way but leg 2 is missing")]
    MissingLeg2(String),

    /// The PMode is one-way but carries a second leg.
    #[error("PMode {0} is one-way but leg 2 is present")]
    UnexpectedLeg2(String),

    /// The requested exchange shape is not offered by the profile.
    #[error("profile {profile} does not support the {mep} exchange pattern")]
    UnsupportedExchange {
        /// Profile that rejected the request.
        profile: String,
        /// Requested message exchange pattern.
        mep: String,
    },
}

/// Error returned while parsing a closed enumeration from its textual form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    /// Creates a parse error for the given enumeration kind and raw value.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the enumeration kind that failed to parse.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the rejected raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
