//! Identifier newtypes for PModes and interoperability profiles.

use super::PModeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a PMode, unique within a PMode store.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::domain::PModeId;
///
/// let id = PModeId::new("  TestInitiator-TestResponder ").expect("valid id");
/// assert_eq!(id.as_str(), "TestInitiator-TestResponder");
/// assert!(PModeId::new("   ").is_err());
/// ```
///
/// Deserialisation applies the same normalisation as [`PModeId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PModeId(String);

impl PModeId {
    /// Creates a validated PMode identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PModeDomainError::EmptyPModeId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PModeDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(PModeDomainError::EmptyPModeId);
        }
        Ok(Self(normalized))
    }

    /// Wraps a value already known to be non-empty.
    pub(crate) fn from_non_empty(value: String) -> Self {
        debug_assert!(!value.trim().is_empty(), "PMode id must be non-empty");
        Self(value)
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PModeId {
    type Error = PModeDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PModeId> for String {
    fn from(value: PModeId) -> Self {
        value.0
    }
}

impl AsRef<str> for PModeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of an interoperability profile, such as `peppol` or `bdew`.
///
/// Deserialisation applies the same normalisation as [`ProfileId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileId(String);

impl ProfileId {
    /// Creates a validated, lower-cased profile identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PModeDomainError::EmptyProfileId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PModeDomainError> {
        let normalized = value.into().trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(PModeDomainError::EmptyProfileId);
        }
        Ok(Self(normalized))
    }

    /// Identifier of the built-in Peppol profile.
    #[must_use]
    pub fn peppol() -> Self {
        Self("peppol".to_owned())
    }

    /// Identifier of the built-in BDEW profile.
    #[must_use]
    pub fn bdew() -> Self {
        Self("bdew".to_owned())
    }

    /// Identifier of the built-in CEF eDelivery profile.
    #[must_use]
    pub fn cef() -> Self {
        Self("cef".to_owned())
    }

    /// Identifier of the permissive fallback profile.
    #[must_use]
    pub fn generic() -> Self {
        Self("generic".to_owned())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProfileId {
    type Error = PModeDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProfileId> for String {
    fn from(value: ProfileId) -> Self {
        value.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
