//! Parties taking part in a PMode-governed exchange.

use super::PModeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default `ebMS` role URL of the initiating party.
pub const DEFAULT_INITIATOR_ROLE: &str =
    "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/initiator";

/// Default `ebMS` role URL of the responding party.
pub const DEFAULT_RESPONDER_ROLE: &str =
    "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/responder";

/// Initiator or responder of a PMode.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::domain::{DEFAULT_INITIATOR_ROLE, PModeParty};
///
/// let party = PModeParty::new("TestInitiator", DEFAULT_INITIATOR_ROLE)
///     .expect("valid party")
///     .with_id_type("urn:oasis:names:tc:ebcore:partyid-type:unregistered");
/// assert_eq!(
///     party.id(),
///     "urn:oasis:names:tc:ebcore:partyid-type:unregistered:TestInitiator"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PModeParty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_type: Option<String>,
    id_value: String,
    role: String,
}

impl PModeParty {
    /// Creates an untyped party with the given identifier and role URL.
    ///
    /// # Errors
    ///
    /// Returns [`PModeDomainError::EmptyPartyId`] when the identifier is empty
    /// after trimming.
    pub fn new(
        id_value: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, PModeDomainError> {
        let normalized = id_value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(PModeDomainError::EmptyPartyId("party"));
        }
        Ok(Self {
            id_type: None,
            id_value: normalized,
            role: role.into(),
        })
    }

    /// Sets the party identifier type. Blank types are ignored.
    #[must_use]
    pub fn with_id_type(mut self, id_type: impl Into<String>) -> Self {
        let normalized = id_type.into().trim().to_owned();
        self.id_type = (!normalized.is_empty()).then_some(normalized);
        self
    }

    /// Returns the full identifier: `type:value` when typed, `value`
    /// otherwise.
    #[must_use]
    pub fn id(&self) -> String {
        match &self.id_type {
            Some(id_type) => format!("{id_type}:{}", self.id_value),
            None => self.id_value.clone(),
        }
    }

    /// Returns the identifier type, if any.
    #[must_use]
    pub fn id_type(&self) -> Option<&str> {
        self.id_type.as_deref()
    }

    /// Returns the bare identifier value.
    #[must_use]
    pub fn id_value(&self) -> &str {
        &self.id_value
    }

    /// Returns the role URL.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns `true` when the identifier value is blank.
    #[must_use]
    pub fn has_blank_id(&self) -> bool {
        self.id_value.trim().is_empty()
    }
}

impl fmt::Display for PModeParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
