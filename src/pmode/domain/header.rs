//! Parsed `ebMS3` message header structures inspected by profile validators.
//!
//! These types carry only what conformance checks need. Building or parsing
//! the SOAP envelope happens elsewhere.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suffix appended to generated message identifiers.
pub const MESSAGE_ID_SUFFIX: &str = "@as4-pmode";

/// `MessageInfo` block shared by user and signal messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    /// Globally unique message identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Identifier of the message this one refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_to_message_id: Option<String>,
}

impl MessageInfo {
    /// Creates message info with a fresh random identifier and the current
    /// time.
    ///
    /// # Examples
    ///
    /// ```
    /// use as4_pmode::pmode::domain::{MESSAGE_ID_SUFFIX, MessageInfo};
    /// use mockable::DefaultClock;
    ///
    /// let info = MessageInfo::generate(&DefaultClock);
    /// assert!(info.message_id.as_deref().is_some_and(|id| id.ends_with(MESSAGE_ID_SUFFIX)));
    /// ```
    #[must_use]
    pub fn generate(clock: &impl Clock) -> Self {
        Self {
            message_id: Some(format!("{}{MESSAGE_ID_SUFFIX}", Uuid::new_v4())),
            timestamp: Some(clock.utc()),
            ref_to_message_id: None,
        }
    }

    /// Sets the referenced message identifier.
    #[must_use]
    pub fn with_ref_to_message_id(mut self, ref_to_message_id: impl Into<String>) -> Self {
        self.ref_to_message_id = Some(ref_to_message_id.into());
        self
    }

    /// Returns the message identifier when it is present and not blank.
    #[must_use]
    pub fn non_blank_message_id(&self) -> Option<&str> {
        self.message_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// A typed party identifier inside a `From` or `To` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyId {
    /// Identifier scheme.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub id_type: Option<String>,
    /// Identifier value.
    pub value: String,
}

impl PartyId {
    /// Creates a typed party identifier.
    #[must_use]
    pub fn new(id_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id_type: Some(id_type.into()),
            value: value.into(),
        }
    }

    /// Creates an untyped party identifier.
    #[must_use]
    pub fn untyped(value: impl Into<String>) -> Self {
        Self {
            id_type: None,
            value: value.into(),
        }
    }
}

/// `From` or `To` block of a user message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyBlock {
    /// Party identifiers; the `ebMS` schema allows several.
    #[serde(default)]
    pub party_ids: Vec<PartyId>,
    /// Role URL of the party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl PartyBlock {
    /// Creates a block with one party identifier and a role.
    #[must_use]
    pub fn single(party_id: PartyId, role: impl Into<String>) -> Self {
        Self {
            party_ids: vec![party_id],
            role: Some(role.into()),
        }
    }

    /// Appends a party identifier.
    pub fn add_party_id(&mut self, party_id: PartyId) {
        self.party_ids.push(party_id);
    }
}

/// `PartyInfo` block of a user message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyInfo {
    /// Sending party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<PartyBlock>,
    /// Receiving party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<PartyBlock>,
}

/// `CollaborationInfo` block of a user message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationInfo {
    /// Agreement reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_ref: Option<String>,
    /// Service value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Service type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// Action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Conversation identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Named property in the `MessageProperties` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageProperty {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: String,
    /// Optional property type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl MessageProperty {
    /// Creates an untyped property.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            property_type: None,
        }
    }
}

/// Header of an `ebMS3` user message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessageHeader {
    /// Message identification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_info: Option<MessageInfo>,
    /// Sender and receiver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_info: Option<PartyInfo>,
    /// Service, action and agreement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration_info: Option<CollaborationInfo>,
    /// Message properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub message_properties: Vec<MessageProperty>,
    /// Message partition channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpc: Option<String>,
}

impl UserMessageHeader {
    /// Returns the value of the first property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.message_properties
            .iter()
            .find(|property| property.name == name)
            .map(|property| property.value.as_str())
    }
}

/// Kind of an `ebMS3` signal message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalKind {
    /// Receipt for a user message.
    Receipt {
        /// Receipt carries non-repudiation information.
        #[serde(default)]
        non_repudiation: bool,
    },
    /// Error report.
    Error {
        /// `ebMS` error code, e.g. `EBMS:0004`.
        error_code: String,
    },
    /// Request to pull a message from a partition channel.
    PullRequest {
        /// Channel to pull from; absent means the default channel.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mpc: Option<String>,
    },
}

/// Header of an `ebMS3` signal message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalMessageHeader {
    /// Message identification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_info: Option<MessageInfo>,
    /// Signal payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<SignalKind>,
}
