//! Per-direction leg configuration of a PMode.
//!
//! Every sub-configuration is optional on the leg so that profile validators
//! can report exactly which part is missing. Fields inside a sub-configuration
//! are plain values; each optional field keeps its own absence meaning.

use super::{
    DigestAlgorithm, EncryptionAlgorithm, ParseEnumError, SignatureAlgorithm, SoapVersion,
    TriState, WssVersion,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default `ebMS` action used for connectivity tests.
pub const DEFAULT_ACTION: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/test";

/// Default `ebMS` service used for connectivity tests.
pub const DEFAULT_SERVICE: &str =
    "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/service";

/// Default message partition channel.
pub const DEFAULT_MPC: &str = "http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/defaultMPC";

/// Transport endpoint of a leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PModeLegProtocol {
    /// Endpoint address; absent when resolved dynamically at send time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// SOAP envelope version.
    #[serde(default)]
    pub soap_version: SoapVersion,
}

impl PModeLegProtocol {
    /// Creates a protocol block with an explicit SOAP version.
    #[must_use]
    pub const fn new(address: Option<String>, soap_version: SoapVersion) -> Self {
        Self {
            address,
            soap_version,
        }
    }

    /// Creates a protocol block using the AS4 default SOAP version.
    #[must_use]
    pub fn with_default_soap_version(address: impl Into<String>) -> Self {
        Self::new(Some(address.into()), SoapVersion::default())
    }

    /// Returns the URI scheme of the address, e.g. `https`.
    ///
    /// Returns `None` when no address is configured or the address has no
    /// recognisable scheme.
    #[must_use]
    pub fn address_scheme(&self) -> Option<&str> {
        let (scheme, _) = self.address.as_deref()?.trim().split_once(':')?;
        let is_scheme = scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        is_scheme.then_some(scheme)
    }
}

/// Business-level addressing of the messages sent on a leg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PModeLegBusinessInformation {
    /// `ebMS` service value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// `ebMS` service type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// `ebMS` action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Maximum payload size in KiB; absent means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_profile_max_kb: Option<u64>,
    /// Message partition channel identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpc_id: Option<String>,
}

impl PModeLegBusinessInformation {
    /// Creates business information with the given service, action and MPC.
    #[must_use]
    pub const fn new(service: Option<String>, action: Option<String>, mpc_id: Option<String>) -> Self {
        Self {
            service,
            service_type: None,
            action,
            payload_profile_max_kb: None,
            mpc_id,
        }
    }
}

/// Ordered list of addresses errors are reported to out of band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PModeAddressList(Vec<String>);

impl PModeAddressList {
    /// Creates an address list, dropping blank entries.
    #[must_use]
    pub fn new(addresses: impl IntoIterator<Item = String>) -> Self {
        Self(
            addresses
                .into_iter()
                .map(|address| address.trim().to_owned())
                .filter(|address| !address.is_empty())
                .collect(),
        )
    }

    /// Returns the addresses.
    #[must_use]
    pub fn addresses(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` when no address is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Error reporting obligations of a leg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PModeLegErrorHandling {
    /// Where sender-side errors are reported; absent means "not reported out
    /// of band".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_sender_errors_to: Option<PModeAddressList>,
    /// Where receiver-side errors are reported; absent means "not reported
    /// out of band".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_receiver_errors_to: Option<PModeAddressList>,
    /// Errors are returned on the back-channel of the triggering message.
    #[serde(default)]
    pub report_as_response: TriState,
    /// Processing errors are notified to the consumer.
    #[serde(default)]
    pub report_process_error_notify_consumer: TriState,
    /// Processing errors are notified to the producer.
    #[serde(default)]
    pub report_process_error_notify_producer: TriState,
    /// Delivery failures are notified to the producer.
    #[serde(default)]
    pub report_delivery_failures_notify_producer: TriState,
}

impl PModeLegErrorHandling {
    /// Creates error handling with all four notification flags set and no
    /// out-of-band address lists.
    #[must_use]
    pub const fn new(
        report_as_response: TriState,
        report_process_error_notify_consumer: TriState,
        report_process_error_notify_producer: TriState,
        report_delivery_failures_notify_producer: TriState,
    ) -> Self {
        Self {
            report_sender_errors_to: None,
            report_receiver_errors_to: None,
            report_as_response,
            report_process_error_notify_consumer,
            report_process_error_notify_producer,
            report_delivery_failures_notify_producer,
        }
    }

    /// Creates error handling with every flag left undefined.
    #[must_use]
    pub fn undefined() -> Self {
        Self::default()
    }
}

/// Reliable-messaging contract of a leg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PModeLegReliability {
    /// At-least-once delivery is required.
    #[serde(default)]
    pub at_least_once_contract: TriState,
    /// Acknowledgement is sent only after delivery to the consumer.
    #[serde(default)]
    pub at_least_once_ack_on_delivery: TriState,
    /// At-most-once delivery (duplicate elimination) is required.
    #[serde(default)]
    pub at_most_once_contract: TriState,
    /// In-order delivery is required.
    #[serde(default)]
    pub in_order_contract: TriState,
    /// Header expressions correlating messages of a group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correlation: Vec<String>,
}

/// How a receipt is returned to the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptReplyPattern {
    /// On the back-channel of the user message.
    Response,
    /// On a separate connection initiated by the receiver.
    Callback,
}

impl ReceiptReplyPattern {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Response => "response",
            Self::Callback => "callback",
        }
    }
}

impl TryFrom<&str> for ReceiptReplyPattern {
    type Error = ParseEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "response" => Ok(Self::Response),
            "callback" => Ok(Self::Callback),
            _ => Err(ParseEnumError::new("receipt reply pattern", value)),
        }
    }
}

impl fmt::Display for ReceiptReplyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message-level security requirements of a leg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PModeLegSecurity {
    /// WS-Security version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wss_version: Option<WssVersion>,
    /// Base64 DER signing certificate; absent means "resolved at send time".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_signature_certificate: Option<String>,
    /// Signature algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_signature_algorithm: Option<SignatureAlgorithm>,
    /// Digest algorithm used by signature references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_signature_hash_function: Option<DigestAlgorithm>,
    /// Base64 DER encryption certificate; absent means "resolved at send
    /// time".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_encryption_certificate: Option<String>,
    /// Content encryption algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_encryption_algorithm: Option<EncryptionAlgorithm>,
    /// Minimum accepted encryption key strength in bits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_encryption_minimum_strength: Option<u32>,
    /// Whether PMode-level authorisation applies.
    #[serde(default)]
    pub pmode_authorize: TriState,
    /// Whether a receipt is sent for received user messages.
    #[serde(default)]
    pub send_receipt: TriState,
    /// Whether receipts carry non-repudiation information.
    #[serde(default)]
    pub send_receipt_non_repudiation: TriState,
    /// How receipts are returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_receipt_reply_pattern: Option<ReceiptReplyPattern>,
}

/// Configuration of one directional hop of a PMode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PModeLeg {
    /// Transport endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<PModeLegProtocol>,
    /// Business addressing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_information: Option<PModeLegBusinessInformation>,
    /// Error reporting obligations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_handling: Option<PModeLegErrorHandling>,
    /// Reliable-messaging contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<PModeLegReliability>,
    /// Security requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<PModeLegSecurity>,
}

impl PModeLeg {
    /// Creates a leg from its sub-configurations.
    #[must_use]
    pub const fn new(
        protocol: Option<PModeLegProtocol>,
        business_information: Option<PModeLegBusinessInformation>,
        error_handling: Option<PModeLegErrorHandling>,
        reliability: Option<PModeLegReliability>,
        security: Option<PModeLegSecurity>,
    ) -> Self {
        Self {
            protocol,
            business_information,
            error_handling,
            reliability,
            security,
        }
    }

    /// Creates a leg that only carries a protocol block.
    #[must_use]
    pub const fn with_protocol_only(protocol: PModeLegProtocol) -> Self {
        Self::new(Some(protocol), None, None, None, None)
    }
}
