//! Data-driven rule tables for interoperability profiles.
//!
//! A [`ProfileRules`] value describes what one profile mandates on top of the
//! generic PMode schema. The rule engine in [`super::rules`] evaluates any
//! table the same way, so adding a profile means adding data, not code.

use crate::pmode::{
    domain::{
        DEFAULT_ACTION, DEFAULT_AGREEMENT_ID, DEFAULT_INITIATOR_ROLE, DEFAULT_MPC,
        DEFAULT_RESPONDER_ROLE, DigestAlgorithm, EncryptionAlgorithm, Mep, MepBinding, PMode,
        PModeDomainError, PModeLeg, PModeLegBusinessInformation, PModeLegErrorHandling,
        PModeLegProtocol, PModeLegSecurity, PModeParty, PModeReceptionAwareness, ProfileId,
        ReceiptReplyPattern, SignatureAlgorithm, SoapVersion, TriState, WssVersion,
    },
    ports::PModeIdProvider,
};
use serde::{Deserialize, Serialize};

/// Party identifier type of Peppol access points.
pub const PEPPOL_PARTY_ID_TYPE: &str = "urn:fdc:peppol.eu:2017:identifiers:ap";

/// Message property naming the original sender of a Peppol document.
pub const PEPPOL_ORIGINAL_SENDER: &str = "originalSender";

/// Message property naming the final recipient of a Peppol document.
pub const PEPPOL_FINAL_RECIPIENT: &str = "finalRecipient";

/// Party identifier types accepted by the BDEW profile.
pub const BDEW_PARTY_ID_TYPES: [&str; 3] = [
    "urn:oasis:names:tc:ebcore:partyid-type:iso6523:0088",
    "urn:oasis:names:tc:ebcore:partyid-type:unregistered:BDEW",
    "urn:oasis:names:tc:ebcore:partyid-type:unregistered:DVGW",
];

/// Services accepted by the BDEW profile.
pub const BDEW_SERVICES: [&str; 6] = [
    "https://www.bdew.de/as4/communication/services/MP",
    "https://www.bdew.de/as4/communication/services/FP",
    "https://www.bdew.de/as4/communication/services/GP",
    "https://www.bdew.de/as4/communication/services/SO",
    "https://www.bdew.de/as4/communication/services/TP",
    "https://www.bdew.de/as4/communication/services/pathSwitch",
];

/// Requirement placed on a [`TriState`] PMode flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagRequirement {
    /// The flag is not inspected.
    #[default]
    Unchecked,
    /// The flag must be set, to either value.
    Defined,
    /// The flag must be set to the given value.
    Equals(bool),
}

impl FlagRequirement {
    /// Returns the value a generated PMode uses for a flag under this
    /// requirement, falling back to `fallback` when any defined value would
    /// do.
    #[must_use]
    pub const fn value_or(self, fallback: bool) -> TriState {
        match self {
            Self::Equals(value) => TriState::from_bool(value),
            Self::Unchecked | Self::Defined => TriState::from_bool(fallback),
        }
    }
}

/// Rules for the error handling block of each leg.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorHandlingRules {
    /// The block must be present.
    pub required: bool,
    /// `ReportAsResponse` requirement.
    pub report_as_response: FlagRequirement,
    /// `ReportProcessErrorNotifyConsumer` requirement.
    pub report_process_error_notify_consumer: FlagRequirement,
    /// `ReportProcessErrorNotifyProducer` requirement.
    pub report_process_error_notify_producer: FlagRequirement,
    /// `ReportDeliveryFailuresNotifyProducer` requirement.
    pub report_delivery_failures_notify_producer: FlagRequirement,
}

impl ErrorHandlingRules {
    /// Requires the block with every flag fixed to `value`.
    #[must_use]
    pub const fn all_equal(value: bool) -> Self {
        Self::uniform(FlagRequirement::Equals(value))
    }

    /// Requires the block with every flag set to some value.
    #[must_use]
    pub const fn all_defined() -> Self {
        Self::uniform(FlagRequirement::Defined)
    }

    const fn uniform(requirement: FlagRequirement) -> Self {
        Self {
            required: true,
            report_as_response: requirement,
            report_process_error_notify_consumer: requirement,
            report_process_error_notify_producer: requirement,
            report_delivery_failures_notify_producer: requirement,
        }
    }
}

/// Rules for the PMode-wide reception awareness block.
///
/// Only the switches are constrained. Retry count and interval are never
/// bounded by a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceptionAwarenessRules {
    /// The block must be present.
    pub required: bool,
    /// Requirement on the reception awareness switch.
    pub enabled: FlagRequirement,
    /// Requirement on the retry switch.
    pub retry: FlagRequirement,
    /// Requirement on the duplicate detection switch.
    pub duplicate_detection: FlagRequirement,
}

/// Everything one interoperability profile mandates.
///
/// Empty lists mean "anything goes" and `None` means "not checked".
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::domain::{Mep, MepBinding};
/// use as4_pmode::pmode::validation::ProfileRules;
///
/// let peppol = ProfileRules::peppol();
/// assert!(peppol.allowed_meps.contains(&Mep::OneWay));
/// assert!(!peppol.allowed_bindings.contains(&MepBinding::Pull));
///
/// let generic = ProfileRules::default();
/// assert!(generic.allowed_bindings.contains(&MepBinding::Pull));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRules {
    /// Profile identifier.
    pub id: ProfileId,
    /// Name used in violation messages.
    pub display_name: String,
    /// Permitted message exchange patterns.
    pub allowed_meps: Vec<Mep>,
    /// Permitted MEP bindings.
    pub allowed_bindings: Vec<MepBinding>,
    /// Address schemes considered standard, compared case-insensitively.
    pub allowed_address_schemes: Vec<String>,
    /// Other schemes are errors rather than advisories.
    pub address_scheme_is_fatal: bool,
    /// Every leg protocol must carry an address.
    pub require_address: bool,
    /// Required SOAP version.
    pub soap_version: Option<SoapVersion>,
    /// Every leg must carry a security block.
    pub require_security: bool,
    /// Every leg must carry a signing certificate.
    pub require_signature_certificate: bool,
    /// Mandated signature algorithm.
    pub signature_algorithm: Option<SignatureAlgorithm>,
    /// Mandated signature digest algorithm.
    pub signature_digest_algorithm: Option<DigestAlgorithm>,
    /// Mandated content encryption algorithm.
    pub encryption_algorithm: Option<EncryptionAlgorithm>,
    /// Mandated WS-Security version.
    pub wss_version: Option<WssVersion>,
    /// Requirement on `PModeAuthorize`.
    pub pmode_authorize: FlagRequirement,
    /// Only reply pattern accepted when receipts are sent.
    pub receipt_reply_pattern: Option<ReceiptReplyPattern>,
    /// Requirement on `SendReceiptNonRepudiation`.
    pub send_receipt_non_repudiation: FlagRequirement,
    /// Error handling rules.
    pub error_handling: ErrorHandlingRules,
    /// Services accepted in leg business information and user messages.
    pub allowed_services: Vec<String>,
    /// Message properties every user message must carry.
    pub required_message_properties: Vec<String>,
    /// Party identifier types accepted on user messages.
    pub allowed_party_id_types: Vec<String>,
    /// `From` and `To` must carry exactly one party identifier each.
    pub single_party_id: bool,
    /// Reception awareness rules.
    pub reception_awareness: ReceptionAwarenessRules,
}

impl Default for ProfileRules {
    fn default() -> Self {
        Self {
            id: ProfileId::generic(),
            display_name: "generic".to_owned(),
            allowed_meps: vec![Mep::OneWay, Mep::TwoWay],
            allowed_bindings: MepBinding::ALL.to_vec(),
            allowed_address_schemes: vec!["http".to_owned(), "https".to_owned()],
            address_scheme_is_fatal: false,
            require_address: false,
            soap_version: None,
            require_security: false,
            require_signature_certificate: false,
            signature_algorithm: None,
            signature_digest_algorithm: None,
            encryption_algorithm: None,
            wss_version: None,
            pmode_authorize: FlagRequirement::Unchecked,
            receipt_reply_pattern: None,
            send_receipt_non_repudiation: FlagRequirement::Unchecked,
            error_handling: ErrorHandlingRules::default(),
            allowed_services: Vec::new(),
            required_message_properties: Vec::new(),
            allowed_party_id_types: Vec::new(),
            single_party_id: false,
            reception_awareness: ReceptionAwarenessRules::default(),
        }
    }
}

impl ProfileRules {
    /// Rules of the Peppol AS4 profile.
    #[must_use]
    pub fn peppol() -> Self {
        Self {
            id: ProfileId::peppol(),
            display_name: "Peppol".to_owned(),
            allowed_meps: vec![Mep::OneWay, Mep::TwoWay],
            allowed_bindings: vec![MepBinding::Push, MepBinding::PushPush],
            soap_version: Some(SoapVersion::Soap12),
            require_security: true,
            signature_algorithm: Some(SignatureAlgorithm::RsaSha256),
            signature_digest_algorithm: Some(DigestAlgorithm::Sha256),
            encryption_algorithm: Some(EncryptionAlgorithm::Aes128Gcm),
            wss_version: Some(WssVersion::Wss111),
            pmode_authorize: FlagRequirement::Equals(false),
            receipt_reply_pattern: Some(ReceiptReplyPattern::Response),
            error_handling: ErrorHandlingRules::all_equal(true),
            required_message_properties: vec![
                PEPPOL_ORIGINAL_SENDER.to_owned(),
                PEPPOL_FINAL_RECIPIENT.to_owned(),
            ],
            allowed_party_id_types: vec![PEPPOL_PARTY_ID_TYPE.to_owned()],
            single_party_id: true,
            ..Self::default()
        }
    }

    /// Rules of the BDEW AS4 profile for the German energy market.
    #[must_use]
    pub fn bdew() -> Self {
        Self {
            id: ProfileId::bdew(),
            display_name: "BDEW".to_owned(),
            allowed_meps: vec![Mep::OneWay],
            allowed_bindings: vec![MepBinding::Push],
            allowed_address_schemes: vec!["https".to_owned()],
            address_scheme_is_fatal: true,
            require_address: true,
            soap_version: Some(SoapVersion::Soap12),
            require_security: true,
            signature_algorithm: Some(SignatureAlgorithm::EcdsaSha256),
            signature_digest_algorithm: Some(DigestAlgorithm::Sha256),
            encryption_algorithm: Some(EncryptionAlgorithm::Aes128Gcm),
            wss_version: Some(WssVersion::Wss111),
            pmode_authorize: FlagRequirement::Equals(false),
            receipt_reply_pattern: Some(ReceiptReplyPattern::Response),
            send_receipt_non_repudiation: FlagRequirement::Equals(true),
            error_handling: ErrorHandlingRules::all_equal(true),
            allowed_services: BDEW_SERVICES.iter().map(|s| (*s).to_owned()).collect(),
            allowed_party_id_types: BDEW_PARTY_ID_TYPES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            single_party_id: true,
            reception_awareness: ReceptionAwarenessRules {
                required: true,
                enabled: FlagRequirement::Equals(true),
                retry: FlagRequirement::Defined,
                duplicate_detection: FlagRequirement::Equals(true),
            },
            ..Self::default()
        }
    }

    /// Rules of the CEF eDelivery AS4 profile.
    #[must_use]
    pub fn cef() -> Self {
        Self {
            id: ProfileId::cef(),
            display_name: "CEF".to_owned(),
            allowed_meps: vec![Mep::OneWay, Mep::TwoWay],
            allowed_bindings: vec![MepBinding::Push, MepBinding::PushPush],
            soap_version: Some(SoapVersion::Soap12),
            require_security: true,
            signature_algorithm: Some(SignatureAlgorithm::RsaSha256),
            signature_digest_algorithm: Some(DigestAlgorithm::Sha256),
            encryption_algorithm: Some(EncryptionAlgorithm::Aes128Gcm),
            wss_version: Some(WssVersion::Wss111),
            pmode_authorize: FlagRequirement::Equals(false),
            receipt_reply_pattern: Some(ReceiptReplyPattern::Response),
            error_handling: ErrorHandlingRules::all_defined(),
            single_party_id: true,
            ..Self::default()
        }
    }

    /// Returns the built-in rule table registered under `id`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use as4_pmode::pmode::domain::ProfileId;
    /// use as4_pmode::pmode::validation::ProfileRules;
    ///
    /// let rules = ProfileRules::builtin(&ProfileId::new("BDEW").expect("id"));
    /// assert_eq!(rules.map(|r| r.display_name), Some("BDEW".to_owned()));
    /// ```
    #[must_use]
    pub fn builtin(id: &ProfileId) -> Option<Self> {
        match id.as_str() {
            "peppol" => Some(Self::peppol()),
            "bdew" => Some(Self::bdew()),
            "cef" => Some(Self::cef()),
            "generic" => Some(Self::default()),
            _ => None,
        }
    }

    /// Parses a rule table from JSON. Omitted fields take the permissive
    /// [`ProfileRules::default`] values.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builds a one-way push PMode that satisfies these rules.
    ///
    /// The PMode is returned in memory only; registering or persisting it is
    /// the caller's decision.
    ///
    /// # Errors
    ///
    /// Returns [`PModeDomainError`] when a party identifier or the address is
    /// blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use as4_pmode::pmode::adapters::DynamicPModeIdProvider;
    /// use as4_pmode::pmode::domain::{ErrorList, Mep};
    /// use as4_pmode::pmode::ports::ProfileValidator;
    /// use as4_pmode::pmode::validation::{ProfileCompatibilityValidator, ProfileRules};
    ///
    /// let rules = ProfileRules::peppol();
    /// let pmode = rules
    ///     .create_pmode(
    ///         "TestInitiator",
    ///         "TestResponder",
    ///         "http://localhost:8080",
    ///         &DynamicPModeIdProvider,
    ///     )
    ///     .expect("valid inputs");
    /// assert_eq!(pmode.mep(), Mep::OneWay);
    ///
    /// let mut errors = ErrorList::new();
    /// ProfileCompatibilityValidator::new(rules).validate_pmode(&pmode, &mut errors);
    /// assert!(errors.is_empty(), "{errors}");
    /// ```
    pub fn create_pmode(
        &self,
        initiator_id: &str,
        responder_id: &str,
        responder_address: &str,
        id_provider: &dyn PModeIdProvider,
    ) -> Result<PMode, PModeDomainError> {
        let (initiator, responder, leg) =
            self.generated_parts(initiator_id, responder_id, responder_address)?;
        let id = id_provider.pmode_id(&initiator, &responder);
        Ok(
            PMode::new(id, initiator, responder, Mep::OneWay, MepBinding::Push, leg)
                .with_agreement(DEFAULT_AGREEMENT_ID)
                .with_reception_awareness(self.generated_reception_awareness()),
        )
    }

    /// Builds a two-way push-and-push PMode with symmetric legs.
    ///
    /// # Errors
    ///
    /// Returns [`PModeDomainError::UnsupportedExchange`] when the profile
    /// does not allow two-way push-and-push, or the same errors as
    /// [`ProfileRules::create_pmode`].
    pub fn create_two_way_pmode(
        &self,
        initiator_id: &str,
        responder_id: &str,
        responder_address: &str,
        id_provider: &dyn PModeIdProvider,
    ) -> Result<PMode, PModeDomainError> {
        if !self.allowed_meps.contains(&Mep::TwoWay)
            || !self.allowed_bindings.contains(&MepBinding::PushPush)
        {
            return Err(PModeDomainError::UnsupportedExchange {
                profile: self.id.to_string(),
                mep: Mep::TwoWay.to_string(),
            });
        }
        let (initiator, responder, leg) =
            self.generated_parts(initiator_id, responder_id, responder_address)?;
        let id = id_provider.pmode_id(&initiator, &responder);
        Ok(PMode::new(
            id,
            initiator,
            responder,
            Mep::TwoWay,
            MepBinding::PushPush,
            leg.clone(),
        )
        .with_leg2(leg)
        .with_agreement(DEFAULT_AGREEMENT_ID)
        .with_reception_awareness(self.generated_reception_awareness()))
    }

    fn generated_parts(
        &self,
        initiator_id: &str,
        responder_id: &str,
        responder_address: &str,
    ) -> Result<(PModeParty, PModeParty, PModeLeg), PModeDomainError> {
        let initiator = PModeParty::new(initiator_id, DEFAULT_INITIATOR_ROLE)
            .map_err(|_| PModeDomainError::EmptyPartyId("initiator"))?;
        let responder = PModeParty::new(responder_id, DEFAULT_RESPONDER_ROLE)
            .map_err(|_| PModeDomainError::EmptyPartyId("responder"))?;
        let address = responder_address.trim();
        if address.is_empty() {
            return Err(PModeDomainError::EmptyAddress);
        }
        Ok((initiator, responder, self.generated_leg(address)))
    }

    fn generated_leg(&self, address: &str) -> PModeLeg {
        let protocol = PModeLegProtocol::new(
            Some(address.to_owned()),
            self.soap_version.unwrap_or_default(),
        );
        let business_information = PModeLegBusinessInformation::new(
            self.allowed_services.first().cloned(),
            Some(DEFAULT_ACTION.to_owned()),
            Some(DEFAULT_MPC.to_owned()),
        );
        let rules = &self.error_handling;
        let error_handling = PModeLegErrorHandling::new(
            rules.report_as_response.value_or(true),
            rules.report_process_error_notify_consumer.value_or(true),
            rules.report_process_error_notify_producer.value_or(true),
            rules.report_delivery_failures_notify_producer.value_or(true),
        );
        let encryption_algorithm = self
            .encryption_algorithm
            .unwrap_or(EncryptionAlgorithm::Aes128Gcm);
        let security = PModeLegSecurity {
            wss_version: Some(self.wss_version.unwrap_or(WssVersion::Wss111)),
            x509_signature_certificate: None,
            x509_signature_algorithm: Some(
                self.signature_algorithm
                    .unwrap_or(SignatureAlgorithm::RsaSha256),
            ),
            x509_signature_hash_function: Some(
                self.signature_digest_algorithm
                    .unwrap_or(DigestAlgorithm::Sha256),
            ),
            x509_encryption_certificate: None,
            x509_encryption_algorithm: Some(encryption_algorithm),
            x509_encryption_minimum_strength: Some(encryption_algorithm.key_bits()),
            pmode_authorize: self.pmode_authorize.value_or(false),
            send_receipt: TriState::True,
            send_receipt_non_repudiation: self.send_receipt_non_repudiation.value_or(true),
            send_receipt_reply_pattern: Some(
                self.receipt_reply_pattern
                    .unwrap_or(ReceiptReplyPattern::Response),
            ),
        };
        PModeLeg::new(
            Some(protocol),
            Some(business_information),
            Some(error_handling),
            None,
            Some(security),
        )
    }

    fn generated_reception_awareness(&self) -> PModeReceptionAwareness {
        let rules = &self.reception_awareness;
        PModeReceptionAwareness {
            enabled: rules.enabled.value_or(true),
            retry: rules.retry.value_or(true),
            duplicate_detection: rules.duplicate_detection.value_or(true),
            ..PModeReceptionAwareness::default()
        }
    }
}
