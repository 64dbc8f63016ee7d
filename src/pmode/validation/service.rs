//! Validation service implementation.
//!
//! Provides the rule-table driven implementation of the `ProfileValidator`
//! port.

use tracing::debug;

use crate::pmode::{
    domain::{ErrorList, PMode, ProfileId, SignalMessageHeader, UserMessageHeader},
    ports::ProfileValidator,
    validation::{profile::ProfileRules, rules},
};

/// Profile validator that evaluates one [`ProfileRules`] table.
///
/// Every rule runs on every call; findings accumulate in the caller's list.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::domain::{ErrorList, MessageInfo, SignalMessageHeader};
/// use as4_pmode::pmode::ports::ProfileValidator;
/// use as4_pmode::pmode::validation::ProfileCompatibilityValidator;
///
/// let validator = ProfileCompatibilityValidator::peppol();
/// let header = SignalMessageHeader {
///     message_info: Some(MessageInfo::default()),
///     signal: None,
/// };
/// let mut errors = ErrorList::new();
/// validator.validate_signal_message(&header, &mut errors);
/// assert!(errors.contains_any(|issue| issue.text().contains("MessageID is missing")));
/// ```
#[derive(Debug, Clone)]
pub struct ProfileCompatibilityValidator {
    rules: ProfileRules,
}

impl ProfileCompatibilityValidator {
    /// Creates a validator for a custom rule table.
    #[must_use]
    pub const fn new(rules: ProfileRules) -> Self {
        Self { rules }
    }

    /// Creates a validator for the Peppol profile.
    #[must_use]
    pub fn peppol() -> Self {
        Self::new(ProfileRules::peppol())
    }

    /// Creates a validator for the BDEW profile.
    #[must_use]
    pub fn bdew() -> Self {
        Self::new(ProfileRules::bdew())
    }

    /// Creates a validator for the CEF eDelivery profile.
    #[must_use]
    pub fn cef() -> Self {
        Self::new(ProfileRules::cef())
    }

    /// Returns the rule table.
    #[must_use]
    pub const fn rules(&self) -> &ProfileRules {
        &self.rules
    }
}

impl Default for ProfileCompatibilityValidator {
    fn default() -> Self {
        Self::new(ProfileRules::default())
    }
}

impl ProfileValidator for ProfileCompatibilityValidator {
    fn profile_id(&self) -> &ProfileId {
        &self.rules.id
    }

    fn validate_pmode(&self, pmode: &PMode, errors: &mut ErrorList) {
        let before = errors.len();
        debug!(profile = %self.rules.id, pmode_id = %pmode.id(), "validating PMode");

        rules::check_mep(pmode, &self.rules, errors);
        rules::check_mep_binding(pmode, &self.rules, errors);
        rules::check_legs_present(pmode, errors);
        for (number, leg) in pmode.legs() {
            rules::check_protocol(number, leg, &self.rules, errors);
            rules::check_business_information(number, leg, &self.rules, errors);
            rules::check_security(number, leg, &self.rules, errors);
            rules::check_error_handling(number, leg, &self.rules, errors);
        }
        rules::check_reception_awareness(pmode, &self.rules, errors);

        debug!(
            profile = %self.rules.id,
            pmode_id = %pmode.id(),
            findings = errors.len().saturating_sub(before),
            "PMode validation finished"
        );
    }

    fn validate_user_message(&self, header: &UserMessageHeader, errors: &mut ErrorList) {
        let before = errors.len();
        rules::check_message_info(header.message_info.as_ref(), errors);
        rules::check_party_info(header, &self.rules, errors);
        rules::check_message_properties(header, &self.rules, errors);
        rules::check_collaboration_service(header, &self.rules, errors);
        debug!(
            profile = %self.rules.id,
            findings = errors.len().saturating_sub(before),
            "user message validation finished"
        );
    }

    fn validate_signal_message(&self, header: &SignalMessageHeader, errors: &mut ErrorList) {
        let before = errors.len();
        rules::check_message_info(header.message_info.as_ref(), errors);
        rules::check_signal(header, &self.rules, errors);
        debug!(
            profile = %self.rules.id,
            findings = errors.len().saturating_sub(before),
            "signal message validation finished"
        );
    }
}
