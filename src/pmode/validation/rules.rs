//! Individual profile rule implementations.
//!
//! Each rule is a pure function that inspects one aspect of a PMode or a
//! message header and appends its findings to the caller's [`ErrorList`].
//! Rules never return early for the whole input: an absent subject is
//! reported once and only its own sub-tree is skipped.

use std::fmt;

use tracing::warn;

use crate::pmode::{
    domain::{
        ErrorList, IssueCategory, MessageInfo, PMode, PModeLeg, PartyBlock, SignalKind,
        SignalMessageHeader, TriState, UserMessageHeader, ValidationIssue,
    },
    validation::profile::{FlagRequirement, ProfileRules},
};

fn leg_label(number: u8) -> String {
    format!("Leg {number}")
}

fn leg_field(number: u8, path: &str) -> String {
    format!("leg{number}.{path}")
}

const fn title(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_advisory(errors: &mut ErrorList, rules: &ProfileRules, field: String, text: String) {
    if rules.address_scheme_is_fatal {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            field,
            text,
        ));
    } else {
        warn!(profile = %rules.id, field = %field, issue = %text, "advisory PMode finding");
        errors.push(ValidationIssue::warning(field, text));
    }
}

/// Checks a [`TriState`] flag against its requirement.
///
/// An undefined flag is reported as a mandatory parameter; a defined flag
/// with the wrong value is reported with the expected value. `prefix` is
/// prepended to the rendered text, e.g. `"Leg 1: "`.
pub fn check_flag(
    errors: &mut ErrorList,
    field: String,
    prefix: &str,
    name: &str,
    value: TriState,
    requirement: FlagRequirement,
) {
    let expected = match requirement {
        FlagRequirement::Unchecked => return,
        FlagRequirement::Defined => None,
        FlagRequirement::Equals(expected) => Some(expected),
    };
    let Some(actual) = value.as_bool() else {
        errors.push(ValidationIssue::error(
            IssueCategory::MandatoryUnset,
            field,
            format!("{prefix}{name} is a mandatory PMode parameter"),
        ));
        return;
    };
    if let Some(wanted) = expected.filter(|wanted| *wanted != actual) {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            field,
            format!(
                "{prefix}PMode {name} has to be {} (expected {wanted}, found {actual})",
                title(wanted)
            ),
        ));
    }
}

/// Checks that the PMode's MEP is permitted by the profile.
pub fn check_mep(pmode: &PMode, rules: &ProfileRules, errors: &mut ErrorList) {
    if !rules.allowed_meps.contains(&pmode.mep()) {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            "mep",
            format!(
                "PMode MEP {} is not allowed by the {} profile (allowed: {})",
                pmode.mep(),
                rules.display_name,
                join(&rules.allowed_meps)
            ),
        ));
    }
}

/// Checks that the MEP binding is permitted and fits the MEP.
pub fn check_mep_binding(pmode: &PMode, rules: &ProfileRules, errors: &mut ErrorList) {
    let binding = pmode.mep_binding();
    if !rules.allowed_bindings.contains(&binding) {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            "mep_binding",
            format!(
                "PMode MEP binding {binding} is not allowed by the {} profile (allowed: {})",
                rules.display_name,
                join(&rules.allowed_bindings)
            ),
        ));
    }
    if binding.is_two_way() != pmode.mep().is_two_way() {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            "mep_binding",
            format!(
                "PMode MEP binding {binding} cannot be used with MEP {}",
                pmode.mep()
            ),
        ));
    }
}

/// Checks that leg 1 exists and that leg 2 exists exactly when the MEP is
/// two-way.
pub fn check_legs_present(pmode: &PMode, errors: &mut ErrorList) {
    if pmode.leg1().is_none() {
        errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            "leg1",
            "PMode is missing Leg 1",
        ));
    }
    match (pmode.mep().is_two_way(), pmode.leg2().is_some()) {
        (true, false) => errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            "leg2",
            "PMode is missing Leg 2 and is specified as two-way",
        )),
        (false, true) => errors.push(ValidationIssue::error(
            IssueCategory::Cardinality,
            "leg2",
            "PMode has a Leg 2 but is specified as one-way",
        )),
        _ => {}
    }
}

/// Checks the protocol block of a leg: presence, address scheme and SOAP
/// version.
pub fn check_protocol(number: u8, leg: &PModeLeg, rules: &ProfileRules, errors: &mut ErrorList) {
    let label = leg_label(number);
    let Some(protocol) = leg.protocol.as_ref() else {
        errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            leg_field(number, "protocol"),
            format!("{label}: Protocol is missing"),
        ));
        return;
    };

    let address_field = leg_field(number, "protocol.address");
    match (protocol.address.as_deref(), protocol.address_scheme()) {
        (None, _) => {
            if rules.require_address {
                errors.push(ValidationIssue::error(
                    IssueCategory::MissingStructure,
                    address_field,
                    format!("{label}: Protocol address is missing"),
                ));
            }
        }
        (Some(address), None) => push_advisory(
            errors,
            rules,
            address_field,
            format!("{label} address has no recognisable AddressProtocol: {address}"),
        ),
        (Some(_), Some(scheme)) => {
            let known = rules.allowed_address_schemes.is_empty()
                || rules
                    .allowed_address_schemes
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(scheme));
            if !known {
                push_advisory(
                    errors,
                    rules,
                    address_field,
                    format!("{label} uses non-standard AddressProtocol: {scheme}"),
                );
            }
        }
    }

    if let Some(required) = rules
        .soap_version
        .filter(|required| *required != protocol.soap_version)
    {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            leg_field(number, "protocol.soap_version"),
            format!(
                "{label}: SOAP version {} is not allowed, only {required} is supported",
                protocol.soap_version
            ),
        ));
    }
}

/// Checks the business information of a leg against the service whitelist.
pub fn check_business_information(
    number: u8,
    leg: &PModeLeg,
    rules: &ProfileRules,
    errors: &mut ErrorList,
) {
    let Some(service) = leg
        .business_information
        .as_ref()
        .and_then(|info| info.service.as_deref())
    else {
        return;
    };
    if !rules.allowed_services.is_empty() && !rules.allowed_services.iter().any(|s| s == service) {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            leg_field(number, "business_information.service"),
            format!(
                "{}: Service {service} is not allowed by the {} profile",
                leg_label(number),
                rules.display_name
            ),
        ));
    }
}

fn check_algorithm<T>(
    errors: &mut ErrorList,
    field: String,
    subject: &str,
    expected: Option<T>,
    actual: Option<T>,
) where
    T: Copy + PartialEq + fmt::Display,
{
    let Some(wanted) = expected else {
        return;
    };
    match actual {
        None => errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            field,
            format!("{subject} is missing (expected '{wanted}')"),
        )),
        Some(found) if found != wanted => errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            field,
            format!("{subject} must be '{wanted}' instead of '{found}'"),
        )),
        Some(_) => {}
    }
}

/// Checks the security block of a leg.
pub fn check_security(number: u8, leg: &PModeLeg, rules: &ProfileRules, errors: &mut ErrorList) {
    let label = leg_label(number);
    let Some(security) = leg.security.as_ref() else {
        if rules.require_security {
            errors.push(ValidationIssue::error(
                IssueCategory::MissingStructure,
                leg_field(number, "security"),
                format!("{label}: Security is missing"),
            ));
        }
        return;
    };

    let certificate_missing = security
        .x509_signature_certificate
        .as_deref()
        .is_none_or(|certificate| certificate.trim().is_empty());
    if rules.require_signature_certificate && certificate_missing {
        errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            leg_field(number, "security.x509_signature_certificate"),
            format!("{label}: signature certificate is missing"),
        ));
    }

    check_algorithm(
        errors,
        leg_field(number, "security.x509_signature_algorithm"),
        &format!("{label}: signature algorithm"),
        rules.signature_algorithm,
        security.x509_signature_algorithm,
    );
    check_algorithm(
        errors,
        leg_field(number, "security.x509_signature_hash_function"),
        &format!("{label}: signature hash function"),
        rules.signature_digest_algorithm,
        security.x509_signature_hash_function,
    );
    check_algorithm(
        errors,
        leg_field(number, "security.x509_encryption_algorithm"),
        &format!("{label}: encryption algorithm"),
        rules.encryption_algorithm,
        security.x509_encryption_algorithm,
    );
    check_encryption_strength(number, leg, errors);
    check_wss_version(number, leg, rules, errors);

    let prefix = format!("{label}: ");
    check_flag(
        errors,
        leg_field(number, "security.pmode_authorize"),
        &prefix,
        "PModeAuthorize",
        security.pmode_authorize,
        rules.pmode_authorize,
    );
    check_flag(
        errors,
        leg_field(number, "security.send_receipt_non_repudiation"),
        &prefix,
        "SendReceiptNonRepudiation",
        security.send_receipt_non_repudiation,
        rules.send_receipt_non_repudiation,
    );
    check_receipt_reply_pattern(number, leg, rules, errors);
}

fn check_encryption_strength(number: u8, leg: &PModeLeg, errors: &mut ErrorList) {
    let Some(security) = leg.security.as_ref() else {
        return;
    };
    let (Some(algorithm), Some(minimum)) = (
        security.x509_encryption_algorithm,
        security.x509_encryption_minimum_strength,
    ) else {
        return;
    };
    if algorithm.key_bits() < minimum {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            leg_field(number, "security.x509_encryption_minimum_strength"),
            format!(
                "{}: encryption algorithm '{algorithm}' has {} bit keys, below the minimum strength of {minimum}",
                leg_label(number),
                algorithm.key_bits()
            ),
        ));
    }
}

fn check_wss_version(number: u8, leg: &PModeLeg, rules: &ProfileRules, errors: &mut ErrorList) {
    let Some(expected) = rules.wss_version else {
        return;
    };
    let Some(actual) = leg.security.as_ref().and_then(|security| security.wss_version) else {
        return;
    };
    if actual != expected {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            leg_field(number, "security.wss_version"),
            format!(
                "{}: Wrong WSS Version {actual}, only {expected} is allowed",
                leg_label(number)
            ),
        ));
    }
}

fn check_receipt_reply_pattern(
    number: u8,
    leg: &PModeLeg,
    rules: &ProfileRules,
    errors: &mut ErrorList,
) {
    let Some(security) = leg.security.as_ref() else {
        return;
    };
    if !security.send_receipt.is_true() {
        return;
    }
    let Some(expected) = rules.receipt_reply_pattern else {
        return;
    };
    let found = match security.send_receipt_reply_pattern {
        Some(actual) if actual == expected => return,
        Some(actual) => actual.as_str(),
        None => "none",
    };
    errors.push(ValidationIssue::error(
        IssueCategory::ValueMismatch,
        leg_field(number, "security.send_receipt_reply_pattern"),
        format!(
            "{}: Only {expected} is allowed as pattern, found {found}",
            leg_label(number)
        ),
    ));
}

/// Checks the error handling block of a leg.
pub fn check_error_handling(
    number: u8,
    leg: &PModeLeg,
    rules: &ProfileRules,
    errors: &mut ErrorList,
) {
    let label = leg_label(number);
    let requirements = &rules.error_handling;
    let Some(handling) = leg.error_handling.as_ref() else {
        if requirements.required {
            errors.push(ValidationIssue::error(
                IssueCategory::MissingStructure,
                leg_field(number, "error_handling"),
                format!("{label}: No ErrorHandling Parameter present but they are mandatory"),
            ));
        }
        return;
    };

    let prefix = format!("{label}: ");
    let flags = [
        (
            "report_as_response",
            "ReportAsResponse",
            handling.report_as_response,
            requirements.report_as_response,
        ),
        (
            "report_process_error_notify_consumer",
            "ReportProcessErrorNotifyConsumer",
            handling.report_process_error_notify_consumer,
            requirements.report_process_error_notify_consumer,
        ),
        (
            "report_process_error_notify_producer",
            "ReportProcessErrorNotifyProducer",
            handling.report_process_error_notify_producer,
            requirements.report_process_error_notify_producer,
        ),
        (
            "report_delivery_failures_notify_producer",
            "ReportDeliveryFailuresNotifyProducer",
            handling.report_delivery_failures_notify_producer,
            requirements.report_delivery_failures_notify_producer,
        ),
    ];
    for (path, name, value, requirement) in flags {
        check_flag(
            errors,
            leg_field(number, &format!("error_handling.{path}")),
            &prefix,
            name,
            value,
            requirement,
        );
    }
}

/// Checks the PMode-wide reception awareness block.
///
/// Retry count and interval are not inspected.
pub fn check_reception_awareness(pmode: &PMode, rules: &ProfileRules, errors: &mut ErrorList) {
    let requirements = &rules.reception_awareness;
    let Some(awareness) = pmode.reception_awareness() else {
        if requirements.required {
            errors.push(ValidationIssue::error(
                IssueCategory::MissingStructure,
                "reception_awareness",
                "PMode ReceptionAwareness is missing",
            ));
        }
        return;
    };
    check_flag(
        errors,
        "reception_awareness.enabled".to_owned(),
        "",
        "ReceptionAwareness",
        awareness.enabled,
        requirements.enabled,
    );
    check_flag(
        errors,
        "reception_awareness.retry".to_owned(),
        "",
        "ReceptionAwarenessRetry",
        awareness.retry,
        requirements.retry,
    );
    check_flag(
        errors,
        "reception_awareness.duplicate_detection".to_owned(),
        "",
        "ReceptionAwarenessDuplicateDetection",
        awareness.duplicate_detection,
        requirements.duplicate_detection,
    );
}

/// Checks that a `MessageInfo` block with a message identifier is present.
pub fn check_message_info(message_info: Option<&MessageInfo>, errors: &mut ErrorList) {
    let Some(info) = message_info else {
        errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            "message_info",
            "MessageInfo is missing",
        ));
        return;
    };
    if info.non_blank_message_id().is_none() {
        errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            "message_info.message_id",
            "MessageInfo/MessageID is missing",
        ));
    }
}

fn check_party_block(
    side: &str,
    block: Option<&PartyBlock>,
    rules: &ProfileRules,
    errors: &mut ErrorList,
) {
    let field = format!("party_info.{}", side.to_ascii_lowercase());
    let Some(party) = block else {
        errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            field,
            format!("PartyInfo/{side} is missing"),
        ));
        return;
    };
    let count = party.party_ids.len();
    if rules.single_party_id && count != 1 {
        errors.push(ValidationIssue::error(
            IssueCategory::Cardinality,
            format!("{field}.party_ids"),
            format!("PartyInfo/{side} contains {count} PartyIDs; Only 1 PartyID is allowed"),
        ));
    }
    if rules.allowed_party_id_types.is_empty() {
        return;
    }
    for party_id in &party.party_ids {
        match party_id.id_type.as_deref() {
            None => errors.push(ValidationIssue::error(
                IssueCategory::MissingStructure,
                format!("{field}.party_ids.type"),
                format!(
                    "PartyInfo/{side} PartyID {} has no type; the {} profile requires one of: {}",
                    party_id.value,
                    rules.display_name,
                    join(&rules.allowed_party_id_types)
                ),
            )),
            Some(id_type) if !rules.allowed_party_id_types.iter().any(|t| t == id_type) => {
                errors.push(ValidationIssue::error(
                    IssueCategory::ValueMismatch,
                    format!("{field}.party_ids.type"),
                    format!(
                        "PartyInfo/{side} PartyID type {id_type} is not allowed by the {} profile",
                        rules.display_name
                    ),
                ));
            }
            Some(_) => {}
        }
    }
}

/// Checks the `PartyInfo` block: presence of `From` and `To`, party
/// identifier cardinality and identifier types.
pub fn check_party_info(header: &UserMessageHeader, rules: &ProfileRules, errors: &mut ErrorList) {
    let Some(party_info) = header.party_info.as_ref() else {
        errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            "party_info",
            "PartyInfo is missing",
        ));
        return;
    };
    check_party_block("From", party_info.from.as_ref(), rules, errors);
    check_party_block("To", party_info.to.as_ref(), rules, errors);
}

/// Checks that every mandatory message property is present.
pub fn check_message_properties(
    header: &UserMessageHeader,
    rules: &ProfileRules,
    errors: &mut ErrorList,
) {
    for name in &rules.required_message_properties {
        if header.property(name).is_none() {
            errors.push(ValidationIssue::error(
                IssueCategory::MissingStructure,
                format!("message_properties.{name}"),
                format!("MessageProperties is missing the mandatory property {name}"),
            ));
        }
    }
}

/// Checks the user message service against the service whitelist.
pub fn check_collaboration_service(
    header: &UserMessageHeader,
    rules: &ProfileRules,
    errors: &mut ErrorList,
) {
    if rules.allowed_services.is_empty() {
        return;
    }
    let Some(service) = header
        .collaboration_info
        .as_ref()
        .and_then(|info| info.service.as_deref())
    else {
        return;
    };
    if !rules.allowed_services.iter().any(|s| s == service) {
        errors.push(ValidationIssue::error(
            IssueCategory::ValueMismatch,
            "collaboration_info.service",
            format!(
                "CollaborationInfo/Service {service} is not allowed by the {} profile",
                rules.display_name
            ),
        ));
    }
}

/// Checks the signal carried by a signal message.
pub fn check_signal(header: &SignalMessageHeader, rules: &ProfileRules, errors: &mut ErrorList) {
    match header.signal.as_ref() {
        None => errors.push(ValidationIssue::error(
            IssueCategory::MissingStructure,
            "signal",
            "SignalMessage has no signal content",
        )),
        Some(SignalKind::PullRequest { .. }) => {
            if !rules
                .allowed_bindings
                .iter()
                .any(|binding| binding.involves_pull())
            {
                errors.push(ValidationIssue::error(
                    IssueCategory::ValueMismatch,
                    "signal",
                    format!(
                        "PullRequest signals are not supported by the {} profile",
                        rules.display_name
                    ),
                ));
            }
        }
        Some(SignalKind::Receipt { non_repudiation }) => {
            if rules.send_receipt_non_repudiation == FlagRequirement::Equals(true)
                && !non_repudiation
            {
                errors.push(ValidationIssue::error(
                    IssueCategory::ValueMismatch,
                    "signal.non_repudiation",
                    "Receipt must carry non-repudiation information",
                ));
            }
        }
        Some(SignalKind::Error { error_code }) => {
            if error_code.trim().is_empty() {
                errors.push(ValidationIssue::error(
                    IssueCategory::MissingStructure,
                    "signal.error_code",
                    "Error signal has no error code",
                ));
            }
        }
    }
}
