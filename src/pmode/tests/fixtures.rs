//! Shared fixtures and helpers for PMode tests.

use crate::pmode::{
    adapters::DynamicPModeIdProvider,
    domain::{
        DEFAULT_INITIATOR_ROLE, DEFAULT_RESPONDER_ROLE, ErrorList, MessageInfo,
        MessageProperty, PMode, PModeLeg, PModeLegProtocol, PModeParty, PartyBlock, PartyId,
        PartyInfo, UserMessageHeader,
    },
    validation::{
        ProfileCompatibilityValidator, ProfileRules,
        profile::{PEPPOL_FINAL_RECIPIENT, PEPPOL_ORIGINAL_SENDER, PEPPOL_PARTY_ID_TYPE},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

pub const TEST_INITIATOR: &str = "TestInitiator";
pub const TEST_RESPONDER: &str = "TestResponder";
pub const TEST_ADDRESS: &str = "http://localhost:8080";
pub const TEST_HTTPS_ADDRESS: &str = "https://localhost:8443/as4";

#[fixture]
pub fn errors() -> ErrorList {
    ErrorList::new()
}

#[fixture]
pub fn peppol_validator() -> ProfileCompatibilityValidator {
    ProfileCompatibilityValidator::peppol()
}

/// The factory-built Peppol PMode the Peppol tests start from.
#[fixture]
pub fn peppol_pmode() -> PMode {
    ProfileRules::peppol()
        .create_pmode(
            TEST_INITIATOR,
            TEST_RESPONDER,
            TEST_ADDRESS,
            &DynamicPModeIdProvider,
        )
        .expect("Peppol factory inputs are valid")
}

#[fixture]
pub fn initiator() -> PModeParty {
    PModeParty::new(TEST_INITIATOR, DEFAULT_INITIATOR_ROLE).expect("valid initiator")
}

#[fixture]
pub fn responder() -> PModeParty {
    PModeParty::new(TEST_RESPONDER, DEFAULT_RESPONDER_ROLE).expect("valid responder")
}

/// Builds a profile PMode for the given rule table.
pub fn profile_pmode(rules: &ProfileRules, address: &str) -> PMode {
    rules
        .create_pmode(TEST_INITIATOR, TEST_RESPONDER, address, &DynamicPModeIdProvider)
        .expect("factory inputs are valid")
}

/// A leg with only a protocol block pointing at `address`.
pub fn protocol_only_leg(address: &str) -> PModeLeg {
    PModeLeg::with_protocol_only(PModeLegProtocol::with_default_soap_version(address))
}

/// Replaces leg 1 of `pmode` with a leg that keeps only the protocol and the
/// security block of the original leg.
pub fn keep_security_only(pmode: &mut PMode, address: &str) {
    let security = pmode.leg1().and_then(|leg| leg.security.clone());
    let mut leg = protocol_only_leg(address);
    leg.security = security;
    pmode.set_leg1(Some(leg));
}

/// Returns `true` when any finding's text contains `needle`.
pub fn mentions(errors: &ErrorList, needle: &str) -> bool {
    errors.contains_any(|issue| issue.text().contains(needle))
}

/// A user message header that satisfies the Peppol message rules.
pub fn peppol_user_message() -> UserMessageHeader {
    let party = |value: &str| {
        PartyBlock::single(
            PartyId::new(PEPPOL_PARTY_ID_TYPE, value),
            DEFAULT_INITIATOR_ROLE,
        )
    };
    UserMessageHeader {
        message_info: Some(MessageInfo::generate(&DefaultClock)),
        party_info: Some(PartyInfo {
            from: Some(party("POP000001")),
            to: Some(party("POP000002")),
        }),
        collaboration_info: None,
        message_properties: vec![
            MessageProperty::new(PEPPOL_ORIGINAL_SENDER, "iso6523-actorid-upis::0088:1234567890123"),
            MessageProperty::new(PEPPOL_FINAL_RECIPIENT, "iso6523-actorid-upis::0088:3210987654321"),
        ],
        mpc: None,
    }
}
