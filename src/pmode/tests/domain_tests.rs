//! Tests for the PMode domain model.

use super::fixtures::{TEST_INITIATOR, initiator, responder};
use crate::pmode::domain::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL, DigestAlgorithm, EncryptionAlgorithm, Mep,
    MepBinding, PMode, PModeDomainError, PModeId, PModeLeg, PModeLegProtocol, PModeParty,
    PModeReceptionAwareness, ProfileId, SignatureAlgorithm, SoapVersion, TriState, WssVersion,
};
use rstest::rstest;
use std::time::Duration;

fn pmode_with(initiator: PModeParty, responder: PModeParty, mep: Mep) -> PMode {
    let binding = if mep.is_two_way() {
        MepBinding::PushPush
    } else {
        MepBinding::Push
    };
    PMode::new(
        PModeId::new("TestInitiator-TestResponder").expect("valid id"),
        initiator,
        responder,
        mep,
        binding,
        PModeLeg::default(),
    )
}

#[rstest]
#[case(TriState::True, Some(true))]
#[case(TriState::False, Some(false))]
#[case(TriState::Undefined, None)]
fn tri_state_exposes_concrete_value(#[case] value: TriState, #[case] expected: Option<bool>) {
    assert_eq!(value.as_bool(), expected);
    assert_eq!(TriState::from(expected), value);
    assert_eq!(value.is_defined(), expected.is_some());
}

#[rstest]
fn undefined_is_distinct_from_false() {
    assert_ne!(TriState::Undefined, TriState::False);
    assert!(TriState::Undefined.as_bool_or(true));
    assert!(!TriState::False.as_bool_or(true));
    assert_eq!(TriState::default(), TriState::Undefined);
}

#[rstest]
#[case("TRUE", TriState::True)]
#[case(" false ", TriState::False)]
#[case("", TriState::Undefined)]
fn tri_state_parses_case_insensitively(#[case] raw: &str, #[case] expected: TriState) {
    assert_eq!(TriState::try_from(raw), Ok(expected));
}

#[rstest]
fn tri_state_rejects_unknown_text() {
    let err = TriState::try_from("maybe").expect_err("unknown text");
    assert_eq!(err.value(), "maybe");
}

#[rstest]
fn pmode_id_is_trimmed_and_rejects_blank() {
    let id = PModeId::new("  a-b ").expect("valid id");
    assert_eq!(id.as_str(), "a-b");
    assert_eq!(PModeId::new(" \t"), Err(PModeDomainError::EmptyPModeId));
}

#[rstest]
fn pmode_id_is_normalised_on_deserialisation() {
    let parsed: PModeId = serde_json::from_str("\" a-b \"").expect("valid json");
    assert_eq!(parsed.as_str(), "a-b");
    assert!(serde_json::from_str::<PModeId>("\"  \"").is_err());
}

#[rstest]
fn profile_id_is_normalised_on_construction_and_deserialisation() {
    assert_eq!(ProfileId::new(" Peppol ").expect("valid id"), ProfileId::peppol());
    let parsed: ProfileId = serde_json::from_str("\"BDEW\"").expect("valid json");
    assert_eq!(parsed, ProfileId::bdew());
    assert!(serde_json::from_str::<ProfileId>("\"  \"").is_err());
}

#[rstest]
fn party_id_includes_type_when_present(initiator: PModeParty) {
    assert_eq!(initiator.id(), TEST_INITIATOR);
    let typed = initiator.with_id_type("urn:type");
    assert_eq!(typed.id(), format!("urn:type:{TEST_INITIATOR}"));
    assert_eq!(typed.id_type(), Some("urn:type"));
}

#[rstest]
fn blank_party_type_is_ignored(initiator: PModeParty) {
    assert_eq!(initiator.with_id_type("  ").id_type(), None);
}

#[rstest]
fn blank_party_id_is_rejected() {
    assert_eq!(
        PModeParty::new("  ", "role"),
        Err(PModeDomainError::EmptyPartyId("party"))
    );
}

#[rstest]
fn one_way_pmode_with_leg1_is_structurally_valid(initiator: PModeParty, responder: PModeParty) {
    let pmode = pmode_with(initiator, responder, Mep::OneWay);
    assert_eq!(pmode.validate_structure(), Ok(()));
    assert_eq!(pmode.legs().count(), 1);
}

#[rstest]
fn missing_leg1_fails_structure(initiator: PModeParty, responder: PModeParty) {
    let mut pmode = pmode_with(initiator, responder, Mep::OneWay);
    pmode.set_leg1(None);
    assert!(matches!(
        pmode.validate_structure(),
        Err(PModeDomainError::MissingLeg1(_))
    ));
}

#[rstest]
fn two_way_without_leg2_fails_structure(initiator: PModeParty, responder: PModeParty) {
    let pmode = pmode_with(initiator, responder, Mep::TwoWay);
    assert!(matches!(
        pmode.validate_structure(),
        Err(PModeDomainError::MissingLeg2(_))
    ));
}

#[rstest]
fn one_way_with_leg2_fails_structure(initiator: PModeParty, responder: PModeParty) {
    let pmode = pmode_with(initiator, responder, Mep::OneWay).with_leg2(PModeLeg::default());
    assert!(matches!(
        pmode.validate_structure(),
        Err(PModeDomainError::UnexpectedLeg2(_))
    ));
}

#[rstest]
fn two_way_legs_are_numbered(initiator: PModeParty, responder: PModeParty) {
    let pmode = pmode_with(initiator, responder, Mep::TwoWay).with_leg2(PModeLeg::default());
    let numbers: Vec<u8> = pmode.legs().map(|(number, _)| number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(pmode.validate_structure(), Ok(()));
}

#[rstest]
#[case("http://docs.oasis-open.org/ebxml-msg/ebms/v3.0/ns/core/200704/oneWay", Mep::OneWay)]
#[case("two-way", Mep::TwoWay)]
fn mep_parses_uri_and_short_name(#[case] raw: &str, #[case] expected: Mep) {
    assert_eq!(Mep::try_from(raw), Ok(expected));
}

#[rstest]
fn every_binding_round_trips_through_its_uri() {
    for binding in MepBinding::ALL {
        assert_eq!(MepBinding::try_from(binding.uri()), Ok(binding));
    }
    assert!(MepBinding::try_from("carrier-pigeon").is_err());
}

#[rstest]
#[case(MepBinding::Push, false, false)]
#[case(MepBinding::Pull, false, true)]
#[case(MepBinding::Sync, true, false)]
#[case(MepBinding::PushPull, true, true)]
fn binding_shape(#[case] binding: MepBinding, #[case] two_way: bool, #[case] pull: bool) {
    assert_eq!(binding.is_two_way(), two_way);
    assert_eq!(binding.involves_pull(), pull);
}

#[rstest]
fn algorithm_identifiers_parse_back() {
    assert_eq!(
        SignatureAlgorithm::try_from(SignatureAlgorithm::RsaSha256.id()),
        Ok(SignatureAlgorithm::RsaSha256)
    );
    assert_eq!(
        DigestAlgorithm::try_from("http://www.w3.org/2001/04/xmlenc#sha256"),
        Ok(DigestAlgorithm::Sha256)
    );
    assert_eq!(WssVersion::try_from("1.1.1"), Ok(WssVersion::Wss111));
    let err = EncryptionAlgorithm::try_from("rot13").expect_err("unknown algorithm");
    assert_eq!(err.kind(), "encryption algorithm");
}

#[rstest]
#[case(EncryptionAlgorithm::Aes128Gcm, 128)]
#[case(EncryptionAlgorithm::Aes192Cbc, 192)]
#[case(EncryptionAlgorithm::Aes256Gcm, 256)]
fn encryption_key_sizes(#[case] algorithm: EncryptionAlgorithm, #[case] bits: u32) {
    assert_eq!(algorithm.key_bits(), bits);
}

#[rstest]
fn soap_12_is_the_default() {
    assert_eq!(SoapVersion::default(), SoapVersion::Soap12);
    let protocol = PModeLegProtocol::with_default_soap_version("https://ap.example.org/as4");
    assert_eq!(protocol.soap_version, SoapVersion::Soap12);
    assert_eq!(protocol.address_scheme(), Some("https"));
}

#[rstest]
fn address_without_scheme_has_none() {
    let protocol = PModeLegProtocol::with_default_soap_version("/var/spool/as4");
    assert_eq!(protocol.address_scheme(), None);
}

#[rstest]
fn reception_awareness_defaults() {
    let awareness = PModeReceptionAwareness::default();
    assert!(awareness.enabled.is_true());
    assert_eq!(awareness.max_retries, DEFAULT_MAX_RETRIES);
    assert_eq!(awareness.retry_interval, DEFAULT_RETRY_INTERVAL);
}

#[rstest]
fn omitted_pmode_flags_deserialise_as_undefined() {
    let awareness: PModeReceptionAwareness =
        serde_json::from_str(r#"{"retry_interval": 2500}"#).expect("valid json");
    assert!(awareness.enabled.is_undefined());
    assert_eq!(awareness.max_retries, 0);
    assert_eq!(awareness.retry_interval, Duration::from_millis(2500));
}

#[rstest]
fn pmode_survives_json_round_trip(initiator: PModeParty, responder: PModeParty) {
    let pmode = pmode_with(initiator, responder, Mep::OneWay)
        .with_agreement("urn:agreement")
        .with_reception_awareness(PModeReceptionAwareness::default());
    let json = serde_json::to_string(&pmode).expect("serialise");
    let decoded: PMode = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(decoded, pmode);
}
