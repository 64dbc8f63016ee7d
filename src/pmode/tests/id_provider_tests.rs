//! Tests for the PMode identifier strategies.

use super::fixtures::{initiator, responder};
use crate::pmode::{
    adapters::{DynamicPModeIdProvider, StaticPModeIdProvider},
    domain::{DEFAULT_INITIATOR_ROLE, DEFAULT_RESPONDER_ROLE, PModeId, PModeParty},
    ports::PModeIdProvider,
};
use rstest::rstest;

fn pair(initiator_id: &str, responder_id: &str) -> (PModeParty, PModeParty) {
    (
        PModeParty::new(initiator_id, DEFAULT_INITIATOR_ROLE).expect("valid initiator"),
        PModeParty::new(responder_id, DEFAULT_RESPONDER_ROLE).expect("valid responder"),
    )
}

fn dynamic_id(initiator_id: &str, responder_id: &str) -> PModeId {
    let (initiator, responder) = pair(initiator_id, responder_id);
    DynamicPModeIdProvider.pmode_id(&initiator, &responder)
}

#[rstest]
fn static_provider_ignores_parties(initiator: PModeParty, responder: PModeParty) {
    let provider = StaticPModeIdProvider::new(PModeId::new("fixed").expect("valid id"));

    assert_eq!(provider.pmode_id(&initiator, &responder).as_str(), "fixed");
    assert_eq!(provider.pmode_id(&responder, &initiator).as_str(), "fixed");
}

#[rstest]
fn dynamic_provider_joins_party_ids(initiator: PModeParty, responder: PModeParty) {
    let id = DynamicPModeIdProvider.pmode_id(&initiator, &responder);
    assert_eq!(id.as_str(), "TestInitiator-TestResponder");
}

#[rstest]
fn dynamic_provider_is_deterministic(initiator: PModeParty, responder: PModeParty) {
    assert_eq!(
        DynamicPModeIdProvider.pmode_id(&initiator, &responder),
        DynamicPModeIdProvider.pmode_id(&initiator, &responder)
    );
}

#[rstest]
fn dynamic_provider_is_order_sensitive() {
    assert_ne!(dynamic_id("A", "B"), dynamic_id("B", "A"));
}

#[rstest]
fn separator_inside_a_party_id_cannot_collide() {
    let left = dynamic_id("a-b", "c");
    let right = dynamic_id("a", "b-c");

    assert_ne!(left, right);
    assert_eq!(left.as_str(), "a%2Db-c");
    assert_eq!(right.as_str(), "a-b%2Dc");
}

#[rstest]
fn escape_character_is_itself_escaped() {
    assert_ne!(dynamic_id("a%2Db", "c"), dynamic_id("a-b", "c"));
    assert_eq!(dynamic_id("50%", "x").as_str(), "50%25-x");
}

#[rstest]
fn typed_parties_use_full_identifier() {
    let (initiator, responder) = pair("POP000001", "POP000002");
    let id = DynamicPModeIdProvider.pmode_id(
        &initiator.with_id_type("urn:fdc:peppol.eu:2017:identifiers:ap"),
        &responder,
    );
    assert_eq!(
        id.as_str(),
        "urn:fdc:peppol.eu:2017:identifiers:ap:POP000001-POP000002"
    );
}
