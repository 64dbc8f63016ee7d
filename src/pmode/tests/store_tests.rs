//! Tests for the in-memory PMode store.

use super::fixtures::{TEST_ADDRESS, TEST_INITIATOR, TEST_RESPONDER, peppol_pmode};
use crate::pmode::{
    adapters::{InMemoryPModeStore, StaticPModeIdProvider},
    domain::{PMode, PModeDomainError, PModeId, SoapVersion},
    ports::{PModeStore, PModeStoreError},
    validation::ProfileRules,
};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryPModeStore {
    InMemoryPModeStore::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_pmode_is_found(store: InMemoryPModeStore, peppol_pmode: PMode) {
    store
        .create_or_update(&peppol_pmode)
        .await
        .expect("store PMode");

    let found = store
        .find_by_id(peppol_pmode.id())
        .await
        .expect("lookup succeeds");
    assert_eq!(found, Some(peppol_pmode));
    assert_eq!(store.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_id_is_none(store: InMemoryPModeStore) {
    let id = PModeId::new("absent").expect("valid id");
    assert_eq!(store.find_by_id(&id).await.expect("lookup succeeds"), None);
    assert!(store.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_previous_version(store: InMemoryPModeStore, peppol_pmode: PMode) {
    store
        .create_or_update(&peppol_pmode)
        .await
        .expect("store PMode");
    let mut updated = peppol_pmode.clone();
    if let Some(protocol) = updated.leg1_mut().and_then(|leg| leg.protocol.as_mut()) {
        protocol.soap_version = SoapVersion::Soap11;
    }

    store.create_or_update(&updated).await.expect("update PMode");

    let found = store
        .find_by_id(peppol_pmode.id())
        .await
        .expect("lookup succeeds");
    assert_eq!(found, Some(updated));
    assert_eq!(store.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn structurally_invalid_pmode_is_rejected(
    store: InMemoryPModeStore,
    mut peppol_pmode: PMode,
) {
    peppol_pmode.set_leg1(None);

    let err = store
        .create_or_update(&peppol_pmode)
        .await
        .expect_err("missing leg 1");

    assert!(matches!(
        err,
        PModeStoreError::Invalid(PModeDomainError::MissingLeg1(_))
    ));
    assert!(store.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_listed_in_order(store: InMemoryPModeStore) {
    for name in ["zulu", "alpha", "mike"] {
        let provider = StaticPModeIdProvider::new(PModeId::new(name).expect("valid id"));
        let pmode = ProfileRules::peppol()
            .create_pmode(TEST_INITIATOR, TEST_RESPONDER, TEST_ADDRESS, &provider)
            .expect("valid factory inputs");
        store.create_or_update(&pmode).await.expect("store PMode");
    }

    let ids = store.list_ids().await.expect("list ids");
    let names: Vec<&str> = ids.iter().map(PModeId::as_str).collect();
    assert_eq!(names, vec!["alpha", "mike", "zulu"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_contents(store: InMemoryPModeStore, peppol_pmode: PMode) {
    let other = store.clone();
    store
        .create_or_update(&peppol_pmode)
        .await
        .expect("store PMode");
    assert_eq!(other.len(), 1);
}
