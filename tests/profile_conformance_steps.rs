//! Behaviour tests for profile conformance checks and PMode registration.

#[path = "profile_conformance_steps/mod.rs"]
mod profile_conformance_steps;

use profile_conformance_steps::world::{ConformanceWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/profile_conformance.feature",
    name = "Factory-built Peppol PMode is registered"
)]
#[tokio::test(flavor = "multi_thread")]
async fn factory_peppol_pmode_is_registered(world: ConformanceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_conformance.feature",
    name = "Peppol rejects the sync binding"
)]
#[tokio::test(flavor = "multi_thread")]
async fn peppol_rejects_sync_binding(world: ConformanceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_conformance.feature",
    name = "BDEW treats plain HTTP as an error"
)]
#[tokio::test(flavor = "multi_thread")]
async fn bdew_rejects_plain_http(world: ConformanceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_conformance.feature",
    name = "Generic profile only advises on unusual schemes"
)]
#[tokio::test(flavor = "multi_thread")]
async fn generic_profile_advises(world: ConformanceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_conformance.feature",
    name = "Persisted PMode is retrievable"
)]
#[tokio::test(flavor = "multi_thread")]
async fn persisted_pmode_is_retrievable(world: ConformanceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_conformance.feature",
    name = "One-way profile refuses a two-way PMode"
)]
#[tokio::test(flavor = "multi_thread")]
async fn one_way_profile_refuses_two_way(world: ConformanceWorld) {
    let _ = world;
}
