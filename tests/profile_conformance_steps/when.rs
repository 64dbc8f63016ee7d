//! When steps for profile conformance BDD scenarios.

use super::world::{ConformanceWorld, run_async};
use as4_pmode::pmode::{
    adapters::DynamicPModeIdProvider,
    domain::{ErrorList, PMode},
    ports::ProfileValidator,
    services::CreateProfilePModeRequest,
    validation::ProfileCompatibilityValidator,
};
use rstest_bdd_macros::when;

fn pending_pmode(world: &ConformanceWorld) -> Result<PMode, eyre::Report> {
    world
        .pmode
        .clone()
        .ok_or_else(|| eyre::eyre!("missing PMode in scenario world"))
}

#[when("the PMode is validated")]
fn validate_pmode(world: &mut ConformanceWorld) -> Result<(), eyre::Report> {
    let pmode = pending_pmode(world)?;
    let validator = ProfileCompatibilityValidator::new(world.rules()?.clone());
    let mut errors = ErrorList::new();
    validator.validate_pmode(&pmode, &mut errors);
    world.last_validation = Some(errors);
    Ok(())
}

#[when("the PMode is registered")]
fn register_pmode(world: &mut ConformanceWorld) -> Result<(), eyre::Report> {
    let pmode = pending_pmode(world)?;
    let service = world.service()?;
    world.last_registration = Some(run_async(service.register(pmode, false)));
    Ok(())
}

#[when("the PMode is registered and persisted")]
fn register_and_persist_pmode(world: &mut ConformanceWorld) -> Result<(), eyre::Report> {
    let pmode = pending_pmode(world)?;
    let service = world.service()?;
    world.last_registration = Some(run_async(service.register(pmode, true)));
    Ok(())
}

#[when(r#"a two-way PMode is requested for "{initiator}" and "{responder}" at "{address}""#)]
fn request_two_way(
    world: &mut ConformanceWorld,
    initiator: String,
    responder: String,
    address: String,
) -> Result<(), eyre::Report> {
    let service = world.service()?;
    let request = CreateProfilePModeRequest::new(initiator, responder, address).two_way();
    world.last_registration = Some(run_async(
        service.create_profile_pmode(request, &DynamicPModeIdProvider),
    ));
    Ok(())
}
