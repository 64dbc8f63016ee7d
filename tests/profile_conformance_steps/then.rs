//! Then steps for profile conformance BDD scenarios.

use super::world::{ConformanceWorld, run_async};
use as4_pmode::pmode::{
    domain::PModeDomainError,
    ports::PModeStore,
    services::{PModeRegistration, PModeRegistrationError},
};
use rstest_bdd_macros::then;

fn registration(world: &ConformanceWorld) -> Result<&PModeRegistration, eyre::Report> {
    world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected registration failure: {err}"))
}

#[then("the registration succeeds without warnings")]
fn registration_without_warnings(world: &ConformanceWorld) -> Result<(), eyre::Report> {
    let outcome = registration(world)?;
    if !outcome.warnings().is_empty() {
        return Err(eyre::eyre!(
            "expected no warnings, found {:?}",
            outcome.warnings()
        ));
    }
    Ok(())
}

#[then("the registration succeeds with {count:usize} warning")]
fn registration_with_warnings(world: &ConformanceWorld, count: usize) -> Result<(), eyre::Report> {
    let found = registration(world)?.warnings().len();
    if found != count {
        return Err(eyre::eyre!("expected {count} warnings, found {found}"));
    }
    Ok(())
}

#[then(r#"the registration is rejected with a finding mentioning "{needle}""#)]
fn registration_rejected(world: &ConformanceWorld, needle: String) -> Result<(), eyre::Report> {
    let result = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    let Err(PModeRegistrationError::Validation(violations)) = result else {
        return Err(eyre::eyre!("expected a validation failure, got {result:?}"));
    };
    if !violations
        .issues()
        .iter()
        .any(|issue| issue.text().contains(&needle))
    {
        return Err(eyre::eyre!("no finding mentions {needle:?}: {violations}"));
    }
    Ok(())
}

#[then(r#"an error mentions "{needle}""#)]
fn validation_error_mentions(world: &ConformanceWorld, needle: String) -> Result<(), eyre::Report> {
    let errors = world
        .last_validation
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing validation result in scenario world"))?;
    if !errors.contains_any(|issue| issue.is_error() && issue.text().contains(&needle)) {
        return Err(eyre::eyre!("no error mentions {needle:?}: {errors}"));
    }
    Ok(())
}

#[then("no PMode is stored")]
fn nothing_stored(world: &ConformanceWorld) -> Result<(), eyre::Report> {
    if !world.store.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty store, found {} PModes",
            world.store.len()
        ));
    }
    Ok(())
}

#[then("the PMode can be retrieved by its identifier")]
fn pmode_retrievable(world: &ConformanceWorld) -> Result<(), eyre::Report> {
    let registered = registration(world)?.pmode();
    let found = run_async(world.store.find_by_id(registered.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if found.as_ref() != Some(registered) {
        return Err(eyre::eyre!("stored PMode does not match the registered one"));
    }
    Ok(())
}

#[then("the request fails because the profile does not offer the exchange")]
fn unsupported_exchange(world: &ConformanceWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    if !matches!(
        result,
        Err(PModeRegistrationError::Domain(
            PModeDomainError::UnsupportedExchange { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected an unsupported exchange error, got {result:?}"
        ));
    }
    Ok(())
}
