//! Given steps for profile conformance BDD scenarios.

use super::world::ConformanceWorld;
use as4_pmode::pmode::{
    adapters::DynamicPModeIdProvider,
    domain::{MepBinding, ProfileId},
    validation::ProfileRules,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"the "{profile}" profile"#)]
fn selected_profile(world: &mut ConformanceWorld, profile: String) -> Result<(), eyre::Report> {
    let id = ProfileId::new(profile).wrap_err("parse profile identifier")?;
    let rules = ProfileRules::builtin(&id)
        .ok_or_else(|| eyre::eyre!("no built-in profile named {id}"))?;
    world.rules = Some(rules);
    Ok(())
}

#[given(r#"a PMode for "{initiator}" and "{responder}" at "{address}""#)]
fn factory_pmode(
    world: &mut ConformanceWorld,
    initiator: String,
    responder: String,
    address: String,
) -> Result<(), eyre::Report> {
    let pmode = world
        .rules()?
        .create_pmode(&initiator, &responder, &address, &DynamicPModeIdProvider)
        .wrap_err("build PMode from profile defaults")?;
    world.pmode = Some(pmode);
    Ok(())
}

#[given(r#"the PMode MEP binding is "{binding}""#)]
fn pmode_binding(world: &mut ConformanceWorld, binding: String) -> Result<(), eyre::Report> {
    let parsed = MepBinding::try_from(binding.as_str()).wrap_err("parse MEP binding")?;
    let pmode = world
        .pmode
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing PMode in scenario world"))?;
    pmode.set_mep_binding(parsed);
    Ok(())
}
