//! Shared world state for profile conformance BDD scenarios.

use std::sync::Arc;

use as4_pmode::pmode::{
    adapters::InMemoryPModeStore,
    domain::{ErrorList, PMode},
    services::{PModeRegistration, PModeRegistrationResult, PModeRegistrationService},
    validation::{ProfileCompatibilityValidator, ProfileRules},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestRegistrationService = PModeRegistrationService<InMemoryPModeStore, DefaultClock>;

/// Scenario world for profile conformance behaviour tests.
pub struct ConformanceWorld {
    pub store: Arc<InMemoryPModeStore>,
    pub rules: Option<ProfileRules>,
    pub pmode: Option<PMode>,
    pub last_validation: Option<ErrorList>,
    pub last_registration: Option<PModeRegistrationResult<PModeRegistration>>,
}

impl ConformanceWorld {
    /// Creates a world with an empty store and no profile selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryPModeStore::new()),
            rules: None,
            pmode: None,
            last_validation: None,
            last_registration: None,
        }
    }

    /// Returns the selected profile rules.
    pub fn rules(&self) -> Result<&ProfileRules, eyre::Report> {
        self.rules
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no profile selected in scenario world"))
    }

    /// Builds a registration service for the selected profile over the
    /// world's store.
    pub fn service(&self) -> Result<TestRegistrationService, eyre::Report> {
        let validator = ProfileCompatibilityValidator::new(self.rules()?.clone());
        Ok(PModeRegistrationService::new(
            Arc::clone(&self.store),
            Arc::new(validator),
            Arc::new(DefaultClock),
        ))
    }
}

impl Default for ConformanceWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ConformanceWorld {
    ConformanceWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
