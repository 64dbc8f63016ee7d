//! Lookup of profile validators by profile identifier.

use std::collections::HashMap;
use std::sync::Arc;

use crate::pmode::{
    domain::ProfileId,
    ports::ProfileValidator,
    validation::service::ProfileCompatibilityValidator,
};

/// Registry of the profiles known to a deployment.
///
/// # Examples
///
/// ```
/// use as4_pmode::pmode::domain::ProfileId;
/// use as4_pmode::pmode::validation::ProfileRegistry;
///
/// let registry = ProfileRegistry::with_builtin_profiles();
/// assert!(registry.get(&ProfileId::bdew()).is_some());
/// assert!(registry.get(&ProfileId::new("unknown").expect("id")).is_none());
/// ```
#[derive(Clone, Default)]
pub struct ProfileRegistry {
    validators: HashMap<ProfileId, Arc<dyn ProfileValidator>>,
}

impl ProfileRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every profile [`ProfileRules::builtin`]
    /// resolves: Peppol, BDEW, CEF and the permissive generic profile.
    ///
    /// [`ProfileRules::builtin`]: crate::pmode::validation::ProfileRules::builtin
    #[must_use]
    pub fn with_builtin_profiles() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ProfileCompatibilityValidator::peppol()));
        registry.register(Arc::new(ProfileCompatibilityValidator::bdew()));
        registry.register(Arc::new(ProfileCompatibilityValidator::cef()));
        registry.register(Arc::new(ProfileCompatibilityValidator::default()));
        registry
    }

    /// Adds a validator, replacing any validator registered for the same
    /// profile. Returns the replaced validator.
    pub fn register(
        &mut self,
        validator: Arc<dyn ProfileValidator>,
    ) -> Option<Arc<dyn ProfileValidator>> {
        self.validators
            .insert(validator.profile_id().clone(), validator)
    }

    /// Returns the validator for `profile`.
    #[must_use]
    pub fn get(&self, profile: &ProfileId) -> Option<Arc<dyn ProfileValidator>> {
        self.validators.get(profile).cloned()
    }

    /// Returns the registered profile identifiers in ascending order.
    #[must_use]
    pub fn profile_ids(&self) -> Vec<ProfileId> {
        let mut ids: Vec<ProfileId> = self.validators.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl std::fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileRegistry")
            .field("profiles", &self.profile_ids())
            .finish()
    }
}
