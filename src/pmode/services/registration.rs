//! Service layer that validates PModes against a profile before they are
//! used or stored.

use crate::pmode::{
    domain::{
        ErrorList, Mep, PMode, PModeDomainError, PModeId, ProfileValidationError,
        ValidationIssue,
    },
    ports::{PModeIdProvider, PModeStore, PModeStoreError, ProfileValidator},
    validation::ProfileCompatibilityValidator,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for creating a PMode from a profile's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProfilePModeRequest {
    initiator_id: String,
    responder_id: String,
    responder_address: String,
    mep: Mep,
    persist: bool,
}

impl CreateProfilePModeRequest {
    /// Creates a request for a one-way PMode that is kept in memory only.
    #[must_use]
    pub fn new(
        initiator_id: impl Into<String>,
        responder_id: impl Into<String>,
        responder_address: impl Into<String>,
    ) -> Self {
        Self {
            initiator_id: initiator_id.into(),
            responder_id: responder_id.into(),
            responder_address: responder_address.into(),
            mep: Mep::OneWay,
            persist: false,
        }
    }

    /// Requests a two-way PMode.
    #[must_use]
    pub const fn two_way(mut self) -> Self {
        self.mep = Mep::TwoWay;
        self
    }

    /// Sets whether the PMode is written to the store.
    #[must_use]
    pub const fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PModeRegistration {
    pmode: PMode,
    warnings: Vec<ValidationIssue>,
    persisted: bool,
    registered_at: DateTime<Utc>,
}

impl PModeRegistration {
    /// Returns the registered PMode.
    #[must_use]
    pub const fn pmode(&self) -> &PMode {
        &self.pmode
    }

    /// Returns the advisory findings that did not block registration.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    /// Returns `true` when the PMode was written to the store.
    #[must_use]
    pub const fn persisted(&self) -> bool {
        self.persisted
    }

    /// Returns the time the registration completed.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Consumes the registration and returns the PMode.
    #[must_use]
    pub fn into_pmode(self) -> PMode {
        self.pmode
    }
}

/// Service-level errors for PMode registration.
#[derive(Debug, Error)]
pub enum PModeRegistrationError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PModeDomainError),
    /// The PMode does not conform to the profile.
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] PModeStoreError),
}

/// Result type for PMode registration operations.
pub type PModeRegistrationResult<T> = Result<T, PModeRegistrationError>;

/// PMode registration orchestration service.
///
/// Every PMode passes the profile-independent invariants and the profile
/// validator before it is returned or persisted. Persisting is an explicit
/// per-call decision.
#[derive(Clone)]
pub struct PModeRegistrationService<S, C>
where
    S: PModeStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    validator: Arc<ProfileCompatibilityValidator>,
    clock: Arc<C>,
}

impl<S, C> PModeRegistrationService<S, C>
where
    S: PModeStore,
    C: Clock + Send + Sync,
{
    /// Creates a new registration service.
    #[must_use]
    pub const fn new(
        store: Arc<S>,
        validator: Arc<ProfileCompatibilityValidator>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            store,
            validator,
            clock,
        }
    }

    /// Returns the validator used for registration.
    #[must_use]
    pub fn validator(&self) -> &ProfileCompatibilityValidator {
        &self.validator
    }

    /// Validates `pmode` and, when `persist` is `true`, upserts it.
    ///
    /// # Errors
    ///
    /// Returns [`PModeRegistrationError::Domain`] when a structural
    /// invariant is violated, [`PModeRegistrationError::Validation`] when the
    /// profile reports at least one error, or
    /// [`PModeRegistrationError::Store`] when persisting fails.
    pub async fn register(
        &self,
        pmode: PMode,
        persist: bool,
    ) -> PModeRegistrationResult<PModeRegistration> {
        pmode.validate_structure()?;

        let mut errors = ErrorList::new();
        self.validator.validate_pmode(&pmode, &mut errors);
        let warnings = errors.into_result().inspect_err(|err| {
            warn!(
                profile = %self.validator.profile_id(),
                pmode_id = %pmode.id(),
                violations = err.issues().len(),
                "PMode rejected by profile"
            );
        })?;

        if persist {
            self.store.create_or_update(&pmode).await?;
            info!(
                profile = %self.validator.profile_id(),
                pmode_id = %pmode.id(),
                warnings = warnings.len(),
                "PMode persisted"
            );
        }

        Ok(PModeRegistration {
            pmode,
            warnings,
            persisted: persist,
            registered_at: self.clock.utc(),
        })
    }

    /// Builds a PMode from the profile's defaults and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`PModeRegistrationError::Domain`] when the request carries a
    /// blank identifier or address or asks for an exchange the profile does
    /// not offer, plus every error of [`Self::register`].
    pub async fn create_profile_pmode(
        &self,
        request: CreateProfilePModeRequest,
        id_provider: &dyn PModeIdProvider,
    ) -> PModeRegistrationResult<PModeRegistration> {
        let rules = self.validator.rules();
        let pmode = match request.mep {
            Mep::OneWay => rules.create_pmode(
                &request.initiator_id,
                &request.responder_id,
                &request.responder_address,
                id_provider,
            )?,
            Mep::TwoWay => rules.create_two_way_pmode(
                &request.initiator_id,
                &request.responder_id,
                &request.responder_address,
                id_provider,
            )?,
        };
        self.register(pmode, request.persist).await
    }

    /// Retrieves a stored PMode.
    ///
    /// Returns `Ok(None)` when nothing is stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PModeRegistrationError::Store`] when the lookup fails.
    pub async fn find(&self, id: &PModeId) -> PModeRegistrationResult<Option<PMode>> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Retrieves a stored PMode that is expected to exist.
    ///
    /// # Errors
    ///
    /// Returns [`PModeStoreError::NotFound`] wrapped in
    /// [`PModeRegistrationError::Store`] when nothing is stored under `id`,
    /// or the lookup error itself.
    pub async fn get(&self, id: &PModeId) -> PModeRegistrationResult<PMode> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| PModeStoreError::NotFound(id.clone()).into())
    }
}
