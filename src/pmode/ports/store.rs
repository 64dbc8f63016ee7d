//! Store port for PMode persistence.

use crate::pmode::domain::{PMode, PModeDomainError, PModeId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for PMode store operations.
pub type PModeStoreResult<T> = Result<T, PModeStoreError>;

/// PMode persistence contract.
///
/// Implementations must make [`PModeStore::create_or_update`] atomic per
/// identifier: concurrent writers of the same identifier never observe a
/// partially written PMode, and the last write wins. PModes are never
/// removed implicitly.
#[async_trait]
pub trait PModeStore: Send + Sync {
    /// Inserts the PMode or replaces the one stored under the same
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PModeStoreError::Invalid`] when the PMode violates the
    /// profile-independent invariants, or a persistence error when the
    /// backing storage fails.
    async fn create_or_update(&self, pmode: &PMode) -> PModeStoreResult<()>;

    /// Finds a PMode by identifier.
    ///
    /// Returns `None` when no PMode is stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns a persistence or serialization error when the stored PMode
    /// cannot be read.
    async fn find_by_id(&self, id: &PModeId) -> PModeStoreResult<Option<PMode>>;

    /// Returns the identifiers of all stored PModes in ascending order.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the backing storage cannot be
    /// enumerated.
    async fn list_ids(&self) -> PModeStoreResult<Vec<PModeId>>;
}

/// Errors returned by PMode store implementations.
#[derive(Debug, Clone, Error)]
pub enum PModeStoreError {
    /// The PMode was rejected before it reached storage.
    #[error("invalid PMode: {0}")]
    Invalid(#[from] PModeDomainError),

    /// No PMode is stored under the identifier.
    #[error("PMode not found: {0}")]
    NotFound(PModeId),

    /// A stored document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PModeStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
