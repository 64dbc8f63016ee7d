//! In-memory implementation of the `PModeStore` port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::pmode::{
    domain::{PMode, PModeId},
    ports::{PModeStore, PModeStoreError, PModeStoreResult},
};

/// Thread-safe in-memory PMode store.
///
/// Suitable for tests and for deployments that rebuild their PModes at
/// start-up.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPModeStore {
    pmodes: Arc<RwLock<HashMap<PModeId, PMode>>>,
}

impl InMemoryPModeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored PModes.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pmodes.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no PMode is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(err: &impl std::fmt::Display) -> PModeStoreError {
    PModeStoreError::persistence(std::io::Error::other(format!(
        "PMode store lock poisoned: {err}"
    )))
}

#[async_trait]
impl PModeStore for InMemoryPModeStore {
    async fn create_or_update(&self, pmode: &PMode) -> PModeStoreResult<()> {
        pmode.validate_structure()?;
        let mut guard = self.pmodes.write().map_err(|e| poisoned(&e))?;
        guard.insert(pmode.id().clone(), pmode.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PModeId) -> PModeStoreResult<Option<PMode>> {
        let guard = self.pmodes.read().map_err(|e| poisoned(&e))?;
        Ok(guard.get(id).cloned())
    }

    async fn list_ids(&self) -> PModeStoreResult<Vec<PModeId>> {
        let guard = self.pmodes.read().map_err(|e| poisoned(&e))?;
        let mut ids: Vec<PModeId> = guard.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
