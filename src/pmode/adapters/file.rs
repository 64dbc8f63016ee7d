//! JSON-file implementation of the `PModeStore` port.
//!
//! Each PMode is one pretty-printed JSON document inside a capability
//! directory. The file name is the SHA-256 of the identifier, so arbitrary
//! identifiers map to safe, fixed-length names. Each write lands in its own
//! temporary file that is then renamed over the target, so stores sharing a
//! directory never touch each other's partial documents.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use sha2::{Digest, Sha256};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

use crate::pmode::{
    domain::{PMode, PModeId},
    ports::{PModeStore, PModeStoreError, PModeStoreResult},
};

const DOCUMENT_EXTENSION: &str = ".json";
const TEMP_SUFFIX: &str = ".tmp";

/// PMode store backed by one JSON document per PMode.
///
/// # Examples
///
/// ```no_run
/// use as4_pmode::pmode::adapters::FilePModeStore;
/// use camino::Utf8Path;
///
/// let store = FilePModeStore::open(Utf8Path::new("/var/lib/as4/pmodes"))
///     .expect("store directory");
/// # let _ = store;
/// ```
#[derive(Debug, Clone)]
pub struct FilePModeStore {
    dir: Arc<Dir>,
    write_lock: Arc<Mutex<()>>,
}

impl FilePModeStore {
    /// Opens the store at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PModeStoreError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> PModeStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(PModeStoreError::persistence)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(PModeStoreError::persistence)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self {
            dir: Arc::new(dir),
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// Returns the file name a PMode identifier is stored under.
#[must_use]
pub fn document_name(id: &PModeId) -> String {
    let digest = Sha256::digest(id.as_str().as_bytes());
    format!("{digest:x}{DOCUMENT_EXTENSION}")
}

fn decode(bytes: &[u8]) -> PModeStoreResult<PMode> {
    serde_json::from_slice(bytes).map_err(|e| PModeStoreError::serialization(e.to_string()))
}

async fn run_blocking<T, F>(operation: F) -> PModeStoreResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> PModeStoreResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(PModeStoreError::persistence)?
}

#[async_trait]
impl PModeStore for FilePModeStore {
    async fn create_or_update(&self, pmode: &PMode) -> PModeStoreResult<()> {
        pmode.validate_structure()?;
        let bytes = serde_json::to_vec_pretty(pmode)
            .map_err(|e| PModeStoreError::serialization(e.to_string()))?;
        let file_name = document_name(pmode.id());
        let dir = Arc::clone(&self.dir);
        let write_lock = Arc::clone(&self.write_lock);

        let written = file_name.clone();
        run_blocking(move || {
            let _guard = write_lock.lock().map_err(|e| {
                PModeStoreError::persistence(io::Error::other(format!(
                    "PMode store write lock poisoned: {e}"
                )))
            })?;
            let temp_name = format!("{file_name}.{}{TEMP_SUFFIX}", Uuid::new_v4().simple());
            dir.write(&temp_name, &bytes)
                .map_err(PModeStoreError::persistence)?;
            dir.rename(&temp_name, &dir, &file_name)
                .map_err(PModeStoreError::persistence)
        })
        .await?;

        debug!(pmode_id = %pmode.id(), file = %written, "stored PMode document");
        Ok(())
    }

    async fn find_by_id(&self, id: &PModeId) -> PModeStoreResult<Option<PMode>> {
        let file_name = document_name(id);
        let dir = Arc::clone(&self.dir);
        let bytes = run_blocking(move || match dir.read(&file_name) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PModeStoreError::persistence(err)),
        })
        .await?;

        bytes.as_deref().map(decode).transpose()
    }

    async fn list_ids(&self) -> PModeStoreResult<Vec<PModeId>> {
        let dir = Arc::clone(&self.dir);
        run_blocking(move || {
            let mut ids = Vec::new();
            for entry in dir.entries().map_err(PModeStoreError::persistence)? {
                let name = entry
                    .and_then(|e| e.file_name())
                    .map_err(PModeStoreError::persistence)?;
                if !name.ends_with(DOCUMENT_EXTENSION) {
                    continue;
                }
                let bytes = dir.read(&name).map_err(PModeStoreError::persistence)?;
                ids.push(decode(&bytes)?.id().clone());
            }
            ids.sort();
            Ok(ids)
        })
        .await
    }
}
