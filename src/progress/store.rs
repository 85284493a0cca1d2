use std::collections::BTreeSet;
use std::fs;
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use anyhow::Context as _;

use crate::{
    canon::index::UnitId,
    foundation::error::{ScripturaError, ScripturaResult},
};

/// Current on-disk document version written by [`JsonFileStore`].
pub const PROGRESS_DOCUMENT_VERSION: u32 = 1;

/// Durable key-value slot holding the completed-unit set.
///
/// Contract: `load` returns either the last fully written set or `None`; a reader never observes a
/// partial write. Writes are last-write-wins.
pub trait ProgressStore: Send + Sync {
    /// Read the stored set; `Ok(None)` when nothing has been written yet.
    fn load(&self) -> ScripturaResult<Option<Vec<UnitId>>>;
    /// Replace the stored set.
    fn save(&self, completed: &BTreeSet<UnitId>) -> ScripturaResult<()>;
}

/// Serialized form used by [`JsonFileStore`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgressDocument {
    /// Document format version.
    pub version: u32,
    /// Completed unit ids in sorted order.
    pub completed: Vec<UnitId>,
}

impl ProgressDocument {
    /// Parse a stored document. A bare JSON array of ids is accepted as a legacy format.
    pub fn from_json(bytes: &[u8]) -> ScripturaResult<Self> {
        match serde_json::from_slice::<Self>(bytes) {
            Ok(doc) => Ok(doc),
            Err(doc_err) => match serde_json::from_slice::<Vec<UnitId>>(bytes) {
                Ok(completed) => Ok(Self {
                    version: 0,
                    completed,
                }),
                Err(_) => Err(ScripturaError::serde(format!(
                    "malformed progress document: {doc_err}"
                ))),
            },
        }
    }
}

/// Progress stored as a JSON file.
///
/// Saves go to a uniquely named temp file in the same directory which is then renamed over the
/// target, so the file is always either the previous or the new document. A failed save removes
/// its temp file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `path`. Nothing is touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> ScripturaResult<Option<Vec<UnitId>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(ScripturaError::persistence(format!(
                    "failed to read '{}': {err}",
                    self.path.display()
                )));
            }
        };
        let doc = ProgressDocument::from_json(&bytes)?;
        if doc.version > PROGRESS_DOCUMENT_VERSION {
            tracing::warn!(
                version = doc.version,
                path = %self.path.display(),
                "progress document is newer than this build; reading ids anyway"
            );
        }
        Ok(Some(doc.completed))
    }

    fn save(&self, completed: &BTreeSet<UnitId>) -> ScripturaResult<()> {
        let doc = ProgressDocument {
            version: PROGRESS_DOCUMENT_VERSION,
            completed: completed.iter().cloned().collect(),
        };
        let json = serde_json::to_vec_pretty(&doc)?;

        write_atomic(&self.path, &json).map_err(|err| {
            ScripturaError::persistence(format!(
                "failed to write '{}': {err:#}",
                self.path.display()
            ))
        })?;
        tracing::debug!(path = %self.path.display(), count = completed.len(), "saved progress");
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
            parent
        }
        None => Path::new("."),
    };
    // Dropped (and deleted) on every early return below.
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in '{}'", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("failed to write '{}'", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("failed to sync '{}'", tmp.path().display()))?;
    tmp.persist(path)
        .with_context(|| format!("failed to move temp file to '{}'", path.display()))?;
    Ok(())
}

/// In-memory store for tests and embedding. Loads and writes can be made to fail on demand.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slot: Mutex<Option<Vec<UnitId>>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `ids`.
    pub fn with_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let store = Self::default();
        *store.lock() = Some(ids.into_iter().map(UnitId::from_raw).collect());
        store
    }

    /// Make subsequent loads fail.
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored ids.
    pub fn contents(&self) -> Option<Vec<UnitId>> {
        self.lock().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<UnitId>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProgressStore for InMemoryStore {
    fn load(&self) -> ScripturaResult<Option<Vec<UnitId>>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(ScripturaError::persistence("in-memory store is unreadable"));
        }
        Ok(self.contents())
    }

    fn save(&self, completed: &BTreeSet<UnitId>) -> ScripturaResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ScripturaError::persistence("in-memory store rejected the write"));
        }
        *self.lock() = Some(completed.iter().cloned().collect());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for Box<S> {
    fn load(&self) -> ScripturaResult<Option<Vec<UnitId>>> {
        (**self).load()
    }

    fn save(&self, completed: &BTreeSet<UnitId>) -> ScripturaResult<()> {
        (**self).save(completed)
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for std::sync::Arc<S> {
    fn load(&self) -> ScripturaResult<Option<Vec<UnitId>>> {
        (**self).load()
    }

    fn save(&self, completed: &BTreeSet<UnitId>) -> ScripturaResult<()> {
        (**self).save(completed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/store.rs"]
mod tests;
