//! Persistence port for the session record

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;
use crate::session::models::StoredSession;

/// Storage backend for the persisted session record.
///
/// The store owns exactly one keyed entry; `load` returns `None` when no
/// record has been saved. Parse failures are surfaced so the caller can
/// decide how to recover (the session store treats them as "no session").
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Result<Option<StoredSession>>;
    fn save(&self, record: &StoredSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// File-backed storage, one pretty-printed JSON record
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let record: StoredSession = serde_json::from_str(&content)?;
        Ok(Some(record))
    }

    fn save(&self, record: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and embedding without a filesystem
#[derive(Default)]
pub struct MemoryStorage {
    record: Mutex<Option<StoredSession>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<StoredSession>> {
        Ok(self.record.lock().unwrap().clone())
    }

    fn save(&self, record: &StoredSession) -> Result<()> {
        *self.record.lock().unwrap() = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.record.lock().unwrap() = None;
        Ok(())
    }
}
