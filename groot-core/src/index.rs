use crate::atomic::write_atomic;
use crate::error::Result;
use crate::models::StageEntry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The staging area: an ordered, append-only list of entries persisted as a
/// JSON array. Nothing is cached; every call goes back to disk.
#[derive(Debug, Clone)]
pub struct StagingIndex {
    path: PathBuf,
}

impl StagingIndex {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn entries(&self) -> Result<Vec<StageEntry>> {
        let raw = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Appends an entry. Entries for a path that is already staged are kept,
    /// not replaced.
    pub fn append(&self, entry: StageEntry) -> Result<()> {
        let mut entries = self.entries()?;
        debug!(path = %entry.path, hash = %entry.hash, "staging entry");
        entries.push(entry);
        self.save(&entries)
    }

    pub fn clear(&self) -> Result<()> {
        debug!("clearing staging index");
        self.save(&[])
    }

    pub fn save(&self, entries: &[StageEntry]) -> Result<()> {
        write_atomic(&self.path, &serde_json::to_vec(entries)?)
    }
}
