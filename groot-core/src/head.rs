use crate::atomic::write_atomic;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The `HEAD` file: the hash of the newest commit, or empty before the first
/// commit.
#[derive(Debug, Clone)]
pub struct Head {
    path: PathBuf,
}

impl Head {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the current head, or `None` if there is no history yet.
    /// A missing or unreadable file counts as no history.
    pub fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let hash = raw.trim();
                (!hash.is_empty()).then(|| hash.to_string())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read HEAD");
                None
            }
        }
    }

    pub fn set(&self, hash: &str) -> Result<()> {
        debug!(%hash, "moving HEAD");
        write_atomic(&self.path, hash.as_bytes())
    }
}
