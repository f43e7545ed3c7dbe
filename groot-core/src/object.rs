//! Content-addressed object storage.
//!
//! Every object lives at `objects/<hash>` where `hash` is the hex-encoded
//! SHA-256 of its bytes. File blobs and commits share this flat namespace;
//! no type tag is stored, so callers must know what they expect to read.

use crate::atomic::write_atomic;
use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Length of a hex-encoded SHA-256 digest.
pub const HASH_LEN: usize = 64;

/// Computes the object hash for `content`.
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Returns true if `hash` looks like an object hash. Anything else is
/// rejected before it is joined onto a filesystem path.
pub fn is_valid_hash(hash: &str) -> bool {
    hash.len() == HASH_LEN && hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[derive(Debug, Clone)]
pub struct ObjectStore {
    dir: PathBuf,
}

impl ObjectStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Stores `content` and returns its hash. Writing content that is
    /// already present is a no-op.
    pub fn write(&self, content: &[u8]) -> Result<String> {
        let hash = hash_content(content);
        let path = self.dir.join(&hash);

        if path.exists() {
            debug!(%hash, "object already stored");
            return Ok(hash);
        }

        write_atomic(&path, content)?;
        debug!(%hash, bytes = content.len(), "stored object");
        Ok(hash)
    }

    pub fn read(&self, hash: &str) -> Result<Vec<u8>> {
        if !is_valid_hash(hash) {
            return Err(Error::NotFound(hash.to_string()));
        }

        fs::read(self.dir.join(hash)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound(hash.to_string()),
            _ => Error::Io(e),
        })
    }

    pub fn contains(&self, hash: &str) -> bool {
        is_valid_hash(hash) && self.dir.join(hash).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, ObjectStore) {
        let dir = TempDir::new().unwrap();
        let store = ObjectStore::new(dir.path());
        (dir, store)
    }

    fn object_count(dir: &TempDir) -> usize {
        fs::read_dir(dir.path()).unwrap().count()
    }

    #[test]
    fn test_write_then_read() {
        let (_dir, store) = store();
        let hash = store.write(b"Hello, World!").unwrap();

        assert!(is_valid_hash(&hash));
        assert_eq!(store.read(&hash).unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_write_is_idempotent() {
        let (dir, store) = store();
        let first = store.write(b"same content").unwrap();
        let second = store.write(b"same content").unwrap();

        assert_eq!(first, second);
        assert_eq!(object_count(&dir), 1);
    }

    #[test]
    fn test_distinct_contents_get_distinct_hashes() {
        let samples: [&[u8]; 6] = [b"", b"a", b"b", b"a\n", b"ab", b"ba"];
        let mut hashes: Vec<String> = samples.iter().map(|c| hash_content(c)).collect();
        hashes.sort();
        hashes.dedup();

        assert_eq!(hashes.len(), samples.len());
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_content(b"x"),
            "2d711642b726b04401627ca9fbac32f5c8530fb1903cc4db02258717921a4881"
        );
    }

    #[test]
    fn test_missing_object_is_not_found() {
        let (_dir, store) = store();
        let err = store.read(&hash_content(b"never written")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_malformed_hash_is_not_found() {
        let (_dir, store) = store();
        let not_hex = "g".repeat(HASH_LEN);
        for bad in ["", "../HEAD", "ABC", not_hex.as_str()] {
            assert!(matches!(store.read(bad), Err(Error::NotFound(_))));
            assert!(!store.contains(bad));
        }
    }
}
