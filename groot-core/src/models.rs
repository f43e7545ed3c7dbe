use crate::error::{Error, Result};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A staged file: the path the user gave and the hash of its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageEntry {
    pub path: String,
    pub hash: String,
}

impl StageEntry {
    pub fn new(path: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hash: hash.into(),
        }
    }
}

/// An immutable snapshot of the staging index.
///
/// Commits are stored as objects, so the field order below is part of the
/// on-disk format: serializing the same commit must always produce the same
/// bytes, and therefore the same hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Commit {
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub files: Vec<StageEntry>,
    pub parent: Option<String>,
}

impl Commit {
    pub fn new(message: String, files: Vec<StageEntry>) -> Self {
        Self {
            // The on-disk format keeps milliseconds only
            timestamp: Utc::now().trunc_subsecs(3),
            message,
            files,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Option<String>) -> Self {
        self.parent = parent;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Looks up the entry recorded for `path`. When a path was staged more
    /// than once, the most recent entry wins.
    pub fn file(&self, path: &str) -> Option<&StageEntry> {
        self.files.iter().rev().find(|entry| entry.path == path)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(hash: &str, bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::CorruptCommit {
            hash: hash.to_string(),
            reason: e.to_string(),
        })
    }
}

mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
