//! # groot-core
//!
//! Core library for groot - a minimal single-user version-control engine.
//!
//! Files are stored in a content-addressed object store, queued in a staging
//! index, and snapshotted into a linear chain of commits that can be walked
//! and diffed line by line.

mod atomic;
pub mod diff;
pub mod error;
pub mod head;
pub mod history;
pub mod index;
pub mod models;
pub mod object;
pub mod repository;

pub use diff::{diff_lines, render, DiffSegment, DiffStats, RenderedLine, SegmentKind};
pub use error::{Error, Result};
pub use history::{CommitDiff, CommitInfo, FileChange, FileDiff, Walk};
pub use models::{Commit, StageEntry};
pub use object::{hash_content, ObjectStore};
pub use repository::{InitStatus, Repository, GROOT_DIR};
