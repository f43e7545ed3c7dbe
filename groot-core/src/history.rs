//! Walking the commit chain and diffing commits against their parents.

use crate::diff::{diff_lines, DiffSegment, DiffStats};
use crate::error::Result;
use crate::models::Commit;
use crate::repository::Repository;

#[derive(Debug, Clone)]
pub struct CommitInfo {
    pub hash: String,
    pub commit: Commit,
}

/// Iterator over the chain from a starting commit back to the root.
///
/// Each step resolves one commit. A link that cannot be resolved yields the
/// error and ends the walk.
pub struct Walk<'a> {
    repo: &'a Repository,
    next: Option<String>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Result<CommitInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        let hash = self.next.take()?;
        match self.repo.get_commit(&hash) {
            Ok(commit) => {
                self.next = commit.parent.clone();
                Some(Ok(CommitInfo { hash, commit }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitDiff {
    /// The commit has no parent; nothing is diffed.
    FirstCommit,
    Files(Vec<FileDiff>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: String,
    pub change: FileChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// The parent commit has no entry for this path.
    NewFile,
    Modified(Vec<DiffSegment>),
    /// One side is not valid UTF-8.
    Binary,
}

impl FileChange {
    pub fn stats(&self) -> DiffStats {
        match self {
            FileChange::Modified(segments) => DiffStats::from_segments(segments),
            _ => DiffStats::default(),
        }
    }
}

impl Repository {
    /// Walks from the current head to the root, newest first. Each call
    /// re-reads `HEAD`.
    pub fn walk(&self) -> Walk<'_> {
        self.walk_from(self.current_head())
    }

    pub fn walk_from(&self, start: Option<String>) -> Walk<'_> {
        Walk {
            repo: self,
            next: start,
        }
    }

    /// Diffs every file in `commit` against the entry for the same path in
    /// its parent.
    pub fn diff_against_parent(&self, commit: &Commit) -> Result<CommitDiff> {
        let parent = match &commit.parent {
            Some(hash) => self.get_commit(hash)?,
            None => return Ok(CommitDiff::FirstCommit),
        };

        let mut files = Vec::with_capacity(commit.files.len());
        for entry in &commit.files {
            let change = match parent.file(&entry.path) {
                None => FileChange::NewFile,
                Some(previous) => {
                    let old = self.objects().read(&previous.hash)?;
                    let new = self.objects().read(&entry.hash)?;
                    match (std::str::from_utf8(&old), std::str::from_utf8(&new)) {
                        (Ok(old), Ok(new)) => FileChange::Modified(diff_lines(old, new)),
                        _ => FileChange::Binary,
                    }
                }
            };

            files.push(FileDiff {
                path: entry.path.clone(),
                change,
            });
        }

        Ok(CommitDiff::Files(files))
    }
}
