use crate::atomic::write_atomic;
use crate::error::{Error, Result};
use crate::head::Head;
use crate::index::StagingIndex;
use crate::models::{Commit, StageEntry};
use crate::object::ObjectStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the repository directory inside a work tree.
pub const GROOT_DIR: &str = ".groot";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    Created,
    AlreadyInitialized,
}

/// Handle to a repository on disk.
///
/// The handle holds paths only. `HEAD`, the index and the objects are read
/// from disk on every call, so the files are always authoritative.
#[derive(Debug, Clone)]
pub struct Repository {
    work_dir: PathBuf,
    repo_dir: PathBuf,
    objects: ObjectStore,
    index: StagingIndex,
    head: Head,
}

impl Repository {
    /// Creates `.groot/` under `work_dir`. Existing `HEAD` and `index` files
    /// are left untouched, which makes this safe to run twice.
    pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<(Self, InitStatus)> {
        let repo = Self::at(work_dir.as_ref());
        fs::create_dir_all(repo.repo_dir.join("objects"))?;

        let mut created = false;
        if !repo.head_path().exists() {
            write_atomic(&repo.head_path(), b"")?;
            created = true;
        }
        if !repo.index_path().exists() {
            repo.index.save(&[])?;
            created = true;
        }

        let status = if created {
            info!(path = %repo.repo_dir.display(), "initialized repository");
            InitStatus::Created
        } else {
            info!(path = %repo.repo_dir.display(), "repository already initialized");
            InitStatus::AlreadyInitialized
        };

        Ok((repo, status))
    }

    pub fn open<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let repo = Self::at(work_dir.as_ref());
        if !repo.repo_dir.join("objects").is_dir() || !repo.index_path().is_file() {
            return Err(Error::NotARepository(repo.work_dir));
        }
        Ok(repo)
    }

    fn at(work_dir: &Path) -> Self {
        let repo_dir = work_dir.join(GROOT_DIR);
        Self {
            work_dir: work_dir.to_path_buf(),
            objects: ObjectStore::new(repo_dir.join("objects")),
            index: StagingIndex::new(repo_dir.join("index")),
            head: Head::new(repo_dir.join("HEAD")),
            repo_dir,
        }
    }

    fn head_path(&self) -> PathBuf {
        self.repo_dir.join("HEAD")
    }

    fn index_path(&self) -> PathBuf {
        self.repo_dir.join("index")
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    /// Reads the file at `path` (relative paths resolve against the work
    /// tree) and stages its content under `path`.
    pub fn stage_file(&self, path: &str) -> Result<String> {
        let content = fs::read(self.work_dir.join(path)).map_err(|source| Error::SourceNotFound {
            path: path.to_string(),
            source,
        })?;
        self.stage_bytes(path, &content)
    }

    /// Stores `content` and appends `{path, hash}` to the staging index.
    pub fn stage_bytes(&self, path: &str, content: &[u8]) -> Result<String> {
        let hash = self.objects.write(content)?;
        self.index.append(StageEntry::new(path, hash.clone()))?;
        Ok(hash)
    }

    pub fn staged(&self) -> Result<Vec<StageEntry>> {
        self.index.entries()
    }

    pub fn current_head(&self) -> Option<String> {
        self.head.get()
    }

    /// Snapshots the staging index into a new commit on top of the current
    /// head.
    ///
    /// The object is written before `HEAD` moves, and `HEAD` moves before the
    /// index is cleared. An interrupted commit therefore leaves at worst an
    /// orphan object or a stale index, never a `HEAD` pointing at nothing.
    pub fn commit(&self, message: &str) -> Result<String> {
        let files = self.index.entries()?;
        if files.is_empty() {
            return Err(Error::NothingToCommit);
        }

        let commit = Commit::new(message.to_string(), files).with_parent(self.current_head());
        let hash = self.objects.write(&commit.to_bytes()?)?;

        self.head.set(&hash)?;
        self.index.clear()?;

        info!(%hash, files = commit.files.len(), "created commit");
        Ok(hash)
    }

    pub fn get_commit(&self, hash: &str) -> Result<Commit> {
        let bytes = self.objects.read(hash)?;
        Commit::from_bytes(hash, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::hash_content;
    use tempfile::TempDir;

    fn new_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let (repo, status) = Repository::init(dir.path()).unwrap();
        assert_eq!(status, InitStatus::Created);
        (dir, repo)
    }

    #[test]
    fn test_init_layout() {
        let (dir, repo) = new_repo();
        let root = dir.path().join(GROOT_DIR);

        assert_eq!(fs::read_to_string(root.join("HEAD")).unwrap(), "");
        assert_eq!(fs::read_to_string(root.join("index")).unwrap(), "[]");
        assert!(root.join("objects").is_dir());
        assert!(repo.staged().unwrap().is_empty());
        assert_eq!(repo.current_head(), None);
    }

    #[test]
    fn test_init_twice_keeps_state() {
        let (dir, repo) = new_repo();
        repo.stage_bytes("a.txt", b"x").unwrap();
        let head = repo.commit("m1").unwrap();
        repo.stage_bytes("b.txt", b"y").unwrap();

        let (again, status) = Repository::init(dir.path()).unwrap();

        assert_eq!(status, InitStatus::AlreadyInitialized);
        assert_eq!(again.current_head(), Some(head));
        assert_eq!(again.staged().unwrap().len(), 1);
    }

    #[test]
    fn test_open_requires_init() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Repository::open(dir.path()),
            Err(Error::NotARepository(_))
        ));

        Repository::init(dir.path()).unwrap();
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_stage_file_reads_from_work_tree() {
        let (dir, repo) = new_repo();
        fs::write(dir.path().join("a.txt"), "x").unwrap();

        let hash = repo.stage_file("a.txt").unwrap();

        assert_eq!(hash, hash_content(b"x"));
        assert_eq!(repo.objects().read(&hash).unwrap(), b"x");
        assert_eq!(repo.staged().unwrap(), vec![StageEntry::new("a.txt", hash)]);
    }

    #[test]
    fn test_stage_missing_file() {
        let (_dir, repo) = new_repo();
        let err = repo.stage_file("missing.txt").unwrap_err();

        assert!(matches!(err, Error::SourceNotFound { ref path, .. } if path == "missing.txt"));
        assert!(repo.staged().unwrap().is_empty());
    }

    #[test]
    fn test_stage_commit_round_trip() {
        let (dir, repo) = new_repo();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "y").unwrap();
        repo.stage_file("a.txt").unwrap();
        repo.stage_file("b.txt").unwrap();

        let hash = repo.commit("m1").unwrap();
        let commit = repo.get_commit(&hash).unwrap();

        assert_eq!(commit.message, "m1");
        assert_eq!(
            commit.files,
            vec![
                StageEntry::new("a.txt", hash_content(b"x")),
                StageEntry::new("b.txt", hash_content(b"y")),
            ]
        );
        assert_eq!(commit.parent, None);
        assert!(repo.staged().unwrap().is_empty());
    }

    #[test]
    fn test_commit_hash_is_content_address() {
        let (_dir, repo) = new_repo();
        repo.stage_bytes("a.txt", b"x").unwrap();
        let hash = repo.commit("m1").unwrap();

        let commit = repo.get_commit(&hash).unwrap();
        assert_eq!(hash_content(&commit.to_bytes().unwrap()), hash);
    }

    #[test]
    fn test_head_advances() {
        let (_dir, repo) = new_repo();
        repo.stage_bytes("a.txt", b"x").unwrap();
        let c1 = repo.commit("c1").unwrap();
        repo.stage_bytes("a.txt", b"x2").unwrap();
        let c2 = repo.commit("c2").unwrap();

        assert_eq!(repo.current_head(), Some(c2.clone()));
        assert_eq!(repo.get_commit(&c2).unwrap().parent, Some(c1));
    }

    #[test]
    fn test_empty_commit_is_rejected() {
        let (dir, repo) = new_repo();
        let objects_before = fs::read_dir(dir.path().join(GROOT_DIR).join("objects"))
            .unwrap()
            .count();

        assert!(matches!(repo.commit("empty"), Err(Error::NothingToCommit)));
        assert_eq!(repo.current_head(), None);
        assert_eq!(
            fs::read_dir(dir.path().join(GROOT_DIR).join("objects"))
                .unwrap()
                .count(),
            objects_before
        );
    }

    #[test]
    fn test_duplicate_paths_are_kept() {
        let (_dir, repo) = new_repo();
        repo.stage_bytes("a.txt", b"one").unwrap();
        repo.stage_bytes("a.txt", b"two").unwrap();

        let commit = repo.get_commit(&repo.commit("dup").unwrap()).unwrap();

        assert_eq!(commit.files.len(), 2);
        assert_eq!(commit.file("a.txt").unwrap().hash, hash_content(b"two"));
    }

    #[test]
    fn test_get_commit_on_blob_is_corrupt() {
        let (_dir, repo) = new_repo();
        let blob = repo.stage_bytes("a.txt", b"plain text").unwrap();

        assert!(matches!(
            repo.get_commit(&blob),
            Err(Error::CorruptCommit { .. })
        ));
    }

    #[test]
    fn test_get_unknown_commit() {
        let (_dir, repo) = new_repo();
        assert!(matches!(
            repo.get_commit(&hash_content(b"nope")),
            Err(Error::NotFound(_))
        ));
    }
}
