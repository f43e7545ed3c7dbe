pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
pub mod status;

use anyhow::{Context, Result};
use groot_core::Repository;
use std::path::PathBuf;
use tracing::debug;

pub fn get_work_dir(custom_path: Option<PathBuf>) -> PathBuf {
    custom_path.unwrap_or_else(|| PathBuf::from("."))
}

pub fn open_repo(custom_path: Option<PathBuf>) -> Result<Repository> {
    let work_dir = get_work_dir(custom_path);
    debug!(work_dir = %work_dir.display(), "opening repository");
    Repository::open(&work_dir).context("No groot repository found. Run 'groot init' first.")
}
