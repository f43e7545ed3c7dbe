use anyhow::Result;
use colored::Colorize;
use groot_core::{InitStatus, Repository, GROOT_DIR};
use std::path::PathBuf;

pub fn run(repo: Option<PathBuf>) -> Result<()> {
    let work_dir = super::get_work_dir(repo);
    let (_, status) = Repository::init(&work_dir)?;

    match status {
        InitStatus::Created => {
            println!(
                "{} {}",
                "✓ Initialized empty repository in".green().bold(),
                work_dir.join(GROOT_DIR).display()
            );
        }
        InitStatus::AlreadyInitialized => {
            println!("{}", format!("Already initialised the {} folder", GROOT_DIR).yellow());
        }
    }

    Ok(())
}
