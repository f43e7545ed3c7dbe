use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn run(file: String, repo: Option<PathBuf>) -> Result<()> {
    let repo = super::open_repo(repo)?;
    let hash = repo.stage_file(&file)?;

    println!("{}", hash.yellow());
    println!("{} {}", "Added".green(), file);

    Ok(())
}
