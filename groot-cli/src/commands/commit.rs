use anyhow::Result;
use colored::Colorize;
use groot_core::Error;
use std::path::PathBuf;

pub fn run(message: String, repo: Option<PathBuf>) -> Result<()> {
    let repo = super::open_repo(repo)?;

    let hash = match repo.commit(&message) {
        Ok(hash) => hash,
        Err(Error::NothingToCommit) => {
            println!("{}", "Nothing to commit".yellow());
            println!("Run {} to stage files", "groot add <file>".cyan());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let commit = repo.get_commit(&hash)?;

    println!("{}", "✓ Commit created successfully!".green().bold());
    println!("  {}: {}", "Commit".bold(), hash);
    println!("  {}: {}", "Message".bold(), commit.message);
    println!("  {}: {}", "Files".bold(), commit.files.len());

    Ok(())
}
