use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn run(limit: Option<usize>, repo: Option<PathBuf>) -> Result<()> {
    let repo = super::open_repo(repo)?;

    if repo.current_head().is_none() {
        println!("{}", "No commits yet".yellow());
        return Ok(());
    }

    let mut shown = 0;
    let mut walk = repo.walk();

    for info in walk.by_ref().take(limit.unwrap_or(usize::MAX)) {
        let info = info?;
        let commit = &info.commit;

        println!("{} {}", "Commit:".yellow().bold(), info.hash.yellow());
        println!(
            "{} {}",
            "Date:".bold(),
            commit.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        );
        println!();
        println!("    {}", commit.message);
        println!();
        println!(
            "    {} file(s)",
            commit.files.len().to_string().cyan()
        );
        println!();

        shown += 1;
    }

    if walk.next().is_some() {
        println!("{}", format!("... showing {} most recent commits", shown).dimmed());
        println!("Use {} to see more", "--limit N".cyan());
    }

    Ok(())
}
