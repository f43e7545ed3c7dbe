use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn run(repo: Option<PathBuf>) -> Result<()> {
    let repo = super::open_repo(repo)?;
    let staged = repo.staged()?;

    match repo.current_head() {
        Some(head) => println!("  {}: {}", "HEAD".bold(), head),
        None => println!("  {}: {}", "HEAD".bold(), "(no commits yet)".dimmed()),
    }
    println!();

    if staged.is_empty() {
        println!("{}", "Nothing staged".green());
        return Ok(());
    }

    println!(
        "{} {}",
        "Staged files:".bold(),
        format!("({})", staged.len()).yellow()
    );
    println!();

    for entry in &staged {
        let short = entry.hash.get(..12).unwrap_or(&entry.hash);
        println!("  {} {} {}", "+".green(), entry.path, short.dimmed());
    }

    println!();
    println!(
        "Run {} to commit these files",
        "groot commit \"message\"".cyan()
    );

    Ok(())
}
