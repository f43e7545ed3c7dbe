use anyhow::{Context, Result};
use colored::Colorize;
use groot_core::{render, CommitDiff, FileChange, SegmentKind};
use std::path::PathBuf;

pub fn run(commit_hash: Option<String>, repo: Option<PathBuf>) -> Result<()> {
    let repo = super::open_repo(repo)?;

    let hash = match commit_hash.or_else(|| repo.current_head()) {
        Some(hash) => hash,
        None => {
            println!("{}", "No commits yet".yellow());
            return Ok(());
        }
    };

    let commit = repo
        .get_commit(&hash)
        .with_context(|| format!("Failed to read commit {}", hash))?;

    println!("{} {}", "Commit:".yellow().bold(), hash.yellow());
    println!("{} {}", "Message:".bold(), commit.message);
    println!();

    let files = match repo.diff_against_parent(&commit)? {
        CommitDiff::FirstCommit => {
            for entry in &commit.files {
                println!("{} {}", "File:".bold(), entry.path.white().bold());
            }
            println!();
            println!("{}", "First commit".cyan());
            return Ok(());
        }
        CommitDiff::Files(files) => files,
    };

    println!("Changes in this commit are:");
    println!();

    for file in files {
        println!("{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.path.white().bold());

        match &file.change {
            FileChange::NewFile => {
                println!("{}", "New file in this commit".green());
            }
            FileChange::Binary => {
                println!("  {}", "[Binary file changed]".dimmed());
            }
            FileChange::Modified(segments) => {
                let stats = file.change.stats();
                println!(
                    "{} {} {}",
                    "Diff:".bold(),
                    format!("+{}", stats.added).green(),
                    format!("-{}", stats.removed).red()
                );
                for line in render(segments) {
                    let text = line.to_string();
                    match line.kind {
                        SegmentKind::Added => println!("{}", text.green()),
                        SegmentKind::Removed => println!("{}", text.red()),
                        SegmentKind::Unchanged => println!("{}", text.dimmed()),
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}
