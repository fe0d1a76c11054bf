//! Commands which change the version stream: lock and bump

use std::path::Path;

use colored::Colorize;
use jx_versionstream::{VersionResolver, update_stable_version, update_stable_version_files};

use crate::error::Result;

/// Run the lock command
pub fn run_lock(resolver: &VersionResolver, kind: &str, name: &str, version: &str) -> Result<()> {
    let old = update_stable_version(resolver.versions_dir(), kind, name, version)?;

    match old.first() {
        None => println!("{} {} is already at {}", "unchanged:".dimmed(), name, version),
        Some(previous) if previous.is_empty() => {
            println!("{} {} to {}", "Locked".green().bold(), name.cyan(), version)
        }
        Some(previous) => println!(
            "{} {} from {} to {}",
            "Updated".green().bold(),
            name.cyan(),
            previous,
            version
        ),
    }
    Ok(())
}

/// Run the bump command
///
/// Relative patterns are resolved against the versions dir.
pub fn run_bump(
    resolver: &VersionResolver,
    pattern: &str,
    version: &str,
    exclude: &[String],
) -> Result<()> {
    let pattern = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        resolver.versions_dir().join(pattern).to_string_lossy().into_owned()
    };

    let old = update_stable_version_files(&pattern, version, exclude)?;

    if old.is_empty() {
        println!("{} no version files needed updating", "unchanged:".dimmed());
        return Ok(());
    }
    println!(
        "{} {} file(s) to {}",
        "Updated".green().bold(),
        old.len(),
        version
    );
    for previous in &old {
        println!("  {} {}", "was".dimmed(), previous);
    }
    Ok(())
}
