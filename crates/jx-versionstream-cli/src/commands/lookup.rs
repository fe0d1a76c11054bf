//! Read-only lookups: get, show, resolve-image and resolve-git

use colored::Colorize;
use jx_versionstream::{VersionKind, VersionResolver};

use crate::error::{CliError, Result};

/// Run the get command
///
/// Prints the locked version, or nothing when the name is not locked.
pub fn run_get(resolver: &VersionResolver, kind: VersionKind, name: &str) -> Result<()> {
    let version = resolver.stable_version_number(kind, name)?;
    if !version.is_empty() {
        println!("{version}");
    }
    Ok(())
}

/// Run the show command
pub fn run_show(resolver: &VersionResolver, kind: VersionKind, name: &str) -> Result<()> {
    let record = resolver.stable_version(kind, name)?;
    if record.is_empty() {
        return Err(CliError::user(format!(
            "no stable version found for {kind} {name} in {}",
            resolver.versions_dir().display()
        )));
    }
    print!("{}", record.to_yaml()?);
    Ok(())
}

/// Run the resolve-image command
pub fn run_resolve_image(resolver: &VersionResolver, image: &str) -> Result<()> {
    let resolved = resolver.resolve_docker_image(image)?;
    println!("{resolved}");
    Ok(())
}

/// Run the resolve-git command
pub fn run_resolve_git(resolver: &VersionResolver, url: &str) -> Result<()> {
    let version = resolver.resolve_git_version(url)?;
    if version.is_empty() {
        eprintln!(
            "{} no stable version locked for {}",
            "warning:".yellow().bold(),
            url
        );
    } else {
        println!("{version}");
    }
    Ok(())
}
