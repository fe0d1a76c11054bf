//! Listing commands: list, prefix and quickstarts

use std::ops::ControlFlow;

use colored::Colorize;
use jx_versionstream::{StableVersion, VersionKind, VersionResolver, for_each_kind_version};

use crate::error::{CliError, Result};

/// Run the list command
///
/// Prints one `kind name version` line per record.
pub fn run_list(resolver: &VersionResolver, kind: Option<VersionKind>) -> Result<()> {
    let print = |kind: VersionKind,
                 name: &str,
                 record: &StableVersion|
     -> jx_versionstream::Result<ControlFlow<()>> {
        println!("{kind} {name} {}", record.version);
        Ok(ControlFlow::Continue(()))
    };

    match kind {
        Some(kind) => {
            for_each_kind_version(resolver.versions_dir(), kind, print)?;
        }
        None => resolver.for_each_version(print)?,
    }
    Ok(())
}

/// Run the prefix command
pub fn run_prefix(resolver: &VersionResolver, url: &str) -> Result<()> {
    let prefixes = resolver.repository_prefixes()?;
    match prefixes.prefix_for_url(url) {
        Some(prefix) => {
            println!("{prefix}");
            Ok(())
        }
        None => Err(CliError::user(format!(
            "no chart repository prefix registered for {url}"
        ))),
    }
}

/// Run the quickstarts command
pub fn run_quickstarts(resolver: &VersionResolver) -> Result<()> {
    let mut quickstarts = resolver.quickstarts()?;
    quickstarts.default_missing_values();
    quickstarts.sort();

    if quickstarts.quickstarts.is_empty() {
        println!("{}", "No quickstarts found.".dimmed());
        return Ok(());
    }
    for quickstart in &quickstarts.quickstarts {
        if quickstart.version.is_empty() {
            println!("{}", quickstart.id);
        } else {
            println!("{} {}", quickstart.id, quickstart.version.dimmed());
        }
    }
    Ok(())
}
