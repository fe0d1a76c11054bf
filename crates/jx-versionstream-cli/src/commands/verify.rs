//! Verify installed package versions

use std::collections::HashMap;

use colored::Colorize;
use jx_versionstream::VersionResolver;

use crate::error::Result;

/// Run the verify command
pub fn run_verify(resolver: &VersionResolver, packages: Vec<(String, String)>) -> Result<()> {
    // Repeated names collapse to the last version given
    let packages: HashMap<String, String> = packages.into_iter().collect();
    let count = packages.len();

    resolver.verify_packages(&packages)?;

    println!(
        "{} {} package(s) match the version stream",
        "OK".green().bold(),
        count
    );
    Ok(())
}
