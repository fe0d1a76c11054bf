//! Jenkins X version stream CLI
//!
//! Looks up, verifies and locks the stable versions recorded in a version
//! stream directory.

mod cli;
mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use jx_versionstream::VersionResolver;
use jx_versionstream::config::default_versions_dir;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let versions_dir = resolve_versions_dir(cli.versions_dir)?;
    tracing::debug!("using version stream at {}", versions_dir.display());
    let resolver = VersionResolver::new(versions_dir);

    execute_command(&resolver, cli.command)
}

fn resolve_versions_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    flag.or_else(default_versions_dir).ok_or_else(|| {
        CliError::user("could not determine the version stream directory; pass --versions-dir")
    })
}

fn execute_command(resolver: &VersionResolver, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Get { kind, name } => commands::run_get(resolver, kind, &name),
        Commands::Show { kind, name } => commands::run_show(resolver, kind, &name),
        Commands::ResolveImage { image } => commands::run_resolve_image(resolver, &image),
        Commands::ResolveGit { url } => commands::run_resolve_git(resolver, &url),
        Commands::Verify { packages } => commands::run_verify(resolver, packages),
        Commands::Lock {
            kind,
            name,
            version,
        } => commands::run_lock(resolver, &kind, &name, &version),
        Commands::Bump {
            pattern,
            version,
            exclude,
        } => commands::run_bump(resolver, &pattern, &version, &exclude),
        Commands::List { kind } => commands::run_list(resolver, kind),
        Commands::Prefix { url } => commands::run_prefix(resolver, &url),
        Commands::Quickstarts => commands::run_quickstarts(resolver),
    }
}
