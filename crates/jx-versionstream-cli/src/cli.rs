//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jx_versionstream::VersionKind;

/// Query and update the Jenkins X version stream
#[derive(Parser, Debug)]
#[command(name = "jx-versions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// The version stream directory (defaults to ~/.jx/jenkins-x-versions)
    #[arg(short = 'd', long, global = true, env = "JX_VERSIONS_DIR")]
    pub versions_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the stable version number of a chart, package, image or git repository
    ///
    /// Examples:
    ///   jx-versions get -k charts -n jenkins-x/tekton
    ///   jx-versions get -k git -n https://github.com/jenkins-x/jenkins-x-boot-config.git
    Get {
        /// The kind of version: charts, packages, docker or git
        #[arg(short, long, value_parser = parse_kind, default_value = "charts")]
        kind: VersionKind,

        /// The name of the chart, package, image or git URL
        #[arg(short, long)]
        name: String,
    },

    /// Print the full stable version record as YAML
    Show {
        /// The kind of version: charts, packages, docker or git
        #[arg(short, long, value_parser = parse_kind, default_value = "charts")]
        kind: VersionKind,

        /// The name of the chart, package, image or git URL
        #[arg(short, long)]
        name: String,
    },

    /// Add the stable version tag to a docker image which has none
    ResolveImage {
        /// The docker image, e.g. gcr.io/jenkinsxio/builder-go
        image: String,
    },

    /// Print the stable version of a git repository
    ResolveGit {
        /// The git URL of the repository
        url: String,
    },

    /// Verify installed package versions against the version stream
    ///
    /// Examples:
    ///   jx-versions verify helm=2.12.2 kubectl=1.13.4
    Verify {
        /// Packages to verify as NAME=VERSION
        #[arg(required = true, value_parser = parse_package)]
        packages: Vec<(String, String)>,
    },

    /// Lock a chart, package, image or git repository to a version
    Lock {
        /// The kind of version: charts, packages, docker or git
        #[arg(short, long, default_value = "charts")]
        kind: String,

        /// The name of the chart, package, image or git URL
        #[arg(short, long)]
        name: String,

        /// The version to lock to
        #[arg(short = 'v', long = "version")]
        version: String,
    },

    /// Update every version file matching a glob pattern
    ///
    /// Relative patterns are resolved against the version stream directory.
    ///
    /// Examples:
    ///   jx-versions bump 'charts/jenkins-x/*.yml' -v 2.0.1 --exclude tekton.yml
    Bump {
        /// Glob pattern of version files
        pattern: String,

        /// The new version
        #[arg(short = 'v', long = "version")]
        version: String,

        /// File names to leave unchanged
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List the stable versions in the version stream
    List {
        /// Only list one kind: charts, packages, docker or git
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<VersionKind>,
    },

    /// Print the chart repository prefix for a repository URL
    Prefix {
        /// The chart repository URL
        url: String,
    },

    /// List the quickstarts in the version stream
    Quickstarts,
}

fn parse_kind(s: &str) -> Result<VersionKind, String> {
    s.parse().map_err(|e: jx_versionstream::Error| e.to_string())
}

fn parse_package(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, version)) if !name.is_empty() => Ok((name.to_string(), version.to_string())),
        _ => Err(format!("expected NAME=VERSION but got '{s}'")),
    }
}
