//! Version stream resolver for Jenkins X.
//!
//! A version stream is a directory tree (usually a clone of the
//! `jenkins-x-versions` repository) holding one small YAML record per locked
//! chart, package, docker image or git repository:
//!
//! ```text
//! <versions dir>/
//!   charts/<name>.yml
//!   charts/repositories.yml
//!   packages/<name>.yml
//!   docker/<image>.yml
//!   git/<host/owner/repo>.yml
//!   quickstarts.yml
//! ```
//!
//! [`VersionResolver`] is the entry point other code talks to. The free
//! functions in [`stable_version`], [`update`] and [`walk`] operate on the tree
//! directly.

pub mod config;
pub mod error;
pub mod io;
pub mod kind;
pub mod naming;
pub mod prefixes;
pub mod quickstarts;
pub mod resolver;
pub mod stable_version;
pub mod update;
pub mod verify;
pub mod walk;

pub use error::{Error, Result};
pub use kind::VersionKind;
pub use naming::{git_url_to_name, name_from_path};
pub use prefixes::{RepositoryPrefixes, RepositoryUrls};
pub use quickstarts::{QuickStart, QuickStarts};
pub use resolver::VersionResolver;
pub use stable_version::{StableVersion, load_stable_version, save_stable_version};
pub use update::{update_stable_version, update_stable_version_files};
pub use verify::convert_to_version;
pub use walk::{for_each_kind_version, for_each_version};

/// Documentation explaining what the version stream is and how to use it.
pub const VERSION_STREAM_DOCS_URL: &str = "https://jenkins-x.io/docs/concepts/version-stream/";

/// Build the command a user can run to lock down a missing version.
pub(crate) fn lock_command(kind: VersionKind, name: &str, version: Option<&str>) -> String {
    match version {
        Some(v) => format!("jx step create pr versions -k {kind} -n {name} -v {v}"),
        None => format!("jx step create pr versions -k {kind} -n {name}"),
    }
}
