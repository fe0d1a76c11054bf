//! The version resolver used by install, build pack and image code.
//!
//! Every call reads the versions dir afresh, so changes made by a `git pull`
//! of the version stream are picked up without rebuilding the resolver.

use std::collections::BTreeMap;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use crate::naming::git_url_to_name;
use crate::stable_version::load_stable_version;
use crate::{
    Error, QuickStarts, RepositoryPrefixes, Result, StableVersion, VERSION_STREAM_DOCS_URL,
    VersionKind, lock_command, walk,
};

const DOCKER_IO_PREFIX: &str = "docker.io/";

/// Resolves versions of charts, packages, docker images and git repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResolver {
    versions_dir: PathBuf,
}

impl VersionResolver {
    /// Create a resolver for a versions dir, typically a clone of the version stream.
    pub fn new(versions_dir: impl Into<PathBuf>) -> Self {
        Self {
            versions_dir: versions_dir.into(),
        }
    }

    pub fn versions_dir(&self) -> &Path {
        &self.versions_dir
    }

    /// Ensure a docker image has a tag when the version stream has one for it.
    ///
    /// Images which already carry a tag are returned unchanged. Images without
    /// a locked version are returned unchanged with a warning.
    pub fn resolve_docker_image(&self, image: &str) -> Result<String> {
        if let Some((_, tag)) = image.split_once(':') {
            if !tag.is_empty() {
                return Ok(image.to_string());
            }
        }
        let image_name = image.trim().trim_end_matches(':');

        let mut name = image_name;
        let mut info = self.stable_version(VersionKind::Docker, name)?;
        if info.version.is_empty() {
            if let Some(stripped) = name.strip_prefix(DOCKER_IO_PREFIX) {
                name = stripped;
                info = self.stable_version(VersionKind::Docker, name)?;
            }
        }

        if info.version.is_empty() {
            tracing::warn!(
                "could not find a stable version for Docker image: {name} in {}",
                self.versions_dir.display()
            );
            tracing::warn!("for background see: {VERSION_STREAM_DOCS_URL}");
            tracing::info!(
                "please lock this version down via the command: {}",
                lock_command(VersionKind::Docker, name, Some("1.2.3"))
            );
            return Ok(image.to_string());
        }
        Ok(format!("{name}:{}", info.version))
    }

    /// The stable version record of the given kind and name.
    pub fn stable_version(&self, kind: VersionKind, name: &str) -> Result<StableVersion> {
        load_stable_version(&self.versions_dir, kind, name)
    }

    /// The stable version number of the given kind and name, empty when none is locked.
    pub fn stable_version_number(&self, kind: VersionKind, name: &str) -> Result<String> {
        let version = self.stable_version(kind, name)?.version;
        if !version.is_empty() {
            tracing::debug!(
                "using stable version {version} from {kind} of {name} from {}",
                self.versions_dir.display()
            );
        } else if !(kind == VersionKind::Chart && name == ".") {
            // "." is the chart being built in the current dir, which is never locked
            tracing::warn!(
                "could not find a stable version from {kind} of {name} from {}\nFor background see: {VERSION_STREAM_DOCS_URL}",
                self.versions_dir.display()
            );
            tracing::info!(
                "Please lock this version down via the command: {}",
                lock_command(kind, name, None)
            );
        }
        Ok(version)
    }

    /// The version to use for a git repository.
    pub fn resolve_git_version(&self, git_url: &str) -> Result<String> {
        let answer = self.stable_version_number(VersionKind::Git, git_url)?;
        if answer.is_empty() {
            let path = git_url_to_name(git_url);
            tracing::warn!(
                "could not find a stable version for git repository: {git_url} in {}",
                self.versions_dir.display()
            );
            tracing::warn!("for background see: {VERSION_STREAM_DOCS_URL}");
            tracing::info!(
                "please lock this version down via the command: {}",
                lock_command(VersionKind::Git, &path, Some("1.2.3"))
            );
        }
        Ok(answer)
    }

    /// Verify the current versions of several packages.
    ///
    /// Packages are checked in name order and packages with no current version
    /// are skipped. Every failure is reported in one [`Error::Verification`].
    pub fn verify_packages<'a, I>(&self, packages: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let sorted: BTreeMap<&String, &String> = packages.into_iter().collect();
        let mut errors: Vec<Error> = sorted
            .into_iter()
            .filter(|(_, version)| !version.is_empty())
            .filter_map(|(name, version)| self.verify_package(name, version).err())
            .collect();

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Error::Verification(errors)),
        }
    }

    /// Verify the current version of a package against its stable version.
    pub fn verify_package(&self, name: &str, current_version: &str) -> Result<()> {
        let data = self.stable_version(VersionKind::Package, name)?;
        data.verify_package(name, current_version, &self.versions_dir.to_string_lossy())
    }

    /// The chart repository prefixes of the version stream.
    pub fn repository_prefixes(&self) -> Result<RepositoryPrefixes> {
        RepositoryPrefixes::load(&self.versions_dir)
    }

    /// The quickstart catalog of the version stream.
    pub fn quickstarts(&self) -> Result<QuickStarts> {
        QuickStarts::load(&self.versions_dir)
    }

    /// Rewrite the quickstart catalog of the version stream.
    pub fn save_quickstarts(&self, quickstarts: &QuickStarts) -> Result<()> {
        quickstarts.save(&self.versions_dir)
    }

    /// Visit every stable version record in the version stream.
    pub fn for_each_version<F>(&self, callback: F) -> Result<()>
    where
        F: FnMut(VersionKind, &str, &StableVersion) -> Result<ControlFlow<()>>,
    {
        walk::for_each_version(&self.versions_dir, callback)
    }
}
