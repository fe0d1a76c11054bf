//! The kinds of versioned artifact tracked by the version stream.

use std::path::Path;
use std::str::FromStr;

use crate::Error;

/// Kind of a stable version record.
///
/// The string form is the directory name under the versions root, so the
/// four values are part of the on-disk layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VersionKind {
    /// Helm chart versions (`charts/`)
    Chart,
    /// Binary package versions such as `helm` or `kubectl` (`packages/`)
    Package,
    /// Docker image tags (`docker/`)
    Docker,
    /// Git repository refs, e.g. for boot configuration or build packs (`git/`)
    Git,
}

impl VersionKind {
    /// Every kind, in directory walk order.
    pub const ALL: [VersionKind; 4] = [Self::Chart, Self::Package, Self::Docker, Self::Git];

    /// Get the directory name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chart => "charts",
            Self::Package => "packages",
            Self::Docker => "docker",
            Self::Git => "git",
        }
    }

    /// All kinds as strings, for validating command line arguments.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(VersionKind::as_str).collect()
    }
}

impl FromStr for VersionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::InvalidKind { kind: s.to_string() })
    }
}

impl AsRef<Path> for VersionKind {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for VersionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
