//! Stable version records and their on-disk store.
//!
//! Each record lives at `<versions dir>/<kind>/<name>.yml`. A missing file is
//! not an error: it loads as an empty [`StableVersion`], meaning no version
//! has been locked for that name.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::naming::git_url_to_name;
use crate::{Error, Result, VersionKind, io};

/// The stable version information for one chart, package, image or repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StableVersion {
    /// The default version to use
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// A version which is too new.
    ///
    /// With `version: 1.10.1` and `upperLimit: 1.14.0`, `1.11.5` and `1.13.1234`
    /// are valid but `1.14.0` and `1.14.1` are not.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub upper_limit: String,

    /// The URL to the source code
    #[serde(default, rename = "gitUrl", skip_serializing_if = "String::is_empty")]
    pub git_url: String,

    /// The component inside the git URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub component: String,

    /// The URL for the documentation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl StableVersion {
    /// Create a record locking exactly `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Create a record accepting `version <= v < upper_limit`.
    pub fn with_upper_limit(version: impl Into<String>, upper_limit: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            upper_limit: upper_limit.into(),
            ..Self::default()
        }
    }

    /// True when no field is set, i.e. no record was found.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Parse a record from YAML bytes without touching the filesystem.
    pub fn from_yaml(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data).map_err(|e| Error::YamlParse {
            path: PathBuf::from("<data>"),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(text)
    }

    /// Parse a record from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        io::parse_yaml(Path::new("<data>"), text)
    }

    /// Marshal the record as YAML. Empty fields are omitted.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::YamlSerialize {
            path: PathBuf::from("<data>"),
            message: e.to_string(),
        })
    }
}

/// Path of the record file for `(kind, name)` below `dir`.
///
/// Git names are normalized with [`git_url_to_name`] first.
pub fn stable_version_path(dir: &Path, kind: VersionKind, name: &str) -> PathBuf {
    let name = match kind {
        VersionKind::Git => git_url_to_name(name),
        _ => name.to_string(),
    };
    dir.join(kind.as_str()).join(format!("{name}.yml"))
}

/// Load the stable version for `(kind, name)`, or an empty record when none exists.
pub fn load_stable_version(dir: &Path, kind: VersionKind, name: &str) -> Result<StableVersion> {
    load_stable_version_file(&stable_version_path(dir, kind, name))
}

/// Load the stable version stored at `path`, or an empty record when the file is missing.
pub fn load_stable_version_file(path: &Path) -> Result<StableVersion> {
    io::load_yaml_or_default(path)
}

/// Save the stable version for `(kind, name)`, replacing any existing record.
pub fn save_stable_version(
    dir: &Path,
    kind: VersionKind,
    name: &str,
    record: &StableVersion,
) -> Result<()> {
    save_stable_version_file(&stable_version_path(dir, kind, name), record)
}

/// Save a stable version to `path`, creating parent directories as needed.
pub fn save_stable_version_file(path: &Path, record: &StableVersion) -> Result<()> {
    io::save_yaml(path, record)?;
    tracing::debug!(path = %path.display(), version = %record.version, "saved stable version");
    Ok(())
}
