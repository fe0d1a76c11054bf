//! The quickstart catalog stored in `quickstarts.yml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Result, io};

/// File holding the quickstart catalog, relative to the versions dir.
pub const QUICKSTARTS_FILE: &str = "quickstarts.yml";

/// Owner used for quickstarts which do not name one.
pub const DEFAULT_QUICKSTART_OWNER: &str = "jenkins-x-quickstarts";

/// One quickstart project in the version stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStart {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub framework: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(
        default,
        rename = "downloadZipURL",
        skip_serializing_if = "String::is_empty"
    )]
    pub download_zip_url: String,
}

impl QuickStart {
    fn default_missing_values(&mut self, default_owner: &str) {
        if self.owner.is_empty() {
            self.owner = default_owner.to_string();
        }
        if self.id.is_empty() {
            self.id = format!("{}/{}", self.owner, self.name);
        }
        if self.download_zip_url.is_empty() {
            self.download_zip_url = format!(
                "https://codeload.github.com/{}/{}/zip/master",
                self.owner, self.name
            );
        }
    }
}

/// The quickstart catalog of a version stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStarts {
    #[serde(default)]
    pub quickstarts: Vec<QuickStart>,
    #[serde(default, rename = "defaultOwner")]
    pub default_owner: String,
}

impl QuickStarts {
    /// Path of the catalog below a versions dir.
    pub fn path(versions_dir: &Path) -> PathBuf {
        versions_dir.join(QUICKSTARTS_FILE)
    }

    /// Load the catalog of a versions dir. A missing file gives an empty catalog.
    pub fn load(versions_dir: &Path) -> Result<Self> {
        io::load_yaml_or_default(&Self::path(versions_dir))
    }

    /// Rewrite the whole catalog file.
    pub fn save(&self, versions_dir: &Path) -> Result<()> {
        io::save_yaml(&Self::path(versions_dir), self)
    }

    /// Fill in owner, ID and download URL where they are missing.
    ///
    /// Values which are already set are left alone, so this is idempotent.
    pub fn default_missing_values(&mut self) {
        if self.default_owner.is_empty() {
            self.default_owner = DEFAULT_QUICKSTART_OWNER.to_string();
        }
        for quickstart in &mut self.quickstarts {
            quickstart.default_missing_values(&self.default_owner);
        }
    }

    /// Sort into name order, then owner order.
    pub fn sort(&mut self) {
        self.quickstarts
            .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.owner.cmp(&b.owner)));
    }
}
