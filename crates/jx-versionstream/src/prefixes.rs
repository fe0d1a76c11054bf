//! Chart repository prefixes from `charts/repositories.yml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{Result, io};

/// File holding the repository prefixes, relative to the versions dir.
pub const REPOSITORIES_FILE: &str = "repositories.yml";

/// The prefix and URLs for one chart repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryUrls {
    pub prefix: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Maps chart repository prefixes (e.g. `jenkins-x`) to repository URLs and back.
///
/// The lookup indexes are built once on first use and are safe to share
/// between threads.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RepositoryPrefixes {
    #[serde(default)]
    pub repositories: Vec<RepositoryUrls>,

    #[serde(skip)]
    url_to_prefix: OnceLock<HashMap<String, String>>,

    #[serde(skip)]
    prefix_to_urls: OnceLock<HashMap<String, Vec<String>>>,
}

impl RepositoryPrefixes {
    pub fn new(repositories: Vec<RepositoryUrls>) -> Self {
        Self {
            repositories,
            ..Self::default()
        }
    }

    /// Path of the prefixes file below a versions dir.
    pub fn path(versions_dir: &Path) -> PathBuf {
        versions_dir.join("charts").join(REPOSITORIES_FILE)
    }

    /// Load the prefixes of a versions dir. A missing file gives an empty map.
    pub fn load(versions_dir: &Path) -> Result<Self> {
        io::load_yaml_or_default(&Self::path(versions_dir))
    }

    /// The repository prefix for a chart repository URL.
    pub fn prefix_for_url(&self, url: &str) -> Option<&str> {
        self.url_to_prefix
            .get_or_init(|| {
                let mut index = HashMap::new();
                for repo in &self.repositories {
                    for u in &repo.urls {
                        index.insert(u.clone(), repo.prefix.clone());
                    }
                }
                index
            })
            .get(url)
            .map(String::as_str)
    }

    /// The repository URLs registered for a prefix. Unknown prefixes give an empty slice.
    pub fn urls_for_prefix(&self, prefix: &str) -> &[String] {
        self.prefix_to_urls
            .get_or_init(|| {
                self.repositories
                    .iter()
                    .map(|repo| (repo.prefix.clone(), repo.urls.clone()))
                    .collect()
            })
            .get(prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Clone for RepositoryPrefixes {
    fn clone(&self) -> Self {
        Self::new(self.repositories.clone())
    }
}

impl PartialEq for RepositoryPrefixes {
    fn eq(&self, other: &Self) -> bool {
        self.repositories == other.repositories
    }
}
