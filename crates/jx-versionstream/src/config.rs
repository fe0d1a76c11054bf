//! Where the version stream lives on disk.

use std::path::PathBuf;

/// The git repository holding the default version stream.
pub const DEFAULT_VERSIONS_URL: &str = "https://github.com/jenkins-x/jenkins-x-versions.git";

/// Directory name of the version stream clone inside the jx home dir.
pub const VERSIONS_DIR_NAME: &str = "jenkins-x-versions";

/// Environment variable overriding the jx home dir.
pub const JX_HOME_ENV: &str = "JX_HOME";

/// Environment variable pointing directly at a versions dir.
pub const VERSIONS_DIR_ENV: &str = "JX_VERSIONS_DIR";

/// The jx home dir: `$JX_HOME`, or `~/.jx`.
pub fn jx_home_dir() -> Option<PathBuf> {
    jx_home_dir_from(std::env::var_os(JX_HOME_ENV).map(PathBuf::from), dirs::home_dir())
}

fn jx_home_dir_from(jx_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    match jx_home {
        Some(dir) if !dir.as_os_str().is_empty() => Some(dir),
        _ => home.map(|h| h.join(".jx")),
    }
}

/// The default location of the version stream clone.
pub fn default_versions_dir() -> Option<PathBuf> {
    jx_home_dir().map(|home| home.join(VERSIONS_DIR_NAME))
}
