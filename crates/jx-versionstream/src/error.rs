//! Error types for jx-versionstream

use std::path::PathBuf;

/// Result type for version stream operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, verifying or updating the version stream
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to unmarshal YAML for file {path}: {message}")]
    YamlParse { path: PathBuf, message: String },

    #[error("failed to marshal YAML for {path}: {message}")]
    YamlSerialize { path: PathBuf, message: String },

    #[error("failed to parse semantic version {version} for package {name}: {source}")]
    InvalidVersion {
        name: String,
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("package {name} is on version {current} but the version stream requires version {required}")]
    VersionMismatch {
        name: String,
        current: String,
        required: String,
    },

    #[error("package {name} is an old version {current}. The version stream requires at least {required}")]
    VersionTooOld {
        name: String,
        current: String,
        required: String,
    },

    #[error("package {name} is using version {current} which is too new. The version stream requires a version earlier than {upper_limit}")]
    VersionTooNew {
        name: String,
        current: String,
        upper_limit: String,
    },

    #[error("{}", join_messages(.0))]
    Verification(Vec<Error>),

    #[error("invalid version kind '{kind}'. Possible values: charts, packages, docker, git")]
    InvalidKind { kind: String },

    #[error("failed to expand glob {pattern}: {message}")]
    Glob { pattern: String, message: String },

    #[error("failed to process kind {kind} name {name}: {source}")]
    Walk {
        kind: String,
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("path {path} is not inside {base}")]
    NotRelative { path: PathBuf, base: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors describing a version outside the locked range.
    ///
    /// Only these can be switched off with `JX_DISABLE_VERIFY_<NAME>`.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::VersionMismatch { .. } | Self::VersionTooOld { .. } | Self::VersionTooNew { .. }
        )
    }
}

fn join_messages(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
