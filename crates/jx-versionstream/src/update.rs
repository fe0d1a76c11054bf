//! Bulk rewrites of stable version records.
//!
//! Used when raising a pull request against the version stream to bump a
//! version: the returned old versions feed the changelog.

use std::path::Path;

use crate::stable_version::{
    load_stable_version, load_stable_version_file, save_stable_version, save_stable_version_file,
};
use crate::{Error, Result, VersionKind};

/// Set `version` in every record file matched by `glob_pattern`.
///
/// Files whose name is in `exclude_files`, files without a version and files
/// already on `version` are left alone. Returns the old versions of the files
/// that were changed. The first load or save failure aborts the update.
pub fn update_stable_version_files<S: AsRef<str>>(
    glob_pattern: &str,
    version: &str,
    exclude_files: &[S],
) -> Result<Vec<String>> {
    let paths = glob::glob(glob_pattern).map_err(|e| Error::Glob {
        pattern: glob_pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut answer = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| Error::io(e.path().to_path_buf(), e.into_error()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if exclude_files.iter().any(|f| f.as_ref() == file_name) {
            tracing::debug!(path = %path.display(), "excluded from version update");
            continue;
        }

        let mut data = load_stable_version_file(&path)?;
        if data.version.is_empty() || data.version == version {
            continue;
        }
        tracing::info!(
            path = %path.display(),
            from = %data.version,
            to = %version,
            "updating stable version"
        );
        answer.push(std::mem::replace(&mut data.version, version.to_string()));
        save_stable_version_file(&path, &data)?;
    }
    Ok(answer)
}

/// Set `version` in the record for `(kind, name)` below `dir`.
///
/// Returns the old version, or an empty list when the record was already on
/// `version`. A missing record is created and reported with an empty old version.
pub fn update_stable_version(
    dir: &Path,
    kind: &str,
    name: &str,
    version: &str,
) -> Result<Vec<String>> {
    let kind: VersionKind = kind.parse()?;
    let mut data = load_stable_version(dir, kind, name)?;
    if data.version == version {
        return Ok(Vec::new());
    }
    let old = std::mem::replace(&mut data.version, version.to_string());
    save_stable_version(dir, kind, name, &data)?;
    tracing::info!(%kind, name, from = %old, to = %version, "updated stable version");
    Ok(vec![old])
}
