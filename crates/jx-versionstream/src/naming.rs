//! Name normalization for version records.

use std::path::{Component, Path};

use crate::{Error, Result};

/// Convert a git URL into the name used to store its version record.
///
/// Trims the URL scheme, then any trailing `.git`, then any trailing `/`:
/// `https://github.com/jenkins-x/jx.git` -> `github.com/jenkins-x/jx`
pub fn git_url_to_name(url: &str) -> String {
    let mut name = match url.find("://") {
        Some(idx) if idx > 0 => &url[idx + 3..],
        _ => url,
    };
    name = name.strip_suffix(".git").unwrap_or(name);
    name = name.strip_suffix('/').unwrap_or(name);
    name.to_string()
}

/// Convert a record file path into its record name relative to `base`.
///
/// The extension is dropped and components are joined with `/` on every
/// platform: `<base>/jenkins-x/tekton.yml` -> `jenkins-x/tekton`
pub fn name_from_path(base: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).map_err(|_| Error::NotRelative {
        path: path.to_path_buf(),
        base: base.to_path_buf(),
    })?;
    let relative = relative.with_extension("");

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}
