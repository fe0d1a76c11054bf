//! Walking every stable version record in a versions dir.

use std::ops::ControlFlow;
use std::path::Path;

use crate::naming::name_from_path;
use crate::prefixes::REPOSITORIES_FILE;
use crate::stable_version::load_stable_version_file;
use crate::{Error, Result, StableVersion, VersionKind};

/// Visit every record in the versions dir, kind by kind.
///
/// The callback returns [`ControlFlow::Break`] to stop the walk.
pub fn for_each_version<F>(dir: &Path, mut callback: F) -> Result<()>
where
    F: FnMut(VersionKind, &str, &StableVersion) -> Result<ControlFlow<()>>,
{
    for kind in VersionKind::ALL {
        if for_each_kind_version(dir, kind, &mut callback)?.is_break() {
            break;
        }
    }
    Ok(())
}

/// Visit every record of one kind, in path order.
///
/// Records may be nested (`charts/jenkins-x/tekton.yml` is named
/// `jenkins-x/tekton`). Hidden files and `charts/repositories.yml` are skipped.
pub fn for_each_kind_version<F>(
    dir: &Path,
    kind: VersionKind,
    mut callback: F,
) -> Result<ControlFlow<()>>
where
    F: FnMut(VersionKind, &str, &StableVersion) -> Result<ControlFlow<()>>,
{
    let kind_dir = dir.join(kind.as_str());
    let pattern = kind_dir.join("**").join("*.yml");
    let pattern = pattern.to_string_lossy();
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };
    let mut paths = glob::glob_with(&pattern, options)
        .map_err(|e| Error::Glob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::io(e.path().to_path_buf(), e.into_error()))?;
    paths.sort();

    for path in paths {
        if !path.is_file() {
            continue;
        }
        let name = name_from_path(&kind_dir, &path)?;
        if kind == VersionKind::Chart && format!("{name}.yml") == REPOSITORIES_FILE {
            continue;
        }
        let wrap = |source: Error| Error::Walk {
            kind: kind.to_string(),
            name: name.clone(),
            source: Box::new(source),
        };

        let data = load_stable_version_file(&path).map_err(wrap)?;
        if callback(kind, &name, &data).map_err(wrap)?.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    }
    Ok(ControlFlow::Continue(()))
}
