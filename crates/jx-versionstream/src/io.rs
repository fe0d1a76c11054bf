//! File I/O for version stream documents

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// Distinguishes temp files of concurrent writers within one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Check whether a regular file exists at `path`.
///
/// A missing path is `Ok(false)`; a path that exists but is not a file
/// (e.g. a directory named `foo.yml`) is also `Ok(false)`.
pub fn file_exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Load a YAML document, returning `T::default()` when the file does not exist.
pub fn load_yaml_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !file_exists(path)? {
        return Ok(T::default());
    }
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_yaml(path, &content)
}

/// Parse YAML text, attributing failures to `path`.
///
/// Blank documents decode to `T::default()`.
pub fn parse_yaml<T>(path: &Path, content: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(content).map_err(|e| Error::YamlParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Marshal `value` as YAML and write it atomically to `path`.
pub fn save_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_yaml::to_string(value).map_err(|e| Error::YamlSerialize {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    write_atomic(path, content.as_bytes())
}

/// Write content atomically to a file.
///
/// Parent directories are created. Content goes to a temp file in the same
/// directory which is then renamed over the target, so readers see either the
/// old or the new document. Every call gets its own temp file; concurrent
/// writers of the same path are last-writer-wins.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
    temp_file.unlock().map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(path, e)
    })
}
