//! Verification of installed package versions against the version stream.
//!
//! A record without an upper limit pins an exact version. A record with an
//! upper limit accepts `version <= current < upperLimit`.

use semver::Version;

use crate::{Error, Result, StableVersion, VERSION_STREAM_DOCS_URL, VersionKind, lock_command};

/// Prefix of the environment variables which switch off verification of one package.
pub const DISABLE_VERIFY_ENV_PREFIX: &str = "JX_DISABLE_VERIFY_";

/// Remove whitespace and a `v` prefix from a version string.
///
/// Output of tools like `git version` carries trailing noise, so only the
/// first word is kept: `2.20.1 (Apple Git-117)` -> `2.20.1`
pub fn convert_to_version(text: &str) -> String {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    trimmed.split_whitespace().next().unwrap_or("").to_string()
}

/// Name of the environment variable which disables verification of `name`.
pub fn disable_verify_env_var(name: &str) -> String {
    format!("{DISABLE_VERIFY_ENV_PREFIX}{}", name.to_uppercase())
}

impl StableVersion {
    /// Verify that `current_version` of package `name` satisfies this record.
    ///
    /// `work_dir` is only used in log messages. Violations can be switched off
    /// per package with `JX_DISABLE_VERIFY_<NAME>=true`.
    pub fn verify_package(&self, name: &str, current_version: &str, work_dir: &str) -> Result<()> {
        self.verify_package_with_env(name, current_version, work_dir, |key| {
            std::env::var(key).ok()
        })
    }

    /// Like [`StableVersion::verify_package`], reading environment variables through `env`.
    pub fn verify_package_with_env<F>(
        &self,
        name: &str,
        current_version: &str,
        work_dir: &str,
        env: F,
    ) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        match self.check_package(name, current_version, work_dir) {
            Err(err) if err.is_constraint_violation() => suppress_if_disabled(name, err, env),
            other => other,
        }
    }

    fn check_package(&self, name: &str, current_version: &str, work_dir: &str) -> Result<()> {
        let current = convert_to_version(current_version);
        if current.is_empty() {
            return Ok(());
        }
        let required = convert_to_version(&self.version);
        if required.is_empty() {
            tracing::warn!(
                "could not find a stable package version for {name} from {work_dir}\nFor background see: {VERSION_STREAM_DOCS_URL}"
            );
            tracing::info!(
                "Please lock this version down via the command: {}",
                lock_command(VersionKind::Package, name, None)
            );
            return Ok(());
        }

        let current_sem = parse_semver(name, &current)?;
        let required_sem = parse_semver(name, &required)?;

        let upper_limit = convert_to_version(&self.upper_limit);
        // Build metadata has no precedence: 1.17.0+k3s1 satisfies 1.17.0
        if upper_limit.is_empty() {
            if current_sem.cmp_precedence(&required_sem).is_eq() {
                return Ok(());
            }
            return Err(Error::VersionMismatch {
                name: name.to_string(),
                current,
                required,
            });
        }

        if current_sem.cmp_precedence(&required_sem).is_lt() {
            return Err(Error::VersionTooOld {
                name: name.to_string(),
                current,
                required,
            });
        }

        let limit_sem = parse_semver(name, &upper_limit)?;
        if current_sem.cmp_precedence(&limit_sem).is_ge() {
            return Err(Error::VersionTooNew {
                name: name.to_string(),
                current,
                upper_limit,
            });
        }
        Ok(())
    }
}

fn parse_semver(name: &str, version: &str) -> Result<Version> {
    Version::parse(version).map_err(|source| Error::InvalidVersion {
        name: name.to_string(),
        version: version.to_string(),
        source,
    })
}

fn suppress_if_disabled<F>(name: &str, err: Error, env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let env_var = disable_verify_env_var(name);
    if !env_var
        .trim_start_matches(DISABLE_VERIFY_ENV_PREFIX)
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        // Not a portable variable name; most shells cannot export it.
        tracing::debug!("${env_var} is not a valid shell identifier");
    }
    match env(&env_var) {
        Some(value) if value.eq_ignore_ascii_case("true") => {
            tracing::warn!("${env_var} is true so disabling verify of {name}: {err}");
            Ok(())
        }
        _ => Err(err),
    }
}
