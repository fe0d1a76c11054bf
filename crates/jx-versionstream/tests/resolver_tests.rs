//! Resolver behavior against the sample version stream in `test_data/`.

mod common;

use std::collections::HashMap;

use jx_versionstream::{Error, StableVersion, VersionKind, VersionResolver, save_stable_version};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

fn resolver() -> VersionResolver {
    VersionResolver::new(common::fixture_dir())
}

// ============================================================================
// Stable version lookup
// ============================================================================

#[test]
fn test_stable_version_of_chart() {
    let version = resolver()
        .stable_version(VersionKind::Chart, "jenkins-x/knative-build")
        .unwrap();

    assert_eq!(version.version, "0.1.13");
    assert_eq!(version.git_url, "https://github.com/jenkins-x/knative-build");
}

#[test]
fn test_stable_version_missing_is_empty() {
    let version = resolver()
        .stable_version(VersionKind::Chart, "doesNotExist")
        .unwrap();

    assert!(version.is_empty());
    assert_eq!(version, StableVersion::default());
}

#[rstest]
#[case(VersionKind::Chart, "jenkins-x/tekton", "0.0.38")]
#[case(VersionKind::Package, "helm", "2.12.2")]
#[case(VersionKind::Docker, "gcr.io/jenkinsxio/builder-go", "0.1.700")]
#[case(VersionKind::Chart, ".", "")]
#[case(VersionKind::Package, "missing", "")]
fn test_stable_version_number(
    #[case] kind: VersionKind,
    #[case] name: &str,
    #[case] expected: &str,
) {
    assert_eq!(resolver().stable_version_number(kind, name).unwrap(), expected);
}

#[rstest]
#[case("https://github.com/jenkins-x/jenkins-x-boot-config")]
#[case("https://github.com/jenkins-x/jenkins-x-boot-config.git")]
#[case("http://github.com/jenkins-x/jenkins-x-boot-config/")]
#[case("github.com/jenkins-x/jenkins-x-boot-config")]
fn test_resolve_git_version_ignores_url_decorations(#[case] url: &str) {
    assert_eq!(resolver().resolve_git_version(url).unwrap(), "v1.0.10");
}

#[test]
fn test_resolve_git_version_missing() {
    let version = resolver()
        .resolve_git_version("https://github.com/acme/unknown.git")
        .unwrap();
    assert_eq!(version, "");
}

#[test]
fn test_malformed_record_is_an_error() {
    let temp = TempDir::new().unwrap();
    let packages = temp.path().join("packages");
    std::fs::create_dir_all(&packages).unwrap();
    std::fs::write(packages.join("jx.yml"), "version: [1.0.0\n").unwrap();

    let err = VersionResolver::new(temp.path())
        .stable_version(VersionKind::Package, "jx")
        .unwrap_err();

    match err {
        Error::YamlParse { path, .. } => assert!(path.ends_with("packages/jx.yml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Docker images
// ============================================================================

#[rstest]
#[case("gcr.io/jenkinsxio/builder-go", "gcr.io/jenkinsxio/builder-go:0.1.700")]
#[case("gcr.io/jenkinsxio/builder-go:", "gcr.io/jenkinsxio/builder-go:0.1.700")]
#[case("gcr.io/jenkinsxio/builder-go:0.1.1", "gcr.io/jenkinsxio/builder-go:0.1.1")]
#[case("nginx", "nginx:1.17.0")]
#[case("docker.io/nginx", "nginx:1.17.0")]
#[case("gcr.io/unknown/image", "gcr.io/unknown/image")]
#[case("docker.io/unknown", "docker.io/unknown")]
fn test_resolve_docker_image(#[case] image: &str, #[case] expected: &str) {
    assert_eq!(resolver().resolve_docker_image(image).unwrap(), expected);
}

#[test]
fn test_docker_io_record_wins_over_fallback() {
    let temp = TempDir::new().unwrap();
    save_stable_version(temp.path(), VersionKind::Docker, "docker.io/nginx", &StableVersion::new("1.0.0")).unwrap();
    save_stable_version(temp.path(), VersionKind::Docker, "nginx", &StableVersion::new("2.0.0")).unwrap();

    let image = VersionResolver::new(temp.path())
        .resolve_docker_image("docker.io/nginx")
        .unwrap();

    assert_eq!(image, "docker.io/nginx:1.0.0");
}

// ============================================================================
// Package verification
// ============================================================================

#[test]
fn test_verify_package_exact() {
    let resolver = resolver();
    assert!(resolver.verify_package("helm", "2.12.2").is_ok());
    assert!(resolver.verify_package("helm", "v2.12.2").is_ok());
    assert!(resolver.verify_package("helm", "2.12.3").is_err());
}

#[test]
fn test_verify_package_range() {
    let resolver = resolver();
    for valid in ["1.12.0", "1.12.1", "1.13.1"] {
        assert!(resolver.verify_package("kubectl", valid).is_ok(), "{valid}");
    }
    for invalid in ["1.10.1", "1.14.0", "2.0.0"] {
        assert!(resolver.verify_package("kubectl", invalid).is_err(), "{invalid}");
    }
}

#[test]
fn test_verify_package_noisy_git_version() {
    let resolver = resolver();
    assert!(resolver.verify_package("git", "2.20.1 (Apple Git-117)").is_ok());
    assert!(resolver.verify_package("git", "2.0.9 (Apple Git-117)").is_err());
}

#[test]
fn test_verify_unlocked_package_is_ok() {
    assert!(resolver().verify_package("terraform", "0.12.0").is_ok());
}

#[test]
fn test_verify_packages_reports_every_failure() {
    let packages: HashMap<String, String> = [
        ("kubectl", "2.0.0"),
        ("helm", "2.12.2"),
        ("git", "1.0.0"),
        ("jx", ""),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let err = resolver().verify_packages(&packages).unwrap_err();

    let Error::Verification(failures) = &err else {
        panic!("expected aggregate error, got {err:?}");
    };
    assert_eq!(failures.len(), 2);
    let message = err.to_string();
    let lines: Vec<&str> = message.lines().collect();
    assert!(lines[0].starts_with("package git "), "{message}");
    assert!(lines[1].starts_with("package kubectl "), "{message}");
    assert!(!message.contains("helm"));
}

#[test]
fn test_verify_packages_single_failure_is_not_wrapped() {
    let packages: HashMap<String, String> =
        HashMap::from([("helm".to_string(), "2.11.0".to_string())]);

    let err = resolver().verify_packages(&packages).unwrap_err();

    assert!(matches!(err, Error::VersionMismatch { .. }));
}

#[test]
fn test_verify_packages_all_valid() {
    let packages: HashMap<String, String> = HashMap::from([
        ("helm".to_string(), "2.12.2".to_string()),
        ("kubectl".to_string(), "1.13.4".to_string()),
    ]);
    assert!(resolver().verify_packages(&packages).is_ok());
}

// ============================================================================
// Repository prefixes and quickstarts
// ============================================================================

#[test]
fn test_repository_prefixes() {
    let prefixes = resolver().repository_prefixes().unwrap();

    assert_eq!(
        prefixes.prefix_for_url("https://storage.googleapis.com/chartmuseum.jenkins-x.io"),
        Some("jenkins-x")
    );
    assert_eq!(
        prefixes.urls_for_prefix("stable"),
        &["https://kubernetes-charts.storage.googleapis.com".to_string()]
    );
}

#[test]
fn test_repository_prefixes_missing_file() {
    let temp = TempDir::new().unwrap();
    let prefixes = VersionResolver::new(temp.path()).repository_prefixes().unwrap();
    assert!(prefixes.repositories.is_empty());
}

#[test]
fn test_quickstarts_defaulted_and_sorted() {
    let mut quickstarts = resolver().quickstarts().unwrap();
    quickstarts.default_missing_values();
    quickstarts.sort();

    let ids: Vec<&str> = quickstarts.quickstarts.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "acme/golang-http",
            "jenkins-x-quickstarts/golang-http",
            "jenkins-x-quickstarts/node-http",
        ]
    );
    assert_eq!(
        quickstarts.quickstarts[0].download_zip_url,
        "https://example.com/acme/golang-http.zip"
    );
}

#[test]
fn test_save_quickstarts_rewrites_file() {
    let temp = common::copy_fixture();
    let resolver = VersionResolver::new(temp.path());
    let mut quickstarts = resolver.quickstarts().unwrap();
    quickstarts.quickstarts.truncate(1);

    resolver.save_quickstarts(&quickstarts).unwrap();

    let reloaded = resolver.quickstarts().unwrap();
    assert_eq!(reloaded.quickstarts.len(), 1);
    assert_eq!(reloaded.quickstarts[0].name, "node-http");
}

#[test]
fn test_for_each_version_visits_fixture() {
    let mut names = Vec::new();
    resolver()
        .for_each_version(|kind, name, _| {
            names.push(format!("{kind}/{name}"));
            Ok(std::ops::ControlFlow::Continue(()))
        })
        .unwrap();

    assert!(names.contains(&"charts/jenkins-x/knative-build".to_string()));
    assert!(names.contains(&"git/github.com/jenkins-x/jenkins-x-boot-config".to_string()));
    assert!(!names.iter().any(|n| n == "charts/repositories"));
    assert_eq!(names.len(), 9);
}
