use jx_versionstream::{StableVersion, convert_to_version, git_url_to_name};
use proptest::prelude::*;

/// Version strings as tools print them: optional `v`, surrounding whitespace,
/// trailing platform noise.
fn version_text() -> impl Strategy<Value = String> {
    (
        "[ \t]{0,2}",
        prop::option::of(Just("v")),
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-[a-z0-9]{1,5})?",
        prop::option::of("\\([A-Za-z]+ [A-Za-z]+-[0-9]{1,3}\\)"),
        "[ \t\n]{0,2}",
    )
        .prop_map(|(lead, v, version, noise, trail)| {
            let noise = noise.map(|n| format!(" {n}")).unwrap_or_default();
            format!("{lead}{}{version}{noise}{trail}", v.unwrap_or(""))
        })
}

proptest! {
    #[test]
    fn test_convert_to_version_is_idempotent(s in version_text()) {
        let once = convert_to_version(&s);
        prop_assert_eq!(convert_to_version(&once), once.clone());
        prop_assert!(!once.contains(char::is_whitespace));
        prop_assert!(!once.starts_with('v'));
    }

    #[test]
    fn test_convert_to_version_never_keeps_whitespace(s in "\\PC*") {
        let converted = convert_to_version(&s);
        prop_assert!(!converted.contains(char::is_whitespace));
    }

    #[test]
    fn test_git_url_decorations_map_to_one_name(
        host in "[a-z]{1,10}\\.(com|io)",
        owner in "[a-z0-9-]{1,12}",
        repo in "[a-z0-9-]{1,12}",
        scheme in prop::sample::select(vec!["https://", "http://", "git://", ""])
    ) {
        let plain = format!("{host}/{owner}/{repo}");
        let expected = git_url_to_name(&format!("https://{plain}"));
        prop_assert_eq!(&expected, &plain);
        prop_assert_eq!(git_url_to_name(&format!("{scheme}{plain}")), plain.clone());
        prop_assert_eq!(git_url_to_name(&format!("{scheme}{plain}.git")), plain.clone());
        prop_assert_eq!(git_url_to_name(&format!("{scheme}{plain}/")), plain.clone());
    }

    #[test]
    fn test_stable_version_yaml_round_trip(
        version in "([0-9]\\.[0-9]{1,2}\\.[0-9]{1,2})?",
        upper_limit in "([0-9]\\.[0-9]{1,2}\\.[0-9]{1,2})?",
        git_url in "(https://github\\.com/[a-z]{1,8}/[a-z]{1,8})?",
        component in "[a-z]{0,8}",
        url in "(https://[a-z]{1,8}\\.io)?"
    ) {
        let record = StableVersion { version, upper_limit, git_url, component, url };
        let yaml = record.to_yaml().unwrap();
        let loaded = StableVersion::from_yaml(yaml.as_bytes()).unwrap();
        prop_assert_eq!(loaded, record);
    }
}
