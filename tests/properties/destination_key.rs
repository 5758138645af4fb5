//! Property tests for destination key derivation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use s3publish::domain::value_objects::DestinationKey;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// Key is always `app/env/` followed by the slash-joined path.
    #[test]
    fn property_key_is_prefix_plus_relative(
        app in segment(),
        env in segment(),
        parts in segments(),
    ) {
        let relative: PathBuf = parts.iter().collect();
        let key = DestinationKey::derive(&app, &env, &relative).unwrap();

        prop_assert_eq!(key.as_str(), format!("{}/{}/{}", app, env, parts.join("/")));
    }

    /// Same inputs, same key.
    #[test]
    fn property_derivation_is_deterministic(
        parts in segments(),
    ) {
        let relative: PathBuf = parts.iter().collect();
        let a = DestinationKey::derive("myapp", "prod", &relative).unwrap();
        let b = DestinationKey::derive("myapp", "prod", &relative).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Keys never contain backslashes, empty segments or `..`.
    #[test]
    fn property_key_segments_are_clean(
        parts in segments(),
    ) {
        let relative: PathBuf = parts.iter().collect();
        let key = DestinationKey::derive("myapp", "prod", &relative).unwrap();

        prop_assert!(!key.as_str().contains('\\'));
        prop_assert!(!key.as_str().starts_with('/'));
        for segment in key.as_str().split('/') {
            prop_assert!(!segment.is_empty());
            prop_assert_ne!(segment, "..");
        }
    }

    /// Any path that climbs out of the source directory is rejected.
    #[test]
    fn property_parent_components_rejected(
        before in proptest::collection::vec(segment(), 0..=3),
        after in proptest::collection::vec(segment(), 0..=3),
    ) {
        let mut relative: PathBuf = before.iter().collect();
        relative.push("..");
        relative.extend(after.iter());

        prop_assert!(DestinationKey::derive("myapp", "prod", &relative).is_err());
    }

    /// Derivation never panics on arbitrary strings.
    #[test]
    fn property_derive_never_panics(
        s in "(?s).{0,128}"
    ) {
        let _ = DestinationKey::derive("myapp", "prod", Path::new(&s));
    }
}
