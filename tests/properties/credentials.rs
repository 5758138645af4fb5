//! Property tests for credentials file parsing.

use proptest::prelude::*;

use s3publish::config::CredentialsFile;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(
        s in "(?s).{0,256}"
    ) {
        let _ = CredentialsFile::parse(&s);
    }

    /// Any key and secret written as JSON are read back verbatim.
    #[test]
    fn property_key_and_secret_survive(
        key in "[A-Z0-9]{1,32}",
        secret in "[A-Za-z0-9/+=]{1,64}",
    ) {
        let content = serde_json::json!({ "key": key, "secret": secret }).to_string();
        let parsed = CredentialsFile::parse(&content).unwrap();

        prop_assert_eq!(parsed.key.as_deref(), Some(key.as_str()));
        prop_assert_eq!(parsed.secret.as_deref(), Some(secret.as_str()));
        prop_assert!(parsed.bucket.is_none());
    }
}
