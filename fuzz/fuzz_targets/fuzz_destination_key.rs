#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        if let Ok(key) =
            s3publish::DestinationKey::derive("app", "env", std::path::Path::new(path))
        {
            assert!(key.as_str().starts_with("app/env/"));
            assert!(!key.as_str().split('/').any(|s| s == ".."));
        }
    }
});
