#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Credentials parsing should never panic
        let _ = s3publish::config::CredentialsFile::parse(content);
    }
});
