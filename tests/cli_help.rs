mod common;

use common::TestEnv;

#[test]
fn help_lists_commands() {
    let env = TestEnv::new();

    let result = env.run(&["--help"]);

    assert!(result.is_success());
    assert!(result.stdout.contains("publish"));
    assert!(result.stdout.contains("check"));
}

#[test]
fn publish_help_lists_flags() {
    let env = TestEnv::new();

    let result = env.run(&["publish", "--help"]);

    assert!(result.is_success());
    for flag in ["--env", "--dry-run", "--concurrency", "--acl", "--gzip-ext"] {
        assert!(result.stdout.contains(flag), "missing {}", flag);
    }
}
