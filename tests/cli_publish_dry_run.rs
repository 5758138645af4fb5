//! `publish --dry-run` exercises discovery, key derivation and gzip without
//! sending anything to the bucket.

mod common;

use common::TestEnv;

fn env_with_assets() -> TestEnv {
    TestEnv::configured()
        .with_asset("css/main.css", "body { margin: 0 }")
        .with_asset("js/app.js", "console.log('hi')")
        .with_asset("media/logo.svg", "<svg/>")
        .with_asset(".DS_Store", "junk")
}

#[test]
fn dry_run_json_lists_keys_in_order() {
    let env = env_with_assets();

    let result = env.run(&["--json", "publish", "--env=prod", "--dry-run"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let events = result.json_events();

    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.first().unwrap()["file_count"], 3);
    assert_eq!(events.first().unwrap()["dry_run"], true);

    let keys: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "item_skipped")
        .map(|e| e["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys.len(), 3);
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(
        sorted,
        vec![
            "myapp/prod/css/main.css",
            "myapp/prod/js/app.js",
            "myapp/prod/media/logo.svg",
        ]
    );

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["status"], "success");
    assert_eq!(complete["skipped"], 3);
}

#[test]
fn dry_run_text_reports_each_file() {
    let env = env_with_assets();

    let result = env.run(&["publish", "--env=prod", "--dry-run"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("Mode: dry run"));
    assert!(result.stdout.contains("3 files would be uploaded"));
    assert!(result.stderr.contains("[dry-run] myapp/prod/css/main.css"));
    assert!(!result.combined_output().contains(".DS_Store"));
}

#[test]
fn gzip_ext_suffixes_keys() {
    let env = TestEnv::configured().with_asset("app.js", "1");

    let result = env.run(&[
        "--json",
        "publish",
        "--env=prod",
        "--dry-run",
        "--gzip-ext",
        ".gz",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    let events = result.json_events();
    assert!(events
        .iter()
        .any(|e| e["event"] == "item_skipped" && e["key"] == "myapp/prod/app.js.gz"));
}

#[test]
fn publish_without_build_output_fails() {
    let env = TestEnv::configured();

    let result = env.run(&["publish", "--env=prod", "--dry-run"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("build/static"));
}

#[test]
fn zero_concurrency_is_rejected_by_parser() {
    let env = env_with_assets();

    let result = env.run(&["publish", "--env=prod", "--concurrency", "0"]);

    assert!(!result.is_success());
}
