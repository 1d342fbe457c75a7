//! CLI integration tests.
//!
//! Runs the binary against local snapshot files so no network is involved.

mod support;

use support::*;

const LEFT: &str = r#"[
    {"name":"alpha","value":"1"},
    {"name":"beta","value":"2"}
]"#;

const RIGHT: &str = r#"[
    {"name":"beta","value":"20"},
    {"name":"gamma","value":"3"}
]"#;

#[test]
fn test_diff_renders_table_with_all_categories() {
    let t = Test::new();
    t.snapshot("left.json", LEFT);
    t.snapshot("right.json", RIGHT);

    let output = t.diff("left.json", "right.json", &[]);
    assert_success(&output);

    // Column headers are the snapshot labels.
    assert_stdout_contains(&output, "left");
    assert_stdout_contains(&output, "right");

    // alpha only on the left, gamma only on the right.
    assert_stdout_contains(&output, "alpha");
    assert_stdout_contains(&output, "gamma");
    assert_stdout_contains(&output, "missing");

    // beta changed value.
    assert_stdout_contains(&output, "beta");
    assert_stdout_contains(&output, "Value: 2");
    assert_stdout_contains(&output, "Value: 20");
}

#[test]
fn test_diff_only_missing_skips_common_names() {
    let t = Test::new();
    t.snapshot("left.json", LEFT);
    t.snapshot("right.json", RIGHT);

    let output = t.diff("left.json", "right.json", &["--mode", "only-missing"]);
    assert_success(&output);
    assert_stdout_contains(&output, "alpha");
    assert_stdout_contains(&output, "gamma");
    assert_stdout_lacks(&output, "beta");
}

#[test]
fn test_diff_only_modified_skips_presence() {
    let t = Test::new();
    t.snapshot("left.json", LEFT);
    t.snapshot("right.json", RIGHT);

    let output = t.diff("left.json", "right.json", &["--mode", "only-modified"]);
    assert_success(&output);
    assert_stdout_contains(&output, "beta");
    assert_stdout_lacks(&output, "alpha");
    assert_stdout_lacks(&output, "gamma");
    assert_stdout_lacks(&output, "missing");
}

#[test]
fn test_diff_without_mode_defaults_to_full_comparison() {
    let t = Test::new();
    t.snapshot("left.json", r#"[{"name":"shared","value":"same"}]"#);
    t.snapshot("right.json", r#"[{"name":"shared","value":"same"}]"#);

    // No --mode and both vaults on the command line: mode falls back to
    // "all", so the unchanged pair is still rendered.
    let output = t.diff("left.json", "right.json", &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "shared");
    assert_stdout_contains(&output, "same");
    assert_stdout_lacks(&output, "missing");
    assert_stdout_lacks(&output, "no differences");
}

#[test]
fn test_diff_identical_snapshots_reports_no_differences() {
    let t = Test::new();
    t.snapshot("left.json", LEFT);
    t.snapshot("right.json", LEFT);

    let output = t.diff("left.json", "right.json", &["--mode", "only-modified"]);
    assert_success(&output);
    assert_stdout_contains(&output, "no differences");
}

#[test]
fn test_diff_json_output_is_ordered() {
    let t = Test::new();
    t.snapshot("left.json", LEFT);
    t.snapshot("right.json", RIGHT);

    let output = t.diff("left.json", "right.json", &["--json"]);
    assert_success(&output);

    let items: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    let items = items.as_array().expect("expected a JSON array");

    let types: Vec<&str> = items
        .iter()
        .map(|i| i["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["LeftOnly", "Modified", "RightOnly"]);

    assert_eq!(items[0]["left"]["name"], "alpha");
    assert_eq!(items[1]["differences"][0]["propertyName"], "Value");
    assert_eq!(items[1]["differences"][0]["leftValue"], "2");
    assert_eq!(items[1]["differences"][0]["rightValue"], "20");
    assert_eq!(items[2]["right"]["name"], "gamma");
}

#[test]
fn test_diff_duplicate_names_rejected() {
    let t = Test::new();
    t.snapshot(
        "left.json",
        r#"[{"name":"dup","value":"1"},{"name":"dup","value":"2"}]"#,
    );
    t.snapshot("right.json", RIGHT);

    let output = t.diff("left.json", "right.json", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "ambiguous match");
    assert_stderr_contains(&output, "dup");
}

#[test]
fn test_diff_invalid_mode_fails_fast() {
    let t = Test::new();
    t.snapshot("left.json", LEFT);
    t.snapshot("right.json", RIGHT);

    let output = t.diff("left.json", "right.json", &["--mode", "everything"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid comparison mode");
}

#[test]
fn test_diff_single_vault_argument_fails() {
    let t = Test::new();
    t.snapshot("left.json", LEFT);

    let output = t
        .cmd()
        .args(["diff", "left.json"])
        .output()
        .expect("failed to run vaultdiff");
    assert_failure(&output);
    assert_stderr_contains(&output, "two vaults are required");
}

#[test]
fn test_diff_no_args_non_interactive_fails() {
    let t = Test::new();
    t.config(
        r#"
        [vaults.staging]
        url = "https://vault.staging.example.com"

        [vaults.production]
        url = "https://vault.example.com"
        "#,
    );

    let output = t
        .cmd()
        .arg("diff")
        .output()
        .expect("failed to run vaultdiff");
    assert_failure(&output);
    assert_stderr_contains(&output, "two vaults are required");
}

#[test]
fn test_diff_named_vault_without_config_fails() {
    let t = Test::new();
    t.snapshot("right.json", RIGHT);

    let output = t.diff("staging", "right.json", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no vaultdiff.toml");
}

#[test]
fn test_diff_named_vault_without_token_fails() {
    let t = Test::new();
    t.snapshot("right.json", RIGHT);
    t.config(
        r#"
        [vaults.staging]
        url = "https://vault.staging.example.com"
        token_env = "VAULTDIFF_TEST_UNSET_TOKEN"
        "#,
    );

    let output = t.diff("staging", "right.json", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "VAULTDIFF_TEST_UNSET_TOKEN");
}

#[test]
fn test_diff_malformed_snapshot_fails() {
    let t = Test::new();
    t.snapshot("left.json", "{ not json");
    t.snapshot("right.json", RIGHT);

    let output = t.diff("left.json", "right.json", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "json error");
}

#[test]
fn test_vaults_lists_configured_entries() {
    let t = Test::new();
    t.config(
        r#"
        [vaults.staging]
        url = "https://vault.staging.example.com"
        token_env = "STAGING_VAULT_TOKEN"

        [vaults.production]
        url = "https://vault.example.com"
        "#,
    );

    let output = t
        .cmd()
        .arg("vaults")
        .output()
        .expect("failed to run vaultdiff vaults");
    assert_success(&output);
    assert_stdout_contains(&output, "staging");
    assert_stdout_contains(&output, "https://vault.example.com");
    assert_stdout_contains(&output, "STAGING_VAULT_TOKEN");
}

#[test]
fn test_vaults_without_config_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("vaults")
        .output()
        .expect("failed to run vaultdiff vaults");
    assert_failure(&output);
    assert_stderr_contains(&output, "no vaultdiff.toml");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicates::str::contains("vaultdiff"));
}
