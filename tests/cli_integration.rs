//! CLI integration tests
//!
//! Runs the binary inside temporary working directories holding a
//! `.ipfs/config` file.

mod common;

use common::{NodeRepo, SampleConfig};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_version_flag() {
    let repo = NodeRepo::empty();

    repo.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let repo = NodeRepo::empty();

    repo.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_patches_default_location() {
    let repo = NodeRepo::with_json(&SampleConfig::node());

    repo.command().assert().success().stdout(predicate::str::is_empty());

    let patched = repo.read_json();
    assert_eq!(patched["Plugins"], SampleConfig::expected_plugins());
    assert_eq!(patched["Addresses"]["Gateway"], "/ip4/0.0.0.0/tcp/8080");
    assert_eq!(patched["Addresses"]["API"], "/ip4/0.0.0.0/tcp/5001");
}

#[test]
fn test_untouched_fields_pass_through() {
    let original = SampleConfig::node();
    let repo = NodeRepo::with_json(&original);

    repo.command().assert().success();

    let patched = repo.read_json();
    assert_eq!(patched["Identity"], original["Identity"]);
    assert_eq!(patched["Datastore"], original["Datastore"]);
    assert_eq!(patched["Bootstrap"], original["Bootstrap"]);
    assert_eq!(patched["Addresses"]["Swarm"], original["Addresses"]["Swarm"]);
    assert_eq!(patched["Addresses"]["Announce"], original["Addresses"]["Announce"]);

    let keys: Vec<&String> = patched.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["Identity", "Datastore", "Addresses", "Bootstrap", "Plugins"]
    );
}

#[test]
fn test_output_uses_four_space_indent() {
    let repo = NodeRepo::with_content(r#"{"Addresses":{"Gateway":"old","API":"old"}}"#);

    repo.command().assert().success();

    let written = repo.read();
    assert!(written.starts_with("{\n    \"Addresses\": {\n        \"Gateway\": \"/ip4/0.0.0.0/tcp/8080\""));
    assert!(!written.ends_with('\n'));
}

#[test]
fn test_second_run_is_idempotent() {
    let repo = NodeRepo::with_json(&SampleConfig::node());

    repo.command().assert().success();
    let first = repo.read();

    repo.command().assert().success();
    let second = repo.read();

    assert_eq!(first, second);
}

#[test]
fn test_empty_addresses_object_is_sufficient() {
    let repo = NodeRepo::with_content(r#"{"Addresses":{}}"#);

    repo.command().assert().success();

    let patched = repo.read_json();
    assert_eq!(
        patched,
        serde_json::json!({
            "Addresses": {
                "Gateway": "/ip4/0.0.0.0/tcp/8080",
                "API": "/ip4/0.0.0.0/tcp/5001"
            },
            "Plugins": SampleConfig::expected_plugins()
        })
    );
}

#[test]
fn test_missing_addresses_fails_without_writing() {
    let original = r#"{"Identity": {"PeerID": "Qm"}, "Plugins": {"old": true}}"#;
    let repo = NodeRepo::with_content(original);

    repo.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Addresses"));

    assert_eq!(repo.read(), original);
}

#[test]
fn test_invalid_json_fails_without_writing() {
    let original = r#"{"Addresses": {"Gateway": "old",}"#;
    let repo = NodeRepo::with_content(original);

    repo.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));

    assert_eq!(repo.read(), original);
}

#[test]
fn test_missing_config_file_fails() {
    let repo = NodeRepo::empty();

    repo.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains(".ipfs/config"));

    assert!(!repo.config_path().exists());
}

#[test]
fn test_target_flag() {
    let repo = NodeRepo::empty();
    let target = repo.dir.path().join("node-config.json");
    std::fs::write(&target, r#"{"Addresses":{"API":"old"}}"#).unwrap();

    repo.command()
        .args(["--target", target.to_str().unwrap()])
        .assert()
        .success();

    let patched: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(patched["Addresses"]["API"], "/ip4/0.0.0.0/tcp/5001");
}

#[test]
fn test_settings_file_changes_patch_values() {
    let repo = NodeRepo::with_json(&SampleConfig::node());

    let mut settings = NamedTempFile::new().unwrap();
    writeln!(
        settings,
        r#"
[addresses]
gateway = "/ip4/0.0.0.0/tcp/9090"

[plugin]
populate_prometheus_interval = 60
tcp_listen_addresses = ["0.0.0.0:5321"]
        "#
    )
    .unwrap();
    settings.flush().unwrap();

    repo.command()
        .args(["--config", settings.path().to_str().unwrap()])
        .assert()
        .success();

    let patched = repo.read_json();
    let config = &patched["Plugins"]["Plugins"]["metric-export-plugin"]["Config"];
    assert_eq!(config["PopulatePrometheusInterval"], 60);
    assert_eq!(config["AgentVersionCutOff"], 20);
    assert_eq!(
        config["TCPServerConfig"]["ListenAddresses"],
        serde_json::json!(["0.0.0.0:5321"])
    );
    assert_eq!(patched["Addresses"]["Gateway"], "/ip4/0.0.0.0/tcp/9090");
    assert_eq!(patched["Addresses"]["API"], "/ip4/0.0.0.0/tcp/5001");
}

#[test]
fn test_invalid_settings_fail_without_writing() {
    let original = serde_json::to_string_pretty(&SampleConfig::node()).unwrap();
    let repo = NodeRepo::with_content(&original);

    let mut settings = NamedTempFile::new().unwrap();
    writeln!(settings, "[addresses]\napi = \"127.0.0.1:5001\"").unwrap();
    settings.flush().unwrap();

    repo.command()
        .args(["--config", settings.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));

    assert_eq!(repo.read(), original);
}

#[test]
fn test_env_var_overrides_address() {
    let repo = NodeRepo::with_json(&SampleConfig::node());

    repo.command()
        .env("IPFS_PATCH_API", "/ip4/10.0.0.1/tcp/5001")
        .assert()
        .success();

    let patched = repo.read_json();
    assert_eq!(patched["Addresses"]["API"], "/ip4/10.0.0.1/tcp/5001");
    assert_eq!(patched["Plugins"], SampleConfig::expected_plugins());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let repo = NodeRepo::with_json(&SampleConfig::node());

    repo.command()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Patched"));
}
