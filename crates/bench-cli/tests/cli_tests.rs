//! Tests exercising the compiled `bench` binary.

use assert_cmd::Command;
use bench_test_utils::{TestHarness, samples};
use predicates::prelude::*;

fn bench_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bench"));
    cmd.env_remove("RUST_LOG").env_remove("BENCH_CONFIG");
    cmd
}

fn harness() -> TestHarness {
    let harness = TestHarness::new();
    harness.write_frameworks(samples::FRAMEWORKS_YAML);
    harness.write_benchmark("input", "toy", samples::TOY_BENCHMARK_YAML);
    harness.write_config();
    harness
}

#[test]
fn test_help_output() {
    bench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AutoML benchmark harness"));
}

#[test]
fn test_missing_config_is_a_user_error() {
    bench_cmd()
        .arg("frameworks")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_config_prints_normalized_yaml() {
    let harness = harness();
    let output = bench_cmd()
        .arg("-c")
        .arg(harness.path("config.yaml"))
        .arg("config")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config: serde_yaml::Value = serde_yaml::from_slice(&output).unwrap();
    let logs_dir = config["logs_dir"].as_str().unwrap();
    assert!(logs_dir.ends_with("output/logs"), "{logs_dir}");
    assert!(!config["frameworks"]["definition_file"]
        .as_str()
        .unwrap()
        .contains("{user}"));
    harness.assert_dir_exists("output/logs");
}

#[test]
fn test_frameworks_are_listed_sorted() {
    let harness = harness();
    bench_cmd()
        .arg("-c")
        .arg(harness.path("config.yaml"))
        .arg("frameworks")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)RandomForest.*TunedRandomForest.*constantpredictor").unwrap());
}

#[test]
fn test_framework_lookup_ignores_case() {
    let harness = harness();
    bench_cmd()
        .arg("-c")
        .arg(harness.path("config.yaml"))
        .args(["framework", "TUNEDRANDOMFOREST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("module: extensions.tuned_rf"))
        .stdout(predicate::str::contains("author: automlbenchmark"));
}

#[test]
fn test_unknown_framework_fails() {
    let harness = harness();
    bench_cmd()
        .arg("-c")
        .arg(harness.path("config.yaml"))
        .args(["framework", "xgboost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect framework `xgboost`"));
}

#[test]
fn test_benchmark_prints_resolved_tasks() {
    let harness = harness();
    let output = bench_cmd()
        .arg("-c")
        .arg(harness.path("config.yaml"))
        .args(["benchmark", "toy"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let benchmark: serde_yaml::Value = serde_yaml::from_slice(&output).unwrap();
    assert_eq!(benchmark["name"].as_str(), Some("toy"));
    assert_eq!(benchmark["tasks"][0]["folds"].as_u64(), Some(10));
    assert_eq!(benchmark["tasks"][1]["folds"].as_u64(), Some(3));
    assert_eq!(benchmark["tasks"][0]["ec2_instance_type"].as_str(), Some("m5.large"));
}

#[test]
fn test_output_dir_override() {
    let harness = harness();
    let elsewhere = harness.path("elsewhere");
    bench_cmd()
        .arg("-c")
        .arg(harness.path("config.yaml"))
        .arg("--output-dir")
        .arg(&elsewhere)
        .arg("config")
        .assert()
        .success();

    harness.assert_dir_exists("elsewhere/predictions");
    harness.assert_not_exists("output");
}

#[test]
fn test_locate_prints_adapter_path() {
    let harness = harness();
    harness.write("user/extensions/tuned_rf.py", "");
    bench_cmd()
        .arg("-c")
        .arg(harness.path("config.yaml"))
        .args(["locate", "TunedRandomForest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tuned_rf.py"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let harness = harness();
    bench_cmd()
        .arg("-v")
        .arg("-c")
        .arg(harness.path("config.yaml"))
        .args(["benchmark", "toy"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loading benchmark definitions"));
}
