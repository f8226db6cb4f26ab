use std::sync::Arc;

use bench_fs::NormalizedPath;
use bench_resources::{ConfigTree, Error, Resources};
use bench_test_utils::{TestHarness, samples};
use pretty_assertions::assert_eq;
use serde_json::json;

fn resources(harness: &TestHarness) -> Resources {
    let config = ConfigTree::from_yaml_str(&harness.config_yaml()).unwrap();
    Resources::new(&config).unwrap()
}

#[test]
fn test_benchmark_tasks_are_validated_and_defaulted() {
    let harness = TestHarness::new();
    harness.write_benchmark("input", "toy", samples::TOY_BENCHMARK_YAML);
    let resources = resources(&harness);

    let benchmark = resources.benchmark_definition("toy").unwrap();

    assert_eq!(benchmark.name, "toy");
    assert_eq!(benchmark.tasks.len(), 2);

    let kc2 = &benchmark.tasks[0];
    assert_eq!(kc2.name, "kc2");
    assert_eq!(kc2.openml_task_id, 3913);
    assert_eq!(kc2.metric, "auc");
    assert_eq!(kc2.max_runtime_seconds, 600);
    assert_eq!(kc2.cores, 2);
    assert_eq!(kc2.folds, 10);
    assert_eq!(kc2.max_mem_size_mb, 4096);
    assert_eq!(kc2.ec2_instance_type, "m5.large");

    let iris = &benchmark.tasks[1];
    assert_eq!(iris.folds, 3);
    assert_eq!(iris.cores, 2);
}

#[test]
fn test_repeat_lookup_returns_cached_definition() {
    let harness = TestHarness::new();
    let file = harness.write_benchmark("input", "toy", samples::TOY_BENCHMARK_YAML);
    let resources = resources(&harness);

    let first = resources.benchmark_definition("toy").unwrap();
    std::fs::remove_file(file).unwrap();
    let second = resources.benchmark_definition("toy").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_definition_dirs_are_searched_in_order() {
    let harness = TestHarness::new();
    harness.write_benchmark("input", "toy", samples::TOY_BENCHMARK_YAML);
    let user_file = harness.write_benchmark(
        "user",
        "toy",
        "- name: adult\n  openml_task_id: 7592\n  metric: auc\n",
    );
    let resources = resources(&harness);

    let benchmark = resources.benchmark_definition("toy").unwrap();

    assert_eq!(benchmark.file, NormalizedPath::absolute(user_file).unwrap());
    assert_eq!(benchmark.tasks.len(), 1);
    assert_eq!(benchmark.tasks[0].name, "adult");
}

#[test]
fn test_later_dir_is_used_when_earlier_lacks_the_file() {
    let harness = TestHarness::new();
    let input_file = harness.write_benchmark("input", "toy", samples::TOY_BENCHMARK_YAML);
    harness.write_benchmark("user", "other", samples::TOY_BENCHMARK_YAML);
    let resources = resources(&harness);

    let benchmark = resources.benchmark_definition("toy").unwrap();

    assert_eq!(benchmark.file, NormalizedPath::absolute(input_file).unwrap());
}

#[test]
fn test_literal_path_fallback_uses_file_stem() {
    let harness = TestHarness::new();
    let custom = harness.write("elsewhere/my_bench.yaml", samples::TOY_BENCHMARK_YAML);
    let resources = resources(&harness);

    let benchmark = resources
        .benchmark_definition(&custom.to_string_lossy())
        .unwrap();

    assert_eq!(benchmark.name, "my_bench");
    assert_eq!(benchmark.file, NormalizedPath::absolute(&custom).unwrap());
    assert_eq!(benchmark.tasks.len(), 2);
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_named_after_the_link() {
    let harness = TestHarness::new();
    let target = harness.write("elsewhere/real_target.yaml", samples::TOY_BENCHMARK_YAML);
    let link = harness.path("elsewhere/my_bench.yaml");
    std::os::unix::fs::symlink(&target, &link).unwrap();
    let resources = resources(&harness);

    let benchmark = resources
        .benchmark_definition(&link.to_string_lossy())
        .unwrap();

    assert_eq!(benchmark.name, "my_bench");
    assert_eq!(benchmark.file, NormalizedPath::absolute(&target).unwrap());
    assert_eq!(benchmark.tasks.len(), 2);
}

#[test]
fn test_unknown_benchmark_names_input_and_dirs() {
    let harness = TestHarness::new();
    let resources = resources(&harness);

    let err = resources.benchmark_definition("nope").unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, Error::UnknownBenchmark { .. }), "{message}");
    assert!(message.contains("`nope`"), "{message}");
    assert!(message.contains("user/benchmarks"), "{message}");
    assert!(message.contains("input/benchmarks"), "{message}");
}

#[test]
fn test_missing_task_fields_are_reported_together() {
    let harness = TestHarness::new();
    harness.write_benchmark("user", "broken", samples::BROKEN_BENCHMARK_YAML);
    let resources = resources(&harness);

    match resources.benchmark_definition("broken") {
        Err(Error::MissingTaskFields { missing, task }) => {
            assert_eq!(missing, vec!["name", "metric"]);
            assert!(task.contains("3913"), "{task}");
        }
        other => panic!("expected MissingTaskFields, got {other:?}"),
    }
}

#[test]
fn test_failed_lookup_is_not_cached() {
    let harness = TestHarness::new();
    let resources = resources(&harness);

    assert!(resources.benchmark_definition("toy").is_err());
    harness.write_benchmark("user", "toy", samples::TOY_BENCHMARK_YAML);
    assert!(resources.benchmark_definition("toy").is_ok());
}

#[test]
fn test_extra_task_keys_are_kept() {
    let harness = TestHarness::new();
    harness.write_benchmark(
        "user",
        "extra",
        "- name: kc2\n  openml_task_id: 3913\n  metric: auc\n  description: software defects\n",
    );
    let resources = resources(&harness);

    let benchmark = resources.benchmark_definition("extra").unwrap();

    assert_eq!(
        benchmark.tasks[0].extra.get("description"),
        Some(&json!("software defects"))
    );
}

#[test]
fn test_empty_benchmark_file_has_no_tasks() {
    let harness = TestHarness::new();
    harness.write_benchmark("user", "empty", "");
    let resources = resources(&harness);

    assert!(resources.benchmark_definition("empty").unwrap().tasks.is_empty());
}
