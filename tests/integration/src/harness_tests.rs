//! End-to-end tests over the checked-in harness fixtures
//!
//! The fixture configuration mirrors a shipped default configuration; each
//! test layers its own `input_dir`, `output_dir` and `user_dir` on top, as a
//! user configuration would.

use std::path::PathBuf;
use std::sync::Arc;

use bench_fs::NormalizedPath;
use bench_resources::{ConfigTree, DockerImage, Error, ModuleLocator, OneOrMany, Resources};
use bench_test_utils::TestHarness;
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/harness")
}

/// Shipped defaults plus a user layer pointing into `harness`.
fn load(harness: &TestHarness) -> Resources {
    let defaults =
        ConfigTree::load(&NormalizedPath::absolute(fixtures().join("config.yaml")).unwrap())
            .unwrap();
    let user = ConfigTree::from_value(json!({
        "input_dir": fixtures().to_string_lossy(),
        "output_dir": harness.path("results").to_string_lossy(),
        "user_dir": harness.path("user").to_string_lossy(),
    }))
    .unwrap();
    Resources::from_configs(&[defaults, user]).unwrap()
}

#[test]
fn test_full_resolution_flow() {
    let harness = TestHarness::new();
    let resources = load(&harness);

    for dir in ["results/predictions", "results/scores", "results/logs"] {
        harness.assert_dir_exists(dir);
    }

    let input = NormalizedPath::absolute(fixtures()).unwrap();
    assert_eq!(resources.settings().input_dir, input);
    assert_eq!(
        resources.settings().frameworks.definition_file,
        OneOrMany::One(input.join("frameworks.yaml"))
    );
    assert_eq!(
        resources.config().get_str("project_repository"),
        Some("https://github.com/openml/automlbenchmark")
    );

    let (framework, name) = resources.framework_definition("AUTOSKLEARN").unwrap();
    assert_eq!(name, "autosklearn");
    assert_eq!(framework.setup_cmd.as_ref().map(OneOrMany::len), Some(2));
    assert_eq!(
        framework.docker_image,
        DockerImage {
            author: Some("mlbench".into()),
            image: Some("autosklearn".into()),
            tag: Some("latest".into()),
        }
    );

    let benchmark = resources.benchmark_definition("test").unwrap();
    assert_eq!(benchmark.name, "test");
    assert_eq!(benchmark.file, input.join("benchmarks/test.yaml"));
    let summary: Vec<_> = benchmark
        .tasks
        .iter()
        .map(|task| {
            (
                task.name.as_str(),
                task.folds,
                task.max_runtime_seconds,
                task.ec2_instance_type.as_str(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("kc2", 10, 3600, "m5.large"),
            ("iris", 3, 3600, "m5.large"),
            ("cholesterol", 10, 600, "c5.large"),
        ]
    );
    assert!(Arc::ptr_eq(
        &benchmark,
        &resources.benchmark_definition("test").unwrap()
    ));
}

#[test]
fn test_user_benchmark_shadows_shipped_one() {
    let harness = TestHarness::new();
    harness.write_benchmark(
        "user",
        "test",
        "- name: adult\n  openml_task_id: 7592\n  metric: auc\n",
    );
    let resources = load(&harness);

    let benchmark = resources.benchmark_definition("test").unwrap();

    assert_eq!(benchmark.tasks.len(), 1);
    assert_eq!(benchmark.tasks[0].name, "adult");
}

#[test]
fn test_shipped_adapter_is_located() {
    let harness = TestHarness::new();
    let resources = load(&harness);

    let adapter = resources
        .load_adapter(&ModuleLocator::new(), "tunedrandomforest")
        .unwrap();

    assert_eq!(
        adapter.path,
        NormalizedPath::absolute(fixtures().join("extensions/tuned_rf.py")).unwrap()
    );
}

#[test]
fn test_unknown_names_fail_cleanly() {
    let harness = TestHarness::new();
    let resources = load(&harness);

    assert!(matches!(
        resources.framework_definition("h2oautoml"),
        Err(Error::UnknownFramework { .. })
    ));
    assert!(matches!(
        resources.benchmark_definition("validation"),
        Err(Error::UnknownBenchmark { .. })
    ));
}
