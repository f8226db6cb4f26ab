//! Sample definition files.

/// Three frameworks: one with a partial docker image, one with a custom
/// module and one declared with an empty body.
pub const FRAMEWORKS_YAML: &str = r#"RandomForest:
  version: '0.24.2'
  setup_args: stable
  docker_image:
    tag: '0.24'

TunedRandomForest:
  module: extensions.tuned_rf
  params:
    n_estimators: 2000

constantpredictor:
"#;

/// Two tasks, the second overriding `folds`.
pub const TOY_BENCHMARK_YAML: &str = r#"- name: kc2
  openml_task_id: 3913
  metric: auc

- name: iris
  openml_task_id: 59
  metric: logloss
  folds: 3
"#;

/// A task missing `name` and `metric`.
pub const BROKEN_BENCHMARK_YAML: &str = r#"- openml_task_id: 3913
  cores: 4
"#;
