use better_gql_generator::config::{GeneratorConfig, load_config, resolve_config};
use std::fs;

#[test]
fn load_config_reads_camel_case_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("gql-generator.json");
    fs::write(
        &p,
        r#"{
  "generateQueries": true,
  "generateMutations": false,
  "generateSubscriptions": true,
  "maxRecursionDepth": 5
}"#,
    )
    .unwrap();
    let loaded = load_config(&p).unwrap();
    assert_eq!(
        loaded,
        GeneratorConfig {
            generate_queries: true,
            generate_mutations: false,
            generate_subscriptions: true,
            max_recursion_depth: 5,
            strip_aws_directives: true,
        }
    );
}

#[test]
fn load_config_rejects_empty_file() {
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("gql-generator.json");
    fs::write(&p, "\n").unwrap();
    let err = load_config(&p).unwrap_err();
    assert!(err.to_string().contains("empty config file"));
}

#[test]
fn load_config_reports_path_on_bad_json() {
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("broken.json");
    fs::write(&p, "{ not json").unwrap();
    let err = load_config(&p).unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(resolve_config(Some(&tmp.path().join("absent.json"))).is_err());
}

#[test]
fn load_config_rejects_depth_above_limit() {
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("deep.json");
    fs::write(&p, r#"{"maxRecursionDepth": 500}"#).unwrap();
    let err = format!("{:#}", load_config(&p).unwrap_err());
    assert!(err.contains("deep.json"));
    assert!(err.contains("maxRecursionDepth 500 exceeds the limit of 10"));
}
