//! End-to-end tests for the build workflow.

use std::fs;
use std::path::Path;

use configdoc_search::build::{run_build, MODULE_FILE, PAYLOAD_FILE};
use configdoc_search::{Error, PrefixSearchIndex, SearchPayload};
use tempfile::TempDir;

const TEMPLATE: &str = "const schemaIndex = [/*__SCHEMA_INDEX__*/];\n\
                        const keywordIndex = {/*__KEYWORD_INDEX__*/};\n";

/// Write a manifest plus two schema files into `dir`.
fn write_fixture(dir: &Path) {
    fs::write(
        dir.join("manifest.json"),
        r#"{"version": 1, "schemas": ["server.json", "proxy.json"]}"#,
    )
    .unwrap();
    fs::write(
        dir.join("server.json"),
        r#"{
            "name": "ServerConfig",
            "properties": [
                "maxPlayers",
                {"name": "worldSettings", "schema": {"properties": ["viewDistance"]}}
            ]
        }"#,
    )
    .unwrap();
    fs::write(
        dir.join("proxy.json"),
        r#"{"name": "ProxyConfig", "path": "proxy.html", "properties": ["maxPlayers", "bindAddress"]}"#,
    )
    .unwrap();
}

fn read_payload(output: &Path) -> SearchPayload {
    let content = fs::read_to_string(output.join(PAYLOAD_FILE)).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_run_build_e2e_basic() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());
    let output = temp_dir.path().join("output");

    let summary = run_build(temp_dir.path(), &output, None).unwrap();

    assert_eq!(summary.schema_count, 2);
    assert_eq!(summary.files, vec![output.join(PAYLOAD_FILE)]);
    assert!(!output.join(MODULE_FILE).exists());

    let payload = read_payload(&output);
    assert_eq!(payload.keyword_index.len(), summary.keyword_count);
    assert_eq!(payload.schema_index.get(1).unwrap().path, "proxy.html");
}

#[test]
fn test_built_payload_answers_queries() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());
    let output = temp_dir.path().join("output");
    run_build(temp_dir.path(), &output, None).unwrap();

    let index = PrefixSearchIndex::from_payload(read_payload(&output));
    assert_eq!(index.query("MAX").schema_names(), vec!["ServerConfig", "ProxyConfig"]);
    assert_eq!(index.query("view").schema_names(), vec!["ServerConfig"]);
    assert_eq!(index.query("address").schema_names(), vec!["ProxyConfig"]);
    assert!(index.query("nothing").is_empty());
}

#[test]
fn test_run_build_e2e_with_template() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());
    let template = temp_dir.path().join("search.template.js");
    fs::write(&template, TEMPLATE).unwrap();
    let output = temp_dir.path().join("output");

    let summary = run_build(temp_dir.path(), &output, Some(template.as_path())).unwrap();
    assert_eq!(summary.files.len(), 2);

    let script = fs::read_to_string(output.join(MODULE_FILE)).unwrap();
    assert!(script.contains(
        r#"const schemaIndex = [{"name":"ServerConfig","path":"schema.ServerConfig.html"},{"name":"ProxyConfig","path":"proxy.html"}];"#
    ));
    assert!(script.contains(r#""maxplayers":[0,1]"#));
    assert!(!script.contains("__KEYWORD_INDEX__"));
}

#[test]
fn test_run_build_template_without_placeholders() {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path());
    let template = temp_dir.path().join("bad.js");
    fs::write(&template, "const schemaIndex = [];").unwrap();

    let result = run_build(temp_dir.path(), temp_dir.path().join("output"), Some(template.as_path()));
    assert!(matches!(result, Err(Error::MissingPlaceholder(_))));
}

#[test]
fn test_run_build_e2e_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output");

    let result = run_build(temp_dir.path(), &output, None);
    assert!(matches!(result, Err(Error::Read { .. })));
    assert!(!output.exists());
}

#[test]
fn test_run_build_e2e_missing_schema_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("manifest.json"),
        r#"{"version": 1, "schemas": ["absent.json"]}"#,
    )
    .unwrap();

    let result = run_build(temp_dir.path(), temp_dir.path().join("output"), None);
    match result {
        Err(Error::Read { path, .. }) => assert!(path.ends_with("absent.json")),
        other => panic!("expected Read error, got {:?}", other),
    }
}

#[test]
fn test_run_build_e2e_invalid_schema_json() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("manifest.json"),
        r#"{"version": 1, "schemas": ["broken.json"]}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("broken.json"), r#"{"properties": []}"#).unwrap();

    let result = run_build(temp_dir.path(), temp_dir.path().join("output"), None);
    assert!(matches!(result, Err(Error::Json { .. })));
}

#[test]
fn test_run_build_e2e_empty_manifest_writes_empty_tables() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("manifest.json"),
        r#"{"version": 1, "schemas": []}"#,
    )
    .unwrap();
    let template = temp_dir.path().join("search.template.js");
    fs::write(&template, TEMPLATE).unwrap();
    let output = temp_dir.path().join("output");

    let summary = run_build(temp_dir.path(), &output, Some(template.as_path())).unwrap();
    assert_eq!(summary.schema_count, 0);
    assert_eq!(summary.keyword_count, 0);
    assert_eq!(summary.files.len(), 2);

    let payload = read_payload(&output);
    assert!(payload.schema_index.is_empty());
    assert!(payload.keyword_index.is_empty());

    let script = fs::read_to_string(output.join(MODULE_FILE)).unwrap();
    assert!(script.contains("const schemaIndex = [];"));
    assert!(script.contains("const keywordIndex = {};"));
}
