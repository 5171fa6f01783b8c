//! Integration test: drive the `jsd` binary end to end.

use std::io::Write;
use std::process::{Command, Stdio};

const FACES_SCHEMA: &str = r#"{
    "type": "object",
    "properties": {
        "faces": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {"hdri": {"type": "string", "default": "apartment"}}
            }
        }
    }
}"#;

fn schema_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("faces.schema.json"), FACES_SCHEMA).unwrap();
    dir
}

fn jsd(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jsd"));
    cmd.arg("--schema-dir")
        .arg(dir.path())
        .env_remove("JSD_SCHEMA_DIR")
        .env_remove("JSD_VALIDATE");
    cmd
}

#[test]
fn fill_from_stdin_to_stdout() {
    let dir = schema_dir();
    let mut child = jsd(&dir)
        .args(["fill", "--schema", "faces.schema.json", "--compact"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"faces":[{"lskdjf":"sdf"}]}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let filled: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        filled,
        serde_json::json!({"faces": [{"lskdjf": "sdf", "hdri": "apartment"}]})
    );
}

#[test]
fn shape_fault_exits_with_one() {
    let dir = schema_dir();
    let input = dir.path().join("bad.json");
    std::fs::write(&input, r#"{"faces": [1]}"#).unwrap();

    let output = jsd(&dir)
        .args(["fill", "--schema", "faces.schema.json"])
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("insertion failed"), "stderr: {stderr}");
}

#[test]
fn unknown_schema_exits_with_two() {
    let dir = schema_dir();
    let output = jsd(&dir)
        .args(["fill", "--schema", "nope.schema.json", "-"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn schemas_lists_directory() {
    let dir = schema_dir();
    let output = jsd(&dir).arg("schemas").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "urn:jsd:schema:faces.schema.json\n"
    );
}
