//! End-to-end runs of the `generate-creatives` executable.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

/// Fresh working directory with no `.env` in it.
fn workdir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("generate-creatives-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn command(dir: &PathBuf) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_generate-creatives"));
    cmd.env_clear().current_dir(dir).args([
        "--account-id",
        "act_1",
        "--product",
        "Trail Runner",
        "--audience",
        "weekend hikers",
        "--count",
        "3",
        "--output",
        "out.json",
    ]);
    cmd
}

fn read_output(dir: &PathBuf) -> Vec<Value> {
    let text = fs::read_to_string(dir.join("out.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_template_copy_without_key() {
    let dir = workdir();
    let output = command(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let variations = read_output(&dir);
    assert_eq!(variations.len(), 3);
    for v in &variations {
        assert_eq!(v["copy"], "Check out Trail Runner today!");
        assert_eq!(v["status"], "generated");
    }
    assert_eq!(variations[0]["hook_type"], "urgency");
    assert_eq!(variations[1]["format"], "carousel");
}

#[test]
fn test_unreachable_model_writes_file_and_exits_one() {
    let dir = workdir();
    let output = command(&dir)
        .env("GEMINI_API_KEY", "test-key")
        // Nothing listens on the discard port, so every call fails fast.
        .env("CREATIVE_EXPRESS__GEMINI__BASE_URL", "http://127.0.0.1:9")
        .env("CREATIVE_EXPRESS__GEMINI__TIMEOUT_SECS", "5")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let variations = read_output(&dir);
    assert_eq!(variations.len(), 3);
    for v in &variations {
        assert!(v["copy"].is_null());
        assert_eq!(v["status"], "failed");
    }
    assert!(String::from_utf8_lossy(&output.stderr).contains("3 of 3 variations failed"));
}
