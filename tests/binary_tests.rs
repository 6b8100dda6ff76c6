use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn write_master_admin(root: &std::path::Path, content: &str) -> std::path::PathBuf {
    let pages = root.join("client/src/pages");
    fs::create_dir_all(&pages).unwrap();
    let path = pages.join("MasterAdmin.tsx");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_binary_help() {
    let mut cmd = cargo_bin_cmd!("jsxfix-cli");
    cmd.arg("--help").assert().success();
}

#[test]
fn test_binary_default_target_truncates() {
    let dir = tempdir().unwrap();
    let path = write_master_admin(
        dir.path(),
        "<Tabs>\n<TabsContent>\nexport default MasterAdmin;\nextra junk\n",
    );

    let mut cmd = cargo_bin_cmd!("jsxfix-cli");
    cmd.current_dir(dir.path())
        .env_remove("JSXFIX_TARGET")
        .args(["--config", "/dev/null"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "TabsContent: Open=1, Close=0, Balance=1",
        ))
        .stdout(predicate::str::contains("4 -> 3 lines"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<Tabs>\n<TabsContent>\nexport default MasterAdmin;"
    );
}

#[test]
fn test_binary_marker_not_found_exit_code() {
    let dir = tempdir().unwrap();
    let path = write_master_admin(dir.path(), "<Form>\n</Form>\n");

    let mut cmd = cargo_bin_cmd!("jsxfix-cli");
    cmd.current_dir(dir.path())
        .args(["--config", "/dev/null", "--target"])
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Form: Open=1, Close=1, Balance=0"))
        .stdout(predicate::str::contains("Marker not found"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "<Form>\n</Form>\n");
}

#[test]
fn test_binary_missing_file_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("jsxfix-cli");
    cmd.current_dir(dir.path())
        .args(["--config", "/dev/null", "--target", "missing.tsx"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read source"));
}

#[test]
fn test_binary_check_with_custom_tags() {
    let dir = tempdir().unwrap();
    let path = write_master_admin(dir.path(), "<Card>\nexport default MasterAdmin;\njunk\n");

    let mut cmd = cargo_bin_cmd!("jsxfix-cli");
    cmd.current_dir(dir.path())
        .args(["--config", "/dev/null", "--tag", "Card", "check", "--target"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Card: Open=1, Close=0, Balance=1"))
        .stdout(predicate::str::contains("Tabs").not());

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<Card>\nexport default MasterAdmin;\njunk\n"
    );
}

#[test]
fn test_binary_json_dry_run() {
    let dir = tempdir().unwrap();
    let path = write_master_admin(dir.path(), "export default MasterAdmin;\njunk\n");

    let mut cmd = cargo_bin_cmd!("jsxfix-cli");
    let output = cmd
        .current_dir(dir.path())
        .env_remove("JSXFIX_TARGET")
        .args(["--config", "/dev/null", "--json", "fix", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["outcome"]["status"], "would_truncate");
    assert_eq!(value["outcome"]["kept_lines"], 1);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "export default MasterAdmin;\njunk\n"
    );
}
