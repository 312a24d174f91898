use std::fs;
use std::path::Path;

use assert_cmd::Command;

mod common;

fn write_fixture(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("precancel").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("precancel").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("precancel 0.3.0\n");
}

#[test]
fn annotates_a_file_in_place() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(temp.path(), "model.gcode", common::prusaslicer_fixture());

    let mut cmd = Command::cargo_bin("precancel").unwrap();
    cmd.arg(&path);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("prusaslicer"))
        .stdout(predicates::str::contains("2 object(s)"));

    let annotated = fs::read_to_string(&path).expect("read annotated file");
    assert!(annotated.contains("DEFINE_OBJECT NAME=cube_stl_id_0_copy_0"));
    assert!(annotated.contains("START_CURRENT_OBJECT"));
}

#[test]
fn output_suffix_leaves_the_original_untouched() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(temp.path(), "model.gcode", common::cura_fixture());

    let mut cmd = Command::cargo_bin("precancel").unwrap();
    cmd.args(["--output-suffix", "-cancelable"]).arg(&path);
    cmd.assert().success();

    let original = fs::read_to_string(&path).expect("read original");
    assert_eq!(original, common::cura_fixture());

    let annotated = fs::read_to_string(temp.path().join("model-cancelable.gcode"))
        .expect("read suffixed output");
    assert!(annotated.contains("DEFINE_OBJECT NAME=cube_stl"));
}

#[test]
fn unknown_slicer_fails_and_commits_nothing() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(temp.path(), "model.gcode", common::unknown_slicer_fixture());

    let mut cmd = Command::cargo_bin("precancel").unwrap();
    cmd.args(["--output-suffix", ".out"]).arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("slicer marker"));

    // Input untouched, no output file, no scratch file left behind.
    let original = fs::read_to_string(&path).expect("read original");
    assert_eq!(original, common::unknown_slicer_fixture());
    assert!(!temp.path().join("model.out.gcode").exists());
    let entries = fs::read_dir(temp.path()).expect("list dir").count();
    assert_eq!(entries, 1);
}

#[test]
fn batch_keeps_going_after_a_failure() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let bad = write_fixture(temp.path(), "bad.gcode", common::unknown_slicer_fixture());
    let good = write_fixture(temp.path(), "good.gcode", common::superslicer_fixture());

    let mut cmd = Command::cargo_bin("precancel").unwrap();
    cmd.arg(&bad).arg(&good);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("1 of 2 file(s) failed"));

    // The good file was still annotated.
    let annotated = fs::read_to_string(&good).expect("read good file");
    assert!(annotated.contains("DEFINE_OBJECT"));
}

#[test]
fn already_annotated_file_is_a_successful_no_op() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(temp.path(), "model.gcode", common::superslicer_fixture());

    let mut first = Command::cargo_bin("precancel").unwrap();
    first.arg(&path);
    first.assert().success();
    let after_first = fs::read_to_string(&path).expect("read after first run");

    let mut second = Command::cargo_bin("precancel").unwrap();
    second.arg(&path);
    second
        .assert()
        .success()
        .stdout(predicates::str::contains("already annotated"));

    let after_second = fs::read_to_string(&path).expect("read after second run");
    assert_eq!(after_first, after_second);
}

#[test]
fn nonexistent_file_fails() {
    let mut cmd = Command::cargo_bin("precancel").unwrap();
    cmd.arg("no_such_file.gcode");
    cmd.assert().failure();
}
