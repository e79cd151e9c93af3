use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn generate_marker() -> Command {
    Command::cargo_bin("generate-marker").expect("binary built")
}

#[test]
fn default_invocation_writes_240px_png() {
    let dir = TempDir::new().unwrap();

    generate_marker()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ArUco marker (ID: 0) saved to aruco_marker.png",
        ))
        .stdout(predicate::str::contains("Size: 240x240 pixels"));

    let img = image::open(dir.path().join("aruco_marker.png")).unwrap();
    assert_eq!((img.width(), img.height()), (240, 240));
    assert_eq!(img.color(), image::ColorType::L8);
}

#[test]
fn explicit_id_and_path() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("m249.png");

    generate_marker()
        .arg("249")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 249"));

    assert!(out.exists());
}

#[test]
fn size_flag_changes_output_dimensions() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("small.png");

    generate_marker()
        .args(["5", out.to_str().unwrap(), "--size", "100", "--border", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 120x120 pixels"));

    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (120, 120));
}

#[test]
fn out_of_range_id_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("bad.png");

    generate_marker()
        .arg("250")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert!(!out.exists());
}

#[test]
fn zero_size_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("x.png");

    generate_marker()
        .args(["5", out.to_str().unwrap(), "--size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("marker size must be > 0"));

    assert!(!out.exists());
}

#[test]
fn unknown_dictionary_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("x.png");

    generate_marker()
        .args(["0", out.to_str().unwrap(), "--dictionary", "DICT_7X7_1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dictionary"));

    assert!(!out.exists());
}

#[test]
fn unwritable_output_path_fails() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("m.png");

    generate_marker().arg("0").arg(&out).assert().failure();
}

#[test]
fn small_dictionary_is_selectable() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("m4x4.png");

    generate_marker()
        .args(["49", out.to_str().unwrap(), "--dictionary", "DICT_4X4_50"])
        .assert()
        .success();

    // Id 50 is out of range for the 4x4 family.
    generate_marker()
        .args(["50", out.to_str().unwrap(), "--dictionary", "DICT_4X4_50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DICT_4X4_50"));
}

#[test]
fn json_report_is_parseable() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("m3.png");

    let assert = generate_marker()
        .args(["3", out.to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["dictionary"], "DICT_6X6_250");
    assert_eq!(report["marker_id"], 3);
    assert_eq!(report["width"], 240);
    assert_eq!(report["height"], 240);
}

#[test]
fn repeated_runs_write_identical_files() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");

    generate_marker().arg("17").arg(&a).assert().success();
    generate_marker().arg("17").arg(&b).assert().success();

    let a = image::open(&a).unwrap().to_luma8();
    let b = image::open(&b).unwrap().to_luma8();
    assert_eq!(a.as_raw(), b.as_raw());
}
