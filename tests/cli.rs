use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn ibconv() -> Command {
    Command::cargo_bin("ibconv").unwrap()
}

#[test]
fn test_help_prints_usage_and_converts_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let sink = temp_dir.child("sink");

    ibconv()
        .current_dir(temp_dir.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[ ibconv v{} ]", ibconv::VERSION)))
        .stdout(predicate::str::contains("-r"))
        .stdout(predicate::str::contains("Conversion complete.").not());

    sink.assert(predicate::path::missing());
}

#[test]
fn test_bad_resolution_is_fatal() {
    ibconv()
        .args(["-r", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid resolution"));

    ibconv().args(["-r", "0,100"]).assert().failure();
    ibconv().args(["-r", "abc,100"]).assert().failure();
}

#[test]
fn test_bad_format_is_fatal() {
    ibconv()
        .args(["-f", "bmp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_missing_input_folder_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    ibconv()
        .current_dir(temp_dir.path())
        .args(["-i", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_corrupt_file_warns_but_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.child("source");
    source.create_dir_all().unwrap();
    source.child("bad.png").write_binary(b"garbage").unwrap();
    image::RgbImage::new(16, 16)
        .save(source.child("good.png").path())
        .unwrap();

    ibconv()
        .current_dir(temp_dir.path())
        .args(["-f", "JPG", "-r", "4,4", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target Size: 4x4"))
        .stdout(predicate::str::contains("Converted:"))
        .stdout(predicate::str::contains("Conversion complete."))
        .stderr(predicate::str::contains("Failed to process"));

    temp_dir
        .child("sink/good.jpg")
        .assert(predicate::path::is_file());
    temp_dir
        .child("sink/bad.jpg")
        .assert(predicate::path::missing());
}
