use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn write_file(path: &Path, content: impl AsRef<[u8]>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
fn promptpack_cmd() -> Command {
    Command::cargo_bin("promptpack").unwrap()
}
#[test]
fn writes_prompt_beside_root_and_counts_tokens() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("project");
    write_file(&root.join("a.txt"), "hi");
    write_file(&root.join("b.bin"), [0x00u8, 0x01]);
    write_file(&root.join(".git/ignored.txt"), "ignored");
    promptpack_cmd()
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt.txt has been created at"))
        .stdout(predicate::str::contains("Number of tokens in prompt.txt: 7"));
    let written = fs::read_to_string(temp.path().join("prompt.txt")).unwrap();
    assert_eq!(written, "├── a.txt\n└── b.bin\n\na.txt```\nhi\n```\n\n");
    assert!(!root.join("prompt.txt").exists());
}
#[test]
fn thread_flag_does_not_change_output() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("project");
    for i in 0..10 {
        write_file(&root.join(format!("f{}.txt", i)), format!("file {}", i));
    }
    promptpack_cmd().arg(&root).arg("-j").arg("1").assert().success();
    let single = fs::read(temp.path().join("prompt.txt")).unwrap();
    promptpack_cmd().arg(&root).arg("--threads").arg("7").assert().success();
    let many = fs::read(temp.path().join("prompt.txt")).unwrap();
    assert_eq!(single, many);
}
#[test]
fn missing_argument_exits_with_one() {
    promptpack_cmd().assert().code(1);
}
#[test]
fn extra_argument_exits_with_one() {
    let temp = tempdir().unwrap();
    promptpack_cmd()
        .arg(temp.path())
        .arg(temp.path())
        .assert()
        .code(1);
}
#[test]
fn invalid_root_exits_with_one() {
    let temp = tempdir().unwrap();
    promptpack_cmd()
        .arg(temp.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    let file = temp.path().join("file.txt");
    write_file(&file, "x");
    promptpack_cmd()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}
#[test]
fn zero_threads_rejected() {
    let temp = tempdir().unwrap();
    promptpack_cmd()
        .arg(temp.path())
        .arg("-j")
        .arg("0")
        .assert()
        .code(1);
}
#[test]
fn help_exits_successfully() {
    promptpack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory to snapshot"));
}
#[cfg(unix)]
#[test]
fn skipped_files_reported_on_stderr() {
    use std::os::unix::fs::PermissionsExt;
    let temp = tempdir().unwrap();
    let root = temp.path().join("project");
    write_file(&root.join("locked.txt"), "secret");
    write_file(&root.join("open.txt"), "visible");
    let locked = root.join("locked.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read(&locked).is_ok() {
        return;
    }
    let assert = promptpack_cmd().arg(&root).assert().success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    let lines: Vec<&str> = stderr
        .lines()
        .filter(|l| l.starts_with("Error checking binary file "))
        .collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("locked.txt"));
    let written = fs::read_to_string(temp.path().join("prompt.txt")).unwrap();
    assert!(written.contains("open.txt```\nvisible\n```"));
    assert!(!written.contains("secret"));
}
#[test]
fn non_utf8_file_written_verbatim() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("project");
    write_file(&root.join("latin1.txt"), b"caf\xe9");
    promptpack_cmd().arg(&root).assert().success();
    let written = fs::read(temp.path().join("prompt.txt")).unwrap();
    let mut expected = "└── latin1.txt\n\n".as_bytes().to_vec();
    expected.extend_from_slice(b"latin1.txt```\ncaf\xe9\n```\n\n");
    assert_eq!(written, expected);
}
