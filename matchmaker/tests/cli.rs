use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

fn test_graphs() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../bigraph/tests/data/testGraphs.json")
}

fn matchmaker() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_matchmaker"));
    cmd.arg("--no-color").env("RUST_LOG", "off");
    cmd
}

#[test]
fn batch_over_the_fixture_file() {
    let out = matchmaker()
        .arg("batch")
        .arg(test_graphs())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("k1,1: 1x1, |M| = 1,"));
    assert!(lines[1].starts_with("k10,10: 10x10, |M| = 10,"));
    assert!(lines[4].starts_with("textbook_ex: 9x8, |M| = 6,"));
    assert!(lines[5].starts_with("weird_case: 3x3, |M| = 3,"));
}

#[test]
fn batch_writes_tex_files() {
    let tmp = tempfile::tempdir().unwrap();
    let out = matchmaker()
        .arg("batch")
        .arg(test_graphs())
        .arg("--render-dir")
        .arg(tmp.path())
        .arg("--tex-only")
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let tex = std::fs::read_to_string(tmp.path().join("textbook_ex/textbook_ex.tex")).unwrap();
    assert_eq!(tex.matches("\\draw").count(), 17);
    assert_eq!(tex.matches("[red, very thick]").count(), 6);
}

#[test]
fn batch_fails_on_missing_file() {
    let out = matchmaker().arg("batch").arg("does-not-exist.json").output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn interactive_session_over_stdin() {
    let mut child = matchmaker()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"[[1,1,0],\n[0,0,1],\n[1,0,0]]\n!\nn\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("maximum matching: {X0-Y1, X1-Y2, X2-Y0} (3 of 4 edges)"));
}
