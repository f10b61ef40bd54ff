// SPDX-License-Identifier: Apache-2.0

//! Tests that invoke the `xorshare` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use xorshare::test_utils::QUICK_RECORD_LINE;

#[test]
fn test_invoke_on_stdin_record() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut child = Command::new(env!("CARGO_BIN_EXE_xorshare"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(QUICK_RECORD_LINE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(
        output.status.success(),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("basis #  0:"));
    assert!(stdout.contains("   A2X: F1261450CA86D330   S2X: 65C4836C69953380"));
    assert!(stdout.contains("***bestgates   0 = "));
}

#[test]
fn test_invoke_skips_malformed_line_and_continues() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut child = Command::new(env!("CARGO_BIN_EXE_xorshare"))
        .arg("--json")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(format!("not a record\n{}\n", QUICK_RECORD_LINE).as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1:"));
    let summary: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(summary["id"], 0);
    assert_eq!(summary["exact"], true);
}
