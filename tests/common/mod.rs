// Helpers shared by the integration tests

use std::io::Write;
use std::process::{Command, Stdio};

/// Execute JavaScript with `node` and return its stdout, or `None` when no
/// `node` executable is available.
pub fn run_with_node(js: &str) -> Option<String> {
    let mut child = Command::new("node")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .ok()?;

    child
        .stdin
        .take()
        .expect("node stdin")
        .write_all(js.as_bytes())
        .expect("failed to write program to node");

    let output = child.wait_with_output().expect("failed to wait for node");
    assert!(
        output.status.success(),
        "node failed:\n{}\n--- program ---\n{}",
        String::from_utf8_lossy(&output.stderr),
        js
    );
    Some(String::from_utf8(output.stdout).expect("node output is not UTF-8"))
}
