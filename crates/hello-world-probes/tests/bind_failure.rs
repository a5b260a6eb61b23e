//! Process-level test: a taken port is fatal for this binary.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

#[tokio::test]
async fn test_exits_when_port_is_taken() {
    // Something else may already own 8080; the port is occupied either way.
    let _occupied = std::net::TcpListener::bind("0.0.0.0:8080").ok();

    let run = Command::new(env!("CARGO_BIN_EXE_hello-world-probes"))
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();
    let output = tokio::time::timeout(Duration::from_secs(10), run)
        .await
        .expect("binary did not exit")
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Starting server"), "stdout: {stdout}");
    assert!(stdout.contains("0.0.0.0:8080"), "stdout: {stdout}");
    assert!(stdout.contains("Error starting server"), "stdout: {stdout}");
}
