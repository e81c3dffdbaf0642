use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn avatar_fetcher_without_username_prints_usage_and_exits_1() {
    let output = Command::new(env!("CARGO_BIN_EXE_avatar_fetcher"))
        .output()
        .expect("run avatar_fetcher");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: avatar_fetcher <username>"), "stdout: {}", stdout);
}

#[test]
fn link_extractor_with_empty_profile_exits_cleanly() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_link_extractor"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("run link_extractor");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"\n")
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait link_extractor");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No profile provided. Exiting."), "stdout: {}", stdout);
}

#[test]
fn link_extractor_reports_missing_yt_dlp_without_failing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_link_extractor"))
        .current_dir(dir.path())
        .args(["@bob", "--yt-dlp", "/nonexistent/definitely-not-yt-dlp"])
        .output()
        .expect("run link_extractor");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: yt-dlp failed to extract info:"), "stdout: {}", stdout);
    assert!(!dir.path().join("tiktok_video_links.txt").exists());
}
