use assert_cmd::Command;

fn seccli() -> Command {
    let mut cmd = Command::cargo_bin("seccli").unwrap();
    cmd.env_remove("VPN_METHOD").env_remove("SECCLI_LOG");
    cmd
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn connect_without_username_fails_before_resolution() {
    // The bogus --vpn-exec would be used verbatim; nothing may be spawned.
    let assert = seccli()
        .args(["connect", "-H", "vpn.example.org", "--vpn-exec", "/nonexistent/vpn"])
        .assert()
        .failure()
        .code(1);

    let stderr = stderr_of(assert.get_output());
    assert!(
        stderr.contains("Error: --username is required for connect command"),
        "stderr was {stderr}"
    );
}

#[test]
fn connect_without_host_fails() {
    let assert = seccli()
        .args(["connect", "--username", "alice"])
        .assert()
        .failure()
        .code(1);

    assert!(stderr_of(assert.get_output()).contains("Error: --vpn-host is required"));
}

#[test]
fn status_with_unusable_client_reports_no() {
    let assert = seccli()
        .args(["status", "--vpn-exec", "/nonexistent/vpn"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.trim(), "VPN Connected: No");
}

#[test]
fn disconnect_when_not_connected_fails() {
    let assert = seccli()
        .args(["disconnect", "--vpn-exec", "/nonexistent/vpn"])
        .assert()
        .failure()
        .code(1);

    assert!(stderr_of(assert.get_output()).contains("Error: VPN is not connected.\n"));
}

#[test]
fn unknown_flag_is_reported_with_exit_code_one() {
    let assert = seccli()
        .args(["connect", "--bogus"])
        .assert()
        .failure()
        .code(1);

    let stderr = stderr_of(assert.get_output());
    assert!(stderr.starts_with("Error: unexpected argument '--bogus'"), "stderr was {stderr}");
}

#[test]
fn missing_flag_value_is_reported_with_exit_code_one() {
    let assert = seccli()
        .args(["status", "--vpn-exec"])
        .assert()
        .failure()
        .code(1);

    assert!(stderr_of(assert.get_output()).starts_with("Error: "));
}

#[test]
fn help_still_exits_successfully() {
    seccli().arg("--help").assert().success();
}

#[cfg(unix)]
#[test]
fn status_with_connected_client_reports_yes() {
    let dir = tempfile::tempdir().unwrap();
    let stub = connected_stub(dir.path());

    let assert = seccli()
        .arg("status")
        .arg("--vpn-exec")
        .arg(&stub)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.trim(), "VPN Connected: Yes");
}

/// Writes a fake client whose status always reports an active tunnel. `connect`
/// against it stops with "already connected" before prompting for a password.
#[cfg(unix)]
fn connected_stub(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let stub = dir.join("vpn");
    std::fs::write(&stub, "#!/bin/sh\necho '  >> state: Connected'\n").unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();
    stub
}

#[cfg(unix)]
fn connect_method_log(vpn_method: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let stub = connected_stub(dir.path());

    let assert = seccli()
        .env("VPN_METHOD", vpn_method)
        .args(["--level", "debug", "connect", "-u", "alice", "-H", "vpn.example.org"])
        .arg("--vpn-exec")
        .arg(&stub)
        .assert()
        .failure()
        .code(1);

    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("Error: VPN is already connected"), "stderr was {stderr}");
    stderr
}

#[cfg(unix)]
#[test]
fn method_defaults_from_environment() {
    let stderr = connect_method_log("sms");
    assert!(stderr.contains("Second-factor method: sms"), "stderr was {stderr}");
}

#[cfg(unix)]
#[test]
fn empty_method_environment_falls_back_to_push() {
    let stderr = connect_method_log("");
    assert!(stderr.contains("Second-factor method: push"), "stderr was {stderr}");
}
