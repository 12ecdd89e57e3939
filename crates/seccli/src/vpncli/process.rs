//! Blocking subprocess helpers used to talk to the VPN client.
//!
//! Neither helper retries or times out: each call blocks until the child exits.

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::VpnError;

fn process_error(program: &Path, reason: impl Into<String>) -> VpnError {
    VpnError::Process {
        program: program.display().to_string(),
        reason: reason.into(),
    }
}

fn status_error(program: &Path, status: ExitStatus, stderr: &str) -> VpnError {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        process_error(program, status.to_string())
    } else {
        process_error(program, format!("{} ({})", status, stderr))
    }
}

/// Runs `program` with `args` and returns its trimmed standard output.
///
/// Standard input is closed. A spawn failure or a non-zero exit is returned as
/// [`VpnError::Process`].
pub fn capture_output(program: &Path, args: &[&str]) -> Result<String, VpnError> {
    log::trace!("Running {} {:?}", program.display(), args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| process_error(program, format!("failed to start: {}", e)))?;

    if !output.status.success() {
        return Err(status_error(
            program,
            output.status,
            &String::from_utf8_lossy(&output.stderr),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Runs `program` with `args`, feeding `input` to its standard input, and
/// waits for it to exit.
///
/// With `stream_output` the child's stdout/stderr are inherited so its prompts
/// are visible live; otherwise both are discarded. The input is never logged.
pub fn run_scripted(
    program: &Path,
    args: &[&str],
    input: &str,
    stream_output: bool,
) -> Result<(), VpnError> {
    log::trace!("Running {} {:?} with scripted input", program.display(), args);

    let (stdout, stderr) = if stream_output {
        (Stdio::inherit(), Stdio::inherit())
    } else {
        (Stdio::null(), Stdio::null())
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(stdout)
        .stderr(stderr)
        .spawn()
        .map_err(|e| process_error(program, format!("failed to start: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(input.as_bytes()).and_then(|_| stdin.flush()) {
            Ok(()) => {}
            // The client may exit before consuming every line; its exit status decides.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                log::debug!("{} closed its input early", program.display());
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(process_error(program, format!("failed to write input: {}", e)));
            }
        }
        drop(stdin);
    }

    let status = child
        .wait()
        .map_err(|e| process_error(program, format!("failed to wait: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(status_error(program, status, ""))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_capture_output_trims() {
        let out = capture_output(Path::new("/bin/sh"), &["-c", "printf '  state: Connected \\n\\n'"])
            .expect("sh should run");
        assert_eq!(out, "state: Connected");
    }

    #[test]
    fn test_capture_output_non_zero_exit() {
        let err = capture_output(Path::new("/bin/sh"), &["-c", "echo boom >&2; exit 3"]).unwrap_err();
        match err {
            VpnError::Process { program, reason } => {
                assert_eq!(program, "/bin/sh");
                assert!(reason.contains("boom"), "reason was {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_capture_output_missing_binary() {
        let err = capture_output(Path::new("/nonexistent/vpn"), &["status"]).unwrap_err();
        assert!(matches!(err, VpnError::Process { .. }));
    }

    #[test]
    fn test_run_scripted_feeds_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let sink = dir.path().join("input");
        let cmd = format!("cat > '{}'", sink.display());

        run_scripted(Path::new("/bin/sh"), &["-c", &cmd], "disconnect\nexit\n", false).unwrap();

        assert_eq!(std::fs::read_to_string(&sink).unwrap(), "disconnect\nexit\n");
    }

    #[test]
    fn test_run_scripted_non_zero_exit() {
        let err = run_scripted(Path::new("/bin/sh"), &["-c", "exit 1"], "exit\n", false).unwrap_err();
        assert!(matches!(err, VpnError::Process { .. }));
    }

    #[test]
    fn test_run_scripted_ignores_unread_input() {
        run_scripted(Path::new("/bin/sh"), &["-c", "exit 0"], "connect host\n", false).unwrap();
    }
}
