//! Clipboard helper for copying text to the system clipboard.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

/// Clipboard program and arguments for the current platform.
fn clipboard_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("pbcopy", &[])
    } else if cfg!(target_os = "windows") {
        ("clip", &[])
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        ("wl-copy", &[])
    } else {
        ("xclip", &["-selection", "clipboard"])
    }
}

/// Feed `text` to `program` on stdin and wait for it to exit.
///
/// The child is waited on even when writing fails; the write error is
/// returned after it has been reaped.
fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<ExitStatus> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let written = child
        .stdin
        .take()
        .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));
    // stdin is dropped here, so the program sees EOF
    let status = child.wait()?;
    written.map(|()| status)
}

/// Copy text to the system clipboard.
///
/// Uses `pbcopy` on macOS, `clip` on Windows, and `wl-copy` or `xclip`
/// elsewhere. Returns `true` on success.
pub fn copy_to_clipboard(text: &str) -> bool {
    let (program, args) = clipboard_command();
    match pipe_to(program, args, text) {
        Ok(status) => status.success(),
        Err(e) => {
            tracing::debug!("clipboard program {program} failed: {e}");
            false
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_to_reports_exit_status() {
        assert!(pipe_to("cat", &[], "hello").unwrap().success());
        assert!(!pipe_to("sh", &["-c", "exit 3"], "hello").unwrap().success());
    }

    #[test]
    fn test_pipe_to_waits_when_write_fails() {
        // `true` exits without reading, so a large write hits a closed pipe
        let text = "x".repeat(1 << 20);
        let err = pipe_to("true", &[], &text).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_pipe_to_missing_program() {
        assert!(pipe_to("catalog-browser-no-such-program", &[], "x").is_err());
    }
}
