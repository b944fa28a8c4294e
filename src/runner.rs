//! Process execution boundary for the dsmadmc runner.
//!
//! The dispatcher only ever sees the [`CommandRunner`] trait: given one
//! command string, return exit code, stdout and stderr. The production
//! implementation spawns the process synchronously and blocks until it
//! exits; no timeout or retry policy lives at this layer.

use std::process::{Command, Stdio};

use log::debug;

/// Captured result of one external process run.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    /// Process exit code (-1 if terminated by signal).
    pub rc: i64,
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Captured standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

/// Black-box contract for executing one compiled command string.
pub trait CommandRunner {
    /// Run the command and capture its outcome. Exactly one process is
    /// spawned per call; a spawn failure is reported through the same
    /// shape as a failed run.
    fn execute(&self, command: &str) -> ExecOutput;
}

/// Production runner backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, command: &str) -> ExecOutput {
        let tokens = shell_words::split(command).unwrap_or_else(|_| {
            command.split_whitespace().map(str::to_string).collect()
        });
        let Some((program, args)) = tokens.split_first() else {
            return ExecOutput {
                rc: 127,
                stdout: String::new(),
                stderr: "empty command".to_string(),
            };
        };

        // The command string carries the plaintext password; only the
        // program token is safe to log from here.
        debug!("spawning {}", program);

        match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => ExecOutput {
                rc: i64::from(output.status.code().unwrap_or(-1)),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            // Spawn failure is not distinguished from a failed run: report
            // the shell's command-not-found code with the OS error text.
            Err(err) => ExecOutput {
                rc: 127,
                stdout: String::new(),
                stderr: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_on_success() {
        let output = SystemRunner.execute("echo hello");
        assert_eq!(output.rc, 0);
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_quoted_arguments_stay_one_token() {
        let output = SystemRunner.execute("echo \"SELECT 1\"");
        assert_eq!(output.rc, 0);
        assert_eq!(output.stdout.trim(), "SELECT 1");
    }

    #[test]
    fn test_nonzero_exit_code_captured() {
        let output = SystemRunner.execute("sh -c \"echo oops >&2; exit 3\"");
        assert_eq!(output.rc, 3);
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[test]
    fn test_spawn_failure_reports_127() {
        let output = SystemRunner.execute("definitely-not-a-real-binary-4242");
        assert_eq!(output.rc, 127);
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn test_empty_command_reports_127() {
        let output = SystemRunner.execute("");
        assert_eq!(output.rc, 127);
    }
}
