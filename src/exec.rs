//! Shell command execution.
//!
//! Command lines are handed to the platform shell (`sh -c` on Unix, `cmd /C`
//! on Windows) so that quoting, globbing and `hub` aliases behave exactly as
//! they would when typed by hand.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::config::Settings;
use crate::error::{GitError, Result};
use crate::output;

/// Per-invocation overrides. Unset fields fall back to the [`Settings`] of the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
	pub working_directory: Option<PathBuf>,
	pub dry_run: Option<bool>,
	pub logging: Option<bool>,
	pub force_exit: Option<bool>,
	pub env: Vec<(String, String)>,
	pub timeout: Option<Duration>,
}

impl ExecOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Run in `path` instead of the configured working directory.
	pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
		self.working_directory = Some(path.into());
		self
	}

	pub fn dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = Some(dry_run);
		self
	}

	pub fn logging(mut self, logging: bool) -> Self {
		self.logging = Some(logging);
		self
	}

	pub fn force_exit(mut self, force_exit: bool) -> Self {
		self.force_exit = Some(force_exit);
		self
	}

	/// Set an extra environment variable for the child.
	pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.env.push((key.into(), value.into()));
		self
	}

	/// Kill the child if it runs longer than `timeout`.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// Captured result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
	/// Command line as handed to the shell.
	pub command: String,
	pub stdout: String,
	pub stderr: String,
	/// Exit code; `None` when nothing was run.
	pub code: Option<i32>,
	/// The command was only logged.
	pub dry_run: bool,
}

impl CommandOutput {
	fn skipped(command: &str) -> Self {
		Self {
			command: command.to_owned(),
			stdout: String::new(),
			stderr: String::new(),
			code: None,
			dry_run: true,
		}
	}

	pub fn stdout_trimmed(&self) -> &str {
		self.stdout.trim()
	}

	pub fn success(&self) -> bool {
		self.dry_run || self.code == Some(0)
	}
}

/// Execute `command` through the shell using `settings`, with `exec` supplying
/// the child environment and timeout.
///
/// With `force_exit` set, a failure is printed and the process exits instead of
/// returning the error.
pub async fn execute(
	command: &str,
	exec: &ExecOptions,
	settings: &Settings,
) -> Result<CommandOutput> {
	match run(command, exec, settings).await {
		Err(err) if settings.force_exit => {
			match &err {
				GitError::Failed { stdout, stderr, .. } => {
					// Exiting anyway; a closed pipe must not mask the exit code.
					let _ = output::child_streams(stdout, stderr);
					let code = err.exit_code();
					output::failure(&format!("`{command}` failed with exit code {code}"));
				}
				_ => output::failure(&err.to_string()),
			}
			std::process::exit(err.exit_code());
		}
		result => result,
	}
}

async fn run(command: &str, exec: &ExecOptions, settings: &Settings) -> Result<CommandOutput> {
	let cwd = settings.working_directory.as_path();
	debug!(command, cwd = %cwd.display(), dry_run = settings.dry_run, "Running command");

	if settings.dry_run {
		output::dry_run(cwd, command);
		return Ok(CommandOutput::skipped(command));
	}
	if settings.logging {
		output::command(cwd, command);
	}

	if !cwd.is_dir() {
		return Err(GitError::MissingWorkingDirectory(cwd.to_path_buf()));
	}

	let mut cmd = shell(command, cwd);
	cmd.envs(exec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

	let pending = cmd.output();
	let output = match exec.timeout {
		Some(timeout) => tokio::time::timeout(timeout, pending)
			.await
			.map_err(|_| GitError::TimedOut {
				command: command.to_owned(),
				timeout,
			})?,
		None => pending.await,
	}
	.map_err(|source| GitError::Spawn {
		command: command.to_owned(),
		source,
	})?;

	let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
	let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
	let code = output.status.code();

	if !output.status.success() {
		debug!(command, ?code, "Command failed");
		return Err(GitError::Failed {
			command: command.to_owned(),
			code,
			stdout,
			stderr,
		});
	}

	Ok(CommandOutput {
		command: command.to_owned(),
		stdout,
		stderr,
		code,
		dry_run: false,
	})
}

fn shell(command: &str, cwd: &Path) -> Command {
	#[cfg(windows)]
	let mut cmd = {
		let mut cmd = Command::new("cmd");
		cmd.arg("/C").arg(command);
		cmd
	};
	#[cfg(not(windows))]
	let mut cmd = {
		let mut cmd = Command::new("sh");
		cmd.arg("-c").arg(command);
		cmd
	};

	cmd.current_dir(cwd)
		.stdin(Stdio::null())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.kill_on_drop(true);
	cmd
}
