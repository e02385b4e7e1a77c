use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
	#[error("failed to execute `{command}`: {source}")]
	Spawn {
		command: String,
		#[source]
		source: io::Error,
	},

	#[error("`{command}` failed with {}: {}", exit_label(.code), .stderr.trim())]
	Failed {
		command: String,
		code: Option<i32>,
		stdout: String,
		stderr: String,
	},

	#[error("`{command}` timed out after {timeout:?}")]
	TimedOut { command: String, timeout: Duration },

	#[error("working directory {} does not exist", .0.display())]
	MissingWorkingDirectory(PathBuf),
}

impl GitError {
	/// Process exit code matching this failure: the child's own code when it has one.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::Failed { code: Some(code), .. } if *code != 0 => *code,
			_ => 1,
		}
	}

	/// Command line that produced the error, if one was built.
	pub fn command(&self) -> Option<&str> {
		match self {
			Self::Spawn { command, .. }
			| Self::Failed { command, .. }
			| Self::TimedOut { command, .. } => Some(command),
			Self::MissingWorkingDirectory(_) => None,
		}
	}
}

fn exit_label(code: &Option<i32>) -> String {
	match code {
		Some(code) => format!("exit code {code}"),
		None => "no exit code (killed by signal)".to_string(),
	}
}

pub type Result<T, E = GitError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failed_message_names_command_and_code() {
		let err = GitError::Failed {
			command: "git push origin".into(),
			code: Some(128),
			stdout: String::new(),
			stderr: "fatal: no such remote\n".into(),
		};
		assert_eq!(
			err.to_string(),
			"`git push origin` failed with exit code 128: fatal: no such remote"
		);
		assert_eq!(err.exit_code(), 128);
		assert_eq!(err.command(), Some("git push origin"));
	}

	#[test]
	fn spawn_message_keeps_the_io_cause() {
		let err = GitError::Spawn {
			command: "git status".into(),
			source: io::Error::new(io::ErrorKind::NotFound, "sh not found"),
		};
		assert_eq!(err.to_string(), "failed to execute `git status`: sh not found");
		assert_eq!(err.exit_code(), 1);
		assert_eq!(err.command(), Some("git status"));
	}

	#[test]
	fn signal_and_missing_directory_exit_with_one() {
		let killed = GitError::Failed {
			command: "git gc".into(),
			code: None,
			stdout: String::new(),
			stderr: String::new(),
		};
		assert_eq!(killed.exit_code(), 1);

		let missing = GitError::MissingWorkingDirectory(PathBuf::from("/nope"));
		assert_eq!(missing.exit_code(), 1);
		assert_eq!(missing.command(), None);
		assert_eq!(missing.to_string(), "working directory /nope does not exist");
	}
}
