use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::exec::ExecOptions;

pub const ENV_WORKING_DIRECTORY: &str = "GIT_EXEC_WORKING_DIRECTORY";
pub const ENV_DRY_RUN: &str = "GIT_EXEC_DRY_RUN";
pub const ENV_LOGGING: &str = "GIT_EXEC_LOGGING";
pub const ENV_FORCE_EXIT: &str = "GIT_EXEC_FORCE_EXIT";

/// Settings copied into a [`crate::Git`] at construction and handed to every command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
	/// Directory the shell runs in.
	pub working_directory: PathBuf,
	/// Log commands without running them.
	pub dry_run: bool,
	/// Echo every command before running it.
	pub logging: bool,
	/// Terminate the process when a command fails.
	pub force_exit: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			working_directory: PathBuf::from("."),
			dry_run: false,
			logging: false,
			force_exit: false,
		}
	}
}

impl Settings {
	pub fn new(working_directory: impl Into<PathBuf>) -> Self {
		Self {
			working_directory: working_directory.into(),
			..Self::default()
		}
	}

	/// Load settings from a JSON file, then apply environment overrides.
	pub fn load(path: &Path) -> Result<Self> {
		Self::load_with(path, |key| std::env::var(key).ok())
	}

	/// Like [`Settings::load`], resolving overrides through `lookup`.
	pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let contents =
			fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
		let mut settings: Settings = serde_json::from_str(&contents)
			.with_context(|| format!("failed to parse {} as JSON", path.display()))?;

		if settings.working_directory.is_relative() {
			let base = path.parent().unwrap_or_else(|| Path::new("."));
			settings.working_directory = normalize(&base.join(&settings.working_directory));
		}

		settings.apply_env(lookup)?;
		Ok(settings)
	}

	/// Apply `GIT_EXEC_*` overrides; `lookup` resolves a variable name to its value.
	pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
	where
		F: Fn(&str) -> Option<String>,
	{
		let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

		if let Some(dir) = lookup(ENV_WORKING_DIRECTORY) {
			self.working_directory = PathBuf::from(dir);
		}
		if let Some(value) = lookup(ENV_DRY_RUN) {
			self.dry_run = parse_bool(ENV_DRY_RUN, &value)?;
		}
		if let Some(value) = lookup(ENV_LOGGING) {
			self.logging = parse_bool(ENV_LOGGING, &value)?;
		}
		if let Some(value) = lookup(ENV_FORCE_EXIT) {
			self.force_exit = parse_bool(ENV_FORCE_EXIT, &value)?;
		}
		Ok(())
	}

	/// Copy of these settings with every field set in `exec` replaced.
	pub fn with_overrides(&self, exec: &ExecOptions) -> Self {
		Self {
			working_directory: exec
				.working_directory
				.clone()
				.unwrap_or_else(|| self.working_directory.clone()),
			dry_run: exec.dry_run.unwrap_or(self.dry_run),
			logging: exec.logging.unwrap_or(self.logging),
			force_exit: exec.force_exit.unwrap_or(self.force_exit),
		}
	}
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => anyhow::bail!("{key} must be a boolean, got {value:?}"),
	}
}

fn normalize(path: &Path) -> PathBuf {
	dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
