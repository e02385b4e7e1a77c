//! Forwarding adapter from method calls to `git` and `hub` invocations.
//!
//! Every operation renders `<prefix> <options>` and hands the line to
//! [`crate::exec::execute`]. Nothing here inspects git's output.

mod subcommand;

pub use subcommand::Subcommand;

use tracing::instrument;

use crate::config::Settings;
use crate::error::Result;
use crate::exec::{self, CommandOutput, ExecOptions};
use crate::options::{self, CommandOptions};

/// Git command runner bound to a fixed set of [`Settings`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Git {
	settings: Settings,
}

impl Git {
	pub fn new(settings: Settings) -> Self {
		Self { settings }
	}

	/// Settings captured at construction.
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Settings used for one call: the captured ones unless `exec` overrides them.
	pub fn effective_settings(&self, exec: Option<&ExecOptions>) -> Settings {
		match exec {
			Some(exec) => self.settings.with_overrides(exec),
			None => self.settings.clone(),
		}
	}

	/// Command line `subcommand` would run with `options`.
	///
	/// The separator after the keyword is kept even when the options are empty.
	pub fn command_line(subcommand: Subcommand, options: &CommandOptions) -> String {
		format!("{} {}", subcommand.prefix(), options::normalize(options))
	}

	/// Build the command line for `subcommand` and execute it.
	#[instrument(skip_all, fields(subcommand = %subcommand))]
	pub async fn run(
		&self,
		subcommand: Subcommand,
		options: impl Into<CommandOptions>,
		exec: Option<&ExecOptions>,
	) -> Result<CommandOutput> {
		let line = Self::command_line(subcommand, &options.into());
		let settings = self.effective_settings(exec);
		let default_exec = ExecOptions::default();
		exec::execute(&line, exec.unwrap_or(&default_exec), &settings).await
	}
}

macro_rules! forward {
	($($(#[$doc:meta])* $method:ident => $subcommand:ident;)*) => {
		impl Git {
			$(
				$(#[$doc])*
				pub async fn $method(
					&self,
					options: impl Into<CommandOptions>,
					exec: Option<&ExecOptions>,
				) -> Result<CommandOutput> {
					self.run(Subcommand::$subcommand, options, exec).await
				}
			)*
		}
	};
}

forward! {
	/// `git add`
	add => Add;
	/// `git bisect`
	bisect => Bisect;
	/// `git branch`
	branch => Branch;
	/// `git checkout`
	checkout => Checkout;
	/// `git clean`
	clean => Clean;
	/// `git clone`
	clone => Clone;
	/// `git commit`
	commit => Commit;
	/// `git config`
	config => Config;
	/// `git diff`
	diff => Diff;
	/// `git fetch`
	fetch => Fetch;
	/// `git grep`
	grep => Grep;
	/// `git init`
	init => Init;
	/// `git log`
	log => Log;
	/// `git merge`
	merge => Merge;
	/// `git mv`
	mv => Mv;
	/// `git pull`
	pull => Pull;
	/// `hub pull-request`; needs the `hub` executable on `PATH`.
	pull_request => PullRequest;
	/// `git push`
	push => Push;
	/// `git rebase`
	rebase => Rebase;
	/// `git remote`
	remote => Remote;
	/// `git reset`
	reset => Reset;
	/// `git rm`
	rm => Rm;
	/// `git show`
	show => Show;
	/// `git status`
	status => Status;
	/// `git tag`
	tag => Tag;
	/// Plain `git` with the options supplying the subcommand, e.g. `git.git("stash list", None)`.
	git => Passthrough;
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	fn sample_options() -> Vec<CommandOptions> {
		vec![
			CommandOptions::None,
			"--all".into(),
			["-m", "first commit"].into(),
			json!({ "force": true, "b": "feature/x" }).into(),
		]
	}

	#[test]
	fn command_line_is_prefix_plus_normalized_options() {
		for sub in Subcommand::ALL {
			for options in sample_options() {
				let expected = format!("{} {}", sub.prefix(), options::normalize(&options));
				assert_eq!(Git::command_line(sub, &options), expected);
			}
		}
	}

	#[test]
	fn command_line_examples() {
		assert_eq!(
			Git::command_line(Subcommand::Commit, &["-m", "wip"].into()),
			"git commit -m wip"
		);
		assert_eq!(Git::command_line(Subcommand::Status, &CommandOptions::None), "git status ");
		assert_eq!(
			Git::command_line(Subcommand::PullRequest, &"-m 'Add feature'".into()),
			"hub pull-request -m 'Add feature'"
		);
		assert_eq!(
			Git::command_line(Subcommand::Passthrough, &"stash list".into()),
			"git stash list"
		);
	}

	#[test]
	fn settings_are_attached_unchanged_without_override() {
		let settings = Settings {
			working_directory: PathBuf::from("/work"),
			dry_run: true,
			logging: true,
			force_exit: false,
		};
		let git = Git::new(settings.clone());

		assert_eq!(git.settings(), &settings);
		assert_eq!(git.effective_settings(None), settings);
	}

	#[test]
	fn override_applies_to_one_call_only() {
		let git = Git::new(Settings::new("/work"));
		let exec = ExecOptions::new().cwd("/elsewhere").logging(true);

		let effective = git.effective_settings(Some(&exec));
		assert_eq!(effective.working_directory, PathBuf::from("/elsewhere"));
		assert!(effective.logging);
		assert_eq!(git.settings(), &Settings::new("/work"));
	}

	#[tokio::test]
	async fn dry_run_returns_the_command_line() {
		let git = Git::new(Settings {
			dry_run: true,
			..Settings::new("/does/not/matter")
		});

		let out = git.push(["origin", "main"], None).await.unwrap();
		assert!(out.dry_run);
		assert_eq!(out.command, "git push origin main");

		let out = git.pull_request("-b main", None).await.unwrap();
		assert_eq!(out.command, "hub pull-request -b main");

		let out = git.git((), None).await.unwrap();
		assert_eq!(out.command, "git ");
	}
}
