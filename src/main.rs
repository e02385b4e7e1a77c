use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use git_exec::{CommandOptions, ExecOptions, Git, GitError, Settings, Subcommand, logging, output};

#[derive(Parser, Debug)]
#[command(
	name = "git-exec",
	about = "Forward a subcommand and its options to git (or hub)",
	long_about = "git-exec renders `git <subcommand> <args>` (or `hub pull-request <args>`) \
                  and runs it through the shell in the configured working directory. \
                  Use `passthrough` to hand any other git subcommand over verbatim.",
	version
)]
struct Cli {
	/// Working directory (overrides the config file and environment).
	#[arg(long, short = 'C')]
	cwd: Option<PathBuf>,
	/// JSON settings file with workingDirectory, dryRun, logging and forceExit.
	#[arg(long)]
	config: Option<PathBuf>,
	/// Log the command without running it.
	#[arg(long)]
	dry_run: bool,
	/// Echo every command before running it.
	#[arg(long)]
	log: bool,
	/// Exit immediately when the command fails.
	#[arg(long)]
	force_exit: bool,
	/// Kill the command after this many seconds.
	#[arg(long, value_name = "SECS")]
	timeout: Option<u64>,
	/// Print the command line and exit.
	#[arg(long)]
	print: bool,
	/// Enable debug logging.
	#[arg(long, short = 'v')]
	verbose: bool,
	/// Subcommand to forward (add, commit, pull-request, passthrough, ...).
	#[arg(value_parser = parse_subcommand)]
	subcommand: Subcommand,
	/// Options appended after the subcommand.
	#[arg(trailing_var_arg = true, allow_hyphen_values = true)]
	args: Vec<String>,
}

fn parse_subcommand(value: &str) -> Result<Subcommand, String> {
	value.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::init(cli.verbose)?;

	let options = if cli.args.is_empty() {
		CommandOptions::None
	} else {
		CommandOptions::List(cli.args.clone())
	};

	if cli.print {
		println!("{}", Git::command_line(cli.subcommand, &options));
		return Ok(());
	}

	let git = Git::new(load_settings(&cli, |key| std::env::var(key).ok())?);
	let mut exec = ExecOptions::new();
	if let Some(secs) = cli.timeout {
		exec = exec.timeout(Duration::from_secs(secs));
	}

	match git.run(cli.subcommand, options, Some(&exec)).await {
		Ok(out) => {
			output::child_streams(&out.stdout, &out.stderr)?;
			Ok(())
		}
		Err(err) => {
			match &err {
				GitError::Failed { stdout, stderr, .. } => output::child_streams(stdout, stderr)?,
				_ => output::failure(&err.to_string()),
			}
			std::process::exit(err.exit_code());
		}
	}
}

/// Layer the config file (or defaults), `GIT_EXEC_*` overrides from `lookup`,
/// and the command-line flags.
fn load_settings<F>(cli: &Cli, lookup: F) -> anyhow::Result<Settings>
where
	F: Fn(&str) -> Option<String>,
{
	let mut settings = match &cli.config {
		Some(path) => Settings::load_with(path, lookup)?,
		None => {
			let mut settings = Settings::default();
			settings
				.apply_env(lookup)
				.context("invalid environment override")?;
			settings
		}
	};

	if let Some(cwd) = &cli.cwd {
		settings.working_directory = cwd.clone();
	}
	settings.dry_run |= cli.dry_run;
	settings.logging |= cli.log;
	settings.force_exit |= cli.force_exit;
	Ok(settings)
}
