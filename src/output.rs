use std::io::{self, Write};
use std::path::Path;

use owo_colors::OwoColorize;

/// Echo a command line together with the directory it runs in.
pub fn command(cwd: &Path, line: &str) {
	eprintln!("{} {}", format!("[{}]", cwd.display()).dimmed(), line.bold().cyan());
}

/// Echo a command line that is skipped because of dry-run.
pub fn dry_run(cwd: &Path, line: &str) {
	eprintln!(
		"{} {} {}",
		"dry-run:".yellow().bold(),
		format!("[{}]", cwd.display()).dimmed(),
		line.bold().cyan()
	);
}

pub fn failure(message: &str) {
	eprintln!("{}", message.red().bold());
}

/// Forward a child's captured output to our own stdout and stderr.
pub fn child_streams(stdout: &str, stderr: &str) -> io::Result<()> {
	let mut out = io::stdout().lock();
	out.write_all(stdout.as_bytes())?;
	out.flush()?;
	io::stderr().write_all(stderr.as_bytes())
}
