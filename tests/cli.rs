use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn git_exec() -> Command {
	Command::cargo_bin("git-exec").unwrap()
}

#[test]
fn print_shows_the_command_line() {
	git_exec()
		.args(["--print", "commit", "-m", "two words"])
		.assert()
		.success()
		.stdout("git commit -m 'two words'\n");
}

#[test]
fn pull_request_goes_through_hub() {
	git_exec()
		.args(["--print", "pull-request", "-b", "main"])
		.assert()
		.success()
		.stdout("hub pull-request -b main\n");
}

#[test]
fn dry_run_logs_instead_of_running() {
	let dir = TempDir::new().unwrap();

	git_exec()
		.arg("-C")
		.arg(dir.path())
		.args(["--dry-run", "init"])
		.assert()
		.success()
		.stderr(predicate::str::contains("git init"));

	assert!(!dir.path().join(".git").exists());
}

#[cfg(unix)]
#[test]
fn failing_command_propagates_exit_code() {
	let dir = TempDir::new().unwrap();

	git_exec()
		.arg("-C")
		.arg(dir.path())
		.args(["status"])
		.assert()
		.failure()
		.code(128)
		.stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn unknown_subcommand_is_rejected() {
	git_exec()
		.arg("stash")
		.assert()
		.failure()
		.stderr(predicate::str::contains("unknown subcommand"));
}

#[cfg(unix)]
const FAILING_ALIAS: [&str; 4] = ["passthrough", "-c", "alias.x=!echo out; exit 7", "x"];

#[cfg(unix)]
#[test]
fn failure_keeps_child_output_without_log_noise() {
	let dir = TempDir::new().unwrap();

	git_exec()
		.arg("-C")
		.arg(dir.path())
		.args(FAILING_ALIAS)
		.assert()
		.failure()
		.code(7)
		.stdout("out\n")
		.stderr(predicate::str::contains("WARN").not());
}

#[cfg(unix)]
#[test]
fn force_exit_forwards_child_output_and_exit_code() {
	let dir = TempDir::new().unwrap();

	git_exec()
		.arg("-C")
		.arg(dir.path())
		.arg("--force-exit")
		.args(FAILING_ALIAS)
		.assert()
		.failure()
		.code(7)
		.stdout("out\n")
		.stderr(predicate::str::contains("failed with exit code 7"));
}

#[test]
fn dry_run_echoes_the_command_once() {
	let dir = TempDir::new().unwrap();

	let assert = git_exec()
		.arg("-C")
		.arg(dir.path())
		.args(["--dry-run", "--log", "commit", "-m", "wip"])
		.assert()
		.success();

	let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
	assert_eq!(stderr.matches("git commit -m wip").count(), 1);
}
