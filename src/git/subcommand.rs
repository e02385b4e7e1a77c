use std::fmt;
use std::str::FromStr;

/// Commands [`super::Git`] knows how to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
	Add,
	Bisect,
	Branch,
	Checkout,
	Clean,
	Clone,
	Commit,
	Config,
	Diff,
	Fetch,
	Grep,
	Init,
	Log,
	Merge,
	Mv,
	Pull,
	/// `hub pull-request`.
	PullRequest,
	Push,
	Rebase,
	Remote,
	Reset,
	Rm,
	Show,
	Status,
	Tag,
	/// Bare `git`; the options carry the subcommand.
	Passthrough,
}

impl Subcommand {
	pub const ALL: [Subcommand; 26] = [
		Self::Add,
		Self::Bisect,
		Self::Branch,
		Self::Checkout,
		Self::Clean,
		Self::Clone,
		Self::Commit,
		Self::Config,
		Self::Diff,
		Self::Fetch,
		Self::Grep,
		Self::Init,
		Self::Log,
		Self::Merge,
		Self::Mv,
		Self::Pull,
		Self::PullRequest,
		Self::Push,
		Self::Rebase,
		Self::Remote,
		Self::Reset,
		Self::Rm,
		Self::Show,
		Self::Status,
		Self::Tag,
		Self::Passthrough,
	];

	pub fn name(self) -> &'static str {
		match self {
			Self::Add => "add",
			Self::Bisect => "bisect",
			Self::Branch => "branch",
			Self::Checkout => "checkout",
			Self::Clean => "clean",
			Self::Clone => "clone",
			Self::Commit => "commit",
			Self::Config => "config",
			Self::Diff => "diff",
			Self::Fetch => "fetch",
			Self::Grep => "grep",
			Self::Init => "init",
			Self::Log => "log",
			Self::Merge => "merge",
			Self::Mv => "mv",
			Self::Pull => "pull",
			Self::PullRequest => "pull-request",
			Self::Push => "push",
			Self::Rebase => "rebase",
			Self::Remote => "remote",
			Self::Reset => "reset",
			Self::Rm => "rm",
			Self::Show => "show",
			Self::Status => "status",
			Self::Tag => "tag",
			Self::Passthrough => "passthrough",
		}
	}

	/// Program and keyword the options are appended to.
	pub fn prefix(self) -> &'static str {
		match self {
			Self::Add => "git add",
			Self::Bisect => "git bisect",
			Self::Branch => "git branch",
			Self::Checkout => "git checkout",
			Self::Clean => "git clean",
			Self::Clone => "git clone",
			Self::Commit => "git commit",
			Self::Config => "git config",
			Self::Diff => "git diff",
			Self::Fetch => "git fetch",
			Self::Grep => "git grep",
			Self::Init => "git init",
			Self::Log => "git log",
			Self::Merge => "git merge",
			Self::Mv => "git mv",
			Self::Pull => "git pull",
			Self::PullRequest => "hub pull-request",
			Self::Push => "git push",
			Self::Rebase => "git rebase",
			Self::Remote => "git remote",
			Self::Reset => "git reset",
			Self::Rm => "git rm",
			Self::Show => "git show",
			Self::Status => "git status",
			Self::Tag => "git tag",
			Self::Passthrough => "git",
		}
	}
}

impl fmt::Display for Subcommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Subcommand {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|sub| sub.name() == s)
			.ok_or_else(|| format!("unknown subcommand '{s}'"))
	}
}
