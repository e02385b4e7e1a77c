pub mod config;
pub mod error;
pub mod exec;
pub mod git;
pub mod logging;
pub mod options;
pub mod output;

pub use config::Settings;
pub use error::GitError;
pub use exec::{CommandOutput, ExecOptions};
pub use git::{Git, Subcommand};
pub use options::{CommandOptions, FlagValue};
