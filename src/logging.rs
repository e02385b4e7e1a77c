//! Tracing setup for the `git-exec` binary.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber. `RUST_LOG` wins over the level chosen here.
pub fn init(verbose: bool) -> Result<()> {
	let level = if verbose { "debug" } else { "warn" };
	let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
	let filter = tracing_subscriber::EnvFilter::new(directives);

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(false)
				.with_writer(std::io::stderr),
		)
		.try_init()?;
	Ok(())
}
