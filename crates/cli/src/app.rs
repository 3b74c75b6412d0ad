//! Session lifecycle around one navigator run.

use tracing::info;
use uascope::{Console, Navigator};
use uascope_runtime::connect;

use crate::cli::Cli;
use crate::config::Config;
use crate::console::TermConsole;
use crate::error::Result;

/// Load configuration, open the session, browse, release.
///
/// The disconnect below is the single release point: operator quit,
/// console EOF, and Ctrl-C all pass through it.
pub async fn run(cli: Cli) -> Result<()> {
	let mut config = Config::load(&cli.config)?;
	if let Some(endpoint) = cli.endpoint {
		config.endpoint = endpoint;
	}
	info!(target = "uascope", endpoint = %config.endpoint, "starting");

	let console = TermConsole;
	let session = connect(&config.connect_options()).await?;
	console.info(&format!("connected to {}", session.endpoint()));

	let navigator = Navigator::new(session.as_ref(), &console).with_mode(cli.group_by.into());

	tokio::select! {
		() = navigator.run() => {}
		_ = tokio::signal::ctrl_c() => {
			console.info("\ninterrupted");
		}
	}

	session.disconnect().await?;
	console.info("connection closed, goodbye");
	Ok(())
}
