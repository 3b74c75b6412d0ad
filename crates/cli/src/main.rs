use clap::Parser;
use colored::Colorize;
use uascope_cli::{app, cli::Cli, logging};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = app::run(cli).await {
		eprintln!("{}", format!("error: {err}").red());
		std::process::exit(err.exit_code());
	}
}
