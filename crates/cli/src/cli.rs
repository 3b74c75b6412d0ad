use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use uascope::GroupingMode;

/// Interactive address-space browser and invocation console.
#[derive(Parser, Debug)]
#[command(name = "uascope")]
#[command(about = "uascope - browse and drive a remote automation server from the terminal")]
#[command(version)]
pub struct Cli {
	/// Path to the key=value configuration file.
	#[arg(short, long, value_name = "FILE", default_value = "setup.txt")]
	pub config: PathBuf,

	/// Endpoint override (for example demo://local); wins over the file.
	#[arg(short, long, value_name = "URL")]
	pub endpoint: Option<String>,

	/// Root menu grouping strategy.
	#[arg(long, value_enum, default_value = "segment")]
	pub group_by: GroupBy,

	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}

/// CLI wrapper for [`GroupingMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
	/// First hierarchy level beneath the traversal root.
	Segment,
	/// Node kind (containers, data points, procedures).
	Kind,
}

impl From<GroupBy> for GroupingMode {
	fn from(value: GroupBy) -> Self {
		match value {
			GroupBy::Segment => GroupingMode::Segment,
			GroupBy::Kind => GroupingMode::Kind,
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn defaults_apply() {
		let cli = Cli::parse_from(["uascope"]);
		assert_eq!(cli.config, PathBuf::from("setup.txt"));
		assert_eq!(cli.endpoint, None);
		assert_eq!(cli.group_by, GroupBy::Segment);
		assert_eq!(cli.verbose, 0);
	}

	#[test]
	fn overrides_parse() {
		let cli = Cli::parse_from([
			"uascope",
			"--endpoint",
			"demo://local",
			"--group-by",
			"kind",
			"-vv",
		]);
		assert_eq!(cli.endpoint.as_deref(), Some("demo://local"));
		assert_eq!(cli.group_by, GroupBy::Kind);
		assert_eq!(cli.verbose, 2);
	}
}
