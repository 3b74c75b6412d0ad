use thiserror::Error;
use uascope_runtime::SessionError;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI failure; decides the process exit code.
#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Session(#[from] SessionError),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl CliError {
	/// Configuration problems abort before connecting and get their own
	/// exit code; everything else is a plain failure.
	pub fn exit_code(&self) -> i32 {
		match self {
			CliError::Config(_) => 2,
			CliError::Session(_) | CliError::Io(_) => 1,
		}
	}
}
