//! Key=value configuration for the connection target.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use uascope_runtime::ConnectOptions;

/// Why the configuration could not be loaded. Always fatal, always
/// before any connection attempt.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("cannot read configuration file {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("configuration is missing required key \"{0}\"")]
	Missing(&'static str),
}

/// Connection configuration record.
///
/// Loaded from a very simple `key=value` file: one pair per line, keys
/// case-insensitive, values trimmed, blank lines and `#` comments
/// skipped, lines without `=` ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub endpoint: String,
	pub security_policy: String,
	pub username: Option<String>,
	pub password: Option<String>,
}

impl Config {
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.display().to_string(),
			source,
		})?;
		Self::parse(&text)
	}

	pub fn parse(text: &str) -> Result<Self, ConfigError> {
		let mut values: HashMap<String, String> = HashMap::new();
		for line in text.lines() {
			let line = line.trim();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}
			let Some((key, value)) = line.split_once('=') else {
				continue;
			};
			values.insert(key.trim().to_lowercase(), value.trim().to_string());
		}

		let non_empty = |value: String| if value.is_empty() { None } else { Some(value) };
		let endpoint = values
			.remove("endpoint")
			.and_then(non_empty)
			.ok_or(ConfigError::Missing("endpoint"))?;

		Ok(Self {
			endpoint,
			security_policy: values
				.remove("security_policy")
				.and_then(non_empty)
				.unwrap_or_else(|| "None".to_string()),
			username: values.remove("username").and_then(non_empty),
			password: values.remove("password").and_then(non_empty),
		})
	}

	pub fn connect_options(&self) -> ConnectOptions {
		ConnectOptions {
			endpoint: self.endpoint.clone(),
			security_policy: self.security_policy.clone(),
			username: self.username.clone(),
			password: self.password.clone(),
		}
	}
}
