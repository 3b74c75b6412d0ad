//! Console I/O capability consumed by the navigator.

use async_trait::async_trait;

/// Semantic console contract.
///
/// The navigator renders and reads exclusively through this trait; the
/// terminal implementation lives in the CLI, and tests script it.
#[async_trait]
pub trait Console: Send + Sync {
	/// Render a titled choice list. Implementations number the lines
	/// 1-based to match [`crate::resolve_choice`].
	fn display_list(&self, title: &str, lines: &[String]);

	/// Prompt the operator and read one line, without the trailing
	/// newline. `Err` means the input stream is gone (EOF); callers
	/// unwind as if the operator quit.
	async fn read_line(&self, prompt: &str) -> std::io::Result<String>;

	/// Informational message.
	fn info(&self, text: &str);

	/// Operator-visible error message.
	fn error(&self, text: &str);
}
