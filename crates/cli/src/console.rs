//! Terminal console: colored accents, blocking stdin reads kept off the
//! async runtime.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use colored::Colorize;
use uascope::Console;

/// Console over stdin/stdout. Lists go to stdout, errors to stderr;
/// colors degrade automatically on non-tty output.
#[derive(Debug, Default)]
pub struct TermConsole;

#[async_trait]
impl Console for TermConsole {
	fn display_list(&self, title: &str, lines: &[String]) {
		println!("\n===== {title} =====");
		for (index, line) in lines.iter().enumerate() {
			let number = format!("{:>3}", index + 1);
			println!("{}: {line}", number.cyan());
		}
	}

	async fn read_line(&self, prompt: &str) -> io::Result<String> {
		let prompt = prompt.to_string();
		let read = tokio::task::spawn_blocking(move || {
			let mut stdout = io::stdout();
			write!(stdout, "{prompt}")?;
			stdout.flush()?;

			let mut line = String::new();
			let read = io::stdin().lock().read_line(&mut line)?;
			if read == 0 {
				return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
			}
			Ok(line.trim_end_matches(['\r', '\n']).to_string())
		})
		.await
		.map_err(io::Error::other)?;
		read
	}

	fn info(&self, text: &str) {
		println!("{}", text.green());
	}

	fn error(&self, text: &str) {
		eprintln!("{}", text.red());
	}
}
