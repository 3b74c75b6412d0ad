//! Interactive navigation over the remote object graph.
//!
//! One dispatch loop owns the menu stack: root (group keys) → group
//! (entries) → item interaction. The root level re-runs the walker every
//! time it is entered, so the operator always sees current server state;
//! everything below it works on that snapshot. Quit unwinds the whole
//! stack from any menu prompt.

use std::io;

use tracing::{debug, info};
use uascope_protocol::NodeKind;
use uascope_runtime::RemoteSession;

use crate::console::Console;
use crate::convert::convert;
use crate::entry::Entry;
use crate::grouping::{Group, group_by_first_segment, group_by_kind};
use crate::invoke::invoke_with_texts;
use crate::menu::{Command, resolve_choice};
use crate::walker::walk;

/// Root menu grouping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingMode {
	/// Group by the first hierarchy level beneath the traversal root.
	#[default]
	Segment,
	/// Group by node kind.
	Kind,
}

/// Where a finished menu level sends the dispatch loop next.
enum Flow {
	/// Stay on the current level.
	Stay,
	/// Unwind to the root menu (which re-walks).
	Root,
	/// Unwind everything and end the run.
	Quit,
}

/// The interactive controller: owns the menu stack and dispatches
/// item-specific interaction flows.
pub struct Navigator<'a> {
	session: &'a dyn RemoteSession,
	console: &'a dyn Console,
	mode: GroupingMode,
}

impl<'a> Navigator<'a> {
	pub fn new(session: &'a dyn RemoteSession, console: &'a dyn Console) -> Self {
		Self {
			session,
			console,
			mode: GroupingMode::default(),
		}
	}

	pub fn with_mode(mut self, mode: GroupingMode) -> Self {
		self.mode = mode;
		self
	}

	/// Run until the operator quits.
	///
	/// A vanished console (EOF on stdin) unwinds exactly like quit, so
	/// the caller's release path always runs.
	pub async fn run(&self) {
		match self.browse().await {
			Ok(()) => info!(target = "uascope.nav", "operator quit"),
			Err(err) => debug!(target = "uascope.nav", error = %err, "console input ended, unwinding"),
		}
	}

	async fn browse(&self) -> io::Result<()> {
		loop {
			// Fresh snapshot on every visit to the root menu.
			let snapshot = walk(self.session, &self.session.objects_root()).await;
			if snapshot.unreadable_nodes > 0 || snapshot.failed_enumerations > 0 {
				self.console.info(&format!(
					"skipped {} unreadable node(s), {} failed child listing(s)",
					snapshot.unreadable_nodes, snapshot.failed_enumerations
				));
			}
			match self.root_menu(&snapshot.entries).await? {
				Flow::Quit => return Ok(()),
				Flow::Root | Flow::Stay => continue,
			}
		}
	}

	async fn root_menu(&self, entries: &[Entry]) -> io::Result<Flow> {
		let groups: Group<'_> = match self.mode {
			GroupingMode::Segment => group_by_first_segment(entries),
			GroupingMode::Kind => group_by_kind(entries),
		};
		let keys: Vec<&String> = groups.keys().collect();
		let lines: Vec<String> = groups
			.iter()
			.map(|(key, members)| format!("{key} ({})", members.len()))
			.collect();

		loop {
			self.console.display_list("Address Space Browser", &lines);
			self.console.info("q: quit");
			let input = self.console.read_line("choice: ").await?;
			match resolve_choice(&input, keys.len()) {
				Ok(Command::Quit) => return Ok(Flow::Quit),
				Ok(Command::Select(index)) => {
					let key = keys[index];
					match self.group_menu(key, &groups[key]).await? {
						Flow::Quit => return Ok(Flow::Quit),
						// Re-entering the root means re-walking.
						Flow::Root | Flow::Stay => return Ok(Flow::Root),
					}
				}
				Ok(Command::Up | Command::Root) => {
					self.console.error("already at the root menu");
				}
				Err(rejection) => self.console.error(rejection.message()),
			}
		}
	}

	async fn group_menu(&self, key: &str, members: &[&Entry]) -> io::Result<Flow> {
		loop {
			let lines: Vec<String> = members
				.iter()
				.map(|entry| format!("{:<9} /{}", entry.kind, entry.joined_path()))
				.collect();
			self.console.display_list(key, &lines);
			self.console.info("u: up, m: root menu, q: quit");
			let input = self.console.read_line("choice: ").await?;
			match resolve_choice(&input, members.len()) {
				Ok(Command::Quit) => return Ok(Flow::Quit),
				Ok(Command::Up | Command::Root) => return Ok(Flow::Root),
				Ok(Command::Select(index)) => {
					if let Flow::Quit = self.inspect(members[index]).await? {
						return Ok(Flow::Quit);
					}
				}
				Err(rejection) => self.console.error(rejection.message()),
			}
		}
	}

	/// Terminal leaf before interaction: show the entry, then dispatch on
	/// its kind. This is the single point that matches on [`NodeKind`].
	async fn inspect(&self, entry: &Entry) -> io::Result<Flow> {
		self.console
			.info(&format!("--- /{} ---", entry.joined_path()));
		self.console.info(&format!("node id : {}", entry.handle));
		self.console.info(&format!("kind    : {}", entry.kind));

		match entry.kind {
			NodeKind::DataPoint => self.data_point_loop(entry).await,
			NodeKind::Procedure => {
				if entry.owning_container.is_none() {
					self.console
						.error("procedure has no owning container; cannot invoke");
					return Ok(Flow::Stay);
				}
				self.procedure_flow(entry).await
			}
			NodeKind::Container | NodeKind::Other => self.pause().await,
		}
	}

	async fn data_point_loop(&self, entry: &Entry) -> io::Result<Flow> {
		loop {
			let (tag, value) = match self.session.read_value(&entry.handle).await {
				Ok(read) => read,
				Err(err) => {
					self.console.error(&format!("read failed: {err}"));
					return Ok(Flow::Stay);
				}
			};
			self.console
				.info(&format!("current value: {value} ({tag})"));

			let input = self
				.console
				.read_line("[r] re-read, [w] write, [b] back, [q] quit: ")
				.await?;
			match input.trim().to_lowercase().as_str() {
				"r" => continue,
				"b" => return Ok(Flow::Stay),
				"q" => return Ok(Flow::Quit),
				"w" => {
					// Value text is taken literally; only menu prompts
					// understand commands.
					let text = self.console.read_line("new value: ").await?;
					match convert(&text, tag) {
						Ok(value) => match self.session.write_value(&entry.handle, value).await {
							Ok(()) => self.console.info("value written"),
							Err(err) => self.console.error(&format!("write failed: {err}")),
						},
						Err(err) => self.console.error(&err.to_string()),
					}
				}
				_ => self.console.error("unknown action"),
			}
		}
	}

	async fn procedure_flow(&self, entry: &Entry) -> io::Result<Flow> {
		let descriptors = match self.session.input_arguments(&entry.handle).await {
			Ok(descriptors) => descriptors,
			Err(err) => {
				// Unreadable argument metadata demotes the procedure to
				// zero arguments rather than blocking the invocation.
				debug!(target = "uascope.nav", node = %entry.handle, error = %err, "argument metadata unreadable, assuming none");
				Vec::new()
			}
		};

		let mut texts = Vec::with_capacity(descriptors.len());
		for descriptor in &descriptors {
			let prompt = format!("{} ({}) = ", descriptor.name, descriptor.type_tag);
			texts.push(self.console.read_line(&prompt).await?);
		}

		match invoke_with_texts(self.session, entry, &descriptors, &texts).await {
			Ok(result) => self.console.info(&format!("result: {result}")),
			Err(err) => self.console.error(&format!("call failed: {err}")),
		}
		self.pause().await
	}

	async fn pause(&self) -> io::Result<Flow> {
		let input = self.console.read_line("[enter] back: ").await?;
		if input.trim().eq_ignore_ascii_case("q") {
			Ok(Flow::Quit)
		} else {
			Ok(Flow::Stay)
		}
	}
}
