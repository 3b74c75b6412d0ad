//! End-to-end navigation flows over the demo backend with a scripted
//! console.

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use uascope::{Console, GroupingMode, Navigator};
use uascope_protocol::{TypeTag, Variant};
use uascope_runtime::{DemoSession, DemoSpace, RemoteSession};

/// Console double: pops scripted operator inputs, records everything it
/// was asked to show.
#[derive(Default)]
struct ScriptConsole {
	inputs: Mutex<VecDeque<String>>,
	log: Mutex<Vec<String>>,
}

impl ScriptConsole {
	fn new(inputs: &[&str]) -> Self {
		Self {
			inputs: Mutex::new(inputs.iter().map(|s| s.to_string()).collect()),
			log: Mutex::new(Vec::new()),
		}
	}

	fn log_contains(&self, needle: &str) -> bool {
		self.log.lock().unwrap().iter().any(|line| line.contains(needle))
	}

	fn count_containing(&self, needle: &str) -> usize {
		self.log
			.lock()
			.unwrap()
			.iter()
			.filter(|line| line.contains(needle))
			.count()
	}
}

#[async_trait]
impl Console for ScriptConsole {
	fn display_list(&self, title: &str, lines: &[String]) {
		let mut log = self.log.lock().unwrap();
		log.push(format!("== {title} =="));
		for (index, line) in lines.iter().enumerate() {
			log.push(format!("{}: {line}", index + 1));
		}
	}

	async fn read_line(&self, _prompt: &str) -> io::Result<String> {
		self.inputs
			.lock()
			.unwrap()
			.pop_front()
			.ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
	}

	fn info(&self, text: &str) {
		self.log.lock().unwrap().push(text.to_string());
	}

	fn error(&self, text: &str) {
		self.log.lock().unwrap().push(format!("error: {text}"));
	}
}

/// Root "Objects" holding one "Device" container with a Double data
/// point and a no-argument procedure.
fn device_space() -> DemoSpace {
	let space = DemoSpace::empty("Objects");
	let device = space.add_container(&space.root(), "Device");
	space.add_data_point(&device, "Speed", TypeTag::Double, Variant::Double(0.0));
	space.add_procedure(&device, "Reset", Vec::new(), |_args| {
		Ok(Variant::Boolean(true))
	});
	space
}

#[tokio::test]
async fn write_read_back_invoke_and_quit() {
	let session = DemoSession::connect("demo://local", device_space());
	let console = ScriptConsole::new(&[
		"1",    // root: the "Device" group
		"3",    // group: DataPoint /Objects/Device/Speed
		"w",    // write
		"42.5", // new value
		"b",    // after the read-back, back to the group
		"2",    // group: Procedure /Objects/Device/Reset
		"",     // pause after the invocation result
		"q",    // quit from the group menu
	]);

	Navigator::new(&session, &console).run().await;

	assert_eq!(session.write_calls(), 1);
	assert_eq!(session.invoke_calls(), 1);
	// The re-read after the write showed the new value.
	assert!(console.log_contains("current value: 42.5 (Double)"));
	assert!(console.log_contains("result: true"));

	session.disconnect().await.unwrap();
	assert!(!session.is_connected());
}

#[tokio::test]
async fn invalid_tokens_reprompt_without_changing_depth() {
	let session = DemoSession::connect("demo://local", device_space());
	let console = ScriptConsole::new(&["x", "99", "q"]);

	Navigator::new(&session, &console).run().await;

	assert!(console.log_contains("error: please enter a number"));
	assert!(console.log_contains("error: number out of range"));
	// Still at the root menu each time: three renderings, no group menu.
	assert_eq!(console.count_containing("== Address Space Browser =="), 3);
	assert_eq!(console.count_containing("== Device =="), 0);
}

#[tokio::test]
async fn kind_mode_groups_the_root_menu_by_kind() {
	let session = DemoSession::connect("demo://local", device_space());
	let console = ScriptConsole::new(&["q"]);

	Navigator::new(&session, &console)
		.with_mode(GroupingMode::Kind)
		.run()
		.await;

	assert!(console.log_contains("Container (2)"));
	assert!(console.log_contains("DataPoint (1)"));
	assert!(console.log_contains("Procedure (1)"));
}

#[tokio::test]
async fn conversion_failure_keeps_the_write_loop_alive() {
	let session = DemoSession::connect("demo://local", device_space());
	let console = ScriptConsole::new(&[
		"1",     // root: Device
		"3",     // Speed
		"w",     // write
		"abc",   // does not convert
		"w",     // loop continued: try again
		"13.5",  // converts and writes
		"b",     // back
		"q",     // quit
	]);

	Navigator::new(&session, &console).run().await;

	assert!(console.log_contains("is not a valid Double"));
	assert!(console.log_contains("current value: 13.5 (Double)"));
	assert_eq!(session.write_calls(), 1);
}

#[tokio::test]
async fn unreadable_argument_metadata_means_zero_arguments() {
	let space = device_space();
	let extra = space.add_container(&space.root(), "Extra");
	let stubborn = space.add_procedure(&extra, "Stubborn", Vec::new(), |_args| {
		Ok(Variant::String("ran".to_string()))
	});
	space.fail_input_arguments(&stubborn);

	let session = DemoSession::connect("demo://local", space);
	let console = ScriptConsole::new(&[
		"2", // root: Extra (Device < Extra < Objects)
		"2", // Procedure /Objects/Extra/Stubborn
		"",  // pause after result
		"q", // quit
	]);

	Navigator::new(&session, &console).run().await;

	// No argument prompt was needed; the call still went through.
	assert_eq!(session.invoke_calls(), 1);
	assert!(console.log_contains("result: ran"));
}

#[tokio::test]
async fn console_eof_unwinds_like_quit() {
	let session = DemoSession::connect("demo://local", device_space());
	let console = ScriptConsole::new(&["1"]); // script ends inside the group menu

	Navigator::new(&session, &console).run().await;

	// Unwound cleanly; release still possible.
	session.disconnect().await.unwrap();
	assert!(!session.is_connected());
}

#[tokio::test]
async fn root_menu_rewalks_on_every_entry() {
	let space = device_space();
	let session = DemoSession::connect("demo://local", space.clone());
	let console = ScriptConsole::new(&[
		"1", // into Device
		"u", // up: root is re-entered, so it re-walks
		"1", // into Device again
		"q", // quit
	]);

	Navigator::new(&session, &console).run().await;
	assert_eq!(console.count_containing("== Address Space Browser =="), 2);
	assert_eq!(console.count_containing("== Device =="), 2);
}
