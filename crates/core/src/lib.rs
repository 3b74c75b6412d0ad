//! Browsing core for uascope.
//!
//! Turns an arbitrary remote object graph into a stable, orderable,
//! re-enterable menu system:
//!
//! - [`walk`] traverses the graph into a sorted, classified entry list,
//!   skipping unreadable subtrees instead of failing
//! - [`group_by_kind`] / [`group_by_first_segment`] partition that list
//!   into the two menu groupings
//! - [`convert`] turns free-text operator input into typed variants
//! - [`Navigator`] runs the interactive dispatch loop over a
//!   [`Console`] and a [`uascope_runtime::RemoteSession`]
//!
//! Both I/O surfaces are traits, so every flow in here runs against
//! scripted doubles in tests.

pub mod console;
pub mod convert;
pub mod entry;
pub mod grouping;
pub mod invoke;
pub mod menu;
pub mod navigator;
pub mod walker;

pub use console::Console;
pub use convert::{ConvertError, convert};
pub use entry::{Entry, Walk};
pub use grouping::{Group, group_by_first_segment, group_by_kind};
pub use invoke::{InvokeError, invoke_with_texts};
pub use menu::{Command, Rejection, resolve_choice};
pub use navigator::{GroupingMode, Navigator};
pub use walker::walk;
