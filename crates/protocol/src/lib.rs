//! Value-level wire types shared between the session runtime and the
//! browsing core.
//!
//! Types in this crate are pure data: node classifications, type tags,
//! tagged values, and procedure argument metadata as they cross the
//! session boundary. No behavior beyond serialization and display lives
//! here; the ergonomic APIs are built on top in `uascope`.

pub mod node;
pub mod variant;

pub use node::{ArgumentDescriptor, NodeKind};
pub use variant::{TypeTag, Variant};
