//! Traversal result records.

use uascope_protocol::NodeKind;
use uascope_runtime::NodeHandle;

/// One discovered item of the remote object graph.
///
/// Entries are produced fresh by one traversal and live only as long as
/// the menus built from them; none survives a reconnect, because the
/// handle inside is a lease owned by the session that issued it.
#[derive(Debug, Clone)]
pub struct Entry {
	/// Lease on the remote node.
	pub handle: NodeHandle,
	/// Classification driving the interaction offered for this entry.
	pub kind: NodeKind,
	/// Display names from the traversal root down to this node. Never
	/// empty; `path[0]` is the root's own display name.
	pub path: Vec<String>,
	/// Nearest ancestor container. Procedures are invoked on it, so it
	/// must be present for them; containers and data points may sit
	/// directly under the traversal root.
	pub owning_container: Option<NodeHandle>,
}

impl Entry {
	/// `/`-joined display path, the stable menu identity of this entry.
	///
	/// Two entries share a joined path only when the server itself
	/// aliases a display name; such duplicates are kept and shown twice.
	pub fn joined_path(&self) -> String {
		self.path.join("/")
	}

	/// Case-insensitive ordering key; menus sort by it.
	pub(crate) fn sort_key(&self) -> String {
		self.joined_path().to_lowercase()
	}
}

/// Outcome of one traversal: the sorted entries plus explicit counters
/// for everything the lenient-skip policy dropped.
#[derive(Debug, Default)]
pub struct Walk {
	/// Entries sorted ascending by case-insensitive joined path.
	pub entries: Vec<Entry>,
	/// Nodes dropped because kind or display name could not be read;
	/// their whole subtree is dropped with them.
	pub unreadable_nodes: usize,
	/// Nodes whose children could not be listed and were treated as
	/// leaves.
	pub failed_enumerations: usize,
}
