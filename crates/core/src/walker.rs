//! Depth-first traversal of the remote object graph.

use tracing::debug;
use uascope_protocol::NodeKind;
use uascope_runtime::{NodeHandle, RemoteSession, SessionError};

use crate::entry::{Entry, Walk};

/// Collect every container, data point, and procedure reachable from
/// `root` into a sorted entry list.
///
/// Traversal runs over an explicit work stack — remote graphs can be far
/// deeper than any sane call stack. Children are reached through the
/// single hierarchical relation only, which the server keeps acyclic.
///
/// The walk itself never fails: a node whose metadata cannot be read is
/// skipped together with its subtree, and a node whose children cannot
/// be listed becomes a leaf. Both cases are counted on the returned
/// [`Walk`] and logged, so a misbehaving corner of the server costs
/// exactly that corner.
pub async fn walk(session: &dyn RemoteSession, root: &NodeHandle) -> Walk {
	let mut walk = Walk::default();
	let mut stack: Vec<(NodeHandle, Vec<String>, Option<NodeHandle>)> =
		vec![(root.clone(), Vec::new(), None)];

	while let Some((node, mut path, container)) = stack.pop() {
		let (kind, name) = match read_metadata(session, &node).await {
			Ok(metadata) => metadata,
			Err(err) => {
				walk.unreadable_nodes += 1;
				debug!(target = "uascope.walk", node = %node, error = %err, "skipping unreadable node");
				continue;
			}
		};
		path.push(name);

		if matches!(
			kind,
			NodeKind::Container | NodeKind::DataPoint | NodeKind::Procedure
		) {
			walk.entries.push(Entry {
				handle: node.clone(),
				kind,
				path: path.clone(),
				owning_container: container.clone(),
			});
		}

		// Children inherit this node as their owning container only if it
		// is itself a container.
		let next_container = if kind == NodeKind::Container {
			Some(node.clone())
		} else {
			container
		};

		let children = match session.children(&node).await {
			Ok(children) => children,
			Err(err) => {
				walk.failed_enumerations += 1;
				debug!(target = "uascope.walk", node = %node, error = %err, "child listing failed, treating as leaf");
				Vec::new()
			}
		};
		for child in children {
			stack.push((child, path.clone(), next_container.clone()));
		}
	}

	// The one global step: a reproducible menu order.
	walk.entries.sort_by_key(Entry::sort_key);
	walk
}

async fn read_metadata(
	session: &dyn RemoteSession,
	node: &NodeHandle,
) -> Result<(NodeKind, String), SessionError> {
	let kind = session.read_kind(node).await?;
	let name = session.read_display_name(node).await?;
	Ok((kind, name))
}

#[cfg(test)]
mod tests {
	use uascope_protocol::{TypeTag, Variant};
	use uascope_runtime::{DemoSession, DemoSpace};

	use super::*;

	fn joined(walk: &Walk) -> Vec<String> {
		walk.entries.iter().map(Entry::joined_path).collect()
	}

	#[tokio::test]
	async fn sample_space_walks_sorted_and_complete() {
		let space = DemoSpace::sample();
		let session = DemoSession::connect("demo://local", space);
		let walk = walk(&session, &session.objects_root()).await;

		assert_eq!(
			joined(&walk),
			vec![
				"Objects",
				"Objects/DA_UA",
				"Objects/DA_UA/Flow",
				"Objects/DA_UA/folder_test",
				"Objects/DA_UA/folder_test/Flow2",
				"Objects/DA_UA/IsEven",
				"Objects/DA_UA/Pressure",
				"Objects/DA_UA/SetTargetTemperature",
				"Objects/DA_UA/TargetTemperature",
				"Objects/DA_UA/Temperature",
			]
		);
		assert!(walk.entries.iter().all(|entry| !entry.path.is_empty()));
		assert_eq!(walk.unreadable_nodes, 0);
		assert_eq!(walk.failed_enumerations, 0);
	}

	#[tokio::test]
	async fn walking_twice_yields_identical_sequences() {
		let space = DemoSpace::sample();
		let session = DemoSession::connect("demo://local", space);

		let first = walk(&session, &session.objects_root()).await;
		let second = walk(&session, &session.objects_root()).await;
		assert_eq!(joined(&first), joined(&second));
	}

	#[tokio::test]
	async fn procedures_carry_their_owning_container() {
		let space = DemoSpace::sample();
		let session = DemoSession::connect("demo://local", space);
		let walk = walk(&session, &session.objects_root()).await;

		let is_even = walk
			.entries
			.iter()
			.find(|entry| entry.path.last().is_some_and(|name| name == "IsEven"))
			.unwrap();
		assert_eq!(is_even.kind, NodeKind::Procedure);
		let container = is_even.owning_container.as_ref().unwrap();
		assert!(container.id().ends_with("DA_UA"));
	}

	#[tokio::test]
	async fn unreadable_child_drops_its_subtree_only() {
		let space = DemoSpace::sample();
		let folder = space.add_container(&space.root(), "broken");
		space.add_data_point(&folder, "inner", TypeTag::Int32, Variant::Int32(0));
		space.mark_unreadable(&folder);

		let session = DemoSession::connect("demo://local", space);
		let walk = walk(&session, &session.objects_root()).await;

		assert!(joined(&walk).iter().all(|path| !path.contains("broken")));
		assert!(joined(&walk).iter().all(|path| !path.contains("inner")));
		// Siblings and ancestors survive.
		assert!(joined(&walk).contains(&"Objects/DA_UA/Temperature".to_string()));
		assert_eq!(walk.unreadable_nodes, 1);
	}

	#[tokio::test]
	async fn failed_enumeration_demotes_the_node_to_a_leaf() {
		let space = DemoSpace::sample();
		let folder = space.add_container(&space.root(), "opaque");
		space.add_data_point(&folder, "hidden", TypeTag::Int32, Variant::Int32(0));
		space.fail_children(&folder);

		let session = DemoSession::connect("demo://local", space);
		let walk = walk(&session, &session.objects_root()).await;

		assert!(joined(&walk).contains(&"Objects/opaque".to_string()));
		assert!(joined(&walk).iter().all(|path| !path.contains("hidden")));
		assert_eq!(walk.failed_enumerations, 1);
	}

	#[tokio::test]
	async fn aliased_display_names_are_kept_twice() {
		let space = DemoSpace::empty("Objects");
		let root = space.root();
		space.add_data_point(&root, "X", TypeTag::Int32, Variant::Int32(1));
		space.add_data_point(&root, "X", TypeTag::Int32, Variant::Int32(2));

		let session = DemoSession::connect("demo://local", space);
		let walk = walk(&session, &session.objects_root()).await;

		let duplicates: Vec<_> = joined(&walk)
			.into_iter()
			.filter(|path| path == "Objects/X")
			.collect();
		assert_eq!(duplicates.len(), 2);
	}

	#[tokio::test]
	async fn sorting_ignores_case() {
		let space = DemoSpace::empty("Objects");
		let root = space.root();
		space.add_data_point(&root, "beta", TypeTag::Int32, Variant::Int32(0));
		space.add_data_point(&root, "Alpha", TypeTag::Int32, Variant::Int32(0));
		space.add_data_point(&root, "ALPHA2", TypeTag::Int32, Variant::Int32(0));

		let session = DemoSession::connect("demo://local", space);
		let walk = walk(&session, &session.objects_root()).await;
		assert_eq!(
			joined(&walk),
			vec!["Objects", "Objects/Alpha", "Objects/ALPHA2", "Objects/beta"]
		);
	}
}
