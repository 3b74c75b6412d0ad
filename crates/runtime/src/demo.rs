//! Embedded demo backend.
//!
//! An in-memory address space behind the [`RemoteSession`] contract. It
//! serves `demo://` endpoints so the binary is usable without a live
//! server, and doubles as the fixture for walker and navigation tests:
//! nodes can be marked unreadable, child listings can be made to fail,
//! and write/invoke calls are counted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};
use uascope_protocol::{ArgumentDescriptor, NodeKind, TypeTag, Variant};

use crate::error::{Result, SessionError};
use crate::session::{NodeHandle, RemoteSession};

type NodeMap = DashMap<Arc<str>, DemoNode>;
type ProcedureHandler =
    Box<dyn Fn(&[Variant]) -> std::result::Result<Variant, String> + Send + Sync>;

/// Value cell of a data-point node.
struct DataCell {
    tag: TypeTag,
    value: Mutex<Variant>,
    writable: bool,
}

struct DemoNode {
    kind: NodeKind,
    display_name: String,
    children: Vec<NodeHandle>,
    data: Option<DataCell>,
    arguments: Vec<ArgumentDescriptor>,
    handler: Option<ProcedureHandler>,
    unreadable: AtomicBool,
    fail_children: AtomicBool,
    fail_arguments: AtomicBool,
}

impl DemoNode {
    fn bare(kind: NodeKind, display_name: &str) -> Self {
        Self {
            kind,
            display_name: display_name.to_string(),
            children: Vec::new(),
            data: None,
            arguments: Vec::new(),
            handler: None,
            unreadable: AtomicBool::new(false),
            fail_children: AtomicBool::new(false),
            fail_arguments: AtomicBool::new(false),
        }
    }
}

/// Assemblable in-memory address space, shared by cloning.
///
/// Node ids are `kind@path` strings, uniquified with a `#n` suffix when a
/// server aliases the same display name twice under one parent.
#[derive(Clone)]
pub struct DemoSpace {
    nodes: Arc<NodeMap>,
    root: NodeHandle,
}

impl DemoSpace {
    /// New space holding only a root container named `root_name`.
    pub fn empty(root_name: &str) -> Self {
        let nodes: Arc<NodeMap> = Arc::new(DashMap::new());
        let root = NodeHandle::new(format!("container@{root_name}"));
        nodes.insert(
            Arc::from(root.id()),
            DemoNode::bare(NodeKind::Container, root_name),
        );
        Self { nodes, root }
    }

    /// Root of the space; what [`RemoteSession::objects_root`] hands out.
    pub fn root(&self) -> NodeHandle {
        self.root.clone()
    }

    pub fn add_container(&self, parent: &NodeHandle, name: &str) -> NodeHandle {
        self.add_node(parent, name, DemoNode::bare(NodeKind::Container, name))
    }

    /// Writable data point with a declared type and initial value.
    pub fn add_data_point(
        &self,
        parent: &NodeHandle,
        name: &str,
        tag: TypeTag,
        initial: Variant,
    ) -> NodeHandle {
        self.add_data_point_inner(parent, name, tag, initial, true)
    }

    /// Data point that rejects writes, like a value only a procedure may change.
    pub fn add_data_point_read_only(
        &self,
        parent: &NodeHandle,
        name: &str,
        tag: TypeTag,
        initial: Variant,
    ) -> NodeHandle {
        self.add_data_point_inner(parent, name, tag, initial, false)
    }

    fn add_data_point_inner(
        &self,
        parent: &NodeHandle,
        name: &str,
        tag: TypeTag,
        initial: Variant,
        writable: bool,
    ) -> NodeHandle {
        let mut node = DemoNode::bare(NodeKind::DataPoint, name);
        node.data = Some(DataCell {
            tag,
            value: Mutex::new(initial),
            writable,
        });
        self.add_node(parent, name, node)
    }

    pub fn add_procedure(
        &self,
        parent: &NodeHandle,
        name: &str,
        arguments: Vec<ArgumentDescriptor>,
        handler: impl Fn(&[Variant]) -> std::result::Result<Variant, String> + Send + Sync + 'static,
    ) -> NodeHandle {
        let mut node = DemoNode::bare(NodeKind::Procedure, name);
        node.arguments = arguments;
        node.handler = Some(Box::new(handler));
        self.add_node(parent, name, node)
    }

    /// Node that is present in the graph but not actionable.
    pub fn add_other(&self, parent: &NodeHandle, name: &str) -> NodeHandle {
        self.add_node(parent, name, DemoNode::bare(NodeKind::Other, name))
    }

    /// Make kind and display-name reads fail for this node.
    pub fn mark_unreadable(&self, node: &NodeHandle) {
        if let Some(entry) = self.nodes.get(node.id()) {
            entry.unreadable.store(true, Ordering::SeqCst);
        }
    }

    /// Make child enumeration fail for this node.
    pub fn fail_children(&self, node: &NodeHandle) {
        if let Some(entry) = self.nodes.get(node.id()) {
            entry.fail_children.store(true, Ordering::SeqCst);
        }
    }

    /// Make argument-descriptor reads fail for this procedure.
    pub fn fail_input_arguments(&self, node: &NodeHandle) {
        if let Some(entry) = self.nodes.get(node.id()) {
            entry.fail_arguments.store(true, Ordering::SeqCst);
        }
    }

    fn add_node(&self, parent: &NodeHandle, name: &str, node: DemoNode) -> NodeHandle {
        let parent_path = parent
            .id()
            .split_once('@')
            .map(|(_, path)| path)
            .unwrap_or(parent.id());
        let word = match node.kind {
            NodeKind::Container => "container",
            NodeKind::DataPoint => "datapoint",
            NodeKind::Procedure => "procedure",
            NodeKind::Other => "other",
        };
        let mut id = format!("{word}@{parent_path}/{name}");
        let mut serial = 1;
        while self.nodes.contains_key(id.as_str()) {
            serial += 1;
            id = format!("{word}@{parent_path}/{name}#{serial}");
        }

        let handle = NodeHandle::new(id);
        self.nodes.insert(Arc::from(handle.id()), node);
        if let Some(mut entry) = self.nodes.get_mut(parent.id()) {
            entry.children.push(handle.clone());
        }
        handle
    }

    /// The address space served by `demo://` endpoints: a small plant
    /// object with writable measurements, a nested folder, and two
    /// procedures.
    pub fn sample() -> Self {
        let space = Self::empty("Objects");
        let root = space.root();
        let da_ua = space.add_container(&root, "DA_UA");

        for name in ["Temperature", "Pressure", "Flow"] {
            space.add_data_point(&da_ua, name, TypeTag::Float, Variant::Float(0.0));
        }
        let folder = space.add_container(&da_ua, "folder_test");
        space.add_data_point(&folder, "Flow2", TypeTag::Float, Variant::Float(0.0));

        // Only SetTargetTemperature may change this one.
        let target = space.add_data_point_read_only(
            &da_ua,
            "TargetTemperature",
            TypeTag::Double,
            Variant::Double(20.0),
        );

        space.add_procedure(
            &da_ua,
            "IsEven",
            vec![ArgumentDescriptor::new("value", TypeTag::Int64)],
            |args| match args {
                [Variant::Int64(value)] => Ok(Variant::Boolean(value % 2 == 0)),
                _ => Err("expected one Int64 argument".to_string()),
            },
        );

        let nodes = Arc::clone(&space.nodes);
        let target_id: Arc<str> = Arc::from(target.id());
        space.add_procedure(
            &da_ua,
            "SetTargetTemperature",
            vec![ArgumentDescriptor::new("target", TypeTag::Double)],
            move |args| {
                let [Variant::Double(value)] = args else {
                    return Err("expected one Double argument".to_string());
                };
                if !(0.0..=100.0).contains(value) {
                    return Err(format!("target temperature {value} out of range (0..100)"));
                }
                if let Some(node) = nodes.get(target_id.as_ref()) {
                    if let Some(cell) = &node.data {
                        *cell.value.lock() = Variant::Double(*value);
                    }
                }
                Ok(Variant::Boolean(true))
            },
        );

        space
    }
}

/// Session over a [`DemoSpace`].
pub struct DemoSession {
    endpoint: String,
    space: DemoSpace,
    connected: AtomicBool,
    write_calls: AtomicUsize,
    invoke_calls: AtomicUsize,
}

impl DemoSession {
    pub fn connect(endpoint: impl Into<String>, space: DemoSpace) -> Self {
        let endpoint = endpoint.into();
        info!(target = "uascope.demo", %endpoint, "demo session connected");
        Self {
            endpoint,
            space,
            connected: AtomicBool::new(true),
            write_calls: AtomicUsize::new(0),
            invoke_calls: AtomicUsize::new(0),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Write attempts seen so far, for call-recording assertions.
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    /// Invocation attempts seen so far, for call-recording assertions.
    pub fn invoke_calls(&self) -> usize {
        self.invoke_calls.load(Ordering::SeqCst)
    }

    fn node(&self, handle: &NodeHandle) -> Result<dashmap::mapref::one::Ref<'_, Arc<str>, DemoNode>> {
        if !self.is_connected() {
            return Err(SessionError::Disconnected);
        }
        self.space
            .nodes
            .get(handle.id())
            .ok_or_else(|| SessionError::UnknownNode(handle.id().to_string()))
    }
}

#[async_trait]
impl RemoteSession for DemoSession {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn objects_root(&self) -> NodeHandle {
        self.space.root()
    }

    async fn read_kind(&self, node: &NodeHandle) -> Result<NodeKind> {
        let entry = self.node(node)?;
        if entry.unreadable.load(Ordering::SeqCst) {
            return Err(SessionError::NodeUnreadable {
                handle: node.id().to_string(),
                reason: "metadata read rejected".to_string(),
            });
        }
        Ok(entry.kind)
    }

    async fn read_display_name(&self, node: &NodeHandle) -> Result<String> {
        let entry = self.node(node)?;
        if entry.unreadable.load(Ordering::SeqCst) {
            return Err(SessionError::NodeUnreadable {
                handle: node.id().to_string(),
                reason: "metadata read rejected".to_string(),
            });
        }
        Ok(entry.display_name.clone())
    }

    async fn children(&self, node: &NodeHandle) -> Result<Vec<NodeHandle>> {
        let entry = self.node(node)?;
        if entry.fail_children.load(Ordering::SeqCst) {
            return Err(SessionError::EnumerationFailed {
                handle: node.id().to_string(),
                reason: "browse rejected".to_string(),
            });
        }
        Ok(entry.children.clone())
    }

    async fn read_value(&self, node: &NodeHandle) -> Result<(TypeTag, Variant)> {
        let entry = self.node(node)?;
        let cell = entry
            .data
            .as_ref()
            .ok_or_else(|| SessionError::RemoteCallFailed(format!("{node} holds no value")))?;
        Ok((cell.tag, cell.value.lock().clone()))
    }

    async fn write_value(&self, node: &NodeHandle, value: Variant) -> Result<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let entry = self.node(node)?;
        let cell = entry
            .data
            .as_ref()
            .ok_or_else(|| SessionError::RemoteCallFailed(format!("{node} holds no value")))?;
        if !cell.writable {
            return Err(SessionError::RemoteCallFailed(format!(
                "write rejected: {node} is read-only"
            )));
        }
        if value.type_tag() != cell.tag {
            return Err(SessionError::RemoteCallFailed(format!(
                "type mismatch: {node} expects {}",
                cell.tag
            )));
        }
        debug!(target = "uascope.demo", node = %node, value = %value, "write");
        *cell.value.lock() = value;
        Ok(())
    }

    async fn input_arguments(&self, procedure: &NodeHandle) -> Result<Vec<ArgumentDescriptor>> {
        let entry = self.node(procedure)?;
        if entry.fail_arguments.load(Ordering::SeqCst) {
            return Err(SessionError::NodeUnreadable {
                handle: procedure.id().to_string(),
                reason: "argument metadata rejected".to_string(),
            });
        }
        Ok(entry.arguments.clone())
    }

    async fn invoke(
        &self,
        container: &NodeHandle,
        procedure: &NodeHandle,
        args: Vec<Variant>,
    ) -> Result<Variant> {
        self.invoke_calls.fetch_add(1, Ordering::SeqCst);
        self.node(container)?;
        let entry = self.node(procedure)?;
        let handler = entry
            .handler
            .as_ref()
            .ok_or_else(|| SessionError::RemoteCallFailed(format!("{procedure} is not invokable")))?;
        debug!(target = "uascope.demo", procedure = %procedure, args = args.len(), "invoke");
        handler(&args).map_err(SessionError::RemoteCallFailed)
    }

    async fn disconnect(&self) -> Result<()> {
        if self.connected.swap(false, Ordering::SeqCst) {
            info!(target = "uascope.demo", endpoint = %self.endpoint, "demo session disconnected");
        }
        Ok(())
    }
}
