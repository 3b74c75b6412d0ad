//! The Remote Session capability and node leases.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uascope_protocol::{ArgumentDescriptor, NodeKind, TypeTag, Variant};

use crate::error::Result;

/// Opaque lease on one node of the remote object graph.
///
/// A handle is issued and owned by a session; it is only valid for that
/// session's lifetime and becomes void on disconnect. Callers store it,
/// display it, and hand it back — never interpret it. Cloning is cheap,
/// the id is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeHandle(Arc<str>);

impl NodeHandle {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Server-assigned node id, for display only.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authenticated connection to the automation server.
///
/// Every method may fail independently; per-node metadata failures are
/// local and never poison the session. The browsing core keeps at most
/// one call in flight at a time, so implementations never see concurrent
/// operations from one run.
#[async_trait]
pub trait RemoteSession: Send + Sync {
    /// Endpoint this session is connected to.
    fn endpoint(&self) -> &str;

    /// Root of the browsable object graph.
    fn objects_root(&self) -> NodeHandle;

    /// Classification of one node.
    async fn read_kind(&self, node: &NodeHandle) -> Result<NodeKind>;

    /// Human-readable display name of one node.
    async fn read_display_name(&self, node: &NodeHandle) -> Result<String>;

    /// Direct children through the hierarchical relation.
    async fn children(&self, node: &NodeHandle) -> Result<Vec<NodeHandle>>;

    /// Current value and declared type of a data point.
    async fn read_value(&self, node: &NodeHandle) -> Result<(TypeTag, Variant)>;

    /// Write a new value to a data point.
    async fn write_value(&self, node: &NodeHandle, value: Variant) -> Result<()>;

    /// Declared input arguments of a procedure. Callers treat a failure
    /// as "no arguments" rather than aborting the flow.
    async fn input_arguments(&self, procedure: &NodeHandle) -> Result<Vec<ArgumentDescriptor>>;

    /// Invoke a procedure on its owning container object.
    async fn invoke(
        &self,
        container: &NodeHandle,
        procedure: &NodeHandle,
        args: Vec<Variant>,
    ) -> Result<Variant>;

    /// Release the session. Handles issued by it must not be used again.
    async fn disconnect(&self) -> Result<()>;
}
