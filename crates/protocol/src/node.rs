//! Node classification and procedure argument metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variant::TypeTag;

/// Classification of one node of the remote object graph.
///
/// The set is closed on purpose: the browser dispatches on it exhaustively
/// at exactly one point, so a server exposing anything beyond these four
/// must be mapped into `Other` by the session layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Organizational object that may have children; holds no value itself.
    Container,
    /// Readable/writable typed value.
    DataPoint,
    /// Remotely invokable operation with typed input arguments.
    Procedure,
    /// Present in the graph but not actionable from the console.
    Other,
}

impl NodeKind {
    /// Display name used for menu labels and kind grouping keys.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Container => "Container",
            NodeKind::DataPoint => "DataPoint",
            NodeKind::Procedure => "Procedure",
            NodeKind::Other => "Other",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so menu columns can align kinds with a width spec.
        f.pad(self.label())
    }
}

/// Declared name and type of one procedure input argument.
///
/// Transient: read from the server immediately before an invocation and
/// discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    /// Argument name as exposed by the server.
    pub name: String,
    /// Declared input type; drives text conversion at the prompt.
    pub type_tag: TypeTag,
}

impl ArgumentDescriptor {
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
        }
    }
}
