//! Error types for the session runtime.

use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by a remote session.
///
/// Per-node failures (`NodeUnreadable`, `EnumerationFailed`) are local by
/// contract: callers skip the node and keep going. Everything else is
/// reported to the operator and the interaction continues.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Kind or display name could not be read for one node.
    #[error("node {handle} is unreadable: {reason}")]
    NodeUnreadable { handle: String, reason: String },

    /// Child enumeration failed for one node.
    #[error("cannot list children of {handle}: {reason}")]
    EnumerationFailed { handle: String, reason: String },

    /// A read, write, or invocation was rejected by the server.
    #[error("remote call failed: {0}")]
    RemoteCallFailed(String),

    /// The handle does not resolve to a node in this session.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// No transport in this build speaks the endpoint's scheme.
    #[error("unsupported endpoint {endpoint}: {reason}")]
    UnsupportedEndpoint { endpoint: String, reason: String },

    /// The session has been released; handles it issued are void.
    #[error("session disconnected")]
    Disconnected,
}
