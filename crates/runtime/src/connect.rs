//! Endpoint-to-session connector.

use std::sync::Arc;

use tracing::{debug, info};

use crate::demo::{DemoSession, DemoSpace};
use crate::error::{Result, SessionError};
use crate::session::RemoteSession;

/// Connection parameters resolved from configuration.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub endpoint: String,
    pub security_policy: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ConnectOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            security_policy: "None".to_string(),
            username: None,
            password: None,
        }
    }
}

/// Establish a session for the configured endpoint.
///
/// `demo://` endpoints are served by the embedded [`DemoSpace::sample`]
/// backend. Secure-channel transports (`opc.tcp://` and friends) are not
/// part of this build; anything implementing [`RemoteSession`] can be
/// swapped in by callers that bring their own transport.
pub async fn connect(options: &ConnectOptions) -> Result<Arc<dyn RemoteSession>> {
    if options.endpoint.starts_with("demo://") {
        info!(
            target = "uascope.session",
            endpoint = %options.endpoint,
            "connecting to embedded demo space"
        );
        if !options.security_policy.eq_ignore_ascii_case("none") {
            debug!(
                target = "uascope.session",
                policy = %options.security_policy,
                "demo backend ignores the security policy"
            );
        }
        if let Some(username) = &options.username {
            debug!(
                target = "uascope.session",
                %username,
                "demo backend accepts any credentials"
            );
        }
        let session = DemoSession::connect(options.endpoint.clone(), DemoSpace::sample());
        return Ok(Arc::new(session));
    }

    Err(SessionError::UnsupportedEndpoint {
        endpoint: options.endpoint.clone(),
        reason: "no transport for this scheme in this build (try demo://local)".to_string(),
    })
}
