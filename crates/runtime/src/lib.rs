//! Session runtime for uascope.
//!
//! This crate owns the boundary to the remote automation server:
//!
//! - **Node leases**: [`NodeHandle`], a cheap id that is only meaningful
//!   to the session that issued it
//! - **Session capability**: the [`RemoteSession`] trait consumed by the
//!   browsing core
//! - **Connector**: [`connect`] maps configuration to a live session
//! - **Demo backend**: an in-memory address space behind `demo://`
//!   endpoints, doubling as the fixture for walker and navigation tests
//!
//! The secure-channel wire transport is intentionally absent; anything
//! implementing [`RemoteSession`] can be plugged in behind [`connect`].

pub mod connect;
pub mod demo;
pub mod error;
pub mod session;

pub use connect::{ConnectOptions, connect};
pub use demo::{DemoSession, DemoSpace};
pub use error::{Result, SessionError};
pub use session::{NodeHandle, RemoteSession};
