//! HTTP client for the kaneo project-management API.
//!
//! Provides [`KaneoClient`], which fetches projects, boards, tasks and
//! notifications and executes [`MutationIntent`](kaneo_core::intent::MutationIntent)s
//! over a pluggable [`Transport`].

pub mod client;
pub mod error;
pub mod transport;

// Re-exports for convenience.
pub use client::KaneoClient;
pub use error::ClientError;
pub use transport::{HttpRequest, HttpResponse, Transport, UreqTransport};
