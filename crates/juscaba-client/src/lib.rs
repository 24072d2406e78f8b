//! Read-only retrieval pipeline over the JusCABA public case API.
//!
//! A case identifier is resolved to its record ([`JuscabaClient::resolve`]),
//! its procedural entries are paged through in full
//! ([`JuscabaClient::fetch_all_entries`]), and each entry is expanded into the
//! document URLs reachable from it ([`JuscabaClient::derive_documents`]).
//! Nothing is cached or retried; document bodies are never downloaded.

mod client;
pub mod config;
mod deriver;
pub mod endpoints;
pub mod error;
mod paginator;
mod resolver;
#[cfg(test)]
mod stub;
pub mod transport;

pub use client::JuscabaClient;
pub use config::ClientConfig;
pub use endpoints::{DEFAULT_BASE_URL, Endpoints};
pub use error::{ClientError, Target};
pub use transport::{BoxError, HttpTransport, RawResponse, Transport};
