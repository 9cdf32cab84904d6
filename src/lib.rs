//! # signal-lib-rust
//!
//! Typed async client for a Signal messaging REST gateway.
//!
//! ## Overview
//!
//! This library wraps the gateway's REST API (accounts, devices, groups,
//! messages, contacts, profiles, identities, receipts, stickers, attachments,
//! search) behind a uniform, typed interface. The gateway is not
//! self-consistent about response shapes: the same logical operation may
//! return a bare JSON array, a single object, or a wrapper object keyed by an
//! entity name. The client absorbs all three shapes and always hands back the
//! same typed result.
//!
//! ## Core Philosophy
//!
//! - **Shape-Tolerant**: every response is reduced to one canonical form
//!   before coercion, so endpoint code never branches on payload shape
//! - **Lossless**: fields the server sends that we do not model yet are kept
//!   in each entity's extension bag instead of being dropped
//! - **Lenient at the field level, strict at the call level**: a mistyped
//!   field degrades to absent; a non-2xx status or a non-JSON 2xx body is a
//!   hard error
//! - **Stateless**: every call is independent; the only shared resource is
//!   the underlying connection pool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signal_lib_rust::SignalClient;
//!
//! #[tokio::main]
//! async fn main() -> signal_lib_rust::Result<()> {
//!     let client = SignalClient::new("http://localhost:8080")?;
//!
//!     let about = client.about().await?;
//!     println!("gateway version {}", about.version);
//!
//!     let groups = client.groups().get_groups("+1234567890").await?;
//!     for group in groups {
//!         println!("{}: {:?}", group.id, group.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client facade and builder |
//! | [`modules`] | One operation module per entity family |
//! | [`models`] | Typed entities with extension bags |
//! | [`response`] | Response shape normalization |
//! | [`coerce`] | Tolerant record-to-entity coercion |
//! | [`transport`] | HTTP execution and status classification |

pub mod client;
pub mod coerce;
pub mod models;
pub mod modules;
pub mod response;
pub mod transport;

// Re-export main types for convenience
pub use client::{SignalClient, SignalClientBuilder};
pub use coerce::{FromRecord, RawRecord, RecordView};
pub use response::{normalize, Normalized};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Opaque acknowledgement body returned by operations without a typed result.
pub type Ack = serde_json::Value;

/// Error type for the library
pub mod error;
pub use error::Error;
