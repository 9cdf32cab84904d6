//! HTTP transport: request execution and status classification.
//!
//! One call is one attempt — no retries, no caching. Retry policy, if a
//! caller wants one, lives above this layer.

pub mod http;

pub use http::{HttpTransport, TransportError};
