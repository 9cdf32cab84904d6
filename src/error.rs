use thiserror::Error;

/// Unified error type for the client.
///
/// The transport layer is the only place failures originate; everything above
/// it propagates them unmodified. Field-level coercion mismatches are not
/// errors — they degrade to absent values at the point of coercion.
#[derive(Debug, Error)]
pub enum Error {
    /// The gateway answered with a non-2xx status. The message is extracted
    /// from an `{"error": ...}` body when one is present.
    #[error("Remote error: HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// A 2xx response whose body is not valid JSON where JSON was expected.
    /// This is an API contract violation and is never silently swallowed.
    #[error("Malformed response: HTTP {status} body is not valid JSON: {detail}")]
    MalformedResponse { status: u16, detail: String },

    /// Network-level failure before any status was obtained.
    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    /// Client-side misconfiguration (e.g. an invalid base URL).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    /// HTTP status attached to this error, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } | Error::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}
