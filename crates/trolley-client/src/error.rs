//! Cart client error types.

use crate::transport::TransportError;
use thiserror::Error;

/// Errors that can surface from cart operations.
///
/// Malformed payloads on paths that have a resync fallback never surface
/// as errors; the client converges to server truth instead.
#[derive(Error, Debug)]
pub enum CartError {
    /// The request never reached the server, or no response arrived.
    #[error("network failure: {0}")]
    Network(String),

    /// The server responded with a failure status.
    #[error("server responded {status}: {message}")]
    Server { status: u16, message: String },

    /// A response arrived but matched no recognized shape.
    #[error("unrecognized response shape: {0}")]
    MalformedResponse(String),

    /// A mutating call was attempted with no active session.
    #[error("no active session")]
    NoSession,
}

impl From<TransportError> for CartError {
    fn from(err: TransportError) -> Self {
        CartError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_network_class() {
        let err: CartError = TransportError::Timeout.into();
        assert!(matches!(err, CartError::Network(_)));

        let err: CartError = TransportError::Connection("refused".to_string()).into();
        assert!(matches!(err, CartError::Network(_)));
    }

    #[test]
    fn test_display() {
        let err = CartError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "server responded 500: boom");
    }
}
