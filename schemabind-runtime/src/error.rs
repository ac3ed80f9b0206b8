//! Errors raised while encoding, sending or decoding a request.

use thiserror::Error;

/// Result type returned by generated operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a generated operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed; the inner error is passed through untouched.
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// A field could not be serialized to JSON.
    #[error("failed to encode field {field}")]
    Encode {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response payload did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller supplied a file reference kind the field does not accept.
    #[error("invalid value for file field {field}: {reason}")]
    FileKind { field: String, reason: String },
}

impl Error {
    /// Wrap a transport failure.
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(err.into())
    }

    /// Build an encoding failure for `field`.
    pub fn encode(field: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            field: field.into(),
            source,
        }
    }
}

/// Why a polymorphic payload could not be routed to an implementer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("expected a JSON object for {family}")]
    NotAnObject { family: &'static str },

    #[error("unknown {field} \"{tag}\" for {family}")]
    UnknownTag {
        family: &'static str,
        field: &'static str,
        tag: String,
    },

    #[error("no implementer of {family} matched the payload")]
    NoMatch { family: &'static str },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_transport_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = Error::transport(io);
        assert_eq!(err.to_string(), "timed out");
    }

    #[test]
    fn test_encode_error_names_field() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = Error::encode("reply_markup", source);
        assert_eq!(err.to_string(), "failed to encode field reply_markup");
        assert!(err.source().is_some());
    }
}
