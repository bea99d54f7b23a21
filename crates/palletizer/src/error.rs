//! Error taxonomy for the packing client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PalletizerError>;

/// Failures before a complete response body was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to marshal request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl TransportError {
    /// True when the call was stopped by the caller's context rather than
    /// by the network.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// True when the transport's own timeout fired.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request(e) | Self::Body(e) => e.is_timeout(),
            Self::DeadlineExceeded => true,
            _ => false,
        }
    }
}

/// Errors returned by [`crate::PalletizerClient`].
#[derive(Debug, Error)]
pub enum PalletizerError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body was not a valid packing response. `body` holds the raw text.
    #[error("failed to parse response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Non-200 status with a non-empty `error` field in the body.
    #[error("API error (status {status}): {message}")]
    Application { status: u16, message: String },

    /// Non-200 status without an `error` field. `body` is the raw text.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PalletizerError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Either non-200 variant.
    pub fn is_application(&self) -> bool {
        matches!(self, Self::Application { .. } | Self::Status { .. })
    }

    /// HTTP status for non-200 responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Application { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body for decode and status errors.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Decode { body, .. } | Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
