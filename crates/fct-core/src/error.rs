use thiserror::Error;

/// Errors raised by the FCT harness.
///
/// Sentinel-recoverable failures (cover read faults, scanner transport
/// errors, I/O-card statuses) are deliberately *not* represented here; per
/// the harness failure policy they are folded into status tokens or absent
/// results at the call site. This enum covers the conditions that must reach
/// the caller.
#[derive(Error, Debug)]
pub enum Error {
    // Caller contract violations
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Serial port not configured")]
    PortNotConfigured,

    // Instrument errors
    #[error("Unparseable reply to '{command}': {response:?}")]
    InvalidResponse { command: String, response: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Transport-level failure with a backend-supplied message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Connection establishment failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionFailed(message.into())
    }

    /// Configuration problem surfaced before any I/O happens.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
