//! Status token returned by digital I/O operations.

use std::fmt;

/// Outcome of a digital I/O actuation or read.
///
/// Every mutating or reading call on a fixture device returns one of these
/// tokens instead of raising. The switch backend is fire-and-forget, so its
/// success is always the fixed [`Status::Ok`] token; the I/O-card backend
/// passes its own error text through in [`Status::Fault`]. Callers must
/// treat anything other than `Ok` as failure and must not parse the fault
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The fixed success token.
    Ok,

    /// Backend-supplied error text, opaque to callers.
    Fault(String),

    /// Sentinel for an operation the bound backend cannot perform,
    /// e.g. a digital input read on a switch-bound device.
    UnsupportedDevice,
}

impl Status {
    /// Build a fault from backend-supplied text.
    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault(message.into())
    }

    /// Returns `true` for the fixed success token.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Returns `true` for the unsupported-device sentinel.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedDevice)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Fault(message) => write!(f, "{message}"),
            Self::UnsupportedDevice => write!(f, "DEVICE TYPE NOT SUPPORTED"),
        }
    }
}
