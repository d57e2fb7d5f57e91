use std::{error::Error, io};

use serde::Serialize;

/// Why a single connection attempt did not produce a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[error("address resolution failed")]
    Dns,
    #[error("connection refused")]
    ConnectionRefused,
    #[error("host or network unreachable")]
    Unreachable,
    #[error("connection reset")]
    Reset,
    #[error("timed out")]
    Timeout,
}

impl ErrorKind {
    /// Classify an OS-level connect error.
    pub fn classify_io(e: &io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::ConnectionRefused => ErrorKind::ConnectionRefused,
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof => ErrorKind::Reset,
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ErrorKind::Timeout,
            // Everything else (no route, address not available, permission) means the
            // endpoint cannot be reached from here.
            _ => ErrorKind::Unreachable,
        }
    }
}

/// Errors the connector reports to its caller as `Err`.
///
/// Per-candidate failures never show up here; they are logged instead.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// For callers that escalate an empty result into an error.
    #[error("no candidate could be connected")]
    NoConnection,
}

pub type BoxedError = Box<dyn Error + Send + Sync>;
