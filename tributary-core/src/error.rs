//! Error type shared by every cursor.

use thiserror::Error;

/// Errors raised by cursors, sizing and range construction.
///
/// Conditions that are expected during normal iteration (an empty source, a
/// filter with no match) are never reported through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// A pre-allocation hint was requested for an infinite sequence.
    #[error("unbounded allocation: cannot pre-allocate for an infinite iterator")]
    UnboundedAllocation,

    /// Range bounds and step do not describe a walkable range.
    #[error("invalid range: {reason}")]
    InvalidRange { reason: &'static str },

    /// The cursor is backed by a one-shot source and cannot restart.
    #[error("reset is not supported by this iterator")]
    ResetUnsupported,

    /// The cursor cannot remove elements from its backing storage.
    #[error("delete is not supported by this iterator")]
    DeleteUnsupported,

    /// `set` or `delete` was called without a current element.
    #[error("iterator has no current element")]
    NoCurrent,

    /// A background worker thread could not be started.
    #[error("failed to spawn worker thread")]
    WorkerSpawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
