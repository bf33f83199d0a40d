// rfidlink/src/error.rs

use std::net::SocketAddr;

use thiserror::Error;

/// Crate-wide error type.
///
/// None of these cross the `ServerLink` boundary: the per-tick operations
/// fold every failure into a sentinel kind, a flag or an outcome enum.
#[derive(Error, Debug)]
pub enum Error {
    /// Socket-level failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Connect attempt refused or timed out.
    #[error("connect to {addr} failed: {reason}")]
    ConnectFailed {
        /// Address that was dialled.
        addr: SocketAddr,
        /// OS error text.
        reason: String,
    },

    /// Operation needs an open connection.
    #[error("not connected")]
    NotConnected,

    /// Peer closed the stream.
    #[error("connection closed by peer")]
    ConnectionClosed,

    /// Byte slice is not the expected size.
    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Length received.
        actual: usize,
    },

    /// Silence exceeded the heartbeat timeout.
    #[error("stale connection: nothing received for {elapsed_ms} ms")]
    StaleConnection {
        /// Time since the last complete frame.
        elapsed_ms: u64,
    },

    /// A bounded wait or write ran out of time.
    #[error("operation timed out")]
    Timeout,
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
