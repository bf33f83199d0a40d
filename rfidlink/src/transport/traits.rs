// rfidlink/src/transport/traits.rs

use std::net::SocketAddr;

use crate::Result;

/// Transport trait abstracts the one outbound stream socket away from the
/// connection and protocol logic.
pub trait Transport {
    /// Open a connection to `addr`, bounded by `timeout_ms`. Any previous
    /// connection must already have been closed by the caller.
    fn connect(&mut self, addr: SocketAddr, timeout_ms: u64) -> Result<()>;

    /// Whether the transport believes it holds an open connection. This may
    /// still say `true` after the peer has silently vanished.
    fn is_connected(&self) -> bool;

    /// Release the connection. Safe to call when already closed.
    fn close(&mut self);

    /// Write all of `data`.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Non-blocking read into `buf`. Returns `Ok(0)` when nothing is
    /// available, `Err(Error::ConnectionClosed)` once the peer has closed
    /// the stream.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize>;
}
