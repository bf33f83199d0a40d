// rfidlink/src/transport/tcp.rs

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::thread;
use std::time::Instant;

use log::{debug, warn};

use crate::constants::DEFAULT_WRITE_TIMEOUT_MS;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// `Transport` over a non-blocking `std::net::TcpStream`.
///
/// The stream is switched to non-blocking mode after the connect so that
/// `receive` returns immediately when nothing is pending, matching the
/// once-per-tick polling the link is built around.
///
/// Writes are bounded by a write timeout: a peer that stops reading fills
/// its window, and the send then fails with `Error::Timeout` and closes the
/// stream rather than waiting on it.
#[derive(Debug)]
pub struct TcpTransport {
    stream: Option<TcpStream>,
    write_timeout_ms: u64,
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl TcpTransport {
    /// Unconnected transport with the default write timeout.
    pub fn new() -> Self {
        Self::with_write_timeout_ms(DEFAULT_WRITE_TIMEOUT_MS)
    }

    /// Unconnected transport whose sends give up after `ms`.
    pub fn with_write_timeout_ms(ms: u64) -> Self {
        Self {
            stream: None,
            write_timeout_ms: ms,
        }
    }

    /// Address of the connected server, if any.
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.stream.as_ref().and_then(|s| s.peer_addr().ok())
    }

    fn stream_mut(&mut self) -> Result<&mut TcpStream> {
        self.stream.as_mut().ok_or(Error::NotConnected)
    }
}

impl Transport for TcpTransport {
    fn connect(&mut self, addr: SocketAddr, timeout_ms: u64) -> Result<()> {
        self.close();
        let stream = TcpStream::connect_timeout(&addr, crate::utils::ms(timeout_ms)).map_err(
            |e| Error::ConnectFailed {
                addr,
                reason: e.to_string(),
            },
        )?;
        stream.set_nodelay(true)?;
        stream.set_nonblocking(true)?;
        self.stream = Some(stream);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            // Peer may already be gone; nothing useful to do with the error.
            let _ = stream.shutdown(Shutdown::Both);
        }
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        let timeout_ms = self.write_timeout_ms;
        let started = Instant::now();
        let stream = self.stream_mut()?;
        let mut written = 0usize;
        while written < data.len() {
            match stream.write(&data[written..]) {
                Ok(0) => {
                    self.close();
                    return Err(Error::ConnectionClosed);
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                // Send buffer full: the peer is not reading.
                Err(e) if e.kind() == ErrorKind::WouldBlock => {
                    if started.elapsed() >= crate::utils::ms(timeout_ms) {
                        warn!(
                            "tcp write stalled for {} ms, {}/{} bytes written",
                            timeout_ms,
                            written,
                            data.len()
                        );
                        self.close();
                        return Err(Error::Timeout);
                    }
                    thread::sleep(crate::utils::ms(1));
                }
                Err(e) => {
                    debug!("tcp write failed: {}", e);
                    self.close();
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let stream = self.stream_mut()?;
        match stream.read(buf) {
            Ok(0) => {
                self.close();
                Err(Error::ConnectionClosed)
            }
            Ok(n) => Ok(n),
            Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::Interrupted => {
                Ok(0)
            }
            Err(e) => {
                debug!("tcp read failed: {}", e);
                self.close();
                Err(e.into())
            }
        }
    }
}
