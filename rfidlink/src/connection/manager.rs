// rfidlink/src/connection/manager.rs

use std::net::{IpAddr, SocketAddr};

use log::{debug, info, warn};

use crate::clock::Clock;
use crate::config::LinkConfig;
use crate::constants::FRAME_LEN;
use crate::protocol::{Frame, FrameBuffer};
use crate::transport::Transport;
use crate::utils::elapsed_ms;
use crate::{Error, Result};

/// Lifecycle of the single server connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No open connection.
    #[default]
    Disconnected,
    /// Connection open and considered alive.
    Connected,
}

/// Owns the one outbound transport and decides when it is (re)opened and
/// when it is declared dead.
///
/// The manager keeps its own `ConnectionState` instead of trusting the
/// transport's flag: a TCP socket whose peer vanished without a FIN still
/// looks open, so silence longer than the heartbeat timeout is what
/// actually detects failure.
pub struct ConnectionManager {
    transport: Box<dyn Transport>,
    clock: Box<dyn Clock>,
    state: ConnectionState,
    peer: Option<SocketAddr>,
    last_read_ms: u64,
    rx: FrameBuffer,
    server_port: u16,
    heartbeat_timeout_ms: u64,
    connect_timeout_ms: u64,
}

impl ConnectionManager {
    /// Manager over `transport`, initially disconnected.
    pub fn new(transport: Box<dyn Transport>, clock: Box<dyn Clock>, config: &LinkConfig) -> Self {
        let now = clock.now_ms();
        Self {
            transport,
            clock,
            state: ConnectionState::Disconnected,
            peer: None,
            last_read_ms: now,
            rx: FrameBuffer::new(),
            server_port: config.server_port,
            heartbeat_timeout_ms: config.heartbeat_timeout_ms,
            connect_timeout_ms: config.connect_timeout_ms,
        }
    }

    /// Make sure a connection to `server` is open, attempting at most one
    /// connect. An already open connection is left untouched, including
    /// its last-read time.
    pub fn ensure_connected(&mut self, server: IpAddr) -> bool {
        if self.state == ConnectionState::Connected && self.transport.is_connected() {
            return true;
        }

        self.disconnect();

        let addr = SocketAddr::new(server, self.server_port);
        match self.transport.connect(addr, self.connect_timeout_ms) {
            Ok(()) => {
                info!("successfully connected to the RFID server at {}", addr);
                self.state = ConnectionState::Connected;
                self.peer = Some(addr);
                self.last_read_ms = self.clock.now_ms();
                true
            }
            Err(e) => {
                warn!("no connection to the RFID server: {}", e);
                false
            }
        }
    }

    /// Tear the connection down if nothing has been received for longer
    /// than the heartbeat timeout, whatever the transport itself reports.
    /// Returns `true` when it did so.
    pub fn check_heartbeat(&mut self) -> bool {
        if self.state != ConnectionState::Connected {
            return false;
        }
        let elapsed = elapsed_ms(self.clock.now_ms(), self.last_read_ms);
        if elapsed > self.heartbeat_timeout_ms {
            warn!(
                "did not receive heartbeat, assuming socket is dead ({})",
                Error::StaleConnection { elapsed_ms: elapsed }
            );
            self.disconnect();
            return true;
        }
        false
    }

    /// Close the transport and drop any partial frame. Idempotent.
    pub fn disconnect(&mut self) {
        if self.state == ConnectionState::Connected {
            debug!(
                "closing connection to {}",
                self.peer.map(|p| p.to_string()).unwrap_or_default()
            );
        }
        self.transport.close();
        self.rx.clear();
        self.state = ConnectionState::Disconnected;
    }

    /// Write one frame. A failed write tears the connection down.
    pub fn send_frame(&mut self, frame: &Frame) -> Result<()> {
        if self.state != ConnectionState::Connected {
            return Err(Error::NotConnected);
        }
        match self.transport.send(frame.as_bytes()) {
            Ok(()) => {
                debug!("sent {} to server: {}", frame.kind(), frame);
                Ok(())
            }
            Err(e) => {
                warn!("sending {} failed: {}", frame.kind(), e);
                self.disconnect();
                Err(e)
            }
        }
    }

    /// Non-blocking read of at most one frame.
    ///
    /// Drains whatever is available up to the end of the current frame.
    /// Returns the frame once all eight bytes are present and stamps the
    /// last-read time; a partial frame stays buffered for the next call. A
    /// transport failure or peer close tears the connection down and is
    /// returned as the error.
    pub fn read_frame(&mut self) -> Result<Option<Frame>> {
        if self.state != ConnectionState::Connected {
            return Err(Error::NotConnected);
        }
        loop {
            let n = match self.transport.receive(self.rx.spare_mut()) {
                Ok(n) => n,
                Err(e) => {
                    warn!("lost connection to the RFID server: {}", e);
                    self.disconnect();
                    return Err(e);
                }
            };
            if n == 0 {
                if !self.rx.is_empty() {
                    debug!("partial frame buffered: {}/{} bytes", self.rx.len(), FRAME_LEN);
                }
                return Ok(None);
            }
            if let Some(frame) = self.rx.commit(n) {
                self.last_read_ms = self.clock.now_ms();
                debug!("got msg from server: {}", frame);
                return Ok(Some(frame));
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Shorthand for `state() == Connected`.
    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Address of the current (or last) connection.
    pub fn peer(&self) -> Option<SocketAddr> {
        self.peer
    }

    /// Clock time of the last complete frame, or of the last successful
    /// connect if nothing has arrived since.
    pub fn last_read_ms(&self) -> u64 {
        self.last_read_ms
    }

    /// Configured silence threshold.
    pub fn heartbeat_timeout_ms(&self) -> u64 {
        self.heartbeat_timeout_ms
    }

    /// Bytes of an incomplete frame currently buffered.
    pub fn buffered_bytes(&self) -> usize {
        self.rx.len()
    }

    /// Current time on the manager's clock.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Sleep on the manager's clock.
    pub fn sleep_ms(&self, ms: u64) {
        self.clock.sleep_ms(ms)
    }
}
