// rfidlink/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::rc::Rc;

use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    connected: bool,
    refuse_connect: bool,
    fail_sends: bool,
    peer_closed: bool,
    /// Cap on bytes handed out per `receive` call (0 = unlimited)
    max_chunk: usize,
    connect_attempts: Vec<SocketAddr>,
    close_calls: usize,
    sent: Vec<Vec<u8>>,
    inbound: VecDeque<u8>,
}

/// Mock transport for tests. It records connects and sent payloads and
/// hands out queued inbound bytes.
///
/// Clones share state, so a test can keep a handle for seeding and
/// inspection after boxing another clone into a link.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Disconnected mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent connect attempts fail (or succeed again).
    pub fn refuse_connections(&self, refuse: bool) {
        self.state.borrow_mut().refuse_connect = refuse;
    }

    /// Make subsequent sends fail with a broken-pipe error.
    pub fn fail_sends(&self, fail: bool) {
        self.state.borrow_mut().fail_sends = fail;
    }

    /// Limit how many bytes one `receive` call returns, to exercise
    /// partial reads.
    pub fn set_max_chunk(&self, n: usize) {
        self.state.borrow_mut().max_chunk = n;
    }

    /// Queue raw inbound bytes.
    pub fn push_inbound(&self, bytes: &[u8]) {
        self.state.borrow_mut().inbound.extend(bytes.iter().copied());
    }

    /// Queue one whole inbound frame.
    pub fn push_frame(&self, frame: Frame) {
        self.push_inbound(frame.as_bytes());
    }

    /// Simulate the server hanging up: once queued bytes are drained,
    /// `receive` reports `ConnectionClosed`.
    pub fn close_from_peer(&self) {
        self.state.borrow_mut().peer_closed = true;
    }

    /// Flip the transport's own connected flag without going through
    /// `connect`/`close`, e.g. to model a stale-but-open socket.
    pub fn set_connected(&self, connected: bool) {
        self.state.borrow_mut().connected = connected;
    }

    /// Every address `connect` was called with.
    pub fn connect_attempts(&self) -> Vec<SocketAddr> {
        self.state.borrow().connect_attempts.clone()
    }

    /// Number of `close` calls.
    pub fn close_calls(&self) -> usize {
        self.state.borrow().close_calls
    }

    /// Every payload passed to `send`.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Most recent payload, if any.
    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.state.borrow().sent.last().cloned()
    }

    /// Queued inbound bytes not yet received.
    pub fn pending_inbound(&self) -> usize {
        self.state.borrow().inbound.len()
    }
}

impl Transport for MockTransport {
    fn connect(&mut self, addr: SocketAddr, _timeout_ms: u64) -> Result<()> {
        let mut s = self.state.borrow_mut();
        s.connect_attempts.push(addr);
        if s.refuse_connect {
            s.connected = false;
            return Err(Error::ConnectFailed {
                addr,
                reason: "refused by mock".to_string(),
            });
        }
        s.connected = true;
        s.peer_closed = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    fn close(&mut self) {
        let mut s = self.state.borrow_mut();
        s.close_calls += 1;
        s.connected = false;
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if !s.connected {
            return Err(Error::NotConnected);
        }
        if s.fail_sends {
            s.connected = false;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock send failure",
            )));
        }
        s.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut s = self.state.borrow_mut();
        if !s.connected {
            return Err(Error::NotConnected);
        }
        if s.inbound.is_empty() {
            if s.peer_closed {
                s.connected = false;
                return Err(Error::ConnectionClosed);
            }
            return Ok(0);
        }
        let mut n = buf.len().min(s.inbound.len());
        if s.max_chunk > 0 {
            n = n.min(s.max_chunk);
        }
        for slot in buf.iter_mut().take(n) {
            // n never exceeds the queue length
            *slot = s.inbound.pop_front().unwrap_or_default();
        }
        Ok(n)
    }
}
