// rfidlink/src/link/handle.rs

use std::net::IpAddr;

use log::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::LinkConfig;
use crate::connection::ConnectionManager;
use crate::protocol::{Frame, Message, codec};
use crate::state::DeviceState;
use crate::transport::{TcpTransport, Transport};
use crate::types::{MessageKind, TagReport};
use crate::utils::Deadline;
use crate::{Error, Result};

/// How a tag report ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagReportOutcome {
    /// The server answered with a TAG_RESPONSE, already applied to the
    /// device state.
    Acknowledged {
        /// Command byte from the server.
        command: u8,
        /// Mission now assigned to the prop.
        mission: u8,
    },
    /// No connection could be made, or the TAG_INFO could not be sent.
    NotConnected,
    /// The connection died while waiting for the answer.
    Disconnected,
    /// No answer within the configured deadline; the connection has been
    /// torn down so the next tick reconnects.
    TimedOut,
}

impl TagReportOutcome {
    /// Whether the server answered.
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged { .. })
    }
}

/// Per-tick entry points the firmware loop drives.
///
/// Every operation first makes sure the connection is up (one connect
/// attempt at most) and folds any failure into its return value, so the
/// caller never sees an error or a panic.
pub struct ServerLink {
    connection: ConnectionManager,
    config: LinkConfig,
}

impl ServerLink {
    /// Link over a real TCP socket and the system clock.
    pub fn new(config: LinkConfig) -> Self {
        Self::new_with_transport(
            Box::new(TcpTransport::with_write_timeout_ms(config.write_timeout_ms)),
            Box::new(SystemClock::new()),
            config,
        )
    }

    /// Create a link from an existing transport and clock. This is
    /// primarily intended for tests where mocks are provided.
    pub fn new_with_transport(
        transport: Box<dyn Transport>,
        clock: Box<dyn Clock>,
        config: LinkConfig,
    ) -> Self {
        Self {
            connection: ConnectionManager::new(transport, clock, &config),
            config,
        }
    }

    /// Read at most one pending frame and apply it to `state`. Returns the
    /// frame's kind, or `NoMsg` when nothing complete is pending, the kind
    /// is unknown, or the server is unreachable. Never blocks.
    pub fn poll(&mut self, server: IpAddr, state: &mut DeviceState) -> MessageKind {
        if !self.connection.ensure_connected(server) {
            return MessageKind::NoMsg;
        }
        self.receive_one(state).unwrap_or_default()
    }

    /// Keepalive tick: consume one pending frame, send a heartbeat, then
    /// drop the connection if the server has been silent for too long.
    /// Returns the kind of the frame consumed.
    pub fn heartbeat_cycle(&mut self, server: IpAddr, state: &mut DeviceState) -> MessageKind {
        if !self.connection.ensure_connected(server) {
            return MessageKind::NoMsg;
        }
        let kind = match self.receive_one(state) {
            Ok(kind) => kind,
            // Connection already torn down; the next tick reconnects.
            Err(_) => return MessageKind::NoMsg,
        };
        let heartbeat = codec::encode_heartbeat(self.config.firmware_version);
        if self.connection.send_frame(&heartbeat).is_err() {
            return kind;
        }
        self.connection.check_heartbeat();
        kind
    }

    /// Report a tag that was just read and wait for the server's
    /// TAG_RESPONSE.
    ///
    /// Other frames arriving meanwhile do not end the wait, but their state
    /// updates (e.g. SHOW_LEDS) are still applied. The wait is bounded by
    /// `tag_response_timeout_ms`.
    pub fn tag_report_cycle(
        &mut self,
        server: IpAddr,
        report: &TagReport,
        state: &mut DeviceState,
    ) -> TagReportOutcome {
        if !self.connection.ensure_connected(server) {
            return TagReportOutcome::NotConnected;
        }

        info!("sending tag info to server: tag {}", report.tag.to_hex());
        if self.connection.send_frame(&codec::encode_tag_info(report)).is_err() {
            return TagReportOutcome::NotConnected;
        }

        let deadline = Deadline::after(
            self.connection.now_ms(),
            self.config.tag_response_timeout_ms,
        );
        loop {
            let got_frame = match self.connection.read_frame() {
                Ok(Some(frame)) => match self.apply_frame(&frame, state) {
                    Some(Message::TagResponse { command, mission }) => {
                        return TagReportOutcome::Acknowledged { command, mission };
                    }
                    other => {
                        debug!(
                            "waiting for TAG_RESPONSE, skipped {}",
                            other.map(|m| m.kind()).unwrap_or_default()
                        );
                        true
                    }
                },
                Ok(None) => false,
                Err(_) => return TagReportOutcome::Disconnected,
            };

            // Checked on every pass so a peer streaming other kinds cannot
            // hold the wait open.
            let now = self.connection.now_ms();
            if deadline.has_expired(now) {
                warn!(
                    "no TAG_RESPONSE within {} ms: {}",
                    self.config.tag_response_timeout_ms,
                    Error::Timeout
                );
                self.connection.disconnect();
                return TagReportOutcome::TimedOut;
            }
            if got_frame {
                // More may already be queued; drain before sleeping.
                continue;
            }
            self.connection.sleep_ms(
                self.config
                    .tag_poll_interval_ms
                    .min(deadline.remaining_ms(now))
                    .max(1),
            );
        }
    }

    /// Fire-and-forget WRITE_STATUS report. Returns whether the frame was
    /// handed to the transport.
    pub fn report_write_status(&mut self, server: IpAddr, status: u8) -> bool {
        if !self.connection.ensure_connected(server) {
            return false;
        }
        info!("sending write status {:#04x} to server", status);
        self.connection
            .send_frame(&codec::encode_write_status(status))
            .is_ok()
    }

    /// The underlying connection manager.
    pub fn connection(&self) -> &ConnectionManager {
        &self.connection
    }

    /// Configuration the link was built with.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Drop the connection; the next operation reconnects.
    pub fn disconnect(&mut self) {
        self.connection.disconnect();
    }

    fn receive_one(&mut self, state: &mut DeviceState) -> Result<MessageKind> {
        let kind = match self.connection.read_frame()? {
            Some(frame) => self
                .apply_frame(&frame, state)
                .map(|m| m.kind())
                .unwrap_or_default(),
            None => MessageKind::NoMsg,
        };
        Ok(kind)
    }

    fn apply_frame(&self, frame: &Frame, state: &mut DeviceState) -> Option<Message> {
        let message = codec::decode(frame);
        match &message {
            Some(m) => {
                state.apply(m);
            }
            None => debug!("ignoring frame of unknown kind {:#04x}", frame.kind_byte()),
        }
        message
    }
}
