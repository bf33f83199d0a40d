// rfidlink/src/config.rs
//! Link tunables. Defaults live in `crate::constants`.

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_FIRMWARE_VERSION, DEFAULT_HEARTBEAT_TIMEOUT_MS,
    DEFAULT_SERVER_PORT, DEFAULT_TAG_POLL_INTERVAL_MS, DEFAULT_TAG_RESPONSE_TIMEOUT_MS,
    DEFAULT_WRITE_TIMEOUT_MS,
};

/// Timeouts, port and firmware revision used by a `ServerLink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkConfig {
    /// Port the game server listens on.
    pub server_port: u16,
    /// Silence threshold after which an open connection is torn down.
    pub heartbeat_timeout_ms: u64,
    /// How long a tag report waits for the server's TAG_RESPONSE.
    pub tag_response_timeout_ms: u64,
    /// Pause between empty polls during that wait.
    pub tag_poll_interval_ms: u64,
    /// Upper bound on one connect attempt.
    pub connect_timeout_ms: u64,
    /// Upper bound on writing one frame; a peer that stops reading fails
    /// the send instead of stalling the tick.
    pub write_timeout_ms: u64,
    /// Revision byte carried by outgoing heartbeats.
    pub firmware_version: u8,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
            heartbeat_timeout_ms: DEFAULT_HEARTBEAT_TIMEOUT_MS,
            tag_response_timeout_ms: DEFAULT_TAG_RESPONSE_TIMEOUT_MS,
            tag_poll_interval_ms: DEFAULT_TAG_POLL_INTERVAL_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            write_timeout_ms: DEFAULT_WRITE_TIMEOUT_MS,
            firmware_version: DEFAULT_FIRMWARE_VERSION,
        }
    }
}

impl LinkConfig {
    /// Port to connect to.
    pub fn with_server_port(mut self, port: u16) -> Self {
        self.server_port = port;
        self
    }

    /// Silence threshold for the heartbeat check.
    pub fn with_heartbeat_timeout_ms(mut self, ms: u64) -> Self {
        self.heartbeat_timeout_ms = ms;
        self
    }

    /// Bound on the TAG_RESPONSE wait.
    pub fn with_tag_response_timeout_ms(mut self, ms: u64) -> Self {
        self.tag_response_timeout_ms = ms;
        self
    }

    /// Pause between empty polls during the tag wait.
    pub fn with_tag_poll_interval_ms(mut self, ms: u64) -> Self {
        self.tag_poll_interval_ms = ms;
        self
    }

    /// Bound on one connect attempt.
    pub fn with_connect_timeout_ms(mut self, ms: u64) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Bound on writing one frame.
    pub fn with_write_timeout_ms(mut self, ms: u64) -> Self {
        self.write_timeout_ms = ms;
        self
    }

    /// Revision byte for outgoing heartbeats.
    pub fn with_firmware_version(mut self, version: u8) -> Self {
        self.firmware_version = version;
        self
    }
}
