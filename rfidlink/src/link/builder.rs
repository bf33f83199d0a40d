// rfidlink/src/link/builder.rs

use crate::clock::{Clock, SystemClock};
use crate::config::LinkConfig;
use crate::link::handle::ServerLink;
use crate::transport::{TcpTransport, Transport};

/// Helper to construct a `ServerLink` with optional parts. Anything not
/// provided falls back to a TCP transport, the system clock and the default
/// configuration.
#[derive(Default)]
pub struct ServerLinkBuilder {
    transport: Option<Box<dyn Transport>>,
    clock: Option<Box<dyn Clock>>,
    config: Option<LinkConfig>,
}

impl ServerLinkBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use `clock` instead of the system clock.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Use `config` instead of the defaults.
    pub fn with_config(mut self, config: LinkConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Assemble the link, filling in defaults for anything not provided.
    pub fn build(self) -> ServerLink {
        let config = self.config.unwrap_or_default();
        ServerLink::new_with_transport(
            self.transport.unwrap_or_else(|| {
                Box::new(TcpTransport::with_write_timeout_ms(config.write_timeout_ms))
            }),
            self.clock.unwrap_or_else(|| Box::new(SystemClock::new())),
            config,
        )
    }
}
