// rfidlink/src/prelude.rs

pub use crate::clock::{Clock, SystemClock};
pub use crate::config::LinkConfig;
pub use crate::connection::{ConnectionManager, ConnectionState};
pub use crate::link::{ServerLink, ServerLinkBuilder, TagReportOutcome};
pub use crate::protocol::{Frame, Message};
pub use crate::state::DeviceState;
pub use crate::transport::{TcpTransport, Transport};
pub use crate::{
    Error, LedDisplay, LedMotion, LedPattern, MessageKind, Result, TagId, TagReport,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
