// rfidlink/src/lib.rs

//! rfidlink
//!
//! Connection and protocol management for a game-prop controller that
//! reports RFID tag reads to a central game server and takes LED display
//! commands back, over one persistent TCP socket carrying fixed 8-byte
//! frames.
//!
//! The firmware loop calls one [`ServerLink`] operation per tick:
//!
//! ```no_run
//! use rfidlink::prelude::*;
//!
//! let server = "192.168.1.10".parse().unwrap();
//! let mut link = ServerLink::new(LinkConfig::default());
//! let mut state = DeviceState::new();
//! loop {
//!     link.heartbeat_cycle(server, &mut state);
//!     // render state.led_display ...
//! }
//! ```
#![warn(missing_docs)]

/// Millisecond time source.
pub mod clock;
pub mod config;
/// Connection management.
pub mod connection;
pub mod constants;
/// Error type.
pub mod error;
/// Firmware-facing link operations.
pub mod link;
/// Common imports.
pub mod prelude;
/// 8-byte frame protocol.
pub mod protocol;
/// Server-controlled device state.
pub mod state;
pub mod test_support;
/// Byte-stream transports.
pub mod transport;
/// Protocol value types.
pub mod types;
/// Hex and timeout helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
