// rfidlink/src/constants.rs
//! Protocol constants shared by the codec, the connection manager and the
//! default configuration.

/// Every message on the wire is exactly this many bytes.
pub const FRAME_LEN: usize = 8;

/// Message kind tags (byte 0 of a frame). `MSG_NONE` is a local sentinel
/// and is never transmitted.
pub const MSG_NONE: u8 = 0x00;
/// Liveness, both directions.
pub const MSG_HEARTBEAT: u8 = 0x01;
/// Device reports a tag read.
pub const MSG_TAG_INFO: u8 = 0x02;
/// Server answers a tag report.
pub const MSG_TAG_RESPONSE: u8 = 0x03;
/// Device reports a tag write outcome.
pub const MSG_WRITE_STATUS: u8 = 0x04;
/// Server sets the display state.
pub const MSG_SHOW_LEDS: u8 = 0x05;

/// Length of a tag identifier embedded in TAG_INFO frames.
pub const TAG_ID_LEN: usize = 4;

/// TCP port the game server listens on.
pub const DEFAULT_SERVER_PORT: u16 = 5007;

/// Silence longer than this on an open connection means the peer is gone.
pub const DEFAULT_HEARTBEAT_TIMEOUT_MS: u64 = 3000;

/// Upper bound on the wait for a TAG_RESPONSE after reporting a tag.
pub const DEFAULT_TAG_RESPONSE_TIMEOUT_MS: u64 = 5000;

/// Pause between empty polls while waiting for a TAG_RESPONSE.
pub const DEFAULT_TAG_POLL_INTERVAL_MS: u64 = 10;

/// Upper bound on a single TCP connect attempt.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 1000;

/// Upper bound on writing one frame to a peer that has stopped reading.
pub const DEFAULT_WRITE_TIMEOUT_MS: u64 = 500;

/// Revision byte carried by outgoing heartbeats.
pub const DEFAULT_FIRMWARE_VERSION: u8 = 1;

/// Display-state byte layout.
pub const LED_COLOR_MASK: u8 = 0x03;
/// Fill pattern bits.
pub const LED_PATTERN_MASK: u8 = 0x0C;
/// Shift for the pattern bits.
pub const LED_PATTERN_SHIFT: u8 = 2;
/// Animation bits.
pub const LED_MOTION_MASK: u8 = 0x30;
/// Shift for the animation bits.
pub const LED_MOTION_SHIFT: u8 = 4;
/// Win flag; overrides everything else.
pub const LED_WIN_FLAG: u8 = 0x80;
