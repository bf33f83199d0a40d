// rfidlink/src/protocol/mod.rs

/// Partial-read reassembly.
pub mod buffer;
/// Encode/decode entry points.
pub mod codec;
/// The 8-byte frame.
pub mod frame;
/// Per-kind encoders and decoders.
pub mod messages;

pub use buffer::FrameBuffer;
pub use codec::{decode, decode_bytes, encode_heartbeat, encode_tag_info, encode_write_status};
pub use frame::Frame;
pub use messages::Message;
