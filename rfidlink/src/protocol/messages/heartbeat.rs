// rfidlink/src/protocol/messages/heartbeat.rs

use crate::constants::MSG_HEARTBEAT;
use crate::protocol::Frame;

/// `[HEARTBEAT, version, 0, 0, 0, 0, 0, 0]`
pub fn encode_heartbeat(version: u8) -> Frame {
    Frame::with_payload(MSG_HEARTBEAT, &[version])
}

/// Returns the version byte. Receipt is what matters; the version is
/// diagnostic only.
pub fn decode_heartbeat(frame: &Frame) -> u8 {
    frame.as_bytes()[1]
}
