// rfidlink/src/protocol/messages/tag_response.rs

use crate::constants::MSG_TAG_RESPONSE;
use crate::protocol::Frame;

/// `[TAG_RESPONSE, command, mission, 0, 0, 0, 0, 0]`, sent by the server.
pub fn encode_tag_response(command: u8, mission: u8) -> Frame {
    Frame::with_payload(MSG_TAG_RESPONSE, &[command, mission])
}

/// Returns `(command, mission)`.
pub fn decode_tag_response(frame: &Frame) -> (u8, u8) {
    (frame.as_bytes()[1], frame.as_bytes()[2])
}
