// rfidlink/src/protocol/messages/write_status.rs

use crate::constants::MSG_WRITE_STATUS;
use crate::protocol::Frame;

/// `[WRITE_STATUS, status, 0, 0, 0, 0, 0, 0]`
pub fn encode_write_status(status: u8) -> Frame {
    Frame::with_payload(MSG_WRITE_STATUS, &[status])
}

/// Status byte from a WRITE_STATUS frame.
pub fn decode_write_status(frame: &Frame) -> u8 {
    frame.as_bytes()[1]
}
