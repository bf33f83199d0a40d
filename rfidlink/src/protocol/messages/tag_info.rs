// rfidlink/src/protocol/messages/tag_info.rs

use crate::constants::MSG_TAG_INFO;
use crate::protocol::Frame;
use crate::types::TagId;

/// `[TAG_INFO, tag0, tag1, tag2, tag3, mission, power, power_mask]`
pub fn encode_tag_info(tag: TagId, mission: u8, power: u8, power_mask: u8) -> Frame {
    let t = tag.as_bytes();
    Frame::from_bytes([
        MSG_TAG_INFO,
        t[0],
        t[1],
        t[2],
        t[3],
        mission,
        power,
        power_mask,
    ])
}

/// Returns `(tag, mission, power, power_mask)`.
pub fn decode_tag_info(frame: &Frame) -> (TagId, u8, u8, u8) {
    let b = frame.as_bytes();
    (
        TagId::from_bytes([b[1], b[2], b[3], b[4]]),
        b[5],
        b[6],
        b[7],
    )
}
