// rfidlink/src/protocol/codec.rs
//! Frame-level entry points used by the link: the three device-side
//! encoders and the decoder. Pure functions, no I/O.

use crate::Result;
use crate::types::TagReport;

use super::Frame;
use super::messages::{self, Message};

/// Heartbeat carrying the firmware revision.
pub fn encode_heartbeat(version: u8) -> Frame {
    messages::encode_heartbeat(version)
}

/// TAG_INFO frame describing a tag that was just read.
pub fn encode_tag_info(report: &TagReport) -> Frame {
    messages::encode_tag_info(report.tag, report.mission, report.power, report.power_mask)
}

/// WRITE_STATUS frame carrying `status`.
pub fn encode_write_status(status: u8) -> Frame {
    messages::encode_write_status(status)
}

/// Decode a complete frame; `None` for kinds this protocol does not define.
pub fn decode(frame: &Frame) -> Option<Message> {
    Message::decode(frame)
}

/// Decode a raw slice, rejecting anything that is not exactly one frame.
pub fn decode_bytes(bytes: &[u8]) -> Result<Option<Message>> {
    let frame = Frame::try_from(bytes)?;
    Ok(decode(&frame))
}
