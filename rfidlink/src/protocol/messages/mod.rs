// rfidlink/src/protocol/messages/mod.rs

/// HEARTBEAT.
pub mod heartbeat;
/// SHOW_LEDS.
pub mod show_leds;
/// TAG_INFO.
pub mod tag_info;
/// TAG_RESPONSE.
pub mod tag_response;
/// WRITE_STATUS.
pub mod write_status;

pub use heartbeat::{decode_heartbeat, encode_heartbeat};
pub use show_leds::{decode_show_leds, encode_show_leds};
pub use tag_info::{decode_tag_info, encode_tag_info};
pub use tag_response::{decode_tag_response, encode_tag_response};
pub use write_status::{decode_write_status, encode_write_status};

use crate::constants::{
    MSG_HEARTBEAT, MSG_SHOW_LEDS, MSG_TAG_INFO, MSG_TAG_RESPONSE, MSG_WRITE_STATUS,
};
use crate::protocol::Frame;
use crate::types::{LedDisplay, MessageKind, TagId};

/// Typed view of a frame. New kinds get a variant here and their
/// encoder/decoder pair in `protocol::messages::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Liveness in either direction; the device puts its firmware revision
    /// in `version`.
    Heartbeat {
        /// Sender's revision byte.
        version: u8,
    },
    /// Device -> server: a tag was just read.
    TagInfo {
        /// Tag that was read.
        tag: TagId,
        /// Mission code on the tag.
        mission: u8,
        /// Power level on the tag.
        power: u8,
        /// Power mask on the tag.
        power_mask: u8,
    },
    /// Server -> device: answer to `TagInfo`.
    TagResponse {
        /// Command byte.
        command: u8,
        /// Assigned mission.
        mission: u8,
    },
    /// Device -> server: outcome of a tag write.
    WriteStatus {
        /// Write outcome.
        status: u8,
    },
    /// Server -> device: new display state.
    ShowLeds {
        /// New display byte.
        display: LedDisplay,
    },
}

impl Message {
    /// Kind tag for this message.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Heartbeat { .. } => MessageKind::Heartbeat,
            Self::TagInfo { .. } => MessageKind::TagInfo,
            Self::TagResponse { .. } => MessageKind::TagResponse,
            Self::WriteStatus { .. } => MessageKind::WriteStatus,
            Self::ShowLeds { .. } => MessageKind::ShowLeds,
        }
    }

    /// Serialize to a frame.
    pub fn encode(&self) -> Frame {
        match *self {
            Self::Heartbeat { version } => encode_heartbeat(version),
            Self::TagInfo {
                tag,
                mission,
                power,
                power_mask,
            } => encode_tag_info(tag, mission, power, power_mask),
            Self::TagResponse { command, mission } => encode_tag_response(command, mission),
            Self::WriteStatus { status } => encode_write_status(status),
            Self::ShowLeds { display } => encode_show_leds(display),
        }
    }

    /// Interpret a frame. Unknown kind bytes (and the `NO_MSG` sentinel)
    /// yield `None`; decoding never fails otherwise.
    pub fn decode(frame: &Frame) -> Option<Self> {
        match frame.kind_byte() {
            MSG_HEARTBEAT => Some(Self::Heartbeat {
                version: decode_heartbeat(frame),
            }),
            MSG_TAG_INFO => {
                let (tag, mission, power, power_mask) = decode_tag_info(frame);
                Some(Self::TagInfo {
                    tag,
                    mission,
                    power,
                    power_mask,
                })
            }
            MSG_TAG_RESPONSE => {
                let (command, mission) = decode_tag_response(frame);
                Some(Self::TagResponse { command, mission })
            }
            MSG_WRITE_STATUS => Some(Self::WriteStatus {
                status: decode_write_status(frame),
            }),
            MSG_SHOW_LEDS => Some(Self::ShowLeds {
                display: decode_show_leds(frame),
            }),
            _ => None,
        }
    }
}
