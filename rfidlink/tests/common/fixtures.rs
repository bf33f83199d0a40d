// fixtures.rs — commonly used frames and values, written as they appear in
// the firmware's serial dumps.

use std::net::{IpAddr, Ipv4Addr};

use rfidlink::protocol::Frame;
use rfidlink::types::{TagId, TagReport};

pub const SERVER: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10));

pub fn frame_from_hex(s: &str) -> Frame {
    let bytes = hex::decode(s.replace(' ', "")).expect("fixture hex");
    Frame::try_from(bytes.as_slice()).expect("fixture frame length")
}

/// TAG_RESPONSE: command 0x02, mission 0x05
pub fn tag_response_frame() -> Frame {
    frame_from_hex("03 02 05 00 00 00 00 00")
}

/// SHOW_LEDS: colour 1, pattern Full, motion Snake
pub fn show_leds_frame() -> Frame {
    frame_from_hex("05 19 00 00 00 00 00 00")
}

pub fn server_heartbeat_frame() -> Frame {
    frame_from_hex("01 00 00 00 00 00 00 00")
}

pub fn sample_tag() -> TagId {
    TagId::from_bytes([0x11, 0x22, 0x33, 0x44])
}

pub fn sample_report() -> TagReport {
    TagReport::new(sample_tag(), 0x01, 0x64, 0x0F)
}

/// What the device must send for `sample_report()`.
pub fn sample_tag_info_frame() -> Frame {
    frame_from_hex("02 11 22 33 44 01 64 0f")
}
