#[path = "../common/mod.rs"]
mod common;

use rfidlink::protocol::{codec, Message};
use rfidlink::types::{LedMotion, LedPattern};

#[test]
fn tag_response_decodes_mission_fields() {
    match codec::decode(&common::fixtures::tag_response_frame()) {
        Some(Message::TagResponse { command, mission }) => {
            assert_eq!(command, 0x02);
            assert_eq!(mission, 0x05);
        }
        other => panic!("expected tag response, got {:?}", other),
    }
}

#[test]
fn show_leds_decodes_display_fields() {
    match codec::decode(&common::fixtures::show_leds_frame()) {
        Some(Message::ShowLeds { display }) => {
            assert_eq!(display.color_index(), 1);
            assert_eq!(display.pattern(), LedPattern::Full);
            assert_eq!(display.motion(), LedMotion::Snake);
            assert!(!display.is_win());
        }
        other => panic!("expected show leds, got {:?}", other),
    }
}

#[test]
fn device_frames_decode_for_a_server_peer() {
    match codec::decode(&common::fixtures::sample_tag_info_frame()) {
        Some(Message::TagInfo {
            tag,
            mission,
            power,
            power_mask,
        }) => {
            assert_eq!(tag, common::fixtures::sample_tag());
            assert_eq!((mission, power, power_mask), (0x01, 0x64, 0x0F));
        }
        other => panic!("expected tag info, got {:?}", other),
    }
}

#[test]
fn unknown_kind_decodes_to_nothing() {
    let frame = common::fixtures::frame_from_hex("ff 01 02 03 04 05 06 07");
    assert_eq!(codec::decode(&frame), None);
    assert_eq!(codec::decode_bytes(frame.as_bytes()).unwrap(), None);
}
