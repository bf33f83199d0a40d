#[path = "../common/mod.rs"]
mod common;

use rfidlink::protocol::{codec, Message};
use rfidlink::types::LedDisplay;

#[test]
fn device_side_encoders() {
    assert_eq!(
        codec::encode_tag_info(&common::fixtures::sample_report()),
        common::fixtures::sample_tag_info_frame()
    );
    assert_eq!(
        codec::encode_write_status(0x01),
        common::fixtures::frame_from_hex("04 01 00 00 00 00 00 00")
    );
    assert_eq!(
        codec::encode_heartbeat(0x03),
        common::fixtures::frame_from_hex("01 03 00 00 00 00 00 00")
    );
}

#[test]
fn server_side_encoders_match_fixtures() {
    let resp = Message::TagResponse {
        command: 0x02,
        mission: 0x05,
    };
    assert_eq!(resp.encode(), common::fixtures::tag_response_frame());

    let leds = Message::ShowLeds {
        display: LedDisplay::new(0x19),
    };
    assert_eq!(leds.encode(), common::fixtures::show_leds_frame());
}
