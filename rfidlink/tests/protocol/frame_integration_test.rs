#[path = "../common/mod.rs"]
mod common;

use rfidlink::protocol::{Frame, FrameBuffer};
use rfidlink::types::MessageKind;

#[test]
fn fixture_frames_have_expected_kinds() {
    assert_eq!(common::fixtures::tag_response_frame().kind(), MessageKind::TagResponse);
    assert_eq!(common::fixtures::show_leds_frame().kind(), MessageKind::ShowLeds);
    assert_eq!(common::fixtures::server_heartbeat_frame().kind(), MessageKind::Heartbeat);
}

#[test]
fn frame_buffer_reassembles_split_fixture() {
    let frame = common::fixtures::tag_response_frame();
    let mut fb = FrameBuffer::new();
    for (i, byte) in frame.as_bytes().iter().enumerate() {
        let (_, done) = fb.push_slice(&[*byte]);
        if i < 7 {
            assert!(done.is_none());
        } else {
            assert_eq!(done, Some(frame));
        }
    }
}

#[test]
fn short_slice_is_not_a_frame() {
    assert!(Frame::try_from(&[0x03u8, 0x02, 0x05][..]).is_err());
}
