#[path = "../common/mod.rs"]
mod common;

use common::fixtures::SERVER;
use rfidlink::prelude::*;

#[test]
fn write_status_frame_on_the_wire() {
    common::init_logging();
    let mut m = common::mock_link(LinkConfig::default());

    assert!(m.link.report_write_status(SERVER, 0x01));
    assert_eq!(
        common::sent_frames(&m.transport),
        vec![common::fixtures::frame_from_hex("04 01 00 00 00 00 00 00")]
    );
}

#[test]
fn write_status_does_not_wait_or_read() {
    common::init_logging();
    let mut m = common::mock_link_with_frames(
        LinkConfig::default(),
        vec![common::fixtures::show_leds_frame()],
    );
    assert!(m.link.report_write_status(SERVER, 0x00));
    assert_eq!(m.transport.pending_inbound(), 8);
    assert_eq!(m.clock.now_ms(), 0);
}
