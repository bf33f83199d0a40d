#[path = "../common/mod.rs"]
mod common;

use common::fixtures::SERVER;
use rfidlink::prelude::*;

#[test]
fn poll_consumes_one_frame_per_tick() {
    common::init_logging();
    let mut m = common::mock_link_with_frames(
        LinkConfig::default(),
        vec![
            common::fixtures::show_leds_frame(),
            common::fixtures::server_heartbeat_frame(),
        ],
    );
    let mut state = DeviceState::new();

    assert_eq!(m.link.poll(SERVER, &mut state), MessageKind::ShowLeds);
    assert_eq!(state.led_display.as_u8(), 0x19);
    assert_eq!(m.link.poll(SERVER, &mut state), MessageKind::Heartbeat);
    assert_eq!(m.link.poll(SERVER, &mut state), MessageKind::NoMsg);
    assert_eq!(m.transport.connect_attempts().len(), 1);
}

#[test]
fn poll_with_server_down_is_harmless() {
    common::init_logging();
    let mut m = common::mock_link(LinkConfig::default());
    m.transport.refuse_connections(true);
    let mut state = DeviceState::new();

    for _ in 0..3 {
        assert_eq!(m.link.poll(SERVER, &mut state), MessageKind::NoMsg);
    }
    assert_eq!(state, DeviceState::default());
    // one attempt per tick, no retry loop inside a tick
    assert_eq!(m.transport.connect_attempts().len(), 3);
}

#[test]
fn frame_split_across_ticks_is_delivered_once() {
    common::init_logging();
    let mut m = common::mock_link(LinkConfig::default());
    let mut state = DeviceState::new();
    let frame = common::fixtures::tag_response_frame();

    m.transport.push_inbound(&frame.as_bytes()[..5]);
    assert_eq!(m.link.poll(SERVER, &mut state), MessageKind::NoMsg);
    assert_eq!(state.mission, 0);

    m.transport.push_inbound(&frame.as_bytes()[5..]);
    assert_eq!(m.link.poll(SERVER, &mut state), MessageKind::TagResponse);
    assert_eq!(state.mission_command, 0x02);
    assert_eq!(state.mission, 0x05);
}
