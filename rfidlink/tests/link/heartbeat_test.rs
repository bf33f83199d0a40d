#[path = "../common/mod.rs"]
mod common;

use common::fixtures::SERVER;
use rfidlink::prelude::*;

#[test]
fn server_heartbeats_keep_connection_alive() {
    common::init_logging();
    let mut m = common::mock_link(LinkConfig::default());
    let mut state = DeviceState::new();

    for _ in 0..10 {
        m.transport.push_frame(common::fixtures::server_heartbeat_frame());
        m.link.heartbeat_cycle(SERVER, &mut state);
        m.clock.advance(1_000);
    }
    assert!(m.link.connection().is_connected());
    assert_eq!(m.transport.connect_attempts().len(), 1);

    let sent = common::sent_frames(&m.transport);
    assert_eq!(sent.len(), 10);
    assert!(sent.iter().all(|f| f.kind() == MessageKind::Heartbeat));
}

#[test]
fn silence_past_timeout_disconnects_then_reconnects() {
    common::init_logging();
    let mut m = common::mock_link(LinkConfig::default().with_heartbeat_timeout_ms(3_000));
    let mut state = DeviceState::new();

    m.link.heartbeat_cycle(SERVER, &mut state);
    m.clock.advance(3_000);
    m.link.heartbeat_cycle(SERVER, &mut state);
    assert_eq!(m.link.connection().state(), ConnectionState::Connected);

    m.clock.advance(1);
    m.link.heartbeat_cycle(SERVER, &mut state);
    assert_eq!(m.link.connection().state(), ConnectionState::Disconnected);

    m.link.heartbeat_cycle(SERVER, &mut state);
    assert_eq!(m.link.connection().state(), ConnectionState::Connected);
    assert_eq!(m.transport.connect_attempts().len(), 2);
}

#[test]
fn heartbeat_cycle_applies_show_leds() {
    common::init_logging();
    let mut m = common::mock_link_with_frames(
        LinkConfig::default(),
        vec![common::fixtures::show_leds_frame()],
    );
    let mut state = DeviceState::new();
    assert_eq!(m.link.heartbeat_cycle(SERVER, &mut state), MessageKind::ShowLeds);
    assert_eq!(state.led_display.as_u8(), 0x19);
}
