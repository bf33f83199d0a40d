#[path = "../common/mod.rs"]
mod common;

use rfidlink::transport::Transport;
use rfidlink::transport::mock::MockTransport;

#[test]
fn mock_transport_send_and_receive() {
    let handle = MockTransport::new();
    let mut m = handle.clone();
    m.connect("127.0.0.1:5007".parse().unwrap(), 100).unwrap();
    handle.push_frame(common::fixtures::server_heartbeat_frame());
    m.send(common::fixtures::sample_tag_info_frame().as_bytes())
        .unwrap();

    let mut buf = [0u8; 8];
    assert_eq!(m.receive(&mut buf).unwrap(), 8);
    assert_eq!(&buf, common::fixtures::server_heartbeat_frame().as_bytes());
    assert_eq!(common::sent_frames(&handle), vec![common::fixtures::sample_tag_info_frame()]);
}

#[test]
fn closed_mock_rejects_io() {
    let mut m = MockTransport::new();
    assert!(m.send(&[1]).is_err());
    let mut buf = [0u8; 8];
    assert!(m.receive(&mut buf).is_err());
}
