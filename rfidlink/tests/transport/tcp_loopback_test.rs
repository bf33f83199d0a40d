// Exercises the real TcpTransport against a loopback listener standing in
// for the game server. Serialised so the listeners do not compete for
// ephemeral ports on slow CI machines.

#[path = "../common/mod.rs"]
mod common;

use std::io::{Read, Write};
use std::net::{IpAddr, Ipv4Addr, TcpListener};
use std::thread;
use std::time::Duration;

use rfidlink::prelude::*;
use serial_test::serial;

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

fn listener() -> (TcpListener, u16) {
    let l = TcpListener::bind((LOCALHOST, 0)).expect("bind loopback");
    let port = l.local_addr().expect("local addr").port();
    (l, port)
}

fn config(port: u16) -> LinkConfig {
    LinkConfig::default()
        .with_server_port(port)
        .with_connect_timeout_ms(500)
        .with_tag_response_timeout_ms(2_000)
        .with_tag_poll_interval_ms(5)
}

#[test]
#[serial]
fn tag_report_against_loopback_server() {
    common::init_logging();
    let (listener, port) = listener();

    let server = thread::spawn(move || {
        let (mut sock, _) = listener.accept().expect("accept");
        let mut buf = [0u8; 8];
        sock.read_exact(&mut buf).expect("read tag info");
        // Answer in two pieces to exercise reassembly.
        let resp = common::fixtures::tag_response_frame();
        sock.write_all(&resp.as_bytes()[..3]).expect("write head");
        sock.flush().expect("flush");
        thread::sleep(Duration::from_millis(20));
        sock.write_all(&resp.as_bytes()[3..]).expect("write tail");
        buf
    });

    let mut link = ServerLink::new(config(port));
    let mut state = DeviceState::new();
    let outcome = link.tag_report_cycle(LOCALHOST, &common::fixtures::sample_report(), &mut state);

    let received = server.join().expect("server thread");
    assert_eq!(&received, common::fixtures::sample_tag_info_frame().as_bytes());
    assert_eq!(
        outcome,
        TagReportOutcome::Acknowledged {
            command: 0x02,
            mission: 0x05
        }
    );
    assert_eq!(state.mission, 0x05);
}

#[test]
#[serial]
fn peer_hangup_is_detected_on_next_poll() {
    common::init_logging();
    let (listener, port) = listener();

    let server = thread::spawn(move || {
        let (sock, _) = listener.accept().expect("accept");
        drop(sock);
    });

    let mut link = ServerLink::new(config(port));
    let mut state = DeviceState::new();
    assert_eq!(link.poll(LOCALHOST, &mut state), MessageKind::NoMsg);
    server.join().expect("server thread");

    // Give the FIN time to arrive, then poll until the close is observed.
    let mut seen_close = false;
    for _ in 0..50 {
        thread::sleep(Duration::from_millis(10));
        link.poll(LOCALHOST, &mut state);
        if !link.connection().is_connected() {
            seen_close = true;
            break;
        }
    }
    assert!(seen_close, "closed peer was never noticed");
}

#[test]
#[serial]
fn unreachable_server_reports_not_connected() {
    common::init_logging();
    // Bind then drop to get a port nothing listens on.
    let port = {
        let (_l, port) = listener();
        port
    };
    let mut link = ServerLink::new(config(port));
    let mut state = DeviceState::new();

    assert_eq!(link.poll(LOCALHOST, &mut state), MessageKind::NoMsg);
    assert!(!link.report_write_status(LOCALHOST, 1));
    assert_eq!(
        link.tag_report_cycle(LOCALHOST, &common::fixtures::sample_report(), &mut state),
        TagReportOutcome::NotConnected
    );
}

#[test]
#[serial]
fn heartbeat_reaches_server() {
    common::init_logging();
    let (listener, port) = listener();

    let server = thread::spawn(move || {
        let (mut sock, _) = listener.accept().expect("accept");
        let mut buf = [0u8; 8];
        sock.read_exact(&mut buf).expect("read heartbeat");
        buf
    });

    let mut link = ServerLink::new(config(port).with_firmware_version(0x09));
    let mut state = DeviceState::new();
    link.heartbeat_cycle(LOCALHOST, &mut state);

    let received = server.join().expect("server thread");
    assert_eq!(received, [0x01, 0x09, 0, 0, 0, 0, 0, 0]);
}

#[test]
#[serial]
fn send_to_peer_that_stopped_reading_times_out() {
    common::init_logging();
    let (listener, port) = listener();
    let (release_tx, release_rx) = std::sync::mpsc::channel::<()>();

    // Accept and hold the socket open without ever reading from it.
    let server = thread::spawn(move || {
        let (sock, _) = listener.accept().expect("accept");
        let _ = release_rx.recv();
        drop(sock);
    });

    let mut transport = TcpTransport::with_write_timeout_ms(100);
    transport
        .connect((LOCALHOST, port).into(), 500)
        .expect("connect");

    let chunk = vec![0x01u8; 64 * 1024];
    let mut result = Ok(());
    for _ in 0..10_000 {
        result = transport.send(&chunk);
        if result.is_err() {
            break;
        }
    }

    assert!(matches!(result, Err(Error::Timeout)), "got: {:?}", result);
    assert!(!transport.is_connected());

    let _ = release_tx.send(());
    server.join().expect("server thread");
}
