//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the MockTransport/MockClock setup so tests
//! across the crate and the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::clock::MockClock;
use crate::config::LinkConfig;
use crate::link::ServerLink;
use crate::protocol::Frame;
use crate::transport::MockTransport;

/// A `ServerLink` over mocks, plus the handles needed to drive it.
#[doc(hidden)]
pub struct MockLink {
    /// Link under test.
    pub link: ServerLink,
    /// Handle onto the link's transport.
    pub transport: MockTransport,
    /// Handle onto the link's clock.
    pub clock: MockClock,
}

/// Build a `ServerLink` backed by a fresh MockTransport and a MockClock
/// starting at zero.
#[doc(hidden)]
pub fn mock_link(config: LinkConfig) -> MockLink {
    mock_link_with_frames(config, Vec::new())
}

/// Same as `mock_link`, with `frames` already queued as inbound data. The
/// frames are delivered once the link connects.
#[doc(hidden)]
pub fn mock_link_with_frames(config: LinkConfig, frames: Vec<Frame>) -> MockLink {
    let transport = MockTransport::new();
    for frame in frames {
        transport.push_frame(frame);
    }
    let clock = MockClock::new(0);
    let link = ServerLink::new_with_transport(
        Box::new(transport.clone()),
        Box::new(clock.clone()),
        config,
    );
    MockLink {
        link,
        transport,
        clock,
    }
}

/// Sent payloads recorded by the mock, as frames. Payloads that are not
/// exactly one frame are skipped.
#[doc(hidden)]
pub fn sent_frames(transport: &MockTransport) -> Vec<Frame> {
    transport
        .sent()
        .iter()
        .filter_map(|bytes| Frame::try_from(bytes.as_slice()).ok())
        .collect()
}
