// rfidlink/src/protocol/messages/show_leds.rs

use crate::constants::MSG_SHOW_LEDS;
use crate::protocol::Frame;
use crate::types::LedDisplay;

/// `[SHOW_LEDS, display, 0, 0, 0, 0, 0, 0]`, sent by the server.
pub fn encode_show_leds(display: LedDisplay) -> Frame {
    Frame::with_payload(MSG_SHOW_LEDS, &[display.as_u8()])
}

/// Display byte from a SHOW_LEDS frame.
pub fn decode_show_leds(frame: &Frame) -> LedDisplay {
    LedDisplay::new(frame.as_bytes()[1])
}
