// rfidlink/src/state.rs

use crate::protocol::Message;
use crate::types::{LedDisplay, MessageKind};

/// Firmware-owned values the server controls. Every link operation takes
/// this as an explicit `&mut` output parameter; only the most recent
/// update is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceState {
    /// Mission code assigned with the last TAG_RESPONSE.
    pub mission: u8,
    /// Command byte from the last TAG_RESPONSE.
    pub mission_command: u8,
    /// Display state from the last SHOW_LEDS, read by the renderer.
    pub led_display: LedDisplay,
}

impl DeviceState {
    /// Power-on state: no mission, display all zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a received message into the state and return its kind.
    /// Kinds that carry no device state leave everything untouched.
    pub fn apply(&mut self, message: &Message) -> MessageKind {
        match *message {
            Message::TagResponse { command, mission } => {
                self.mission_command = command;
                self.mission = mission;
            }
            Message::ShowLeds { display } => {
                self.led_display = display;
            }
            Message::Heartbeat { .. } | Message::TagInfo { .. } | Message::WriteStatus { .. } => {}
        }
        message.kind()
    }
}
