// rfidlink/src/types.rs

use std::convert::TryFrom;

use derive_more::{Display, From};

use crate::Error;
use crate::constants::{
    LED_COLOR_MASK, LED_MOTION_MASK, LED_MOTION_SHIFT, LED_PATTERN_MASK, LED_PATTERN_SHIFT,
    LED_WIN_FLAG, MSG_HEARTBEAT, MSG_NONE, MSG_SHOW_LEDS, MSG_TAG_INFO, MSG_TAG_RESPONSE,
    MSG_WRITE_STATUS, TAG_ID_LEN,
};

/// Kind tag carried in byte 0 of every frame.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    /// Nothing usable was received. Never sent on the wire.
    #[default]
    #[display(fmt = "NO_MSG")]
    NoMsg = MSG_NONE,
    /// Liveness.
    #[display(fmt = "HEARTBEAT")]
    Heartbeat = MSG_HEARTBEAT,
    /// Tag read report.
    #[display(fmt = "TAG_INFO")]
    TagInfo = MSG_TAG_INFO,
    /// Answer to a tag report.
    #[display(fmt = "TAG_RESPONSE")]
    TagResponse = MSG_TAG_RESPONSE,
    /// Tag write outcome.
    #[display(fmt = "WRITE_STATUS")]
    WriteStatus = MSG_WRITE_STATUS,
    /// Display update.
    #[display(fmt = "SHOW_LEDS")]
    ShowLeds = MSG_SHOW_LEDS,
}

impl MessageKind {
    /// Map a wire byte to a kind. Unknown bytes and the sentinel itself
    /// return `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            MSG_HEARTBEAT => Some(Self::Heartbeat),
            MSG_TAG_INFO => Some(Self::TagInfo),
            MSG_TAG_RESPONSE => Some(Self::TagResponse),
            MSG_WRITE_STATUS => Some(Self::WriteStatus),
            MSG_SHOW_LEDS => Some(Self::ShowLeds),
            _ => None,
        }
    }

    /// Wire byte for this kind.
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Tag identifier (4 bytes) as read from the card, embedded verbatim in
/// TAG_INFO frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From)]
pub struct TagId([u8; TAG_ID_LEN]);

impl TagId {
    /// Wrap raw id bytes.
    pub fn from_bytes(bytes: [u8; TAG_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw id bytes.
    pub fn as_bytes(&self) -> &[u8; TAG_ID_LEN] {
        &self.0
    }

    /// Lowercase hex, e.g. `11223344`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for TagId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != TAG_ID_LEN {
            return Err(Error::InvalidLength {
                expected: TAG_ID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; TAG_ID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Everything firmware hands over when a tag has just been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagReport {
    /// Tag that was read.
    pub tag: TagId,
    /// Mission code stored on the tag.
    pub mission: u8,
    /// Power level stored on the tag.
    pub power: u8,
    /// Power mask stored on the tag.
    pub power_mask: u8,
}

impl TagReport {
    /// Bundle a tag read.
    pub fn new(tag: TagId, mission: u8, power: u8, power_mask: u8) -> Self {
        Self {
            tag,
            mission,
            power,
            power_mask,
        }
    }
}

/// Fill pattern selected by bits 2-3 of the display byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedPattern {
    /// Every other LED dark
    Dotted,
    /// First half dark
    FirstHalfOff,
    /// All lit
    Full,
    /// First and third quarter dark
    QuartersOff,
}

/// Animation selected by bits 4-5 of the display byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedMotion {
    /// On/off together
    Blink,
    /// Running light
    Snake,
    /// No animation
    Static,
    /// Random flicker
    Flicker,
}

/// Display-state byte sent by the server in SHOW_LEDS frames and consumed
/// by the LED renderer every tick.
///
/// Layout: bit 7 win flag, bits 4-5 motion, bits 2-3 pattern, bits 0-1
/// colour index. When the win flag is set the renderer ignores the other
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From)]
pub struct LedDisplay(u8);

impl LedDisplay {
    /// Wrap a raw display byte.
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Raw display byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Win animation requested.
    pub fn is_win(&self) -> bool {
        self.0 & LED_WIN_FLAG != 0
    }

    /// Colour index 0-3; the renderer spreads these evenly around the hue
    /// wheel.
    pub fn color_index(&self) -> u8 {
        self.0 & LED_COLOR_MASK
    }

    /// Fill pattern.
    pub fn pattern(&self) -> LedPattern {
        match (self.0 & LED_PATTERN_MASK) >> LED_PATTERN_SHIFT {
            0 => LedPattern::Dotted,
            1 => LedPattern::FirstHalfOff,
            2 => LedPattern::Full,
            _ => LedPattern::QuartersOff,
        }
    }

    /// Animation.
    pub fn motion(&self) -> LedMotion {
        match (self.0 & LED_MOTION_MASK) >> LED_MOTION_SHIFT {
            0 => LedMotion::Blink,
            1 => LedMotion::Snake,
            2 => LedMotion::Static,
            _ => LedMotion::Flicker,
        }
    }
}
