// rfidlink/src/protocol/frame.rs

use std::fmt;

use crate::constants::FRAME_LEN;
use crate::types::MessageKind;
use crate::{Error, Result};

/// One protocol message unit: exactly eight bytes, no delimiter, no length
/// prefix, no checksum.
///
/// ```text
/// [kind] [payload 1..=7, zero-padded]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Wrap eight raw bytes.
    pub fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a frame from a kind byte and up to seven payload bytes; the
    /// remainder is zero-filled. Extra payload bytes are ignored.
    pub fn with_payload(kind: u8, payload: &[u8]) -> Self {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[0] = kind;
        let n = payload.len().min(FRAME_LEN - 1);
        bytes[1..1 + n].copy_from_slice(&payload[..n]);
        Self(bytes)
    }

    /// Raw bytes as sent on the wire.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Raw kind byte (byte 0).
    pub fn kind_byte(&self) -> u8 {
        self.0[0]
    }

    /// Kind of this frame; unknown kind bytes map to `NoMsg`.
    pub fn kind(&self) -> MessageKind {
        MessageKind::from_byte(self.kind_byte()).unwrap_or(MessageKind::NoMsg)
    }

    /// Byte at `idx`, or `None` past the end of the frame.
    pub fn byte(&self, idx: usize) -> Option<u8> {
        self.0.get(idx).copied()
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: FRAME_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; FRAME_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(&self.0))
    }
}
