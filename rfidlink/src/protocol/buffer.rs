// rfidlink/src/protocol/buffer.rs

use crate::constants::FRAME_LEN;
use crate::protocol::Frame;

/// Accumulates bytes from a stream until a whole frame is available.
///
/// TCP gives no guarantee that eight bytes written together arrive
/// together. Bytes are only ever interpreted once all eight are present; a
/// partial frame survives across reads until it is completed or the buffer
/// is cleared on teardown.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    buf: [u8; FRAME_LEN],
    len: usize,
}

impl FrameBuffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes buffered towards the current frame.
    pub fn len(&self) -> usize {
        self.len
    }

    /// No partial frame buffered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still needed to complete the current frame.
    pub fn missing(&self) -> usize {
        FRAME_LEN - self.len
    }

    /// Writable tail the next read should fill. Its length equals
    /// `missing()`, so a read into it never crosses a frame boundary.
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.len..]
    }

    /// Record that `n` bytes were written into `spare_mut()`. Returns the
    /// frame once the eighth byte has arrived and resets for the next one.
    pub fn commit(&mut self, n: usize) -> Option<Frame> {
        self.len = (self.len + n).min(FRAME_LEN);
        if self.len == FRAME_LEN {
            let frame = Frame::from_bytes(self.buf);
            self.clear();
            Some(frame)
        } else {
            None
        }
    }

    /// Copy as much of `data` as fits into the current frame. Returns the
    /// number of bytes consumed and the completed frame, if any.
    pub fn push_slice(&mut self, data: &[u8]) -> (usize, Option<Frame>) {
        let n = data.len().min(self.missing());
        self.spare_mut()[..n].copy_from_slice(&data[..n]);
        (n, self.commit(n))
    }

    /// Drop any partial frame.
    pub fn clear(&mut self) {
        self.buf = [0u8; FRAME_LEN];
        self.len = 0;
    }
}
