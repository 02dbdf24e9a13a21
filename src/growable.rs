use tracing::trace;

use crate::error::{Error, Result};
use crate::writer::RawSink;

/// Capacity floor for the first growth of an empty buffer.
const INITIAL_CAPACITY: usize = 4096;

/// An external target for a [`GrowableBuffer`]'s finished contents.
///
/// The buffer hands its final bytes to the target on close, which lets a
/// writer feed persistence or download sinks without knowing about them.
/// Implementations must make `close` idempotent.
pub trait ByteSink {
    /// Accepts one contiguous byte sequence.
    fn accept(&mut self, bytes: &[u8]) -> Result<()>;

    /// Releases the target. Idempotent.
    fn close(&mut self) -> Result<()>;
}

/// A [`RawSink`] backed by a single reallocatable memory region.
///
/// The backing store grows by repeated doubling and never shrinks; growth
/// allocates a larger region and copies, which preserves all previously
/// written bytes. The invariant `len <= capacity` always holds.
pub struct GrowableBuffer {
    buf: Box<[u8]>,
    len: usize,
    target: Option<Box<dyn ByteSink>>,
    closed: bool,
}

impl GrowableBuffer {
    /// Creates an empty buffer with no backing allocation yet.
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
            target: None,
            closed: false,
        }
    }

    /// Creates an empty buffer with a preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
            target: None,
            closed: false,
        }
    }

    /// Creates an empty buffer that feeds `target` on close.
    pub fn with_target(target: Box<dyn ByteSink>) -> Self {
        Self {
            buf: Box::default(),
            len: 0,
            target: Some(target),
            closed: false,
        }
    }

    /// The bytes written so far, exactly `[0, len)` of the backing store.
    ///
    /// The view is only guaranteed valid until the next write; growth moves
    /// the backing store.
    pub fn data(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Count of bytes written.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity of the backing store.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Consumes the buffer, returning the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        let mut v = self.buf.into_vec();
        v.truncate(self.len);
        v
    }

    fn ensure_capacity(&mut self, additional: usize) {
        let needed = self.len + additional;
        if needed <= self.buf.len() {
            return;
        }
        let mut cap = self.buf.len().max(INITIAL_CAPACITY);
        while cap < needed {
            cap = cap.saturating_mul(2);
        }
        trace!(old = self.buf.len(), new = cap, "growing backing buffer");
        let mut grown = vec![0u8; cap];
        grown[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = grown.into_boxed_slice();
    }
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RawSink for GrowableBuffer {
    fn transfer_out(&mut self, src: &[u8]) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.ensure_capacity(src.len());
        self.buf[self.len..self.len + src.len()].copy_from_slice(src);
        self.len += src.len();
        Ok(())
    }

    /// Hands the final contents to the completion target, if one was
    /// attached, and closes it. A no-op otherwise, and on every call after
    /// the first.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if let Some(target) = self.target.as_mut() {
            target.accept(&self.buf[..self.len])?;
            target.close()?;
        }
        Ok(())
    }
}
