use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::reader::RawSource;

/// A pull-based producer of byte chunks.
///
/// Chunk sizes are determined by the producer, not the consumer. A source
/// yields chunks only when asked, so backpressure is implicit: the next
/// chunk is requested only once the previous one is fully drained.
pub trait ChunkSource {
    /// Pulls the next chunk, or `None` at end of stream.
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>>;

    /// Tells the producer that no further chunks will be pulled.
    fn cancel(&mut self) -> Result<()>;
}

// A queue of byte vectors is the in-memory pull source.
impl ChunkSource for VecDeque<Vec<u8>> {
    fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.pop_front())
    }

    fn cancel(&mut self) -> Result<()> {
        self.clear();
        Ok(())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Uninitialized,
    Initialized,
    Closed,
}

/// A buffered chunk with a read head, kept across calls until drained.
struct Pending {
    chunk: Vec<u8>,
    head: usize,
}

/// A [`RawSource`] that stitches reads out of a pull-based chunk stream.
///
/// Read requests of arbitrary length are satisfied by draining the buffered
/// remainder of the last chunk and pulling further chunks as needed. At
/// most one chunk is buffered at a time.
///
/// The lifecycle is `Uninitialized -> Initialized -> Closed`; the first
/// transfer performs initialization, closing is terminal, and no transition
/// leaves the closed state.
pub struct ChunkedSource<P> {
    pull: P,
    state: State,
    pending: Option<Pending>,
}

impl<P: ChunkSource> ChunkedSource<P> {
    /// Creates a source over the given pull stream.
    pub fn new(pull: P) -> Self {
        Self {
            pull,
            state: State::Uninitialized,
            pending: None,
        }
    }

    /// Accesses the underlying pull stream.
    pub fn pull_mut(&mut self) -> &mut P {
        &mut self.pull
    }
}

impl<P: ChunkSource> RawSource for ChunkedSource<P> {
    fn transfer_in(&mut self, dest: &mut [u8]) -> Result<Option<usize>> {
        match self.state {
            State::Closed => return Err(Error::Closed),
            State::Uninitialized => {
                trace!("acquiring pull source");
                self.state = State::Initialized;
            }
            State::Initialized => {}
        }
        if dest.is_empty() {
            return Ok(Some(0));
        }

        let mut placed = 0;
        loop {
            if let Some(p) = self.pending.as_mut() {
                let avail = &p.chunk[p.head..];
                let n = avail.len().min(dest.len() - placed);
                dest[placed..placed + n].copy_from_slice(&avail[..n]);
                placed += n;
                p.head += n;
                if p.head == p.chunk.len() {
                    self.pending = None;
                }
                if placed == dest.len() {
                    break;
                }
            } else {
                match self.pull.next_chunk()? {
                    Some(chunk) => {
                        trace!(len = chunk.len(), "pulled chunk");
                        if !chunk.is_empty() {
                            self.pending = Some(Pending { chunk, head: 0 });
                        }
                    }
                    // Stream ended mid-fill: report what was placed, or end
                    // of data if that is nothing.
                    None => break,
                }
            }
        }

        if placed == 0 {
            Ok(None)
        } else {
            Ok(Some(placed))
        }
    }

    fn close(&mut self) -> Result<()> {
        if self.state == State::Closed {
            return Ok(());
        }
        let was_initialized = self.state == State::Initialized;
        self.state = State::Closed;
        self.pending = None;
        if was_initialized {
            // Cancellation failures are swallowed; close never errors for
            // the stream refusing to be cancelled.
            if let Err(err) = self.pull.cancel() {
                debug!(%err, "pull source cancellation failed during close");
            }
        }
        Ok(())
    }
}
