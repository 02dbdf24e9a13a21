//! Backend-agnostic reading and writing of sequential binary data.
//!
//! The codec layer ([`BinaryReader`] / [`BinaryWriter`]) is written once
//! against a minimal raw byte-transfer primitive ([`RawSource`] /
//! [`RawSink`]) and handles fixed-width integers, IEEE754 floats (including
//! half precision), full-range 64-bit integers, and length-framed UTF-8
//! strings, with a per-instance byte-order flag that defaults to big-endian.
//!
//! Two backends satisfy the primitive under very different constraints:
//!
//! * [`ChunkedSource`] stitches arbitrary-length read requests out of a
//!   pull-based stream of chunks whose sizes the consumer does not control.
//! * [`GrowableBuffer`] is a self-growing in-memory sink with doubling
//!   growth and an optional completion hook toward an external [`ByteSink`].
//!
//! Plain byte slices and `Vec<u8>` also implement the primitive, so the same
//! codec drives in-memory parsing and encoding without a backend in between.

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod chunked;
mod endian;
mod error;
#[cfg(feature = "f16")]
mod f16;
mod growable;
mod reader;
mod view;
mod writer;


pub use chunked::{ChunkSource, ChunkedSource};
pub use endian::Endian;
pub use error::{Error, Result};
pub use growable::{ByteSink, GrowableBuffer};
pub use reader::{BinaryReader, Contents, Encoding, RawSource};
pub use view::{Blob, ByteView, IntoByteView};
pub use writer::{BinaryWriter, RawSink};
