use crate::endian::Endian;
use crate::error::{Error, Result};
use crate::view::IntoByteView;

/// The raw byte-transfer primitive a writer backend must provide.
pub trait RawSink {
    /// Consumes exactly `src.len()` bytes, or fails.
    fn transfer_out(&mut self, src: &[u8]) -> Result<()>;

    /// Releases the sink. Must be idempotent; it is never called
    /// implicitly.
    fn close(&mut self) -> Result<()>;
}

impl RawSink for Vec<u8> {
    fn transfer_out(&mut self, src: &[u8]) -> Result<()> {
        self.extend_from_slice(src);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Encodes typed values into any [`RawSink`].
///
/// Multi-byte values are placed according to the writer's [`Endian`] flag,
/// which defaults to big-endian and may be changed between calls. The
/// writer tracks a monotonically non-decreasing position: the count of
/// bytes produced by codec-level calls.
pub struct BinaryWriter<S> {
    sink: S,
    endian: Endian,
    position: u64,
}

impl<S: RawSink> BinaryWriter<S> {
    /// Creates a writer over `sink` with the default big-endian byte order.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            endian: Endian::default(),
            position: 0,
        }
    }

    /// Creates a writer with an explicit byte order.
    pub fn with_endian(sink: S, endian: Endian) -> Self {
        Self {
            sink,
            endian,
            position: 0,
        }
    }

    /// The active byte order.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Changes the byte order for subsequent writes.
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Count of bytes produced so far by codec-level calls.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Accesses the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Accesses the underlying sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Extracts the underlying sink.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Writes a byte-like input after normalizing it into a byte view.
    ///
    /// Accepts anything implementing [`IntoByteView`]: slices and vectors
    /// pass through without copying, and partial views are expressed by
    /// slicing at the call site.
    pub fn write_bytes<'a>(&mut self, data: impl IntoByteView<'a>) -> Result<()> {
        let view = data.into_byte_view()?;
        self.sink.transfer_out(view.bytes())?;
        self.position += view.len() as u64;
        Ok(())
    }

    fn put<const N: usize>(&mut self, bytes: [u8; N]) -> Result<()> {
        self.sink.transfer_out(&bytes)?;
        self.position += N as u64;
        Ok(())
    }

    /// Writes a single `u8`. Byte order does not apply.
    pub fn write_u8(&mut self, v: u8) -> Result<()> {
        self.put([v])
    }

    /// Writes a single `i8`. Byte order does not apply.
    pub fn write_i8(&mut self, v: i8) -> Result<()> {
        self.put([v as u8])
    }

    /// Writes a `u16` in the active byte order.
    pub fn write_u16(&mut self, v: u16) -> Result<()> {
        let mut buf = [0u8; 2];
        self.endian.put_u16(&mut buf, v);
        self.put(buf)
    }

    /// Writes an `i16` in the active byte order.
    pub fn write_i16(&mut self, v: i16) -> Result<()> {
        self.write_u16(v as u16)
    }

    /// Writes a `u32` in the active byte order.
    pub fn write_u32(&mut self, v: u32) -> Result<()> {
        let mut buf = [0u8; 4];
        self.endian.put_u32(&mut buf, v);
        self.put(buf)
    }

    /// Writes an `i32` in the active byte order.
    pub fn write_i32(&mut self, v: i32) -> Result<()> {
        self.write_u32(v as u32)
    }

    /// Writes a `u64` in the active byte order, as one atomic unsigned
    /// value at full range.
    pub fn write_u64(&mut self, v: u64) -> Result<()> {
        let mut buf = [0u8; 8];
        self.endian.put_u64(&mut buf, v);
        self.put(buf)
    }

    /// Writes an `i64` in the active byte order, as one atomic
    /// two's-complement value at full range.
    pub fn write_i64(&mut self, v: i64) -> Result<()> {
        self.write_u64(v as u64)
    }

    /// Narrows `v` to IEEE754 half precision (round to nearest, ties to
    /// even) and writes the 2 bytes in the active byte order.
    #[cfg(feature = "f16")]
    pub fn write_f16(&mut self, v: f32) -> Result<()> {
        self.write_u16(crate::f16::f32_to_f16(v))
    }

    /// Half precision is not compiled into this build.
    #[cfg(not(feature = "f16"))]
    pub fn write_f16(&mut self, _v: f32) -> Result<()> {
        Err(Error::NotSupported {
            feature: "half-precision float",
        })
    }

    /// Writes an `f32` in the active byte order.
    pub fn write_f32(&mut self, v: f32) -> Result<()> {
        let mut buf = [0u8; 4];
        self.endian.put_f32(&mut buf, v);
        self.put(buf)
    }

    /// Writes an `f64` in the active byte order.
    pub fn write_f64(&mut self, v: f64) -> Result<()> {
        let mut buf = [0u8; 8];
        self.endian.put_f64(&mut buf, v);
        self.put(buf)
    }

    /// Writes a length-framed UTF-8 string.
    ///
    /// The UTF-8 byte count goes first as a 32-bit unsigned integer in the
    /// active byte order, then the bytes themselves. Strings longer than
    /// `u32::MAX` bytes are rejected with [`Error::StringTooLong`].
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        let len =
            u32::try_from(s.len()).map_err(|_| Error::StringTooLong { len: s.len() })?;
        self.write_u32(len)?;
        self.write_bytes(s.as_bytes())
    }

    /// Closes the underlying sink. Idempotent, and never implicit.
    pub fn close(&mut self) -> Result<()> {
        self.sink.close()
    }
}
