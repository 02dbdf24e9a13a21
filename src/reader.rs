use crate::endian::Endian;
use crate::error::{Error, Result};

/// Initial size of the scratch buffer used by [`BinaryReader::read_all`].
const READ_ALL_INITIAL: usize = 4096;

/// The raw byte-transfer primitive a reader backend must provide.
///
/// The codec layer is written once against this trait; backends differ only
/// in where the bytes come from.
pub trait RawSource {
    /// Transfers up to `dest.len()` bytes into `dest`.
    ///
    /// Returns `Ok(None)` only when zero bytes are available (end of data);
    /// otherwise returns a positive count no greater than `dest.len()`. An
    /// empty `dest` always yields `Ok(Some(0))` without touching the source.
    fn transfer_in(&mut self, dest: &mut [u8]) -> Result<Option<usize>>;

    /// Releases the source. Must be idempotent; it is never called
    /// implicitly, so callers are responsible for invoking it on every exit
    /// path.
    fn close(&mut self) -> Result<()>;
}

// A plain byte slice is the simplest source: it yields its remainder in one
// transfer and then reports end of data.
impl RawSource for &[u8] {
    fn transfer_in(&mut self, dest: &mut [u8]) -> Result<Option<usize>> {
        if dest.is_empty() {
            return Ok(Some(0));
        }
        if self.is_empty() {
            return Ok(None);
        }
        let n = self.len().min(dest.len());
        dest[..n].copy_from_slice(&self[..n]);
        *self = &self[n..];
        Ok(Some(n))
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Output encoding selector for [`BinaryReader::read_all`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Encoding {
    /// Return the raw byte sequence. The default.
    #[default]
    Bytes,
    /// Decode the bytes as UTF-8 text, replacing malformed sequences.
    Utf8,
    /// Re-encode the bytes as base64 text.
    Base64,
}

/// The drained contents of a source, shaped by the requested [`Encoding`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Contents {
    /// Raw bytes, from [`Encoding::Bytes`].
    Bytes(Vec<u8>),
    /// Decoded or re-encoded text, from [`Encoding::Utf8`] or
    /// [`Encoding::Base64`].
    Text(String),
}

/// Decodes typed values from any [`RawSource`].
///
/// Multi-byte values are extracted according to the reader's [`Endian`]
/// flag, which defaults to big-endian and may be changed between calls. The
/// reader tracks a monotonically non-decreasing position: the count of bytes
/// consumed by codec-level calls.
///
/// Reads that need a destination take `&mut [u8]` — caller memory, so the
/// bytes placed there are directly observable. Partial destinations are
/// expressed by slicing.
pub struct BinaryReader<S> {
    src: S,
    endian: Endian,
    position: u64,
}

impl<S: RawSource> BinaryReader<S> {
    /// Creates a reader over `src` with the default big-endian byte order.
    pub fn new(src: S) -> Self {
        Self {
            src,
            endian: Endian::default(),
            position: 0,
        }
    }

    /// Creates a reader with an explicit byte order.
    pub fn with_endian(src: S, endian: Endian) -> Self {
        Self {
            src,
            endian,
            position: 0,
        }
    }

    /// The active byte order.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Changes the byte order for subsequent reads.
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Count of bytes consumed so far by codec-level calls.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Accesses the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.src
    }

    /// Extracts the underlying source.
    pub fn into_inner(self) -> S {
        self.src
    }

    /// Fills `dest` completely, looping over raw transfers as needed.
    ///
    /// Fails with [`Error::UnexpectedEndOfData`] if the source ends first;
    /// the partially filled destination must then be treated as garbage.
    pub fn read_into(&mut self, dest: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < dest.len() {
            match self.src.transfer_in(&mut dest[filled..])? {
                Some(n) => filled += n,
                None => {
                    return Err(Error::UnexpectedEndOfData {
                        needed: dest.len() - filled,
                        got: filled,
                    })
                }
            }
        }
        self.position += dest.len() as u64;
        Ok(())
    }

    /// Reads exactly `n` bytes into a freshly allocated buffer.
    ///
    /// No partial buffer is ever returned: underflow fails with
    /// [`Error::UnexpectedEndOfData`].
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Reads a small fixed-size scratch array.
    fn read_scratch<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Reads a single `u8`. Byte order does not apply.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_scratch::<1>()?[0])
    }

    /// Reads a single `i8`. Byte order does not apply.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a `u16` in the active byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let buf = self.read_scratch::<2>()?;
        Ok(self.endian.get_u16(&buf))
    }

    /// Reads an `i16` in the active byte order.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads a `u32` in the active byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let buf = self.read_scratch::<4>()?;
        Ok(self.endian.get_u32(&buf))
    }

    /// Reads an `i32` in the active byte order.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Reads a `u64` in the active byte order.
    ///
    /// The 8 bytes are decoded as one atomic unsigned value; the full 64-bit
    /// range is preserved.
    pub fn read_u64(&mut self) -> Result<u64> {
        let buf = self.read_scratch::<8>()?;
        Ok(self.endian.get_u64(&buf))
    }

    /// Reads an `i64` in the active byte order, as one atomic
    /// two's-complement value at full range.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Reads an IEEE754 half-precision value in the active byte order and
    /// widens it to `f32`. Widening is exact.
    #[cfg(feature = "f16")]
    pub fn read_f16(&mut self) -> Result<f32> {
        let bits = self.read_u16()?;
        Ok(crate::f16::f16_to_f32(bits))
    }

    /// Half precision is not compiled into this build.
    #[cfg(not(feature = "f16"))]
    pub fn read_f16(&mut self) -> Result<f32> {
        Err(Error::NotSupported {
            feature: "half-precision float",
        })
    }

    /// Reads an `f32` in the active byte order.
    pub fn read_f32(&mut self) -> Result<f32> {
        let buf = self.read_scratch::<4>()?;
        Ok(self.endian.get_f32(&buf))
    }

    /// Reads an `f64` in the active byte order.
    pub fn read_f64(&mut self) -> Result<f64> {
        let buf = self.read_scratch::<8>()?;
        Ok(self.endian.get_f64(&buf))
    }

    /// Reads a length-framed UTF-8 string.
    ///
    /// The frame is a 32-bit unsigned byte count in the active byte order,
    /// followed by exactly that many bytes. Malformed UTF-8 sequences are
    /// replaced with U+FFFD rather than treated as a hard error.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.read_bytes(len)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Drains the source to exhaustion and shapes the result per `encoding`.
    ///
    /// The scratch buffer starts at 4096 bytes and doubles whenever full.
    /// An absent preference is [`Encoding::default()`], which is raw bytes.
    pub fn read_all(&mut self, encoding: Encoding) -> Result<Contents> {
        let bytes = self.drain()?;
        Ok(match encoding {
            Encoding::Bytes => Contents::Bytes(bytes),
            Encoding::Utf8 => Contents::Text(String::from_utf8_lossy(&bytes).into_owned()),
            Encoding::Base64 => Contents::Text(base64::encode(&bytes)),
        })
    }

    fn drain(&mut self) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; READ_ALL_INITIAL];
        let mut filled = 0;
        loop {
            if filled == buf.len() {
                buf.resize(buf.len() * 2, 0);
            }
            match self.src.transfer_in(&mut buf[filled..])? {
                Some(n) => filled += n,
                None => break,
            }
        }
        buf.truncate(filled);
        self.position += filled as u64;
        Ok(buf)
    }

    /// Closes the underlying source. Idempotent, and never implicit: every
    /// exit path that owns a reader should call this.
    pub fn close(&mut self) -> Result<()> {
        self.src.close()
    }
}
