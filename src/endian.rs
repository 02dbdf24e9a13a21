use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order used when encoding or decoding multi-byte numeric values.
///
/// Every reader and writer carries one `Endian` flag, mutable at any time.
/// The flag applies to integers, floats, and the 4-byte string length
/// prefix; single-byte operations ignore it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Endian {
    /// Most significant byte first. The default.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

// Signed widths are handled by the codec as unsigned bit patterns, so only
// the unsigned and float accessors are needed here.
impl Endian {
    pub(crate) fn get_u16(self, buf: &[u8]) -> u16 {
        match self {
            Endian::Big => BigEndian::read_u16(buf),
            Endian::Little => LittleEndian::read_u16(buf),
        }
    }

    pub(crate) fn get_u32(self, buf: &[u8]) -> u32 {
        match self {
            Endian::Big => BigEndian::read_u32(buf),
            Endian::Little => LittleEndian::read_u32(buf),
        }
    }

    pub(crate) fn get_u64(self, buf: &[u8]) -> u64 {
        match self {
            Endian::Big => BigEndian::read_u64(buf),
            Endian::Little => LittleEndian::read_u64(buf),
        }
    }

    pub(crate) fn get_f32(self, buf: &[u8]) -> f32 {
        match self {
            Endian::Big => BigEndian::read_f32(buf),
            Endian::Little => LittleEndian::read_f32(buf),
        }
    }

    pub(crate) fn get_f64(self, buf: &[u8]) -> f64 {
        match self {
            Endian::Big => BigEndian::read_f64(buf),
            Endian::Little => LittleEndian::read_f64(buf),
        }
    }

    pub(crate) fn put_u16(self, buf: &mut [u8], v: u16) {
        match self {
            Endian::Big => BigEndian::write_u16(buf, v),
            Endian::Little => LittleEndian::write_u16(buf, v),
        }
    }

    pub(crate) fn put_u32(self, buf: &mut [u8], v: u32) {
        match self {
            Endian::Big => BigEndian::write_u32(buf, v),
            Endian::Little => LittleEndian::write_u32(buf, v),
        }
    }

    pub(crate) fn put_u64(self, buf: &mut [u8], v: u64) {
        match self {
            Endian::Big => BigEndian::write_u64(buf, v),
            Endian::Little => LittleEndian::write_u64(buf, v),
        }
    }

    pub(crate) fn put_f32(self, buf: &mut [u8], v: f32) {
        match self {
            Endian::Big => BigEndian::write_f32(buf, v),
            Endian::Little => LittleEndian::write_f32(buf, v),
        }
    }

    pub(crate) fn put_f64(self, buf: &mut [u8], v: f64) {
        match self {
            Endian::Big => BigEndian::write_f64(buf, v),
            Endian::Little => LittleEndian::write_f64(buf, v),
        }
    }
}
