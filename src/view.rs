use crate::error::{Error, Result};

/// A canonical contiguous byte view, the normalized form of every
/// "byte-like" write input.
///
/// Borrowed views share the caller's memory and lifetime; owned views are
/// produced only by the copying conversion paths ([`ByteView::from_uints`],
/// [`ByteView::from_blob`]). Views are ephemeral: they are scoped to the
/// single codec call they are passed to.
#[derive(Debug)]
pub enum ByteView<'a> {
    /// A zero-copy view over caller-owned memory.
    Borrowed(&'a [u8]),
    /// Bytes copied out of a source that is not backed by linear memory.
    Owned(Vec<u8>),
}

impl<'a> ByteView<'a> {
    /// The bytes of the view.
    pub fn bytes(&self) -> &[u8] {
        match self {
            ByteView::Borrowed(b) => b,
            ByteView::Owned(v) => v,
        }
    }

    /// Length of the view in bytes.
    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    /// Converts the view into owned bytes, copying only if borrowed.
    pub fn into_owned(self) -> Vec<u8> {
        match self {
            ByteView::Borrowed(b) => b.to_vec(),
            ByteView::Owned(v) => v,
        }
    }

    /// Normalizes a numeric sequence by copying it element by element,
    /// coercing each element to an unsigned byte by truncation.
    pub fn from_uints<I>(seq: I) -> ByteView<'static>
    where
        I: IntoIterator<Item = u64>,
    {
        ByteView::Owned(seq.into_iter().map(|v| v as u8).collect())
    }

    /// Fully materializes a [`Blob`] into an owned view.
    ///
    /// This is the one conversion path that always allocates; blobs have no
    /// linear-memory backing to borrow from. Materialization failures are
    /// reported as [`Error::Conversion`].
    pub fn from_blob(blob: &dyn Blob) -> Result<ByteView<'static>> {
        match blob.materialize() {
            Ok(bytes) => Ok(ByteView::Owned(bytes)),
            Err(e) => Err(Error::Conversion {
                reason: format!("blob materialization failed: {e}"),
            }),
        }
    }
}

/// A large opaque byte container that must be materialized before use.
///
/// Blobs can only act as read inputs. They are rejected as read
/// destinations by construction: there is no mutable-view path for them, so
/// codec reads (which take `&mut [u8]`, caller memory a write through which
/// is observable) cannot target one.
pub trait Blob {
    /// Size of the blob in bytes.
    fn size(&self) -> u64;

    /// Copies the blob's full contents into memory.
    fn materialize(&self) -> std::io::Result<Vec<u8>>;
}

/// Conversion of heterogeneous byte-like inputs into a [`ByteView`].
///
/// Slices, fixed-size arrays, and vectors convert without copying. Inputs
/// that are not backed by linear memory go through the explicit copying
/// constructors on [`ByteView`] instead.
pub trait IntoByteView<'a> {
    /// Performs the conversion.
    fn into_byte_view(self) -> Result<ByteView<'a>>;
}

impl<'a> IntoByteView<'a> for ByteView<'a> {
    fn into_byte_view(self) -> Result<ByteView<'a>> {
        Ok(self)
    }
}

impl<'a> IntoByteView<'a> for &'a [u8] {
    fn into_byte_view(self) -> Result<ByteView<'a>> {
        Ok(ByteView::Borrowed(self))
    }
}

impl<'a, const N: usize> IntoByteView<'a> for &'a [u8; N] {
    fn into_byte_view(self) -> Result<ByteView<'a>> {
        Ok(ByteView::Borrowed(self))
    }
}

impl<'a> IntoByteView<'a> for &'a Vec<u8> {
    fn into_byte_view(self) -> Result<ByteView<'a>> {
        Ok(ByteView::Borrowed(self))
    }
}

impl IntoByteView<'static> for Vec<u8> {
    fn into_byte_view(self) -> Result<ByteView<'static>> {
        Ok(ByteView::Owned(self))
    }
}
