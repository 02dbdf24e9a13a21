use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by the codec layer and both backends.
///
/// Failures from an underlying raw transfer (pulling a chunk, materializing
/// a blob through [`std::io`]) pass through as [`Error::Io`] without being
/// wrapped. Every error aborts only the in-flight operation.
#[derive(Debug, Error)]
pub enum Error {
    /// An input could not be normalized into a byte view.
    #[error("cannot convert input into a byte view: {reason}")]
    Conversion {
        /// What made the input unrepresentable.
        reason: String,
    },

    /// The source ended before a read request could be filled.
    ///
    /// No partial value is surfaced to the caller; the bytes consumed before
    /// the end was observed are discarded.
    #[error("unexpected end of data: needed {needed} more bytes after {got}")]
    UnexpectedEndOfData {
        /// Bytes still missing when the end of the stream was observed.
        needed: usize,
        /// Bytes that had been collected for the request.
        got: usize,
    },

    /// An operation was attempted on a reader or writer that was closed.
    #[error("operation on a closed stream")]
    Closed,

    /// An optional capability is not compiled into this build.
    #[error("{feature} support is not compiled into this build")]
    NotSupported {
        /// Name of the missing capability.
        feature: &'static str,
    },

    /// A string is too large for the 32-bit length prefix of the wire format.
    #[error("string of {len} bytes exceeds the 32-bit length prefix")]
    StringTooLong {
        /// UTF-8 byte length of the rejected string.
        len: usize,
    },

    /// An I/O failure from the underlying raw-transfer primitive.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
