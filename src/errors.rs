//! Error types.
//!
//! Every failure is one of two kinds: a [`RangeError`] when the caller
//! asks for something outside what a value can hold, or a
//! [`DecodingError`] when input handed to a parser or to the frame
//! decoder does not describe a well-formed value. Offsets in both are in
//! bits unless the variant says otherwise.

use std::io;

use thiserror::Error;

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure reported by this crate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A caller contract violation.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Malformed or truncated input.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
}

/// A bit range, value or parameter that falls outside what is supported.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RangeError {
    /// A slice or offset request outside `[0, len]`, or with `start > end`.
    #[error("bit range {start}..{end} is out of bounds for length {len}")]
    OutOfBounds {
        /// First requested bit.
        start: u64,
        /// One past the last requested bit.
        end: u64,
        /// Length of the bit string.
        len: u64,
    },

    /// An integer does not fit in the requested number of bits.
    #[error("value needs {needed} bits but only {width} are available")]
    ValueTooWide {
        /// Bits needed to represent the value.
        needed: u64,
        /// Bits available.
        width: u64,
    },

    /// A payload length cannot be expressed by the header scheme.
    #[error("length {length} cannot be encoded (largest encodable length is {max})")]
    LengthUnrepresentable {
        /// The offending length.
        length: u64,
        /// The largest length the scheme can encode.
        max: u64,
    },

    /// A length-code parameter outside its valid range.
    #[error("invalid code width: {0}")]
    InvalidCodeWidth(u32),

    /// The chunk count named in a layout disagrees with the chunks given.
    #[error("layout expects {expected} chunks, got {actual}")]
    ChunkCount {
        /// Count named by the layout.
        expected: usize,
        /// Count actually supplied.
        actual: usize,
    },
}

/// Input that could not be decoded.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodingError {
    /// A header read would run past the end of the buffer.
    #[error("header at bit {offset} truncated: needs {needed} bits, {available} available")]
    HeaderTruncated {
        /// Bit offset where the truncated read started.
        offset: u64,
        /// Bits the read needed.
        needed: u64,
        /// Bits remaining from `offset`.
        available: u64,
    },

    /// A header declares a payload longer than the remaining bits.
    #[error("payload at bit {offset} truncated: declared {declared} bits, {available} available")]
    PayloadTruncated {
        /// Bit offset where the payload starts.
        offset: u64,
        /// Length declared by the header.
        declared: u64,
        /// Bits remaining from `offset`.
        available: u64,
    },

    /// Bits left over where the input should have ended.
    #[error("{remaining} unexpected trailing bits at bit {offset}")]
    TrailingGarbage {
        /// Bit offset of the first unexpected bit.
        offset: u64,
        /// Number of unexpected bits.
        remaining: u64,
    },

    /// A header's size code names a length field wider than 64 bits.
    #[error("header at bit {offset} has size code {size_code}, too wide for a 64-bit length")]
    LengthOverflow {
        /// Bit offset of the header.
        offset: u64,
        /// The size code read.
        size_code: u64,
    },

    /// A binary-digit string contains something other than `0`, `1` or space.
    #[error("invalid binary digit {found:?} at character {index}")]
    InvalidDigit {
        /// Character index in the input.
        index: usize,
        /// The offending character.
        found: char,
    },

    /// A hex string is malformed.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// A byte-oriented conversion was asked of a bit string whose length
    /// is not a multiple of 8.
    #[error("bit length {0} is not a multiple of 8")]
    NotByteAligned(u64),

    /// The bytes are not valid UTF-8.
    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the valid prefix in bytes.
        valid_up_to: usize,
    },
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        let kind = match error {
            Error::Range(_) => io::ErrorKind::InvalidInput,
            Error::Decoding(DecodingError::HeaderTruncated { .. })
            | Error::Decoding(DecodingError::PayloadTruncated { .. }) => {
                io::ErrorKind::UnexpectedEof
            }
            Error::Decoding(_) => io::ErrorKind::InvalidData,
        };

        io::Error::new(kind, error)
    }
}
