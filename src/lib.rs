//! Bit strings and self-describing framing for Rust.
//!
//! So far we have:
//!
//!   - [bit strings](struct.BitString.html) that can be sliced and
//!     joined at any bit offset, and converted to and from bytes, hex,
//!     binary digits, integers and text;
//!   - [bit streams](stream/index.html) for reading and writing them;
//!   - [length codes](coding/index.html) for announcing how long the
//!     next payload is; and
//!   - a [frame codec](struct.FrameCodec.html) that packs a list of bit
//!     strings into one and unpacks it again without a schema.
//!
//! # Usage
//!
//! ```rust
//! use bitframe::{BitString, FrameCodec};
//!
//! let chunks = vec![
//!     BitString::from_text("id"),
//!     "101".parse().unwrap(),
//!     BitString::new(),
//! ];
//!
//! let codec: FrameCodec = FrameCodec::default();
//! let packed = codec.encode_chunks(&chunks).unwrap();
//! assert_eq!(chunks, codec.decode_chunks(&packed, 3).unwrap());
//! ```
//!
//! The header scheme is part of the codec, not of the data: both ends
//! have to agree on it. See [`WidthIndexed`](coding/struct.WidthIndexed.html).

#![warn(missing_docs)]

mod internal;

pub mod errors;
pub use crate::errors::{DecodingError, Error, RangeError, Result};

pub mod bit_string;
pub use crate::bit_string::BitString;

pub mod stream;
pub use crate::stream::{BitBuffer, BitRead, BitReader, BitWrite};

pub mod coding;
pub use crate::coding::{FixedWidth, UniversalCode, WidthIndexed};

pub mod frame;
pub use crate::frame::{FrameCodec, Layout};

#[cfg(test)]
mod test_helpers;
