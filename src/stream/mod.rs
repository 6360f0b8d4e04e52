//! Bit-oriented streams for coding.
//!
//! Readers and writers here move a cursor over a [`BitString`]; the
//! length codes in [`coding`](../coding/index.html) are written against
//! the [`BitRead`] and [`BitWrite`] traits.
//!
//! [`BitString`]: ../struct.BitString.html

mod traits;
pub use self::traits::*;

mod bit_reader;
pub use self::bit_reader::*;

mod bit_buffer;
pub use self::bit_buffer::*;
