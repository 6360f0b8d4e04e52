use super::*;
use crate::errors::{DecodingError, RangeError, Result};
use crate::internal::bits::num_bits;
use crate::internal::errors::*;
use crate::stream::*;

/// Size-code width used by `WidthIndexed::default()`.
pub const DEFAULT_SIZE_CODE_BITS: u32 = 4;

const MAX_SIZE_CODE_BITS: u32 = 8;

/// The size code of a 64-bit length field.
const WORD_SIZE_CODE: u64 = 7;

/// A width-indexed length code.
///
/// Each value is written as a fixed-width *size code* followed by a
/// length field whose width is a power of two:
///
///   - size code 0 means the field is empty and the value is 0;
///   - size code `k > 0` means the field is 2<sup>k-1</sup> bits wide,
///     the smallest power of two that holds the value.
///
/// With the default 4-bit size code the value 3 is written as `0010 11`
/// and 17 as `0100 00010001`.
///
/// `WidthIndexed::new(3)` gives the older 3-bit exponent header. The two
/// are not wire-compatible: both ends must use the same size-code width.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct WidthIndexed {
    size_code_bits: u32,
}

impl WidthIndexed {
    /// A code whose size code is `size_code_bits` wide.
    ///
    /// Fails with `RangeError::InvalidCodeWidth` unless
    /// `1 <= size_code_bits <= 8`.
    pub fn new(size_code_bits: u32) -> Result<Self> {
        if size_code_bits == 0 || size_code_bits > MAX_SIZE_CODE_BITS {
            return Err(RangeError::InvalidCodeWidth(size_code_bits).into());
        }

        Ok(WidthIndexed { size_code_bits })
    }

    /// The width of the size code in bits.
    #[inline]
    pub fn size_code_bits(&self) -> u32 {
        self.size_code_bits
    }

    /// The size code that announces `value`.
    pub fn size_code(value: u64) -> u64 {
        match num_bits(value) {
            0 => 0,
            nbits => nbits.next_power_of_two().trailing_zeros() as u64 + 1,
        }
    }

    /// The length-field width named by `size_code`.
    ///
    /// Only meaningful for size codes up to 7.
    pub fn field_width(size_code: u64) -> u64 {
        debug_assert!(size_code <= WORD_SIZE_CODE);

        match size_code {
            0 => 0,
            k => 1 << (k - 1),
        }
    }

    /// The largest size code this code will write.
    fn max_size_code(&self) -> u64 {
        ((1u64 << self.size_code_bits) - 1).min(WORD_SIZE_CODE)
    }
}

impl Default for WidthIndexed {
    fn default() -> Self {
        WidthIndexed {
            size_code_bits: DEFAULT_SIZE_CODE_BITS,
        }
    }
}

impl UniversalCode for WidthIndexed {
    fn encode<W: BitWrite>(&self, sink: &mut W, value: u64) -> Result<()> {
        let size_code = Self::size_code(value);
        if size_code > self.max_size_code() {
            return unrepresentable(value, self.max_value());
        }

        sink.write_int_be(self.size_code_bits as u64, size_code)?;
        sink.write_int_be(Self::field_width(size_code), value)
    }

    fn decode<R: BitRead>(&self, source: &mut R) -> Result<Option<u64>> {
        let offset = source.position();

        let size_code = match source.read_int_be(self.size_code_bits as u64)? {
            Some(size_code) => size_code,
            None => return Ok(None),
        };

        if size_code > WORD_SIZE_CODE {
            return Err(DecodingError::LengthOverflow { offset, size_code }.into());
        }

        let width = Self::field_width(size_code);
        match source.read_int_be(width)? {
            Some(value) => Ok(Some(value)),
            None => out_of_bits(source.position(), width, 0),
        }
    }

    fn max_value(&self) -> u64 {
        let width = Self::field_width(self.max_size_code());
        if width >= 64 {
            u64::max_value()
        } else {
            (1 << width) - 1
        }
    }

    fn min_bits(&self) -> u64 {
        self.size_code_bits as u64
    }
}
