//! Conversions between bit strings and bytes, text and numbers.

use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder};
use num_bigint::BigUint;
use num_traits::{PrimInt, Unsigned};

use super::BitString;
use crate::errors::{DecodingError, Error, Result};
use crate::internal::bits::{num_bits, type_bits};
use crate::internal::errors::*;

const WORD_BITS: u64 = 64;

/// Width of the chop-count prefix written by `to_framed_bytes`.
const CHOP_BITS: u64 = 3;

impl BitString {
    /// A bit string of the eight bits of `byte`.
    pub fn from_byte(byte: u8) -> Self {
        BitString {
            bytes: vec![byte],
            len: 8,
        }
    }

    /// A bit string of all the bits of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        BitString {
            bytes: bytes.to_vec(),
            len: 8 * bytes.len() as u64,
        }
    }

    /// A bit string of the first `len` bits of `bytes`.
    ///
    /// This is the inverse of `into_bytes` when the bit length travels
    /// separately. Bits of `bytes` past `len` are ignored.
    ///
    /// Fails with `RangeError::OutOfBounds` if `bytes` holds fewer than
    /// `len` bits.
    pub fn from_raw_parts(bytes: Vec<u8>, len: u64) -> Result<Self> {
        let available = 8 * bytes.len() as u64;
        if len > available {
            return out_of_bounds(0, len, available);
        }

        Ok(BitString::from_parts(bytes, len))
    }

    /// The packed bytes, most significant bit first, padding bits zero.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the bit string, returning its packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Packs the bit string into bytes that record their own bit length.
    ///
    /// The output starts with a 3-bit chop count, the number of padding
    /// bits in the last byte of the bit string itself (0 when it is
    /// byte-aligned), followed by the bits.
    pub fn to_framed_bytes(&self) -> Vec<u8> {
        let chop = self.padding_bits() as u8;
        let mut result = BitString::from_parts(vec![chop << 5], CHOP_BITS);
        result.append(self);
        result.into_bytes()
    }

    /// Recovers a bit string written by `to_framed_bytes`.
    ///
    /// The chop count fixes the bit length modulo 8 and the byte count
    /// bounds it, so exactly one length fits; inputs where none does are
    /// rejected, as are set bits after the payload.
    pub fn from_framed_bytes(bytes: &[u8]) -> Result<Self> {
        let all = BitString::from_bytes(bytes);
        if all.len < CHOP_BITS {
            return out_of_bits(0, CHOP_BITS, all.len);
        }

        let chop = u64::from(bytes[0] >> 5);
        let tail = (8 - chop) % 8;
        let room = all.len - CHOP_BITS;
        let unused = (room + 8 - tail) % 8;
        if unused > room {
            return out_of_bits(CHOP_BITS, tail, room);
        }

        let end = all.len - unused;
        if all.iter().skip(end as usize).any(|bit| bit) {
            return trailing_garbage(end, unused);
        }

        all.slice(CHOP_BITS, end)
    }

    /// Lowercase hex of the packed bytes, with a `-N` suffix giving the
    /// number of padding bits when the length is not a multiple of 8.
    pub fn to_hex(&self) -> String {
        let padding = self.padding_bits();
        if padding == 0 {
            self.to_raw_hex()
        } else {
            format!("{}-{}", self.to_raw_hex(), padding)
        }
    }

    /// Parses the output of `to_hex`.
    pub fn from_hex(input: &str) -> Result<Self> {
        let (digits, padding) = match input.find('-') {
            None => (input, 0),
            Some(index) => {
                let suffix = &input[index + 1..];
                match *suffix.as_bytes() {
                    [digit @ b'1'..=b'7'] => (&input[..index], u64::from(digit - b'0')),
                    _ => return invalid_hex(format!("bad padding suffix {:?}", suffix)),
                }
            }
        };

        let whole = BitString::from_raw_hex(digits)?;
        if padding > whole.len {
            return invalid_hex(format!("{} padding bits on {} bits", padding, whole.len));
        }

        let len = whole.len - padding;
        if whole.iter().skip(len as usize).any(|bit| bit) {
            return invalid_hex("non-zero padding bits".to_owned());
        }

        whole.prefix(len)
    }

    /// Lowercase hex of the packed bytes, without the padding suffix.
    pub fn to_raw_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Parses plain hex into whole bytes.
    pub fn from_raw_hex(input: &str) -> Result<Self> {
        match hex::decode(input) {
            Ok(bytes) => Ok(BitString::from_bytes(&bytes)),
            Err(err) => invalid_hex(err.to_string()),
        }
    }

    /// One `'0'` or `'1'` per bit, first bit first.
    pub fn to_binary_string(&self) -> String {
        format!("{:b}", self)
    }

    /// Like `to_binary_string` with a space between bytes. For display;
    /// `from_binary_str` accepts it back.
    pub fn to_grouped_binary_string(&self) -> String {
        let mut result = String::with_capacity(self.len as usize * 9 / 8);
        for (i, bit) in self.iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                result.push(' ');
            }
            result.push(if bit { '1' } else { '0' });
        }
        result
    }

    /// Parses `'0'`/`'1'` characters, ignoring spaces.
    pub fn from_binary_str(input: &str) -> Result<Self> {
        let mut result = BitString::new();

        for (index, found) in input.chars().enumerate() {
            match found {
                '0' => result.push_bit(false),
                '1' => result.push_bit(true),
                ' ' => (),
                _ => return Err(DecodingError::InvalidDigit { index, found }.into()),
            }
        }

        Ok(result)
    }

    /// The bits of `value` at the full width of `N`.
    ///
    /// Values needing more than 64 bits are rejected; use `from_biguint`
    /// for those.
    pub fn from_int<N: PrimInt + Unsigned>(value: N) -> Result<Self> {
        BitString::from_int_width(value, type_bits::<N>())
    }

    /// The bits of `value`, left-padded with zeros to exactly `width` bits.
    ///
    /// Fails with `RangeError::ValueTooWide` if `value` needs more than
    /// `width` bits.
    pub fn from_int_width<N: PrimInt + Unsigned>(value: N, width: u64) -> Result<Self> {
        let needed = num_bits(value);
        if needed > width {
            return too_many_bits(needed, width);
        }

        let word = match value.to_u64() {
            Some(word) => word,
            None => return too_many_bits(needed, WORD_BITS),
        };

        let low = BitString::from_u64(word).suffix(WORD_BITS - width.min(WORD_BITS))?;
        if width > WORD_BITS {
            Ok(BitString::zeros(width - WORD_BITS).concat(&low))
        } else {
            Ok(low)
        }
    }

    /// Reads the bits as an unsigned big-endian integer.
    ///
    /// Leading zero bits are allowed at any length. Fails with
    /// `RangeError::ValueTooWide` when the value does not fit in `N`.
    pub fn to_int<N: PrimInt + Unsigned>(&self) -> Result<N> {
        let word = self.to_u64()?;
        match <N as num_traits::NumCast>::from(word) {
            Some(value) => Ok(value),
            None => too_many_bits(num_bits(word), type_bits::<N>()),
        }
    }

    /// A bit string of the 16 bits of `value`.
    pub fn from_u16(value: u16) -> Self {
        let mut buf = [0; 2];
        BigEndian::write_u16(&mut buf, value);
        BitString::from_bytes(&buf)
    }

    /// A bit string of the 32 bits of `value`.
    pub fn from_u32(value: u32) -> Self {
        let mut buf = [0; 4];
        BigEndian::write_u32(&mut buf, value);
        BitString::from_bytes(&buf)
    }

    /// A bit string of the 64 bits of `value`.
    pub fn from_u64(value: u64) -> Self {
        let mut buf = [0; 8];
        BigEndian::write_u64(&mut buf, value);
        BitString::from_bytes(&buf)
    }

    /// Reads the bits as an unsigned big-endian `u64`.
    pub fn to_u64(&self) -> Result<u64> {
        let excess = self.len.saturating_sub(WORD_BITS);
        if let Some(first_one) = self.iter().take(excess as usize).position(|bit| bit) {
            return too_many_bits(self.len - first_one as u64, WORD_BITS);
        }

        let low = self.suffix(excess)?;
        let word = BitString::zeros(WORD_BITS - low.len).concat(&low);
        Ok(BigEndian::read_u64(word.as_bytes()))
    }

    /// The bits of `value` in the fewest whole bytes; zero is empty.
    pub fn from_biguint(value: &BigUint) -> Self {
        if value.bits() == 0 {
            BitString::new()
        } else {
            BitString::from_bytes(&value.to_bytes_be())
        }
    }

    /// Reads the bits as an unsigned big-endian integer of any size.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes) >> self.padding_bits() as usize
    }

    /// The UTF-8 bytes of `text`.
    pub fn from_text(text: &str) -> Self {
        BitString::from_bytes(text.as_bytes())
    }

    /// Reads whole bytes back as UTF-8 text.
    pub fn to_text(&self) -> Result<String> {
        if self.padding_bits() != 0 {
            return Err(DecodingError::NotByteAligned(self.len).into());
        }

        String::from_utf8(self.bytes.clone()).map_err(|err| {
            DecodingError::InvalidUtf8 {
                valid_up_to: err.utf8_error().valid_up_to(),
            }
            .into()
        })
    }

    /// Padding bits in the last byte.
    fn padding_bits(&self) -> u64 {
        8 * self.bytes.len() as u64 - self.len
    }
}

fn invalid_hex<A>(message: String) -> Result<A> {
    Err(DecodingError::InvalidHex(message).into())
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        BitString::from_binary_str(input)
    }
}

impl<'a> From<&'a [u8]> for BitString {
    fn from(bytes: &'a [u8]) -> Self {
        BitString::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for BitString {
    fn from(bytes: Vec<u8>) -> Self {
        let len = 8 * bytes.len() as u64;
        BitString { bytes, len }
    }
}

impl<'a> From<&'a str> for BitString {
    fn from(text: &'a str) -> Self {
        BitString::from_text(text)
    }
}
