//! Immutable, bit-addressable strings.
//!
//! A [`BitString`] is a run of bits packed most-significant-first into
//! bytes. Unlike a byte slice it can be cut and joined at any bit offset:
//!
//! ```
//! use bitframe::BitString;
//!
//! let bits: BitString = "1011 0110 01".parse().unwrap();
//! let middle = bits.slice(3, 7).unwrap();
//! assert_eq!("1011", middle.to_binary_string());
//!
//! let joined = middle.concat(&bits.prefix(2).unwrap());
//! assert_eq!("101110", joined.to_binary_string());
//! ```
//!
//! Every value is in *canonical form*: the padding bits that fill out
//! the last byte are zero. That makes equality and hashing a plain
//! comparison of the stored bytes.

use std::fmt;
use std::iter::FromIterator;
use std::ops::Add;

use crate::errors::Result;
use crate::internal::bits::byte_len;
use crate::internal::errors::*;

mod convert;

/// An immutable string of bits.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct BitString {
    // Exactly `byte_len(len)` bytes, padding bits zero.
    bytes: Vec<u8>,
    len: u64,
}

impl BitString {
    /// Creates the empty bit string.
    pub fn new() -> Self {
        BitString {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Creates a bit string of `len` zero bits.
    pub fn zeros(len: u64) -> Self {
        BitString {
            bytes: vec![0; byte_len(len)],
            len,
        }
    }

    /// Takes the first `len` bits of `bytes`. The caller guarantees that
    /// there are enough bytes.
    fn from_parts(mut bytes: Vec<u8>, len: u64) -> Self {
        debug_assert!(len <= 8 * bytes.len() as u64);

        bytes.truncate(byte_len(len));
        let mut result = BitString { bytes, len };
        result.chop();
        result
    }

    /// Zeroes the padding bits of the last byte.
    fn chop(&mut self) {
        let used = (self.len % 8) as u32;
        if used != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= 0xFFu8 << (8 - used);
            }
        }
    }

    /// The length in bits.
    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.len
    }

    /// Is the bit string empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the bit at `position`, or `None` past the end.
    pub fn get_bit(&self, position: u64) -> Option<bool> {
        if position < self.len {
            let byte = self.bytes[(position / 8) as usize];
            Some(byte & (0x80u8 >> (position % 8)) != 0)
        } else {
            None
        }
    }

    /// Returns the bits in `[start, end)` as a new bit string.
    ///
    /// Fails with `RangeError::OutOfBounds` if `start > end` or
    /// `end > self.bit_len()`.
    pub fn slice(&self, start: u64, end: u64) -> Result<BitString> {
        if start > end || end > self.len {
            return out_of_bounds(start, end, self.len);
        }

        if start == end {
            return Ok(BitString::new());
        }

        let first = (start / 8) as usize;
        let last = byte_len(end);
        let mut bytes = self.bytes[first..last].to_vec();
        shift_left(&mut bytes, (start % 8) as u32);

        Ok(BitString::from_parts(bytes, end - start))
    }

    /// The first `end` bits.
    pub fn prefix(&self, end: u64) -> Result<BitString> {
        self.slice(0, end)
    }

    /// The bits from `start` to the end.
    pub fn suffix(&self, start: u64) -> Result<BitString> {
        self.slice(start, self.len)
    }

    /// Returns the bits of `self` followed by the bits of `other`.
    pub fn concat(&self, other: &BitString) -> BitString {
        let mut result = BitString {
            bytes: Vec::with_capacity(byte_len(self.len + other.len) + 1),
            len: self.len,
        };
        result.bytes.extend_from_slice(&self.bytes);
        result.append(other);
        result
    }

    /// Appends `other` in place. Only for values this crate owns
    /// exclusively, such as a writer's buffer.
    pub(crate) fn append(&mut self, other: &BitString) {
        let shift = (self.len % 8) as u32;

        if shift == 0 {
            self.bytes.extend_from_slice(&other.bytes);
        } else if let Some(mut carry) = self.bytes.pop() {
            self.bytes.reserve(other.bytes.len() + 1);
            for &byte in &other.bytes {
                self.bytes.push(carry | byte >> shift);
                carry = byte << (8 - shift);
            }
            self.bytes.push(carry);
        }

        self.len += other.len;
        self.bytes.truncate(byte_len(self.len));
        self.chop();
    }

    /// Appends a single bit in place.
    pub(crate) fn push_bit(&mut self, value: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }

        if value {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80u8 >> offset;
            }
        }

        self.len += 1;
    }

    /// Returns an iterator over the bits.
    pub fn iter(&self) -> Iter {
        Iter {
            bits: self,
            front: 0,
            back: self.len,
        }
    }
}

/// Shifts a byte string left by `shift < 8` bits, carrying across bytes.
fn shift_left(bytes: &mut [u8], shift: u32) {
    if shift == 0 {
        return;
    }

    let n = bytes.len();
    for i in 0..n {
        let carry = if i + 1 < n { bytes[i + 1] >> (8 - shift) } else { 0 };
        bytes[i] = bytes[i] << shift | carry;
    }
}

impl<'a, 'b> Add<&'b BitString> for &'a BitString {
    type Output = BitString;

    fn add(self, other: &'b BitString) -> BitString {
        self.concat(other)
    }
}

impl Add for BitString {
    type Output = BitString;

    fn add(mut self, other: BitString) -> BitString {
        self.append(&other);
        self
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut result = BitString::new();
        for bit in iter {
            result.push_bit(bit);
        }
        result
    }
}

impl fmt::Binary for BitString {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for bit in self {
            formatter.write_str(if bit { "1" } else { "0" })?;
        }

        Ok(())
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(self, formatter)
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BitString({}: {:b})", self.len, self)
    }
}

/// Iterator over the bits of a `BitString`.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    bits: &'a BitString,
    front: u64,
    back: u64,
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front < self.back {
            let result = self.bits.get_bit(self.front);
            self.front += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back - self.front) as usize;
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front < self.back {
            self.back -= 1;
            self.bits.get_bit(self.back)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::{Error, RangeError};
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn bits(digits: &str) -> BitString {
        digits.parse().unwrap()
    }

    #[test]
    fn empty() {
        let empty = BitString::new();
        assert_eq!(0, empty.bit_len());
        assert!(empty.is_empty());
        assert!(empty.as_bytes().is_empty());
        assert_eq!(BitString::default(), empty);
    }

    #[test]
    fn get_bit() {
        let b = bits("10010");
        assert_eq!(Some(true), b.get_bit(0));
        assert_eq!(Some(false), b.get_bit(1));
        assert_eq!(Some(true), b.get_bit(3));
        assert_eq!(None, b.get_bit(5));
    }

    #[test]
    fn slice_unaligned() {
        let b = BitString::from_bytes(&[0b1010_1100, 0b0011_0101]);
        let s = b.slice(3, 13).unwrap();
        assert_eq!("0110000110", s.to_binary_string());
        assert_eq!(&[0b0110_0001, 0b1000_0000], s.as_bytes());
    }

    #[test]
    fn slice_chops_padding() {
        let b = BitString::from_bytes(&[0xFF, 0xFF]);
        let s = b.slice(2, 7).unwrap();
        assert_eq!(&[0b1111_1000], s.as_bytes());
        assert_eq!(bits("11111"), s);
    }

    #[test]
    fn slice_empty_range() {
        let b = bits("1101");
        assert_eq!(BitString::new(), b.slice(2, 2).unwrap());
        assert_eq!(BitString::new(), b.slice(4, 4).unwrap());
    }

    #[test]
    fn slice_out_of_bounds() {
        let b = bits("1101");
        assert_eq!(
            Err(Error::Range(RangeError::OutOfBounds {
                start: 0,
                end: 5,
                len: 4
            })),
            b.slice(0, 5)
        );
        assert!(b.slice(3, 2).is_err());
        assert!(b.suffix(5).is_err());
    }

    #[test]
    fn prefix_and_suffix() {
        let b = bits("110100111");
        assert_eq!(bits("1101"), b.prefix(4).unwrap());
        assert_eq!(bits("00111"), b.suffix(4).unwrap());
    }

    #[test]
    fn concat_aligned() {
        let a = BitString::from_byte(0xAB);
        let b = BitString::from_byte(0xCD);
        assert_eq!(&[0xAB, 0xCD], a.concat(&b).as_bytes());
    }

    #[test]
    fn concat_carries() {
        let a = bits("101");
        let b = bits("11110000 1");
        let c = a.concat(&b);
        assert_eq!(12, c.bit_len());
        assert_eq!("101111100001", c.to_binary_string());
        assert_eq!(&[0b1011_1110, 0b0001_0000], c.as_bytes());
    }

    #[test]
    fn concat_drops_unneeded_byte() {
        let a = bits("1111111");
        let b = bits("1");
        let c = a.concat(&b);
        assert_eq!(&[0xFF], c.as_bytes());
        assert_eq!(BitString::from_byte(0xFF), c);
    }

    #[test]
    fn concat_empty() {
        let a = bits("101");
        assert_eq!(a, a.concat(&BitString::new()));
        assert_eq!(a, BitString::new().concat(&a));
    }

    #[test]
    fn add_operators() {
        let a = bits("10");
        let b = bits("01");
        assert_eq!(bits("1001"), &a + &b);
        assert_eq!(bits("0110"), b + a);
    }

    #[test]
    fn from_iterator() {
        let b: BitString = vec![true, false, true, true, false, false, false, false, true]
            .into_iter()
            .collect();
        assert_eq!(&[0b1011_0000, 0b1000_0000], b.as_bytes());
    }

    #[test]
    fn iter_both_ends() {
        let b = bits("1100");
        let mut iter = b.iter();
        assert_eq!(4, iter.len());
        assert_eq!(Some(true), iter.next());
        assert_eq!(Some(false), iter.next_back());
        assert_eq!(vec![true, false], iter.collect::<Vec<_>>());
    }

    #[test]
    fn formatting() {
        let b = bits("10110");
        assert_eq!("10110", format!("{:b}", b));
        assert_eq!("10110", b.to_string());
        assert_eq!("BitString(5: 10110)", format!("{:?}", b));
    }

    #[quickcheck]
    fn qc_slice_matches_string(x: BitString, a: u64, b: u64) -> bool {
        let len = x.bit_len();
        let (a, b) = (a % (len + 1), b % (len + 1));
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let digits = x.to_binary_string();
        x.slice(start, end).unwrap().to_binary_string() == digits[start as usize..end as usize]
    }

    #[quickcheck]
    fn qc_slice_is_canonical(x: BitString, a: u64) -> bool {
        let start = a % (x.bit_len() + 1);
        let s = x.suffix(start).unwrap();
        s == s.to_binary_string().parse::<BitString>().unwrap()
    }

    #[quickcheck]
    fn qc_concat_matches_string(x: BitString, y: BitString) -> bool {
        let expected = x.to_binary_string() + &y.to_binary_string();
        x.concat(&y).to_binary_string() == expected
    }

    #[quickcheck]
    fn qc_concat_associative(x: BitString, y: BitString, z: BitString) -> bool {
        x.concat(&y.concat(&z)) == x.concat(&y).concat(&z)
    }

    #[quickcheck]
    fn qc_concat_identity(x: BitString) -> bool {
        x.concat(&BitString::new()) == x && BitString::new().concat(&x) == x
    }

    #[quickcheck]
    fn qc_split_and_rejoin(x: BitString, a: u64) -> TestResult {
        if x.is_empty() {
            return TestResult::discard();
        }

        let mid = a % x.bit_len();
        let joined = x.prefix(mid).unwrap().concat(&x.suffix(mid).unwrap());
        TestResult::from_bool(joined == x)
    }
}
