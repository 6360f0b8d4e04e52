use super::*;
use crate::errors::{RangeError, Result};
use crate::internal::bits::num_bits;
use crate::internal::errors::*;
use crate::stream::*;

/// `FixedWidth(n)` writes every value in exactly `n` bits.
///
/// This is the old fixed-header scheme; `FixedWidth::new(8)` caps
/// payloads at 255 bits. It is not wire-compatible with
/// [`WidthIndexed`](struct.WidthIndexed.html).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FixedWidth {
    bits: u32,
}

impl FixedWidth {
    /// A code with an `bits`-wide field, `1 <= bits <= 64`.
    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits > 64 {
            return Err(RangeError::InvalidCodeWidth(bits).into());
        }

        Ok(FixedWidth { bits })
    }

    /// The field width in bits.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl UniversalCode for FixedWidth {
    fn encode<W: BitWrite>(&self, sink: &mut W, value: u64) -> Result<()> {
        if num_bits(value) > self.bits as u64 {
            return unrepresentable(value, self.max_value());
        }

        sink.write_int_be(self.bits as u64, value)
    }

    fn decode<R: BitRead>(&self, source: &mut R) -> Result<Option<u64>> {
        source.read_int_be(self.bits as u64)
    }

    fn max_value(&self) -> u64 {
        if self.bits == 64 {
            u64::max_value()
        } else {
            (1 << self.bits) - 1
        }
    }

    fn min_bits(&self) -> u64 {
        self.bits as u64
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn enc234() {
        let code = FixedWidth::new(8).unwrap();
        let mut sink = BitBuffer::new();

        code.encode(&mut sink, 2).unwrap();
        code.encode(&mut sink, 3).unwrap();
        code.encode(&mut sink, 255).unwrap();
        assert_eq!(&[2, 3, 255], sink.inner().as_bytes());

        let encoded = sink.into_inner();
        let mut source = BitReader::new(&encoded);
        assert_eq!(Some(2), code.decode(&mut source).unwrap());
        assert_eq!(Some(3), code.decode(&mut source).unwrap());
        assert_eq!(Some(255), code.decode(&mut source).unwrap());
        assert_eq!(None, code.decode(&mut source).unwrap());
    }

    #[test]
    fn too_long() {
        let code = FixedWidth::new(8).unwrap();
        let mut sink = BitBuffer::new();
        assert_eq!(
            Err(Error::Range(RangeError::LengthUnrepresentable {
                length: 256,
                max: 255
            })),
            code.encode(&mut sink, 256)
        );
        assert_eq!(0, sink.position());
    }

    #[test]
    fn widths() {
        assert!(FixedWidth::new(0).is_err());
        assert!(FixedWidth::new(65).is_err());
        assert_eq!(u64::max_value(), FixedWidth::new(64).unwrap().max_value());
        assert_eq!(1, FixedWidth::new(1).unwrap().max_value());
        assert_eq!(8, FixedWidth::new(8).unwrap().min_bits());
    }
}
