use crate::bit_string::BitString;
use crate::errors::Result;
use crate::stream::BitWrite;

/// A bit buffer accumulates written bits into a bit string.
///
/// Writes append at the end, so the position of the next write is
/// always the current length.
#[derive(Clone, Debug, Default)]
pub struct BitBuffer {
    data: BitString,
}

impl BitBuffer {
    /// Creates a new, empty bit buffer.
    #[inline]
    pub fn new() -> Self {
        BitBuffer {
            data: BitString::new(),
        }
    }

    /// Creates a new bit buffer for appending to a bit string.
    pub fn append(data: BitString) -> Self {
        BitBuffer { data }
    }

    /// Returns the bit string underlying the bit buffer.
    #[inline]
    pub fn into_inner(self) -> BitString {
        self.data
    }

    /// Gives access to the bit string underlying the bit buffer.
    #[inline]
    pub fn inner(&self) -> &BitString {
        &self.data
    }

    /// The position where the next write will occur.
    #[inline]
    pub fn position(&self) -> u64 {
        self.data.bit_len()
    }
}

impl BitWrite for BitBuffer {
    fn write_bit(&mut self, value: bool) -> Result<()> {
        self.data.push_bit(value);
        Ok(())
    }

    fn write_bits(&mut self, bits: &BitString) -> Result<()> {
        self.data.append(bits);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn writer() {
        let mut writer = BitBuffer::new();

        writer.write_bit(true).unwrap();
        writer.write_bit(false).unwrap();
        writer.write_bit(false).unwrap();
        writer.write_bit(true).unwrap();
        writer.write_bit(true).unwrap();

        assert_eq!(5, writer.position());
        assert_eq!("10011", writer.into_inner().to_binary_string());
    }

    #[test]
    fn write_ints() {
        let mut writer = BitBuffer::append("1".parse().unwrap());

        writer.write_int_be(4, 0b0110).unwrap();
        writer.write_int_be(0, 0).unwrap();
        writer.write_int_be(9, 0b1_0000_0001).unwrap();
        assert!(writer.write_int_be(2, 4).is_err());

        assert_eq!("10110100000001", writer.inner().to_binary_string());
    }

    #[test]
    fn write_bits_unaligned() {
        let mut writer = BitBuffer::new();
        writer.write_bit(true).unwrap();
        writer.write_bits(&BitString::from_byte(0x0F)).unwrap();
        writer.write_bits(&BitString::new()).unwrap();
        writer.write_bit(true).unwrap();

        assert_eq!(&[0b1000_0111, 0b1100_0000], writer.inner().as_bytes());
    }
}
