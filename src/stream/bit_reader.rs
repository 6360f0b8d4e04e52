use crate::bit_string::BitString;
use crate::errors::Result;
use crate::internal::errors::*;
use crate::stream::BitRead;

/// A cursor for reading bits out of a borrowed bit string.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    data: &'a BitString,
    pos: u64,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    pub fn new(data: &'a BitString) -> Self {
        BitReader { data, pos: 0 }
    }

    /// Creates a reader positioned at bit `position` of `data`.
    pub fn at(data: &'a BitString, position: u64) -> Result<Self> {
        let mut reader = BitReader::new(data);
        reader.seek(position)?;
        Ok(reader)
    }

    /// The bit string being read.
    #[inline]
    pub fn inner(&self) -> &'a BitString {
        self.data
    }

    /// Moves the position for the next read.
    pub fn seek(&mut self, position: u64) -> Result<()> {
        if position <= self.data.bit_len() {
            self.pos = position;
            Ok(())
        } else {
            out_of_bounds(position, position, self.data.bit_len())
        }
    }

    /// Reads the next `nbits` bits as a bit string.
    pub fn read_bits(&mut self, nbits: u64) -> Result<BitString> {
        let available = self.remaining();
        if nbits > available {
            return out_of_bits(self.pos, nbits, available);
        }

        let result = self.data.slice(self.pos, self.pos + nbits)?;
        self.pos += nbits;
        Ok(result)
    }
}

impl<'a> BitRead for BitReader<'a> {
    #[inline]
    fn position(&self) -> u64 {
        self.pos
    }

    #[inline]
    fn remaining(&self) -> u64 {
        self.data.bit_len() - self.pos
    }

    fn read_bit(&mut self) -> Result<Option<bool>> {
        let result = self.data.get_bit(self.pos);
        if result.is_some() {
            self.pos += 1;
        }
        Ok(result)
    }

    fn read_int_be(&mut self, nbits: u64) -> Result<Option<u64>> {
        if nbits > 64 {
            return too_many_bits(nbits, 64);
        }

        let available = self.remaining();
        if nbits > 0 && available == 0 {
            return Ok(None);
        }
        if nbits > available {
            return out_of_bits(self.pos, nbits, available);
        }

        let value = self.data.slice(self.pos, self.pos + nbits)?.to_u64()?;
        self.pos += nbits;
        Ok(Some(value))
    }
}
