use crate::bit_string::BitString;
use crate::errors::Result;
use crate::internal::errors::*;

const WORD_BITS: u64 = 64;

/// Allows reading bits from a source.
///
/// Minimal complete definition is `position`, `remaining` and
/// `read_bit`. The default `read_int_be` reads one bit at a time;
/// override it if the source can do better.
pub trait BitRead {
    /// The position of the next read, in bits from the start.
    fn position(&self) -> u64;

    /// The number of bits left to read.
    fn remaining(&self) -> u64;

    /// Reads a single bit from the source.
    ///
    /// `Ok(None)` indicates EOF.
    fn read_bit(&mut self) -> Result<Option<bool>>;

    /// Reads an unsigned big-endian integer of `nbits` bits.
    ///
    /// `Ok(None)` indicates (benign) EOF: nothing was left to read.
    /// Running out partway through is an error, as is `nbits > 64`.
    fn read_int_be(&mut self, nbits: u64) -> Result<Option<u64>> {
        if nbits > WORD_BITS {
            return too_many_bits(nbits, WORD_BITS);
        }

        if nbits == 0 {
            return Ok(Some(0));
        }

        let available = self.remaining();
        if available == 0 {
            return Ok(None);
        }
        if available < nbits {
            return out_of_bits(self.position(), nbits, available);
        }

        let mut result = 0;
        for _ in 0..nbits {
            let bit = self.read_bit()?.unwrap_or(false);
            result = result << 1 | bit as u64;
        }

        Ok(Some(result))
    }
}

/// Allows writing bits to a sink.
///
/// Minimal complete definition is `write_bit`.
pub trait BitWrite {
    /// Writes a single bit to the sink.
    fn write_bit(&mut self, value: bool) -> Result<()>;

    /// Writes the low `nbits` bits of `value`, most significant first.
    ///
    /// Fails if `value` does not fit in `nbits` bits.
    fn write_int_be(&mut self, nbits: u64, value: u64) -> Result<()> {
        self.write_bits(&BitString::from_int_width(value, nbits)?)
    }

    /// Writes every bit of `bits`.
    fn write_bits(&mut self, bits: &BitString) -> Result<()> {
        for bit in bits {
            self.write_bit(bit)?;
        }

        Ok(())
    }
}
