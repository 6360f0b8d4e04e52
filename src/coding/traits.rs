use crate::errors::Result;
use crate::stream::*;

/// A universal code lets us encode arbitrary sized integers in a
/// self-delimiting code.
///
/// The frame codec uses one to write the length header in front of
/// each payload.
pub trait UniversalCode {
    /// Writes `value` to `sink`.
    ///
    /// Fails with `RangeError::LengthUnrepresentable` if the code cannot
    /// express `value`.
    fn encode<W: BitWrite>(&self, sink: &mut W, value: u64) -> Result<()>;

    /// Reads a value from `source`.
    ///
    /// `Ok(None)` indicates (benign) EOF.
    fn decode<R: BitRead>(&self, source: &mut R) -> Result<Option<u64>>;

    /// The largest value `encode` accepts.
    fn max_value(&self) -> u64;

    /// The fewest bits any encoded value takes.
    fn min_bits(&self) -> u64;
}
