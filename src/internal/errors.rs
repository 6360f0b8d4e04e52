use crate::errors::{DecodingError, RangeError, Result};

pub fn out_of_bounds<A>(start: u64, end: u64, len: u64) -> Result<A> {
    Err(RangeError::OutOfBounds { start, end, len }.into())
}

pub fn out_of_bits<A>(offset: u64, needed: u64, available: u64) -> Result<A> {
    Err(DecodingError::HeaderTruncated {
        offset,
        needed,
        available,
    }
    .into())
}

pub fn too_many_bits<A>(needed: u64, width: u64) -> Result<A> {
    Err(RangeError::ValueTooWide { needed, width }.into())
}

pub fn unrepresentable<A>(length: u64, max: u64) -> Result<A> {
    Err(RangeError::LengthUnrepresentable { length, max }.into())
}

pub fn trailing_garbage<A>(offset: u64, remaining: u64) -> Result<A> {
    Err(DecodingError::TrailingGarbage { offset, remaining }.into())
}
