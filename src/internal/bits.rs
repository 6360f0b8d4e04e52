use num_traits::PrimInt;

/// The number of bits in `N`.
#[inline]
pub fn type_bits<N: PrimInt>() -> u64 {
    N::zero().count_zeros() as u64
}

/// The minimum number of bits needed to write `value` in binary.
///
/// `num_bits(0) == 0`.
#[inline]
pub fn num_bits<N: PrimInt>(value: N) -> u64 {
    type_bits::<N>() - value.leading_zeros() as u64
}

/// The number of bytes needed to hold `bits` bits.
#[inline]
pub fn byte_len(bits: u64) -> usize {
    ((bits + 7) / 8) as usize
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn num_bits_small() {
        assert_eq!(0, num_bits(0u64));
        assert_eq!(1, num_bits(1u64));
        assert_eq!(2, num_bits(3u8));
        assert_eq!(5, num_bits(17u32));
        assert_eq!(64, num_bits(u64::max_value()));
    }

    #[test]
    fn byte_len_rounds_up() {
        assert_eq!(0, byte_len(0));
        assert_eq!(1, byte_len(1));
        assert_eq!(1, byte_len(8));
        assert_eq!(2, byte_len(9));
    }
}
