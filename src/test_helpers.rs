use quickcheck::{Arbitrary, Gen};

use crate::BitString;

// Whole random bytes with up to seven bits chopped off the end, so
// that every alignment shows up.
impl Arbitrary for BitString {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let bytes: Vec<u8> = Arbitrary::arbitrary(g);
        let spare = u64::from(u8::arbitrary(g) % 8);
        let len = (8 * bytes.len() as u64).saturating_sub(spare);
        BitString::from_raw_parts(bytes, len).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let bits: Vec<bool> = self.iter().collect();
        Box::new(bits.shrink().map(|bits| bits.into_iter().collect()))
    }
}
