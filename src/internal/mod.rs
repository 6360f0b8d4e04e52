pub mod bits;
pub mod errors;
