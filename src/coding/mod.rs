//! Length codes for frame headers.
//!
//! These codes know how to encode a length to a `BitWrite` and decode
//! it from a `BitRead`. [`WidthIndexed`] is the current header scheme;
//! [`FixedWidth`] reads and writes the older fixed-width headers.
//!
//! [`WidthIndexed`]: struct.WidthIndexed.html
//! [`FixedWidth`]: struct.FixedWidth.html

mod traits;
pub use self::traits::*;

mod width_indexed;
pub use self::width_indexed::*;

mod fixed_width;
pub use self::fixed_width::*;
