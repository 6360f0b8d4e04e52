//! Self-describing framing of bit-string sequences.
//!
//! A frame is a length header followed by the payload it announces.
//! [`FrameCodec`] strings frames together two ways (see [`Layout`]):
//! with the last chunk headerless, where the reader must know the chunk
//! count, or with every chunk framed so the list ends itself.
//!
//! [`FrameCodec`]: struct.FrameCodec.html
//! [`Layout`]: enum.Layout.html

mod layout;
pub use self::layout::*;

mod codec;
pub use self::codec::*;
