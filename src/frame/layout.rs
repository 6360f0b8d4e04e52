/// How a sequence of chunks is laid out in a frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Layout {
    /// `count` chunks; every chunk but the last carries a header, and the
    /// last takes whatever bits remain. The count is not recorded, so the
    /// decoder must be told it.
    Chunks {
        /// The number of chunks.
        count: usize,
    },

    /// Any number of chunks, each with a header. Decoding stops at the
    /// end of the buffer.
    List,
}
