use std::ops::Range;

use super::Layout;
use crate::bit_string::BitString;
use crate::coding::{UniversalCode, WidthIndexed};
use crate::errors::{DecodingError, RangeError, Result};
use crate::internal::errors::*;
use crate::stream::*;

/// Packs chunks of bits into one bit string and unpacks them again.
///
/// The length code is part of the codec value, so codecs speaking
/// different header schemes can be used side by side:
///
/// ```
/// use bitframe::{BitString, FrameCodec, WidthIndexed};
///
/// let codec = FrameCodec::new(WidthIndexed::new(4).unwrap());
/// let chunks = vec![
///     BitString::from_text("hi"),
///     "101".parse().unwrap(),
/// ];
///
/// let packed = codec.encode_list(&chunks).unwrap();
/// assert_eq!(chunks, codec.decode_list(&packed).unwrap());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct FrameCodec<Code = WidthIndexed> {
    code: Code,
}

impl<Code: UniversalCode> FrameCodec<Code> {
    /// A codec that writes headers with `code`.
    pub fn new(code: Code) -> Self {
        FrameCodec { code }
    }

    /// The length code.
    #[inline]
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// The header announcing a payload of `length` bits.
    pub fn create_header(&self, length: u64) -> Result<BitString> {
        let mut sink = BitBuffer::new();
        self.code.encode(&mut sink, length)?;
        Ok(sink.into_inner())
    }

    /// Reads the header at `offset` and returns the bit range of the
    /// payload it announces.
    ///
    /// Fails with `DecodingError::HeaderTruncated` if the header runs
    /// past the end of `buffer`, and with
    /// `DecodingError::PayloadTruncated` if the payload does.
    pub fn read_header(&self, buffer: &BitString, offset: u64) -> Result<Range<u64>> {
        let mut source = BitReader::at(buffer, offset)?;

        let length = match self.code.decode(&mut source)? {
            Some(length) => length,
            None => return out_of_bits(offset, self.code.min_bits(), 0),
        };

        let start = source.position();
        let available = source.remaining();
        if length > available {
            return Err(DecodingError::PayloadTruncated {
                offset: start,
                declared: length,
                available,
            }
            .into());
        }

        Ok(start..start + length)
    }

    /// Writes a header and then `chunk`.
    fn write_frame(&self, sink: &mut BitBuffer, chunk: &BitString) -> Result<()> {
        self.code.encode(sink, chunk.bit_len())?;
        sink.write_bits(chunk)
    }

    /// Reads the frame at `offset`, returning the payload and the offset
    /// just past it.
    fn read_frame(&self, buffer: &BitString, offset: u64) -> Result<(BitString, u64)> {
        let payload = self.read_header(buffer, offset)?;
        let chunk = buffer.slice(payload.start, payload.end)?;
        Ok((chunk, payload.end))
    }

    /// Packs `chunks`, giving every chunk but the last a header.
    ///
    /// The empty list packs to the empty bit string.
    pub fn encode_chunks(&self, chunks: &[BitString]) -> Result<BitString> {
        let mut sink = BitBuffer::new();

        if let Some((last, init)) = chunks.split_last() {
            for chunk in init {
                self.write_frame(&mut sink, chunk)?;
            }
            sink.write_bits(last)?;
        }

        Ok(sink.into_inner())
    }

    /// Unpacks `count` chunks written by `encode_chunks`.
    ///
    /// Reads `count - 1` frames; whatever follows is the last chunk.
    pub fn decode_chunks(&self, buffer: &BitString, count: usize) -> Result<Vec<BitString>> {
        if count == 0 {
            return if buffer.is_empty() {
                Ok(Vec::new())
            } else {
                trailing_garbage(0, buffer.bit_len())
            };
        }

        let mut chunks = Vec::with_capacity(count);
        let mut cursor = 0;

        for _ in 1..count {
            let (chunk, next) = self.read_frame(buffer, cursor)?;
            chunks.push(chunk);
            cursor = next;
        }

        chunks.push(buffer.suffix(cursor)?);
        Ok(chunks)
    }

    /// Packs `list`, giving every chunk a header.
    pub fn encode_list(&self, list: &[BitString]) -> Result<BitString> {
        let mut sink = BitBuffer::new();

        for chunk in list {
            self.write_frame(&mut sink, chunk)?;
        }

        Ok(sink.into_inner())
    }

    /// Unpacks a list written by `encode_list`, reading frames until the
    /// end of `buffer`.
    pub fn decode_list(&self, buffer: &BitString) -> Result<Vec<BitString>> {
        let mut list = Vec::new();
        let mut cursor = 0;

        while cursor < buffer.bit_len() {
            let (chunk, next) = self.read_frame(buffer, cursor)?;
            list.push(chunk);
            cursor = next;
        }

        Ok(list)
    }

    /// Packs `chunks` in the given layout.
    ///
    /// Fails with `RangeError::ChunkCount` if `layout` names a different
    /// number of chunks.
    pub fn encode(&self, chunks: &[BitString], layout: Layout) -> Result<BitString> {
        match layout {
            Layout::Chunks { count } if count != chunks.len() => Err(RangeError::ChunkCount {
                expected: count,
                actual: chunks.len(),
            }
            .into()),
            Layout::Chunks { .. } => self.encode_chunks(chunks),
            Layout::List => self.encode_list(chunks),
        }
    }

    /// Unpacks chunks packed in the given layout.
    pub fn decode(&self, buffer: &BitString, layout: Layout) -> Result<Vec<BitString>> {
        match layout {
            Layout::Chunks { count } => self.decode_chunks(buffer, count),
            Layout::List => self.decode_list(buffer),
        }
    }
}
