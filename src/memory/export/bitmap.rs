/*!
 * Occupancy Bitmap
 * One bit per arena word, 1 = occupied
 */

use crate::core::limits::BITMAP_HEADER_BYTES;
use crate::core::types::Words;
use crate::memory::types::{MemoryError, MemoryResult, Segment};
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Word occupancy bitmap, packed low bit first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyBitmap {
    body: Vec<u8>,
}

impl OccupancyBitmap {
    /// Build the bitmap for an arena of `total_words` described by `segments`
    pub fn from_segments(segments: &[Segment], total_words: Words) -> Self {
        let mut body = vec![0u8; total_words.div_ceil(8)];
        for seg in segments.iter().filter(|s| !s.is_free) {
            for word in seg.start..seg.end().min(total_words) {
                body[word / 8] |= 1 << (word % 8);
            }
        }
        Self { body }
    }

    /// Bitmap body without the size header
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Number of body bytes
    pub fn byte_len(&self) -> usize {
        self.body.len()
    }

    /// Whether `word` is marked occupied; words past the body read as free
    pub fn is_occupied(&self, word: usize) -> bool {
        self.body
            .get(word / 8)
            .map_or(false, |byte| byte & (1 << (word % 8)) != 0)
    }

    /// Count of occupied words
    pub fn occupied_words(&self) -> usize {
        self.body.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Encode as `[size_lo][size_hi][body...]`
    pub fn encode(&self) -> MemoryResult<Bytes> {
        let size = u16::try_from(self.body.len()).map_err(|_| MemoryError::EncodingOverflow {
            value: self.body.len(),
        })?;
        let mut buf = BytesMut::with_capacity(BITMAP_HEADER_BYTES + self.body.len());
        buf.put_u16_le(size);
        buf.put_slice(&self.body);
        Ok(buf.freeze())
    }

    /// Decode the layout produced by [`OccupancyBitmap::encode`]
    pub fn decode(mut data: &[u8]) -> MemoryResult<Self> {
        if data.len() < BITMAP_HEADER_BYTES {
            return Err(MemoryError::MalformedBitmap(format!(
                "{} bytes is too short for the size header",
                data.len()
            )));
        }
        let size = data.get_u16_le() as usize;
        if data.remaining() != size {
            return Err(MemoryError::MalformedBitmap(format!(
                "header says {} body bytes, found {}",
                size,
                data.remaining()
            )));
        }
        Ok(Self {
            body: data.to_vec(),
        })
    }
}
