/*!
 * Hole Summary
 * Free-segment list consumed by placement strategies
 */

use crate::core::types::{WordOffset, Words};
use crate::memory::types::{MemoryError, MemoryResult};
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Free segments as `(offset, length)` pairs in ascending offset order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoleSummary {
    holes: Vec<(WordOffset, Words)>,
}

impl HoleSummary {
    pub fn new(holes: Vec<(WordOffset, Words)>) -> Self {
        Self { holes }
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn as_slice(&self) -> &[(WordOffset, Words)] {
        &self.holes
    }

    pub fn iter(&self) -> impl Iterator<Item = &(WordOffset, Words)> {
        self.holes.iter()
    }

    /// Length of the largest hole, 0 when there are none
    pub fn largest(&self) -> Words {
        self.holes.iter().map(|&(_, len)| len).max().unwrap_or(0)
    }

    /// Encode as `[count][offset][length]...` 16-bit little-endian words
    pub fn encode(&self) -> MemoryResult<Bytes> {
        let mut buf = BytesMut::with_capacity(2 + self.holes.len() * 4);
        buf.put_u16_le(to_u16(self.holes.len())?);
        for &(offset, length) in &self.holes {
            buf.put_u16_le(to_u16(offset)?);
            buf.put_u16_le(to_u16(length)?);
        }
        Ok(buf.freeze())
    }

    /// Decode the layout produced by [`HoleSummary::encode`]
    pub fn decode(mut data: &[u8]) -> MemoryResult<Self> {
        if data.len() < 2 {
            return Err(MemoryError::MalformedSummary(format!(
                "{} bytes is too short for the count header",
                data.len()
            )));
        }

        let count = data.get_u16_le() as usize;
        if data.remaining() != count * 4 {
            return Err(MemoryError::MalformedSummary(format!(
                "count {} needs {} body bytes, found {}",
                count,
                count * 4,
                data.remaining()
            )));
        }

        let holes = (0..count)
            .map(|_| {
                let offset = data.get_u16_le() as WordOffset;
                let length = data.get_u16_le() as Words;
                (offset, length)
            })
            .collect();

        Ok(Self { holes })
    }
}

impl FromIterator<(WordOffset, Words)> for HoleSummary {
    fn from_iter<I: IntoIterator<Item = (WordOffset, Words)>>(iter: I) -> Self {
        Self {
            holes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HoleSummary {
    type Item = &'a (WordOffset, Words);
    type IntoIter = std::slice::Iter<'a, (WordOffset, Words)>;

    fn into_iter(self) -> Self::IntoIter {
        self.holes.iter()
    }
}

fn to_u16(value: usize) -> MemoryResult<u16> {
    u16::try_from(value).map_err(|_| MemoryError::EncodingOverflow { value })
}
