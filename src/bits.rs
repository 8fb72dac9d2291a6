//! Bit sequences produced by the encoder and consumed by the decoder.

use std::fmt;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use serde::{Deserialize, Serialize};

/// A growable sequence of bits.
///
/// The codec itself never commits to a byte layout; `to_bytes` and
/// `from_bytes` are for callers that persist bit sequences. Packing is
/// MSB-first with zero padding to a byte boundary and no length field:
/// the end marker inside the stream is the terminator, so the pad bits
/// are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitSeq {
    bits: Vec<bool>,
}

impl BitSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Packs the bits MSB-first, zero-padded to a whole byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BitWriter::endian(Vec::new(), BigEndian);
        for bit in self.iter() {
            writer.write_bit(bit).expect("writing to a Vec cannot fail");
        }
        writer.byte_align().expect("writing to a Vec cannot fail");
        writer.into_writer()
    }

    /// Unpacks every bit of `bytes`, MSB-first. Trailing pad bits come
    /// along; the decoder stops at the end marker regardless.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut reader = BitReader::endian(bytes, BigEndian);
        let mut bits = Vec::with_capacity(bytes.len() * 8);
        for _ in 0..bytes.len() * 8 {
            bits.push(reader.read_bit().expect("in-bounds read cannot fail"));
        }
        Self { bits }
    }
}

impl FromIterator<bool> for BitSeq {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitSeq {
    fn extend<T: IntoIterator<Item = bool>>(&mut self, iter: T) {
        self.bits.extend(iter);
    }
}

impl fmt::Display for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
