/// Codeword assembly and bit serialization
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::error::{EncodeError, Result};
use crate::models::Version;

/// Byte mode indicator
pub const MODE_BYTE: u32 = 0b0100;
/// Bits taken by the mode indicator and the length field
pub const HEADER_BITS: usize = 12;
/// Pad codewords appended alternately after the terminator
pub const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// MSB-first bit accumulator
#[derive(Debug, Default)]
struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    fn push_bits(&mut self, value: u32, count: usize) {
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    fn len(&self) -> usize {
        self.bits.len()
    }

    /// Pack into codewords, zero filling the final partial byte
    fn into_codewords(self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &b)| acc | ((b as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Builds the codeword sequence and bitstream for a version
pub struct BitstreamAssembler;

impl BitstreamAssembler {
    /// Header, payload, terminator and padding; exactly `data_codewords` long
    pub fn data_codewords(payload: &[u8], version: &Version) -> Result<Vec<u8>> {
        let capacity = version.data_capacity();
        if payload.len() > capacity {
            return Err(EncodeError::PayloadTooLarge {
                len: payload.len(),
                capacity,
            });
        }
        // Capacity never exceeds the one-byte length field
        let len = u8::try_from(payload.len()).map_err(|_| EncodeError::PayloadTooLarge {
            len: payload.len(),
            capacity: u8::MAX as usize,
        })?;

        let mut writer = BitWriter::default();
        writer.push_bits(MODE_BYTE, 4);
        writer.push_bits(len as u32, 8);
        for &byte in payload {
            writer.push_bits(byte as u32, 8);
        }
        // Terminator, fits because capacity reserves two header codewords
        writer.push_bits(0, 4);
        debug_assert_eq!(writer.len() % 8, 0);

        let mut codewords = writer.into_codewords();
        let target = version.data_codewords();
        let shortfall = target - codewords.len();
        codewords.extend(PAD_BYTES.iter().cycle().take(shortfall));
        Ok(codewords)
    }

    /// Data codewords followed by their error correction codewords
    pub fn codewords(payload: &[u8], version: &Version) -> Result<Vec<u8>> {
        let mut codewords = Self::data_codewords(payload, version)?;
        let ecc = ReedSolomonEncoder::new(version.ec_codewords()).encode(&codewords);
        codewords.extend_from_slice(&ecc);
        Ok(codewords)
    }

    /// Full bitstream: every codeword MSB-first, then the remainder bits
    pub fn assemble(payload: &[u8], version: &Version) -> Result<Vec<bool>> {
        let codewords = Self::codewords(payload, version)?;
        let bits = Self::serialize(&codewords, version.remainder_bits());
        tracing::debug!(
            version = version.number(),
            payload_len = payload.len(),
            codewords = codewords.len(),
            bits = bits.len(),
            "assembled bitstream"
        );
        Ok(bits)
    }

    pub fn serialize(codewords: &[u8], remainder_bits: usize) -> Vec<bool> {
        let mut writer = BitWriter::default();
        for &codeword in codewords {
            writer.push_bits(codeword as u32, 8);
        }
        writer.push_bits(0, remainder_bits);
        writer.bits
    }
}
