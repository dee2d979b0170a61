//! Byte ↔ bit conversion.

use crate::config::BITS_PER_BYTE;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of message bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBits {
    bits: Vec<bool>,
}

impl MessageBits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for MessageBits {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for MessageBits {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

/// Parses a string of `'0'` and `'1'` characters.
impl FromStr for MessageBits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::InvalidBit(other)),
            })
            .collect()
    }
}

impl fmt::Display for MessageBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Expand bytes into bits, most significant bit first.
///
/// # Example
///
/// ```
/// use lsb_stego::encoding::encode;
///
/// assert_eq!(encode(b"A").to_string(), "01000001");
/// ```
pub fn encode(message: &[u8]) -> MessageBits {
    let mut bits = MessageBits::with_capacity(message.len() * BITS_PER_BYTE);
    for &byte in message {
        for shift in (0..BITS_PER_BYTE).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }
    bits
}

/// Regroup bits into bytes, eight at a time, big-endian.
///
/// Fails with [`Error::MalformedBitStream`] unless the length is a
/// multiple of eight; nothing is decoded in that case.
pub fn decode(bits: &MessageBits) -> Result<Vec<u8>> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(Error::MalformedBitStream { len: bits.len() });
    }

    Ok(bits
        .as_slice()
        .chunks_exact(BITS_PER_BYTE)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
        .collect())
}
