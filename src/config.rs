//! Configuration constants and types for LSB steganography.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Bits packed into one message byte.
pub const BITS_PER_BYTE: usize = 8;

/// Mask selecting the least-significant bit of a channel value.
pub const LSB_MASK: u8 = 0x01;

/// Mask clearing the least-significant bit of a channel value.
pub const CLEAR_LSB_MASK: u8 = 0xFE;

/// How embedded bits are located again at extraction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Addressing {
    /// Replay the traversal for a known number of bits.
    #[default]
    Contiguous,
    /// Record every slot written, in order.
    KeyList,
}

/// Encoding used to turn text messages into bytes and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    #[default]
    Utf8,
}

/// Configuration for a [`Steganographer`](crate::stego::Steganographer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    /// Addressing strategy for embed and extract.
    pub addressing: Addressing,

    /// Text encoding for string messages.
    pub text_encoding: TextEncoding,
}

impl StegoConfig {
    /// Create a configuration with the given addressing strategy.
    pub fn new(addressing: Addressing) -> Self {
        Self {
            addressing,
            text_encoding: TextEncoding::Utf8,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        // Only byte-oriented encodings are accepted; Utf8 is the sole variant today.
        match self.text_encoding {
            TextEncoding::Utf8 => Ok(()),
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}
