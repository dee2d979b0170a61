//! LSB embedding and extraction.
//!
//! Bits are written to the least-significant bit of each channel value,
//! visiting slots in reverse raster order. Two addressing strategies locate
//! them again:
//!
//! - **Contiguous**: the caller keeps the occupancy and extraction replays
//!   the same traversal.
//! - **Key list**: every written slot is recorded as an [`AddressKey`] and
//!   extraction reads exactly those slots.
//!
//! ```text
//! message → encode → capacity check → embed → (container, Embedding)
//! (container, Recovery) → extract → decode → message
//! ```

mod capacity;
mod embed;
mod extract;
mod keys;
mod traversal;

pub use capacity::{capacity_bits, capacity_bytes, validate};
pub use embed::{embed, Embedding};
pub use extract::{extract, extract_keys, extract_length, Recovery};
pub use keys::{
    format_keys, load_keys, parse_keys, read_keys, save_keys, write_keys, AddressKey,
};
pub use traversal::ReverseRaster;

use crate::config::StegoConfig;
use crate::container::PixelContainer;
use crate::encoding::{self, MessageBits};
use crate::error::Result;
use crate::image_io;
use std::path::Path;

/// Embeds and extracts messages under one [`StegoConfig`].
///
/// # Example
///
/// ```
/// use lsb_stego::{PixelContainer, Steganographer, StegoConfig};
///
/// let stego = Steganographer::new(StegoConfig::default()).unwrap();
/// let mut container = PixelContainer::filled(4, 4, 128);
///
/// let embedding = stego.embed_message(&mut container, "hi").unwrap();
/// let message = stego.extract_message(&container, &embedding.recovery()).unwrap();
/// assert_eq!(message, "hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Steganographer {
    config: StegoConfig,
}

impl Steganographer {
    /// Create a steganographer after validating the configuration.
    pub fn new(config: StegoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StegoConfig {
        &self.config
    }

    /// Whole message bytes the container can hold.
    pub fn capacity_bytes(&self, container: &PixelContainer) -> usize {
        capacity_bytes(container.height(), container.width())
    }

    /// Embed raw bytes.
    pub fn embed_bytes(
        &self,
        container: &mut PixelContainer,
        message: &[u8],
    ) -> Result<Embedding> {
        embed(container, &encoding::encode(message), self.config.addressing)
    }

    /// Embed text under the configured encoding.
    pub fn embed_message(
        &self,
        container: &mut PixelContainer,
        message: &str,
    ) -> Result<Embedding> {
        let bits = encoding::encode_text(message, self.config.text_encoding);
        embed(container, &bits, self.config.addressing)
    }

    /// Extract raw bytes.
    pub fn extract_bytes(
        &self,
        container: &PixelContainer,
        recovery: &Recovery,
    ) -> Result<Vec<u8>> {
        encoding::decode(&extract(container, recovery)?)
    }

    /// Extract text under the configured encoding.
    pub fn extract_message(
        &self,
        container: &PixelContainer,
        recovery: &Recovery,
    ) -> Result<String> {
        let bits: MessageBits = extract(container, recovery)?;
        encoding::decode_text(&bits, self.config.text_encoding)
    }

    /// Load `cover`, embed `message`, and write the result to `stego` as PNG.
    pub fn embed_file(&self, cover: &Path, stego: &Path, message: &[u8]) -> Result<Embedding> {
        let mut container = image_io::load_container(cover)?;
        let embedding = self.embed_bytes(&mut container, message)?;
        image_io::save_container(&container, stego)?;
        Ok(embedding)
    }

    /// Load `stego` and extract raw bytes.
    pub fn extract_file(&self, stego: &Path, recovery: &Recovery) -> Result<Vec<u8>> {
        let container = image_io::load_container(stego)?;
        self.extract_bytes(&container, recovery)
    }
}
