//! Reading message bits back out of channel LSBs.

use super::capacity;
use super::keys::AddressKey;
use super::traversal::ReverseRaster;
use crate::config::LSB_MASK;
use crate::container::PixelContainer;
use crate::encoding::MessageBits;
use crate::error::{Error, Result};

/// Side information needed to locate embedded bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// Replay the embedding traversal for this many bits.
    Length(usize),
    /// Read exactly these slots, in order.
    Keys(Vec<AddressKey>),
}

impl Recovery {
    /// Number of bits this recovery will read.
    pub fn bit_count(&self) -> usize {
        match self {
            Recovery::Length(occupancy) => *occupancy,
            Recovery::Keys(keys) => keys.len(),
        }
    }
}

/// Extract embedded bits using whichever side information is available.
///
/// Both modes yield identical bits for the same embedding.
pub fn extract(container: &PixelContainer, recovery: &Recovery) -> Result<MessageBits> {
    let bits = match recovery {
        Recovery::Length(occupancy) => extract_length(container, *occupancy)?,
        Recovery::Keys(keys) => extract_keys(container, keys)?,
    };
    log::info!("Extracted {} bits", bits.len());
    Ok(bits)
}

/// Replay the reverse raster traversal and read `occupancy` LSBs.
pub fn extract_length(container: &PixelContainer, occupancy: usize) -> Result<MessageBits> {
    capacity::validate(occupancy, container.capacity_bits())?;

    Ok(ReverseRaster::new(container.height(), container.width())
        .take(occupancy)
        .map(|key| read_lsb(container, key))
        .collect())
}

/// Read the LSB of every slot named by `keys`, in order.
///
/// Every key is bounds-checked against the container first.
pub fn extract_keys(container: &PixelContainer, keys: &[AddressKey]) -> Result<MessageBits> {
    if let Some(&key) = keys
        .iter()
        .find(|k| !container.contains(k.row, k.column, k.channel))
    {
        return Err(Error::AddressOutOfRange {
            key,
            height: container.height(),
            width: container.width(),
        });
    }

    Ok(keys.iter().map(|&key| read_lsb(container, key)).collect())
}

fn read_lsb(container: &PixelContainer, key: AddressKey) -> bool {
    container.get(key.row, key.column, key.channel) & LSB_MASK == 1
}
