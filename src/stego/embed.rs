//! Writing message bits into channel LSBs.

use super::capacity;
use super::extract::Recovery;
use super::keys::AddressKey;
use super::traversal::ReverseRaster;
use crate::config::{Addressing, CLEAR_LSB_MASK};
use crate::container::PixelContainer;
use crate::encoding::MessageBits;
use crate::error::{Error, Result};

/// Side information produced by one embed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedding {
    /// Number of bits written.
    pub occupancy: usize,
    /// Slots written, in order. Present only for key-list addressing.
    pub keys: Option<Vec<AddressKey>>,
}

impl Embedding {
    /// Side information matching the addressing used at embed time.
    pub fn recovery(&self) -> Recovery {
        match &self.keys {
            Some(keys) => Recovery::Keys(keys.clone()),
            None => Recovery::Length(self.occupancy),
        }
    }

    /// Like [`recovery`](Self::recovery) without cloning the key list.
    pub fn into_recovery(self) -> Recovery {
        match self.keys {
            Some(keys) => Recovery::Keys(keys),
            None => Recovery::Length(self.occupancy),
        }
    }
}

/// Embed `bits` into the container's LSBs in reverse raster order.
///
/// Capacity is checked before the first write, so on
/// [`Error::CapacityExceeded`] the container is untouched. Slots past the
/// last bit keep their cover values.
pub fn embed(
    container: &mut PixelContainer,
    bits: &MessageBits,
    addressing: Addressing,
) -> Result<Embedding> {
    capacity::validate(bits.len(), container.capacity_bits())?;

    let embedding = write_bits(container, bits, addressing)?;
    log::info!(
        "Embedded {} bits into {}x{} container ({:?} addressing)",
        embedding.occupancy,
        container.height(),
        container.width(),
        addressing
    );
    Ok(embedding)
}

fn write_bits(
    container: &mut PixelContainer,
    bits: &MessageBits,
    addressing: Addressing,
) -> Result<Embedding> {
    let mut keys = match addressing {
        Addressing::KeyList => Some(Vec::with_capacity(bits.len())),
        Addressing::Contiguous => None,
    };
    let mut queue = bits.iter();
    let mut occupancy = 0;

    for key in ReverseRaster::new(container.height(), container.width()) {
        let Some(bit) = queue.next() else {
            break;
        };

        let slot = container.get(key.row, key.column, key.channel);
        let value = (slot & CLEAR_LSB_MASK) | bit as u8;
        container.set(key.row, key.column, key.channel, value);

        if let Some(keys) = keys.as_mut() {
            keys.push(key);
        }
        occupancy += 1;
    }

    let remaining = bits.len() - occupancy;
    if remaining > 0 {
        return Err(Error::ContainerOverflow { remaining });
    }

    Ok(Embedding { occupancy, keys })
}
