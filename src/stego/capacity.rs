//! Capacity checks.

use crate::config::{BITS_PER_BYTE, CHANNELS};
use crate::error::{Error, Result};

/// Bits a `height × width` RGB container can hold.
pub fn capacity_bits(height: usize, width: usize) -> usize {
    height * width * CHANNELS
}

/// Whole message bytes a `height × width` RGB container can hold.
pub fn capacity_bytes(height: usize, width: usize) -> usize {
    capacity_bits(height, width) / BITS_PER_BYTE
}

/// Fail with [`Error::CapacityExceeded`] if `bit_count` does not fit.
pub fn validate(bit_count: usize, capacity_bits: usize) -> Result<()> {
    if bit_count > capacity_bits {
        log::debug!(
            "Capacity check failed: {} bits into {} slots",
            bit_count,
            capacity_bits
        );
        return Err(Error::CapacityExceeded {
            needed: bit_count,
            available: capacity_bits,
        });
    }
    Ok(())
}
