//! In-memory pixel grid that carries the hidden message.

use crate::config::CHANNELS;
use crate::error::{Error, Result};

/// A `height × width × 3` grid of 8-bit channel values, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelContainer {
    height: usize,
    width: usize,
    data: Vec<u8>,
}

impl PixelContainer {
    /// Wrap an existing row-major RGB buffer.
    pub fn from_raw(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        let expected = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                Error::InvalidContainer(format!("{}x{} overflows usize", height, width))
            })?;

        if data.len() != expected {
            return Err(Error::InvalidContainer(format!(
                "{}x{}x{} needs {} bytes, got {}",
                height,
                width,
                CHANNELS,
                expected,
                data.len()
            )));
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Create a container with every channel set to `value`.
    pub fn filled(height: usize, width: usize, value: u8) -> Self {
        Self {
            height,
            width,
            data: vec![value; height * width * CHANNELS],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, CHANNELS)
    }

    /// Number of channel slots, which is also the capacity in bits.
    pub fn capacity_bits(&self) -> usize {
        self.data.len()
    }

    /// Whether `(row, column, channel)` addresses a slot in this grid.
    pub fn contains(&self, row: usize, column: usize, channel: usize) -> bool {
        row < self.height && column < self.width && channel < CHANNELS
    }

    /// Read one channel value. Panics if out of range.
    pub fn get(&self, row: usize, column: usize, channel: usize) -> u8 {
        self.data[self.offset(row, column, channel)]
    }

    /// Write one channel value. Panics if out of range.
    pub fn set(&mut self, row: usize, column: usize, channel: usize, value: u8) {
        let offset = self.offset(row, column, channel);
        self.data[offset] = value;
    }

    /// Raw row-major channel values.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the container, returning the raw buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, row: usize, column: usize, channel: usize) -> usize {
        assert!(
            self.contains(row, column, channel),
            "slot ({}, {}, {}) outside {}x{} container",
            row,
            column,
            channel,
            self.height,
            self.width
        );
        (row * self.width + column) * CHANNELS + channel
    }
}
