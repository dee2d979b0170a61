//! Slot visitation order shared by embedding and length-replay extraction.

use super::keys::AddressKey;
use crate::config::CHANNELS;

/// Reverse raster scan: rows last to first, columns last to first,
/// channels 0..3 within each pixel.
#[derive(Debug, Clone)]
pub struct ReverseRaster {
    width: usize,
    pixels: usize,
    next: usize,
    end: usize,
}

impl ReverseRaster {
    pub fn new(height: usize, width: usize) -> Self {
        let pixels = height * width;
        Self {
            width,
            pixels,
            next: 0,
            end: pixels * CHANNELS,
        }
    }

    fn key_at(&self, step: usize) -> AddressKey {
        let pixel = self.pixels - 1 - step / CHANNELS;
        AddressKey::new(pixel % self.width, pixel / self.width, step % CHANNELS)
    }
}

impl Iterator for ReverseRaster {
    type Item = AddressKey;

    fn next(&mut self) -> Option<AddressKey> {
        if self.next >= self.end {
            return None;
        }
        let key = self.key_at(self.next);
        self.next += 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ReverseRaster {}
