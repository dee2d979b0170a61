//! Error types for LSB steganography.

use crate::stego::AddressKey;
use thiserror::Error;

/// Result type alias for steganography operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A metric whose denominator evaluated to zero.
///
/// Kept separate from [`Error`] so a metrics report can carry one
/// degenerate metric next to the ones that were computed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{metric} is undefined: denominator is zero")]
pub struct DegenerateMetric {
    /// Name of the metric.
    pub metric: &'static str,
}

/// Errors that can occur while embedding, extracting or scoring.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster decode or encode failure.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Message does not fit in the container.
    #[error("Message too large: need {needed} bits, container holds {available} bits")]
    CapacityExceeded { needed: usize, available: usize },

    /// Traversal ended with bits still queued.
    #[error("Container overflow: {remaining} bits left after a full traversal")]
    ContainerOverflow { remaining: usize },

    /// Bit sequence cannot be grouped into whole bytes.
    #[error("Malformed bit stream: {len} bits is not a multiple of 8")]
    MalformedBitStream { len: usize },

    /// Bit string contained something other than '0' or '1'.
    #[error("Invalid bit character: {0:?}")]
    InvalidBit(char),

    /// A key file line is not three decimal integers.
    #[error("Malformed key file at line {line}: {reason}")]
    MalformedKeyFile { line: usize, reason: String },

    /// A key references a slot outside the container.
    #[error("Address {key} out of range for a {height}x{width} container")]
    AddressOutOfRange {
        key: AddressKey,
        height: usize,
        width: usize,
    },

    /// Cover and stego containers have different shapes.
    #[error("Dimension mismatch: cover is {cover:?}, stego is {stego:?}")]
    DimensionMismatch {
        cover: (usize, usize, usize),
        stego: (usize, usize, usize),
    },

    /// A metric denominator is zero.
    #[error(transparent)]
    DegenerateMetric(#[from] DegenerateMetric),

    /// Pixel buffer length does not match the declared dimensions.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Recovered bytes are not valid text in the declared encoding.
    #[error("Invalid text: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
