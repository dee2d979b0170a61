//! LSB Image Steganography
//!
//! Hides a byte-oriented message in the least-significant bits of an RGB
//! image's channel values, recovers it losslessly, and scores the visual
//! fidelity cost of hiding it.
//!
//! # Features
//!
//! - **Reverse raster embedding**: one deterministic traversal shared by
//!   embed and extract
//! - **Two recovery modes**: replay the traversal for a known occupancy,
//!   or read back an explicit address key list
//! - **Fidelity metrics**: max absolute deviation, MSE, NMSE, SNR, PSNR, UQI
//! - **CLI Interface**: embed, extract, metrics, capacity
//!
//! No encryption is applied: anyone running the same algorithm recovers
//! the message.
//!
//! # Architecture
//!
//! ```text
//! Message → BitCodec → Capacity check → Embed → Stego container (+ keys)
//! Stego container + (occupancy | keys) → Extract → BitCodec → Message
//! ```
//!
//! # Example
//!
//! ```rust
//! use lsb_stego::config::{Addressing, StegoConfig};
//! use lsb_stego::{metrics, PixelContainer, Steganographer};
//!
//! let stego = Steganographer::new(StegoConfig::new(Addressing::KeyList)).unwrap();
//!
//! let cover = PixelContainer::filled(16, 16, 200);
//! let mut container = cover.clone();
//! let embedding = stego.embed_message(&mut container, "Hidden data").unwrap();
//!
//! let message = stego.extract_message(&container, &embedding.recovery()).unwrap();
//! assert_eq!(message, "Hidden data");
//!
//! let report = metrics::compute(&cover, &container).unwrap();
//! assert!(report.max_abs_deviation <= 1);
//! ```

pub mod config;
pub mod container;
pub mod encoding;
pub mod error;
pub mod image_io;
pub mod metrics;
pub mod stego;

pub use config::StegoConfig;
pub use container::PixelContainer;
pub use error::{DegenerateMetric, Error, Result};
pub use metrics::MetricsReport;
pub use stego::{AddressKey, Embedding, Recovery, Steganographer};
