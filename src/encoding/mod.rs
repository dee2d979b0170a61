//! Message bit codec.
//!
//! Messages are byte sequences; each byte becomes eight bits, most
//! significant first. Text is reassembled from the decoded bytes as a
//! whole, never character by character, so multi-byte characters survive.

mod bits;
mod text;

pub use bits::{decode, encode, MessageBits};
pub use text::{decode_text, encode_text};
