//! Text messages on top of the byte codec.

use super::bits::{decode, encode, MessageBits};
use crate::config::TextEncoding;
use crate::error::Result;

/// Encode text to bits under the given encoding.
pub fn encode_text(message: &str, encoding: TextEncoding) -> MessageBits {
    match encoding {
        TextEncoding::Utf8 => encode(message.as_bytes()),
    }
}

/// Decode bits to bytes, then the whole byte sequence to text.
pub fn decode_text(bits: &MessageBits, encoding: TextEncoding) -> Result<String> {
    let bytes = decode(bits)?;
    match encoding {
        TextEncoding::Utf8 => Ok(String::from_utf8(bytes)?),
    }
}
