//! Address keys and the key file format.
//!
//! A key file is UTF-8 text with one line per embedded bit, each line
//! `"<column> <row> <channel>"`. Line order is embedding order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Location of one embedded bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressKey {
    pub column: usize,
    pub row: usize,
    pub channel: usize,
}

impl AddressKey {
    pub fn new(column: usize, row: usize, channel: usize) -> Self {
        Self {
            column,
            row,
            channel,
        }
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.row, self.channel)
    }
}

/// Render keys in key file format.
pub fn format_keys(keys: &[AddressKey]) -> String {
    let mut out = String::with_capacity(keys.len() * 8);
    for key in keys {
        out.push_str(&key.to_string());
        out.push('\n');
    }
    out
}

/// Parse key file text.
pub fn parse_keys(text: &str) -> Result<Vec<AddressKey>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}

/// Write keys to any writer, one per line.
pub fn write_keys<W: Write>(writer: &mut W, keys: &[AddressKey]) -> Result<()> {
    for key in keys {
        writeln!(writer, "{}", key)?;
    }
    Ok(())
}

/// Read keys from a buffered reader.
pub fn read_keys<R: BufRead>(reader: R) -> Result<Vec<AddressKey>> {
    let mut keys = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => Error::MalformedKeyFile {
                line: idx + 1,
                reason: "not valid UTF-8".to_string(),
            },
            _ => Error::Io(e),
        })?;
        keys.push(parse_line(idx + 1, &line)?);
    }
    Ok(keys)
}

/// Persist keys to a file.
pub fn save_keys(path: &Path, keys: &[AddressKey]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_keys(&mut writer, keys)?;
    writer.flush()?;
    log::debug!("Saved {} address keys to {}", keys.len(), path.display());
    Ok(())
}

/// Load keys from a file.
pub fn load_keys(path: &Path) -> Result<Vec<AddressKey>> {
    let keys = read_keys(BufReader::new(File::open(path)?))?;
    log::debug!("Loaded {} address keys from {}", keys.len(), path.display());
    Ok(keys)
}

fn parse_line(line: usize, text: &str) -> Result<AddressKey> {
    let malformed = |reason: String| Error::MalformedKeyFile { line, reason };

    let fields: Vec<&str> = text.split(' ').collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "expected 3 space-separated integers, found {} fields",
            fields.len()
        )));
    }

    let mut values = [0usize; 3];
    for (value, field) in values.iter_mut().zip(&fields) {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(format!("{:?} is not a decimal integer", field)));
        }
        *value = field
            .parse()
            .map_err(|_| malformed(format!("{:?} is out of range", field)))?;
    }

    Ok(AddressKey::new(values[0], values[1], values[2]))
}
