//! Binary layout of VCU memory dumps
//!
//! This module centralizes the byte offsets, widths and encodings of every
//! field the patcher touches. Constants are grouped per firmware family and
//! wrapped in [`OffsetTable`] / [`FirmwareProfile`] values so that callers
//! never reach for them directly.

mod header;
mod profile;

pub use header::*;
pub use profile::*;

use serde::{Deserialize, Serialize};

/// Layout constants for the MAX G3 VCU dump (firmware 1.4.x / 1.5.x)
pub mod g3 {
    /// Exact size of a full dump (128 KiB)
    pub const DUMP_SIZE: usize = 0x20000;

    /// ASCII prefix shared by every serial number
    pub const SERIAL_PREFIX: &[u8; 3] = b"1CG";
    /// Placeholder serial present in every image; never replaced
    pub const SERIAL_SENTINEL: &[u8; 14] = b"1CGC0000000001";
    /// Serial number width in bytes
    pub const SERIAL_LEN: usize = 14;

    // Odometer records (u16 little-endian, units of 100 m)
    pub const MILEAGE_A: usize = 0x0001_F0C4;
    pub const MILEAGE_B: usize = 0x0001_F4C4;

    // Speed limit bytes (two per config block)
    pub const SPEED: [usize; 4] = [0x1F08D, 0x1F091, 0x1F48D, 0x1F491];

    pub const SECRET_KEY: usize = 0x1F5B4;
    pub const SECRET_KEY_LEN: usize = 12;

    // Accepted operator input ranges
    pub const MILEAGE_MAX: u32 = 0xFFFF;
    pub const SPEED_MIN: u32 = 1;
    pub const SPEED_MAX: u32 = 125;
}

/// How the bytes of a field are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Encoding {
    RawAscii,
    U8,
    U16Le,
    RawBytes,
}

/// Descriptor of a single fixed-offset field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OffsetField {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub encoding: Encoding,
}

impl OffsetField {
    /// First offset past the field, `None` if it overflows
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.width)
    }
}

/// Serial number pattern: located by scanning rather than by offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialPattern {
    pub prefix: String,
    pub sentinel: String,
    pub length: usize,
}

impl SerialPattern {
    pub fn prefix_bytes(&self) -> &[u8] {
        self.prefix.as_bytes()
    }

    pub fn sentinel_bytes(&self) -> &[u8] {
        self.sentinel.as_bytes()
    }
}

impl Default for SerialPattern {
    fn default() -> Self {
        Self {
            prefix: String::from_utf8_lossy(g3::SERIAL_PREFIX).into_owned(),
            sentinel: String::from_utf8_lossy(g3::SERIAL_SENTINEL).into_owned(),
            length: g3::SERIAL_LEN,
        }
    }
}

/// Offsets of every patchable field in a dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetTable {
    /// Redundant odometer records, always written together
    pub mileage: Vec<usize>,
    /// Speed limit bytes, always written together
    pub speed: Vec<usize>,
    pub secret_key: usize,
    #[serde(default = "default_key_len")]
    pub secret_key_len: usize,
    #[serde(default)]
    pub serial: SerialPattern,
}

fn default_key_len() -> usize {
    g3::SECRET_KEY_LEN
}

impl Default for OffsetTable {
    fn default() -> Self {
        Self {
            mileage: vec![g3::MILEAGE_A, g3::MILEAGE_B],
            speed: g3::SPEED.to_vec(),
            secret_key: g3::SECRET_KEY,
            secret_key_len: g3::SECRET_KEY_LEN,
            serial: SerialPattern::default(),
        }
    }
}

impl OffsetTable {
    /// Secret key field descriptor
    pub fn key_field(&self) -> OffsetField {
        OffsetField {
            name: "secret_key",
            offset: self.secret_key,
            width: self.secret_key_len,
            encoding: Encoding::RawBytes,
        }
    }

    /// All fixed-offset fields, in a stable order
    pub fn fields(&self) -> Vec<OffsetField> {
        const MILEAGE_NAMES: [&str; 2] = ["mileage_a", "mileage_b"];
        const SPEED_NAMES: [&str; 4] = ["speed_0", "speed_1", "speed_2", "speed_3"];

        let mileage = self.mileage.iter().enumerate().map(|(i, &offset)| OffsetField {
            name: MILEAGE_NAMES.get(i).copied().unwrap_or("mileage"),
            offset,
            width: 2,
            encoding: Encoding::U16Le,
        });
        let speed = self.speed.iter().enumerate().map(|(i, &offset)| OffsetField {
            name: SPEED_NAMES.get(i).copied().unwrap_or("speed"),
            offset,
            width: 1,
            encoding: Encoding::U8,
        });

        mileage
            .chain(speed)
            .chain(std::iter::once(self.key_field()))
            .collect()
    }

    /// Smallest buffer length that holds every fixed field.
    ///
    /// `None` when a field end overflows `usize`.
    pub fn required_len(&self) -> Option<usize> {
        self.fields()
            .iter()
            .map(OffsetField::end)
            .try_fold(0, |acc, end| end.map(|end| acc.max(end)))
    }
}
