//! High-level field edits on a dump buffer
//!
//! Every operation validates its textual input and all offsets before the
//! first write, so a failed edit leaves the buffer exactly as it was.
//! Successful edits return a small report whose `Display` is the operator
//! confirmation line.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use tracing::info;

use crate::buffer::{
    format_hex_bytes, read_byte, read_bytes, read_u16_le, write_byte, write_bytes, write_u16_le,
};
use crate::error::{Error, KeySide, Result};
use crate::layout::{OffsetTable, g3};
use crate::serial::SerialScanner;

/// Secret key bytes with hex / base64 renderings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format_hex_bytes(&self.0)
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (base64: {})", self.to_hex(), self.to_base64())
    }
}

/// Odometer value in the dump's native unit (100 m)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mileage(pub u16);

impl Mileage {
    pub fn km(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Mileage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} km)", self.0, self.km())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialChange {
    pub serial: String,
    pub count: usize,
}

impl fmt::Display for SerialChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Replaced {} serial number(s) with {}", self.count, self.serial)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MileageChange {
    pub before: Vec<Mileage>,
    pub after: Mileage,
}

impl fmt::Display for MileageChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mileage {} (0x{:04X}) written to {} locations",
            self.after,
            self.after.0,
            self.before.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedChange {
    pub before: Vec<u8>,
    pub after: u8,
}

impl fmt::Display for SpeedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Speed {} (0x{:02X}) written to {} offsets",
            self.after,
            self.after,
            self.before.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTransfer {
    pub before: SecretKey,
    pub after: SecretKey,
}

impl KeyTransfer {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

impl fmt::Display for KeyTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Old key (hex): {}", self.before.to_hex())?;
        writeln!(f, "Old key (base64): {}", self.before.to_base64())?;
        writeln!(f, "New key (hex): {}", self.after.to_hex())?;
        write!(f, "New key (base64): {}", self.after.to_base64())
    }
}

/// Parse a decimal integer and check it against an inclusive range
fn parse_in_range(field: &'static str, text: &str, min: u32, max: u32) -> Result<u32> {
    let input = text.trim();
    let out_of_range = || Error::InvalidRange {
        field,
        input: input.to_string(),
        min,
        max,
    };
    let value: i64 = input.parse().map_err(|_| out_of_range())?;
    if value < i64::from(min) || value > i64::from(max) {
        return Err(out_of_range());
    }
    u32::try_from(value).map_err(|_| out_of_range())
}

/// Normalize operator serial input: trimmed, uppercase, exact width, ASCII
pub fn normalize_serial(text: &str, length: usize) -> Result<String> {
    let serial = text.trim().to_uppercase();
    if !serial.is_ascii() || serial.len() != length {
        return Err(Error::InvalidFormat(format!(
            "{:?} (must be {} characters)",
            serial, length
        )));
    }
    Ok(serial)
}

/// Field-level editor bound to one offset table
#[derive(Debug, Clone, Copy)]
pub struct FieldEditor<'a> {
    table: &'a OffsetTable,
}

impl<'a> FieldEditor<'a> {
    pub fn new(table: &'a OffsetTable) -> Self {
        Self { table }
    }

    /// Current value of every odometer record
    pub fn mileage(&self, buf: &[u8]) -> Result<Vec<Mileage>> {
        self.table
            .mileage
            .iter()
            .map(|&offset| read_u16_le(buf, offset).map(Mileage))
            .collect()
    }

    /// Current value of every speed byte
    pub fn speeds(&self, buf: &[u8]) -> Result<Vec<u8>> {
        self.table
            .speed
            .iter()
            .map(|&offset| read_byte(buf, offset))
            .collect()
    }

    pub fn secret_key(&self, buf: &[u8]) -> Result<SecretKey> {
        let field = self.table.key_field();
        read_bytes(buf, field.offset, field.width).map(|bytes| SecretKey(bytes.to_vec()))
    }

    pub fn set_serial(&self, buf: &mut [u8], text: &str) -> Result<SerialChange> {
        let serial = normalize_serial(text, self.table.serial.length)?;
        let count = SerialScanner::new(&self.table.serial).replace(buf, serial.as_bytes())?;
        info!("Replaced {} serial number(s) with {}", count, serial);
        Ok(SerialChange { serial, count })
    }

    pub fn set_mileage(&self, buf: &mut [u8], text: &str) -> Result<MileageChange> {
        let value = parse_in_range("mileage", text, 0, g3::MILEAGE_MAX)?;
        let value = u16::try_from(value).map_err(|_| Error::InvalidRange {
            field: "mileage",
            input: text.trim().to_string(),
            min: 0,
            max: g3::MILEAGE_MAX,
        })?;

        // Reading first proves every record is in bounds
        let before = self.mileage(buf)?;
        for &offset in &self.table.mileage {
            write_u16_le(buf, offset, value)?;
        }
        info!("Mileage set to {}", value);
        Ok(MileageChange {
            before,
            after: Mileage(value),
        })
    }

    pub fn set_speed(&self, buf: &mut [u8], text: &str) -> Result<SpeedChange> {
        let value = parse_in_range("speed", text, g3::SPEED_MIN, g3::SPEED_MAX)?;
        // SPEED_MAX fits a byte
        let value = value as u8;

        let before = self.speeds(buf)?;
        for &offset in &self.table.speed {
            write_byte(buf, offset, value)?;
        }
        info!("Speed set to {}", value);
        Ok(SpeedChange {
            before,
            after: value,
        })
    }

    /// Copy the secret key window from `source` into `target`
    pub fn transfer_key(&self, target: &mut [u8], source: &[u8]) -> Result<KeyTransfer> {
        let field = self.table.key_field();
        let end = field.end().ok_or(Error::OutOfBounds {
            offset: field.offset,
            width: field.width,
            len: target.len(),
        })?;
        for (which, len) in [(KeySide::Source, source.len()), (KeySide::Target, target.len())] {
            if len < end {
                return Err(Error::TooSmall {
                    which,
                    offset: field.offset,
                    len,
                });
            }
        }

        let before = self.secret_key(target)?;
        let after = self.secret_key(source)?;
        write_bytes(target, field.offset, after.as_bytes())?;
        info!("Secret key transferred ({})", after.to_hex());
        Ok(KeyTransfer { before, after })
    }
}
