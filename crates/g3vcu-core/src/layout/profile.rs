use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use super::{OffsetTable, ReferenceHeader, g3};
use crate::error::{Error, Result};

/// Firmware releases with a known dump layout
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
pub enum FirmwareVersion {
    #[strum(serialize = "1.4.8")]
    #[serde(rename = "1.4.8")]
    V148,
    #[strum(serialize = "1.5.4")]
    #[serde(rename = "1.5.4")]
    V154,
    #[default]
    #[strum(serialize = "1.5.5")]
    #[serde(rename = "1.5.5")]
    V155,
}

impl FirmwareVersion {
    /// Parse a version string such as "1.5.5"
    pub fn parse(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map_err(|_| Error::UnknownFirmware(value.trim().to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// File name of the stock template dump shipped for this release
    pub fn template_file(&self) -> &'static str {
        match self {
            Self::V148 => "MEMORY_G3_1CGBC0000C0000_1.4.8_0.bin",
            Self::V154 => "MEMORY_G3_1CGCC00007C0000_1.5.4.bin",
            Self::V155 => "MEMORY_G3_1CGCC1234C1234_1.5.5.bin",
        }
    }

    /// Older template bundles spell the 1.5.4 name with a Cyrillic "С"
    pub fn legacy_template_file(&self) -> Option<&'static str> {
        match self {
            Self::V154 => Some("MEMORY_G3_1CGC\u{0421}00007C0000_1.5.4.bin"),
            _ => None,
        }
    }

    /// Releases that have not been verified on hardware
    pub fn is_beta(&self) -> bool {
        matches!(self, Self::V155)
    }
}

/// Everything needed to validate and patch dumps of one firmware layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareProfile {
    pub name: String,
    pub dump_size: usize,
    pub table: OffsetTable,
    pub header: ReferenceHeader,
}

impl FirmwareProfile {
    /// Builtin profile for a known firmware release
    pub fn builtin(version: FirmwareVersion) -> Result<Self> {
        // All supported releases share the 1.4.x layout
        Ok(Self {
            name: format!("MAX G3 {}", version),
            dump_size: g3::DUMP_SIZE,
            table: OffsetTable::default(),
            header: ReferenceHeader::g3()?,
        })
    }

    /// Check internal consistency: every field must fit in the dump
    pub fn check(&self) -> Result<()> {
        if self.table.mileage.is_empty() || self.table.speed.is_empty() {
            return Err(Error::InvalidProfile(
                "mileage and speed need at least one offset each".to_string(),
            ));
        }
        let required = self.table.required_len().ok_or_else(|| {
            Error::InvalidProfile("field offset overflows the address space".to_string())
        })?;
        if required > self.dump_size {
            return Err(Error::InvalidProfile(format!(
                "fields end at {:#x} but dump size is {:#x}",
                required, self.dump_size
            )));
        }
        if self.header.len() > self.dump_size {
            return Err(Error::InvalidProfile(format!(
                "header of {} bytes exceeds dump size {:#x}",
                self.header.len(),
                self.dump_size
            )));
        }
        let serial = &self.table.serial;
        if serial.prefix.is_empty() || serial.prefix.len() > serial.length {
            return Err(Error::InvalidProfile(format!(
                "serial prefix {:?} does not fit a {}-byte serial",
                serial.prefix, serial.length
            )));
        }
        if serial.sentinel.len() != serial.length {
            return Err(Error::InvalidProfile(format!(
                "serial sentinel {:?} is not {} bytes",
                serial.sentinel, serial.length
            )));
        }
        Ok(())
    }
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<FirmwareProfile> {
    let content = fs::read_to_string(&path)?;
    let profile: FirmwareProfile = serde_json::from_str(&content)?;
    profile.check()?;
    debug!("Loaded profile {:?} from {}", profile.name, path.as_ref().display());
    Ok(profile)
}

pub fn save_profile<P: AsRef<Path>>(path: P, profile: &FirmwareProfile) -> Result<()> {
    let content = serde_json::to_string_pretty(profile)?;
    fs::write(path, content)?;
    Ok(())
}
