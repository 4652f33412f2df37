use std::fs;
use std::path::Path;

use serde::Serialize;

use super::Dump;
use crate::editor::FieldEditor;
use crate::error::{Error, Result};
use crate::layout::FirmwareProfile;
use crate::serial::{SerialOccurrence, find_serials};
use crate::validate;

/// Read-only summary of a dump, for verify mode and diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct DumpReport {
    pub profile: String,
    pub file: Option<String>,
    pub size: usize,
    pub expected_size: usize,
    pub size_ok: bool,
    pub header_ok: bool,
    /// First differing header byte, when the size is right but the header is not
    pub header_mismatch_at: Option<usize>,
    pub serials: Vec<SerialOccurrence>,
    pub mileage: Option<Vec<u16>>,
    pub speeds: Option<Vec<u8>>,
    pub secret_key: Option<KeySample>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeySample {
    pub hex: String,
    pub base64: String,
}

impl DumpReport {
    pub fn from_dump(dump: &Dump, profile: &FirmwareProfile) -> Self {
        let buf = dump.as_bytes();
        let editor = FieldEditor::new(&profile.table);

        let size_ok = validate::check_size(buf, profile.dump_size).is_ok();
        // Size is checked first; a wrongly sized dump has no header verdict
        let header_mismatch_at = match validate::check_header(buf, &profile.header) {
            Err(Error::HeaderMismatch { offset }) if size_ok => Some(offset),
            _ => None,
        };

        Self {
            profile: profile.name.clone(),
            file: dump.path().map(|p| p.display().to_string()),
            size: buf.len(),
            expected_size: profile.dump_size,
            size_ok,
            header_ok: size_ok && header_mismatch_at.is_none(),
            header_mismatch_at,
            serials: find_serials(buf, &profile.table.serial),
            mileage: editor
                .mileage(buf)
                .ok()
                .map(|values| values.into_iter().map(|m| m.0).collect()),
            speeds: editor.speeds(buf).ok(),
            secret_key: editor.secret_key(buf).ok().map(|key| KeySample {
                hex: key.to_hex(),
                base64: key.to_base64(),
            }),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.size_ok && self.header_ok
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
