//! Keys command implementation.
//!
//! Lists the secret key of every dump in a directory, to pick a key donor.

use std::path::Path;

use anyhow::Result;
use g3vcu_core::{Dump, FieldEditor, FirmwareProfile, SecretKey, validate_header_file};
use tracing::warn;

use crate::files::list_bin_files;

/// Key information for one file
#[derive(Debug)]
pub struct KeyEntry {
    pub name: String,
    pub header_ok: bool,
    pub key: Result<SecretKey, String>,
}

/// Read the key of every `.bin` file in `dir`
pub fn collect_keys(dir: &Path, profile: &FirmwareProfile) -> Vec<KeyEntry> {
    let editor = FieldEditor::new(&profile.table);

    list_bin_files(dir)
        .into_iter()
        .map(|name| {
            let path = dir.join(&name);
            let header_ok = validate_header_file(&path, &profile.header).unwrap_or_else(|e| {
                warn!("Cannot check header of {}: {}", path.display(), e);
                false
            });
            let key = Dump::load(&path)
                .and_then(|dump| editor.secret_key(dump.as_bytes()))
                .map_err(|e| e.to_string());
            KeyEntry {
                name,
                header_ok,
                key,
            }
        })
        .collect()
}

/// Run the keys command
pub fn run(dir: &Path, profile: &FirmwareProfile) -> Result<()> {
    let entries = collect_keys(dir, profile);
    if entries.is_empty() {
        println!("No .bin files found in {}", dir.display());
        return Ok(());
    }

    for entry in &entries {
        println!();
        let note = if entry.header_ok { "" } else { " (header mismatch)" };
        println!("{}{}", entry.name, note);
        match &entry.key {
            Ok(key) => {
                println!("  Key (hex):    {}", key.to_hex());
                println!("  Key (base64): {}", key.to_base64());
            }
            Err(e) => println!("  Key unavailable: {}", e),
        }
    }

    Ok(())
}
