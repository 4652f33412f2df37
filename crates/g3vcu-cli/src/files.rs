//! Discovery of candidate dump files

use std::fs;
use std::path::Path;

use g3vcu_core::PATCHED_SUFFIX;
use tracing::debug;

fn is_bin(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".bin")
}

/// `.bin` files in `dir`, sorted by name.
///
/// Previous outputs (`*.patched.bin`) are left out so they are never offered
/// as the default input. An unreadable directory yields an empty list.
pub fn list_bin_files(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_bin(name) && !name.ends_with(PATCHED_SUFFIX))
        .collect();
    names.sort();
    names
}
