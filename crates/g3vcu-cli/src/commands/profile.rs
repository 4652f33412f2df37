//! Profile command implementation.

use std::path::Path;

use anyhow::Result;
use g3vcu_core::{FirmwareProfile, save_profile};

/// Print or save the active profile, as a starting point for custom layouts
pub fn run(output: Option<&Path>, profile: &FirmwareProfile) -> Result<()> {
    match output {
        Some(path) => {
            save_profile(path, profile)?;
            eprintln!("Profile written to: {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(profile)?),
    }
    Ok(())
}
