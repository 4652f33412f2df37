//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod hex_utils;
pub mod hexdump;
pub mod keys;
pub mod patch;
pub mod profile;
pub mod template;
pub mod verify;

use anyhow::{Context, Result};
use g3vcu_core::{FirmwareProfile, FirmwareVersion, load_profile};
use tracing::debug;

use crate::cli::ProfileArgs;

/// Resolve the layout profile: a JSON file wins over the builtin release
pub fn resolve_profile(args: &ProfileArgs) -> Result<FirmwareProfile> {
    if let Some(path) = &args.profile {
        debug!("Loading profile from {}", path.display());
        return load_profile(path)
            .with_context(|| format!("Failed to load profile {}", path.display()));
    }
    let version = FirmwareVersion::parse(&args.firmware)?;
    Ok(FirmwareProfile::builtin(version)?)
}
