//! Template command implementation.
//!
//! Builds a dump for a new unit from a stock template of the chosen firmware
//! release instead of the unit's own dump.

use std::path::Path;

use anyhow::{Context, Result};
use g3vcu_core::{
    FirmwareProfile, FirmwareVersion, Session, choose_firmware, load_profile, template_path,
};

use crate::cli::ProfileArgs;
use crate::prompter::CliPrompter;

/// Run the template command
pub fn run(
    release: Option<&str>,
    template_dir: &Path,
    output_dir: &Path,
    profile_args: &ProfileArgs,
) -> Result<()> {
    let prompter = CliPrompter;

    let version = match release {
        Some(release) => FirmwareVersion::parse(release)?,
        None => choose_firmware(&prompter)?,
    };

    // The template's own release decides the layout unless a file is given
    let profile = match &profile_args.profile {
        Some(path) => load_profile(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?,
        None => FirmwareProfile::builtin(version)?,
    };

    let session = Session::new(&profile, &prompter);
    session
        .run_template(version, template_dir, output_dir)
        .with_context(|| {
            format!(
                "Template {} failed",
                template_path(template_dir, version).display()
            )
        })?;
    Ok(())
}
