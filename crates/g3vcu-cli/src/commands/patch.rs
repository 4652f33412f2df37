//! Patch command implementation.

use std::path::Path;

use anyhow::Result;
use g3vcu_core::{Error, FirmwareProfile, PatchPlan, Session, SessionOutcome, choose_input};
use tracing::info;

use crate::cli::PatchArgs;
use crate::files::list_bin_files;
use crate::prompter::CliPrompter;

fn plan_from_args(args: &PatchArgs) -> PatchPlan {
    PatchPlan {
        serial: args.serial.clone(),
        mileage: args.mileage.clone(),
        speed: args.speed.clone(),
        key_source: args.key_from.clone(),
    }
}

/// Value flags (or --yes) switch to batch mode; otherwise every edit is asked for
fn is_batch(args: &PatchArgs, plan: &PatchPlan) -> bool {
    args.yes || !plan.is_empty()
}

/// Name the input when it is not a usable dump at all
fn describe_failure(err: Error, input: &Path) -> anyhow::Error {
    if err.is_corrupt_dump() {
        anyhow::Error::new(err).context(format!(
            "{} is not a valid G3 VCU dump, nothing was written",
            input.display()
        ))
    } else {
        err.into()
    }
}

/// Run the patch command
pub fn run(args: PatchArgs, profile: &FirmwareProfile) -> Result<()> {
    let prompter = CliPrompter;

    let input = match &args.file {
        Some(file) => file.clone(),
        None => choose_input(&prompter, &list_bin_files(Path::new(".")))?,
    };

    let session = Session::new(profile, &prompter);
    let plan = plan_from_args(&args);

    let outcome = if args.verify {
        session.run(&input, true)
    } else if is_batch(&args, &plan) {
        session.run_batch(&input, &plan)
    } else {
        session.run(&input, false)
    }
    .map_err(|e| describe_failure(e, &input))?;

    match outcome {
        SessionOutcome::Verified { serials } => {
            info!("Verified {} ({} serials)", input.display(), serials.len());
        }
        SessionOutcome::Saved { path, edits } => {
            info!("Saved {} with {} edit(s)", path.display(), edits.len());
        }
    }
    Ok(())
}
