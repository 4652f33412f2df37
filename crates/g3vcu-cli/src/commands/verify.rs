//! Verify command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use g3vcu_core::{Dump, DumpReport, FirmwareProfile};

/// Run the verify command
pub fn run(
    file: &Path,
    json: bool,
    output: Option<&Path>,
    profile: &FirmwareProfile,
) -> Result<()> {
    let dump = Dump::load(file)?;
    let report = DumpReport::from_dump(&dump, profile);

    if let Some(output_path) = output {
        report.save(output_path)?;
        println!("Report saved to: {}", output_path.display());
    } else if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", format_report(&report));
    }

    if !report.is_valid() {
        bail!("{} failed validation", file.display());
    }
    Ok(())
}

fn mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

/// Human-readable rendering of a report
pub fn format_report(report: &DumpReport) -> String {
    let mut lines = vec![
        "=== Dump Validation ===".to_string(),
        format!("Profile: {}", report.profile),
    ];
    if let Some(file) = &report.file {
        lines.push(format!("File:    {}", file));
    }
    lines.push(String::new());

    lines.push(format!(
        "  size      {} (expected {}) {}",
        report.size,
        report.expected_size,
        mark(report.size_ok)
    ));
    let header = match report.header_mismatch_at {
        Some(offset) => format!("mismatch at 0x{:X}", offset),
        None if report.size_ok => "ok".to_string(),
        None => "not checked".to_string(),
    };
    lines.push(format!("  header    {} {}", header, mark(report.header_ok)));

    lines.push(String::new());
    lines.push(format!("Serial numbers ({}):", report.serials.len()));
    for serial in &report.serials {
        lines.push(format!("  -> {} at 0x{:05X}", serial.as_text(), serial.offset));
    }

    if let Some(mileage) = &report.mileage {
        let values: Vec<String> = mileage
            .iter()
            .map(|m| format!("{} ({:.1} km)", m, f64::from(*m) / 10.0))
            .collect();
        lines.push(format!("Mileage: {}", values.join(", ")));
    }
    if let Some(speeds) = &report.speeds {
        lines.push(format!("Speed:   {:?}", speeds));
    }
    if let Some(key) = &report.secret_key {
        lines.push(format!("Key (hex):    {}", key.hex));
        lines.push(format!("Key (base64): {}", key.base64));
    }

    lines.push(String::new());
    lines.push(format!(
        "Overall: {}",
        if report.is_valid() {
            "Valid dump"
        } else {
            "Invalid or corrupted dump"
        }
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
