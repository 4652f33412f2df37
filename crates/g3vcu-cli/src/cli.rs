//! Command line definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "g3vcu")]
#[command(version, about = "Ninebot MAX G3 VCU dump tools")]
pub struct Cli {
    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Selects the dump layout
#[derive(Args, Clone)]
pub struct ProfileArgs {
    /// Builtin firmware layout (1.4.8, 1.5.4, 1.5.5)
    #[arg(long, global = true, default_value = "1.5.5")]
    pub firmware: String,

    /// JSON profile with a custom layout (overrides --firmware)
    #[arg(long, global = true, env = "G3VCU_PROFILE")]
    pub profile: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a dump and patch it (default)
    Patch(PatchArgs),

    /// Validate a dump and list its serial numbers without changing anything
    Verify {
        /// Dump file
        file: PathBuf,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Patch a stock template dump for a chosen firmware release
    Template {
        /// Firmware release (asked for when omitted)
        #[arg(long = "release")]
        release: Option<String>,

        /// Directory holding the template dumps
        #[arg(long, default_value = "DUMPS")]
        dir: PathBuf,

        /// Directory the patched file is written to
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Show the secret key of every .bin file in a directory
    Keys {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Display dump bytes in hexdump format
    Hexdump {
        /// Dump file
        file: PathBuf,

        /// Start offset (hex, e.g. 0x1F5B4)
        #[arg(long, default_value = "0")]
        offset: String,

        /// Number of bytes
        #[arg(long, default_value_t = 64)]
        size: usize,

        /// Show ASCII column
        #[arg(long)]
        ascii: bool,
    },

    /// Write the active layout profile as JSON
    Profile {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
pub struct PatchArgs {
    /// Dump file (asked for when omitted)
    pub file: Option<PathBuf>,

    /// Verify only: validate and list serials, write nothing
    #[arg(short = 'v', long)]
    pub verify: bool,

    /// New serial number (14 characters)
    #[arg(long)]
    pub serial: Option<String>,

    /// New mileage (0-65535, units of 100 m)
    #[arg(long)]
    pub mileage: Option<String>,

    /// New speed limit (1-125)
    #[arg(long)]
    pub speed: Option<String>,

    /// Dump to copy the secret key from
    #[arg(long)]
    pub key_from: Option<PathBuf>,

    /// Apply the given values without prompting
    #[arg(short, long)]
    pub yes: bool,
}
