mod cli;
mod commands;
mod files;
mod prompter;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, PatchArgs};

/// Default log levels, added on top of `RUST_LOG`
const DEFAULT_DIRECTIVES: [&str; 2] = ["g3vcu=info", "g3vcu_core=info"];

fn with_defaults(mut filter: EnvFilter) -> Result<EnvFilter> {
    for directive in DEFAULT_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(with_defaults(EnvFilter::from_default_env())?)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => commands::patch::run(PatchArgs::default(), &commands::resolve_profile(&cli.profile)?),
        Some(Command::Patch(args)) => {
            commands::patch::run(args, &commands::resolve_profile(&cli.profile)?)
        }
        Some(Command::Verify { file, json, output }) => commands::verify::run(
            &file,
            json,
            output.as_deref(),
            &commands::resolve_profile(&cli.profile)?,
        ),
        Some(Command::Template {
            release,
            dir,
            output,
        }) => commands::template::run(release.as_deref(), &dir, &output, &cli.profile),
        Some(Command::Keys { dir }) => {
            commands::keys::run(&dir, &commands::resolve_profile(&cli.profile)?)
        }
        Some(Command::Hexdump {
            file,
            offset,
            size,
            ascii,
        }) => commands::hexdump::run(&file, &offset, size, ascii),
        Some(Command::Profile { output }) => {
            commands::profile::run(output.as_deref(), &commands::resolve_profile(&cli.profile)?)
        }
    }
}
