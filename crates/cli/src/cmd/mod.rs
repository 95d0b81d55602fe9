pub(crate) mod group;
pub(crate) mod helpers;
pub(crate) mod inspect;
mod validate;

use anyhow::Result;
use clap::Subcommand;

use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum Commands {
    /// Show every derived field of each event
    Inspect(inspect::InspectArgs),
    /// Group events by counter
    Group(group::GroupArgs),
    /// Check that every record is a well-formed event
    Validate(validate::ValidateArgs),
}

pub fn run(opts: crate::Opts, cfg: CliConfig) -> Result<()> {
    let mode = opts.output_mode(&cfg);
    match opts.cmd {
        Commands::Inspect(args) => inspect::execute(args, mode),
        Commands::Group(args) => group::execute(args, mode),
        Commands::Validate(args) => validate::execute(args, mode),
    }
}
