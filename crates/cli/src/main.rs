mod cmd;
mod config;
mod output;
#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use cmd::Commands;
use config::{CliConfig, OutputPref};
use output::OutputMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alarm", version, about = "Inspect alarm events")]
pub struct Opts {
    #[clap(subcommand)]
    cmd: Commands,

    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, help = "Path to CLI config file")]
    config: Option<String>,
}

impl Opts {
    pub fn output_mode(&self, cfg: &CliConfig) -> OutputMode {
        if self.json || cfg.output == OutputPref::Json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let cfg = cmd::helpers::load_config(opts.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(log_level = %cfg.log_level, "config loaded");
    cmd::run(opts, cfg)
}
