use anyhow::{bail, Result};
use serde::Serialize;

use super::helpers;
use crate::output::{print_error, print_json, print_success, OutputMode};

#[derive(clap::Args)]
pub struct ValidateArgs {
    #[arg(help = "Events file (object, array or JSON lines), '-' for stdin")]
    input: String,
}

#[derive(Debug, Serialize)]
struct Invalid {
    record: usize,
    error: String,
}

#[derive(Debug, Serialize)]
struct Report {
    total: usize,
    valid: usize,
    invalid: Vec<Invalid>,
}

pub fn execute(args: ValidateArgs, mode: OutputMode) -> Result<()> {
    let input = helpers::read_input(&args.input)?;
    let records = helpers::parse_events(&input);

    let total = records.len();
    let invalid: Vec<Invalid> = records
        .into_iter()
        .filter_map(|r| {
            r.event.err().map(|e| Invalid {
                record: r.index,
                error: e.to_string(),
            })
        })
        .collect();
    let report = Report {
        total,
        valid: total - invalid.len(),
        invalid,
    };

    match mode {
        OutputMode::Json => print_json(&report)?,
        OutputMode::Human => {
            for bad in &report.invalid {
                print_error(&format!("record {}: {}", bad.record, bad.error));
            }
            if report.invalid.is_empty() {
                print_success(&format!("{} events valid", report.total));
            }
        }
    }

    if !report.invalid.is_empty() {
        bail!("{} of {} records invalid", report.invalid.len(), report.total);
    }
    Ok(())
}
