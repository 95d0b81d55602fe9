use alarm_common::{Event, EventError};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use crate::config::{load_from_file, CliConfig};

pub fn default_config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        return dir.join("alarm").join("alarm.yml");
    }
    PathBuf::from("/etc/alarm/alarm.yml")
}

/// An explicit path must exist; the default path is optional.
pub fn load_config(config_path: Option<&str>) -> Result<CliConfig> {
    let path = match config_path {
        Some(p) => PathBuf::from(p),
        None => {
            let path = default_config_path();
            if !path.exists() {
                return Ok(CliConfig::default());
            }
            path
        }
    };

    load_from_file(&path).with_context(|| format!("loading config from {}", path.display()))
}

pub fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading events from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).with_context(|| format!("reading events from {source}"))
}

#[derive(Debug)]
pub struct Record {
    pub index: usize,
    pub event: Result<Event, EventError>,
}

/// Accepts a single object, a JSON array, or whitespace separated objects
/// (JSON lines). Parsing stops at the first syntax error, which is reported
/// as the last record.
pub fn parse_events(input: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let stream = serde_json::Deserializer::from_str(input).into_iter::<serde_json::Value>();

    for value in stream {
        match value {
            Ok(serde_json::Value::Array(items)) => {
                for item in items {
                    let index = records.len() + 1;
                    records.push(Record {
                        index,
                        event: decode(item),
                    });
                }
            }
            Ok(item) => {
                let index = records.len() + 1;
                records.push(Record {
                    index,
                    event: decode(item),
                });
            }
            Err(e) => {
                let index = records.len() + 1;
                records.push(Record {
                    index,
                    event: Err(EventError::Decode(e)),
                });
                break;
            }
        }
    }

    records
}

fn decode(value: serde_json::Value) -> Result<Event, EventError> {
    Event::from_value(value)
}

pub fn load_events(source: &str) -> Result<Vec<Event>> {
    let input = read_input(source)?;
    let records = parse_events(&input);
    let total = records.len();

    let events: Vec<Event> = records
        .into_iter()
        .filter_map(|r| match r.event {
            Ok(ev) => Some(ev),
            Err(e) => {
                tracing::warn!(record = r.index, error = %e, "skipping invalid event");
                None
            }
        })
        .collect();

    tracing::debug!(total, valid = events.len(), source, "events loaded");
    Ok(events)
}
