use alarm_common::utils::unix_ts_format;
use alarm_common::{AlarmLevel, Event};
use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;
use std::collections::BTreeMap;

use super::helpers;
use crate::output::{build_table, level_cell, print_json, print_success, theme, OutputMode};

#[derive(clap::Args)]
pub struct GroupArgs {
    #[arg(help = "Events file (object, array or JSON lines), '-' for stdin")]
    input: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub counter: String,
    pub events: usize,
    pub worst_level: AlarmLevel,
    pub last_status: &'static str,
    pub last_time: i64,
}

/// Rows are ordered by counter. On equal timestamps the later record wins
/// the "last" columns.
pub fn group_events(events: &[Event]) -> Vec<GroupRow> {
    let mut groups: BTreeMap<String, GroupRow> = BTreeMap::new();

    for ev in events {
        let counter = ev.counter();
        match groups.get_mut(&counter) {
            Some(row) => {
                row.events += 1;
                row.worst_level = row.worst_level.min(ev.alarm_level());
                if ev.event_time() >= row.last_time {
                    row.last_time = ev.event_time();
                    row.last_status = ev.status_string();
                }
            }
            None => {
                groups.insert(
                    counter.clone(),
                    GroupRow {
                        counter,
                        events: 1,
                        worst_level: ev.alarm_level(),
                        last_status: ev.status_string(),
                        last_time: ev.event_time(),
                    },
                );
            }
        }
    }

    groups.into_values().collect()
}

pub fn execute(args: GroupArgs, mode: OutputMode) -> Result<()> {
    let events = helpers::load_events(&args.input)?;
    let rows = group_events(&events);

    match mode {
        OutputMode::Json => print_json(&rows)?,
        OutputMode::Human => {
            if rows.is_empty() {
                print_success("No events found");
                return Ok(());
            }
            theme::print_header("Event Groups");
            let mut table = build_table(&["Counter", "Events", "Worst Level", "Last Status", "Last Seen"]);
            for row in &rows {
                table.add_row(vec![
                    Cell::new(&row.counter),
                    Cell::new(row.events),
                    level_cell(row.worst_level),
                    Cell::new(row.last_status),
                    Cell::new(unix_ts_format(row.last_time)),
                ]);
            }
            println!("{table}");
            theme::print_dim(&format!("{} events in {} groups", events.len(), rows.len()));
        }
    }

    Ok(())
}
