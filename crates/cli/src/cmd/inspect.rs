use alarm_common::utils::readable_float;
use alarm_common::{AlarmLevel, Event};
use anyhow::Result;
use serde::Serialize;

use super::helpers;
use crate::output::{print_json, print_success, theme, OutputMode};

#[derive(clap::Args)]
pub struct InspectArgs {
    #[arg(help = "Events file (object, array or JSON lines), '-' for stdin")]
    input: String,
}

#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub id: String,
    pub rule: &'static str,
    pub strategy_id: i64,
    pub expression_id: i64,
    pub tpl_id: i64,
    pub action_id: i64,
    pub endpoint: String,
    pub status: String,
    pub status_label: &'static str,
    pub alarm_level: AlarmLevel,
    pub priority: i64,
    pub metric: String,
    pub func: String,
    pub operator: String,
    pub right_value: f64,
    pub left_value: f64,
    pub current_step: i64,
    pub max_step: i64,
    pub note: String,
    pub counter: String,
    pub tags: String,
    pub time: String,
}

impl From<&Event> for EventSummary {
    fn from(ev: &Event) -> Self {
        Self {
            id: ev.id().to_string(),
            rule: ev.source().kind(),
            strategy_id: ev.strategy_id(),
            expression_id: ev.expression_id(),
            tpl_id: ev.tpl_id(),
            action_id: ev.action_id(),
            endpoint: ev.endpoint().to_string(),
            status: ev.status().to_string(),
            status_label: ev.status_string(),
            alarm_level: ev.alarm_level(),
            priority: ev.priority(),
            metric: ev.metric().to_string(),
            func: ev.func().to_string(),
            operator: ev.operator().to_string(),
            right_value: ev.right_value(),
            left_value: ev.left_value(),
            current_step: ev.current_step(),
            max_step: ev.max_step(),
            note: ev.note().to_string(),
            counter: ev.counter(),
            tags: ev.tags_string(),
            time: ev.formatted_time(),
        }
    }
}

pub fn execute(args: InspectArgs, mode: OutputMode) -> Result<()> {
    let events = helpers::load_events(&args.input)?;

    match mode {
        OutputMode::Json => {
            let summaries: Vec<EventSummary> = events.iter().map(EventSummary::from).collect();
            print_json(&summaries)?;
        }
        OutputMode::Human => {
            if events.is_empty() {
                print_success("No events found");
                return Ok(());
            }
            theme::print_header("Alarm Events");
            for ev in &events {
                print_event(ev);
            }
            println!();
        }
    }

    Ok(())
}

fn print_event(ev: &Event) {
    theme::print_section(&ev.counter());
    theme::print_kv("Id", ev.id());
    theme::print_kv(
        "Rule",
        &format!("{} #{}", ev.source().kind(), ev.source().rule_id()),
    );
    theme::print_kv("Endpoint", ev.endpoint());
    theme::print_status(ev.status());
    theme::print_level(ev.alarm_level(), ev.priority());
    theme::print_kv("Metric", ev.metric());
    theme::print_kv(
        "Condition",
        &format!(
            "{}{}{}",
            ev.func(),
            ev.operator(),
            readable_float(ev.right_value())
        ),
    );
    theme::print_kv("Left value", &readable_float(ev.left_value()));
    theme::print_kv(
        "Step",
        &format!("{}/{}", ev.current_step(), ev.max_step()),
    );
    theme::print_kv("Action", &ev.action_id().to_string());
    if ev.tpl_id() != 0 {
        theme::print_kv("Template", &ev.tpl_id().to_string());
    }
    if !ev.note().is_empty() {
        theme::print_kv("Note", ev.note());
    }
    theme::print_kv("Tags", &ev.tags_string());
    theme::print_kv("Time", &ev.formatted_time());
    theme::print_dim(&ev.to_string());
}
