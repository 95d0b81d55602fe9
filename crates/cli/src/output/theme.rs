use alarm_common::{AlarmLevel, EventStatus};
use colored::{ColoredString, Colorize};

const LABEL_WIDTH: usize = 12;

pub fn print_header(title: &str) {
    let border = "─".repeat(title.chars().count() + 6);
    println!();
    println!("  ╭{}╮", border.cyan());
    println!("  │   {}   │", title.bright_cyan().bold());
    println!("  ╰{}╯", border.cyan());
}

pub fn print_section(title: &str) {
    println!();
    println!("  {} {}", "●".bright_cyan(), title.bold());
    println!("  {}", "─".repeat(40).dimmed());
}

fn print_row(label: &str, value: ColoredString) {
    println!("    {} {}", format!("{label:<LABEL_WIDTH$}").dimmed(), value);
}

pub fn print_kv(label: &str, value: &str) {
    print_row(label, value.bright_white());
}

pub fn print_status(status: &EventStatus) {
    let label = status.label();
    let styled = match status {
        EventStatus::Ok => label.green(),
        EventStatus::Problem => label.red().bold(),
        EventStatus::Unknown(_) => label.yellow(),
    };
    print_row("Status", styled);
}

pub fn print_level(level: AlarmLevel, priority: i64) {
    let text = format!("{level} (P{priority})");
    let styled = match level {
        AlarmLevel::Fatal => text.red().bold(),
        AlarmLevel::High => text.magenta(),
        AlarmLevel::Medium => text.yellow(),
        AlarmLevel::Low => text.green(),
        AlarmLevel::Unknown => text.dimmed(),
    };
    print_row("Level", styled);
}

pub fn print_dim(msg: &str) {
    println!("  {}", msg.dimmed());
}
