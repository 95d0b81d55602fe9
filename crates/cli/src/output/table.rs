use alarm_common::AlarmLevel;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};

pub fn build_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold)),
    );
    table
}

pub fn level_color(level: AlarmLevel) -> Color {
    match level {
        AlarmLevel::Fatal => Color::Red,
        AlarmLevel::High => Color::Magenta,
        AlarmLevel::Medium => Color::Yellow,
        AlarmLevel::Low => Color::Green,
        AlarmLevel::Unknown => Color::Grey,
    }
}

pub fn level_cell(level: AlarmLevel) -> Cell {
    let cell = Cell::new(level).fg(level_color(level));
    if level == AlarmLevel::Fatal {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}
