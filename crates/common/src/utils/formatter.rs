use chrono::{Local, TimeZone};

pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock rendering of a Unix timestamp in seconds.
///
/// Timestamps chrono cannot represent fall back to the raw number.
pub fn unix_ts_format(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format(TS_FORMAT).to_string(),
        None => ts.to_string(),
    }
}

/// Three decimals, then trailing zeros and a dangling dot trimmed.
pub fn readable_float(raw: f64) -> String {
    let val = format!("{raw:.3}");
    if !val.contains('.') {
        return val;
    }
    val.trim_end_matches('0').trim_end_matches('.').to_string()
}
