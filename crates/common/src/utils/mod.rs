mod formatter;
mod tags;

pub use formatter::{readable_float, unix_ts_format, TS_FORMAT};
pub use tags::{nullable_tags, sorted_tags};
