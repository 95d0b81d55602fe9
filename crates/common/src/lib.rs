pub mod event_id;
pub mod model;
pub mod utils;

pub use model::{
    AlarmLevel, Event, EventBuilder, EventError, EventStatus, Expression, RuleSource, Strategy,
    Template,
};
