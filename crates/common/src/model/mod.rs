mod error;
mod event;
mod expression;
mod level;
mod rule_source;
mod status;
mod strategy;

pub use error::EventError;
pub use event::{Event, EventBuilder};
pub use expression::Expression;
pub use level::AlarmLevel;
pub use rule_source::RuleSource;
pub use status::EventStatus;
pub use strategy::{Strategy, Template};
