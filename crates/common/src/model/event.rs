use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::error::EventError;
use super::expression::Expression;
use super::level::AlarmLevel;
use super::rule_source::RuleSource;
use super::status::EventStatus;
use super::strategy::Strategy;
use crate::event_id;
use crate::utils::{nullable_tags, readable_float, sorted_tags, unix_ts_format};

/// One firing or recovery of a rule against one endpoint.
///
/// Both host-level strategies and standalone expressions produce events;
/// consumers read the rule through the accessors below and never need to
/// know which kind fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EventWire", into = "EventWire")]
pub struct Event {
    id: String,
    source: RuleSource,
    status: EventStatus,
    endpoint: String,
    left_value: f64,
    current_step: i64,
    event_time: i64,
    pushed_tags: HashMap<String, String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventWire {
    #[serde(default)]
    id: String,
    strategy: Option<Strategy>,
    expression: Option<Expression>,
    status: EventStatus,
    #[serde(default)]
    endpoint: String,
    #[serde(default)]
    left_value: f64,
    #[serde(default)]
    current_step: i64,
    #[serde(default)]
    event_time: i64,
    #[serde(default, deserialize_with = "nullable_tags")]
    pushed_tags: HashMap<String, String>,
}

impl TryFrom<EventWire> for Event {
    type Error = EventError;

    fn try_from(w: EventWire) -> Result<Self, Self::Error> {
        let source = RuleSource::from_parts(w.strategy, w.expression)?;
        Ok(Self {
            id: w.id,
            source,
            status: w.status,
            endpoint: w.endpoint,
            left_value: w.left_value,
            current_step: w.current_step,
            event_time: w.event_time,
            pushed_tags: w.pushed_tags,
        })
    }
}

impl From<Event> for EventWire {
    fn from(e: Event) -> Self {
        let (strategy, expression) = match e.source {
            RuleSource::Strategy(s) => (Some(s), None),
            RuleSource::Expression(x) => (None, Some(x)),
        };
        Self {
            id: e.id,
            strategy,
            expression,
            status: e.status,
            endpoint: e.endpoint,
            left_value: e.left_value,
            current_step: e.current_step,
            event_time: e.event_time,
            pushed_tags: e.pushed_tags,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventBuilder {
    id: Option<String>,
    strategy: Option<Strategy>,
    expression: Option<Expression>,
    status: EventStatus,
    endpoint: String,
    left_value: f64,
    current_step: i64,
    event_time: i64,
    pushed_tags: HashMap<String, String>,
}

impl EventBuilder {
    pub fn new(endpoint: impl Into<String>, status: EventStatus) -> Self {
        Self {
            id: None,
            strategy: None,
            expression: None,
            status,
            endpoint: endpoint.into(),
            left_value: 0.0,
            current_step: 0,
            event_time: 0,
            pushed_tags: HashMap::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn expression(mut self, expression: Expression) -> Self {
        self.expression = Some(expression);
        self
    }

    pub fn left_value(mut self, value: f64) -> Self {
        self.left_value = value;
        self
    }

    pub fn current_step(mut self, step: i64) -> Self {
        self.current_step = step;
        self
    }

    pub fn event_time(mut self, ts: i64) -> Self {
        self.event_time = ts;
        self
    }

    pub fn pushed_tags(mut self, tags: HashMap<String, String>) -> Self {
        self.pushed_tags = tags;
        self
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pushed_tags.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Event, EventError> {
        let source = match RuleSource::from_parts(self.strategy, self.expression) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(endpoint = %self.endpoint, error = %e, "rejected event");
                return Err(e);
            }
        };
        let id = self.id.unwrap_or_else(|| event_id::generate(&source));
        Ok(Event {
            id,
            source,
            status: self.status,
            endpoint: self.endpoint,
            left_value: self.left_value,
            current_step: self.current_step,
            event_time: self.event_time,
            pushed_tags: self.pushed_tags,
        })
    }
}

impl Event {
    pub fn builder(endpoint: impl Into<String>, status: EventStatus) -> EventBuilder {
        EventBuilder::new(endpoint, status)
    }

    /// Shape errors come back as `Decode`; a missing or doubled rule comes
    /// back as its own variant.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        let wire: EventWire = serde_json::from_str(json).map_err(EventError::Decode)?;
        Self::try_from(wire)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, EventError> {
        let wire: EventWire = serde_json::from_value(value).map_err(EventError::Decode)?;
        Self::try_from(wire)
    }

    pub fn to_json(&self) -> Result<String, EventError> {
        serde_json::to_string(self).map_err(EventError::Encode)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &RuleSource {
        &self.source
    }

    pub fn strategy(&self) -> Option<&Strategy> {
        self.source.strategy()
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.source.expression()
    }

    pub fn status(&self) -> &EventStatus {
        &self.status
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn left_value(&self) -> f64 {
        self.left_value
    }

    pub fn current_step(&self) -> i64 {
        self.current_step
    }

    pub fn event_time(&self) -> i64 {
        self.event_time
    }

    pub fn pushed_tags(&self) -> &HashMap<String, String> {
        &self.pushed_tags
    }

    pub fn is_problem(&self) -> bool {
        self.status == EventStatus::Problem
    }

    pub fn is_recovered(&self) -> bool {
        self.status == EventStatus::Ok
    }

    pub fn strategy_id(&self) -> i64 {
        self.strategy().map_or(0, |s| s.id)
    }

    pub fn expression_id(&self) -> i64 {
        self.expression().map_or(0, |e| e.id)
    }

    pub fn tpl_id(&self) -> i64 {
        self.strategy().map_or(0, |s| s.tpl.id)
    }

    pub fn action_id(&self) -> i64 {
        self.source.action_id()
    }

    pub fn priority(&self) -> i64 {
        self.source.priority()
    }

    pub fn note(&self) -> &str {
        self.source.note()
    }

    pub fn metric(&self) -> &str {
        self.source.metric()
    }

    pub fn right_value(&self) -> f64 {
        self.source.right_value()
    }

    pub fn operator(&self) -> &str {
        self.source.operator()
    }

    pub fn func(&self) -> &str {
        self.source.func()
    }

    pub fn max_step(&self) -> i64 {
        self.source.max_step()
    }

    pub fn alarm_level(&self) -> AlarmLevel {
        AlarmLevel::from_priority(self.priority())
    }

    pub fn status_string(&self) -> &'static str {
        self.status.label()
    }

    pub fn formatted_time(&self) -> String {
        unix_ts_format(self.event_time)
    }

    pub fn try_tags_string(&self) -> Result<String, EventError> {
        serde_json::to_string(&self.pushed_tags).map_err(EventError::Encode)
    }

    /// Compact JSON object of the pushed tags, `""` if encoding fails.
    pub fn tags_string(&self) -> String {
        match self.try_tags_string() {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(id = %self.id, error = %e, "pushed tags not encodable");
                String::new()
            }
        }
    }

    /// Grouping key: `endpoint/metric k1=v1,k2=v2` with tags sorted by key.
    /// The space before the tags stays even when there are none, so existing
    /// keys such as `host/metric ` keep matching.
    pub fn counter(&self) -> String {
        format!(
            "{}/{} {}",
            self.endpoint,
            self.metric(),
            sorted_tags(&self.pushed_tags)
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = self.strategy().map_or("<nil>".to_string(), |s| s.to_string());
        let expression = self
            .expression()
            .map_or("<nil>".to_string(), |e| e.to_string());
        write!(
            f,
            "<Endpoint:{}, Status:{}, Strategy:{}, Expression:{}, LeftValue:{}, CurrentStep:{}, PushedTags:{}, TS:{}>",
            self.endpoint,
            self.status,
            strategy,
            expression,
            readable_float(self.left_value),
            self.current_step,
            sorted_tags(&self.pushed_tags),
            self.formatted_time(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::strategy::Template;

    fn cpu_strategy() -> Strategy {
        Strategy {
            id: 101,
            metric: "cpu.idle".into(),
            func: "all(#3)".into(),
            operator: "<".into(),
            right_value: 5.0,
            max_step: 3,
            priority: 2,
            note: "cpu idle too low".into(),
            tpl: Template {
                id: 12,
                name: "linux-base".into(),
                action_id: 40,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn mem_expression() -> Expression {
        Expression {
            id: 202,
            expression: "each(metric=mem.memfree.percent)".into(),
            metric: "mem.memfree.percent".into(),
            func: "max(#2)".into(),
            operator: "<=".into(),
            right_value: 10.0,
            max_step: 1,
            priority: 7,
            note: "memory exhausted".into(),
            action_id: 55,
            ..Default::default()
        }
    }

    #[test]
    fn strategy_sourced_accessors() {
        let ev = Event::builder("host1", EventStatus::Problem)
            .strategy(cpu_strategy())
            .build()
            .unwrap();

        assert_eq!(ev.strategy_id(), 101);
        assert_eq!(ev.expression_id(), 0);
        assert_eq!(ev.tpl_id(), 12);
        assert_eq!(ev.action_id(), 40);
        assert_eq!(ev.priority(), 2);
        assert_eq!(ev.note(), "cpu idle too low");
        assert_eq!(ev.metric(), "cpu.idle");
        assert!((ev.right_value() - 5.0).abs() < f64::EPSILON);
        assert_eq!(ev.operator(), "<");
        assert_eq!(ev.func(), "all(#3)");
        assert_eq!(ev.max_step(), 3);
        assert_eq!(ev.alarm_level(), AlarmLevel::Medium);
        assert_eq!(ev.status_string(), "unrecovered");
    }

    #[test]
    fn expression_sourced_accessors() {
        let ev = Event::builder("host2", EventStatus::Ok)
            .expression(mem_expression())
            .build()
            .unwrap();

        assert_eq!(ev.strategy_id(), 0);
        assert_eq!(ev.expression_id(), 202);
        assert_eq!(ev.tpl_id(), 0);
        assert_eq!(ev.action_id(), 55);
        assert_eq!(ev.priority(), 7);
        assert_eq!(ev.note(), "memory exhausted");
        assert_eq!(ev.metric(), "mem.memfree.percent");
        assert_eq!(ev.operator(), "<=");
        assert_eq!(ev.func(), "max(#2)");
        assert_eq!(ev.max_step(), 1);
        assert_eq!(ev.alarm_level(), AlarmLevel::Unknown);
        assert_eq!(ev.status_string(), "recovered");
        assert!(ev.is_recovered());
    }

    #[test]
    fn build_rejects_missing_source() {
        let err = Event::builder("host1", EventStatus::Problem)
            .build()
            .unwrap_err();
        assert!(matches!(err, EventError::MissingRuleSource));
    }

    #[test]
    fn build_rejects_both_sources() {
        let err = Event::builder("host1", EventStatus::Problem)
            .strategy(cpu_strategy())
            .expression(mem_expression())
            .build()
            .unwrap_err();
        assert!(matches!(err, EventError::ConflictingRuleSource));
    }

    #[test]
    fn build_generates_id_unless_given() {
        let generated = Event::builder("h", EventStatus::Ok)
            .strategy(cpu_strategy())
            .build()
            .unwrap();
        assert!(!generated.id().is_empty());

        let explicit = Event::builder("h", EventStatus::Ok)
            .id("s_101_abc")
            .strategy(cpu_strategy())
            .build()
            .unwrap();
        assert_eq!(explicit.id(), "s_101_abc");
    }

    #[test]
    fn generated_id_names_the_rule() {
        let from_strategy = Event::builder("h", EventStatus::Problem)
            .strategy(cpu_strategy())
            .build()
            .unwrap();
        assert!(from_strategy.id().starts_with("s_101_"));

        let from_expression = Event::builder("h", EventStatus::Problem)
            .expression(mem_expression())
            .build()
            .unwrap();
        assert!(from_expression.id().starts_with("e_202_"));
    }

    #[test]
    fn unknown_status_label() {
        let ev = Event::builder("h", EventStatus::from("MAINTENANCE"))
            .strategy(cpu_strategy())
            .build()
            .unwrap();
        assert_eq!(ev.status_string(), "unknown status");
        assert!(!ev.is_problem());
        assert!(!ev.is_recovered());
    }

    #[test]
    fn counter_ignores_tag_order() {
        let a = Event::builder("host1", EventStatus::Problem)
            .expression(Expression {
                metric: "cpu.idle".into(),
                ..Default::default()
            })
            .tag("a", "1")
            .tag("b", "2")
            .build()
            .unwrap();
        let b = Event::builder("host1", EventStatus::Problem)
            .expression(Expression {
                metric: "cpu.idle".into(),
                ..Default::default()
            })
            .tag("b", "2")
            .tag("a", "1")
            .build()
            .unwrap();
        assert_eq!(a.counter(), b.counter());
        assert_eq!(a.counter(), "host1/cpu.idle a=1,b=2");
    }

    #[test]
    fn counter_without_tags() {
        let ev = Event::builder("db-1", EventStatus::Problem)
            .strategy(cpu_strategy())
            .build()
            .unwrap();
        assert_eq!(ev.counter(), "db-1/cpu.idle ");
    }

    #[test]
    fn tags_string_empty_map_is_object() {
        let ev = Event::builder("h", EventStatus::Ok)
            .strategy(cpu_strategy())
            .build()
            .unwrap();
        assert_eq!(ev.tags_string(), "{}");
    }

    #[test]
    fn tags_string_decodes_back() {
        let ev = Event::builder("h", EventStatus::Ok)
            .strategy(cpu_strategy())
            .tag("mount", "/data")
            .tag("fstype", "ext4")
            .build()
            .unwrap();
        let decoded: HashMap<String, String> = serde_json::from_str(&ev.tags_string()).unwrap();
        assert_eq!(&decoded, ev.pushed_tags());
    }

    #[test]
    fn display_marks_absent_rule() {
        let ev = Event::builder("host9", EventStatus::Problem)
            .expression(mem_expression())
            .left_value(3.25)
            .current_step(2)
            .event_time(1_700_000_000)
            .build()
            .unwrap();
        let rendered = ev.to_string();
        assert!(rendered.starts_with("<Endpoint:host9, Status:PROBLEM, Strategy:<nil>, Expression:<Id:202"));
        assert!(rendered.contains("LeftValue:3.25, CurrentStep:2"));
        assert!(rendered.ends_with(&format!("TS:{}>", ev.formatted_time())));
    }

    #[test]
    fn example_medium_unrecovered() {
        let ev = Event::builder("h", EventStatus::Problem)
            .strategy(Strategy {
                priority: 2,
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(ev.alarm_level().as_str(), "medium");
        assert_eq!(ev.status_string(), "unrecovered");
    }
}
