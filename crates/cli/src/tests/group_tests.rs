#[cfg(test)]
mod tests {
    use alarm_common::{AlarmLevel, Event, EventStatus, Expression, Strategy};

    use crate::cmd::group::group_events;
    use crate::cmd::inspect::EventSummary;

    fn strategy_event(endpoint: &str, priority: i64, status: EventStatus, ts: i64) -> Event {
        Event::builder(endpoint, status)
            .strategy(Strategy {
                metric: "cpu.idle".into(),
                priority,
                ..Default::default()
            })
            .tag("core", "0")
            .event_time(ts)
            .build()
            .unwrap()
    }

    #[test]
    fn groups_by_counter() {
        let events = vec![
            strategy_event("h1", 3, EventStatus::Problem, 100),
            strategy_event("h2", 3, EventStatus::Problem, 100),
            strategy_event("h1", 0, EventStatus::Problem, 200),
        ];
        let rows = group_events(&events);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].counter, "h1/cpu.idle core=0");
        assert_eq!(rows[0].events, 2);
        assert_eq!(rows[0].worst_level, AlarmLevel::Fatal);
        assert_eq!(rows[1].events, 1);
    }

    #[test]
    fn last_status_follows_latest_time() {
        let events = vec![
            strategy_event("h1", 1, EventStatus::Ok, 300),
            strategy_event("h1", 1, EventStatus::Problem, 100),
        ];
        let rows = group_events(&events);
        assert_eq!(rows[0].last_status, "recovered");
        assert_eq!(rows[0].last_time, 300);
    }

    #[test]
    fn strategy_and_expression_share_group_on_same_metric() {
        let from_expression = Event::builder("h1", EventStatus::Problem)
            .expression(Expression {
                metric: "cpu.idle".into(),
                priority: 6,
                ..Default::default()
            })
            .tag("core", "0")
            .event_time(50)
            .build()
            .unwrap();
        let events = vec![strategy_event("h1", 9, EventStatus::Problem, 10), from_expression];
        let rows = group_events(&events);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].worst_level, AlarmLevel::Low);
    }

    #[test]
    fn summary_serializes_level_label() {
        let ev = strategy_event("h1", 4, EventStatus::Problem, 100);
        let value = serde_json::to_value(EventSummary::from(&ev)).unwrap();
        assert_eq!(value["alarm_level"], "medium");
        assert_eq!(value["status_label"], "unrecovered");
        assert_eq!(value["rule"], "strategy");
        assert_eq!(value["expression_id"], 0);
    }
}
