use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::utils::{nullable_tags, readable_float, sorted_tags};

/// Standalone rule; carries its own action id instead of inheriting one
/// from a template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Expression {
    pub id: i64,
    pub expression: String,
    pub metric: String,
    #[serde(deserialize_with = "nullable_tags")]
    pub tags: HashMap<String, String>,
    pub func: String,
    pub operator: String,
    pub right_value: f64,
    pub max_step: i64,
    pub priority: i64,
    pub note: String,
    pub action_id: i64,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Id:{}, Expression:{}, Metric:{}, Tags:{}, {}{}{}, MaxStep:{}, P{}, {}, ActionId:{}>",
            self.id,
            self.expression,
            self.metric,
            sorted_tags(&self.tags),
            self.func,
            self.operator,
            readable_float(self.right_value),
            self.max_step,
            self.priority,
            self.note,
            self.action_id,
        )
    }
}
