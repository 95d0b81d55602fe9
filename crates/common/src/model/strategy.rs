use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::utils::{nullable_tags, readable_float, sorted_tags};

/// Template-bound rule shared by every endpoint the template is bound to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Strategy {
    pub id: i64,
    pub metric: String,
    #[serde(deserialize_with = "nullable_tags")]
    pub tags: HashMap<String, String>,
    pub func: String,
    pub operator: String,
    pub right_value: f64,
    pub max_step: i64,
    pub priority: i64,
    pub note: String,
    pub tpl: Template,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub parent_id: i64,
    pub action_id: i64,
    pub creator: String,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Id:{}, Metric:{}, Tags:{}, {}{}{}, MaxStep:{}, P{}, {}, {}>",
            self.id,
            self.metric,
            sorted_tags(&self.tags),
            self.func,
            self.operator,
            readable_float(self.right_value),
            self.max_step,
            self.priority,
            self.note,
            self.tpl,
        )
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Id:{}, Name:{}, ParentId:{}, ActionId:{}, Creator:{}>",
            self.id, self.name, self.parent_id, self.action_id, self.creator,
        )
    }
}
