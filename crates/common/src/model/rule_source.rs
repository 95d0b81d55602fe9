use super::error::EventError;
use super::expression::Expression;
use super::strategy::Strategy;

/// The rule an event fired against. Exactly one of the two kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSource {
    Strategy(Strategy),
    Expression(Expression),
}

impl RuleSource {
    pub fn from_parts(
        strategy: Option<Strategy>,
        expression: Option<Expression>,
    ) -> Result<Self, EventError> {
        match (strategy, expression) {
            (Some(s), None) => Ok(Self::Strategy(s)),
            (None, Some(e)) => Ok(Self::Expression(e)),
            (None, None) => Err(EventError::MissingRuleSource),
            (Some(_), Some(_)) => Err(EventError::ConflictingRuleSource),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Strategy(_) => "strategy",
            Self::Expression(_) => "expression",
        }
    }

    pub fn rule_id(&self) -> i64 {
        match self {
            Self::Strategy(s) => s.id,
            Self::Expression(e) => e.id,
        }
    }

    pub fn strategy(&self) -> Option<&Strategy> {
        match self {
            Self::Strategy(s) => Some(s),
            Self::Expression(_) => None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Self::Strategy(_) => None,
            Self::Expression(e) => Some(e),
        }
    }

    /// Expressions carry their own action; strategies inherit the template's.
    pub fn action_id(&self) -> i64 {
        match self {
            Self::Expression(e) => e.action_id,
            Self::Strategy(s) => s.tpl.action_id,
        }
    }

    pub fn priority(&self) -> i64 {
        match self {
            Self::Strategy(s) => s.priority,
            Self::Expression(e) => e.priority,
        }
    }

    pub fn note(&self) -> &str {
        match self {
            Self::Strategy(s) => &s.note,
            Self::Expression(e) => &e.note,
        }
    }

    pub fn metric(&self) -> &str {
        match self {
            Self::Strategy(s) => &s.metric,
            Self::Expression(e) => &e.metric,
        }
    }

    pub fn right_value(&self) -> f64 {
        match self {
            Self::Strategy(s) => s.right_value,
            Self::Expression(e) => e.right_value,
        }
    }

    pub fn operator(&self) -> &str {
        match self {
            Self::Strategy(s) => &s.operator,
            Self::Expression(e) => &e.operator,
        }
    }

    pub fn func(&self) -> &str {
        match self {
            Self::Strategy(s) => &s.func,
            Self::Expression(e) => &e.func,
        }
    }

    pub fn max_step(&self) -> i64 {
        match self {
            Self::Strategy(s) => s.max_step,
            Self::Expression(e) => e.max_step,
        }
    }
}

impl From<Strategy> for RuleSource {
    fn from(s: Strategy) -> Self {
        Self::Strategy(s)
    }
}

impl From<Expression> for RuleSource {
    fn from(e: Expression) -> Self {
        Self::Expression(e)
    }
}
