use serde::Serialize;
use std::fmt;

/// Severity derived from a rule priority, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmLevel {
    Fatal,
    High,
    Medium,
    Low,
    Unknown,
}

impl AlarmLevel {
    pub fn from_priority(priority: i64) -> Self {
        match priority {
            0 => Self::Fatal,
            1 => Self::High,
            2..=4 => Self::Medium,
            5 | 6 => Self::Low,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AlarmLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
