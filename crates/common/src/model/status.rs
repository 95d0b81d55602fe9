use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire status of an event. Unrecognised strings are kept verbatim so
/// they survive a decode/encode cycle and still classify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Ok,
    Problem,
    Unknown(String),
}

impl EventStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::Problem => "PROBLEM",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "recovered",
            Self::Problem => "unrecovered",
            Self::Unknown(_) => "unknown status",
        }
    }
}

impl From<&str> for EventStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "OK" => Self::Ok,
            "PROBLEM" => Self::Problem,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for EventStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OK" => Self::Ok,
            "PROBLEM" => Self::Problem,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(EventStatus::from("OK").label(), "recovered");
        assert_eq!(EventStatus::from("PROBLEM").label(), "unrecovered");
        assert_eq!(EventStatus::from("ok").label(), "unknown status");
        assert_eq!(EventStatus::from("").label(), "unknown status");
    }

    #[test]
    fn unknown_survives_serde() {
        let status: EventStatus = serde_json::from_str(r#""FLAPPING""#).unwrap();
        assert_eq!(status, EventStatus::Unknown("FLAPPING".into()));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""FLAPPING""#);
    }

    #[test]
    fn known_serialize_as_wire_strings() {
        assert_eq!(serde_json::to_string(&EventStatus::Ok).unwrap(), r#""OK""#);
        assert_eq!(
            serde_json::to_string(&EventStatus::Problem).unwrap(),
            r#""PROBLEM""#
        );
    }
}
