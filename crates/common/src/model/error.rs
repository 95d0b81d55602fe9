use std::fmt;

#[derive(Debug)]
pub enum EventError {
    MissingRuleSource,
    ConflictingRuleSource,
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRuleSource => write!(f, "event has neither a strategy nor an expression"),
            Self::ConflictingRuleSource => write!(f, "event has both a strategy and an expression"),
            Self::Encode(e) => write!(f, "encode: {e}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
        }
    }
}

impl std::error::Error for EventError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(e) | Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}
