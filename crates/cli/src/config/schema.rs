use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub output: OutputPref,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputPref {
    #[default]
    Human,
    Json,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputPref::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full() {
        let yaml = r#"
log_level: debug
output: json
"#;
        let cfg: CliConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.output, OutputPref::Json);
    }

    #[test]
    fn defaults_applied() {
        let cfg: CliConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, CliConfig::default());
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.output, OutputPref::Human);
    }

    #[test]
    fn rejects_unknown_output() {
        let result: Result<CliConfig, _> = serde_yaml::from_str("output: xml");
        assert!(result.is_err());
    }
}
