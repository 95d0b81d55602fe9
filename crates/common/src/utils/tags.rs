use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Canonical `k=v` rendering, sorted by key and joined with `,`.
pub fn sorted_tags(tags: &HashMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = tags.iter().collect();
    pairs.sort_by_key(|(k, _)| k.as_str());
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Tag maps arrive as `null` when the producer never populated them.
pub fn nullable_tags<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[derive(serde::Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "nullable_tags")]
        tags: HashMap<String, String>,
    }

    #[test]
    fn null_tags_decode_as_empty() {
        let h: Holder = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(h.tags.is_empty());
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert!(h.tags.is_empty());
        let h: Holder = serde_json::from_str(r#"{"tags": {"a": "1"}}"#).unwrap();
        assert_eq!(h.tags.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn empty_is_empty_string() {
        assert_eq!(sorted_tags(&HashMap::new()), "");
    }

    #[test]
    fn single_pair() {
        assert_eq!(sorted_tags(&tags(&[("host", "a")])), "host=a");
    }

    #[test]
    fn deterministic_regardless_of_insertion_order() {
        let a = sorted_tags(&tags(&[("region", "eu"), ("host", "a"), ("core", "0")]));
        let b = sorted_tags(&tags(&[("core", "0"), ("host", "a"), ("region", "eu")]));
        assert_eq!(a, b);
        assert_eq!(a, "core=0,host=a,region=eu");
    }
}
