//! Set pass.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::config::{InvalidRule, SetConfig};
use crate::transform::pattern::parse_header_name;

#[derive(Debug, Clone)]
pub struct SetRule {
    name: HeaderName,
    value: HeaderValue,
}

impl SetRule {
    pub fn new(name: HeaderName, value: HeaderValue) -> Self {
        Self { name, value }
    }

    /// Replace every value stored under the name with the rule's value.
    pub fn apply(&self, headers: &mut HeaderMap) {
        tracing::trace!(header = %self.name, "Setting header");
        headers.insert(self.name.clone(), self.value.clone());
    }
}

impl TryFrom<&SetConfig> for SetRule {
    type Error = InvalidRule;

    fn try_from(config: &SetConfig) -> Result<Self, Self::Error> {
        let name = parse_header_name(&config.header)?;
        let value = HeaderValue::from_str(&config.value)
            .map_err(|_| InvalidRule::InvalidHeaderValue(config.header.clone()))?;
        Ok(Self::new(name, value))
    }
}

pub fn apply_sets(headers: &mut HeaderMap, rules: &[SetRule]) -> usize {
    for rule in rules {
        rule.apply(headers);
    }
    rules.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(header: &str, value: &str) -> SetRule {
        SetRule::try_from(&SetConfig {
            header: header.into(),
            value: value.into(),
        })
        .unwrap()
    }

    #[test]
    fn test_set_new_header() {
        let mut map = HeaderMap::new();
        map.insert("foo", HeaderValue::from_static("Bar"));

        apply_sets(&mut map, &[rule("X-Test", "Tested")]);

        assert_eq!(map.get("x-test").unwrap(), "Tested");
        assert_eq!(map.get("foo").unwrap(), "Bar");
    }

    #[test]
    fn test_set_overwrites_case_insensitively() {
        let mut map = HeaderMap::new();
        map.insert("foo", HeaderValue::from_static("Bar"));
        map.insert("x-test", HeaderValue::from_static("Bar"));

        apply_sets(&mut map, &[rule("x-Test", "Tested")]);

        assert_eq!(map.get("X-Test").unwrap(), "Tested");
        assert_eq!(map.get("foo").unwrap(), "Bar");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_set_collapses_multiple_values() {
        let mut map = HeaderMap::new();
        map.append("x-multi", HeaderValue::from_static("a"));
        map.append("x-multi", HeaderValue::from_static("b"));

        apply_sets(&mut map, &[rule("X-Multi", "c")]);

        let values: Vec<_> = map.get_all("x-multi").iter().collect();
        assert_eq!(values, vec!["c"]);
    }

    #[test]
    fn test_later_rule_wins() {
        let mut map = HeaderMap::new();
        apply_sets(&mut map, &[rule("X-Env", "staging"), rule("x-env", "prod")]);
        assert_eq!(map.get("x-env").unwrap(), "prod");
    }

    #[test]
    fn test_rejects_invalid_value() {
        let result = SetRule::try_from(&SetConfig {
            header: "X-Bad".into(),
            value: "line\nbreak".into(),
        });
        assert_eq!(
            result.unwrap_err(),
            InvalidRule::InvalidHeaderValue("X-Bad".into())
        );
    }
}
