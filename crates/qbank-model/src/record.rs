use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One input row as a column-name to value mapping, the shape a header-keyed
/// CSV reader hands over. Consumed once by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { fields }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw (untrimmed) value of a column, `None` when the column is absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Trimmed value, `None` when the column is absent or blank.
    pub fn trimmed(&self, name: &str) -> Option<&str> {
        self.field(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Trimmed value of the 1-based `Choice {n}` column.
    pub fn choice(&self, n: usize) -> Option<&str> {
        self.trimmed(&format!("Choice {n}"))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_filters_blank_values() {
        let record = RawRecord::from_pairs([("Question", "  What?  "), ("Source", "   ")]);
        assert_eq!(record.trimmed("Question"), Some("What?"));
        assert_eq!(record.trimmed("Source"), None);
        assert_eq!(record.trimmed("Explanation"), None);
        assert_eq!(record.field("Question"), Some("  What?  "));
    }

    #[test]
    fn choice_lookup_uses_one_based_keys() {
        let record = RawRecord::from_pairs([("Choice 1", "Paris"), ("Choice 2", "Lyon")]);
        assert_eq!(record.choice(1), Some("Paris"));
        assert_eq!(record.choice(2), Some("Lyon"));
        assert_eq!(record.choice(3), None);
    }
}
