//! Structured decision aids the assistant renders instead of prose:
//! comparison tables, pros and cons, recommendations, scored matrices.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One column of a comparison table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComparisonItem {
    pub name: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl ComparisonItem {
    /// Cell text for `attribute`; `-` when the item does not carry it.
    pub fn cell(&self, attribute: &str) -> String {
        match self.attributes.get(attribute) {
            None | Some(Value::Null) => "-".to_string(),
            Some(Value::String(text)) if text.is_empty() => "-".to_string(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// A matrix score. Numbers and numeric strings are accepted; anything else is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Score(pub f64);

impl From<Value> for Score {
    fn from(value: Value) -> Self {
        let score = match value {
            Value::Number(number) => number.as_f64().unwrap_or_default(),
            Value::String(text) => text.trim().parse().unwrap_or_default(),
            _ => 0.0,
        };
        Self(if score.is_finite() { score } else { 0.0 })
    }
}

/// `option -> criterion -> score`.
pub type ScoreTable = BTreeMap<String, BTreeMap<String, Score>>;

/// Score of `option` against `criterion`; missing entries count as 0.
pub fn score(scores: &ScoreTable, option: &str, criterion: &str) -> f64 {
    scores
        .get(option)
        .and_then(|row| row.get(criterion))
        .map_or(0.0, |score| score.0)
}

/// Sum of an option's scores over the listed criteria.
pub fn total(scores: &ScoreTable, option: &str, criteria: &[String]) -> f64 {
    criteria
        .iter()
        .map(|criterion| score(scores, option, criterion))
        .sum()
}
