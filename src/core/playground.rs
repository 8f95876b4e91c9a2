//! Minimal surface for exercising assistant actions: a counter and a
//! message the assistant can rewrite.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundState {
    pub counter: f64,
    pub message: String,
    pub enhanced_text: String,
}

impl PlaygroundState {
    /// Returns the new counter value.
    pub fn increment(&mut self, amount: f64) -> f64 {
        self.counter += amount;
        self.counter
    }
}
