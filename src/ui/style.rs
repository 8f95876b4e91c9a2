use console::style;
use std::fmt::Display;

/// Checkmarks and confirmations.
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Section headers.
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Hints, placeholders, rules.
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Warnings and missing values.
pub fn warn<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Entered values.
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Step counters and bullets.
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Field labels.
pub fn label<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}
