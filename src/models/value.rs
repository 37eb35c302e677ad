use serde::{Deserialize, Serialize};
use std::fmt;

/// A style property value as authored: either a bare number or a string.
///
/// Style sheets hand most values over as strings, but a few properties
/// (`lineHeight` being the notable one) are legitimately numeric and must not
/// be stringified on the way through the converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A bare numeric value, e.g. a unitless `lineHeight`.
    Number(f64),
    /// A textual value, possibly embedding unit tokens.
    Text(String),
}

impl StyleValue {
    /// Returns the textual content if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }

    /// Returns the numeric content if this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already renders whole numbers without a trailing
            // ".0", matching how the values appear in authored styles.
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}
