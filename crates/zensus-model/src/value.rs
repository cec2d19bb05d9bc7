use serde::{Deserialize, Serialize};

/// Raw cell payload of one census field.
///
/// Loading performs no numeric mutation (spec'd coercion happens in the
/// group transformer), so text cells like `"n/a"` survive as-is.
///
/// The enum uses an explicit `{type, value}` tagged layout for stable JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Blank,
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Blank
    }
}

impl FieldValue {
    /// Coerce to a number for aggregation and charting.
    ///
    /// Text is trimmed and parsed as `f64`; a German decimal comma is
    /// tolerated. Anything unparseable reads as missing (`None`).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if trimmed.contains(',') && !trimmed.contains('.') {
                    trimmed.replace(',', ".").parse().ok()
                } else {
                    trimmed.parse().ok()
                }
            }
            FieldValue::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Blank)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}
