use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{FieldValue, RegionLevel};

/// One census row: a region at a given administrative level plus its raw
/// field values, keyed by source column header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub region: String,
    pub level: RegionLevel,
    values: HashMap<String, FieldValue>,
}

impl RegionRecord {
    pub fn new(region: impl Into<String>, level: RegionLevel) -> Self {
        Self {
            region: region.into(),
            level,
            values: HashMap::new(),
        }
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Field value coerced to a number.
    ///
    /// A present-but-unparseable text cell logs a warning and reads as
    /// missing; it never aborts a render pass.
    pub fn numeric_field(&self, name: &str) -> Option<f64> {
        let value = self.field(name)?;
        let parsed = value.as_number();
        if parsed.is_none() {
            if let FieldValue::Text(raw) = value {
                log::warn!(
                    "region `{}`: column `{name}` value `{raw}` is not numeric; treating as missing",
                    self.region
                );
            }
        }
        parsed
    }

    pub fn field_count(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RegionRecord {
        let mut record = RegionRecord::new("Bayern", RegionLevel::State);
        record.set_field("QMMIETE", 8.75);
        record.set_field("LEQ", "3,1");
        record.set_field("ETQ", "n/a");
        record
    }

    #[test]
    fn numeric_field_coerces_text() {
        let record = record();
        assert_eq!(record.numeric_field("QMMIETE"), Some(8.75));
        assert_eq!(record.numeric_field("LEQ"), Some(3.1));
    }

    #[test]
    fn unparseable_and_absent_fields_are_missing() {
        let record = record();
        assert_eq!(record.numeric_field("ETQ"), None);
        assert_eq!(record.numeric_field("FLAECHE"), None);
        assert!(record.field("FLAECHE").is_none());
    }
}
