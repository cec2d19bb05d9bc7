use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Administrative granularity of a census row.
///
/// The source table carries German level labels; only these three levels are
/// supported, rows at any other level are dropped at load time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum RegionLevel {
    Federal,
    State,
    District,
}

impl RegionLevel {
    pub const ALL: [RegionLevel; 3] = [
        RegionLevel::Federal,
        RegionLevel::State,
        RegionLevel::District,
    ];

    /// Label used in the source table's `Regionalebene` column.
    pub const fn source_label(self) -> &'static str {
        match self {
            RegionLevel::Federal => "Bund",
            RegionLevel::State => "Land",
            RegionLevel::District => "Stadtkreis/kreisfreie Stadt/Landkreis",
        }
    }

    /// English display name, shown alongside the German label in selectors.
    pub const fn display_name(self) -> &'static str {
        match self {
            RegionLevel::Federal => "Federal",
            RegionLevel::State => "State",
            RegionLevel::District => "Urban district/independent city/rural district",
        }
    }

    /// Parse a source-table label. Unknown levels return `None`.
    pub fn from_source_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.source_label() == label)
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.source_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region level `{0}` (expected: federal|state|district)")]
pub struct RegionLevelParseError(String);

impl FromStr for RegionLevel {
    type Err = RegionLevelParseError;

    /// Accepts the English names (case-insensitive) as well as the German
    /// source labels, for CLI convenience.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Some(level) = RegionLevel::from_source_label(trimmed) {
            return Ok(level);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "federal" | "bund" => Ok(RegionLevel::Federal),
            "state" | "land" => Ok(RegionLevel::State),
            "district" | "kreis" => Ok(RegionLevel::District),
            _ => Err(RegionLevelParseError(trimmed.to_string())),
        }
    }
}
