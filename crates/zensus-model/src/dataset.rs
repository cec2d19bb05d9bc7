use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{fields, RegionLevel, RegionRecord};

/// Current user selection: the only mutable state in the whole system, and
/// even that lives outside the core — the pipeline receives it as an
/// immutable value per render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub level: RegionLevel,
    pub region: String,
}

impl Selection {
    pub fn new(level: RegionLevel, region: impl Into<String>) -> Self {
        Self {
            level,
            region: region.into(),
        }
    }
}

impl Default for Selection {
    /// The national aggregate row.
    fn default() -> Self {
        Selection::new(RegionLevel::Federal, fields::NATIONAL_DISPLAY_LABEL)
    }
}

/// A selection the dataset cannot satisfy.
///
/// With consistently wired selectors this state is unreachable; the core
/// still guards against it so a stale or hand-built selection resets to a
/// valid default instead of rendering undefined state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The dataset has no rows at the requested level.
    #[error("no regions at level {0}")]
    EmptyLevel(RegionLevel),
    /// The region is not among the level's known names.
    #[error("region `{region}` not found at level {level}")]
    RegionNotFound { level: RegionLevel, region: String },
}

/// The loaded census table. Built once by the loader, read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<RegionRecord>,
}

impl Dataset {
    pub fn new(records: Vec<RegionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct region names at `level`, sorted lexicographically.
    ///
    /// This is an observable output: it is exactly the option list the
    /// secondary (region) selector must offer for the chosen level.
    pub fn regions_at(&self, level: RegionLevel) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .records
            .iter()
            .filter(|record| record.level == level)
            .map(|record| record.region.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Two-stage lookup: restrict to the level, then match the region name.
    /// Exactly one record is expected per valid `(level, region)` pair.
    pub fn select(&self, selection: &Selection) -> Result<&RegionRecord, SelectionError> {
        let mut at_level = self
            .records
            .iter()
            .filter(|record| record.level == selection.level)
            .peekable();
        if at_level.peek().is_none() {
            return Err(SelectionError::EmptyLevel(selection.level));
        }
        at_level
            .find(|record| record.region == selection.region)
            .ok_or_else(|| SelectionError::RegionNotFound {
                level: selection.level,
                region: selection.region.clone(),
            })
    }
}
