//! `zensus-model` defines the core in-memory data structures for the
//! Zensus 2022 housing dashboard.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the xlsx ingestion layer (`zensus-xlsx`)
//! - the dashboard pipeline and CLI (`zensus-dashboard`)
//!
//! The dataset is loaded once and read-only thereafter; everything derived
//! from it (long-format tables, chart specs) is recomputed per selection.

mod chart;
mod dataset;
pub mod fields;
mod groups;
mod level;
mod record;
mod value;

pub use chart::{ChartKind, ChartSpec};
pub use dataset::{Dataset, Selection, SelectionError};
pub use groups::{group_spec, FieldSpec, GroupId, GroupSpec, DEFAULT_PALETTE, GROUP_SPECS};
pub use level::{RegionLevel, RegionLevelParseError};
pub use record::RegionRecord;
pub use value::FieldValue;
