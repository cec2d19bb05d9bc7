//! Dashboard pipeline for the Zensus 2022 housing statistics.
//!
//! Control flow per render pass: select one region record, project the four
//! headline metrics, then run the one generic wide-to-long transform over
//! each of the eight thematic groups and bind the results to chart specs.
//! Every step is a pure function of its inputs; rendering the same selection
//! twice yields byte-identical output.

pub mod cli;
mod headline;
mod transform;
mod view;

pub use headline::{headline, HeadlineMetrics, HeadlineView};
pub use transform::{bind, transform, LongRow};
pub use view::{render, DashboardView};
