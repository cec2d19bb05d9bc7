use serde::{Deserialize, Serialize};

/// Kind of chart a thematic group renders as.
///
/// Bar charts compare raw counts; pie and treemap show within-group
/// composition of a whole, so they only make sense where the categories are
/// mutually exclusive and sum to a meaningful total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Pie,
    Treemap,
}

impl ChartKind {
    /// Whether this kind plots percent-of-total shares rather than raw
    /// counts.
    pub const fn uses_percent(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Treemap)
    }
}

/// Renderable chart description handed to the drawing layer.
///
/// The per-category vectors are parallel and ordered by the group's declared
/// field order, so slice/bar order is reproducible across runs. A missing
/// entry in `values`/`percents` means "no data" for that category; the
/// drawing layer decides how to depict it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Legend / category-axis title (e.g. "Building type").
    pub category_title: String,
    /// Value-axis title ("Quantity" for bars, "Percent" for shares).
    pub value_title: String,
    pub region: String,
    pub categories: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub percents: Vec<Option<f64>>,
    /// Hex color per category, resolved against the group's color map with
    /// a default-palette fallback.
    pub colors: Vec<String>,
    /// Pre-rendered hover text per category.
    pub hover: Vec<String>,
}
