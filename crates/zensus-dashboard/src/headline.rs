use serde::{Deserialize, Serialize};
use zensus_model::{fields, RegionRecord};

/// The four headline metrics of a region, as numbers.
///
/// A metric is missing when its source cell is absent or unparseable; the
/// dashboard shows a placeholder instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineMetrics {
    pub avg_rent_per_sqm: Option<f64>,
    pub vacancy_rate_pct: Option<f64>,
    pub ownership_rate_pct: Option<f64>,
    pub avg_area_per_apartment: Option<f64>,
}

/// Pure projection of the four headline fields. No aggregation, no
/// derivation.
pub fn headline(record: &RegionRecord) -> HeadlineMetrics {
    HeadlineMetrics {
        avg_rent_per_sqm: record.numeric_field(fields::AVG_RENT_PER_SQM),
        vacancy_rate_pct: record.numeric_field(fields::VACANCY_RATE),
        ownership_rate_pct: record.numeric_field(fields::OWNERSHIP_RATE),
        avg_area_per_apartment: record.numeric_field(fields::AVG_AREA_PER_APARTMENT),
    }
}

/// Headline metrics formatted for display.
///
/// Fixed precision: two decimals for rent, one for the other three. The
/// formatting is display-only; [`HeadlineMetrics`] keeps the untouched
/// numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineView {
    pub avg_rent_per_sqm: String,
    pub vacancy_rate_pct: String,
    pub ownership_rate_pct: String,
    pub avg_area_per_apartment: String,
}

const NO_DATA: &str = "–";

impl HeadlineView {
    pub fn from_metrics(metrics: &HeadlineMetrics) -> Self {
        Self {
            avg_rent_per_sqm: fmt_opt(metrics.avg_rent_per_sqm, |v| format!("{v:.2} €/m²")),
            vacancy_rate_pct: fmt_opt(metrics.vacancy_rate_pct, |v| format!("{v:.1} %")),
            ownership_rate_pct: fmt_opt(metrics.ownership_rate_pct, |v| format!("{v:.1} %")),
            avg_area_per_apartment: fmt_opt(metrics.avg_area_per_apartment, |v| {
                format!("{v:.1} m²")
            }),
        }
    }
}

fn fmt_opt(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| NO_DATA.to_string())
}
