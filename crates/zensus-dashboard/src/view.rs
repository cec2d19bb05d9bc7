use serde::{Deserialize, Serialize};
use zensus_model::{ChartSpec, Dataset, Selection, SelectionError, GROUP_SPECS};

use crate::{bind, headline, transform, HeadlineView};

/// Everything one render pass produces for the UI layer: the page title,
/// the four headline metric displays, and the eight chart panels in catalog
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    pub selection: Selection,
    pub headline: HeadlineView,
    pub charts: Vec<ChartSpec>,
}

/// The full recompute pass for one selection.
///
/// Pure function of `(dataset, selection)`; an invalid selection is rejected
/// with [`SelectionError`] instead of rendering undefined state.
pub fn render(dataset: &Dataset, selection: &Selection) -> Result<DashboardView, SelectionError> {
    let record = dataset.select(selection)?;

    let charts = GROUP_SPECS
        .iter()
        .map(|spec| bind(&transform(record, spec), spec))
        .collect();

    Ok(DashboardView {
        title: format!("Housing statistics for {} (2022)", record.region),
        selection: selection.clone(),
        headline: HeadlineView::from_metrics(&headline(record)),
        charts,
    })
}
