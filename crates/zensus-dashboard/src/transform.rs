use serde::{Deserialize, Serialize};
use zensus_model::{ChartSpec, GroupSpec, RegionRecord};

/// One row of a group's long-format table: (category, quantity) plus the
/// derived percent-of-total for composition charts.
///
/// `quantity` is `None` when the source cell is absent or unparseable;
/// missing quantities count as zero toward the group total but stay missing
/// for display. Rows are ephemeral, rebuilt on every selection change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongRow {
    pub region: String,
    pub category: String,
    pub quantity: Option<f64>,
    pub percent: Option<f64>,
}

/// Wide-to-long transform of one thematic group.
///
/// Output order is the group's declared field order, independent of how the
/// record stores its fields, so bar/slice order is reproducible. Percent is
/// only derived for composition (pie/treemap) groups; a zero total yields
/// `None` for every category rather than NaN or infinity.
pub fn transform(record: &RegionRecord, spec: &GroupSpec) -> Vec<LongRow> {
    let mut rows: Vec<LongRow> = spec
        .fields
        .iter()
        .map(|field| LongRow {
            region: record.region.clone(),
            category: field.label.to_string(),
            quantity: record.numeric_field(field.source),
            percent: None,
        })
        .collect();

    if spec.kind.uses_percent() {
        let total: f64 = rows.iter().filter_map(|row| row.quantity).sum();
        if total != 0.0 {
            for row in &mut rows {
                row.percent = row.quantity.map(|quantity| 100.0 * quantity / total);
            }
        }
    }

    rows
}

/// Bind a group's long-format table to a renderable chart description.
///
/// Colors resolve through the group's map with a default-palette fallback;
/// hover text is pure string interpolation over the row.
pub fn bind(rows: &[LongRow], spec: &GroupSpec) -> ChartSpec {
    let mut categories = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());
    let mut percents = Vec::with_capacity(rows.len());
    let mut colors = Vec::with_capacity(rows.len());
    let mut hover = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        categories.push(row.category.clone());
        values.push(row.quantity);
        percents.push(row.percent);
        colors.push(spec.color_for(&row.category, index).to_string());
        hover.push(hover_text(spec, row));
    }

    ChartSpec {
        kind: spec.kind,
        title: spec.title.to_string(),
        category_title: spec.category_title.to_string(),
        value_title: spec.value_title.to_string(),
        region: rows.first().map(|row| row.region.clone()).unwrap_or_default(),
        categories,
        values,
        percents,
        colors,
        hover,
    }
}

fn hover_text(spec: &GroupSpec, row: &LongRow) -> String {
    if spec.kind.uses_percent() {
        match row.percent {
            Some(percent) => format!("{} | Percent: {percent:.2}%", row.category),
            None => format!("{} | no data", row.category),
        }
    } else {
        match row.quantity {
            Some(quantity) => format!(
                "{}: {} | Quantity: {}",
                spec.category_title,
                row.category,
                format_quantity(quantity)
            ),
            None => format!("{}: {} | no data", spec.category_title, row.category),
        }
    }
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use zensus_model::{group_spec, GroupId, RegionLevel};

    fn usage_record() -> RegionRecord {
        let mut record = RegionRecord::new("Bayern", RegionLevel::State);
        record.set_field("NUTZUNG__01", 100.0);
        record.set_field("NUTZUNG__02", 250.0);
        record.set_field("NUTZUNG__04", 50.0);
        record
    }

    #[test]
    fn bar_groups_carry_no_percent() {
        let spec = group_spec(GroupId::Usage);
        let rows = transform(&usage_record(), spec);
        assert_eq!(rows.len(), spec.fields.len());
        assert!(rows.iter().all(|row| row.percent.is_none()));
        assert_eq!(rows[1].quantity, Some(250.0));
        // NUTZUNG__03 was never set: missing, not zero.
        assert_eq!(rows[2].quantity, None);
    }

    #[test]
    fn rows_follow_declared_field_order() {
        let spec = group_spec(GroupId::Usage);
        let rows = transform(&usage_record(), spec);
        let labels: Vec<&str> = rows.iter().map(|row| row.category.as_str()).collect();
        let expected: Vec<&str> = spec.fields.iter().map(|field| field.label).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn percents_use_zero_filled_total() {
        let spec = group_spec(GroupId::RoomCount);
        let mut record = RegionRecord::new("Bayern", RegionLevel::State);
        record.set_field("RAUMANZAHL__01", 25.0);
        record.set_field("RAUMANZAHL__02", 75.0);
        // Remaining five columns missing: they count as zero in the total.
        let rows = transform(&record, spec);
        assert_eq!(rows[0].percent, Some(25.0));
        assert_eq!(rows[1].percent, Some(75.0));
        assert_eq!(rows[2].percent, None);
    }

    #[test]
    fn zero_total_yields_no_data_not_nan() {
        let spec = group_spec(GroupId::RoomCount);
        let mut record = RegionRecord::new("Bayern", RegionLevel::State);
        for field in spec.fields {
            record.set_field(field.source, 0.0);
        }
        let rows = transform(&record, spec);
        assert!(rows.iter().all(|row| row.percent.is_none()));
        assert!(rows.iter().all(|row| row.quantity == Some(0.0)));
    }

    #[test]
    fn bind_resolves_colors_in_catalog_order() {
        let spec = group_spec(GroupId::Usage);
        let chart = bind(&transform(&usage_record(), spec), spec);
        assert_eq!(chart.colors[0], "#a6cee3");
        assert_eq!(chart.colors[1], "#1f78b4");
        assert_eq!(chart.region, "Bayern");
        assert_eq!(chart.kind, spec.kind);
    }

    #[test]
    fn hover_text_distinguishes_missing_values() {
        let spec = group_spec(GroupId::Usage);
        let chart = bind(&transform(&usage_record(), spec), spec);
        assert_eq!(chart.hover[0], "Use: Apartments occupied by the owner | Quantity: 100");
        assert_eq!(
            chart.hover[2],
            "Use: Privately used vacation or leisure apartments | no data"
        );
    }
}
