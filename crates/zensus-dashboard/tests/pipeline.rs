use pretty_assertions::assert_eq;
use zensus_dashboard::{headline, render, transform, HeadlineView};
use zensus_model::{
    group_spec, Dataset, GroupId, RegionLevel, RegionRecord, Selection, SelectionError,
};

fn census_fixture() -> Dataset {
    let mut germany = RegionRecord::new("Germany", RegionLevel::Federal);
    germany.set_field("QMMIETE", 9.5);
    germany.set_field("LEQ", 3.2);
    germany.set_field("ETQ", 45.6);
    germany.set_field("FLAECHE", 91.4);
    germany.set_field("NUTZUNG__01", 19_000_000.0);
    germany.set_field("NUTZUNG__02", 21_000_000.0);
    germany.set_field("EIGENTUM__1", 9_000_000.0);
    germany.set_field("EIGENTUM__2", 25_000_000.0);

    let mut bayern = RegionRecord::new("Bayern", RegionLevel::State);
    bayern.set_field("QMMIETE", 8.75);

    Dataset::new(vec![
        germany,
        bayern,
        RegionRecord::new("Sachsen", RegionLevel::State),
        RegionRecord::new("München", RegionLevel::District),
    ])
}

#[test]
fn headline_scenario_formats_exactly() {
    let dataset = census_fixture();
    let record = dataset.select(&Selection::default()).unwrap();
    let view = HeadlineView::from_metrics(&headline(record));
    assert_eq!(view.avg_rent_per_sqm, "9.50 €/m²");
    assert_eq!(view.vacancy_rate_pct, "3.2 %");
    assert_eq!(view.ownership_rate_pct, "45.6 %");
    assert_eq!(view.avg_area_per_apartment, "91.4 m²");
}

#[test]
fn rent_bracket_scenario_coerces_and_normalizes() {
    // Raw values [10, 0, "n/a", 20]: the text cell reads as missing, counts
    // as zero in the total (30), and keeps a missing percent.
    let mut record = RegionRecord::new("Bayern", RegionLevel::State);
    record.set_field("MIETE_EURM2_2__01", 10.0);
    record.set_field("MIETE_EURM2_2__02", 0.0);
    record.set_field("MIETE_EURM2_2__03", "n/a");
    record.set_field("MIETE_EURM2_2__04", 20.0);

    let rows = transform(&record, group_spec(GroupId::RentBracket));

    assert_eq!(rows[0].quantity, Some(10.0));
    assert_eq!(rows[1].quantity, Some(0.0));
    assert_eq!(rows[2].quantity, None);
    assert_eq!(rows[3].quantity, Some(20.0));

    let expected_first = 100.0 * 10.0 / 30.0;
    let expected_fourth = 100.0 * 20.0 / 30.0;
    assert!((rows[0].percent.unwrap() - expected_first).abs() < 1e-9);
    assert_eq!(rows[1].percent, Some(0.0));
    assert_eq!(rows[2].percent, None);
    assert!((rows[3].percent.unwrap() - expected_fourth).abs() < 1e-9);
    assert!(rows[4..].iter().all(|row| row.percent.is_none()));
}

#[test]
fn state_selector_lists_only_sorted_state_names() {
    let dataset = census_fixture();
    assert_eq!(dataset.regions_at(RegionLevel::State), vec!["Bayern", "Sachsen"]);

    let err = dataset
        .select(&Selection::new(RegionLevel::State, "München"))
        .unwrap_err();
    assert_eq!(
        err,
        SelectionError::RegionNotFound {
            level: RegionLevel::State,
            region: "München".to_string(),
        }
    );
}

#[test]
fn render_produces_eight_charts_in_catalog_order() {
    let dataset = census_fixture();
    let view = render(&dataset, &Selection::default()).unwrap();

    assert_eq!(view.title, "Housing statistics for Germany (2022)");
    assert_eq!(view.charts.len(), 8);
    assert_eq!(view.charts[0].title, "Number of apartments by building type");
    for chart in &view.charts {
        assert_eq!(chart.categories.len(), chart.values.len());
        assert_eq!(chart.categories.len(), chart.percents.len());
        assert_eq!(chart.categories.len(), chart.colors.len());
        assert_eq!(chart.categories.len(), chart.hover.len());
        assert_eq!(chart.region, "Germany");
    }
}

#[test]
fn render_rejects_invalid_selection() {
    let dataset = census_fixture();
    assert!(render(&dataset, &Selection::new(RegionLevel::Federal, "Bayern")).is_err());
}

#[test]
fn rendering_is_deterministic() {
    let dataset = census_fixture();
    let selection = Selection::new(RegionLevel::State, "Bayern");

    let first = render(&dataset, &selection).unwrap();
    let second = render(&dataset, &selection).unwrap();
    assert_eq!(first, second);

    let first_bytes = serde_json::to_vec(&first).unwrap();
    let second_bytes = serde_json::to_vec(&second).unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn category_order_ignores_record_storage_order() {
    let spec = group_spec(GroupId::Ownership);

    let mut forward = RegionRecord::new("Berlin", RegionLevel::State);
    for (index, field) in spec.fields.iter().enumerate() {
        forward.set_field(field.source, index as f64 + 1.0);
    }
    let mut backward = RegionRecord::new("Berlin", RegionLevel::State);
    for (index, field) in spec.fields.iter().enumerate().rev() {
        backward.set_field(field.source, index as f64 + 1.0);
    }

    assert_eq!(transform(&forward, spec), transform(&backward, spec));
}
