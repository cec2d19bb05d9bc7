//! Static catalog of the eight thematic column groups.
//!
//! Source column names, display labels, chart titles, and colors follow the
//! Zensus 2022 building and housing survey table. Note that the source sheet
//! really does spell one energy-source header `NERGIETRAEGER__8`; the
//! catalog keeps the misspelling because it is the column's actual name.

use serde::{Deserialize, Serialize};

use crate::ChartKind;

/// One source column of a thematic group and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub source: &'static str,
    pub label: &'static str,
}

const fn field(source: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { source, label }
}

/// The eight thematic groups, in dashboard display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupId {
    BuildingType,
    Ownership,
    HeatingType,
    EnergySource,
    Usage,
    RentBracket,
    LivingArea,
    RoomCount,
}

/// Static metadata for one thematic group: ordered field list, display
/// strings, chart kind, and the category color map.
#[derive(Debug, Clone, Copy)]
pub struct GroupSpec {
    pub id: GroupId,
    pub title: &'static str,
    /// Legend / category-axis title.
    pub category_title: &'static str,
    /// Value-axis title.
    pub value_title: &'static str,
    pub kind: ChartKind,
    /// Declared field order; this order drives bar/slice order downstream.
    pub fields: &'static [FieldSpec],
    colors: &'static [(&'static str, &'static str)],
}

/// ColorBrewer "Paired" palette; also the fallback for unmapped labels.
pub const DEFAULT_PALETTE: [&str; 12] = [
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];

impl GroupSpec {
    /// Color for a category label.
    ///
    /// Unmapped labels fall back to the default palette by category
    /// position; a missing color is never an error.
    pub fn color_for(&self, label: &str, index: usize) -> &'static str {
        self.colors
            .iter()
            .find(|(mapped, _)| *mapped == label)
            .map(|(_, color)| *color)
            .unwrap_or(DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()])
    }
}

/// Catalog lookup by id.
pub fn group_spec(id: GroupId) -> &'static GroupSpec {
    &GROUP_SPECS[id as usize]
}

/// The full catalog, in dashboard display order (indexable by `GroupId`).
pub const GROUP_SPECS: [GroupSpec; 8] = [
    GroupSpec {
        id: GroupId::BuildingType,
        title: "Number of apartments by building type",
        category_title: "Building type",
        value_title: "Quantity",
        kind: ChartKind::Bar,
        fields: &[
            field("GEBAEUDEART_SYS_1", "Apartments in buildings with living space"),
            field("GEBAEUDEART_SYS_11", "Apartments in residential buildings"),
            field(
                "GEBAEUDEART_SYS_111",
                "Apartments in residential buildings (excluding halls of residence)",
            ),
            field("GEBAEUDEART_SYS_112", "Apartments in halls of residence"),
            field("GEBAEUDEART_SYS_12", "Apartments in other buildings with living space"),
        ],
        colors: &[
            ("Apartments in buildings with living space", "#a6cee3"),
            ("Apartments in residential buildings", "#1f78b4"),
            (
                "Apartments in residential buildings (excluding halls of residence)",
                "#b2df8a",
            ),
            ("Apartments in halls of residence", "#33a02c"),
            ("Apartments in other buildings with living space", "#fb9a99"),
        ],
    },
    GroupSpec {
        id: GroupId::Ownership,
        title: "Proportion of apartments (in buildings with living space) by type of ownership",
        category_title: "Form of ownership",
        value_title: "Percent",
        kind: ChartKind::Pie,
        fields: &[
            field("EIGENTUM__1", "Community of apartment owners"),
            field("EIGENTUM__2", "Private individuals"),
            field("EIGENTUM__3", "Housing company"),
            field("EIGENTUM__4", "Municipality or municipal housing company"),
            field("EIGENTUM__5", "Private company"),
            field("EIGENTUM__6", "Other private-sector company"),
            field("EIGENTUM__7", "Federal or state"),
            field("EIGENTUM__8", "Non-profit organization"),
        ],
        colors: &[
            ("Community of apartment owners", "#a6cee3"),
            ("Private individuals", "#1f78b4"),
            ("Housing company", "#b2df8a"),
            ("Municipality or municipal housing company", "#33a02c"),
            ("Private company", "#fb9a99"),
            ("Other private-sector company", "#e31a1c"),
            ("Federal or state", "#fdbf6f"),
            ("Non-profit organization", "#ff7f00"),
        ],
    },
    GroupSpec {
        id: GroupId::HeatingType,
        title: "Number of apartments (in buildings with living space) by heating type",
        category_title: "Heating type",
        value_title: "Quantity",
        kind: ChartKind::Bar,
        fields: &[
            field("HEIZTYP__1", "District heating"),
            field("HEIZTYP__2", "Single-storey heating system"),
            field("HEIZTYP__3", "Block heating"),
            field("HEIZTYP__4", "Central heating"),
            field("HEIZTYP__5", "Single or multi-room stoves (also night storage heaters)"),
            field("HEIZTYP__6", "No heating in the building or in the apartments"),
        ],
        colors: &[
            ("District heating", "#a6cee3"),
            ("Single-storey heating system", "#1f78b4"),
            ("Block heating", "#b2df8a"),
            ("Central heating", "#33a02c"),
            ("Single or multi-room stoves (also night storage heaters)", "#fb9a99"),
            ("No heating in the building or in the apartments", "#e31a1c"),
        ],
    },
    GroupSpec {
        id: GroupId::EnergySource,
        title: "Proportion of apartments (in buildings with living space) by energy source",
        category_title: "Energy source",
        value_title: "Percent",
        kind: ChartKind::Treemap,
        fields: &[
            field("ENERGIETRAEGER__1", "Gas"),
            field("ENERGIETRAEGER__2", "Heating oil"),
            field("ENERGIETRAEGER__3", "Wood, wood pellets"),
            field("ENERGIETRAEGER__4", "Biomass (excluding wood), biogas"),
            field("ENERGIETRAEGER__5", "Solar/geothermal energy, heat pumps"),
            field("ENERGIETRAEGER__6", "Electricity (without heat pumps)"),
            field("ENERGIETRAEGER__7", "Energy source coal"),
            // Misspelled in the source sheet; see module docs.
            field("NERGIETRAEGER__8", "District heating (various energy sources)"),
            field("ENERGIETRAEGER__9", "No energy source (no heating)"),
        ],
        colors: &[
            ("Gas", "#a6cee3"),
            ("Heating oil", "#1f78b4"),
            ("Wood, wood pellets", "#b2df8a"),
            ("Biomass (excluding wood), biogas", "#33a02c"),
            ("Solar/geothermal energy, heat pumps", "#fb9a99"),
            ("Electricity (without heat pumps)", "#e31a1c"),
            ("Energy source coal", "#fdbf6f"),
            ("District heating (various energy sources)", "#ff7f00"),
            ("No energy source (no heating)", "#cab2d6"),
        ],
    },
    GroupSpec {
        id: GroupId::Usage,
        title: "Number of apartments (in buildings with living space) by use",
        category_title: "Use",
        value_title: "Quantity",
        kind: ChartKind::Bar,
        fields: &[
            field("NUTZUNG__01", "Apartments occupied by the owner"),
            field("NUTZUNG__02", "Rented apartments"),
            field("NUTZUNG__03", "Privately used vacation or leisure apartments"),
            field("NUTZUNG__04", "Vacant apartments"),
        ],
        colors: &[
            ("Apartments occupied by the owner", "#a6cee3"),
            ("Rented apartments", "#1f78b4"),
            ("Privately used vacation or leisure apartments", "#b2df8a"),
            ("Vacant apartments", "#33a02c"),
        ],
    },
    GroupSpec {
        id: GroupId::RentBracket,
        title: "Proportion of apartments (in buildings with living space) by net cold rent",
        category_title: "Net cold rent",
        value_title: "Percent",
        kind: ChartKind::Treemap,
        fields: &[
            field("MIETE_EURM2_2__01", "under 4€/m²"),
            field("MIETE_EURM2_2__02", "between 4€/m² and under 6€/m²"),
            field("MIETE_EURM2_2__03", "between 6€/m² and under 8€/m²"),
            field("MIETE_EURM2_2__04", "between 8€/m² and under 10€/m²"),
            field("MIETE_EURM2_2__05", "between 10€/m² and under 12€/m²"),
            field("MIETE_EURM2_2__06", "between 12€/m² and under 14€/m²"),
            field("MIETE_EURM2_2__07", "between 14€/m² and under 16€/m²"),
            field("MIETE_EURM2_2__08", "between 16€/m² and under 18€/m²"),
            field("MIETE_EURM2_2__09", "between 18€/m² and under 20€/m²"),
            field("MIETE_EURM2_2__10", "20€/m² and more"),
        ],
        colors: &[
            ("under 4€/m²", "#a6cee3"),
            ("between 4€/m² and under 6€/m²", "#1f78b4"),
            ("between 6€/m² and under 8€/m²", "#b2df8a"),
            ("between 8€/m² and under 10€/m²", "#33a02c"),
            ("between 10€/m² and under 12€/m²", "#fb9a99"),
            ("between 12€/m² and under 14€/m²", "#e31a1c"),
            ("between 14€/m² and under 16€/m²", "#fdbf6f"),
            ("between 16€/m² and under 18€/m²", "#ff7f00"),
            ("between 18€/m² and under 20€/m²", "#cab2d6"),
            ("20€/m² and more", "#6a3d9a"),
        ],
    },
    GroupSpec {
        id: GroupId::LivingArea,
        title: "Number of apartments (in buildings with living space) by living area",
        category_title: "Living area",
        value_title: "Quantity",
        kind: ChartKind::Bar,
        fields: &[
            field("WOHNFLAECHE_20S__01", "under 40m²"),
            field("WOHNFLAECHE_20S__02", "40m² to 59m²"),
            field("WOHNFLAECHE_20S__03", "60m² to 79m²"),
            field("WOHNFLAECHE_20S__04", "80m² to 99m²"),
            field("WOHNFLAECHE_20S__05", "100m² to 119m²"),
            field("WOHNFLAECHE_20S__06", "120m² to 139m²"),
            field("WOHNFLAECHE_20S__07", "140m² to 159m²"),
            field("WOHNFLAECHE_20S__08", "160m² to 179m²"),
            field("WOHNFLAECHE_20S__09", "180m² to 199m²"),
            field("WOHNFLAECHE_20S__10", "200m² and more"),
        ],
        colors: &[
            ("under 40m²", "#a6cee3"),
            ("40m² to 59m²", "#1f78b4"),
            ("60m² to 79m²", "#b2df8a"),
            ("80m² to 99m²", "#33a02c"),
            ("100m² to 119m²", "#fb9a99"),
            ("120m² to 139m²", "#e31a1c"),
            ("140m² to 159m²", "#fdbf6f"),
            ("160m² to 179m²", "#ff7f00"),
            ("180m² to 199m²", "#cab2d6"),
            ("200m² and more", "#6a3d9a"),
        ],
    },
    GroupSpec {
        id: GroupId::RoomCount,
        title: "Proportion of apartments (in buildings with living space) by number of rooms",
        category_title: "Number of rooms",
        value_title: "Percent",
        kind: ChartKind::Pie,
        fields: &[
            field("RAUMANZAHL__01", "1 Room"),
            field("RAUMANZAHL__02", "2 Rooms"),
            field("RAUMANZAHL__03", "3 Rooms"),
            field("RAUMANZAHL__04", "4 Rooms"),
            field("RAUMANZAHL__05", "5 Rooms"),
            field("RAUMANZAHL__06", "6 Rooms"),
            field("RAUMANZAHL__07", "7 or more rooms"),
        ],
        colors: &[
            ("1 Room", "#a6cee3"),
            ("2 Rooms", "#1f78b4"),
            ("3 Rooms", "#b2df8a"),
            ("4 Rooms", "#33a02c"),
            ("5 Rooms", "#fb9a99"),
            ("6 Rooms", "#e31a1c"),
            ("7 or more rooms", "#fdbf6f"),
        ],
    },
];
