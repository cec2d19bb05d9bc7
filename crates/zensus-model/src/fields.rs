//! Structural column headers and the four headline metric columns of the
//! source table.

/// Region name column.
pub const REGION_NAME: &str = "Name";
/// Region level column.
pub const REGION_LEVEL: &str = "Regionalebene";

/// Label of the national aggregate row in the source table.
pub const NATIONAL_SOURCE_LABEL: &str = "Deutschland";
/// Canonical display label for the national aggregate row.
pub const NATIONAL_DISPLAY_LABEL: &str = "Germany";

/// Average net cold rent per square meter (€/m²).
pub const AVG_RENT_PER_SQM: &str = "QMMIETE";
/// Vacancy rate (%).
pub const VACANCY_RATE: &str = "LEQ";
/// Ownership rate (%).
pub const OWNERSHIP_RATE: &str = "ETQ";
/// Average area per apartment (m²).
pub const AVG_AREA_PER_APARTMENT: &str = "FLAECHE";
