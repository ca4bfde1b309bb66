//! Column layouts of the source feeds.

use arrow_schema::{DataType, Field, Schema};

/// Event date
pub const DATE: &str = "datum";
/// Vaccine product label
pub const VACCINE: &str = "vakcina";
/// Vaccine product code
pub const VACCINE_CODE: &str = "vakcina_kod";
/// Dose ordinal
pub const DOSE_ORDINAL: &str = "poradi_davky";
/// Region name
pub const REGION: &str = "kraj_nazev";
/// Region NUTS code
pub const REGION_CODE: &str = "kraj_nuts_kod";
/// Sub-region of residence
pub const RESIDENCE: &str = "orp_bydliste";
/// Sub-region of residence code
pub const RESIDENCE_CODE: &str = "orp_bydliste_kod";
/// Number of doses aggregated in the row
pub const DOSE_COUNT: &str = "pocet_davek";
/// Record identifier
pub const ID: &str = "id";

/// Vaccination site identifier (registrations feed)
pub const SITE_ID: &str = "ockovaci_misto_id";
/// Vaccination site name (registrations feed)
pub const SITE_NAME: &str = "ockovaci_misto_nazev";
/// Age group (registrations feed)
pub const AGE_GROUP: &str = "vekova_skupina";

/// Expected column sequence of one source feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Name used in log messages
    pub name: &'static str,
    /// Columns in source order
    pub columns: &'static [&'static str],
}

/// Dose-level vaccination events
pub const VACCINATIONS: ColumnSchema = ColumnSchema {
    name: "vaccinations",
    columns: &[
        ID,
        DATE,
        VACCINE,
        VACCINE_CODE,
        DOSE_ORDINAL,
        REGION,
        REGION_CODE,
        RESIDENCE,
        RESIDENCE_CODE,
        DOSE_COUNT,
    ],
};

/// Registrations for a vaccination slot
pub const REGISTRATIONS: ColumnSchema = ColumnSchema {
    name: "registrations",
    columns: &[
        DATE,
        SITE_ID,
        SITE_NAME,
        REGION_CODE,
        REGION,
        AGE_GROUP,
        "povolani",
        "stat",
        "rezervace",
        "datum_rezervace",
        "zavora_status",
        "prioritni_skupina",
        "zablokovano",
        "duvod_blokace",
    ],
};

impl ColumnSchema {
    /// Owned copy of the expected column names
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| (*c).to_string()).collect()
    }
}

/// Arrow schema of nullable `Utf8` columns with the given names
#[must_use]
pub fn text_schema<S: AsRef<str>>(columns: &[S]) -> Schema {
    Schema::new(
        columns
            .iter()
            .map(|c| Field::new(c.as_ref(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    )
}
