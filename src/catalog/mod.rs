//! Vaccine catalog
//!
//! This module maps raw vaccine product labels, including the label variants
//! introduced by revisions of the source feed, to canonical manufacturer names,
//! and records which canonical products are given as a single-dose regimen.
//!
//! IMPORTANT: when a product is added, check whether it is a single-dose one.
//! If it is, it must be listed in `SINGLE_DOSE_VACCINES`, otherwise its
//! completions are undercounted in `total_vaccinations`.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};

/// Raw product label to canonical manufacturer name
const VACCINE_MAPPING: &[(&str, &str)] = &[
    ("Comirnaty", "Pfizer/BioNTech"),
    ("Comirnaty 5-11", "Pfizer/BioNTech"),
    ("Comirnaty Original/Omicron BA.1", "Pfizer/BioNTech"),
    ("Comirnaty Original/Omicron BA.4/BA.5", "Pfizer/BioNTech"),
    ("COVID-19 Vaccine Moderna", "Moderna"),
    ("Spikevax", "Moderna"),
    ("Spikevax bivalent Original/Omicron BA.1", "Moderna"),
    ("COVID-19 Vaccine AstraZeneca", "Oxford/AstraZeneca"),
    ("VAXZEVRIA", "Oxford/AstraZeneca"),
    ("COVID-19 Vaccine Janssen", "Johnson&Johnson"),
    ("Jcovden", "Johnson&Johnson"),
    ("Nuvaxovid", "Novavax"),
];

/// Canonical names whose standard course is one dose
const SINGLE_DOSE_VACCINES: &[&str] = &["Johnson&Johnson"];

static DEFAULT_CATALOG: LazyLock<VaccineCatalog> =
    LazyLock::new(|| VaccineCatalog::new(VACCINE_MAPPING, SINGLE_DOSE_VACCINES));

/// Dosing regimen of a canonical vaccine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegimenKind {
    /// One dose completes the course; no second dose is ever recorded
    SingleDose,
    /// The course is completed by a second dose
    MultiDose,
}

impl RegimenKind {
    /// Get the display name for this regimen
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SingleDose => "single-dose",
            Self::MultiDose => "multi-dose",
        }
    }
}

impl fmt::Display for RegimenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Closed mapping from raw product labels to canonical vaccine names
#[derive(Debug, Clone)]
pub struct VaccineCatalog {
    labels: FxHashMap<String, String>,
    single_dose: FxHashSet<String>,
}

impl VaccineCatalog {
    /// Build a catalog from `(raw label, canonical name)` pairs and the
    /// canonical names given as a single dose
    #[must_use]
    pub fn new(mapping: &[(&str, &str)], single_dose: &[&str]) -> Self {
        Self {
            labels: mapping
                .iter()
                .map(|(raw, canonical)| ((*raw).to_string(), (*canonical).to_string()))
                .collect(),
            single_dose: single_dose.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    /// The catalog for the national vaccination feed
    #[must_use]
    pub fn czech() -> &'static Self {
        &DEFAULT_CATALOG
    }

    /// Canonical name for a raw label, if the label is known
    #[must_use]
    pub fn canonical_name(&self, label: &str) -> Option<&str> {
        self.labels.get(label).map(String::as_str)
    }

    /// Whether a raw label is part of the catalog
    #[must_use]
    pub fn is_known(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    /// Regimen of a canonical vaccine name
    #[must_use]
    pub fn regimen(&self, canonical: &str) -> RegimenKind {
        if self.single_dose.contains(canonical) {
            RegimenKind::SingleDose
        } else {
            RegimenKind::MultiDose
        }
    }

    /// Distinct canonical names, sorted
    #[must_use]
    pub fn canonical_names(&self) -> BTreeSet<&str> {
        self.labels.values().map(String::as_str).collect()
    }

    /// Fail with `UnknownVaccine` when any label is absent from the catalog
    pub fn check_labels<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> Result<()> {
        let unknown: BTreeSet<String> = labels
            .into_iter()
            .filter(|label| !self.is_known(label))
            .map(str::to_string)
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(Error::UnknownVaccine { labels: unknown })
        }
    }
}
