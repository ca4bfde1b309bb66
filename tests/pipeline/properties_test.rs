use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vax_aggregator::{PipelineConfig, RegimenKind, Result, VaccinationPipeline, VaccineCatalog};

use crate::utils::{count_values, text_values, vaccination_batch};

const LABELS: [&str; 6] = [
    "Comirnaty",
    "Comirnaty 5-11",
    "Spikevax",
    "VAXZEVRIA",
    "COVID-19 Vaccine Janssen",
    "Nuvaxovid",
];

const REGIONS: [&str; 4] = [
    "Hlavní město Praha",
    "Jihočeský kraj",
    "Zlínský kraj",
    "",
];

/// Random source rows as owned strings: date, label, ordinal, region, count
fn random_rows(seed: u64, count: usize) -> Vec<[String; 5]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = chrono::NaiveDate::from_ymd_opt(2020, 12, 27).unwrap();

    let mut rows = vec![[
        start.to_string(),
        "Comirnaty".to_string(),
        "1".to_string(),
        REGIONS[0].to_string(),
        "1".to_string(),
    ]];
    for _ in 0..count {
        let date = start + chrono::Days::new(rng.random_range(0..90));
        rows.push([
            date.to_string(),
            LABELS[rng.random_range(0..LABELS.len())].to_string(),
            rng.random_range(1..=4u8).to_string(),
            REGIONS[rng.random_range(0..REGIONS.len())].to_string(),
            rng.random_range(0..500u32).to_string(),
        ]);
    }
    rows
}

fn run(rows: &[[String; 5]]) -> Result<vax_aggregator::VaccinationArtifacts> {
    let borrowed: Vec<_> = rows
        .iter()
        .map(|r| {
            (
                r[0].as_str(),
                r[1].as_str(),
                r[2].as_str(),
                r[3].as_str(),
                r[4].as_str(),
            )
        })
        .collect();
    VaccinationPipeline::new(PipelineConfig::default()).run_batch(&vaccination_batch(&borrowed))
}

fn assert_non_decreasing(values: &[u64], column: &str) {
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "{column} decreased: {pair:?}");
    }
}

#[test]
fn test_dates_increase_and_totals_accumulate() -> Result<()> {
    for seed in [7, 42, 2021] {
        let artifacts = run(&random_rows(seed, 400))?;
        let aggregation = &artifacts.aggregation;

        let dates = text_values(aggregation, "date");
        assert_eq!(dates[0], "2020-12-27");
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1], "dates not strictly increasing: {pair:?}");
        }

        for column in [
            "people_vaccinated",
            "people_fully_vaccinated",
            "people_boosted_1",
            "people_boosted_2",
            "total_vaccinations",
        ] {
            assert_non_decreasing(&count_values(aggregation, column), column);
        }
    }
    Ok(())
}

#[test]
fn test_final_totals_follow_the_regimens() -> Result<()> {
    let rows = random_rows(99, 600);
    let catalog = VaccineCatalog::czech();

    let mut first = 0u64;
    let mut completed = 0u64;
    let mut total = 0u64;
    for row in &rows {
        let count: u64 = row[4].parse().unwrap();
        let regimen = catalog.regimen(catalog.canonical_name(&row[1]).unwrap());
        match (row[2].as_str(), regimen) {
            ("1", RegimenKind::SingleDose) => {
                first += count;
                completed += count;
                total += count;
            }
            ("1", RegimenKind::MultiDose) => {
                first += count;
                total += count;
            }
            ("2", RegimenKind::MultiDose) => {
                completed += count;
                total += count;
            }
            _ => {}
        }
    }

    let artifacts = run(&rows)?;
    let aggregation = &artifacts.aggregation;
    assert_eq!(count_values(aggregation, "people_vaccinated").last(), Some(&first));
    assert_eq!(
        count_values(aggregation, "people_fully_vaccinated").last(),
        Some(&completed)
    );
    assert_eq!(count_values(aggregation, "total_vaccinations").last(), Some(&total));
    Ok(())
}

#[test]
fn test_manufacturer_series_accumulate() -> Result<()> {
    let artifacts = run(&random_rows(5, 300))?;
    let by_manufacturer = &artifacts.by_manufacturer;

    let vaccines = text_values(by_manufacturer, "vaccine");
    let totals = count_values(by_manufacturer, "total_vaccinations");
    let catalog = VaccineCatalog::czech();
    for name in catalog.canonical_names() {
        let series: Vec<u64> = vaccines
            .iter()
            .zip(&totals)
            .filter(|(vaccine, _)| vaccine.as_str() == name)
            .map(|(_, total)| *total)
            .collect();
        assert_non_decreasing(&series, name);
    }
    Ok(())
}
