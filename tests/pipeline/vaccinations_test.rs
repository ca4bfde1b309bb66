use chrono::NaiveDate;
use vax_aggregator::schema::VACCINATIONS;
use vax_aggregator::{Error, PipelineConfig, Result, VaccinationPipeline};

use crate::utils::{count_values, text_batch, text_values, vaccination_batch};

fn pipeline() -> VaccinationPipeline<'static> {
    VaccinationPipeline::new(PipelineConfig::default())
}

#[test]
fn test_cumulative_two_dose_totals() -> Result<()> {
    let batch = vaccination_batch(&[
        ("2020-12-27", "Comirnaty", "1", "Hlavní město Praha", "500"),
        ("2020-12-27", "Comirnaty", "2", "Hlavní město Praha", "300"),
        ("2021-01-05", "Comirnaty", "1", "Hlavní město Praha", "100"),
        ("2021-01-05", "Comirnaty", "2", "Hlavní město Praha", "80"),
    ]);

    let artifacts = pipeline().run_batch(&batch)?;
    let aggregation = &artifacts.aggregation;

    assert_eq!(text_values(aggregation, "date"), vec!["2020-12-27", "2021-01-05"]);
    assert_eq!(
        text_values(aggregation, "vaccine"),
        vec!["Pfizer/BioNTech", "Pfizer/BioNTech"]
    );
    assert_eq!(count_values(aggregation, "people_vaccinated"), vec![500, 600]);
    assert_eq!(count_values(aggregation, "people_fully_vaccinated"), vec![300, 380]);
    assert_eq!(count_values(aggregation, "total_vaccinations"), vec![800, 980]);
    Ok(())
}

#[test]
fn test_single_dose_vaccine_is_not_double_counted() -> Result<()> {
    let batch = vaccination_batch(&[(
        "2020-12-27",
        "COVID-19 Vaccine Janssen",
        "1",
        "Jihomoravský kraj",
        "50",
    )]);

    let artifacts = pipeline().run_batch(&batch)?;
    let aggregation = &artifacts.aggregation;

    assert_eq!(text_values(aggregation, "vaccine"), vec!["Johnson&Johnson"]);
    assert_eq!(count_values(aggregation, "people_vaccinated"), vec![50]);
    assert_eq!(count_values(aggregation, "people_fully_vaccinated"), vec![50]);
    assert_eq!(count_values(aggregation, "total_vaccinations"), vec![50]);
    Ok(())
}

#[test]
fn test_mixed_regimens_on_one_day() -> Result<()> {
    let batch = vaccination_batch(&[
        ("2020-12-27", "Comirnaty", "1", "Zlínský kraj", "10"),
        ("2020-12-27", "Comirnaty", "2", "Zlínský kraj", "5"),
        ("2020-12-27", "Jcovden", "1", "Zlínský kraj", "4"),
        ("2020-12-27", "Spikevax", "3", "Zlínský kraj", "2"),
        ("2020-12-27", "Spikevax", "4", "Zlínský kraj", "1"),
    ]);

    let artifacts = pipeline().run_batch(&batch)?;
    let aggregation = &artifacts.aggregation;

    assert_eq!(
        text_values(aggregation, "vaccine"),
        vec!["Johnson&Johnson, Moderna, Pfizer/BioNTech"]
    );
    assert_eq!(count_values(aggregation, "people_vaccinated"), vec![14]);
    assert_eq!(count_values(aggregation, "people_fully_vaccinated"), vec![9]);
    assert_eq!(count_values(aggregation, "people_boosted_1"), vec![2]);
    assert_eq!(count_values(aggregation, "people_boosted_2"), vec![1]);
    assert_eq!(count_values(aggregation, "total_vaccinations"), vec![19]);
    Ok(())
}

#[test]
fn test_missing_vaccine_column_is_a_schema_mismatch() {
    let names: Vec<&str> = VACCINATIONS
        .columns
        .iter()
        .copied()
        .filter(|c| *c != "vakcina")
        .collect();
    let columns = vec![vec![Some("x".to_string())]; names.len()];
    let batch = text_batch(&names, columns);

    match pipeline().run_batch(&batch) {
        Err(Error::SchemaMismatch { expected, actual }) => {
            assert!(expected.contains(&"vakcina".to_string()));
            assert!(!actual.contains(&"vakcina".to_string()));
            assert_eq!(actual.len(), expected.len() - 1);
        }
        other => panic!("expected a schema mismatch, got {other:?}"),
    }
}

#[test]
fn test_unknown_brand_is_rejected() {
    let batch = vaccination_batch(&[
        ("2020-12-27", "Comirnaty", "1", "Zlínský kraj", "10"),
        ("2020-12-28", "UnknownBrand X", "1", "Zlínský kraj", "1"),
    ]);

    match pipeline().run_batch(&batch) {
        Err(Error::UnknownVaccine { labels }) => {
            assert_eq!(labels.into_iter().collect::<Vec<_>>(), vec!["UnknownBrand X"]);
        }
        other => panic!("expected an unknown vaccine, got {other:?}"),
    }
}

#[test]
fn test_late_start_date_is_rejected() {
    let batch = vaccination_batch(&[("2020-12-28", "Comirnaty", "1", "Zlínský kraj", "10")]);

    match pipeline().run_batch(&batch) {
        Err(Error::UnexpectedStartDate { expected, found }) => {
            assert_eq!(expected, NaiveDate::from_ymd_opt(2020, 12, 27).unwrap());
            assert_eq!(found, NaiveDate::from_ymd_opt(2020, 12, 28));
        }
        other => panic!("expected an unexpected start date, got {other:?}"),
    }
}

#[test]
fn test_configured_start_date() -> Result<()> {
    let config = PipelineConfig::default()
        .with_expected_start_date(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
    let batch = vaccination_batch(&[("2021-03-01", "Nuvaxovid", "1", "Zlínský kraj", "3")]);

    let artifacts = VaccinationPipeline::new(config).run_batch(&batch)?;
    assert_eq!(count_values(&artifacts.aggregation, "total_vaccinations"), vec![3]);
    Ok(())
}

#[test]
fn test_rows_without_label_are_dropped() -> Result<()> {
    let batch = vaccination_batch(&[
        ("2020-12-27", "Comirnaty", "1", "Zlínský kraj", "10"),
        ("2020-12-27", "", "1", "Zlínský kraj", "1000"),
    ]);

    let artifacts = pipeline().run_batch(&batch)?;
    assert_eq!(count_values(&artifacts.aggregation, "people_vaccinated"), vec![10]);
    assert_eq!(count_values(&artifacts.by_region, "total_vaccinations"), vec![10]);
    Ok(())
}

#[test]
fn test_all_rows_unlabelled_yields_no_start_date() {
    let batch = vaccination_batch(&[("2020-12-27", "", "1", "Zlínský kraj", "1")]);

    assert!(matches!(
        pipeline().run_batch(&batch),
        Err(Error::UnexpectedStartDate { found: None, .. })
    ));
}

#[test]
fn test_invalid_cells_are_rejected() {
    for row in [
        ("2020-12-27", "Comirnaty", "7", "Zlínský kraj", "1"),
        ("2020-12-27", "Comirnaty", "1", "Zlínský kraj", "many"),
        ("not a date", "Comirnaty", "1", "Zlínský kraj", "1"),
    ] {
        let batch = vaccination_batch(&[row]);
        assert!(
            matches!(
                pipeline().run_batch(&batch),
                Err(Error::InvalidRecord { .. })
            ),
            "row {row:?} should be rejected"
        );
    }
}

#[test]
fn test_lateral_breakdowns() -> Result<()> {
    let batch = vaccination_batch(&[
        ("2020-12-27", "Comirnaty", "1", "Zlínský kraj", "10"),
        ("2020-12-27", "COVID-19 Vaccine Moderna", "1", "Hlavní město Praha", "3"),
        ("2020-12-28", "Comirnaty 5-11", "2", "Zlínský kraj", "7"),
        ("2020-12-28", "Spikevax", "1", "Zlínský kraj", "2"),
        ("2020-12-28", "Spikevax", "1", "", "5"),
    ]);

    let artifacts = pipeline().run_batch(&batch)?;

    let by_manufacturer = &artifacts.by_manufacturer;
    assert_eq!(
        text_values(by_manufacturer, "vaccine"),
        vec!["Moderna", "Pfizer/BioNTech", "Moderna", "Pfizer/BioNTech"]
    );
    assert_eq!(
        count_values(by_manufacturer, "total_vaccinations"),
        vec![3, 10, 10, 17]
    );

    let by_region = &artifacts.by_region;
    assert_eq!(
        text_values(by_region, "region"),
        vec!["Hlavní město Praha", "Zlínský kraj"]
    );
    assert_eq!(count_values(by_region, "total_vaccinations"), vec![3, 19]);

    let pivot = &artifacts.by_date_and_region;
    assert_eq!(text_values(pivot, "date"), vec!["2020-12-27", "2020-12-28"]);
    assert_eq!(count_values(pivot, "Hlavní město Praha"), vec![1, 0]);
    assert_eq!(count_values(pivot, "Zlínský kraj"), vec![1, 2]);
    assert_eq!(pivot.num_columns(), 3);
    Ok(())
}

#[test]
fn test_named_artifacts() -> Result<()> {
    let batch = vaccination_batch(&[("2020-12-27", "Comirnaty", "1", "Zlínský kraj", "1")]);
    let artifacts = pipeline().run_batch(&batch)?;

    let names: Vec<&str> = artifacts.named().iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec!["by_manufacturer", "by_date_and_region", "by_region", "aggregation"]
    );
    Ok(())
}
