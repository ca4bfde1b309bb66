use vax_aggregator::{Error, PipelineConfig, RegistrationPipeline, Result};

use crate::utils::{count_values, registration_batch, text_values, vaccination_batch};

fn pipeline() -> RegistrationPipeline {
    RegistrationPipeline::new(PipelineConfig::default())
}

#[test]
fn test_registration_counts() -> Result<()> {
    let batch = registration_batch(&[
        ("2021-01-15", "Zlínský kraj"),
        ("2021-01-14", "Hlavní město Praha"),
        ("2021-01-15", "Hlavní město Praha"),
        ("2021-01-15", "Zlínský kraj"),
        ("2021-01-16", ""),
    ]);

    let artifacts = pipeline().run_batch(&batch)?;

    assert_eq!(
        text_values(&artifacts.by_date, "date"),
        vec!["2021-01-14", "2021-01-15", "2021-01-16"]
    );
    assert_eq!(
        count_values(&artifacts.by_date, "total_registrations"),
        vec![1, 3, 1]
    );

    assert_eq!(
        text_values(&artifacts.by_region, "region"),
        vec!["Hlavní město Praha", "Zlínský kraj"]
    );
    assert_eq!(
        count_values(&artifacts.by_region, "total_registrations"),
        vec![2, 2]
    );

    let pivot = &artifacts.by_date_and_region;
    assert_eq!(text_values(pivot, "date"), vec!["2021-01-14", "2021-01-15"]);
    assert_eq!(count_values(pivot, "Zlínský kraj"), vec![0, 2]);
    assert_eq!(count_values(pivot, "Hlavní město Praha"), vec![1, 1]);
    Ok(())
}

#[test]
fn test_vaccination_layout_is_rejected() {
    let batch = vaccination_batch(&[("2021-01-15", "Comirnaty", "1", "Zlínský kraj", "1")]);
    assert!(matches!(
        pipeline().run_batch(&batch),
        Err(Error::SchemaMismatch { .. })
    ));
}

#[test]
fn test_run_requires_a_source() {
    assert!(matches!(
        pipeline().run(),
        Err(Error::MissingSource("registrations"))
    ));
}

#[test]
fn test_named_artifacts() -> Result<()> {
    let artifacts = pipeline().run_batch(&registration_batch(&[("2021-01-15", "Zlínský kraj")]))?;
    let names: Vec<&str> = artifacts.named().iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "registrations_by_date",
            "registrations_by_region",
            "registrations_by_date_and_region"
        ]
    );
    Ok(())
}
