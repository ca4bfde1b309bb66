use std::path::PathBuf;

use vax_aggregator::{OutputFormat, PipelineConfig, Result};

use crate::utils::scratch_dir;

#[test]
fn test_json_configuration_file() -> Result<()> {
    let dir = scratch_dir("config-json");
    let path = dir.join("config.json");
    std::fs::write(
        &path,
        r#"{
            "vaccinations_source": "/data/ockovaci-mista.csv",
            "registrations_source": "/data/ockovani-registrace.csv",
            "output_format": "parquet",
            "batch_size": 512,
            "date_format_config": {"date_formats": ["%d.%m.%Y"]}
        }"#,
    )
    .unwrap();

    let config = PipelineConfig::from_json_file(&path)?;
    assert_eq!(config.vaccinations_source, PathBuf::from("/data/ockovaci-mista.csv"));
    assert_eq!(
        config.registrations_source,
        Some(PathBuf::from("/data/ockovani-registrace.csv"))
    );
    assert_eq!(config.output_format, OutputFormat::Parquet);
    assert_eq!(config.batch_size, 512);
    assert_eq!(config.date_format_config.date_formats, vec!["%d.%m.%Y"]);
    assert!(config.date_format_config.enable_format_detection);
    Ok(())
}

#[test]
fn test_malformed_configuration_file() {
    let dir = scratch_dir("config-malformed");
    let path = dir.join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        PipelineConfig::from_json_file(&path),
        Err(vax_aggregator::Error::Config(_))
    ));
}

#[test]
fn test_missing_configuration_file() {
    let path = scratch_dir("config-missing").join("absent.json");
    assert!(matches!(
        PipelineConfig::from_json_file(&path),
        Err(vax_aggregator::Error::Io { .. })
    ));
}

#[test]
fn test_overrides_take_precedence() {
    let config = PipelineConfig::default()
        .with_output_format(OutputFormat::Parquet)
        .with_overrides(|key| match key {
            "VAX_OUTPUT_FORMAT" => Some("csv".to_string()),
            "VAX_OUTPUT_DIR" => Some("/srv/artifacts".to_string()),
            "VAX_REGISTRATIONS_SOURCE" => Some("registrace.csv".to_string()),
            _ => None,
        });

    assert_eq!(config.output_format, OutputFormat::Csv);
    assert_eq!(config.output_dir, PathBuf::from("/srv/artifacts"));
    assert_eq!(config.registrations_source, Some(PathBuf::from("registrace.csv")));
}
