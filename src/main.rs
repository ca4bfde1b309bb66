use anyhow::Context;
use log::info;
use vax_aggregator::{PipelineConfig, RegistrationPipeline, VaccinationPipeline};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Aggregating {} into {}",
        config.vaccinations_source.display(),
        config.output_dir.display()
    );

    VaccinationPipeline::new(config.clone())
        .run()
        .context("Vaccination pipeline failed")?;

    if config.registrations_source.is_some() {
        RegistrationPipeline::new(config)
            .run()
            .context("Registration pipeline failed")?;
    }

    Ok(())
}
