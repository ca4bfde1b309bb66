//! End-to-end pipelines
//!
//! Each pipeline validates one source table, derives every artifact in
//! memory and only then writes them, so a failing run leaves nothing behind.

pub mod registrations;
pub mod vaccinations;

pub use registrations::{RegistrationArtifacts, RegistrationPipeline};
pub use vaccinations::{VaccinationArtifacts, VaccinationPipeline};
