//! Utilities shared by the pipelines.

pub mod arrow;
pub mod logging;
