//! Domain models for the vaccination feeds
//!
//! Typed source records decoded from text record batches, and the row types
//! of the published artifacts.

pub mod aggregates;
pub mod dose_event;
pub mod registration;
pub mod traits;

pub use aggregates::{
    GlobalAggregateRow, ManufacturerRow, RegionRow, RegistrationsByDateRow,
    RegistrationsByRegionRow,
};
pub use dose_event::{DoseEvent, DoseOrdinal};
pub use registration::Registration;
pub use traits::{RecordAdapter, RegionalEvent, ToRecordBatch};
