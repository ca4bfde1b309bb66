//! Utilities for working with Arrow record batches.

pub mod array_utils;
pub mod extractors;

pub use array_utils::{downcast_array, get_column, string_column};
pub use extractors::{extract_count, extract_date, extract_required_text, extract_text};
