use thiserror::Error;

use crate::Length;

/// Rejected configuration.
///
/// Options are validated when they are handed to the engine (`VirtualGrid::new`,
/// `VirtualGrid::set_options`); invalid values are never clamped into range.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("column_count must be at least 1")]
    ZeroColumnCount,
    #[error("`{field}` must be finite and non-negative, got {value:?}")]
    InvalidLength { field: &'static str, value: Length },
    #[error("min_row_printed_count ({min}) is greater than max_row_printed_count ({max})")]
    InvalidPrintedCounts { min: usize, max: usize },
}
