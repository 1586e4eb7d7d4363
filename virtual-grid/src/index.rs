use core::num::NonZeroUsize;

use crate::ConfigError;

/// Maps linear item indexes to `(row, column)` coordinates and back.
///
/// All methods are total: they are defined for every index, whether or not it is below the
/// collection size. Range checks are the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexMapper {
    column_count: NonZeroUsize,
}

impl IndexMapper {
    /// A single-column mapper (lists/stacks).
    pub const LIST: Self = Self {
        column_count: NonZeroUsize::MIN,
    };

    pub const fn new(column_count: NonZeroUsize) -> Self {
        Self { column_count }
    }

    /// Validates a raw column count.
    pub fn try_new(column_count: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(column_count)
            .map(Self::new)
            .ok_or(ConfigError::ZeroColumnCount)
    }

    pub const fn column_count(&self) -> usize {
        self.column_count.get()
    }

    pub const fn column(&self, index: usize) -> usize {
        index % self.column_count.get()
    }

    pub const fn row(&self, index: usize) -> usize {
        index / self.column_count.get()
    }

    /// Inverse of [`Self::row`]/[`Self::column`]. Saturates instead of overflowing.
    pub const fn index(&self, row: usize, column: usize) -> usize {
        row.saturating_mul(self.column_count.get())
            .saturating_add(column)
    }

    /// `ceil(size / column_count)`; zero iff `size` is zero.
    pub const fn row_count(&self, size: usize) -> usize {
        size.div_ceil(self.column_count.get())
    }
}

impl Default for IndexMapper {
    fn default() -> Self {
        Self::LIST
    }
}
