use crate::{GridOptions, Length, SyncMode};

/// Options for a single-column list ("stack").
///
/// A stack is a grid with one auto-width column and no column spacing; this type only exposes
/// the row axis and converts into [`GridOptions`], so the same engine windows both.
pub struct StackOptions<T> {
    grid: GridOptions<T>,
}

impl<T> StackOptions<T> {
    pub fn new(
        size: usize,
        row_height: Length,
        render: impl Fn(usize) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            grid: GridOptions::new(size, 1, row_height, render)
                .with_column_spacing(Some(Length::ZERO)),
        }
    }

    pub fn with_size(self, size: usize) -> Self {
        Self {
            grid: self.grid.with_size(size),
        }
    }

    /// Spacing between consecutive rows.
    pub fn with_spacing(self, spacing: Option<Length>) -> Self {
        Self {
            grid: self.grid.with_row_spacing(spacing),
        }
    }

    pub fn with_row_printed_count(self, rows: Option<usize>) -> Self {
        Self {
            grid: self.grid.with_row_printed_count(rows),
        }
    }

    pub fn with_min_row_printed_count(self, rows: Option<usize>) -> Self {
        Self {
            grid: self.grid.with_min_row_printed_count(rows),
        }
    }

    pub fn with_max_row_printed_count(self, rows: Option<usize>) -> Self {
        Self {
            grid: self.grid.with_max_row_printed_count(rows),
        }
    }

    pub fn with_mode(self, mode: SyncMode) -> Self {
        Self {
            grid: self.grid.with_mode(mode),
        }
    }

    pub fn with_suppress_diagnostics(self, suppress: bool) -> Self {
        Self {
            grid: self.grid.with_suppress_diagnostics(suppress),
        }
    }

    pub fn into_grid_options(self) -> GridOptions<T> {
        self.grid
    }
}

impl<T> From<StackOptions<T>> for GridOptions<T> {
    fn from(stack: StackOptions<T>) -> Self {
        stack.into_grid_options()
    }
}

impl<T> Clone for StackOptions<T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
        }
    }
}

impl<T> core::fmt::Debug for StackOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackOptions")
            .field("size", &self.grid.size)
            .field("row_height", &self.grid.row_height)
            .field("spacing", &self.grid.row_spacing)
            .field("mode", &self.grid.mode)
            .finish_non_exhaustive()
    }
}
