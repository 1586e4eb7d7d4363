use alloc::sync::Arc;

use crate::{ConfigError, IndexMapper, Length};

/// Produces the content for one item index.
///
/// The engine never inspects the returned value; it only decides which indexes get rendered
/// and where their wrappers go.
pub type RenderFn<T> = Arc<dyn Fn(usize) -> T + Send + Sync>;

/// How eagerly a synchronization layer recomputes the window after scroll/resize events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyncMode {
    /// Recompute synchronously inside the event handler.
    #[default]
    Immediate,
    /// Queue a low-priority recomputation. Bursts coalesce and stale work is dropped.
    Deferred,
}

/// Configuration for [`crate::VirtualGrid`].
///
/// Cheap to clone: the render function is stored in an `Arc`, so adapters can tweak a few
/// fields and call `VirtualGrid::set_options` without reallocating the closure. Replacing the
/// `Arc` (rather than cloning it) counts as a new render function and resets scrolling.
pub struct GridOptions<T> {
    pub size: usize,
    /// Must be at least 1; checked by [`GridOptions::validate`].
    pub column_count: usize,
    pub row_height: Length,
    /// Fixed column width. `None` splits the viewport width evenly between the columns.
    pub column_width: Option<Length>,
    pub row_spacing: Option<Length>,
    pub column_spacing: Option<Length>,
    /// Fallback for whichever of `row_spacing`/`column_spacing` is unset.
    pub spacing: Option<Length>,

    /// Constrains the viewport to exactly this many rows of content.
    pub row_printed_count: Option<usize>,
    /// Constrains the viewport to at least this many rows of content.
    pub min_row_printed_count: Option<usize>,
    /// Constrains the viewport to at most this many rows of content.
    pub max_row_printed_count: Option<usize>,

    pub mode: SyncMode,
    /// Silences the zero-sized viewport diagnostic.
    pub suppress_diagnostics: bool,

    pub render: RenderFn<T>,
}

impl<T> Clone for GridOptions<T> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            column_count: self.column_count,
            row_height: self.row_height,
            column_width: self.column_width,
            row_spacing: self.row_spacing,
            column_spacing: self.column_spacing,
            spacing: self.spacing,
            row_printed_count: self.row_printed_count,
            min_row_printed_count: self.min_row_printed_count,
            max_row_printed_count: self.max_row_printed_count,
            mode: self.mode,
            suppress_diagnostics: self.suppress_diagnostics,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> GridOptions<T> {
    pub fn new(
        size: usize,
        column_count: usize,
        row_height: Length,
        render: impl Fn(usize) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            size,
            column_count,
            row_height,
            column_width: None,
            row_spacing: None,
            column_spacing: None,
            spacing: None,
            row_printed_count: None,
            min_row_printed_count: None,
            max_row_printed_count: None,
            mode: SyncMode::Immediate,
            suppress_diagnostics: false,
            render: Arc::new(render),
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_column_count(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    pub fn with_row_height(mut self, row_height: Length) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_column_width(mut self, column_width: Option<Length>) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_row_spacing(mut self, row_spacing: Option<Length>) -> Self {
        self.row_spacing = row_spacing;
        self
    }

    pub fn with_column_spacing(mut self, column_spacing: Option<Length>) -> Self {
        self.column_spacing = column_spacing;
        self
    }

    /// Sets the shared spacing used for any axis without its own spacing.
    pub fn with_spacing(mut self, spacing: Option<Length>) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_row_printed_count(mut self, rows: Option<usize>) -> Self {
        self.row_printed_count = rows;
        self
    }

    pub fn with_min_row_printed_count(mut self, rows: Option<usize>) -> Self {
        self.min_row_printed_count = rows;
        self
    }

    pub fn with_max_row_printed_count(mut self, rows: Option<usize>) -> Self {
        self.max_row_printed_count = rows;
        self
    }

    pub fn with_mode(mut self, mode: SyncMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_suppress_diagnostics(mut self, suppress: bool) -> Self {
        self.suppress_diagnostics = suppress;
        self
    }

    pub fn with_render(mut self, render: impl Fn(usize) -> T + Send + Sync + 'static) -> Self {
        self.render = Arc::new(render);
        self
    }

    /// Row spacing after applying the `spacing` fallback.
    pub fn resolved_row_spacing(&self) -> Length {
        self.row_spacing.or(self.spacing).unwrap_or(Length::ZERO)
    }

    /// Column spacing after applying the `spacing` fallback.
    pub fn resolved_column_spacing(&self) -> Length {
        self.column_spacing.or(self.spacing).unwrap_or(Length::ZERO)
    }

    /// Checks the options and returns the index mapper they describe.
    pub fn validate(&self) -> Result<IndexMapper, ConfigError> {
        let mapper = IndexMapper::try_new(self.column_count)?;

        check_length("row_height", self.row_height)?;
        if let Some(width) = self.column_width {
            check_length("column_width", width)?;
        }
        check_length("row_spacing", self.resolved_row_spacing())?;
        check_length("column_spacing", self.resolved_column_spacing())?;

        if let (Some(min), Some(max)) = (self.min_row_printed_count, self.max_row_printed_count) {
            if min > max {
                return Err(ConfigError::InvalidPrintedCounts { min, max });
            }
        }

        Ok(mapper)
    }

    /// Whether moving from `prev` to `self` replaces the collection: a different size, column
    /// count, or render function.
    ///
    /// Scroll offsets are meaningless across such a change and must be reset.
    pub fn replaces_collection(&self, prev: &Self) -> bool {
        self.size != prev.size
            || self.column_count != prev.column_count
            || !Arc::ptr_eq(&self.render, &prev.render)
    }
}

fn check_length(field: &'static str, value: Length) -> Result<(), ConfigError> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidLength { field, value })
    }
}

impl<T> core::fmt::Debug for GridOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("size", &self.size)
            .field("column_count", &self.column_count)
            .field("row_height", &self.row_height)
            .field("column_width", &self.column_width)
            .field("row_spacing", &self.row_spacing)
            .field("column_spacing", &self.column_spacing)
            .field("spacing", &self.spacing)
            .field("row_printed_count", &self.row_printed_count)
            .field("min_row_printed_count", &self.min_row_printed_count)
            .field("max_row_printed_count", &self.max_row_printed_count)
            .field("mode", &self.mode)
            .field("suppress_diagnostics", &self.suppress_diagnostics)
            .finish_non_exhaustive()
    }
}
