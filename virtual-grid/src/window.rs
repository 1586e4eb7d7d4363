use core::ops::Range;

use crate::float::{ceil, floor, to_track};
use crate::{Geometry, Point, Size, ViewportState};

/// The rows and columns that intersect the viewport.
///
/// Both ranges are half-open and may run past the real row/column count; the materializer
/// clips them against the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub rows: Range<usize>,
    pub columns: Range<usize>,
}

impl VisibleWindow {
    pub const EMPTY: Self = Self {
        rows: 0..0,
        columns: 0..0,
    };

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.rows.contains(&row) && self.columns.contains(&column)
    }

    /// Number of `(row, column)` slots in the window, ignoring the collection size.
    pub fn cell_count(&self) -> usize {
        self.rows.len().saturating_mul(self.columns.len())
    }

    /// Restricts the window to `row_count` rows and `column_count` columns.
    pub fn clipped(&self, row_count: usize, column_count: usize) -> Self {
        let window = Self {
            rows: self.rows.start.min(row_count)..self.rows.end.min(row_count),
            columns: self.columns.start.min(column_count)..self.columns.end.min(column_count),
        };
        if window.is_empty() { Self::EMPTY } else { window }
    }
}

/// Computes the track range along one axis.
///
/// ```text
/// start = floor((scroll + spacing) / (extent + spacing))
/// end   = ceil ((scroll + viewport) / (extent + spacing))
/// ```
///
/// Adding `spacing` to the start numerator keeps a track whose trailing edge sits exactly on
/// the scroll boundary out, and one whose leading edge does in. Rounding start down and end
/// up never under-covers; at exact alignment it may include one extra trailing track.
///
/// Returns an empty range for degenerate input (zero or non-finite extents, zero viewport).
pub fn track_range(scroll: f64, viewport: f64, extent: f64, spacing: f64) -> Range<usize> {
    let pitch = extent + spacing;
    let finite = pitch.is_finite() && scroll.is_finite() && viewport.is_finite();
    if !finite || extent.is_nan() || extent <= 0.0 {
        return 0..0;
    }
    let start = floor((scroll + spacing) / pitch);
    let end = ceil((scroll + viewport) / pitch);
    if end <= start {
        return 0..0;
    }
    to_track(start)..to_track(end)
}

/// Largest scroll offset on each axis for the given content size.
pub fn max_scroll(content: Size, viewport: Size) -> Point {
    Point::new(
        (content.width - viewport.width).max(0.0),
        (content.height - viewport.height).max(0.0),
    )
}

/// Computes the visible window for `viewport` over content of size `content`.
///
/// The scroll offset is first clamped into `[0, max_scroll]` per axis, so an axis whose content
/// fits inside the viewport is always windowed from its origin in one shot.
pub fn compute_window(geometry: &Geometry, viewport: &ViewportState, content: Size) -> VisibleWindow {
    let viewport = viewport.normalized();
    let max = max_scroll(content, viewport.size);
    let scroll = Point::new(viewport.scroll.x.min(max.x), viewport.scroll.y.min(max.y));

    let rows = track_range(
        scroll.y,
        viewport.size.height,
        geometry.row_height,
        geometry.row_spacing,
    );
    let columns = track_range(
        scroll.x,
        viewport.size.width,
        geometry.column_width,
        geometry.column_spacing,
    );

    let window = VisibleWindow { rows, columns };
    if window.is_empty() {
        return VisibleWindow::EMPTY;
    }
    window
}
