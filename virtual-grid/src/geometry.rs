use crate::float::non_negative;

/// Row/column geometry resolved to pixel-equivalent numbers.
///
/// Values are kept fractional on purpose: rounding an auto-computed column width would
/// accumulate drift across columns.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub row_height: f64,
    pub column_width: f64,
    pub row_spacing: f64,
    pub column_spacing: f64,
}

impl Geometry {
    /// Geometry from plain pixel values.
    pub const fn new(row_height: f64, column_width: f64, row_spacing: f64, column_spacing: f64) -> Self {
        Self {
            row_height,
            column_width,
            row_spacing,
            column_spacing,
        }
    }

    /// The column width that splits `container_width` evenly between `column_count` columns
    /// separated by `column_spacing`.
    ///
    /// Returns `0.0` when the spacing alone is wider than the container.
    pub fn auto_column_width(container_width: f64, column_count: usize, column_spacing: f64) -> f64 {
        let column_count = column_count.max(1);
        let gaps = (column_count - 1) as f64 * column_spacing;
        let width = (container_width - gaps) / column_count as f64;
        if width.is_finite() { width.max(0.0) } else { 0.0 }
    }

    /// Distance between the top edges of two consecutive rows.
    pub fn row_pitch(&self) -> f64 {
        self.row_height + self.row_spacing
    }

    /// Distance between the left edges of two consecutive columns.
    pub fn column_pitch(&self) -> f64 {
        self.column_width + self.column_spacing
    }

    /// Height of `rows` stacked rows: `row_height * rows + row_spacing * (rows - 1)`.
    pub fn rows_extent(&self, rows: usize) -> f64 {
        track_extent(self.row_height, self.row_spacing, rows)
    }

    /// Width of `columns` side-by-side columns.
    pub fn columns_extent(&self, columns: usize) -> f64 {
        track_extent(self.column_width, self.column_spacing, columns)
    }

    /// Replaces negative or non-finite measurements with zero.
    pub fn sanitized(self) -> Self {
        Self {
            row_height: non_negative(self.row_height),
            column_width: non_negative(self.column_width),
            row_spacing: non_negative(self.row_spacing),
            column_spacing: non_negative(self.column_spacing),
        }
    }
}

fn track_extent(extent: f64, spacing: f64, tracks: usize) -> f64 {
    if tracks == 0 {
        return 0.0;
    }
    extent * tracks as f64 + spacing * (tracks - 1) as f64
}

/// Viewport height limits derived from the `*_row_printed_count` options.
///
/// Each field is the height of that many rows (including the spacing between them). Hosts
/// apply these to the scroll container independently of windowing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightConstraint {
    pub height: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
}

impl HeightConstraint {
    pub fn is_unconstrained(&self) -> bool {
        self.height.is_none() && self.min_height.is_none() && self.max_height.is_none()
    }

    /// Applies the constraint to a proposed viewport height.
    pub fn clamp(&self, height: f64) -> f64 {
        if let Some(exact) = self.height {
            return exact;
        }
        let mut h = height;
        if let Some(max) = self.max_height {
            h = h.min(max);
        }
        if let Some(min) = self.min_height {
            h = h.max(min);
        }
        h
    }
}
