use virtual_grid::{Geometry, GridOptions, Length, Point, Size, ViewportState};

use crate::{ProbeBox, ViewportHost};

/// The result of one probe: the viewport content box plus resolved geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub viewport: Size,
    pub geometry: Geometry,
}

impl Measurement {
    /// `true` when the viewport has a zero width or height (for example, not attached yet).
    pub fn is_degenerate(&self) -> bool {
        self.viewport.has_zero_side()
    }
}

/// Resolves row height, column width and spacing by measuring calibration boxes on the host.
///
/// Two probes are realized on every call:
/// - a cell probe sized `row_height` × `column_width` (or `Auto` when no width is fixed)
/// - a spacing probe sized `column_spacing` × `row_spacing`
///
/// Nothing is cached: lengths such as percentages depend on the current viewport, so every
/// call reads the host again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryProber {
    cell: ProbeBox,
    spacing: ProbeBox,
    column_count: usize,
    explicit_column_width: bool,
}

impl GeometryProber {
    pub fn new<T>(options: &GridOptions<T>) -> Self {
        Self {
            cell: ProbeBox {
                width: options.column_width.unwrap_or(Length::Auto),
                height: options.row_height,
            },
            spacing: ProbeBox {
                width: options.resolved_column_spacing(),
                height: options.resolved_row_spacing(),
            },
            column_count: options.column_count.max(1),
            explicit_column_width: options.column_width.is_some(),
        }
    }

    pub fn probe<H: ViewportHost + ?Sized>(&self, host: &H) -> Measurement {
        // Negative and NaN sizes count as zero, as in `VirtualGrid::set_viewport`.
        let viewport = ViewportState::new(Point::ZERO, host.client_size())
            .normalized()
            .size;
        let cell = host.measure(&self.cell);
        let spacing = host.measure(&self.spacing);

        let column_width = if self.explicit_column_width {
            cell.width
        } else {
            Geometry::auto_column_width(viewport.width, self.column_count, spacing.width)
        };

        adapter_trace!(
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            row_height = cell.height,
            column_width,
            "GeometryProber::probe"
        );

        Measurement {
            viewport,
            geometry: Geometry::new(cell.height, column_width, spacing.height, spacing.width)
                .sanitized(),
        }
    }
}
