use alloc::vec::Vec;

use crate::float::{floor, to_track};
use crate::overflow::content_size;
use crate::window::{compute_window, max_scroll};
use crate::{
    Align, Cell, CellRect, ConfigError, Geometry, GridOptions, HeightConstraint, IndexMapper,
    Materializer, Overflow, Point, Size, ViewportState, VisibleWindow,
};

/// What a call to [`VirtualGrid::set_options`] changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsChange {
    /// Size, column count or render function changed. Scroll was reset to the origin.
    Collection,
    /// Only layout inputs or settings changed; geometry must be re-measured.
    Layout,
}

/// The windowing state for one grid.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it resolved [`Geometry`] and the current [`ViewportState`].
/// - It answers which indexes are visible, where they go, and whether each axis overflows.
///
/// For measurement and event synchronization, see the `virtual-grid-adapter` crate.
#[derive(Clone, Debug)]
pub struct VirtualGrid<T> {
    options: GridOptions<T>,
    mapper: IndexMapper,
    geometry: Geometry,
    viewport: ViewportState,
}

impl<T> VirtualGrid<T> {
    /// Creates a grid with zero geometry and an empty viewport.
    ///
    /// The window stays empty until geometry and a viewport size are supplied.
    pub fn new(options: GridOptions<T>) -> Result<Self, ConfigError> {
        let mapper = options.validate()?;
        grid_debug!(
            size = options.size,
            column_count = options.column_count,
            mode = ?options.mode,
            "VirtualGrid::new"
        );
        Ok(Self {
            options,
            mapper,
            geometry: Geometry::default(),
            viewport: ViewportState::default(),
        })
    }

    pub fn options(&self) -> &GridOptions<T> {
        &self.options
    }

    /// Replaces the options.
    ///
    /// On error nothing changes. When the collection is replaced (see
    /// [`GridOptions::replaces_collection`]) the scroll offset is reset to the origin.
    pub fn set_options(&mut self, options: GridOptions<T>) -> Result<OptionsChange, ConfigError> {
        let mapper = options.validate()?;
        let change = if options.replaces_collection(&self.options) {
            OptionsChange::Collection
        } else {
            OptionsChange::Layout
        };
        self.options = options;
        self.mapper = mapper;
        if change == OptionsChange::Collection {
            self.viewport.scroll = Point::ZERO;
        }
        grid_trace!(
            size = self.options.size,
            column_count = self.options.column_count,
            ?change,
            "VirtualGrid::set_options"
        );
        Ok(change)
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut GridOptions<T>),
    ) -> Result<OptionsChange, ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn size(&self) -> usize {
        self.options.size
    }

    pub fn column_count(&self) -> usize {
        self.mapper.column_count()
    }

    pub fn row_count(&self) -> usize {
        self.mapper.row_count(self.options.size)
    }

    pub fn mapper(&self) -> IndexMapper {
        self.mapper
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry.sanitized();
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportState) {
        self.viewport = viewport.normalized();
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.set_viewport(ViewportState::new(self.viewport.scroll, size));
    }

    pub fn set_scroll(&mut self, scroll: Point) {
        self.set_viewport(ViewportState::new(scroll, self.viewport.size));
    }

    pub fn has_explicit_column_width(&self) -> bool {
        self.options.column_width.is_some()
    }

    /// Total scrollable content size for the current geometry.
    pub fn content_size(&self) -> Size {
        content_size(
            &self.geometry,
            self.mapper,
            self.options.size,
            self.has_explicit_column_width(),
            self.viewport.size,
        )
    }

    pub fn max_scroll(&self) -> Point {
        max_scroll(self.content_size(), self.viewport.size)
    }

    pub fn clamp_scroll(&self, scroll: Point) -> Point {
        let max = self.max_scroll();
        Point::new(scroll.x.clamp(0.0, max.x), scroll.y.clamp(0.0, max.y))
    }

    /// Rows and columns intersecting the current viewport.
    pub fn window(&self) -> VisibleWindow {
        self.window_for(&self.viewport)
    }

    /// Rows and columns intersecting an arbitrary viewport over the current geometry.
    pub fn window_for(&self, viewport: &ViewportState) -> VisibleWindow {
        let content = content_size(
            &self.geometry,
            self.mapper,
            self.options.size,
            self.has_explicit_column_width(),
            viewport.size,
        );
        compute_window(&self.geometry, viewport, content)
    }

    pub fn overflow(&self) -> Overflow {
        Overflow::evaluate(self.content_size(), self.viewport.size)
    }

    /// Viewport height limits for the `*_row_printed_count` options.
    pub fn height_constraint(&self) -> HeightConstraint {
        let rows = |n: Option<usize>| n.map(|n| self.geometry.rows_extent(n));
        HeightConstraint {
            height: rows(self.options.row_printed_count),
            min_height: rows(self.options.min_row_printed_count),
            max_height: rows(self.options.max_row_printed_count),
        }
    }

    pub fn materializer(&self) -> Materializer<'_, T> {
        Materializer::new(
            self.mapper,
            self.options.size,
            self.geometry,
            &self.options.render,
        )
    }

    /// Visits the visible indexes in ascending order.
    pub fn for_each_visible_index(&self, f: impl FnMut(usize)) {
        self.materializer().for_each_index(&self.window(), f);
    }

    /// Collects visible indexes into `out` (clears `out` first).
    pub fn collect_visible_indexes(&self, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_visible_index(|i| out.push(i));
    }

    /// Renders the cells of the current window.
    pub fn materialize(&self) -> Vec<Cell<T>> {
        self.materializer().materialize(&self.window())
    }

    pub fn cell_rect(&self, index: usize) -> Option<CellRect> {
        (index < self.options.size).then(|| self.materializer().cell_rect(index))
    }

    /// Hit-tests a point in content coordinates.
    ///
    /// Returns `None` for points in the spacing between cells or outside the collection.
    pub fn index_at_point(&self, point: Point) -> Option<usize> {
        let column = track_at(point.x, self.geometry.column_width, self.geometry.column_spacing)?;
        let row = track_at(point.y, self.geometry.row_height, self.geometry.row_spacing)?;
        if column >= self.mapper.column_count() {
            return None;
        }
        let index = self.mapper.index(row, column);
        (index < self.options.size).then_some(index)
    }

    /// Scroll offset that brings `index` into view with the given alignment, clamped.
    ///
    /// `Align::Auto` keeps the current offset on an axis where the cell is already fully
    /// visible, and scrolls the minimum distance otherwise.
    pub fn scroll_offset_for_index(&self, index: usize, align: Align) -> Option<Point> {
        let rect = self.cell_rect(index)?;
        let scroll = self.viewport.scroll;
        let view = self.viewport.size;
        let target = Point::new(
            align_axis(rect.left, rect.width, scroll.x, view.width, align),
            align_axis(rect.top, rect.height, scroll.y, view.height, align),
        );
        Some(self.clamp_scroll(target))
    }
}

fn track_at(offset: f64, extent: f64, spacing: f64) -> Option<usize> {
    let pitch = extent + spacing;
    if !offset.is_finite() || offset < 0.0 || !pitch.is_finite() || pitch <= 0.0 {
        return None;
    }
    let track = floor(offset / pitch);
    let within = offset - track * pitch;
    (within < extent).then(|| to_track(track))
}

fn align_axis(start: f64, extent: f64, current: f64, view: f64, align: Align) -> f64 {
    let end = start + extent;
    match align {
        Align::Start => start,
        Align::End => end - view,
        Align::Center => start + extent / 2.0 - view / 2.0,
        Align::Auto => {
            if start >= current && end <= current + view {
                current
            } else if start < current {
                start
            } else {
                end - view
            }
        }
    }
}
