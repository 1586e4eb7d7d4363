use crate::*;

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 11
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    /// Multiples of 0.5 in `[start, end)`, exactly representable.
    fn gen_half_steps(&mut self, start: u32, end_exclusive: u32) -> f64 {
        let steps = self.gen_range_usize(start as usize * 2, end_exclusive as usize * 2);
        steps as f64 / 2.0
    }
}

fn grid(size: usize, column_count: usize) -> VirtualGrid<usize> {
    VirtualGrid::new(GridOptions::new(size, column_count, Length::Px(10.0), |i| i)).unwrap()
}

fn visible(g: &VirtualGrid<usize>) -> Vec<usize> {
    let mut out = Vec::new();
    g.collect_visible_indexes(&mut out);
    out
}

#[test]
fn row_count_is_ceil_of_size_over_columns() {
    for column_count in 1..=7usize {
        let mapper = IndexMapper::try_new(column_count).unwrap();
        for size in 0..50usize {
            let expected = (size + column_count - 1) / column_count;
            assert_eq!(mapper.row_count(size), expected);
            assert_eq!(mapper.row_count(size) == 0, size == 0);
        }
    }
}

#[test]
fn index_mapping_round_trips() {
    let mut rng = Lcg::new(7);
    for _ in 0..1_000 {
        let column_count = rng.gen_range_usize(1, 12);
        let mapper = IndexMapper::try_new(column_count).unwrap();
        let index = rng.gen_range_usize(0, 5_000_000);
        let (row, column) = (mapper.row(index), mapper.column(index));
        assert!(column < column_count);
        assert_eq!(row * column_count + column, index);
        assert_eq!(mapper.index(row, column), index);
    }
}

#[test]
fn list_window_includes_partially_visible_row() {
    let mut g = grid(10, 1);
    g.set_geometry(Geometry::new(10.0, 50.0, 0.0, 0.0));
    g.set_viewport(ViewportState::new(Point::ZERO, Size::new(50.0, 25.0)));

    assert_eq!(g.window().rows, 0..3);
    assert_eq!(visible(&g), [0, 1, 2]);
}

#[test]
fn grid_window_selects_single_middle_cell() {
    let options = GridOptions::new(9, 3, Length::Px(10.0), |i| i)
        .with_column_width(Some(Length::Px(10.0)))
        .with_spacing(Some(Length::ZERO));
    let mut g = VirtualGrid::new(options).unwrap();
    g.set_geometry(Geometry::new(10.0, 10.0, 0.0, 0.0));
    g.set_viewport(ViewportState::new(
        Point::new(10.0, 10.0),
        Size::new(10.0, 10.0),
    ));

    assert_eq!(
        g.window(),
        VisibleWindow {
            rows: 1..2,
            columns: 1..2
        }
    );
    assert_eq!(visible(&g), [4]);
}

#[test]
fn trailing_edge_on_scroll_boundary_is_excluded() {
    // Row 0 spans [0, 10) and row 1 starts after 2px of spacing at 12.
    assert_eq!(track_range(10.0, 20.0, 10.0, 2.0), 1..3);
    // Leading edge exactly at the boundary is included.
    assert_eq!(track_range(12.0, 12.0, 10.0, 2.0), 1..2);
}

#[test]
fn degenerate_geometry_yields_empty_window() {
    assert!(track_range(0.0, 100.0, 0.0, 0.0).is_empty());
    assert!(track_range(0.0, 100.0, f64::NAN, 0.0).is_empty());
    assert!(track_range(0.0, 0.0, 10.0, 0.0).is_empty());

    let mut g = grid(100, 4);
    g.set_viewport_size(Size::new(200.0, 200.0));
    assert!(g.window().is_empty());
    assert!(g.materialize().is_empty());
}

#[test]
fn window_is_monotonic_in_scroll_top() {
    let mut rng = Lcg::new(42);
    for _ in 0..50 {
        let row_height = rng.gen_range_usize(1, 40) as f64;
        let row_spacing = rng.gen_range_usize(0, 8) as f64;
        let mut g = grid(rng.gen_range_usize(1, 10_000), rng.gen_range_usize(1, 6));
        g.set_geometry(Geometry::new(row_height, 20.0, row_spacing, 0.0));
        g.set_viewport_size(Size::new(100.0, rng.gen_range_usize(1, 400) as f64));

        let mut prev = g.window().rows;
        let mut scroll = 0.0;
        for _ in 0..200 {
            scroll += rng.gen_half_steps(0, 25);
            g.set_scroll(Point::new(0.0, scroll));
            let rows = g.window().rows;
            if rows.is_empty() || prev.is_empty() {
                prev = rows;
                continue;
            }
            assert!(rows.start >= prev.start, "start went back: {prev:?} -> {rows:?}");
            assert!(rows.end >= prev.end, "end went back: {prev:?} -> {rows:?}");
            prev = rows;
        }
    }
}

#[test]
fn materialized_cells_cover_the_viewport() {
    let mut rng = Lcg::new(1234);
    for _ in 0..200 {
        let size = rng.gen_range_usize(0, 300);
        let column_count = rng.gen_range_usize(1, 6);
        let explicit_width = rng.next_u64() % 2 == 0;
        let geometry = Geometry::new(
            rng.gen_range_usize(1, 30) as f64,
            rng.gen_range_usize(1, 30) as f64,
            rng.gen_range_usize(0, 5) as f64,
            rng.gen_range_usize(0, 5) as f64,
        );

        let options = GridOptions::new(size, column_count, Length::Px(geometry.row_height), |i| i)
            .with_column_width(explicit_width.then_some(Length::Px(geometry.column_width)));
        let mut g = VirtualGrid::new(options).unwrap();
        g.set_geometry(geometry);
        let view = Size::new(
            rng.gen_range_usize(1, 120) as f64,
            rng.gen_range_usize(1, 120) as f64,
        );
        g.set_viewport_size(view);
        let max = g.max_scroll();
        let scroll = Point::new(
            rng.gen_half_steps(0, max.x as u32 + 1).min(max.x),
            rng.gen_half_steps(0, max.y as u32 + 1).min(max.y),
        );
        g.set_scroll(scroll);

        let shown = visible(&g);
        for index in 0..size {
            let rect = g.cell_rect(index).unwrap();
            if rect.intersects(scroll, view) {
                assert!(
                    shown.binary_search(&index).is_ok(),
                    "index {index} at {rect:?} missing; scroll={scroll:?} view={view:?} window={:?}",
                    g.window()
                );
            }
        }
        assert!(shown.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn materialized_set_does_not_grow_with_size() {
    let mut g = grid(1_000_000, 3);
    g.set_geometry(Geometry::new(
        30.0,
        Geometry::auto_column_width(300.0, 3, 0.0),
        0.0,
        0.0,
    ));
    g.set_viewport_size(Size::new(300.0, 300.0));

    for scroll in [0.0, 12_345.5, 4_000_000.0, 9_999_990.0, f64::MAX] {
        g.set_scroll(Point::new(0.0, scroll));
        let cells = g.materialize();
        assert!(!cells.is_empty());
        assert!(cells.len() <= 15 * 3, "{} cells at {scroll}", cells.len());
    }
}

#[test]
fn auto_column_width_stays_fractional() {
    let width = Geometry::auto_column_width(100.0, 3, 0.0);
    assert_eq!(width, 100.0 / 3.0);

    let width = Geometry::auto_column_width(100.0, 3, 5.0);
    assert_eq!(width, 30.0);

    assert_eq!(Geometry::auto_column_width(10.0, 4, 20.0), 0.0);

    let mut g = grid(6, 3);
    g.set_geometry(Geometry::new(10.0, 100.0 / 3.0, 0.0, 0.0));
    g.set_viewport_size(Size::new(100.0, 100.0));
    let rect = g.cell_rect(2).unwrap();
    assert_eq!(rect.left, 2.0 * (100.0 / 3.0));
    assert_eq!(rect.width, 100.0 / 3.0);
}

#[test]
fn overflow_hides_axes_whose_content_fits() {
    // 4 rows * 10 + 3 * 2 = 46 <= 50.
    let mut g = grid(12, 3);
    g.set_geometry(Geometry::new(10.0, 20.0, 2.0, 0.0));
    g.set_viewport_size(Size::new(60.0, 50.0));
    assert_eq!(
        g.overflow(),
        Overflow {
            x: AxisOverflow::Hidden,
            y: AxisOverflow::Hidden
        }
    );

    g.set_viewport_size(Size::new(60.0, 45.0));
    assert_eq!(g.overflow().y, AxisOverflow::Scroll);

    // Auto-width columns never overflow horizontally.
    g.set_geometry(Geometry::new(10.0, 500.0, 2.0, 0.0));
    assert_eq!(g.overflow().x, AxisOverflow::Hidden);

    g.update_options(|o| o.column_width = Some(Length::Px(25.0)))
        .unwrap();
    g.set_geometry(Geometry::new(10.0, 25.0, 2.0, 0.0));
    assert_eq!(g.overflow().x, AxisOverflow::Scroll);
}

#[test]
fn non_overflowing_axis_is_windowed_in_full() {
    let mut g = grid(12, 3);
    g.set_geometry(Geometry::new(10.0, 20.0, 2.0, 0.0));
    // Stale scroll offset from a previous, longer collection.
    g.set_viewport(ViewportState::new(Point::new(0.0, 500.0), Size::new(60.0, 50.0)));

    assert_eq!(g.overflow().y, AxisOverflow::Hidden);
    assert_eq!(g.window().rows.start, 0);
    assert!(g.window().rows.end >= g.row_count());
    assert_eq!(visible(&g), (0..12).collect::<Vec<_>>());
}

#[test]
fn replacing_the_collection_resets_scroll() {
    let mut g = grid(1_000, 4);
    g.set_geometry(Geometry::new(10.0, 25.0, 0.0, 0.0));
    g.set_viewport(ViewportState::new(Point::new(0.0, 700.0), Size::new(100.0, 100.0)));
    assert_eq!(g.window().rows.start, 70);

    let change = g.update_options(|o| o.size = 2_000).unwrap();
    assert_eq!(change, OptionsChange::Collection);
    assert_eq!(g.viewport().scroll, Point::ZERO);
    assert_eq!(g.window().rows.start, 0);
    assert_eq!(g.window().columns.start, 0);
}

#[test]
fn layout_changes_keep_scroll() {
    let mut g = grid(1_000, 4);
    g.set_scroll(Point::new(0.0, 300.0));

    let change = g
        .update_options(|o| o.row_spacing = Some(Length::Px(3.0)))
        .unwrap();
    assert_eq!(change, OptionsChange::Layout);
    assert_eq!(g.viewport().scroll.y, 300.0);

    // A clone of the same options shares the render function.
    let same = g.options().clone();
    assert_eq!(g.set_options(same).unwrap(), OptionsChange::Layout);

    let replaced = g.options().clone().with_render(|i| i + 1);
    assert_eq!(g.set_options(replaced).unwrap(), OptionsChange::Collection);
    assert_eq!(g.viewport().scroll, Point::ZERO);
}

#[test]
fn invalid_configuration_is_rejected() {
    let err = VirtualGrid::new(GridOptions::new(10, 0, Length::Px(10.0), |i| i)).unwrap_err();
    assert_eq!(err, ConfigError::ZeroColumnCount);

    let err = GridOptions::new(10, 2, Length::Px(-1.0), |i: usize| i)
        .validate()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidLength {
            field: "row_height",
            value: Length::Px(-1.0)
        }
    );

    let err = GridOptions::new(10, 2, Length::Px(10.0), |i: usize| i)
        .with_spacing(Some(Length::Percent(f64::NAN)))
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidLength {
            field: "row_spacing",
            ..
        }
    ));

    let err = GridOptions::new(10, 2, Length::Px(10.0), |i: usize| i)
        .with_min_row_printed_count(Some(5))
        .with_max_row_printed_count(Some(2))
        .validate()
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidPrintedCounts { min: 5, max: 2 });
}

#[test]
fn failed_set_options_leaves_state_untouched() {
    let mut g = grid(100, 2);
    g.set_scroll(Point::new(0.0, 40.0));
    assert!(g.update_options(|o| o.column_count = 0).is_err());
    assert_eq!(g.column_count(), 2);
    assert_eq!(g.options().column_count, 2);
    assert_eq!(g.viewport().scroll.y, 40.0);
}

#[test]
fn spacing_falls_back_per_axis() {
    let o = GridOptions::new(1, 1, Length::Px(1.0), |_| ())
        .with_spacing(Some(Length::Px(4.0)))
        .with_column_spacing(Some(Length::Px(1.0)));
    assert_eq!(o.resolved_row_spacing(), Length::Px(4.0));
    assert_eq!(o.resolved_column_spacing(), Length::Px(1.0));

    let o = GridOptions::new(1, 1, Length::Px(1.0), |_| ());
    assert_eq!(o.resolved_row_spacing(), Length::ZERO);
}

#[test]
fn reconcile_reuses_cells_by_index() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let options = GridOptions::new(1_000, 2, Length::Px(10.0), move |i| {
        counter.fetch_add(1, Ordering::Relaxed);
        i * 10
    });
    let mut g = VirtualGrid::new(options).unwrap();
    g.set_geometry(Geometry::new(10.0, 50.0, 0.0, 0.0));
    g.set_viewport_size(Size::new(100.0, 30.0));

    let first = g.materialize();
    assert_eq!(first.len(), 6);
    assert_eq!(calls.load(Ordering::Relaxed), 6);

    g.set_scroll(Point::new(0.0, 10.0));
    let window = g.window();
    let (cells, diff) = g.materializer().reconcile(first, &window);

    assert_eq!(
        diff,
        WindowDiff {
            added: 2,
            removed: 2,
            retained: 4
        }
    );
    assert_eq!(calls.load(Ordering::Relaxed), 8);
    let indexes: Vec<usize> = cells.iter().map(|c| c.index).collect();
    assert_eq!(indexes, [2, 3, 4, 5, 6, 7]);
    assert!(cells.iter().all(|c| c.content == c.index * 10));
    assert_eq!(cells[0].rect.top, 10.0);
}

#[test]
fn reconcile_refreshes_rects_of_retained_cells() {
    let mut g = grid(3, 1);
    g.set_geometry(Geometry::new(10.0, 100.0, 0.0, 0.0));
    g.set_viewport_size(Size::new(100.0, 100.0));
    let cells = g.materialize();
    assert_eq!(cells.len(), 3);

    g.set_geometry(Geometry::new(10.0, 100.0, 5.0, 0.0));
    let window = g.window();
    let (cells, diff) = g.materializer().reconcile(cells, &window);
    assert!(diff.is_unchanged());
    assert_eq!(cells[1].rect.top, 15.0);
}

#[test]
fn height_constraint_counts_rows_and_spacing() {
    let options = GridOptions::new(100, 1, Length::Px(20.0), |i| i)
        .with_row_printed_count(Some(3))
        .with_min_row_printed_count(Some(1))
        .with_max_row_printed_count(Some(5));
    let mut g = VirtualGrid::new(options).unwrap();
    g.set_geometry(Geometry::new(20.0, 100.0, 4.0, 0.0));

    let c = g.height_constraint();
    assert_eq!(c.height, Some(68.0));
    assert_eq!(c.min_height, Some(20.0));
    assert_eq!(c.max_height, Some(116.0));
    assert_eq!(c.clamp(1_000.0), 68.0);

    let unconstrained = grid(1, 1).height_constraint();
    assert!(unconstrained.is_unconstrained());
    assert_eq!(unconstrained.clamp(42.0), 42.0);
}

#[test]
fn index_at_point_skips_spacing() {
    let mut g = grid(10, 3);
    g.set_geometry(Geometry::new(10.0, 20.0, 2.0, 5.0));

    assert_eq!(g.index_at_point(Point::new(0.0, 0.0)), Some(0));
    assert_eq!(g.index_at_point(Point::new(26.0, 13.0)), Some(4));
    // Column gap between 20 and 25.
    assert_eq!(g.index_at_point(Point::new(22.0, 1.0)), None);
    // Row gap between 10 and 12.
    assert_eq!(g.index_at_point(Point::new(1.0, 11.0)), None);
    // Past the last column.
    assert_eq!(g.index_at_point(Point::new(80.0, 1.0)), None);
    // Row 3 only holds index 9.
    assert_eq!(g.index_at_point(Point::new(26.0, 37.0)), None);
    assert_eq!(g.index_at_point(Point::new(1.0, 37.0)), Some(9));
}

#[test]
fn scroll_offset_for_index_aligns_and_clamps() {
    let mut g = grid(100, 1);
    g.set_geometry(Geometry::new(10.0, 50.0, 0.0, 0.0));
    g.set_viewport_size(Size::new(50.0, 30.0));

    assert_eq!(
        g.scroll_offset_for_index(10, Align::Start).unwrap().y,
        100.0
    );
    assert_eq!(g.scroll_offset_for_index(10, Align::End).unwrap().y, 80.0);
    assert_eq!(
        g.scroll_offset_for_index(10, Align::Center).unwrap().y,
        90.0
    );
    // Already visible: stays put.
    assert_eq!(g.scroll_offset_for_index(1, Align::Auto).unwrap().y, 0.0);
    // Clamped to the end of the content.
    assert_eq!(
        g.scroll_offset_for_index(99, Align::Start).unwrap().y,
        970.0
    );
    assert_eq!(g.scroll_offset_for_index(100, Align::Start), None);
}

#[test]
fn stack_is_a_single_auto_width_column() {
    let options: GridOptions<usize> = StackOptions::new(50, Length::Px(10.0), |i| i)
        .with_spacing(Some(Length::Px(2.0)))
        .into();
    assert_eq!(options.column_count, 1);
    assert_eq!(options.column_width, None);
    assert_eq!(options.resolved_row_spacing(), Length::Px(2.0));
    assert_eq!(options.resolved_column_spacing(), Length::ZERO);

    let mut g = VirtualGrid::new(options).unwrap();
    g.set_geometry(Geometry::new(10.0, 80.0, 2.0, 0.0));
    g.set_viewport(ViewportState::new(Point::new(0.0, 24.0), Size::new(80.0, 24.0)));
    assert_eq!(visible(&g), [2, 3]);
}

#[test]
fn empty_collection_materializes_nothing() {
    let mut g = grid(0, 3);
    g.set_geometry(Geometry::new(10.0, 10.0, 0.0, 0.0));
    g.set_viewport_size(Size::new(30.0, 30.0));
    assert_eq!(g.row_count(), 0);
    assert!(g.materialize().is_empty());
    assert_eq!(g.content_size().height, 0.0);
}
