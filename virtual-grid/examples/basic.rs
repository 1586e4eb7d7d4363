// Example: a million-item grid, hit testing and the scroll-to helper.
use virtual_grid::{Align, Geometry, GridOptions, Length, Point, Size, VirtualGrid};

fn main() {
    let options = GridOptions::new(1_000_000, 3, Length::Px(30.0), |i| format!("item {i}"));
    let mut grid = VirtualGrid::new(options).expect("valid options");

    // Without a host, the adapter's job is done by hand: resolve geometry and feed the viewport.
    let viewport = Size::new(300.0, 300.0);
    let column_width = Geometry::auto_column_width(viewport.width, grid.column_count(), 0.0);
    grid.set_geometry(Geometry::new(30.0, column_width, 0.0, 0.0));
    grid.set_viewport_size(viewport);
    grid.set_scroll(Point::new(0.0, 123_456.0));

    let cells = grid.materialize();
    println!("content_size={:?}", grid.content_size());
    println!("window={:?}", grid.window());
    println!("overflow={:?}", grid.overflow());
    println!("cells={} first={:?}", cells.len(), cells.first());

    let hit = grid.index_at_point(Point::new(150.0, 123_456.0 + 45.0));
    println!("index under (150, +45)={hit:?}");

    if let Some(offset) = grid.scroll_offset_for_index(999_999, Align::End) {
        grid.set_scroll(offset);
    }
    println!(
        "after scroll_to_index: scroll={:?} last_row={:?}",
        grid.viewport().scroll,
        grid.window().rows
    );
}
