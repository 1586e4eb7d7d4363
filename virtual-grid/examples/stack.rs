// Example: a single-column stack sized to show between 3 and 8 rows.
use virtual_grid::{Geometry, Length, Size, StackOptions, VirtualGrid};

fn main() {
    let options = StackOptions::new(500, Length::Px(24.0), |i| i * i)
        .with_spacing(Some(Length::Px(4.0)))
        .with_min_row_printed_count(Some(3))
        .with_max_row_printed_count(Some(8));
    let mut stack = VirtualGrid::new(options.into()).expect("valid options");
    stack.set_geometry(Geometry::new(24.0, 200.0, 4.0, 0.0));

    // Host proposes 400px of height; the constraint caps it at 8 rows.
    let constraint = stack.height_constraint();
    let height = constraint.clamp(400.0);
    stack.set_viewport_size(Size::new(200.0, height));

    println!("constraint={constraint:?} applied_height={height}");
    for cell in stack.materialize() {
        println!("#{:<3} top={:<6} square={}", cell.index, cell.rect.top, cell.content);
    }
}
