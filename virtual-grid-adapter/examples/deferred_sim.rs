// Example: driving a controller from a simulated host in deferred mode.
use virtual_grid::{GridOptions, Length, Point, Size, SyncMode};
use virtual_grid_adapter::{CommitOutcome, Controller, SimViewport, ViewportEvent, ViewportHost};

fn main() {
    let options = GridOptions::new(10_000, 4, Length::Px(32.0), |i| format!("cell {i}"))
        .with_spacing(Some(Length::Px(8.0)))
        .with_mode(SyncMode::Deferred);
    let mut controller = Controller::new(options)
        .expect("valid options")
        .with_on_diagnostic(|d| eprintln!("diagnostic: {d}"));

    // Mounting measures right away, even in deferred mode.
    controller.mount(SimViewport::new(7, Size::new(640.0, 480.0)));
    report("mount", &controller);

    // A burst of scroll events collapses into one recomputation.
    for step in 1..=5 {
        let host = controller.host_mut().expect("mounted");
        host.scroll_to(Point::new(0.0, step as f64 * 120.0));
        let id = host.element_id();
        controller.handle_event(id, ViewportEvent::Scroll);
    }
    println!("pending={} coalesced={}", controller.has_pending(), controller.scheduler().coalesced());
    if let Some(CommitOutcome::Committed(diff)) = controller.tick() {
        println!("committed diff={diff:?}");
    }
    report("after burst", &controller);

    // Replacing the collection rewinds the host and recomputes immediately.
    controller
        .update_options(|o| o.size = 50)
        .expect("valid options");
    report("new collection", &controller);

    if let Some(host) = controller.unmount() {
        println!("unmounted, listening={}", host.is_listening());
    }
}

fn report(label: &str, controller: &Controller<SimViewport, String>) {
    let frame = controller.frame();
    println!(
        "{label}: generation={:?} scroll={:?} rows={:?} columns={:?} cells={}",
        frame.generation,
        frame.viewport.scroll,
        frame.window.rows,
        frame.window.columns,
        frame.cells.len()
    );
}
