//! Host synchronization for the `virtual-grid` crate.
//!
//! `virtual-grid` only does the math. This crate keeps it in sync with a real scroll element:
//!
//! - [`ViewportHost`]: the trait a UI binding implements for its scrollable element
//! - [`GeometryProber`]: resolves `Percent`/`Auto` lengths by measuring probe boxes on the host
//! - [`Controller`]: reacts to mount, scroll, resize and option changes, either immediately or
//!   through a coalescing [`Scheduler`], and commits whole [`Frame`]s
//! - [`SimViewport`]: an in-memory host for tests and headless use
//!
//! This crate is framework-agnostic (no DOM, ratatui or egui bindings).
//!
//! ```
//! use virtual_grid::{GridOptions, Length, Point, Size};
//! use virtual_grid_adapter::{Controller, SimViewport, ViewportEvent, ViewportHost};
//!
//! let options = GridOptions::new(10_000, 4, Length::Px(40.0), |i| i);
//! let mut controller = Controller::new(options).unwrap();
//! controller.mount(SimViewport::new(1, Size::new(400.0, 200.0)));
//! assert_eq!(controller.frame().window.rows, 0..5);
//!
//! let host = controller.host_mut().unwrap();
//! host.scroll_to(Point::new(0.0, 400.0));
//! let id = host.element_id();
//! controller.handle_event(id, ViewportEvent::Scroll);
//! assert_eq!(controller.cells()[0].index, 40);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod diagnostic;
mod host;
mod probe;
mod scheduler;
mod sim;


pub use controller::{CommitOutcome, Controller, DiagnosticFn, Frame, PreparedFrame};
pub use diagnostic::{Diagnostic, DiagnosticLatch};
pub use host::{ElementId, ProbeBox, ViewportEvent, ViewportHost};
pub use probe::{GeometryProber, Measurement};
pub use scheduler::{Generation, Job, Scheduler, Trigger};
pub use sim::SimViewport;
