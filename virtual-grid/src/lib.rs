//! A headless windowing engine for uniformly laid-out grids and lists.
//!
//! For measurement and scroll/resize synchronization, see the `virtual-grid-adapter` crate.
//!
//! This crate focuses on the core math needed to scroll through millions of same-sized items
//! at interactive frame rates: index ↔ (row, column) mapping, the visible row/column window for
//! a scroll offset, per-axis overflow decisions, and materializing only the cells in the window.
//! The cost of every query depends on the viewport, never on the collection size.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport content-box size and scroll offsets
//! - resolved row height, column width and spacing (see `virtual-grid-adapter` for probing)
//! - a render function producing content for an item index
//!
//! ```
//! use virtual_grid::{Geometry, GridOptions, Length, Point, Size, VirtualGrid};
//!
//! let options = GridOptions::new(1_000_000, 3, Length::Px(30.0), |i| i);
//! let mut grid = VirtualGrid::new(options).unwrap();
//! grid.set_geometry(Geometry::new(30.0, 100.0, 0.0, 0.0));
//! grid.set_viewport_size(Size::new(300.0, 300.0));
//! grid.set_scroll(Point::new(0.0, 3_000.0));
//!
//! let cells = grid.materialize();
//! assert_eq!(cells.first().map(|c| c.index), Some(300));
//! assert!(cells.len() <= 33);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod float;
mod geometry;
mod grid;
mod index;
mod materialize;
mod options;
mod overflow;
mod stack;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use geometry::{Geometry, HeightConstraint};
pub use grid::{OptionsChange, VirtualGrid};
pub use index::IndexMapper;
pub use materialize::{Cell, Materializer, WindowDiff};
pub use options::{GridOptions, RenderFn, SyncMode};
pub use overflow::{AxisOverflow, Overflow, content_size};
pub use stack::StackOptions;
pub use state::ViewportState;
pub use types::{Align, CellRect, Length, Point, Size};
pub use window::{VisibleWindow, compute_window, max_scroll, track_range};
