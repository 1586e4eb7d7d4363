use alloc::vec::Vec;

use crate::{CellRect, Geometry, IndexMapper, RenderFn, VisibleWindow};

/// A positioned wrapper around the rendered content of one item.
///
/// Cells are keyed by `index`: hosts should diff mounted children by index, not by position in
/// the cell list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T> {
    pub index: usize,
    pub rect: CellRect,
    pub content: T,
}

/// How a reconciliation changed the mounted set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowDiff {
    /// Indexes rendered for the first time.
    pub added: usize,
    /// Indexes dropped because they left the window.
    pub removed: usize,
    /// Indexes whose content was carried over.
    pub retained: usize,
}

impl WindowDiff {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Turns a visible window into positioned cells.
///
/// Only indexes inside the window (and below `size`) are visited; nothing is created for the
/// rest of the collection.
pub struct Materializer<'a, T> {
    mapper: IndexMapper,
    size: usize,
    geometry: Geometry,
    render: &'a RenderFn<T>,
}

impl<'a, T> Materializer<'a, T> {
    pub fn new(mapper: IndexMapper, size: usize, geometry: Geometry, render: &'a RenderFn<T>) -> Self {
        Self {
            mapper,
            size,
            geometry,
            render,
        }
    }

    /// Layout rect of `index`. Does not check `index < size`.
    pub fn cell_rect(&self, index: usize) -> CellRect {
        let row = self.mapper.row(index);
        let column = self.mapper.column(index);
        CellRect {
            left: column as f64 * self.geometry.column_pitch(),
            top: row as f64 * self.geometry.row_pitch(),
            width: self.geometry.column_width,
            height: self.geometry.row_height,
        }
    }

    /// Visits every index in the window, in ascending order, clipped to the collection.
    pub fn for_each_index(&self, window: &VisibleWindow, mut f: impl FnMut(usize)) {
        let window = window.clipped(self.mapper.row_count(self.size), self.mapper.column_count());
        for row in window.rows.clone() {
            for column in window.columns.clone() {
                let index = self.mapper.index(row, column);
                if index >= self.size {
                    // Only the last row can be partial.
                    return;
                }
                f(index);
            }
        }
    }

    /// Renders every cell in the window from scratch.
    pub fn materialize(&self, window: &VisibleWindow) -> Vec<Cell<T>> {
        let mut out = Vec::with_capacity(window.cell_count().min(self.size));
        self.for_each_index(window, |index| {
            out.push(Cell {
                index,
                rect: self.cell_rect(index),
                content: (self.render)(index),
            });
        });
        out
    }

    /// Builds the cells for `window`, reusing the content of `previous` cells by index.
    ///
    /// `previous` must be sorted by index (as produced by this type). Retained cells get their
    /// rect refreshed but are not re-rendered, so scrolling by one row only renders that row.
    pub fn reconcile(&self, previous: Vec<Cell<T>>, window: &VisibleWindow) -> (Vec<Cell<T>>, WindowDiff) {
        let mut out = Vec::with_capacity(window.cell_count().min(self.size));
        let mut diff = WindowDiff::default();
        let mut previous = previous.into_iter().peekable();

        self.for_each_index(window, |index| {
            while previous.next_if(|cell| cell.index < index).is_some() {
                diff.removed += 1;
            }
            let rect = self.cell_rect(index);
            match previous.next_if(|cell| cell.index == index) {
                Some(mut cell) => {
                    cell.rect = rect;
                    diff.retained += 1;
                    out.push(cell);
                }
                None => {
                    diff.added += 1;
                    out.push(Cell {
                        index,
                        rect,
                        content: (self.render)(index),
                    });
                }
            }
        });
        diff.removed += previous.count();

        (out, diff)
    }
}

impl<T> core::fmt::Debug for Materializer<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Materializer")
            .field("mapper", &self.mapper)
            .field("size", &self.size)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}
