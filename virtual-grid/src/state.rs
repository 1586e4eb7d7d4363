use crate::float::non_negative;
use crate::{Point, Size};

/// A lightweight, serializable snapshot of the scroll container: scroll offsets plus the
/// content-box size.
///
/// This is written by the host (user scroll, window resize); the engine only reads it, except
/// for resetting the scroll offset when the collection is replaced.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll: Point,
    pub size: Size,
}

impl ViewportState {
    pub const fn new(scroll: Point, size: Size) -> Self {
        Self { scroll, size }
    }

    /// Copy with negative or non-finite values replaced by zero.
    pub fn normalized(self) -> Self {
        Self {
            scroll: Point::new(non_negative(self.scroll.x), non_negative(self.scroll.y)),
            size: Size::new(non_negative(self.size.width), non_negative(self.size.height)),
        }
    }
}
