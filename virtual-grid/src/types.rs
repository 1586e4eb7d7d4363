#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// A length as supplied by the caller, before the host has laid it out.
///
/// Only `Px` can be used by the window math directly. `Percent` and `Auto` are resolved by
/// realizing a probe box on the host and reading back its size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    /// Pixel-equivalent units.
    Px(f64),
    /// Percentage (`0.0..=100.0`) of the viewport content box on the same axis.
    Percent(f64),
    /// Host-determined. For widths this fills the available space; for heights it collapses.
    Auto,
}

impl Length {
    pub const ZERO: Self = Self::Px(0.0);

    pub fn px(self) -> Option<f64> {
        match self {
            Self::Px(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_valid(self) -> bool {
        match self {
            Self::Px(v) | Self::Percent(v) => v.is_finite() && v >= 0.0,
            Self::Auto => true,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when either side is exactly zero.
    pub fn has_zero_side(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// A position in content coordinates (also used for scroll offsets).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The absolute box of a materialized cell inside the scrollable content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether this rect overlaps the half-open area `[origin, origin + size)`.
    pub fn intersects(&self, origin: Point, size: Size) -> bool {
        self.left < origin.x + size.width
            && origin.x < self.right()
            && self.top < origin.y + size.height
            && origin.y < self.bottom()
    }
}
