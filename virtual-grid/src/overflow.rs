use crate::{Geometry, IndexMapper, Size};

/// Whether the scroll container should show scrolling affordances on an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisOverflow {
    /// The content fits; suppress the scrollbar.
    #[default]
    Hidden,
    Scroll,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overflow {
    pub x: AxisOverflow,
    pub y: AxisOverflow,
}

impl Overflow {
    /// Compares content against the viewport axis by axis.
    ///
    /// An axis is `Hidden` when the content extent is `<=` the viewport extent. The window
    /// calculator clamps scrolling with the same [`content_size`], so a hidden axis is always
    /// windowed in full from offset zero.
    pub fn evaluate(content: Size, viewport: Size) -> Self {
        Self {
            x: axis(content.width, viewport.width),
            y: axis(content.height, viewport.height),
        }
    }
}

fn axis(content: f64, viewport: f64) -> AxisOverflow {
    if content <= viewport {
        AxisOverflow::Hidden
    } else {
        AxisOverflow::Scroll
    }
}

/// Total scrollable content size.
///
/// The height always follows the rows. The width only follows the columns when the caller
/// fixed a column width; auto-sized columns share the viewport width exactly, so the content is
/// as wide as the viewport.
pub fn content_size(
    geometry: &Geometry,
    mapper: IndexMapper,
    size: usize,
    explicit_column_width: bool,
    viewport: Size,
) -> Size {
    let height = geometry.rows_extent(mapper.row_count(size));
    let width = if explicit_column_width {
        geometry.columns_extent(mapper.column_count())
    } else {
        viewport.width
    };
    Size::new(width, height)
}
