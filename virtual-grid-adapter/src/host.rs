use virtual_grid::{Length, Point, Size};

/// Identity of a host scroll element.
///
/// Events are tagged with the element they came from so that a controller can ignore
/// notifications from an element it has already detached from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u64);

/// A notification from the scroll element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportEvent {
    Scroll,
    /// The element's size changed (resize observer).
    Resize,
}

/// An invisible calibration box the host lays out inside the scroll element.
///
/// Its realized size is the source of truth for lengths the engine cannot compute itself
/// (percentages, `Auto`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbeBox {
    pub width: Length,
    pub height: Length,
}

/// The scrollable element a [`crate::Controller`] drives.
///
/// Implementations wrap a real UI object (a DOM node, a TUI pane, ...). The controller never
/// holds UI objects itself; it only talks through this trait.
pub trait ViewportHost {
    fn element_id(&self) -> ElementId;

    /// Content-box size of the scroll element (excluding borders and scrollbars).
    fn client_size(&self) -> Size;

    fn scroll_offset(&self) -> Point;

    /// Programmatic scroll. The controller only calls this to reset to the origin when the
    /// collection is replaced.
    fn set_scroll_offset(&mut self, offset: Point);

    /// Lays out `probe` invisibly inside the scroll element and returns its size.
    fn measure(&self, probe: &ProbeBox) -> Size;

    /// Starts delivering scroll and resize events for this element.
    fn attach_listeners(&mut self);

    /// Stops delivering events. No callback may fire for this element afterwards.
    fn detach_listeners(&mut self);
}
