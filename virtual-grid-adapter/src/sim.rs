use virtual_grid::{Length, Point, Size};

use crate::{ElementId, ProbeBox, ViewportHost};

/// An in-memory scroll element.
///
/// Resolves probe lengths the way a block layout would: `Px` as-is, `Percent` against the
/// client size on the same axis, `Auto` fills the width and collapses the height. Useful for
/// tests, demos and headless hosts that already know their pixel sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct SimViewport {
    id: ElementId,
    client: Size,
    scroll: Point,
    listening: bool,
    attach_count: u32,
}

impl SimViewport {
    pub fn new(id: u64, client: Size) -> Self {
        Self {
            id: ElementId(id),
            client,
            scroll: Point::ZERO,
            listening: false,
            attach_count: 0,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Simulates a resize. Callers still have to deliver [`crate::ViewportEvent::Resize`].
    pub fn set_client_size(&mut self, client: Size) {
        self.client = client;
    }

    /// Simulates a user scroll. Callers still have to deliver [`crate::ViewportEvent::Scroll`].
    pub fn scroll_to(&mut self, offset: Point) {
        self.scroll = Point::new(offset.x.max(0.0), offset.y.max(0.0));
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// How many times listeners were attached over the element's lifetime.
    pub fn attach_count(&self) -> u32 {
        self.attach_count
    }

    fn resolve(length: Length, available: f64, auto: f64) -> f64 {
        match length {
            Length::Px(v) => v,
            Length::Percent(p) => available * p / 100.0,
            Length::Auto => auto,
        }
    }
}

impl ViewportHost for SimViewport {
    fn element_id(&self) -> ElementId {
        self.id
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: Point) {
        self.scroll_to(offset);
    }

    fn measure(&self, probe: &ProbeBox) -> Size {
        Size::new(
            Self::resolve(probe.width, self.client.width, self.client.width),
            Self::resolve(probe.height, self.client.height, 0.0),
        )
    }

    fn attach_listeners(&mut self) {
        self.listening = true;
        self.attach_count += 1;
    }

    fn detach_listeners(&mut self) {
        self.listening = false;
    }
}
