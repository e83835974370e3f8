//! Pointer tracking and screen-to-page coordinate conversion.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Platform command modifier: ctrl on Linux/Windows, meta on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Where the page surface currently sits on screen.
///
/// `origin` is the surface's unscrolled top-left in screen coordinates and
/// `scroll` is the scroll container's offset. The host keeps both current;
/// conversion is a pure function of them and is recomputed on every call,
/// so a scroll between two pointer events is always picked up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub origin: Point,
    pub scroll: Vec2,
}

impl Viewport {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            scroll: Vec2::ZERO,
        }
    }

    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Screen-space top-left of the page surface right now.
    pub fn surface_origin(&self) -> Point {
        Point::new(self.origin.x - self.scroll.x, self.origin.y - self.scroll.y)
    }

    /// Convert a raw pointer position to page-local coordinates.
    pub fn to_page_local(&self, screen: Point) -> Point {
        let surface = self.surface_origin();
        Point::new(screen.x - surface.x, screen.y - surface.y)
    }
}
