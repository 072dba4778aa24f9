#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point in either client (page) space or canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of the drop-target canvas within the page.
///
/// `left` / `top` are the canvas origin in client coordinates (CSS pixels),
/// `width` / `height` its extent. A zero extent means the host has not
/// measured the canvas yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a client-space point to canvas coordinates.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point { x: client.x - self.left, y: client.y - self.top }
    }

    /// Whether the host has reported a usable canvas size.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Clamp a box's top-left corner so the box stays inside the canvas.
    ///
    /// Each axis is clamped independently. A box larger than the canvas on an
    /// axis is pinned to the origin of that axis. An unmeasured canvas leaves
    /// the position untouched.
    #[must_use]
    pub fn clamp_top_left(&self, left: f64, top: f64, width: f64, height: f64) -> Point {
        if !self.is_measured() {
            return Point::new(left, top);
        }
        Point::new(clamp_axis(left, width, self.width), clamp_axis(top, height, self.height))
    }
}

fn clamp_axis(pos: f64, size: f64, extent: f64) -> f64 {
    if size >= extent {
        return 0.0;
    }
    pos.clamp(0.0, extent - size)
}
