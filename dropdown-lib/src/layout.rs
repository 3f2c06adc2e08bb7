//! Dropdown panel sizing.
//!
//! All values are in abstract layout units (pixels on a graphical host,
//! scaled cells on a terminal host).

/// Lower bound of the panel height.
pub const MIN_DROPDOWN_HEIGHT: f32 = 200.0;
/// Space kept free between the panel and the bottom of the viewport.
pub const VIEWPORT_MARGIN: f32 = 20.0;

/// An axis-aligned box in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// What the host reports about where the dropdown lives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostMetrics {
    /// The control's rendered box.
    pub container: Bounds,
    /// Height of the visible viewport.
    pub viewport_height: f32,
}

/// Computed size of the dropdown panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

/// Size the panel below `container`.
///
/// Width follows the container. Height is whatever fits between the
/// container and the viewport bottom (less [`VIEWPORT_MARGIN`]), capped at
/// `max_height` and never below [`MIN_DROPDOWN_HEIGHT`]. The floor wins over
/// the cap.
pub fn compute_dimensions(metrics: &HostMetrics, max_height: f32) -> Dimensions {
    let available = metrics.viewport_height - metrics.container.bottom() - VIEWPORT_MARGIN;
    Dimensions {
        width: metrics.container.width,
        height: available.min(max_height).max(MIN_DROPDOWN_HEIGHT),
    }
}
