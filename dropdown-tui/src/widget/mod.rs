//! The dropdown drawn into a cell buffer.
//!
//! [`DropdownView`] owns placement: where the control sits on screen and
//! how cells map to layout units. Drawing returns a [`HitMap`], which
//! [`translate`] uses to turn terminal input back into [`Msg`]s.
//!
//! [`Msg`]: dropdown_lib::Msg

mod events;
mod hit;
mod render;

pub use events::{WHEEL_ROWS, translate};
pub use hit::{HitMap, Region};

use dropdown_lib::{DropdownConfig, HostMetrics};

use crate::rect::Rect;
use crate::units::Scale;

/// Rows of the bordered input box at minimum.
pub const INPUT_ROWS: u16 = 3;
/// Narrowest control the view will draw.
pub const MIN_COLS: u16 = 8;

/// Placement of a dropdown on the terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownView {
    x: u16,
    y: u16,
    scale: Scale,
}

impl DropdownView {
    pub fn new(scale: Scale) -> Self {
        Self { x: 0, y: 0, scale }
    }

    /// Place the control's top-left corner at (x, y).
    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The control's box (input row) on a screen of `area`.
    pub fn container(&self, config: &DropdownConfig, area: Rect) -> Rect {
        let avail_cols = area.right().saturating_sub(self.x);
        let width_units = config.dropdown_width.resolve(self.scale.x_units(avail_cols));
        let cols = self.scale.cols(width_units).max(MIN_COLS).min(avail_cols);

        let height_units = config.input_height.resolve(self.scale.y_units(area.height));
        let rows = self.scale.rows(height_units).max(INPUT_ROWS);

        Rect::new(self.x, self.y, cols, rows)
    }

    /// The input box inside the container.
    pub fn input_rect(&self, config: &DropdownConfig, area: Rect) -> Rect {
        let container = self.container(config, area);
        let width_units = config
            .input_width
            .resolve(self.scale.x_units(container.width));
        let cols = self
            .scale
            .cols(width_units)
            .clamp(MIN_COLS.min(container.width), container.width);
        Rect::new(container.x, container.y, cols, container.height)
    }

    /// What the dropdown should be told about its host.
    pub fn metrics(&self, config: &DropdownConfig, area: Rect) -> HostMetrics {
        HostMetrics {
            container: self.scale.bounds(self.container(config, area)),
            viewport_height: self.scale.y_units(area.height),
        }
    }
}
