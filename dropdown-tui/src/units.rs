//! Mapping between terminal cells and the dropdown's layout units.
//!
//! The dropdown core sizes things in pixel-like units (row height 35,
//! panel floor 200, ...). A terminal row stands for one list row, so a
//! cell is `item_height` units tall, and a column is [`CELL_WIDTH`] units
//! wide.

use dropdown_lib::{Bounds, DropdownConfig};

use crate::rect::Rect;

/// Layout units per terminal column.
pub const CELL_WIDTH: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Scale {
    pub fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// One terminal row per list row.
    pub fn for_config(config: &DropdownConfig) -> Self {
        Self::new(CELL_WIDTH, config.item_height)
    }

    /// Whole columns covered by `units`.
    pub fn cols(&self, units: f32) -> u16 {
        (units / self.cell_width).floor().clamp(0.0, u16::MAX as f32) as u16
    }

    /// Whole rows covered by `units`.
    pub fn rows(&self, units: f32) -> u16 {
        (units / self.cell_height).floor().clamp(0.0, u16::MAX as f32) as u16
    }

    pub fn x_units(&self, cols: u16) -> f32 {
        cols as f32 * self.cell_width
    }

    pub fn y_units(&self, rows: u16) -> f32 {
        rows as f32 * self.cell_height
    }

    /// A cell rectangle in layout units.
    pub fn bounds(&self, rect: Rect) -> Bounds {
        Bounds::new(
            self.x_units(rect.x),
            self.y_units(rect.y),
            self.x_units(rect.width),
            self.y_units(rect.height),
        )
    }
}
