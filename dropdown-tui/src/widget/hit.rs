use crate::rect::Rect;

/// A clickable part of the drawn dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The input box.
    Input,
    /// The "×" on the selection chip.
    ClearSelection,
    /// Panel chrome (border, padding, empty rows).
    Panel,
    /// The "Select All" header.
    SelectAll,
    /// A list row, by position in the filtered view.
    Row(usize),
}

impl Region {
    /// Whether the region belongs to the open panel.
    pub fn in_panel(&self) -> bool {
        matches!(self, Region::Panel | Region::SelectAll | Region::Row(_))
    }
}

/// Regions recorded while drawing, in draw order.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Region)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, region: Region) {
        if !rect.is_empty() {
            self.regions.push((rect, region));
        }
    }

    /// The topmost region at (x, y). Later regions are drawn over earlier ones.
    pub fn hit(&self, x: u16, y: u16) -> Option<Region> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, region)| *region)
    }

    /// Rectangle recorded for `region`, if it was drawn.
    pub fn rect_of(&self, region: Region) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, r)| *r == region)
            .map(|(rect, _)| *rect)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }
}
