//! Fixed-size virtual list.
//!
//! Every row has the same height, so the visible range is pure arithmetic on
//! the scroll offset: O(1) regardless of how many items the list holds.

/// Default number of extra rows materialized on each side of the viewport.
pub const DEFAULT_OVERSCAN: usize = 2;

/// Scroll actions a host can request on a [`VirtualList`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    /// Scroll by relative amount in layout units (positive = down).
    Delta(f32),
    /// Scroll by whole rows (positive = down).
    Rows(i32),
    /// Scroll to make item at index visible.
    IntoView(usize),
    /// Scroll up by one page.
    PageUp,
    /// Scroll down by one page.
    PageDown,
    /// Scroll to top.
    Home,
    /// Scroll to bottom.
    End,
}

/// Rows a renderer should materialize.
///
/// `visible_*` is what intersects the viewport; `overscan_*` widens it by
/// the overscan count. Both ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub overscan_start: usize,
    pub overscan_stop: usize,
    pub visible_start: usize,
    pub visible_stop: usize,
}

impl VisibleRange {
    /// Indices to materialize, overscan included.
    pub fn rendered(&self) -> std::ops::RangeInclusive<usize> {
        self.overscan_start..=self.overscan_stop
    }
}

/// Scroll state for a list of equally tall rows.
///
/// Offsets and sizes are in layout units.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualList {
    item_count: usize,
    item_size: f32,
    viewport: f32,
    offset: f32,
    overscan: usize,
}

impl VirtualList {
    pub fn new(item_size: f32) -> Self {
        Self {
            item_count: 0,
            item_size,
            viewport: 0.0,
            offset: 0.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Set the overscan count.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_size(&self) -> f32 {
        self.item_size
    }

    pub fn viewport(&self) -> f32 {
        self.viewport
    }

    /// Current scroll offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Total content height.
    pub fn content_height(&self) -> f32 {
        self.item_count as f32 * self.item_size
    }

    /// Maximum scroll offset (content_height - viewport).
    pub fn max_offset(&self) -> f32 {
        (self.content_height() - self.viewport).max(0.0)
    }

    /// Current scroll progress (0.0 = top, 1.0 = bottom).
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 { 0.0 } else { self.offset / max }
    }

    /// Set item count. Clamps the offset if the content shrunk.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.clamp();
    }

    /// Set viewport height. Clamps the offset if the viewport grew.
    pub fn set_viewport(&mut self, viewport: f32) {
        self.viewport = viewport.max(0.0);
        self.clamp();
    }

    /// Scroll by a relative amount (positive = down).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.offset + delta);
    }

    /// Scroll to an absolute offset.
    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset;
        self.clamp();
    }

    /// Scroll by whole rows (positive = down).
    pub fn scroll_rows(&mut self, rows: i32) {
        self.scroll_by(rows as f32 * self.item_size);
    }

    /// Scroll by one viewport.
    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.viewport);
    }

    pub fn home(&mut self) {
        self.scroll_to(0.0);
    }

    pub fn end(&mut self) {
        self.scroll_to(self.max_offset());
    }

    /// Scroll the minimum amount that makes row `index` fully visible.
    pub fn scroll_to_item(&mut self, index: usize) {
        let top = index as f32 * self.item_size;
        let bottom = top + self.item_size;
        if top < self.offset {
            self.scroll_to(top);
        } else if bottom > self.offset + self.viewport {
            self.scroll_to(bottom - self.viewport);
        }
    }

    /// Apply a scroll request to the offset.
    pub fn apply(&mut self, request: ScrollRequest) {
        match request {
            ScrollRequest::Delta(delta) => self.scroll_by(delta),
            ScrollRequest::Rows(rows) => self.scroll_rows(rows),
            ScrollRequest::IntoView(index) => self.scroll_to_item(index),
            ScrollRequest::PageUp => self.page_up(),
            ScrollRequest::PageDown => self.page_down(),
            ScrollRequest::Home => self.home(),
            ScrollRequest::End => self.end(),
        }
    }

    /// Top of row `index` relative to the viewport top.
    pub fn item_top(&self, index: usize) -> f32 {
        index as f32 * self.item_size - self.offset
    }

    /// Rows intersecting the viewport, plus overscan. `None` for an empty
    /// list.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        if self.item_count == 0 || self.item_size <= 0.0 {
            return None;
        }

        let last = self.item_count - 1;
        let visible_start = ((self.offset / self.item_size).floor() as usize).min(last);
        let start_top = visible_start as f32 * self.item_size;
        let visible_rows = ((self.viewport + self.offset - start_top) / self.item_size).ceil() as usize;
        let visible_stop = (visible_start + visible_rows.saturating_sub(1)).min(last);

        Some(VisibleRange {
            overscan_start: visible_start.saturating_sub(self.overscan),
            overscan_stop: (visible_stop + self.overscan).min(last),
            visible_start,
            visible_stop,
        })
    }

    fn clamp(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}
