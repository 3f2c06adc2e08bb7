//! Messages driving the dropdown.

use crate::layout::HostMetrics;
use crate::virtual_list::{ScrollRequest, VisibleRange};

use super::Dropdown;

/// Where a pointer-down landed, as classified by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The text input.
    Input,
    /// Anywhere inside the open panel.
    Panel,
    /// Everywhere else.
    Outside,
}

/// Everything that can happen to a dropdown.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The input was clicked: toggle the panel.
    InputClicked,
    /// The input text changed.
    QueryChanged(String),
    /// A pointer went down somewhere (outside-click detection).
    PointerDown(PointerTarget),
    /// The host was measured or the viewport resized.
    Resized(HostMetrics),
    /// The renderer materialized a range of rows.
    ItemsRendered(VisibleRange),
    /// A row (by filtered position) was checked or unchecked.
    ToggleItem { index: usize, selected: bool },
    /// The "Select All" checkbox changed.
    ToggleSelectAll(bool),
    /// The selection chip's clear button was pressed.
    ClearSelection,
    /// Scroll the row list.
    Scroll(ScrollRequest),
}

impl Dropdown {
    /// Apply one message.
    pub fn update(&mut self, msg: Msg) {
        log::trace!("[Dropdown::update] {:?}", msg);
        match msg {
            Msg::InputClicked => self.toggle_open(),
            Msg::QueryChanged(query) => self.set_query(query),
            Msg::PointerDown(PointerTarget::Outside) => self.pointer_down_outside(),
            Msg::PointerDown(_) => {}
            Msg::Resized(metrics) => self.resize(metrics),
            Msg::ItemsRendered(range) => {
                self.items_rendered(range);
            }
            Msg::ToggleItem { index, selected } => self.toggle_item(index, selected),
            Msg::ToggleSelectAll(selected) => self.toggle_select_all(selected),
            Msg::ClearSelection => self.clear_selection(),
            Msg::Scroll(request) => self.scroll(request),
        }
    }
}
