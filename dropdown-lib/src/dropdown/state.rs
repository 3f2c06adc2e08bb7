//! Dropdown widget state.

use std::fmt;
use std::sync::Arc;

use crate::config::{DropdownConfig, FALLBACK_DROPDOWN_WIDTH};
use crate::filter::filter_view;
use crate::item::{Item, Key, display_value};
use crate::layout::{Dimensions, HostMetrics, compute_dimensions};
use crate::selection::{Selection, SelectionMode};
use crate::virtual_list::{ScrollRequest, VirtualList, VisibleRange};
use crate::window::DataWindow;

/// Placeholder shown in the input while nothing is selected.
pub const PLACEHOLDER: &str = "Search...";
/// Panel text when the filtered view is empty.
pub const NO_RESULTS: &str = "No results found";

/// Callback invoked with the new selection after every selection change.
pub type ChangeHandler = Arc<dyn Fn(&[Item]) + Send + Sync>;

/// A searchable dropdown over a large list.
///
/// `Dropdown` owns all of the widget's state: which prefix of the list is
/// loaded, the search query, open/closed, the selection, and the scroll
/// position of the virtualized row list. Hosts drive it with [`Msg`]s
/// through [`update`](Dropdown::update) (or the equivalent methods) and read
/// it back to render.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use dropdown_lib::{Dropdown, DropdownConfig, Item};
/// use serde_json::json;
///
/// let items: Vec<Item> = (1..=3)
///     .map(|id| json!({"id": id, "customer": format!("Customer {id}")}))
///     .filter_map(|v| v.as_object().cloned())
///     .collect();
///
/// let mut dropdown = Dropdown::new(DropdownConfig::default(), items)
///     .on_change(|selected| println!("{} selected", selected.len()));
///
/// dropdown.set_query("customer 2");
/// assert_eq!(dropdown.filtered_len(), 1);
/// dropdown.toggle_item(0, true);
/// assert_eq!(dropdown.selection().len(), 1);
/// ```
///
/// [`Msg`]: super::Msg
pub struct Dropdown {
    config: DropdownConfig,
    window: DataWindow,
    query: String,
    open: bool,
    selection: Selection,
    /// Indices into the full list, recomputed on query/window changes.
    filtered: Vec<usize>,
    dimensions: Dimensions,
    metrics: Option<HostMetrics>,
    list: VirtualList,
    on_change: Option<ChangeHandler>,
}

impl Dropdown {
    /// Create a dropdown over `data`.
    pub fn new(config: DropdownConfig, data: impl Into<Arc<[Item]>>) -> Self {
        let window = DataWindow::new(data.into(), config.chunk_size);
        let selection = Selection::new(
            SelectionMode::from_multiple(config.multiple_select),
            config.key_field.clone(),
        );
        let initial_width = match config.dropdown_width.value() {
            w if w > 0.0 => w,
            _ => FALLBACK_DROPDOWN_WIDTH,
        };
        let dimensions = Dimensions {
            width: initial_width,
            height: config.max_dropdown_height,
        };
        let mut list = VirtualList::new(config.item_height);
        list.set_viewport(dimensions.height);

        let mut dropdown = Self {
            config,
            window,
            query: String::new(),
            open: false,
            selection,
            filtered: Vec::new(),
            dimensions,
            metrics: None,
            list,
            on_change: None,
        };
        dropdown.refilter();
        dropdown
    }

    /// Set the selection change callback.
    pub fn on_change(mut self, handler: impl Fn(&[Item]) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Replace the selection change callback.
    pub fn set_on_change(&mut self, handler: Option<ChangeHandler>) {
        self.on_change = handler;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// The full candidate list.
    pub fn data(&self) -> &Arc<[Item]> {
        self.window.data()
    }

    pub fn window(&self) -> &DataWindow {
        &self.window
    }

    /// Whether unloaded items remain past the display window.
    pub fn has_more(&self) -> bool {
        self.window.has_more()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_multiple(&self) -> bool {
        self.selection.mode() == SelectionMode::Multi
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_items(&self) -> &[Item] {
        self.selection.items()
    }

    pub fn selected_ids(&self) -> &[Key] {
        self.selection.ids()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Last host measurement, if any.
    pub fn metrics(&self) -> Option<HostMetrics> {
        self.metrics
    }

    pub fn list(&self) -> &VirtualList {
        &self.list
    }

    /// Rows the renderer should materialize, `None` when the view is empty.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.list.visible_range()
    }

    // -------------------------------------------------------------------------
    // Filtered view
    // -------------------------------------------------------------------------

    /// Full-list indices of the rows currently shown.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Item at a position of the filtered view.
    pub fn filtered_item(&self, index: usize) -> Option<&Item> {
        self.filtered
            .get(index)
            .and_then(|&i| self.window.data().get(i))
    }

    /// Iterate the filtered view in order.
    pub fn filtered_items(&self) -> impl Iterator<Item = &Item> + '_ {
        let data = self.window.data();
        self.filtered.iter().filter_map(move |&i| data.get(i))
    }

    /// Label of a filtered row.
    pub fn row_label(&self, index: usize) -> Option<String> {
        self.filtered_item(index)
            .map(|item| display_value(item, &self.config.display_key))
    }

    /// Whether a filtered row is selected.
    pub fn is_row_selected(&self, index: usize) -> bool {
        self.filtered_item(index)
            .is_some_and(|item| self.selection.contains(item))
    }

    // -------------------------------------------------------------------------
    // Input presentation
    // -------------------------------------------------------------------------

    /// Text shown in the input box.
    ///
    /// Multi-select shows the query. Single-select shows the query, falling
    /// back to the selected item's label.
    pub fn input_text(&self) -> String {
        if self.is_multiple() || !self.query.is_empty() {
            return self.query.clone();
        }
        self.selection
            .first()
            .map(|item| display_value(item, &self.config.display_key))
            .unwrap_or_default()
    }

    /// Placeholder for the input, empty once something is selected.
    pub fn placeholder(&self) -> &'static str {
        if self.selection.is_empty() {
            PLACEHOLDER
        } else {
            ""
        }
    }

    /// `"N item(s) selected"` chip text (multi-select with a selection only).
    pub fn selection_summary(&self) -> Option<String> {
        if !self.is_multiple() || self.selection.is_empty() {
            return None;
        }
        let n = self.selection.len();
        let noun = if n == 1 { "item" } else { "items" };
        Some(format!("{} {} selected", n, noun))
    }

    /// State of the "Select All" checkbox.
    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.window.data().len())
    }

    // -------------------------------------------------------------------------
    // Data and options
    // -------------------------------------------------------------------------

    /// Swap the candidate list. A different list resets the display window.
    pub fn set_data(&mut self, data: impl Into<Arc<[Item]>>) {
        if self.window.set_data(data.into()) {
            self.refilter();
        }
    }

    /// Change the chunk size, resetting the display window.
    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        if self.window.set_chunk_size(chunk_size) {
            self.config.chunk_size = chunk_size;
            self.refilter();
        }
    }

    /// Change the panel height cap and re-measure.
    pub fn set_max_dropdown_height(&mut self, height: f32) {
        self.config.max_dropdown_height = height;
        self.measure();
    }

    /// Load the next chunk into the display window.
    pub fn load_more(&mut self) -> bool {
        let added = self.window.grow();
        if added > 0 {
            self.refilter();
        }
        added > 0
    }

    // -------------------------------------------------------------------------
    // Open / close / search
    // -------------------------------------------------------------------------

    /// Toggle the panel (input click).
    pub fn toggle_open(&mut self) {
        self.set_open(!self.open);
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            log::debug!("[Dropdown] {}", if open { "open" } else { "close" });
            self.open = open;
            self.measure();
        }
    }

    /// A pointer went down outside both the panel and the input.
    ///
    /// Closes the panel and drops the query.
    pub fn pointer_down_outside(&mut self) {
        if self.open {
            self.close();
            self.set_query_inner(String::new());
        }
    }

    /// Replace the search query (typing in the input).
    ///
    /// Opens the panel. In single-select mode typing also drops the current
    /// selection, without notifying.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.set_query_inner(query.into());
        if !self.open {
            self.open();
        }
        if !self.is_multiple() {
            self.selection.clear();
        }
    }

    fn set_query_inner(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.refilter();
        }
    }

    // -------------------------------------------------------------------------
    // Layout and virtualization
    // -------------------------------------------------------------------------

    /// Record a new host measurement (mount or viewport resize).
    pub fn resize(&mut self, metrics: HostMetrics) {
        self.metrics = Some(metrics);
        self.measure();
    }

    fn measure(&mut self) {
        if let Some(metrics) = self.metrics {
            self.dimensions = compute_dimensions(&metrics, self.config.max_dropdown_height);
            self.list.set_viewport(self.dimensions.height);
            log::debug!(
                "[Dropdown::measure] {}x{}",
                self.dimensions.width,
                self.dimensions.height
            );
        }
    }

    /// Apply a scroll request to the row list.
    pub fn scroll(&mut self, request: ScrollRequest) {
        self.list.apply(request);
    }

    /// The renderer materialized `range`. Grows the display window when the
    /// last visible row reaches the end of the filtered view and more data
    /// remains. Returns true if the window grew.
    pub fn items_rendered(&mut self, range: VisibleRange) -> bool {
        log::trace!(
            "[Dropdown::items_rendered] visible {}..={} of {}",
            range.visible_start,
            range.visible_stop,
            self.filtered.len()
        );
        if self.window.has_more() && range.visible_stop + 1 >= self.filtered.len() {
            return self.load_more();
        }
        false
    }

    fn refilter(&mut self) {
        self.filtered = filter_view(self.window.data(), self.window.len(), &self.query);
        self.list.set_item_count(self.filtered.len());
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Set or unset the item at a filtered position, then notify.
    ///
    /// Single-select additionally clears the query and closes the panel.
    pub fn toggle_item(&mut self, index: usize, selected: bool) {
        let Some(&data_index) = self.filtered.get(index) else {
            log::warn!("[Dropdown::toggle_item] no row at {}", index);
            return;
        };
        let data = Arc::clone(self.window.data());
        self.toggle(&data[data_index], selected);
    }

    /// Set or unset `item` directly, then notify.
    pub fn toggle(&mut self, item: &Item, selected: bool) {
        self.selection.toggle(item, selected);
        log::debug!(
            "[Dropdown::toggle] selected={} total={}",
            selected,
            self.selection.len()
        );
        if !self.is_multiple() {
            self.set_query_inner(String::new());
            self.close();
        }
        self.notify();
    }

    /// Select every item of the full list, or none, then notify.
    ///
    /// Always spans the whole list, even while a query narrows the view.
    /// Ignored in single-select mode.
    pub fn toggle_select_all(&mut self, selected: bool) {
        if !self.is_multiple() {
            log::warn!("[Dropdown::toggle_select_all] ignored in single-select mode");
            return;
        }
        if selected {
            self.selection.select_all(self.window.data());
        } else {
            self.selection.clear();
        }
        log::debug!("[Dropdown::toggle_select_all] total={}", self.selection.len());
        self.notify();
    }

    /// Drop the whole selection without notifying (chip clear button).
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn notify(&self) {
        if let Some(handler) = &self.on_change {
            handler(self.selection.items());
        }
    }
}

impl fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("config", &self.config)
            .field("window", &self.window.len())
            .field("data", &self.window.data().len())
            .field("query", &self.query)
            .field("open", &self.open)
            .field("selected", &self.selection.len())
            .field("filtered", &self.filtered.len())
            .field("dimensions", &self.dimensions)
            .field("list", &self.list)
            .finish()
    }
}
