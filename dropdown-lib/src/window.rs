//! Data windower - a growable prefix over the full candidate list.

use std::sync::Arc;

use crate::item::Item;

/// The "loaded" prefix of the full list.
///
/// The window starts with one chunk and grows by one chunk per [`grow`]
/// call until it covers the whole list. Swapping the list (by reference) or
/// changing the chunk size starts over from the first chunk.
///
/// [`grow`]: DataWindow::grow
#[derive(Debug, Clone)]
pub struct DataWindow {
    data: Arc<[Item]>,
    chunk_size: usize,
    len: usize,
}

impl DataWindow {
    /// Create a window over `data` holding its first chunk.
    pub fn new(data: Arc<[Item]>, chunk_size: usize) -> Self {
        let len = chunk_size.min(data.len());
        Self {
            data,
            chunk_size,
            len,
        }
    }

    /// The full list.
    pub fn data(&self) -> &Arc<[Item]> {
        &self.data
    }

    /// The loaded prefix.
    pub fn items(&self) -> &[Item] {
        &self.data[..self.len]
    }

    /// Number of loaded items.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Whether items remain beyond the window.
    pub fn has_more(&self) -> bool {
        self.len < self.data.len()
    }

    /// Append the next chunk. Returns the number of items added, zero once
    /// the list is exhausted.
    pub fn grow(&mut self) -> usize {
        let next = self.len.saturating_add(self.chunk_size).min(self.data.len());
        let added = next - self.len;
        if added > 0 {
            log::debug!(
                "[DataWindow::grow] {} -> {} of {}",
                self.len,
                next,
                self.data.len()
            );
        }
        self.len = next;
        added
    }

    /// Point the window at a new list. Returns true if the window was reset.
    ///
    /// Identity is by reference: handing back the same `Arc` keeps the
    /// current window.
    pub fn set_data(&mut self, data: Arc<[Item]>) -> bool {
        if Arc::ptr_eq(&self.data, &data) {
            return false;
        }
        self.data = data;
        self.reset();
        true
    }

    /// Change the chunk size. Returns true if the window was reset.
    pub fn set_chunk_size(&mut self, chunk_size: usize) -> bool {
        if self.chunk_size == chunk_size {
            return false;
        }
        self.chunk_size = chunk_size;
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.len = self.chunk_size.min(self.data.len());
        log::debug!(
            "[DataWindow::reset] window={} of {}",
            self.len,
            self.data.len()
        );
    }
}
