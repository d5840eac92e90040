//! Thread-safe handle for hosts that measure and query from several threads.
//!
//! Offset invalidation is not safe under concurrent writers, and queries
//! refresh the lazy offset cache, so every call goes through one mutex.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{engine::VirtualList, viewport::Viewport, window::RenderWindow};
use crate::model::VirtualListError;

/// Cloneable handle to a [`VirtualList`] behind a single mutex.
#[derive(Debug, Clone)]
pub struct SharedVirtualList {
    inner: Arc<Mutex<VirtualList>>,
}

impl SharedVirtualList {
    /// Wrap an engine.
    pub fn new(list: VirtualList) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    /// See [`VirtualList::report_measured_size`].
    pub fn report_measured_size(&self, index: usize, size: f64) -> Result<(), VirtualListError> {
        self.inner.lock().report_measured_size(index, size)
    }

    /// See [`VirtualList::compute_window`].
    pub fn compute_window(&self, viewport: Viewport) -> RenderWindow {
        self.inner.lock().compute_window(viewport)
    }

    /// See [`VirtualList::scroll_to_index`].
    pub fn scroll_to_index(&self, index: usize) -> f64 {
        self.inner.lock().scroll_to_index(index)
    }

    /// See [`VirtualList::set_item_count`].
    pub fn set_item_count(&self, item_count: usize) {
        self.inner.lock().set_item_count(item_count);
    }

    /// Run several operations under one lock acquisition.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut VirtualList) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
