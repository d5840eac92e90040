//! Virtual list engine: maps a viewport onto the items that must be rendered.

use tracing::{debug, trace, warn};

use super::{
    item::Item, scroll::ScrollAlign, size_table::SizeTable, viewport::Viewport,
    window::RenderWindow,
};
use crate::model::{ItemIndex, VirtualListError};

/// Windowing engine for one logical list.
///
/// Owns the [`SizeTable`] exclusively. Every query is a function of
/// `(SizeTable, Viewport)`; the table is the only persistent state and is only
/// refined by explicit measurements.
///
/// # Window computation
/// `visible_window()` binary-searches the cumulative offsets for the item
/// covering the scroll offset and the item covering the viewport's far edge.
/// `compute_window()` then widens that range by the overscan.
///
/// # Clamping
/// Scroll offsets are clamped to `[0, max(0, total - container_extent)]`
/// before the search, so out-of-range offsets never fail and never produce a
/// window that ends before the content does.
///
/// Queries take `&mut self` because cumulative offsets are refreshed lazily;
/// they do not change any observable state.
#[derive(Debug, Clone)]
pub struct VirtualList {
    sizes: SizeTable,
    overscan: usize,
    /// Adopt the first measurement as the default estimate.
    estimate_pending: bool,
}

impl VirtualList {
    /// Create an engine for `item_count` items estimated at `default_item_size`.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualListError::InvalidDefaultSize`] if the size is not in
    /// `(0, MAX_ITEM_SIZE]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollkit::virtual_list::{VirtualList, Viewport};
    /// let mut list = VirtualList::new(100, 40.0).unwrap();
    /// let window = list.visible_window(Viewport::new(0.0, 400.0));
    /// assert_eq!(window.host_indices(), (0, 10));
    /// assert_eq!(window.padding_before(), 0.0);
    /// ```
    pub fn new(item_count: usize, default_item_size: f64) -> Result<Self, VirtualListError> {
        Ok(Self {
            sizes: SizeTable::new(item_count, default_item_size)?,
            overscan: 0,
            estimate_pending: false,
        })
    }

    /// Create an engine whose default size is replaced by the first
    /// measurement the host reports.
    ///
    /// For hosts that do not know item sizes up front: `initial_estimate` is
    /// used until something has been measured.
    pub fn with_estimated_size(
        item_count: usize,
        initial_estimate: f64,
    ) -> Result<Self, VirtualListError> {
        let mut list = Self::new(item_count, initial_estimate)?;
        list.estimate_pending = true;
        Ok(list)
    }

    /// Set how many extra items `compute_window` renders on each side.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Current overscan.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Change the overscan.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// Read access to the size table.
    pub fn size_table(&self) -> &SizeTable {
        &self.sizes
    }

    /// Total content size (measured sizes plus estimates).
    pub fn total_size(&mut self) -> f64 {
        self.sizes.total_size()
    }

    /// Record the measured size of the item at `index`.
    ///
    /// Redundant identical measurements are accepted and change nothing.
    ///
    /// # Errors
    ///
    /// - [`VirtualListError::IndexOutOfRange`] if `index >= len()`
    /// - [`VirtualListError::InvalidSize`] if `size` is not in `(0, MAX_ITEM_SIZE]`
    pub fn report_measured_size(&mut self, index: usize, size: f64) -> Result<(), VirtualListError> {
        let changed = self.sizes.set_size(index, size)?;
        trace!(index, size, changed, "item measured");

        if self.estimate_pending {
            self.estimate_pending = false;
            self.sizes.set_default_size(size)?;
            debug!(estimate = size, "adopted first measurement as default item size");
        }
        Ok(())
    }

    /// Change the number of items, keeping measurements still in range.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.sizes.set_len(item_count);
    }

    /// Drop every measurement.
    pub fn reset(&mut self) {
        debug!(len = self.len(), "virtual list reset");
        self.sizes.reset();
    }

    /// Largest scroll offset that still fills a container of the given extent.
    pub fn max_scroll_offset(&mut self, container_extent: f64) -> f64 {
        (self.total_size() - container_extent.max(0.0)).max(0.0)
    }

    /// Clamp `viewport`'s scroll offset into the valid range.
    pub fn clamp_viewport(&mut self, viewport: Viewport) -> Viewport {
        if !viewport.is_finite() {
            warn!(?viewport, "non-finite viewport clamped");
        }
        let viewport = viewport.sanitized();
        let max = self.max_scroll_offset(viewport.container_extent);
        Viewport::new(viewport.scroll_offset.min(max), viewport.container_extent)
    }

    /// Compute the strictly visible window, without overscan.
    ///
    /// Returns [`RenderWindow::empty`] for an empty list. Never fails.
    pub fn visible_window(&mut self, viewport: Viewport) -> RenderWindow {
        if self.is_empty() {
            return RenderWindow::empty();
        }

        let viewport = self.clamp_viewport(viewport);
        let last = self.len() - 1;
        let scroll = viewport.scroll_offset;
        let far_edge = scroll + viewport.container_extent;

        let start = self.sizes.index_at_offset(scroll).unwrap_or(last);
        let end = self
            .sizes
            .index_at_offset(far_edge)
            .unwrap_or(last)
            .max(start);

        self.window_between(start, end)
    }

    /// Compute the window to render: the visible window widened by the
    /// overscan on both sides and clamped to valid indices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollkit::virtual_list::{VirtualList, Viewport};
    /// let mut list = VirtualList::new(100, 40.0).unwrap().with_overscan(2);
    /// let window = list.compute_window(Viewport::new(400.0, 400.0));
    /// assert_eq!(window.host_indices(), (8, 22));
    /// assert_eq!(window.padding_before(), 320.0);
    /// ```
    pub fn compute_window(&mut self, viewport: Viewport) -> RenderWindow {
        let visible = self.visible_window(viewport);
        let window = match visible.bounds() {
            Some((start, end)) if self.overscan > 0 => {
                let start = start.get().saturating_sub(self.overscan);
                let end = end
                    .get()
                    .saturating_add(self.overscan)
                    .min(self.len() - 1);
                self.window_between(start, end)
            }
            _ => visible,
        };
        trace!(?viewport, ?window, overscan = self.overscan, "window computed");
        window
    }

    /// Scroll offset that places `index` at the start of the viewport.
    ///
    /// Indices past the end clamp to the last item; an empty list yields `0`.
    /// The host applies the scroll; this does not mutate the engine.
    pub fn scroll_to_index(&mut self, index: usize) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let index = index.min(self.len() - 1);
        self.sizes.offset_of(index)
    }

    /// Scroll offset that brings `index` into view with the given alignment,
    /// clamped to the valid scroll range for `container_extent`.
    pub fn scroll_to_index_aligned(
        &mut self,
        index: usize,
        align: ScrollAlign,
        container_extent: f64,
    ) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let index = index.min(self.len() - 1);
        let start = self.sizes.offset_of(index);
        let size = self.sizes.offset_of(index + 1) - start;
        let extent = Viewport::new(0.0, container_extent)
            .sanitized()
            .container_extent;
        let target = align.sanitized().target_offset(start, size, extent);
        target.clamp(0.0, self.max_scroll_offset(extent))
    }

    /// Hit-test an absolute content offset.
    ///
    /// Returns `None` for negative or non-finite offsets and for offsets at or
    /// beyond the end of the content.
    pub fn item_at_offset(&mut self, offset: f64) -> Option<ItemIndex> {
        if !offset.is_finite() || offset < 0.0 {
            return None;
        }
        self.sizes.index_at_offset(offset).map(ItemIndex::new)
    }

    /// Pair the host's items inside `window` with their indices and measured
    /// sizes. Indices beyond `items.len()` are skipped.
    pub fn items_in_window<'a, T>(
        &'a self,
        window: &RenderWindow,
        items: &'a [T],
    ) -> impl Iterator<Item = Item<&'a T>> + 'a {
        let sizes = &self.sizes;
        window.indices().filter_map(move |index| {
            items.get(index.get()).map(|raw| Item {
                index,
                raw,
                size: sizes.measured_size(index.get()),
            })
        })
    }

    fn window_between(&mut self, start: usize, end: usize) -> RenderWindow {
        let padding_before = self.sizes.offset_of(start);
        let total = self.sizes.total_size();
        let padding_after = total - self.sizes.offset_of(end + 1);
        RenderWindow::new(
            ItemIndex::new(start),
            ItemIndex::new(end),
            padding_before,
            padding_after,
        )
    }
}
