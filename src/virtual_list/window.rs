//! Render window calculation result

use crate::model::ItemIndex;

/// Slice of items the host should render, plus spacer sizes around it.
///
/// Recomputed on every viewport or size change; never persisted.
///
/// # Invariants
/// - Either both bounds are present with `start_index <= end_index`, or the
///   window is empty (no items to render, both paddings `0`)
/// - Bounds are inclusive
/// - `padding_before + sum(sizes in window) + padding_after == total size`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderWindow {
    bounds: Option<(ItemIndex, ItemIndex)>,
    padding_before: f64,
    padding_after: f64,
}

impl RenderWindow {
    /// Create a window over the inclusive range `start..=end`.
    ///
    /// # Panics
    /// In debug builds, panics if `start > end`.
    pub fn new(start: ItemIndex, end: ItemIndex, padding_before: f64, padding_after: f64) -> Self {
        debug_assert!(
            start <= end,
            "window start {} must not exceed end {}",
            start,
            end
        );
        Self {
            bounds: Some((start, end)),
            padding_before,
            padding_after,
        }
    }

    /// The window for an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// First rendered item (inclusive), `None` for an empty window.
    pub fn start_index(&self) -> Option<ItemIndex> {
        self.bounds.map(|(start, _)| start)
    }

    /// Last rendered item (inclusive), `None` for an empty window.
    pub fn end_index(&self) -> Option<ItemIndex> {
        self.bounds.map(|(_, end)| end)
    }

    /// Both bounds at once.
    pub fn bounds(&self) -> Option<(ItemIndex, ItemIndex)> {
        self.bounds
    }

    /// Spacer size before the first rendered item.
    pub fn padding_before(&self) -> f64 {
        self.padding_before
    }

    /// Spacer size after the last rendered item.
    pub fn padding_after(&self) -> f64 {
        self.padding_after
    }

    /// Bounds as signed indices, `(-1, -1)` for an empty window.
    ///
    /// For hosts that model "no items" with sentinel indices.
    pub fn host_indices(&self) -> (i64, i64) {
        match self.bounds {
            Some((start, end)) => (to_i64(start), to_i64(end)),
            None => (-1, -1),
        }
    }

    /// Number of rendered items.
    pub fn len(&self) -> usize {
        self.bounds
            .map(|(start, end)| end.get() - start.get() + 1)
            .unwrap_or(0)
    }

    /// Check if the window renders nothing.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Iterate over rendered item indices.
    pub fn indices(&self) -> impl Iterator<Item = ItemIndex> {
        let range = match self.bounds {
            Some((start, end)) => start.get()..end.get() + 1,
            None => 0..0,
        };
        range.map(ItemIndex::new)
    }

    /// Check if a specific item index is rendered.
    pub fn contains(&self, index: ItemIndex) -> bool {
        self.bounds
            .is_some_and(|(start, end)| start <= index && index <= end)
    }
}

fn to_i64(index: ItemIndex) -> i64 {
    i64::try_from(index.get()).unwrap_or(i64::MAX)
}
