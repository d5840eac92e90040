//! SizeTable - per-item extents with a lazily maintained cumulative-offset cache
//!
//! Provides cumulative offsets for converting between scroll position and item
//! index. Measurements only invalidate the cache from the measured index
//! onward; offsets are recomputed on the next query, not eagerly.
//!
//! # Complexity
//!
//! - `set_size`: O(1)
//! - `offset_of`: O(k) where k is the number of stale offsets below `index`, O(1) when warm
//! - `index_at_offset`: O(k + log n)
//! - `set_len`: O(|Δlen|)
//! - `reset`: O(n)

use tracing::debug;

use crate::model::VirtualListError;

/// Largest size accepted for a single item.
///
/// Keeps every cumulative offset finite for any list that fits in memory.
pub const MAX_ITEM_SIZE: f64 = 1.0e12;

/// Check that a size can be used as a rendered extent.
fn is_valid_size(size: f64) -> bool {
    size.is_finite() && size > 0.0 && size <= MAX_ITEM_SIZE
}

/// Sizes for every item of one logical list plus their running offsets.
///
/// # Invariants
/// - `offsets.len() == sizes.len() + 1` and `offsets[0] == 0`
/// - For every `i <= valid_through`, `offsets[i]` equals the sum of `sizes[..i]`
/// - Every entry of `sizes` is in `(0, MAX_ITEM_SIZE]`
/// - A measured entry never reverts to the default except through [`SizeTable::reset`]
#[derive(Debug, Clone)]
pub struct SizeTable {
    /// Current size per item (measured or estimated).
    sizes: Vec<f64>,
    /// Whether the host has reported a measurement for the item.
    measured: Vec<bool>,
    /// Cumulative offsets, `offsets[i]` = start of item `i`, `offsets[len]` = total.
    offsets: Vec<f64>,
    /// Highest index into `offsets` that is known to be current.
    valid_through: usize,
    /// Estimated size used for unmeasured items.
    default_size: f64,
}

impl SizeTable {
    /// Creates a table with `len` items, each estimated at `default_size`.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualListError::InvalidDefaultSize`] if `default_size` is not
    /// in `(0, MAX_ITEM_SIZE]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollkit::virtual_list::SizeTable;
    /// let mut table = SizeTable::new(3, 10.0).unwrap();
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.total_size(), 30.0);
    /// ```
    pub fn new(len: usize, default_size: f64) -> Result<Self, VirtualListError> {
        if !is_valid_size(default_size) {
            return Err(VirtualListError::InvalidDefaultSize(default_size));
        }
        Ok(Self {
            sizes: vec![default_size; len],
            measured: vec![false; len],
            offsets: vec![0.0; len + 1],
            valid_through: 0,
            default_size,
        })
    }

    /// Number of items in the table.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns true if the table holds no items.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Size used for items that have not been measured yet.
    pub fn default_size(&self) -> f64 {
        self.default_size
    }

    /// Current size of the item at `index` (measured or estimated).
    pub fn size_of(&self, index: usize) -> Option<f64> {
        self.sizes.get(index).copied()
    }

    /// Measured size of the item at `index`, or `None` if it was never measured.
    pub fn measured_size(&self, index: usize) -> Option<f64> {
        match self.measured.get(index) {
            Some(true) => self.sizes.get(index).copied(),
            _ => None,
        }
    }

    /// Whether the host has reported a measurement for `index`.
    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    /// Number of items with a reported measurement.
    pub fn measured_count(&self) -> usize {
        self.measured.iter().filter(|m| **m).count()
    }

    /// Records a measured size for `index`.
    ///
    /// Returns `Ok(true)` if the size changed, `Ok(false)` for a redundant
    /// measurement. Only a changed size invalidates cached offsets, and only
    /// those after `index`.
    ///
    /// # Errors
    ///
    /// - [`VirtualListError::IndexOutOfRange`] if `index >= len()`
    /// - [`VirtualListError::InvalidSize`] if `size` is not in `(0, MAX_ITEM_SIZE]`
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollkit::virtual_list::SizeTable;
    /// let mut table = SizeTable::new(3, 10.0).unwrap();
    /// assert_eq!(table.set_size(1, 25.0), Ok(true));
    /// assert_eq!(table.set_size(1, 25.0), Ok(false));
    /// assert_eq!(table.offset_of(2), 35.0);
    /// assert!(table.set_size(3, 5.0).is_err());
    /// ```
    pub fn set_size(&mut self, index: usize, size: f64) -> Result<bool, VirtualListError> {
        if index >= self.len() {
            return Err(VirtualListError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        if !is_valid_size(size) {
            return Err(VirtualListError::InvalidSize { index, size });
        }

        self.measured[index] = true;
        if self.sizes[index] == size {
            return Ok(false);
        }

        self.sizes[index] = size;
        // offsets[index] only depends on sizes before index, so it stays valid.
        self.valid_through = self.valid_through.min(index);
        Ok(true)
    }

    /// Replaces the default estimate and applies it to every unmeasured item.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualListError::InvalidDefaultSize`] for a size outside
    /// `(0, MAX_ITEM_SIZE]`.
    pub fn set_default_size(&mut self, size: f64) -> Result<(), VirtualListError> {
        if !is_valid_size(size) {
            return Err(VirtualListError::InvalidDefaultSize(size));
        }
        self.default_size = size;

        let mut first_changed = None;
        for (index, (current, measured)) in
            self.sizes.iter_mut().zip(self.measured.iter()).enumerate()
        {
            if !*measured && *current != size {
                *current = size;
                first_changed.get_or_insert(index);
            }
        }
        if let Some(index) = first_changed {
            self.valid_through = self.valid_through.min(index);
        }
        Ok(())
    }

    /// Returns the start offset of the item at `index`.
    ///
    /// `offset_of(len())` is the total size. Indices past the end clamp to the
    /// total.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollkit::virtual_list::SizeTable;
    /// let mut table = SizeTable::new(3, 10.0).unwrap();
    /// table.set_size(0, 4.0).unwrap();
    /// assert_eq!(table.offset_of(0), 0.0);
    /// assert_eq!(table.offset_of(1), 4.0);
    /// assert_eq!(table.offset_of(3), 24.0);
    /// assert_eq!(table.offset_of(99), 24.0);
    /// ```
    pub fn offset_of(&mut self, index: usize) -> f64 {
        let index = index.min(self.len());
        self.refresh_through(index);
        self.offsets[index]
    }

    /// Total size of all items.
    pub fn total_size(&mut self) -> f64 {
        self.offset_of(self.len())
    }

    /// Binary search for the first item whose end is past `offset`.
    ///
    /// Returns the index of the item covering `offset`, i.e. the smallest `i`
    /// with `offset_of(i) + size_of(i) > offset`.
    ///
    /// # Returns
    ///
    /// - `Some(index)` for any `offset < total_size()` (negative offsets map to item 0)
    /// - `None` if `offset >= total_size()` or the table is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use scrollkit::virtual_list::SizeTable;
    /// let mut table = SizeTable::new(3, 10.0).unwrap();
    /// table.set_size(1, 20.0).unwrap(); // [0..10) [10..30) [30..40)
    ///
    /// assert_eq!(table.index_at_offset(0.0), Some(0));
    /// assert_eq!(table.index_at_offset(9.5), Some(0));
    /// assert_eq!(table.index_at_offset(10.0), Some(1));
    /// assert_eq!(table.index_at_offset(30.0), Some(2));
    /// assert_eq!(table.index_at_offset(40.0), None);
    /// ```
    pub fn index_at_offset(&mut self, offset: f64) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.refresh_through(self.len());

        // Item i covers [offsets[i], offsets[i + 1]).
        let index = self.offsets[1..].partition_point(|end| *end <= offset);
        (index < self.len()).then_some(index)
    }

    /// Resizes the table to `len` items.
    ///
    /// Measurements for indices that remain in range are kept; new items start
    /// at the default estimate.
    pub fn set_len(&mut self, len: usize) {
        let old_len = self.len();
        if len == old_len {
            return;
        }
        self.sizes.resize(len, self.default_size);
        self.measured.resize(len, false);
        self.offsets.resize(len + 1, 0.0);
        self.valid_through = self.valid_through.min(len);
        debug!(old_len, new_len = len, "size table resized");
    }

    /// Drops every measurement and returns all items to the default estimate.
    pub fn reset(&mut self) {
        self.sizes.fill(self.default_size);
        self.measured.fill(false);
        self.valid_through = 0;
    }

    /// Brings `offsets[..=through]` up to date.
    fn refresh_through(&mut self, through: usize) {
        while self.valid_through < through {
            let i = self.valid_through;
            self.offsets[i + 1] = self.offsets[i] + self.sizes[i];
            self.valid_through += 1;
        }
    }
}
