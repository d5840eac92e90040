//! Item view handed back to the host when slicing its collection.

use crate::model::ItemIndex;

/// A logical item paired with its position and measured size.
///
/// `size` is `None` until the host has reported a measurement for the item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item<T> {
    /// Position in the source collection.
    pub index: ItemIndex,
    /// Host payload, opaque to the engine.
    pub raw: T,
    /// Measured extent, if known.
    pub size: Option<f64>,
}

impl<T> Item<T> {
    /// Check if the item has been measured.
    pub fn is_measured(&self) -> bool {
        self.size.is_some()
    }
}
