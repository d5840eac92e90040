//! Alignment for index-based scrolling

use super::viewport::sanitize_offset;

/// Where an item should land in the viewport after scrolling to it.
///
/// All variants resolve to a scroll offset clamped to
/// `[0, max(0, total - container_extent)]`, so a resolved offset never shows
/// blank space past the end of the content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollAlign {
    /// Item's start at the viewport's start.
    #[default]
    Start,

    /// Item's end at the viewport's end.
    End,

    /// Item centered in the viewport.
    Center,

    /// Scroll as little as possible from `current` to bring the item fully
    /// into view. Keeps `current` if the item is already visible.
    Nearest {
        /// Scroll offset before the jump.
        current: f64,
    },
}

impl ScrollAlign {
    /// Replace a NaN, infinite or negative `current` offset with a usable one.
    #[must_use]
    pub fn sanitized(self) -> Self {
        match self {
            Self::Nearest { current } => Self::Nearest {
                current: sanitize_offset(current),
            },
            other => other,
        }
    }

    /// Compute the unclamped target offset for an item spanning
    /// `[item_start, item_start + item_size)`.
    pub fn target_offset(&self, item_start: f64, item_size: f64, container_extent: f64) -> f64 {
        let item_end = item_start + item_size;
        match *self {
            Self::Start => item_start,
            Self::End => item_end - container_extent,
            Self::Center => item_start + (item_size - container_extent) / 2.0,
            Self::Nearest { current } => {
                if item_start < current {
                    item_start
                } else if item_end > current + container_extent {
                    // Items larger than the viewport keep their start visible.
                    (item_end - container_extent).min(item_start)
                } else {
                    current
                }
            }
        }
    }
}
