//! Viewport snapshot supplied by the host on scroll or resize.

/// Scroll position and visible extent of the scroll container.
///
/// Not owned by the engine: the host passes a fresh snapshot on every call.
/// Values are in the same 1D coordinate space as item sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Distance scrolled from the start of the content.
    pub scroll_offset: f64,
    /// Visible extent of the container along the scroll axis.
    pub container_extent: f64,
}

impl Viewport {
    /// Create a new viewport snapshot.
    pub fn new(scroll_offset: f64, container_extent: f64) -> Self {
        Self {
            scroll_offset,
            container_extent,
        }
    }

    /// Returns true if both values are finite.
    pub fn is_finite(&self) -> bool {
        self.scroll_offset.is_finite() && self.container_extent.is_finite()
    }

    /// Replace unusable values: NaN and negative values become zero, and an
    /// unbounded (`+inf`) extent becomes `f64::MAX` so everything is visible.
    ///
    /// Negative offsets occur during elastic (bounce) scrolling and are
    /// expected; they are clamped, never rejected.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let container_extent = if self.container_extent == f64::INFINITY {
            f64::MAX
        } else {
            sanitize_offset(self.container_extent)
        };
        Self {
            scroll_offset: sanitize_offset(self.scroll_offset),
            container_extent,
        }
    }
}

/// Clamp a scroll offset to a finite, non-negative value.
pub(crate) fn sanitize_offset(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
