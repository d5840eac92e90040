//! Resolved, physical anchor descriptors.

use std::fmt;

use serde::Serialize;

/// Side of the activator the floating element is placed on.
///
/// Always a physical direction: logical `start`/`end` are resolved during
/// parsing and never reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Above the activator.
    Top,
    /// Below the activator.
    Bottom,
    /// Left of the activator.
    Left,
    /// Right of the activator.
    Right,
    /// Centered over the activator.
    Center,
}

/// Alignment of the floating element along the chosen side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Aligned to the left edge.
    Left,
    /// Aligned to the right edge.
    Right,
    /// Aligned to the top edge.
    Top,
    /// Aligned to the bottom edge.
    Bottom,
    /// Centered.
    Center,
}

impl Side {
    /// The opposite side; `Center` maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center => Self::Center,
        }
    }

    /// Lowercase name as used in descriptor strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl Align {
    /// The opposite alignment; `Center` maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center => Self::Center,
        }
    }

    /// Lowercase name as used in descriptor strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl From<Align> for Side {
    fn from(align: Align) -> Self {
        match align {
            Align::Top => Self::Top,
            Align::Bottom => Self::Bottom,
            Align::Left => Self::Left,
            Align::Right => Self::Right,
            Align::Center => Self::Center,
        }
    }
}

impl From<Side> for Align {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::Top,
            Side::Bottom => Self::Bottom,
            Side::Left => Self::Left,
            Side::Right => Self::Right,
            Side::Center => Self::Center,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overflow axis relevant to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// A parsed anchor: which side of the activator, aligned how.
///
/// Displays as `"<side> <align>"`, e.g. `"top left"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AnchorDescriptor {
    /// Physical side.
    pub side: Side,
    /// Physical alignment.
    pub align: Align,
}

impl AnchorDescriptor {
    /// Create a descriptor from already-physical parts.
    pub fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }
}

impl fmt::Display for AnchorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.align)
    }
}

/// Overflow axis that matters when deciding whether to flip `anchor`.
///
/// `Y` for anchors on the top or bottom side, `X` otherwise.
pub fn get_axis(anchor: AnchorDescriptor) -> Axis {
    match anchor.side {
        Side::Top | Side::Bottom => Axis::Y,
        Side::Left | Side::Right | Side::Center => Axis::X,
    }
}
