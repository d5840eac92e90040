//! Anchor / overflow geometry for floating elements
//!
//! Stateless helpers for positioning a floating element (menu, tooltip)
//! relative to an activator and recovering when it escapes its boundary.
//!
//! # Module Structure
//!
//! - `descriptor`: Side, Align, AnchorDescriptor, Axis, get_axis
//! - `parse`: Token, parse_anchor - descriptor strings to physical anchors
//! - `flip`: flip_side, flip_align, flip_corner
//! - `overflow`: Overflow, get_overflow, shift_into, anchor_point

pub mod descriptor;
pub mod flip;
pub mod overflow;
pub mod parse;

pub use descriptor::{get_axis, Align, AnchorDescriptor, Axis, Side};
pub use flip::{flip_align, flip_corner, flip_side};
pub use overflow::{anchor_point, get_overflow, shift_into, AxisOverflow, Overflow};
pub use parse::{parse_anchor, Token};
