//! Domain model shared by the virtual list and anchor engines.
//!
//! - `error`: error taxonomy (contract violations and binary-level failures)
//! - `geometry`: `Rect` and `Point` value types
//! - `identifiers`: `ItemIndex` newtype

pub mod error;
pub mod geometry;
pub mod identifiers;

pub use error::{AnchorParseError, AppError, VirtualListError};
pub use geometry::{Point, Rect};
pub use identifiers::ItemIndex;
