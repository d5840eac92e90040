//! scrollkit
//!
//! Headless layout engines for UI hosts:
//!
//! - [`virtual_list`]: renders only the visible slice of a large, variably
//!   sized list and reports the spacer sizes that stand in for the rest
//! - [`anchor`]: parses symbolic anchors for floating elements, measures
//!   boundary overflow and produces flipped placements
//!
//! Both engines are pure computation over host-supplied numbers. The host owns
//! measurement, scrolling and rendering.

pub mod anchor;
pub mod config;
pub mod inspect;
pub mod logging;
pub mod model;
pub mod virtual_list;
