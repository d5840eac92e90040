//! Error types for scrollkit.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`VirtualListError`] - Contract violations against the virtual list engine
//!   (measuring an index that does not exist, reporting a non-positive size)
//! - [`AnchorParseError`] - Malformed anchor descriptor strings
//! - [`AppError`] - Top-level error of the inspection binary, wrapping the above
//!   together with configuration, logging and I/O failures
//!
//! # What is *not* an error
//!
//! Out-of-range input that is expected during normal operation is clamped, never
//! rejected: negative scroll offsets from elastic scrolling, offsets past the end
//! of the content, viewports with a zero extent, and empty item collections all
//! produce well-defined results. Only caller bugs surface here.

use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level error of the `scrollkit` binary.
///
/// All domain-specific errors convert into `AppError` via `From`. `main`
/// returns it, so every failure in the binary propagates with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// A virtual list operation was called with invalid arguments.
    #[error("Virtual list error: {0}")]
    VirtualList(#[from] VirtualListError),

    /// An anchor descriptor could not be parsed.
    #[error("Anchor error: {0}")]
    Anchor(#[from] AnchorParseError),

    /// A report could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Contract violations against the virtual list engine.
///
/// Every variant indicates a bug in the host: it measured an item that does
/// not exist, or reported a size that cannot be a rendered extent. These are
/// never absorbed silently.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VirtualListError {
    /// The index is not within `0..len`.
    #[error("index {index} out of bounds (len: {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of items the engine is bound to.
        len: usize,
    },

    /// A measured size was not finite, not strictly positive, or above
    /// [`MAX_ITEM_SIZE`](crate::virtual_list::MAX_ITEM_SIZE).
    #[error("invalid measured size {size} for index {index} (must be finite, > 0 and <= 1e12)")]
    InvalidSize {
        /// Index the measurement was reported for.
        index: usize,
        /// The rejected size.
        size: f64,
    },

    /// The default item size was outside `(0, MAX_ITEM_SIZE]`.
    #[error("invalid default item size {0} (must be finite, > 0 and <= 1e12)")]
    InvalidDefaultSize(f64),
}

/// Errors produced when parsing an anchor descriptor such as `"top start"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorParseError {
    /// The descriptor contained no tokens.
    #[error("anchor descriptor is empty")]
    Empty,

    /// The descriptor contained more than two tokens.
    #[error("anchor descriptor '{descriptor}' has {count} tokens (expected 1 or 2)")]
    TooManyTokens {
        /// The full descriptor as given.
        descriptor: String,
        /// Number of whitespace-separated tokens found.
        count: usize,
    },

    /// A token is not one of `top`, `bottom`, `start`, `end`, `left`, `right`, `center`.
    #[error("unknown anchor token '{token}'")]
    UnknownToken {
        /// The rejected token.
        token: String,
    },
}
