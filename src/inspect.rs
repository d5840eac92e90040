//! Inspection commands behind the `scrollkit` binary.
//!
//! Each command builds an engine from plain inputs, runs one query and renders
//! the result as text or JSON. Rendering returns a `String` so the binary only
//! prints and tests can snapshot the output directly.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::anchor::{
    flip_align, flip_corner, flip_side, get_axis, get_overflow, parse_anchor, shift_into,
    AnchorDescriptor, Axis, Overflow,
};
use crate::model::{AppError, Rect};
use crate::virtual_list::{ScrollAlign, Viewport, VirtualList};

/// Output rendering for inspection reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Line-oriented `key value` text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// `Json` when `json` is set, `Text` otherwise.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Malformed command-line values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Expected `X,Y,W,H` with four numbers.
    #[error("invalid rectangle '{0}' (expected X,Y,W,H)")]
    InvalidRect(String),

    /// Expected `INDEX=SIZE`.
    #[error("invalid measurement '{0}' (expected INDEX=SIZE)")]
    InvalidMeasurement(String),
}

/// Parse a rectangle written as `X,Y,W,H`.
pub fn parse_rect(input: &str) -> Result<Rect, InputError> {
    let values: Vec<f64> = input
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| InputError::InvalidRect(input.to_string()))?;

    match values.as_slice() {
        [x, y, width, height] => Ok(Rect::new(*x, *y, *width, *height)),
        _ => Err(InputError::InvalidRect(input.to_string())),
    }
}

/// One `INDEX=SIZE` measurement given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Measured item.
    pub index: usize,
    /// Its rendered size.
    pub size: f64,
}

impl FromStr for Measurement {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidMeasurement(s.to_string());
        let (index, size) = s.split_once('=').ok_or_else(invalid)?;
        Ok(Self {
            index: index.trim().parse().map_err(|_| invalid())?,
            size: size.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Inputs for the `window` command.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowQuery {
    /// Item count.
    pub items: usize,
    /// Size of unmeasured items.
    pub item_size: f64,
    /// Viewport to compute the window for.
    pub viewport: Viewport,
    /// Extra items on each side.
    pub overscan: usize,
    /// Measurements applied before computing.
    pub measurements: Vec<Measurement>,
}

/// Inputs for the `scroll-to` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollQuery {
    /// Item count.
    pub items: usize,
    /// Size of every item.
    pub item_size: f64,
    /// Target item.
    pub index: usize,
    /// Where the item should land.
    pub align: ScrollAlign,
    /// Container extent; without it the raw item offset is reported.
    pub extent: Option<f64>,
}

#[derive(Debug, Serialize)]
struct WindowReport {
    start: i64,
    end: i64,
    rendered: usize,
    padding_before: f64,
    padding_after: f64,
    total_size: f64,
    scroll_offset: f64,
}

#[derive(Debug, Serialize)]
struct ScrollReport {
    index: usize,
    offset: f64,
}

#[derive(Debug, Serialize)]
struct AnchorReport {
    anchor: AnchorDescriptor,
    rtl: bool,
    axis: Axis,
    flip_side: AnchorDescriptor,
    flip_align: AnchorDescriptor,
    flip_corner: AnchorDescriptor,
}

#[derive(Debug, Serialize)]
struct OverflowReport {
    floating: Rect,
    boundary: Rect,
    overflow: Overflow,
    contained: bool,
    shifted: Rect,
}

fn to_json<T: Serialize>(report: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Compute a render window.
///
/// # Errors
///
/// Fails on an invalid item size or a measurement the engine rejects.
pub fn window(query: &WindowQuery, format: OutputFormat) -> Result<String, AppError> {
    let mut list = VirtualList::new(query.items, query.item_size)?.with_overscan(query.overscan);
    for measurement in &query.measurements {
        list.report_measured_size(measurement.index, measurement.size)?;
    }

    let window = list.compute_window(query.viewport);
    let (start, end) = window.host_indices();
    let report = WindowReport {
        start,
        end,
        rendered: window.len(),
        padding_before: window.padding_before(),
        padding_after: window.padding_after(),
        total_size: list.total_size(),
        scroll_offset: list.clamp_viewport(query.viewport).scroll_offset,
    };
    debug!(?report, "window inspected");

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Text => {
            let mut out = String::new();
            if window.is_empty() {
                out.push_str("window empty\n");
            } else {
                let _ = writeln!(out, "window {start}..={end} ({} items)", report.rendered);
            }
            let _ = writeln!(out, "padding_before {}", report.padding_before);
            let _ = writeln!(out, "padding_after {}", report.padding_after);
            let _ = writeln!(out, "total_size {}", report.total_size);
            let _ = write!(out, "scroll_offset {}", report.scroll_offset);
            Ok(out)
        }
    }
}

/// Compute the scroll offset for an item.
///
/// # Errors
///
/// Fails on an invalid item size.
pub fn scroll_to(query: &ScrollQuery, format: OutputFormat) -> Result<String, AppError> {
    let mut list = VirtualList::new(query.items, query.item_size)?;
    let offset = match query.extent {
        Some(extent) => list.scroll_to_index_aligned(query.index, query.align, extent),
        None => list.scroll_to_index(query.index),
    };
    let report = ScrollReport {
        index: query.index.min(query.items.saturating_sub(1)),
        offset,
    };
    debug!(?report, "scroll target inspected");

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Text => Ok(format!("index {}\noffset {}", report.index, report.offset)),
    }
}

/// Parse an anchor and list its flip candidates.
///
/// # Errors
///
/// Fails if the descriptor does not parse.
pub fn anchor(descriptor: &str, rtl: bool, format: OutputFormat) -> Result<String, AppError> {
    let anchor = parse_anchor(descriptor, rtl)?;
    let report = AnchorReport {
        anchor,
        rtl,
        axis: get_axis(anchor),
        flip_side: flip_side(anchor),
        flip_align: flip_align(anchor),
        flip_corner: flip_corner(anchor),
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Text => Ok(format!(
            "anchor {}\naxis {}\nflip_side {}\nflip_align {}\nflip_corner {}",
            report.anchor, report.axis, report.flip_side, report.flip_align, report.flip_corner
        )),
    }
}

/// Measure how far `floating` escapes `boundary` and where shifting it back
/// inside would put it.
///
/// # Errors
///
/// Only fails if JSON serialization fails.
pub fn overflow(floating: Rect, boundary: Rect, format: OutputFormat) -> Result<String, AppError> {
    let overflow = get_overflow(floating, boundary);
    let report = OverflowReport {
        floating,
        boundary,
        overflow,
        contained: overflow.is_contained(),
        shifted: shift_into(floating, boundary),
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Text => Ok(format!(
            "x before {} after {}\ny before {} after {}\ncontained {}\nshifted {},{},{},{}",
            overflow.x.before,
            overflow.x.after,
            overflow.y.before,
            overflow.y.after,
            report.contained,
            report.shifted.x,
            report.shifted.y,
            report.shifted.width,
            report.shifted.height
        )),
    }
}
