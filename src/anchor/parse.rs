//! Parsing of symbolic anchor strings such as `"top start"`.
//!
//! Parsing happens once, at the boundary. Logical tokens (`start`, `end`) are
//! resolved to physical directions here and nowhere else.

use std::str::FromStr;

use super::descriptor::{AnchorDescriptor, Align, Side};
use crate::model::AnchorParseError;

/// A raw descriptor token before logical-to-physical resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `top`
    Top,
    /// `bottom`
    Bottom,
    /// `start` (left in LTR, right in RTL)
    Start,
    /// `end` (right in LTR, left in RTL)
    End,
    /// `left`
    Left,
    /// `right`
    Right,
    /// `center`
    Center,
}

impl Token {
    /// Block-axis tokens: `top`, `bottom`.
    pub fn is_block(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Inline-axis tokens: `start`, `end`, `left`, `right`.
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Left | Self::Right)
    }

    /// Token that fills in a missing second token.
    ///
    /// Block tokens align to `start`, inline tokens align to `top`, and
    /// `center` stays centered.
    pub fn default_align(self) -> Self {
        if self.is_block() {
            Self::Start
        } else if self.is_inline() {
            Self::Top
        } else {
            Self::Center
        }
    }

    /// Resolve `start`/`end` for the text direction. Other tokens are unchanged.
    pub fn to_physical(self, is_rtl: bool) -> Self {
        match (self, is_rtl) {
            (Self::Start, false) | (Self::End, true) => Self::Left,
            (Self::Start, true) | (Self::End, false) => Self::Right,
            (other, _) => other,
        }
    }

    /// Physical side for an already-resolved token.
    fn physical_side(self) -> Side {
        match self {
            Self::Top => Side::Top,
            Self::Bottom => Side::Bottom,
            Self::Left | Self::Start => Side::Left,
            Self::Right | Self::End => Side::Right,
            Self::Center => Side::Center,
        }
    }
}

impl FromStr for Token {
    type Err = AnchorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            other => Err(AnchorParseError::UnknownToken {
                token: other.to_string(),
            }),
        }
    }
}

/// Parse a one- or two-token anchor descriptor into physical directions.
///
/// Tokens are separated by whitespace. A missing second token defaults
/// according to [`Token::default_align`]; then `start`/`end` are resolved for
/// `is_rtl` on both tokens.
///
/// # Errors
///
/// - [`AnchorParseError::Empty`] for an empty or blank string
/// - [`AnchorParseError::TooManyTokens`] for more than two tokens
/// - [`AnchorParseError::UnknownToken`] for anything outside
///   `top bottom start end left right center`
///
/// # Examples
///
/// ```
/// # use scrollkit::anchor::{parse_anchor, Align, Side};
/// let anchor = parse_anchor("top", false).unwrap();
/// assert_eq!((anchor.side, anchor.align), (Side::Top, Align::Left));
///
/// let anchor = parse_anchor("start", true).unwrap();
/// assert_eq!((anchor.side, anchor.align), (Side::Right, Align::Top));
///
/// assert!(parse_anchor("top start end", false).is_err());
/// ```
pub fn parse_anchor(descriptor: &str, is_rtl: bool) -> Result<AnchorDescriptor, AnchorParseError> {
    let raw: Vec<&str> = descriptor.split_whitespace().collect();
    let (side, align) = match raw.as_slice() {
        [] => return Err(AnchorParseError::Empty),
        [side] => {
            let side: Token = side.parse()?;
            (side, side.default_align())
        }
        [side, align] => (side.parse::<Token>()?, align.parse::<Token>()?),
        _ => {
            return Err(AnchorParseError::TooManyTokens {
                descriptor: descriptor.to_string(),
                count: raw.len(),
            })
        }
    };

    let side = side.to_physical(is_rtl).physical_side();
    let align = Align::from(align.to_physical(is_rtl).physical_side());
    Ok(AnchorDescriptor { side, align })
}

impl FromStr for AnchorDescriptor {
    type Err = AnchorParseError;

    /// Parse with left-to-right resolution.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_anchor(s, false)
    }
}
