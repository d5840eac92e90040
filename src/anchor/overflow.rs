//! Overflow measurement and anchor points.

use serde::Serialize;

use super::descriptor::{AnchorDescriptor, Align, Axis, Side};
use crate::model::{Point, Rect};

/// How far a floating rectangle escapes its boundary on one axis.
///
/// Both amounts are non-negative; zero means no escape on that end.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AxisOverflow {
    /// Escape past the low edge (left or top).
    pub before: f64,
    /// Escape past the high edge (right or bottom).
    pub after: f64,
}

impl AxisOverflow {
    /// Combined escape on both ends.
    pub fn total(&self) -> f64 {
        self.before + self.after
    }

    /// Distance to move along the axis to undo the escape.
    ///
    /// When both ends escape the low edge wins, so the start stays visible.
    pub fn correction(&self) -> f64 {
        if self.before > 0.0 {
            self.before
        } else {
            -self.after
        }
    }
}

/// Overflow of a floating rectangle on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Overflow {
    /// Horizontal overflow.
    pub x: AxisOverflow,
    /// Vertical overflow.
    pub y: AxisOverflow,
}

impl Overflow {
    /// Overflow on `axis`.
    pub fn axis(&self, axis: Axis) -> AxisOverflow {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// True when nothing escapes on either axis.
    pub fn is_contained(&self) -> bool {
        self.x.total() == 0.0 && self.y.total() == 0.0
    }
}

/// Measure how far `floating` escapes `boundary` on each axis.
///
/// Negative distances are clamped to zero, so a fully contained rectangle
/// reports all zeros. Zero-area rectangles follow the same edge arithmetic.
///
/// # Examples
///
/// ```
/// # use scrollkit::anchor::get_overflow;
/// # use scrollkit::model::Rect;
/// let boundary = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let floating = Rect::new(-10.0, 90.0, 20.0, 20.0);
/// let overflow = get_overflow(floating, boundary);
/// assert_eq!(overflow.x.before, 10.0);
/// assert_eq!(overflow.y.after, 10.0);
/// ```
pub fn get_overflow(floating: Rect, boundary: Rect) -> Overflow {
    Overflow {
        x: AxisOverflow {
            before: (boundary.left() - floating.left()).max(0.0),
            after: (floating.right() - boundary.right()).max(0.0),
        },
        y: AxisOverflow {
            before: (boundary.top() - floating.top()).max(0.0),
            after: (floating.bottom() - boundary.bottom()).max(0.0),
        },
    }
}

/// Move `floating` the shortest distance that brings it back inside
/// `boundary`.
///
/// A rectangle larger than the boundary on an axis is aligned to the
/// boundary's low edge on that axis.
///
/// # Examples
///
/// ```
/// # use scrollkit::anchor::shift_into;
/// # use scrollkit::model::Rect;
/// let boundary = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let shifted = shift_into(Rect::new(-10.0, 90.0, 20.0, 20.0), boundary);
/// assert_eq!(shifted, Rect::new(0.0, 80.0, 20.0, 20.0));
/// assert!(boundary.contains_rect(&shifted));
/// ```
pub fn shift_into(floating: Rect, boundary: Rect) -> Rect {
    let overflow = get_overflow(floating, boundary);
    floating.translate(overflow.x.correction(), overflow.y.correction())
}

/// Point on `rect` that `anchor` refers to.
///
/// The side picks an edge (or the center), the alignment picks a position
/// along that edge.
pub fn anchor_point(anchor: AnchorDescriptor, rect: Rect) -> Point {
    let center_x = rect.x + rect.width / 2.0;
    let center_y = rect.y + rect.height / 2.0;

    let x_for = |align: Align| match align {
        Align::Left => rect.left(),
        Align::Right => rect.right(),
        Align::Top | Align::Bottom | Align::Center => center_x,
    };
    let y_for = |align: Align| match align {
        Align::Top => rect.top(),
        Align::Bottom => rect.bottom(),
        Align::Left | Align::Right | Align::Center => center_y,
    };

    match anchor.side {
        Side::Top => Point::new(x_for(anchor.align), rect.top()),
        Side::Bottom => Point::new(x_for(anchor.align), rect.bottom()),
        Side::Left => Point::new(rect.left(), y_for(anchor.align)),
        Side::Right => Point::new(rect.right(), y_for(anchor.align)),
        Side::Center => Point::new(x_for(anchor.align), y_for(anchor.align)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    mod get_overflow {
        use super::*;

        #[test]
        fn contained_rect_has_no_overflow() {
            let overflow = get_overflow(Rect::new(10.0, 10.0, 50.0, 50.0), boundary());
            assert_eq!(overflow, Overflow::default());
            assert!(overflow.is_contained());
        }

        #[test]
        fn escaping_on_each_edge_is_reported() {
            let overflow = get_overflow(Rect::new(-5.0, -7.0, 120.0, 130.0), boundary());
            assert_eq!(overflow.x, AxisOverflow { before: 5.0, after: 15.0 });
            assert_eq!(overflow.y, AxisOverflow { before: 7.0, after: 23.0 });
            assert_eq!(overflow.x.total(), 20.0);
            assert!(!overflow.is_contained());
        }

        #[test]
        fn touching_edges_is_not_overflow() {
            let overflow = get_overflow(boundary(), boundary());
            assert!(overflow.is_contained());
        }

        #[test]
        fn zero_area_rect_uses_edges() {
            let overflow = get_overflow(Rect::new(150.0, 50.0, 0.0, 0.0), boundary());
            assert_eq!(overflow.x.after, 50.0);
            assert_eq!(overflow.x.before, 0.0);
            assert!(overflow.y.total() == 0.0);
        }

        #[test]
        fn axis_selects_component() {
            let overflow = get_overflow(Rect::new(0.0, 90.0, 10.0, 20.0), boundary());
            assert_eq!(overflow.axis(Axis::Y).after, 10.0);
            assert_eq!(overflow.axis(Axis::X).total(), 0.0);
        }
    }

    mod shift_into {
        use super::*;

        #[test]
        fn contained_rect_stays_put() {
            let rect = Rect::new(10.0, 10.0, 50.0, 50.0);
            assert_eq!(shift_into(rect, boundary()), rect);
        }

        #[test]
        fn escaping_rect_moves_back_inside() {
            let shifted = shift_into(Rect::new(95.0, -20.0, 10.0, 30.0), boundary());
            assert_eq!(shifted, Rect::new(90.0, 0.0, 10.0, 30.0));
            assert!(boundary().contains_rect(&shifted));
        }

        #[test]
        fn oversized_rect_aligns_to_low_edge() {
            let shifted = shift_into(Rect::new(-30.0, 20.0, 150.0, 10.0), boundary());
            assert_eq!(shifted, Rect::new(0.0, 20.0, 150.0, 10.0));
            assert_eq!(get_overflow(shifted, boundary()).x.after, 50.0);
        }
    }

    mod anchor_point {
        use super::*;

        fn rect() -> Rect {
            Rect::new(10.0, 20.0, 100.0, 40.0)
        }

        #[test]
        fn top_left_is_the_corner() {
            let point = anchor_point(AnchorDescriptor::new(Side::Top, Align::Left), rect());
            assert_eq!(point, Point::new(10.0, 20.0));
        }

        #[test]
        fn bottom_center_is_bottom_midpoint() {
            let point = anchor_point(AnchorDescriptor::new(Side::Bottom, Align::Center), rect());
            assert_eq!(point, Point::new(60.0, 60.0));
        }

        #[test]
        fn right_bottom_is_the_corner() {
            let point = anchor_point(AnchorDescriptor::new(Side::Right, Align::Bottom), rect());
            assert_eq!(point, Point::new(110.0, 60.0));
        }

        #[test]
        fn center_center_is_the_middle() {
            let point = anchor_point(AnchorDescriptor::new(Side::Center, Align::Center), rect());
            assert_eq!(point, Point::new(60.0, 40.0));
        }
    }
}
