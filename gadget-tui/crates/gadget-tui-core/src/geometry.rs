//! Geometry types for gadget placement and clipping.
//!
//! This module provides the integer primitives the region algebra is built on:
//! - [`Point`]: A 2D point with signed coordinates
//! - [`Size`]: A 2D size with unsigned dimensions
//! - [`Rect`]: An axis-aligned rectangle stored by its four edges
//!
//! Coordinates are measured in character cells. `(0, 0)` is the top-left corner of
//! the screen, x grows to the right and y grows downward. Right and bottom edges are
//! exclusive.

use std::ops::{Add, AddAssign, Range, Sub, SubAssign};

use crate::error::{GeometryError, GeometryResult};

/// A 2D point with signed integer coordinates.
///
/// Points can have negative coordinates to represent positions relative to
/// a parent gadget that has been scrolled or moved partially off screen.
///
/// # Examples
///
/// ```
/// use gadget_tui_core::geometry::Point;
///
/// let p1 = Point::new(10, 20);
/// let p2 = Point::new(5, 5);
///
/// assert_eq!(p1 + p2, Point::new(15, 25));
/// assert_eq!(p1 - p2, Point::new(5, 15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The x coordinate (column position).
    pub x: i32,
    /// The y coordinate (row position).
    pub y: i32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point offset by the given amounts.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A 2D size with unsigned dimensions.
///
/// Width represents columns and height represents rows.
///
/// # Examples
///
/// ```
/// use gadget_tui_core::geometry::Size;
///
/// let size = Size::new(80, 24);
/// assert_eq!(size.area(), 1920);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// The width in columns.
    pub width: u16,
    /// The height in rows.
    pub height: u16,
}

impl Size {
    /// A zero-sized area.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a new size with the given dimensions.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns the total area (width × height).
    #[inline]
    pub const fn area(self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Returns whether either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u16, u16)> for Size {
    #[inline]
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}

impl From<Size> for (u16, u16) {
    #[inline]
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// An axis-aligned rectangle stored by its edges.
///
/// `top` and `left` are inclusive, `bottom` and `right` are exclusive, so a
/// rectangle with `top == bottom` or `left == right` is empty. Rectangles are
/// plain values: they are derived from a gadget's position and size whenever
/// needed and never stored separately.
///
/// ```text
/// (left, top) ──────► x
///   │
///   │       (right, bottom)
///   ▼
///   y
/// ```
///
/// # Examples
///
/// ```
/// use gadget_tui_core::geometry::{Point, Rect, Size};
///
/// let rect = Rect::from_pos_size(Point::new(10, 20), Size::new(80, 24));
/// assert_eq!(rect, Rect::new(20, 44, 10, 90));
/// assert!(rect.contains_point(Point::new(50, 30)));
/// assert!(!rect.contains_point(Point::new(90, 30)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// The y coordinate of the top edge (inclusive).
    pub top: i32,
    /// The y coordinate of the bottom edge (exclusive).
    pub bottom: i32,
    /// The x coordinate of the left edge (inclusive).
    pub left: i32,
    /// The x coordinate of the right edge (exclusive).
    pub right: i32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self {
        top: 0,
        bottom: 0,
        left: 0,
        right: 0,
    };

    /// Creates a new rectangle from its edges.
    ///
    /// The edges must satisfy `top <= bottom` and `left <= right`; use
    /// [`Rect::try_new`] for unchecked input.
    #[inline]
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        debug_assert!(top <= bottom && left <= right);
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Creates a new rectangle, validating its edges.
    pub fn try_new(top: i32, bottom: i32, left: i32, right: i32) -> GeometryResult<Self> {
        if top > bottom || left > right {
            return Err(GeometryError::InvalidEdges {
                top,
                bottom,
                left,
                right,
            });
        }
        Ok(Self::new(top, bottom, left, right))
    }

    /// Creates a rectangle from a position (top-left corner) and size.
    #[inline]
    pub const fn from_pos_size(pos: Point, size: Size) -> Self {
        Self {
            top: pos.y,
            bottom: pos.y.saturating_add(size.height as i32),
            left: pos.x,
            right: pos.x.saturating_add(size.width as i32),
        }
    }

    /// Creates a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::from_pos_size(Point::ZERO, size)
    }

    /// Returns the top-left corner.
    #[inline]
    pub const fn position(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the number of columns covered.
    #[inline]
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    /// Returns the number of rows covered.
    #[inline]
    pub const fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Returns the number of cells covered.
    #[inline]
    pub const fn area(self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Returns whether the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.top >= self.bottom || self.left >= self.right
    }

    /// Returns whether the rectangle contains the given point.
    #[inline]
    pub const fn contains_point(self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Returns whether this rectangle completely contains another rectangle.
    #[inline]
    pub const fn contains_rect(self, other: Self) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles do not overlap.
    #[inline]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let top = self.top.max(other.top);
        let bottom = self.bottom.min(other.bottom);
        let left = self.left.max(other.left);
        let right = self.right.min(other.right);

        if top < bottom && left < right {
            Some(Self::new(top, bottom, left, right))
        } else {
            None
        }
    }

    /// Returns the rectangle moved by the given offset.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            top: self.top.saturating_add(dy),
            bottom: self.bottom.saturating_add(dy),
            left: self.left.saturating_add(dx),
            right: self.right.saturating_add(dx),
        }
    }

    /// Returns the rectangle moved up by `point.y` and left by `point.x`.
    ///
    /// This converts a rectangle in absolute coordinates into the local
    /// coordinates of a gadget whose origin is `point`.
    #[inline]
    pub const fn offset(self, point: Point) -> Self {
        self.translate(-point.x, -point.y)
    }

    /// Returns the `(rows, columns)` ranges of the rectangle, moved up and left
    /// by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gadget_tui_core::geometry::{Point, Rect};
    ///
    /// let rect = Rect::new(5, 8, 10, 14);
    /// assert_eq!(rect.to_ranges(Point::new(10, 5)), (0..3, 0..4));
    /// ```
    #[inline]
    pub const fn to_ranges(self, offset: Point) -> (Range<i32>, Range<i32>) {
        (
            (self.top - offset.y)..(self.bottom - offset.y),
            (self.left - offset.x)..(self.right - offset.x),
        )
    }

    /// Returns an iterator over all points in the rectangle, row by row.
    #[inline]
    pub fn points(self) -> impl Iterator<Item = Point> {
        let Self {
            top,
            bottom,
            left,
            right,
        } = self;
        (top..bottom).flat_map(move |y| (left..right).map(move |x| Point::new(x, y)))
    }
}

impl From<Size> for Rect {
    #[inline]
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod point_tests {
        use super::*;

        #[test]
        fn test_point_offset() {
            let p = Point::new(10, 20);
            assert_eq!(p.offset(5, -5), Point::new(15, 15));
        }

        #[test]
        fn test_point_add_sub() {
            let p = Point::new(10, 20) + Point::new(1, 2);
            assert_eq!(p, Point::new(11, 22));
            assert_eq!(p - Point::new(11, 22), Point::ZERO);
        }
    }

    mod size_tests {
        use super::*;

        #[test]
        fn test_size_area() {
            assert_eq!(Size::new(80, 24).area(), 1920);
        }

        #[test]
        fn test_size_is_empty() {
            assert!(Size::ZERO.is_empty());
            assert!(Size::new(0, 10).is_empty());
            assert!(!Size::new(1, 1).is_empty());
        }
    }

    mod rect_tests {
        use super::*;

        #[test]
        fn test_rect_from_pos_size() {
            let r = Rect::from_pos_size(Point::new(2, 3), Size::new(4, 5));
            assert_eq!(r, Rect::new(3, 8, 2, 6));
            assert_eq!(r.width(), 4);
            assert_eq!(r.height(), 5);
            assert_eq!(r.area(), 20);
            assert_eq!(r.position(), Point::new(2, 3));
        }

        #[test]
        fn test_rect_try_new() {
            assert!(Rect::try_new(0, 1, 0, 1).is_ok());
            assert_eq!(
                Rect::try_new(5, 1, 0, 1),
                Err(GeometryError::InvalidEdges {
                    top: 5,
                    bottom: 1,
                    left: 0,
                    right: 1
                })
            );
        }

        #[test]
        fn test_rect_is_empty() {
            assert!(Rect::ZERO.is_empty());
            assert!(Rect::new(0, 0, 0, 10).is_empty());
            assert!(!Rect::new(0, 1, 0, 1).is_empty());
        }

        #[test]
        fn test_rect_contains_point() {
            let r = Rect::new(20, 44, 10, 90);
            assert!(r.contains_point(Point::new(10, 20))); // top-left
            assert!(r.contains_point(Point::new(50, 30))); // center
            assert!(!r.contains_point(Point::new(90, 20))); // right edge (exclusive)
            assert!(!r.contains_point(Point::new(10, 44))); // bottom edge (exclusive)
            assert!(!r.contains_point(Point::new(5, 30))); // outside left
        }

        #[test]
        fn test_rect_contains_rect() {
            let outer = Rect::new(0, 100, 0, 100);
            let inner = Rect::new(10, 60, 10, 60);
            assert!(outer.contains_rect(inner));
            assert!(!inner.contains_rect(outer));
        }

        #[test]
        fn test_rect_intersection() {
            let r1 = Rect::new(0, 50, 0, 50);
            let r2 = Rect::new(25, 75, 25, 75);
            assert_eq!(r1.intersection(r2), Some(Rect::new(25, 50, 25, 50)));

            let r3 = Rect::new(50, 60, 0, 50);
            assert_eq!(r1.intersection(r3), None);
        }

        #[test]
        fn test_rect_offset_and_translate() {
            let r = Rect::new(5, 10, 20, 30);
            assert_eq!(r.translate(1, 2), Rect::new(7, 12, 21, 31));
            assert_eq!(r.offset(Point::new(20, 5)), Rect::new(0, 5, 0, 10));
        }

        #[test]
        fn test_rect_to_ranges() {
            let r = Rect::new(5, 10, 20, 30);
            assert_eq!(r.to_ranges(Point::ZERO), (5..10, 20..30));
            assert_eq!(r.to_ranges(Point::new(20, 5)), (0..5, 0..10));
        }

        #[test]
        fn test_rect_points_iterator() {
            let r = Rect::new(0, 2, 0, 3);
            let points: Vec<Point> = r.points().collect();
            assert_eq!(
                points,
                vec![
                    Point::new(0, 0),
                    Point::new(1, 0),
                    Point::new(2, 0),
                    Point::new(0, 1),
                    Point::new(1, 1),
                    Point::new(2, 1),
                ]
            );
        }
    }
}
