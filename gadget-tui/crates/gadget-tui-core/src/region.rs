//! Band-based 2D regions.
//!
//! A [`Region`] is an arbitrary set of cells represented as a sorted list of
//! horizontal [`Band`]s. Each band covers the rows `[y1, y2)` and carries a list of
//! *walls*: x coordinates where the region is entered and left. Walls come in pairs,
//! so `[0, 2, 6, 10]` means "columns `0..2` and `6..10`".
//!
//! Regions are always kept minimal: bands never overlap, empty bands are dropped and
//! vertically adjacent bands with identical walls are merged. Two regions covering
//! the same cells therefore compare equal.
//!
//! # Examples
//!
//! ```
//! use gadget_tui_core::geometry::{Point, Rect, Size};
//! use gadget_tui_core::region::Region;
//!
//! let square = Region::from_pos_size(Point::new(0, 0), Size::new(10, 10));
//! let hole = Region::from_pos_size(Point::new(2, 2), Size::new(4, 4));
//! let frame = &square - &hole;
//!
//! assert_eq!(frame.bands().len(), 3);
//! assert!(frame.contains(Point::new(1, 1)));
//! assert!(!frame.contains(Point::new(3, 3)));
//! assert_eq!(frame.bbox(), Some(Rect::new(0, 10, 0, 10)));
//! assert_eq!(frame.rects().count(), 4);
//! ```

use std::iter::FusedIterator;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub,
    SubAssign,
};

use smallvec::SmallVec;

use crate::error::{RegionError, RegionResult};
use crate::geometry::{Point, Rect, Size};

/// Wall coordinates of a band. Most bands hold a single interval.
pub type Walls = SmallVec<[i32; 4]>;

/// The boolean combinator applied by the region scanline merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOp {
    /// Intersection: inside both.
    And,
    /// Union: inside either.
    Or,
    /// Difference: inside the left operand but not the right.
    Sub,
    /// Symmetric difference: inside exactly one.
    Xor,
}

impl SetOp {
    /// Returns whether a point inside `a` and/or `b` is inside the result.
    #[inline]
    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Self::And => a && b,
            Self::Or => a || b,
            Self::Sub => a && !b,
            Self::Xor => a != b,
        }
    }
}

/// Merges two sorted wall lists under `op`.
///
/// Sweeps the union of wall coordinates left to right, toggling "inside a" and
/// "inside b", and emits a wall wherever the combined state flips. The output is
/// strictly increasing and has even length, since every operator maps
/// `(false, false)` to `false`.
pub fn merge_walls(op: SetOp, a: &[i32], b: &[i32]) -> Walls {
    let mut walls = Walls::new();
    let (mut i, mut j) = (0, 0);
    let (mut inside_a, mut inside_b, mut inside) = (false, false, false);

    loop {
        let x = match (a.get(i), b.get(j)) {
            (Some(&x), Some(&y)) => x.min(y),
            (Some(&x), None) => x,
            (None, Some(&y)) => y,
            (None, None) => break,
        };

        if a.get(i) == Some(&x) {
            inside_a = !inside_a;
            i += 1;
        }
        if b.get(j) == Some(&x) {
            inside_b = !inside_b;
            j += 1;
        }

        let now = op.apply(inside_a, inside_b);
        if now != inside {
            walls.push(x);
            inside = now;
        }
    }

    walls
}

/// A horizontal strip of a region.
///
/// Covers rows `[y1, y2)`; `walls` alternate between entering and leaving the
/// region from left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Band {
    /// First row of the band.
    pub y1: i32,
    /// Row past the end of the band.
    pub y2: i32,
    /// Sorted wall coordinates (even length).
    pub walls: Walls,
}

impl Band {
    /// Creates a band. Invariants are checked by [`Region::from_bands`].
    pub fn new(y1: i32, y2: i32, walls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            y1,
            y2,
            walls: walls.into_iter().collect(),
        }
    }

    /// Returns the number of rows covered.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Returns the number of columns covered on each row.
    pub fn span(&self) -> i64 {
        self.walls
            .chunks_exact(2)
            .map(|pair| i64::from(pair[1] - pair[0]))
            .sum()
    }

    /// Splits the band at row `y`.
    ///
    /// `self` keeps `[y1, y)` and the returned band covers `[y, y2)` with a copy of
    /// the walls.
    ///
    /// # Panics
    ///
    /// Panics unless `y1 < y < y2`.
    pub fn split(&mut self, y: i32) -> Self {
        assert!(
            self.y1 < y && y < self.y2,
            "split row {y} outside band [{}, {})",
            self.y1,
            self.y2
        );
        let tail = Self {
            y1: y,
            y2: self.y2,
            walls: self.walls.clone(),
        };
        self.y2 = y;
        tail
    }

    /// Divides two bands covering the same rows.
    ///
    /// Afterwards `other` holds `self ∩ other` and `self` holds `self − other`.
    ///
    /// # Panics
    ///
    /// Panics if the bands cover different rows.
    pub fn divmod(&mut self, other: &mut Self) {
        assert!(
            self.y1 == other.y1 && self.y2 == other.y2,
            "divmod of bands with different rows: [{}, {}) and [{}, {})",
            self.y1,
            self.y2,
            other.y1,
            other.y2
        );
        let intersection = merge_walls(SetOp::And, &self.walls, &other.walls);
        let difference = merge_walls(SetOp::Sub, &self.walls, &other.walls);
        other.walls = intersection;
        self.walls = difference;
    }
}

/// A set of cells stored as sorted, disjoint, coalesced bands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Region {
    bands: Vec<Band>,
}

impl Region {
    /// Creates an empty region.
    #[inline]
    pub const fn new() -> Self {
        Self { bands: Vec::new() }
    }

    /// Creates a region covering a rectangle. Empty rectangles give the empty region.
    pub fn from_rect(rect: Rect) -> Self {
        if rect.is_empty() {
            return Self::new();
        }
        Self {
            bands: vec![Band::new(rect.top, rect.bottom, [rect.left, rect.right])],
        }
    }

    /// Creates a region covering the rectangle at `pos` with the given size.
    #[inline]
    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::from_rect(Rect::from_pos_size(pos, size))
    }

    /// Creates a region from raw bands, validating them.
    ///
    /// Bands must be sorted and non-overlapping, each with `y1 < y2` and an even,
    /// strictly increasing wall list. Bands without walls are dropped and
    /// contiguous identical bands are merged.
    pub fn from_bands(bands: Vec<Band>) -> RegionResult<Self> {
        let mut previous_bottom = None;
        for (index, band) in bands.iter().enumerate() {
            if band.y1 >= band.y2 {
                return Err(RegionError::EmptyBand {
                    index,
                    y1: band.y1,
                    y2: band.y2,
                });
            }
            if band.walls.len() % 2 != 0 {
                return Err(RegionError::OddWalls {
                    index,
                    len: band.walls.len(),
                });
            }
            if band.walls.windows(2).any(|w| w[0] >= w[1]) {
                return Err(RegionError::UnsortedWalls { index });
            }
            if previous_bottom.is_some_and(|bottom| band.y1 < bottom) {
                return Err(RegionError::Overlap { index });
            }
            previous_bottom = Some(band.y2);
        }

        let mut region = Self { bands };
        region.coalesce();
        Ok(region)
    }

    /// Returns the bands of the region.
    #[inline]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Returns whether the region covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Returns the number of cells covered.
    pub fn area(&self) -> i64 {
        self.bands
            .iter()
            .map(|band| i64::from(band.height()) * band.span())
            .sum()
    }

    /// Combines two regions with a boolean operator.
    ///
    /// A single scanline walks both band lists top to bottom. Every output band
    /// starts and ends at a boundary of one of the inputs and gets the merged walls
    /// of whichever input bands are active over its rows.
    pub fn combine(&self, other: &Self, op: SetOp) -> Self {
        let (r, s) = (&self.bands, &other.bands);
        let mut out = Self::new();
        let (mut i, mut j) = (0, 0);
        let mut scanline = i32::MIN;

        while i < r.len() && j < s.len() {
            let (a, b) = (&r[i], &s[j]);
            let top = scanline.max(a.y1.min(b.y1));

            let bottom = if top < a.y1 {
                // Only `b` is active.
                let bottom = a.y1.min(b.y2);
                out.push_band(top, bottom, merge_walls(op, &[], &b.walls));
                if bottom == b.y2 {
                    j += 1;
                }
                bottom
            } else if top < b.y1 {
                // Only `a` is active.
                let bottom = b.y1.min(a.y2);
                out.push_band(top, bottom, merge_walls(op, &a.walls, &[]));
                if bottom == a.y2 {
                    i += 1;
                }
                bottom
            } else {
                let bottom = a.y2.min(b.y2);
                out.push_band(top, bottom, merge_walls(op, &a.walls, &b.walls));
                if bottom == a.y2 {
                    i += 1;
                }
                if bottom == b.y2 {
                    j += 1;
                }
                bottom
            };
            scanline = bottom;
        }

        for a in &r[i..] {
            out.push_band(scanline.max(a.y1), a.y2, merge_walls(op, &a.walls, &[]));
        }
        for b in &s[j..] {
            out.push_band(scanline.max(b.y1), b.y2, merge_walls(op, &[], &b.walls));
        }

        out
    }

    /// Appends a band below the existing ones, dropping it if it has no walls and
    /// merging it into the last band if they are contiguous with equal walls.
    fn push_band(&mut self, y1: i32, y2: i32, walls: Walls) {
        if walls.is_empty() {
            return;
        }
        if let Some(last) = self.bands.last_mut() {
            if last.y2 == y1 && last.walls == walls {
                last.y2 = y2;
                return;
            }
        }
        self.bands.push(Band { y1, y2, walls });
    }

    /// Drops empty bands and merges contiguous bands with equal walls.
    pub fn coalesce(&mut self) {
        let bands = std::mem::take(&mut self.bands);
        for band in bands {
            self.push_band(band.y1, band.y2, band.walls);
        }
    }

    /// Splits the bands of both regions so that any two overlapping bands cover
    /// exactly the same rows.
    ///
    /// The covered cells of either region do not change, but the regions are left
    /// uncoalesced.
    pub fn reband(&mut self, other: &mut Self) {
        let (mut i, mut j) = (0, 0);

        while i < self.bands.len() && j < other.bands.len() {
            let (a_y1, a_y2) = (self.bands[i].y1, self.bands[i].y2);
            let (b_y1, b_y2) = (other.bands[j].y1, other.bands[j].y2);

            if a_y2 <= b_y1 {
                i += 1;
            } else if b_y2 <= a_y1 {
                j += 1;
            } else if a_y1 < b_y1 {
                let tail = self.bands[i].split(b_y1);
                self.bands.insert(i + 1, tail);
                i += 1;
            } else if b_y1 < a_y1 {
                let tail = other.bands[j].split(a_y1);
                other.bands.insert(j + 1, tail);
                j += 1;
            } else {
                if a_y2 < b_y2 {
                    let tail = other.bands[j].split(a_y2);
                    other.bands.insert(j + 1, tail);
                } else if b_y2 < a_y2 {
                    let tail = self.bands[i].split(b_y2);
                    self.bands.insert(i + 1, tail);
                }
                i += 1;
                j += 1;
            }
        }
    }

    /// Removes `other` from this region in place and returns the removed part.
    ///
    /// After the call `self` is `self − other` and the returned region is
    /// `self ∩ other` (both taken from the original `self`).
    pub fn divmod(&mut self, other: &Self) -> Self {
        let mut other = other.clone();
        self.reband(&mut other);

        let mut intersection = Self::new();
        let (mut i, mut j) = (0, 0);
        while i < self.bands.len() && j < other.bands.len() {
            if self.bands[i].y2 <= other.bands[j].y1 {
                i += 1;
            } else if other.bands[j].y2 <= self.bands[i].y1 {
                j += 1;
            } else {
                let band = &mut other.bands[j];
                self.bands[i].divmod(band);
                intersection.push_band(band.y1, band.y2, std::mem::take(&mut band.walls));
                i += 1;
                j += 1;
            }
        }

        self.coalesce();
        intersection
    }

    /// Returns an iterator over the maximal rectangles of the region, one per wall
    /// pair, band by band.
    #[inline]
    pub fn rects(&self) -> Rects<'_> {
        Rects {
            bands: &self.bands,
            band: 0,
            wall: 0,
        }
    }

    /// Returns the bounding box of the region, or `None` if it is empty.
    pub fn bbox(&self) -> Option<Rect> {
        let (first, last) = (self.bands.first()?, self.bands.last()?);
        let left = self.bands.iter().filter_map(|b| b.walls.first()).min()?;
        let right = self.bands.iter().filter_map(|b| b.walls.last()).max()?;
        Some(Rect::new(first.y1, last.y2, *left, *right))
    }

    /// Returns whether the region contains a point.
    pub fn contains(&self, point: Point) -> bool {
        let i = self.bands.partition_point(|band| band.y1 <= point.y);
        if i == 0 {
            return false;
        }
        let band = &self.bands[i - 1];
        if point.y >= band.y2 {
            return false;
        }
        band.walls.partition_point(|&wall| wall <= point.x) % 2 == 1
    }

    /// Returns whether every cell of `rect` is in the region.
    pub fn contains_rect(&self, rect: Rect) -> bool {
        Region::from_rect(rect).combine(self, SetOp::Sub).is_empty()
    }

    /// Returns whether any cell of `rect` is in the region.
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        !rect.is_empty() && self.rects().any(|r| r.intersection(rect).is_some())
    }

    /// Returns the region moved by the given offset.
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            bands: self
                .bands
                .iter()
                .map(|band| Band {
                    y1: band.y1 + dy,
                    y2: band.y2 + dy,
                    walls: band.walls.iter().map(|w| w + dx).collect(),
                })
                .collect(),
        }
    }
}

impl From<Rect> for Region {
    #[inline]
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl FromIterator<Rect> for Region {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, rect| acc.combine(&Self::from_rect(rect), SetOp::Or))
    }
}

macro_rules! impl_set_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $set_op:expr) => {
        impl $op<&Region> for &Region {
            type Output = Region;

            #[inline]
            fn $method(self, rhs: &Region) -> Region {
                self.combine(rhs, $set_op)
            }
        }

        impl $op<Region> for Region {
            type Output = Region;

            #[inline]
            fn $method(self, rhs: Region) -> Region {
                self.combine(&rhs, $set_op)
            }
        }

        impl $op<&Region> for Region {
            type Output = Region;

            #[inline]
            fn $method(self, rhs: &Region) -> Region {
                self.combine(rhs, $set_op)
            }
        }

        impl $op<Region> for &Region {
            type Output = Region;

            #[inline]
            fn $method(self, rhs: Region) -> Region {
                self.combine(&rhs, $set_op)
            }
        }

        impl $assign<&Region> for Region {
            #[inline]
            fn $assign_method(&mut self, rhs: &Region) {
                *self = self.combine(rhs, $set_op);
            }
        }

        impl $assign<Region> for Region {
            #[inline]
            fn $assign_method(&mut self, rhs: Region) {
                *self = self.combine(&rhs, $set_op);
            }
        }
    };
}

impl_set_op!(BitAnd, bitand, BitAndAssign, bitand_assign, SetOp::And);
impl_set_op!(BitOr, bitor, BitOrAssign, bitor_assign, SetOp::Or);
impl_set_op!(Add, add, AddAssign, add_assign, SetOp::Or);
impl_set_op!(Sub, sub, SubAssign, sub_assign, SetOp::Sub);
impl_set_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, SetOp::Xor);

/// Iterator over the rectangles of a [`Region`].
///
/// Created by [`Region::rects`]. Cloning the iterator restarts from the clone's
/// position.
#[derive(Debug, Clone)]
pub struct Rects<'a> {
    bands: &'a [Band],
    band: usize,
    wall: usize,
}

impl Iterator for Rects<'_> {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        loop {
            let band = self.bands.get(self.band)?;
            if let [left, right] = band.walls.get(self.wall..self.wall + 2).unwrap_or_default() {
                self.wall += 2;
                return Some(Rect::new(band.y1, band.y2, *left, *right));
            }
            self.band += 1;
            self.wall = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining: usize = self
            .bands
            .iter()
            .skip(self.band)
            .map(|band| band.walls.len() / 2)
            .sum::<usize>()
            .saturating_sub(self.wall / 2);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rects<'_> {}

impl FusedIterator for Rects<'_> {}
