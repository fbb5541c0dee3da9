//! A dense 2D array indexed by `(column, row)`.

use gadget_tui_core::{Error, Rect, Result, Size};

/// A row-major 2D grid of values.
///
/// Used for both halves of a [`Canvas`](crate::Canvas) and for the changed-cell
/// mask produced by the diff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    size: Size,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid of the given size filled with `value`.
    pub fn new(size: Size, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size.area() as usize],
        }
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Sets every cell inside `rect` to `value`. The rectangle is clipped to the
    /// grid.
    pub fn fill_rect(&mut self, rect: Rect, value: &T) {
        let Some(rect) = rect.intersection(self.bounds()) else {
            return;
        };
        let (left, right) = (rect.left as usize, rect.right as usize);
        for y in rect.top..rect.bottom {
            if let Some(row) = self.row_mut(y as u16) {
                row[left..right].fill(value.clone());
            }
        }
    }

    /// Resizes the grid, filling it with `value`. Existing contents are dropped.
    pub fn resize(&mut self, size: Size, value: T) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size.area() as usize, value);
    }
}

impl<T> Grid<T> {
    /// Wraps row-major values as a grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] unless `cells` holds exactly one
    /// value per cell of `size`.
    pub fn from_vec(size: Size, cells: Vec<T>) -> Result<Self> {
        if cells.len() != size.area() as usize {
            return Err(Error::InvalidDimensions {
                size,
                len: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Returns the grid dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the grid width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.size.width
    }

    /// Returns the grid height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.size.height
    }

    /// Returns the rectangle covered by the grid, anchored at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Converts (x, y) coordinates to a linear index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.size.width && y < self.size.height {
            Some(y as usize * self.size.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Returns a reference to the value at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&T> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Returns a mutable reference to the value at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut T> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Returns a slice of all values in row-major order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Returns a row of values.
    pub fn row(&self, y: u16) -> Option<&[T]> {
        if y < self.size.height {
            let start = y as usize * self.size.width as usize;
            Some(&self.cells[start..start + self.size.width as usize])
        } else {
            None
        }
    }

    /// Returns a mutable row of values.
    pub fn row_mut(&mut self, y: u16) -> Option<&mut [T]> {
        if y < self.size.height {
            let start = y as usize * self.size.width as usize;
            Some(&mut self.cells[start..start + self.size.width as usize])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `max(1)` keeps `chunks_exact` valid for zero-width grids, which have no cells.
        self.cells.chunks_exact(self.size.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(Size::new(3, 2), 0u8);
        *grid.get_mut(2, 1).unwrap() = 7;
        assert_eq!(grid.get(2, 1), Some(&7));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.cells(), &[0, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn test_grid_fill_rect_clips() {
        let mut grid = Grid::new(Size::new(4, 3), '.');
        grid.fill_rect(Rect::new(1, 10, 2, 10), &'#');
        let rows: Vec<String> = grid.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["....", "..##", "..##"]);

        grid.fill_rect(Rect::new(-5, -1, 0, 4), &'x');
        assert!(!grid.cells().contains(&'x'));
    }

    #[test]
    fn test_grid_resize() {
        let mut grid = Grid::new(Size::new(2, 2), 1);
        grid.resize(Size::new(3, 1), 9);
        assert_eq!(grid.size(), Size::new(3, 1));
        assert_eq!(grid.cells(), &[9, 9, 9]);
    }

    #[test]
    fn test_grid_from_vec() {
        let grid = Grid::from_vec(Size::new(2, 2), vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grid.row(1), Some(&[3, 4][..]));

        let err = Grid::from_vec(Size::new(2, 2), vec![1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions { size, len: 3 } if size == Size::new(2, 2)
        ));
    }

    #[test]
    fn test_grid_rows() {
        let grid = Grid::new(Size::new(2, 3), 0);
        assert_eq!(grid.rows().count(), 3);
        let empty: Grid<i32> = Grid::new(Size::new(0, 3), 0);
        assert_eq!(empty.rows().count(), 0);
    }
}
