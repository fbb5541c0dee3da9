//! The paired character/color grids gadgets paint into.

use gadget_tui_core::{ColorPair, Point, Rect, Size, TextAttributes};

use crate::{Cell, Grid};

/// A screen-sized pair of grids: one of [`Cell`]s and one of [`ColorPair`]s.
///
/// Gadgets never receive a `Canvas` directly; they paint through a
/// [`CanvasSlice`] restricted to one rectangle of their visible region.
///
/// # Examples
///
/// ```
/// use gadget_tui_buffer::{Canvas, Cell};
/// use gadget_tui_core::{ColorPair, Point, Rect, Size};
///
/// let mut canvas = Canvas::new(Size::new(10, 4));
///
/// // A gadget at (3, 1) allowed to paint the absolute cells [1, 3) x [4, 6).
/// let mut slice = canvas.slice(Rect::new(1, 3, 4, 6), Point::new(3, 1));
/// assert_eq!(slice.rect(), Rect::new(0, 2, 1, 3));
/// slice.fill(Cell::new('#'), ColorPair::DEFAULT);
///
/// assert_eq!(canvas.cell(4, 1).map(|c| c.character), Some('#'));
/// assert_eq!(canvas.cell(3, 1).map(|c| c.character), Some(' '));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    chars: Grid<Cell>,
    colors: Grid<ColorPair>,
}

impl Canvas {
    /// Creates a blank canvas.
    pub fn new(size: Size) -> Self {
        Self {
            chars: Grid::new(size, Cell::BLANK),
            colors: Grid::new(size, ColorPair::DEFAULT),
        }
    }

    /// Returns the canvas dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        self.chars.size()
    }

    /// Returns the rectangle covered by the canvas.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        self.chars.bounds()
    }

    /// Returns the character grid.
    #[inline]
    pub fn chars(&self) -> &Grid<Cell> {
        &self.chars
    }

    /// Returns the color grid.
    #[inline]
    pub fn colors(&self) -> &Grid<ColorPair> {
        &self.colors
    }

    /// Returns the cell at (x, y).
    #[inline]
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.chars.get(x, y)
    }

    /// Returns the colors at (x, y).
    #[inline]
    pub fn color(&self, x: u16, y: u16) -> Option<&ColorPair> {
        self.colors.get(x, y)
    }

    /// Writes a cell and its colors at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell, colors: ColorPair) -> bool {
        match (self.chars.get_mut(x, y), self.colors.get_mut(x, y)) {
            (Some(c), Some(p)) => {
                *c = cell;
                *p = colors;
                true
            }
            _ => false,
        }
    }

    /// Fills the whole canvas.
    pub fn clear(&mut self, cell: Cell, colors: ColorPair) {
        self.chars.fill(cell);
        self.colors.fill(colors);
    }

    /// Fills the character grid with [`Cell::SENTINEL`] so that every cell of
    /// the next frame compares as changed.
    pub fn invalidate(&mut self) {
        self.chars.fill(Cell::SENTINEL);
    }

    /// Resizes the canvas, clearing it to blank cells.
    pub fn resize(&mut self, size: Size) {
        self.chars.resize(size, Cell::BLANK);
        self.colors.resize(size, ColorPair::DEFAULT);
    }

    /// Returns a slice allowing writes to `rect` (absolute coordinates, clipped
    /// to the canvas) addressed relative to `origin`.
    pub fn slice(&mut self, rect: Rect, origin: Point) -> CanvasSlice<'_> {
        let rect = rect.intersection(self.bounds()).unwrap_or(Rect::ZERO);
        CanvasSlice {
            canvas: self,
            rect,
            origin,
        }
    }
}

/// Write access to one rectangle of a [`Canvas`].
///
/// Coordinates passed to a slice are local to the painting gadget: `(0, 0)` is
/// the gadget's top-left corner, wherever it lies on screen. Writes outside the
/// slice's rectangle are ignored, so a gadget cannot paint over cells it does
/// not own.
#[derive(Debug)]
pub struct CanvasSlice<'a> {
    canvas: &'a mut Canvas,
    /// Absolute, clipped to the canvas.
    rect: Rect,
    origin: Point,
}

impl CanvasSlice<'_> {
    /// Returns the writable rectangle in local coordinates.
    #[inline]
    pub const fn rect(&self) -> Rect {
        self.rect.offset(self.origin)
    }

    /// Returns the writable rectangle in absolute coordinates.
    #[inline]
    pub const fn absolute_rect(&self) -> Rect {
        self.rect
    }

    /// Returns the absolute position of the local origin.
    #[inline]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns whether a local point is writable.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        self.rect().contains_point(point)
    }

    fn absolute(&self, point: Point) -> Option<(u16, u16)> {
        if !self.contains(point) {
            return None;
        }
        let abs = point + self.origin;
        Some((u16::try_from(abs.x).ok()?, u16::try_from(abs.y).ok()?))
    }

    /// Returns the cell and colors at a local point.
    pub fn get(&self, point: Point) -> Option<(&Cell, &ColorPair)> {
        let (x, y) = self.absolute(point)?;
        Some((self.canvas.chars.get(x, y)?, self.canvas.colors.get(x, y)?))
    }

    /// Returns mutable access to the cell and colors at a local point.
    pub fn get_mut(&mut self, point: Point) -> Option<(&mut Cell, &mut ColorPair)> {
        let (x, y) = self.absolute(point)?;
        let canvas = &mut *self.canvas;
        Some((canvas.chars.get_mut(x, y)?, canvas.colors.get_mut(x, y)?))
    }

    /// Writes a cell and its colors at a local point. Returns false if the point
    /// is outside the slice.
    pub fn set(&mut self, point: Point, cell: Cell, colors: ColorPair) -> bool {
        match self.get_mut(point) {
            Some((c, p)) => {
                *c = cell;
                *p = colors;
                true
            }
            None => false,
        }
    }

    /// Fills the whole slice.
    pub fn fill(&mut self, cell: Cell, colors: ColorPair) {
        self.canvas.chars.fill_rect(self.rect, &cell);
        self.canvas.colors.fill_rect(self.rect, &colors);
    }

    /// Calls `f` for every cell of the slice with its local position.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(Point, &mut Cell, &mut ColorPair)) {
        for point in self.rect().points() {
            if let Some((cell, colors)) = self.get_mut(point) {
                f(point, cell, colors);
            }
        }
    }

    /// Writes a line of text starting at a local point.
    ///
    /// Wide characters take two columns; one that would be cut by the slice's
    /// right edge is replaced by a space. Returns the number of columns advanced.
    pub fn put_str(
        &mut self,
        at: Point,
        text: &str,
        attributes: TextAttributes,
        colors: ColorPair,
    ) -> i32 {
        let mut x = at.x;
        for ch in text.chars() {
            let cell = Cell::new(ch).with_attributes(attributes);
            let point = Point::new(x, at.y);
            if cell.is_wide() {
                if self.contains(point.offset(1, 0)) {
                    self.set(point, cell, colors);
                    self.set(point.offset(1, 0), Cell::continuation(), colors);
                } else {
                    self.set(point, Cell::BLANK.with_attributes(attributes), colors);
                }
            } else {
                self.set(point, cell, colors);
            }
            x += i32::from(cell.width);
        }
        x - at.x
    }
}
