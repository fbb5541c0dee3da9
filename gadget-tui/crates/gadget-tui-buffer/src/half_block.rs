//! Half-block graphics.
//!
//! Each terminal cell shows two vertically stacked pixels by drawing
//! [`HALF_BLOCK`] (`▀`): the foreground color paints the upper pixel and the
//! background color the lower one. A [`Texture`] therefore has twice as many
//! rows as the cells it covers; cell row `y` shows texture rows `2y` and
//! `2y + 1`.

use gadget_tui_core::{ColorPair, Error, Point, Result, Rgba, Size};

use crate::{Cell, CanvasSlice, Grid, HALF_BLOCK};

/// An RGBA pixel grid painted with half blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    pixels: Grid<Rgba>,
}

impl Texture {
    /// Creates a texture of `size` pixels filled with `color`.
    pub fn new(size: Size, color: Rgba) -> Self {
        Self {
            pixels: Grid::new(size, color),
        }
    }

    /// Creates a texture from row-major pixels, e.g. decoded image data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels` does not hold exactly
    /// `size.width * size.height` values.
    pub fn from_pixels(size: Size, pixels: Vec<Rgba>) -> Result<Self> {
        Ok(Self {
            pixels: Grid::from_vec(size, pixels)?,
        })
    }

    /// Creates a texture large enough to cover `size` cells.
    pub fn for_cells(size: Size, color: Rgba) -> Self {
        Self::new(
            Size::new(size.width, size.height.saturating_mul(2)),
            color,
        )
    }

    /// Returns the texture dimensions in pixels.
    #[inline]
    pub const fn size(&self) -> Size {
        self.pixels.size()
    }

    /// Returns the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgba> {
        self.pixels.get(x, y).copied()
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if (x, y) is outside the texture.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Rgba) -> Result<()> {
        let size = self.size();
        let pixel = self
            .pixels
            .get_mut(x, y)
            .ok_or(Error::OutOfBounds { x, y, size })?;
        *pixel = color;
        Ok(())
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Returns the upper and lower pixels shown by a local cell.
    fn pixels_at(&self, point: Point) -> Option<(Rgba, Rgba)> {
        let x = u16::try_from(point.x).ok()?;
        let y = u16::try_from(point.y).ok()?.checked_mul(2)?;
        Some((self.pixel(x, y)?, self.pixel(x, y.checked_add(1)?)?))
    }

    /// Paints the texture into a slice, ignoring alpha.
    ///
    /// Cells of the slice not covered by the texture are left untouched.
    pub fn paint(&self, slice: &mut CanvasSlice<'_>) {
        slice.for_each_mut(|point, cell, colors| {
            if let Some((upper, lower)) = self.pixels_at(point) {
                *cell = Cell::new(HALF_BLOCK);
                *colors = ColorPair::new(upper.rgb(), lower.rgb());
            }
        });
    }

    /// Composites the texture over whatever the slice already shows.
    ///
    /// Each pixel is blended with its own alpha scaled by `alpha`. A cell that
    /// was not already a half block shows its background in both halves before
    /// blending, so text under a translucent texture is tinted as a solid
    /// block.
    pub fn paint_blended(&self, slice: &mut CanvasSlice<'_>, alpha: f32) {
        slice.for_each_mut(|point, cell, colors| {
            let Some((upper, lower)) = self.pixels_at(point) else {
                return;
            };
            if cell.character != HALF_BLOCK {
                colors.fg = colors.bg;
            }
            colors.fg = upper.blend_over(colors.fg, alpha);
            colors.bg = lower.blend_over(colors.bg, alpha);
            *cell = Cell::new(HALF_BLOCK);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canvas;
    use gadget_tui_core::{Rect, Rgb};
    use pretty_assertions::assert_eq;

    fn stripes() -> Texture {
        let mut texture = Texture::for_cells(Size::new(2, 2), Rgba::new(255, 0, 0, 255));
        for x in 0..2 {
            texture.set_pixel(x, 1, Rgba::new(0, 0, 255, 255)).unwrap();
            texture.set_pixel(x, 3, Rgba::new(0, 0, 255, 255)).unwrap();
        }
        texture
    }

    #[test]
    fn test_texture_size() {
        let texture = Texture::for_cells(Size::new(3, 2), Rgba::TRANSPARENT);
        assert_eq!(texture.size(), Size::new(3, 4));
        assert_eq!(texture.pixel(2, 3), Some(Rgba::TRANSPARENT));
        assert_eq!(texture.pixel(2, 4), None);
    }

    #[test]
    fn test_paint_opaque() {
        let mut canvas = Canvas::new(Size::new(3, 3));
        stripes().paint(&mut canvas.slice(Rect::new(1, 3, 1, 3), Point::new(1, 1)));

        let cell = canvas.cell(1, 1).unwrap();
        assert_eq!(cell.character, HALF_BLOCK);
        assert_eq!(canvas.color(1, 1), Some(&ColorPair::new(Rgb::RED, Rgb::BLUE)));
        assert_eq!(canvas.color(2, 2), Some(&ColorPair::new(Rgb::RED, Rgb::BLUE)));
        assert_eq!(canvas.cell(0, 0), Some(&Cell::BLANK));
    }

    #[test]
    fn test_paint_skips_cells_past_texture() {
        let mut canvas = Canvas::new(Size::new(4, 1));
        let texture = Texture::for_cells(Size::new(2, 1), Rgba::new(0, 255, 0, 255));
        texture.paint(&mut canvas.slice(Rect::new(0, 1, 0, 4), Point::ZERO));
        assert_eq!(canvas.cell(1, 0).unwrap().character, HALF_BLOCK);
        assert_eq!(canvas.cell(2, 0), Some(&Cell::BLANK));
    }

    #[test]
    fn test_paint_blended_over_text() {
        let mut canvas = Canvas::new(Size::new(1, 1));
        canvas.set(0, 0, Cell::new('x'), ColorPair::new(Rgb::WHITE, Rgb::BLACK));

        let texture = Texture::for_cells(Size::new(1, 1), Rgba::new(255, 255, 255, 255));
        texture.paint_blended(&mut canvas.slice(Rect::new(0, 1, 0, 1), Point::ZERO), 0.5);

        assert_eq!(canvas.cell(0, 0).unwrap().character, HALF_BLOCK);
        // The glyph's white foreground is replaced by the black background first.
        let gray = Rgb::new(128, 128, 128);
        assert_eq!(canvas.color(0, 0), Some(&ColorPair::new(gray, gray)));
    }

    #[test]
    fn test_paint_blended_transparent_pixels_keep_colors() {
        let mut canvas = Canvas::new(Size::new(1, 1));
        canvas.set(0, 0, Cell::new(HALF_BLOCK), ColorPair::new(Rgb::RED, Rgb::BLUE));

        let texture = Texture::for_cells(Size::new(1, 1), Rgba::TRANSPARENT);
        texture.paint_blended(&mut canvas.slice(Rect::new(0, 1, 0, 1), Point::ZERO), 1.0);
        assert_eq!(canvas.color(0, 0), Some(&ColorPair::new(Rgb::RED, Rgb::BLUE)));
    }

    #[test]
    fn test_from_pixels() {
        let red = Rgba::new(255, 0, 0, 255);
        let texture = Texture::from_pixels(Size::new(1, 2), vec![red, Rgba::TRANSPARENT]).unwrap();
        assert_eq!(texture.pixel(0, 0), Some(red));
        assert_eq!(texture.pixel(0, 1), Some(Rgba::TRANSPARENT));

        let err = Texture::from_pixels(Size::new(2, 2), vec![red]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { len: 1, .. }));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut texture = Texture::new(Size::new(2, 2), Rgba::TRANSPARENT);
        let err = texture.set_pixel(2, 0, Rgba::new(0, 0, 0, 255)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 2, y: 0, .. }));
        assert_eq!(texture, Texture::new(Size::new(2, 2), Rgba::TRANSPARENT));
    }
}
