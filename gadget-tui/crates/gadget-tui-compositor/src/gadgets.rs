//! Stock gadgets.
//!
//! - [`SolidFill`]: one cell and color pair repeated over its area
//! - [`TextureGadget`]: an RGBA texture drawn with half blocks

use std::any::Any;

use gadget_tui_buffer::{CanvasSlice, Cell, Texture};
use gadget_tui_core::{ColorPair, Point, Rgba, Size};

use crate::paintable::Paintable;

/// Placement and flags shared by the stock gadgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GadgetState {
    /// Top-left corner relative to the parent.
    pub position: Point,
    /// Size in cells.
    pub size: Size,
    /// Whether gadgets below show through.
    pub is_transparent: bool,
    /// Whether the gadget and its subtree are shown.
    pub is_visible: bool,
    /// Whether the gadget and its subtree take part in rendering.
    pub is_enabled: bool,
}

impl GadgetState {
    /// Creates an opaque, visible, enabled placement.
    pub const fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            is_transparent: false,
            is_visible: true,
            is_enabled: true,
        }
    }
}

macro_rules! impl_gadget_state {
    ($gadget:ty) => {
        impl $gadget {
            /// Sets whether gadgets below show through.
            pub fn transparent(mut self, transparent: bool) -> Self {
                self.state.is_transparent = transparent;
                self
            }

            /// Sets whether the gadget is shown.
            pub fn visible(mut self, visible: bool) -> Self {
                self.state.is_visible = visible;
                self
            }

            /// Sets whether the gadget takes part in rendering.
            pub fn enabled(mut self, enabled: bool) -> Self {
                self.state.is_enabled = enabled;
                self
            }
        }
    };
}

/// A rectangle filled with a single cell.
///
/// When transparent, a blank fill cell paints nothing and any other glyph is
/// drawn with its foreground color only, keeping the background of whatever
/// is underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidFill {
    /// Placement and flags.
    pub state: GadgetState,
    /// The cell repeated over the area.
    pub cell: Cell,
    /// Colors of the cell.
    pub colors: ColorPair,
}

impl SolidFill {
    /// Creates a blank fill with default colors.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            state: GadgetState::new(position, size),
            cell: Cell::BLANK,
            colors: ColorPair::DEFAULT,
        }
    }

    /// Sets the fill cell.
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.cell = cell;
        self
    }

    /// Sets the fill colors.
    pub fn with_colors(mut self, colors: ColorPair) -> Self {
        self.colors = colors;
        self
    }
}

impl_gadget_state!(SolidFill);

impl Paintable for SolidFill {
    fn position(&self) -> Point {
        self.state.position
    }

    fn size(&self) -> Size {
        self.state.size
    }

    fn is_transparent(&self) -> bool {
        self.state.is_transparent
    }

    fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    fn is_enabled(&self) -> bool {
        self.state.is_enabled
    }

    fn paint(&self, slice: &mut CanvasSlice<'_>) {
        if !self.state.is_transparent {
            slice.fill(self.cell, self.colors);
        } else if !self.cell.is_blank() {
            slice.for_each_mut(|_, cell, colors| {
                *cell = self.cell;
                colors.fg = self.colors.fg;
            });
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A gadget displaying an RGBA texture at double vertical resolution.
///
/// When transparent, the texture is alpha-composited over what is underneath,
/// scaled by `alpha`; otherwise alpha is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureGadget {
    /// Placement and flags.
    pub state: GadgetState,
    /// Pixels, two rows per cell.
    pub texture: Texture,
    /// Overall opacity applied when transparent, in `0..=1`.
    pub alpha: f32,
}

impl TextureGadget {
    /// Creates a gadget whose texture covers `size` cells, filled with `color`.
    pub fn new(position: Point, size: Size, color: Rgba) -> Self {
        Self {
            state: GadgetState::new(position, size),
            texture: Texture::for_cells(size, color),
            alpha: 1.0,
        }
    }

    /// Sets the overall opacity used when transparent.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Replaces the texture.
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = texture;
        self
    }
}

impl_gadget_state!(TextureGadget);

impl Paintable for TextureGadget {
    fn position(&self) -> Point {
        self.state.position
    }

    fn size(&self) -> Size {
        self.state.size
    }

    fn is_transparent(&self) -> bool {
        self.state.is_transparent
    }

    fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    fn is_enabled(&self) -> bool {
        self.state.is_enabled
    }

    fn paint(&self, slice: &mut CanvasSlice<'_>) {
        if self.state.is_transparent {
            self.texture.paint_blended(slice, self.alpha);
        } else {
            self.texture.paint(slice);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gadget_tui_buffer::{Canvas, HALF_BLOCK};
    use gadget_tui_core::{Rect, Rgb};

    fn canvas_with(ch: char, colors: ColorPair) -> Canvas {
        let mut canvas = Canvas::new(Size::new(2, 1));
        canvas.clear(Cell::new(ch), colors);
        canvas
    }

    #[test]
    fn test_solid_fill_opaque() {
        let mut canvas = canvas_with('x', ColorPair::DEFAULT);
        let pair = ColorPair::new(Rgb::RED, Rgb::BLUE);
        let gadget = SolidFill::new(Point::ZERO, Size::new(1, 1)).with_colors(pair);
        gadget.paint(&mut canvas.slice(Rect::new(0, 1, 0, 1), Point::ZERO));

        assert_eq!(canvas.cell(0, 0), Some(&Cell::BLANK));
        assert_eq!(canvas.color(0, 0), Some(&pair));
        assert_eq!(canvas.cell(1, 0).unwrap().character, 'x');
    }

    #[test]
    fn test_solid_fill_transparent_blank_paints_nothing() {
        let under = ColorPair::new(Rgb::GREEN, Rgb::BLUE);
        let mut canvas = canvas_with('x', under);
        let gadget = SolidFill::new(Point::ZERO, Size::new(2, 1))
            .with_colors(ColorPair::new(Rgb::RED, Rgb::RED))
            .transparent(true);
        gadget.paint(&mut canvas.slice(Rect::new(0, 1, 0, 2), Point::ZERO));

        assert_eq!(canvas, canvas_with('x', under));
    }

    #[test]
    fn test_solid_fill_transparent_glyph_keeps_background() {
        let mut canvas = canvas_with(' ', ColorPair::new(Rgb::WHITE, Rgb::BLUE));
        let gadget = SolidFill::new(Point::ZERO, Size::new(2, 1))
            .with_cell(Cell::new('*'))
            .with_colors(ColorPair::new(Rgb::RED, Rgb::BLACK))
            .transparent(true);
        gadget.paint(&mut canvas.slice(Rect::new(0, 1, 0, 2), Point::ZERO));

        assert_eq!(canvas.cell(1, 0).unwrap().character, '*');
        assert_eq!(canvas.color(1, 0), Some(&ColorPair::new(Rgb::RED, Rgb::BLUE)));
    }

    #[test]
    fn test_texture_gadget_transparent_blends() {
        let mut canvas = canvas_with(HALF_BLOCK, ColorPair::new(Rgb::BLACK, Rgb::BLACK));
        let gadget = TextureGadget::new(Point::ZERO, Size::new(2, 1), Rgba::new(255, 255, 255, 255))
            .with_alpha(0.5)
            .transparent(true);
        gadget.paint(&mut canvas.slice(Rect::new(0, 1, 0, 2), Point::ZERO));

        let gray = Rgb::new(128, 128, 128);
        assert_eq!(canvas.color(0, 0), Some(&ColorPair::new(gray, gray)));
    }

    #[test]
    fn test_flags() {
        let gadget = SolidFill::new(Point::ZERO, Size::new(1, 1))
            .visible(false)
            .enabled(false);
        assert!(!gadget.is_visible());
        assert!(!gadget.is_enabled());
        assert!(!gadget.is_transparent());
        assert_eq!(gadget.rect(), Rect::new(0, 1, 0, 1));
    }
}
