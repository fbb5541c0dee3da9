//! Compositor configuration.

use gadget_tui_buffer::Cell;
use gadget_tui_core::ColorPair;

/// How gadgets are clipped against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Each gadget only paints the cells not covered by opaque gadgets painted
    /// after it.
    #[default]
    Regions,
    /// Every gadget paints its whole clipped area in paint order and later
    /// gadgets overwrite earlier ones.
    Painter,
}

/// Options controlling a [`Compositor`](crate::Compositor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositorOptions {
    /// Occlusion strategy.
    pub render_mode: RenderMode,
    /// Cell written everywhere before gadgets paint.
    pub background_cell: Cell,
    /// Colors written everywhere before gadgets paint.
    pub background_colors: ColorPair,
}

impl Default for CompositorOptions {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::default(),
            background_cell: Cell::BLANK,
            background_colors: ColorPair::DEFAULT,
        }
    }
}

impl CompositorOptions {
    /// Creates a builder starting from the default options.
    pub fn builder() -> CompositorOptionsBuilder {
        CompositorOptionsBuilder::new()
    }
}

/// Builder for [`CompositorOptions`].
///
/// # Examples
///
/// ```
/// use gadget_tui_compositor::{CompositorOptions, RenderMode};
/// use gadget_tui_core::{ColorPair, Rgb};
///
/// let options = CompositorOptions::builder()
///     .render_mode(RenderMode::Painter)
///     .background_colors(ColorPair::new(Rgb::WHITE, Rgb::BLUE))
///     .build();
/// assert_eq!(options.render_mode, RenderMode::Painter);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompositorOptionsBuilder {
    options: CompositorOptions,
}

impl CompositorOptionsBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the occlusion strategy.
    pub fn render_mode(mut self, render_mode: RenderMode) -> Self {
        self.options.render_mode = render_mode;
        self
    }

    /// Sets the background cell.
    pub fn background_cell(mut self, cell: Cell) -> Self {
        self.options.background_cell = cell;
        self
    }

    /// Sets the background colors.
    pub fn background_colors(mut self, colors: ColorPair) -> Self {
        self.options.background_colors = colors;
        self
    }

    /// Builds the options.
    pub fn build(self) -> CompositorOptions {
        self.options
    }
}
