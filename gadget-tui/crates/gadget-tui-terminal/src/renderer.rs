//! Compositor and writer glued together.

use std::io::{self, Stdout, Write};

use tracing::debug;

use gadget_tui_compositor::{Compositor, CompositorOptions, GadgetTree};
use gadget_tui_core::{Result, Size};

use crate::writer::AnsiWriter;

/// Renders gadget trees to a terminal, writing only what changed.
///
/// The renderer owns the [`Compositor`] holding the last frame, so repeated
/// calls to [`render`](Self::render) with an unchanged tree write nothing.
/// Raw mode and the alternate screen are left to the caller.
///
/// # Examples
///
/// ```
/// use gadget_tui_compositor::{GadgetTree, SolidFill};
/// use gadget_tui_core::{Point, Size};
/// use gadget_tui_terminal::Renderer;
///
/// let mut tree = GadgetTree::new();
/// tree.add_root(SolidFill::new(Point::ZERO, Size::new(2, 1)));
///
/// let mut renderer = Renderer::new(Vec::new(), Size::new(4, 2));
/// assert_eq!(renderer.render(&tree).unwrap(), 8);
/// assert_eq!(renderer.render(&tree).unwrap(), 0);
/// ```
#[derive(Debug)]
pub struct Renderer<W: Write> {
    writer: AnsiWriter<W>,
    compositor: Compositor,
}

impl Renderer<Stdout> {
    /// Creates a renderer for standard output sized to the terminal.
    pub fn stdout() -> Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::new(io::stdout(), Size::new(width, height)))
    }
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer for a screen of `size` with default options.
    pub fn new(out: W, size: Size) -> Self {
        Self::with_options(out, size, CompositorOptions::default())
    }

    /// Creates a renderer with the given compositor options.
    pub fn with_options(out: W, size: Size, options: CompositorOptions) -> Self {
        Self {
            writer: AnsiWriter::new(out),
            compositor: Compositor::with_options(size, options),
        }
    }

    /// Returns the screen size.
    #[inline]
    pub const fn size(&self) -> Size {
        self.compositor.size()
    }

    /// Returns the compositor.
    #[inline]
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Returns the compositor mutably, e.g. to change its options.
    #[inline]
    pub fn compositor_mut(&mut self) -> &mut Compositor {
        &mut self.compositor
    }

    /// Returns the writer.
    #[inline]
    pub fn writer(&self) -> &AnsiWriter<W> {
        &self.writer
    }

    /// Unwraps the output stream.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Resizes the screen. The next frame is written in full.
    pub fn resize(&mut self, size: Size) {
        if size != self.size() {
            debug!(width = size.width, height = size.height, "renderer resized");
        }
        self.compositor.resize(size);
    }

    /// Resizes the screen to the terminal's current size.
    pub fn sync_size(&mut self) -> Result<()> {
        let (width, height) = crossterm::terminal::size()?;
        self.resize(Size::new(width, height));
        Ok(())
    }

    /// Forces the next frame to be written in full, e.g. after the terminal
    /// was cleared behind the renderer's back.
    pub fn invalidate(&mut self) {
        self.compositor.invalidate();
    }

    /// Composes and writes a frame. Returns the number of cells written.
    pub fn render(&mut self, tree: &GadgetTree) -> Result<usize> {
        let diff = self.compositor.render(tree);
        self.writer.write_diff(&diff, self.compositor.frame())?;
        Ok(diff.len())
    }
}
