//! Frame composition.

use tracing::trace;

use gadget_tui_buffer::{BufferDiff, Canvas, FrameBuffers};
use gadget_tui_core::Size;

use crate::options::CompositorOptions;
use crate::tree::GadgetTree;
use crate::visibility::VisibilityMap;

/// Paints a gadget tree into a pair of canvases and diffs consecutive frames.
///
/// Each call to [`render`](Self::render) resolves visibility, clears the
/// current canvas to the background, lets every visible gadget paint its
/// visible rectangles, and returns the cells that changed since the previous
/// frame.
///
/// # Examples
///
/// ```
/// use gadget_tui_compositor::{Compositor, GadgetTree, SolidFill};
/// use gadget_tui_buffer::Cell;
/// use gadget_tui_core::{Point, Size};
///
/// let mut tree = GadgetTree::new();
/// tree.add_root(SolidFill::new(Point::new(0, 0), Size::new(4, 2)).with_cell(Cell::new('#')));
///
/// let mut compositor = Compositor::new(Size::new(10, 5));
/// let first = compositor.render(&tree);
/// assert_eq!(first.len(), 50);
///
/// // Nothing moved, so nothing needs to be redrawn.
/// assert!(compositor.render(&tree).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Compositor {
    options: CompositorOptions,
    frames: FrameBuffers,
    visibility: VisibilityMap,
}

impl Compositor {
    /// Creates a compositor for a screen of the given size with default options.
    pub fn new(size: Size) -> Self {
        Self::with_options(size, CompositorOptions::default())
    }

    /// Creates a compositor with the given options.
    pub fn with_options(size: Size, options: CompositorOptions) -> Self {
        Self {
            options,
            frames: FrameBuffers::new(size),
            visibility: VisibilityMap::default(),
        }
    }

    /// Returns the options.
    #[inline]
    pub fn options(&self) -> &CompositorOptions {
        &self.options
    }

    /// Replaces the options. Takes effect on the next frame.
    pub fn set_options(&mut self, options: CompositorOptions) {
        self.options = options;
    }

    /// Returns the screen size.
    #[inline]
    pub const fn size(&self) -> Size {
        self.frames.size()
    }

    /// Resizes the screen. The next frame is a full repaint.
    pub fn resize(&mut self, size: Size) {
        self.frames.resize(size);
    }

    /// Forces the next frame to be a full repaint.
    pub fn invalidate(&mut self) {
        self.frames.invalidate();
    }

    /// Returns the visibility resolved for the last frame.
    #[inline]
    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    /// Returns the last rendered frame.
    #[inline]
    pub fn frame(&self) -> &Canvas {
        self.frames.previous()
    }

    /// Renders a frame and returns the cells that changed since the last one.
    pub fn render(&mut self, tree: &GadgetTree) -> BufferDiff {
        self.visibility = VisibilityMap::resolve(tree, self.size(), self.options.render_mode);

        self.frames.clear(
            self.options.background_cell,
            self.options.background_colors,
        );

        let canvas = self.frames.current_mut();
        let mut painted = 0usize;
        for id in tree.walk() {
            let (Some(gadget), Some(region), Some(origin)) = (
                tree.get(id),
                self.visibility.region(id),
                self.visibility.origin(id),
            ) else {
                continue;
            };
            for rect in region.rects() {
                gadget.paint(&mut canvas.slice(rect, origin));
                painted += 1;
            }
        }
        trace!(gadgets = tree.len(), rects = painted, "composited frame");

        let diff = self.frames.diff();
        self.frames.swap();
        diff
    }
}
