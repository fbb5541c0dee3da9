//! The current/previous canvas pair.
//!
//! The compositor paints into the *current* canvas while the *previous* canvas
//! holds what the terminal shows. After the diff is taken the two are swapped,
//! never copied, so the next frame paints over the old contents.

use gadget_tui_core::{ColorPair, Size};
use tracing::debug;

use crate::{diff, BufferDiff, Canvas, Cell};

/// Two same-sized canvases, swapped every frame.
///
/// # Examples
///
/// ```
/// use gadget_tui_buffer::{Cell, FrameBuffers};
/// use gadget_tui_core::{ColorPair, Size};
///
/// let mut frames = FrameBuffers::new(Size::new(80, 24));
///
/// // The first frame has nothing to compare against.
/// let first = frames.diff();
/// assert!(first.full_repaint);
/// assert_eq!(first.len(), 80 * 24);
/// frames.swap();
///
/// frames.current_mut().clear(Cell::BLANK, ColorPair::DEFAULT);
/// frames.current_mut().set(0, 0, Cell::new('x'), ColorPair::DEFAULT);
/// assert_eq!(frames.diff().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffers {
    current: Canvas,
    previous: Canvas,
    /// Set until the next swap when the previous canvas no longer matches the
    /// terminal.
    invalidated: bool,
}

impl FrameBuffers {
    /// Creates a new pair. The previous canvas starts invalidated.
    pub fn new(size: Size) -> Self {
        let mut previous = Canvas::new(size);
        previous.invalidate();
        Self {
            current: Canvas::new(size),
            previous,
            invalidated: true,
        }
    }

    /// Returns the canvas size.
    #[inline]
    pub const fn size(&self) -> Size {
        self.current.size()
    }

    /// Returns the canvas being painted.
    #[inline]
    pub fn current(&self) -> &Canvas {
        &self.current
    }

    /// Returns a mutable reference to the canvas being painted.
    #[inline]
    pub fn current_mut(&mut self) -> &mut Canvas {
        &mut self.current
    }

    /// Returns the canvas of the last emitted frame.
    #[inline]
    pub fn previous(&self) -> &Canvas {
        &self.previous
    }

    /// Swaps the current and previous canvases.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
        self.invalidated = false;
    }

    /// Returns whether the next diff will be a full repaint.
    #[inline]
    pub const fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Clears the current canvas.
    pub fn clear(&mut self, cell: Cell, colors: ColorPair) {
        self.current.clear(cell, colors);
    }

    /// Computes the changes from the previous canvas to the current one.
    ///
    /// Until the next [`swap`](Self::swap) after creation, [`invalidate`](Self::invalidate)
    /// or a resize, every cell is listed and the diff is flagged as a full
    /// repaint.
    pub fn diff(&self) -> BufferDiff {
        if self.invalidated {
            diff::compute_full(&self.current)
        } else {
            diff::compute(&self.previous, &self.current)
        }
    }

    /// Forces the next diff to list every cell.
    pub fn invalidate(&mut self) {
        self.previous.invalidate();
        self.invalidated = true;
    }

    /// Resizes both canvases and invalidates the previous one.
    ///
    /// Resizing to the current size is a no-op.
    pub fn resize(&mut self, size: Size) {
        if size == self.size() {
            return;
        }
        debug!(?size, "resizing frame buffers");
        self.current.resize(size);
        self.previous.resize(size);
        self.invalidate();
    }
}
