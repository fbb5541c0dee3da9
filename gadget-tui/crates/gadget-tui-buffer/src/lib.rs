//! Cell canvases and frame diffing for Gadget TUI.
//!
//! This crate provides the buffers the compositor paints into:
//!
//! - [`Cell`] - A character with attributes and display width
//! - [`Grid`] - A dense 2D array
//! - [`Canvas`] - Paired character and color grids
//! - [`CanvasSlice`] - Write access to one rectangle of a canvas, in gadget-local coordinates
//! - [`Texture`] - RGBA pixels painted with half blocks
//! - [`FrameBuffers`] - The current/previous canvas pair
//! - [`diff`] - Computing the cells that changed between two frames
//!
//! # Architecture
//!
//! The rendering pipeline works as follows:
//!
//! 1. **Paint into the current canvas**: each gadget gets a [`CanvasSlice`] per
//!    rectangle of its visible region.
//!
//! 2. **Compute diff**: [`FrameBuffers::diff`] compares the current canvas with
//!    the previous frame and lists every changed cell.
//!
//! 3. **Send to terminal**: the terminal writer emits escape sequences for the
//!    changed cells only (handled by `gadget-tui-terminal`).
//!
//! 4. **Swap buffers**: [`FrameBuffers::swap`] makes the painted canvas the new
//!    previous frame.
//!
//! # Examples
//!
//! ```
//! use gadget_tui_buffer::{Cell, FrameBuffers};
//! use gadget_tui_core::{ColorPair, Point, Rect, Size, TextAttributes};
//!
//! let mut frames = FrameBuffers::new(Size::new(80, 24));
//! frames.clear(Cell::BLANK, ColorPair::DEFAULT);
//!
//! // Paint a label for a gadget at (10, 2) whose visible part is 12 columns wide.
//! let mut slice = frames
//!     .current_mut()
//!     .slice(Rect::new(2, 3, 10, 22), Point::new(10, 2));
//! slice.put_str(Point::ZERO, "Hello, world!", TextAttributes::BOLD, ColorPair::DEFAULT);
//!
//! let diff = frames.diff();
//! frames.swap();
//! assert!(diff.full_repaint);
//! ```

mod canvas;
mod cell;
pub mod diff;
mod frame;
mod grid;
mod half_block;

pub use canvas::{Canvas, CanvasSlice};
pub use cell::{Cell, HALF_BLOCK};
pub use diff::{BufferDiff, CellChange};
pub use frame::FrameBuffers;
pub use grid::Grid;
pub use half_block::Texture;

// Re-export core types for convenience
pub use gadget_tui_core::{ColorPair, Rect, Rgb, Rgba, TextAttributes};
