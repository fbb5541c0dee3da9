//! Terminal output for Gadget TUI.
//!
//! This crate writes composed frames to a VT100-compatible terminal:
//! - [`AnsiWriter`] encodes a [`BufferDiff`] as cursor moves, SGR attributes,
//!   truecolor and glyphs using crossterm commands
//! - [`Renderer`] couples a [`Compositor`] with a writer
//!
//! # Example
//!
//! ```no_run
//! use gadget_tui_compositor::{GadgetTree, SolidFill};
//! use gadget_tui_core::{ColorPair, Point, Rgb, Size};
//! use gadget_tui_terminal::Renderer;
//!
//! fn main() -> gadget_tui_core::Result<()> {
//!     let mut tree = GadgetTree::new();
//!     tree.add_root(
//!         SolidFill::new(Point::new(2, 1), Size::new(20, 5))
//!             .with_colors(ColorPair::new(Rgb::WHITE, Rgb::BLUE)),
//!     );
//!
//!     let mut renderer = Renderer::stdout()?;
//!     renderer.render(&tree)?;
//!     Ok(())
//! }
//! ```

mod renderer;
mod writer;

pub use renderer::Renderer;
pub use writer::AnsiWriter;

/// Re-export of the compositor for convenience.
pub use gadget_tui_compositor::Compositor;

/// Re-export buffer types for convenience.
pub use gadget_tui_buffer::{BufferDiff, Canvas, Cell, CellChange};

/// Re-export core types for convenience.
pub use gadget_tui_core::{ColorPair, Error, Result, Rgb, Size, TextAttributes};
