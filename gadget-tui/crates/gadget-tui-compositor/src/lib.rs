//! Gadget tree, occlusion and frame composition for Gadget TUI.
//!
//! This crate turns a tree of gadgets into changed terminal cells:
//!
//! - [`Paintable`] - The trait every gadget implements
//! - [`GadgetTree`] - An arena of gadgets; tree order is paint order
//! - [`VisibilityMap`] - The visible region of every gadget, also used for hit-testing
//! - [`Compositor`] - Paints visible regions into canvases and diffs frames
//! - [`CompositorOptions`] - Background and occlusion settings
//! - [`SolidFill`], [`TextureGadget`] - Stock gadgets
//!
//! # Examples
//!
//! ```
//! use gadget_tui_compositor::{Compositor, GadgetTree, SolidFill};
//! use gadget_tui_buffer::Cell;
//! use gadget_tui_core::{Point, Size};
//!
//! let mut tree = GadgetTree::new();
//! let back = tree.add_root(SolidFill::new(Point::new(0, 0), Size::new(10, 10)));
//! let front = tree.add_root(
//!     SolidFill::new(Point::new(5, 5), Size::new(10, 10)).with_cell(Cell::new('#')),
//! );
//!
//! let mut compositor = Compositor::new(Size::new(20, 20));
//! let diff = compositor.render(&tree);
//! assert!(diff.full_repaint);
//!
//! let visibility = compositor.visibility();
//! assert_eq!(visibility.region(back).unwrap().area(), 100 - 25);
//! assert_eq!(visibility.gadget_at(&tree, Point::new(6, 6)), Some(front));
//! ```

#![warn(missing_docs)]

mod compositor;
mod gadgets;
mod options;
mod paintable;
mod tree;
mod visibility;

pub use compositor::Compositor;
pub use gadgets::{GadgetState, SolidFill, TextureGadget};
pub use options::{CompositorOptions, CompositorOptionsBuilder, RenderMode};
pub use paintable::{BoxedPaintable, Paintable, PaintableExt};
pub use tree::{GadgetId, GadgetTree, TreeError, TreeResult, Walk};
pub use visibility::VisibilityMap;
