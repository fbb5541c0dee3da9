//! Gadget TUI: region-based occlusion and diff rendering for terminal gadget trees.
//!
//! Every frame, each gadget in a [`GadgetTree`](compositor::GadgetTree) is
//! assigned the exact set of cells where it is visible, a
//! [`Region`](core::Region). Gadgets paint only those cells, and the finished
//! frame is diffed against the previous one so only changed cells reach the
//! terminal.
//!
//! The framework is split into crates:
//! - [`core`]: geometry, the region algebra, colors and text attributes
//! - [`buffer`]: cells, canvases, half-block textures and frame diffing
//! - [`compositor`]: the gadget tree, visibility resolution and composition
//! - [`terminal`]: VT100 output of frame diffs
//!
//! # Example
//!
//! ```
//! use gadget_tui::prelude::*;
//!
//! let mut tree = GadgetTree::new();
//! let window = tree.add_root(
//!     SolidFill::new(Point::new(0, 0), Size::new(10, 10))
//!         .with_colors(ColorPair::new(Rgb::WHITE, Rgb::BLUE)),
//! );
//! let popup = tree.add_root(SolidFill::new(Point::new(4, 4), Size::new(4, 2)));
//!
//! let mut renderer = Renderer::new(Vec::new(), Size::new(20, 10));
//! renderer.render(&tree)?;
//!
//! let visibility = renderer.compositor().visibility();
//! assert_eq!(visibility.region(window).map(Region::area), Some(100 - 8));
//! assert_eq!(visibility.gadget_at(&tree, Point::new(5, 5)), Some(popup));
//! # Ok::<(), gadget_tui::core::Error>(())
//! ```

pub use gadget_tui_buffer as buffer;
pub use gadget_tui_compositor as compositor;
pub use gadget_tui_core as core;
pub use gadget_tui_terminal as terminal;

pub mod prelude {
    pub use gadget_tui_buffer::{BufferDiff, Canvas, CanvasSlice, Cell, Texture};
    pub use gadget_tui_compositor::{
        Compositor, CompositorOptions, GadgetId, GadgetTree, Paintable, PaintableExt,
        RenderMode, SolidFill, TextureGadget, VisibilityMap,
    };
    pub use gadget_tui_core::{
        ColorPair, Point, Rect, Region, Rgb, Rgba, Size, TextAttributes,
    };
    pub use gadget_tui_terminal::Renderer;
}
