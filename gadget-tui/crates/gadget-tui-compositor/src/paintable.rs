//! The trait every gadget implements.

use std::any::Any;

use gadget_tui_buffer::CanvasSlice;
use gadget_tui_core::{Point, Rect, Size};

/// A node of the gadget tree that can paint itself.
///
/// The compositor only ever sees gadgets through this trait: it reads their
/// placement and flags to resolve visibility, then calls [`paint`](Self::paint)
/// once per rectangle of the visible region.
pub trait Paintable: Any + Send {
    /// Returns the gadget's top-left corner relative to its parent.
    fn position(&self) -> Point;

    /// Returns the gadget's size.
    fn size(&self) -> Size;

    /// Returns the gadget's rectangle relative to its parent.
    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position(), self.size())
    }

    /// Returns whether gadgets below this one can show through it.
    ///
    /// Transparent gadgets never hide what is painted before them.
    fn is_transparent(&self) -> bool {
        false
    }

    /// Returns whether the gadget (and its subtree) is shown.
    fn is_visible(&self) -> bool {
        true
    }

    /// Returns whether the gadget (and its subtree) takes part in rendering
    /// and hit-testing.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Paints the gadget into `slice`.
    ///
    /// Coordinates are local to the gadget. The slice covers one rectangle of
    /// the gadget's visible region; writes outside it are dropped.
    fn paint(&self, slice: &mut CanvasSlice<'_>);

    /// Returns a static string identifying the gadget type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Casts this gadget to `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Casts this gadget to `Any` for mutable downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Helper trait for downcasting gadgets.
pub trait PaintableExt: Paintable {
    /// Attempts to downcast this gadget to a concrete type.
    fn downcast_ref<T: Paintable>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Attempts to downcast this gadget to a concrete mutable type.
    fn downcast_mut<T: Paintable>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl<P: Paintable + ?Sized> PaintableExt for P {}

/// A boxed gadget.
pub type BoxedPaintable = Box<dyn Paintable>;
