//! Gadget tree management.
//!
//! The tree is the z-order: parents paint before their children, siblings
//! paint in list order, and later siblings cover earlier ones.

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use gadget_tui_core::{Point, Rect};

use crate::paintable::{BoxedPaintable, Paintable, PaintableExt};

new_key_type! {
    /// A key identifying a gadget in a [`GadgetTree`].
    pub struct GadgetId;
}

/// Errors that can occur during tree operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The gadget is not in the tree.
    #[error("gadget not found: {0:?}")]
    NotFound(GadgetId),

    /// The requested parent is not in the tree.
    #[error("parent gadget not found: {0:?}")]
    ParentNotFound(GadgetId),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

struct Node {
    gadget: BoxedPaintable,
    parent: Option<GadgetId>,
    children: Vec<GadgetId>,
}

/// An arena of gadgets arranged in paint order.
///
/// Top-level gadgets are children of the screen; their positions are absolute.
///
/// # Examples
///
/// ```
/// use gadget_tui_compositor::{GadgetTree, SolidFill};
/// use gadget_tui_core::{Point, Rect, Size};
///
/// let mut tree = GadgetTree::new();
/// let window = tree.add_root(SolidFill::new(Point::new(5, 2), Size::new(20, 10)));
/// let button = tree
///     .add_child(window, SolidFill::new(Point::new(1, 1), Size::new(6, 1)))
///     .unwrap();
///
/// assert_eq!(tree.absolute_rect(button), Some(Rect::new(3, 4, 6, 12)));
/// assert_eq!(tree.walk().collect::<Vec<_>>(), vec![window, button]);
/// ```
#[derive(Default)]
pub struct GadgetTree {
    nodes: SlotMap<GadgetId, Node>,
    roots: Vec<GadgetId>,
}

impl std::fmt::Debug for GadgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GadgetTree")
            .field("len", &self.nodes.len())
            .field("roots", &self.roots)
            .finish()
    }
}

impl GadgetTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of gadgets in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree has no gadgets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns whether the gadget is in the tree.
    #[inline]
    pub fn contains(&self, id: GadgetId) -> bool {
        self.nodes.contains_key(id)
    }

    fn insert(&mut self, parent: Option<GadgetId>, gadget: BoxedPaintable) -> GadgetId {
        self.nodes.insert(Node {
            gadget,
            parent,
            children: Vec::new(),
        })
    }

    /// Adds a top-level gadget above all existing top-level gadgets.
    pub fn add_root(&mut self, gadget: impl Paintable) -> GadgetId {
        self.add_root_boxed(Box::new(gadget))
    }

    /// Adds a boxed top-level gadget.
    pub fn add_root_boxed(&mut self, gadget: BoxedPaintable) -> GadgetId {
        let id = self.insert(None, gadget);
        self.roots.push(id);
        id
    }

    /// Adds a gadget as the last (topmost) child of `parent`.
    pub fn add_child(&mut self, parent: GadgetId, gadget: impl Paintable) -> TreeResult<GadgetId> {
        self.add_child_boxed(parent, Box::new(gadget))
    }

    /// Adds a boxed gadget as the last child of `parent`.
    pub fn add_child_boxed(
        &mut self,
        parent: GadgetId,
        gadget: BoxedPaintable,
    ) -> TreeResult<GadgetId> {
        if !self.nodes.contains_key(parent) {
            return Err(TreeError::ParentNotFound(parent));
        }
        let id = self.insert(Some(parent), gadget);
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    /// Removes a gadget and its whole subtree, returning the gadget.
    pub fn remove(&mut self, id: GadgetId) -> TreeResult<BoxedPaintable> {
        let parent = self.nodes.get(id).ok_or(TreeError::NotFound(id))?.parent;
        let siblings = match parent {
            Some(parent) => &mut self.nodes[parent].children,
            None => &mut self.roots,
        };
        siblings.retain(|&k| k != id);

        let descendants: Vec<GadgetId> = self.descendants(id).collect();
        for key in descendants {
            self.nodes.remove(key);
        }

        self.nodes
            .remove(id)
            .map(|node| node.gadget)
            .ok_or(TreeError::NotFound(id))
    }

    /// Moves a gadget to the end of its sibling list so it paints above its
    /// siblings.
    pub fn pull_to_front(&mut self, id: GadgetId) -> TreeResult<()> {
        let parent = self.nodes.get(id).ok_or(TreeError::NotFound(id))?.parent;
        let siblings = match parent {
            Some(parent) => &mut self.nodes[parent].children,
            None => &mut self.roots,
        };
        siblings.retain(|&k| k != id);
        siblings.push(id);
        Ok(())
    }

    /// Returns a gadget.
    #[inline]
    pub fn get(&self, id: GadgetId) -> Option<&dyn Paintable> {
        self.nodes.get(id).map(|node| node.gadget.as_ref())
    }

    /// Returns a mutable gadget.
    #[inline]
    pub fn get_mut(&mut self, id: GadgetId) -> Option<&mut dyn Paintable> {
        self.nodes.get_mut(id).map(|node| node.gadget.as_mut())
    }

    /// Returns a gadget downcast to its concrete type.
    pub fn get_as<T: Paintable>(&self, id: GadgetId) -> Option<&T> {
        self.get(id)?.downcast_ref::<T>()
    }

    /// Returns a mutable gadget downcast to its concrete type.
    pub fn get_as_mut<T: Paintable>(&mut self, id: GadgetId) -> Option<&mut T> {
        self.get_mut(id)?.downcast_mut::<T>()
    }

    /// Returns the parent of a gadget, or `None` for top-level gadgets and
    /// unknown ids.
    #[inline]
    pub fn parent(&self, id: GadgetId) -> Option<GadgetId> {
        self.nodes.get(id)?.parent
    }

    /// Returns the children of a gadget in paint order.
    #[inline]
    pub fn children(&self, id: GadgetId) -> &[GadgetId] {
        self.nodes.get(id).map_or(&[], |node| &node.children)
    }

    /// Returns the top-level gadgets in paint order.
    #[inline]
    pub fn roots(&self) -> &[GadgetId] {
        &self.roots
    }

    /// Returns an iterator over a gadget's ancestors, nearest first.
    pub fn ancestors(&self, id: GadgetId) -> impl Iterator<Item = GadgetId> + '_ {
        std::iter::successors(self.parent(id), move |&key| self.parent(key))
    }

    /// Returns the absolute position of a gadget.
    pub fn absolute_position(&self, id: GadgetId) -> Option<Point> {
        let own = self.get(id)?.position();
        Some(
            self.ancestors(id)
                .filter_map(|key| self.get(key))
                .fold(own, |pos, gadget| pos + gadget.position()),
        )
    }

    /// Returns the absolute rectangle of a gadget.
    pub fn absolute_rect(&self, id: GadgetId) -> Option<Rect> {
        let size = self.get(id)?.size();
        Some(Rect::from_pos_size(self.absolute_position(id)?, size))
    }

    /// Iterates over every gadget in paint order (pre-order: parents before
    /// children, siblings in list order).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Iterates over every gadget front to back: the exact reverse of
    /// [`walk`](Self::walk). Children come before their parent and later
    /// siblings before earlier ones.
    pub fn walk_reverse(&self) -> impl Iterator<Item = GadgetId> + '_ {
        let order: Vec<GadgetId> = self.walk().collect();
        order.into_iter().rev()
    }

    /// Iterates over the descendants of a gadget in paint order, excluding the
    /// gadget itself.
    pub fn descendants(&self, id: GadgetId) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.children(id).iter().rev().copied().collect(),
        }
    }
}

/// Pre-order iterator over a [`GadgetTree`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    tree: &'a GadgetTree,
    stack: Vec<GadgetId>,
}

impl Iterator for Walk<'_> {
    type Item = GadgetId;

    fn next(&mut self) -> Option<GadgetId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
