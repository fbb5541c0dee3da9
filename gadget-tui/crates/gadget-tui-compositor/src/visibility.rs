//! Occlusion resolution and hit-testing.
//!
//! A gadget's visible region is its rectangle, clipped by its parent's clip,
//! minus everything covered by opaque gadgets painted after it. The same
//! regions answer "which gadget is under this point", so what is drawn and what
//! is clickable always agree.

use slotmap::SecondaryMap;
use tracing::debug;

use gadget_tui_core::{Point, Rect, Region, Size};

use crate::options::RenderMode;
use crate::tree::{GadgetId, GadgetTree};

/// Per-frame visible regions of every gadget in a tree.
///
/// Recomputed from scratch every frame by [`VisibilityMap::resolve`]; gadgets
/// never store their own regions.
#[derive(Debug, Clone, Default)]
pub struct VisibilityMap {
    regions: SecondaryMap<GadgetId, Region>,
    origins: SecondaryMap<GadgetId, Point>,
    background: Region,
}

impl VisibilityMap {
    /// Resolves the visible region of every gadget on a screen of `screen`
    /// size.
    ///
    /// Two passes are made over the tree. The first, in paint order, clips each
    /// gadget to its parent; disabled or invisible gadgets get an empty region,
    /// and so does their subtree. The second, front to back, removes from each
    /// gadget what opaque gadgets above it already cover. [`RenderMode::Painter`]
    /// skips the second pass.
    pub fn resolve(tree: &GadgetTree, screen: Size, mode: RenderMode) -> Self {
        let screen = Region::from_rect(Rect::from_size(screen));
        let mut map = Self::default();

        for id in tree.walk() {
            let Some(gadget) = tree.get(id) else {
                continue;
            };
            let parent = tree.parent(id);
            let parent_origin = parent
                .and_then(|p| map.origins.get(p).copied())
                .unwrap_or(Point::ZERO);
            let origin = parent_origin + gadget.position();

            let clip = if gadget.is_enabled() && gadget.is_visible() {
                let parent_clip = parent.and_then(|p| map.regions.get(p)).unwrap_or(&screen);
                parent_clip & &Region::from_pos_size(origin, gadget.size())
            } else {
                Region::new()
            };

            map.origins.insert(id, origin);
            map.regions.insert(id, clip);
        }

        let mut remaining = screen;
        for id in tree.walk_reverse() {
            let (Some(gadget), Some(region)) = (tree.get(id), map.regions.get_mut(id)) else {
                continue;
            };
            let opaque = !gadget.is_transparent();

            match mode {
                RenderMode::Regions if opaque => *region = remaining.divmod(region),
                RenderMode::Regions => *region &= &remaining,
                RenderMode::Painter if opaque => remaining -= &*region,
                RenderMode::Painter => {}
            }
        }
        map.background = remaining;

        debug!(
            gadgets = map.regions.len(),
            hidden = map.regions.values().filter(|r| r.is_empty()).count(),
            ?mode,
            "resolved visibility"
        );
        map
    }

    /// Returns the visible region of a gadget, or `None` if it was not in the
    /// tree when resolved.
    #[inline]
    pub fn region(&self, id: GadgetId) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Returns the absolute position of a gadget's origin.
    #[inline]
    pub fn origin(&self, id: GadgetId) -> Option<Point> {
        self.origins.get(id).copied()
    }

    /// Returns the part of the screen no opaque gadget covers.
    #[inline]
    pub fn background(&self) -> &Region {
        &self.background
    }

    /// Returns whether the gadget shows anything.
    #[inline]
    pub fn is_visible(&self, id: GadgetId) -> bool {
        self.regions.get(id).is_some_and(|r| !r.is_empty())
    }

    /// Returns whether `point` lies in the visible region of the gadget or of
    /// any of its descendants.
    pub fn collides_point(&self, tree: &GadgetTree, id: GadgetId, point: Point) -> bool {
        let hits = |key: GadgetId| self.regions.get(key).is_some_and(|r| r.contains(point));
        hits(id) || tree.descendants(id).any(hits)
    }

    /// Returns the topmost gadget whose visible region contains `point`.
    pub fn gadget_at(&self, tree: &GadgetTree, point: Point) -> Option<GadgetId> {
        tree.walk_reverse()
            .find(|&id| self.regions.get(id).is_some_and(|r| r.contains(point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SolidFill;
    use pretty_assertions::assert_eq;

    fn fill(x: i32, y: i32, w: u16, h: u16) -> SolidFill {
        SolidFill::new(Point::new(x, y), Size::new(w, h))
    }

    fn rect_region(x: i32, y: i32, w: u16, h: u16) -> Region {
        Region::from_pos_size(Point::new(x, y), Size::new(w, h))
    }

    const SCREEN: Size = Size::new(20, 10);

    #[test]
    fn test_fully_covered_gadget_is_hidden() {
        let mut tree = GadgetTree::new();
        let below = tree.add_root(fill(0, 0, 10, 10));
        let above = tree.add_root(fill(0, 0, 10, 10));

        let map = VisibilityMap::resolve(&tree, SCREEN, RenderMode::Regions);
        assert!(map.region(below).unwrap().is_empty());
        assert!(!map.is_visible(below));
        assert_eq!(map.region(above), Some(&rect_region(0, 0, 10, 10)));
        assert_eq!(map.background(), &rect_region(10, 0, 10, 10));
    }

    #[test]
    fn test_transparent_cover_keeps_region() {
        let mut tree = GadgetTree::new();
        let below = tree.add_root(fill(0, 0, 10, 10));
        tree.add_root(fill(0, 0, 10, 10).transparent(true));

        let map = VisibilityMap::resolve(&tree, SCREEN, RenderMode::Regions);
        assert_eq!(map.region(below), Some(&rect_region(0, 0, 10, 10)));
    }

    #[test]
    fn test_partial_overlap() {
        let mut tree = GadgetTree::new();
        let below = tree.add_root(fill(0, 0, 6, 6));
        let above = tree.add_root(fill(3, 3, 6, 6));

        let map = VisibilityMap::resolve(&tree, SCREEN, RenderMode::Regions);
        let expected = &rect_region(0, 0, 6, 6) - &rect_region(3, 3, 6, 6);
        assert_eq!(map.region(below), Some(&expected));
        assert_eq!(map.region(above), Some(&rect_region(3, 3, 6, 6)));
    }

    #[test]
    fn test_children_clipped_to_parent_and_cover_it() {
        let mut tree = GadgetTree::new();
        let parent = tree.add_root(fill(2, 2, 6, 4));
        let child = tree.add_child(parent, fill(4, 1, 6, 2)).unwrap();

        let map = VisibilityMap::resolve(&tree, SCREEN, RenderMode::Regions);
        // The child starts at (6, 3) and is cut at the parent's right edge (8).
        assert_eq!(map.region(child), Some(&rect_region(6, 3, 2, 2)));
        assert_eq!(map.origin(child), Some(Point::new(6, 3)));
        assert_eq!(
            map.region(parent),
            Some(&(&rect_region(2, 2, 6, 4) - &rect_region(6, 3, 2, 2)))
        );
    }

    #[test]
    fn test_clipped_to_screen() {
        let mut tree = GadgetTree::new();
        let id = tree.add_root(fill(-2, 8, 5, 5));
        let map = VisibilityMap::resolve(&tree, SCREEN, RenderMode::Regions);
        assert_eq!(map.region(id), Some(&rect_region(0, 8, 3, 2)));
    }

    #[test]
    fn test_disabled_and_invisible_subtrees_are_empty() {
        let mut tree = GadgetTree::new();
        let below = tree.add_root(fill(0, 0, 10, 10));
        let hidden = tree.add_root(fill(0, 0, 10, 10).visible(false));
        let hidden_child = tree.add_child(hidden, fill(0, 0, 2, 2)).unwrap();
        let disabled = tree.add_root(fill(0, 0, 4, 4).enabled(false));

        let map = VisibilityMap::resolve(&tree, SCREEN, RenderMode::Regions);
        assert_eq!(map.region(below), Some(&rect_region(0, 0, 10, 10)));
        assert!(map.region(hidden).unwrap().is_empty());
        assert!(map.region(hidden_child).unwrap().is_empty());
        assert!(map.region(disabled).unwrap().is_empty());
    }

    #[test]
    fn test_painter_mode_keeps_clips() {
        let mut tree = GadgetTree::new();
        let below = tree.add_root(fill(0, 0, 10, 10));
        tree.add_root(fill(0, 0, 10, 10));

        let map = VisibilityMap::resolve(&tree, SCREEN, RenderMode::Painter);
        assert_eq!(map.region(below), Some(&rect_region(0, 0, 10, 10)));
        assert_eq!(map.background(), &rect_region(10, 0, 10, 10));
    }

    #[test]
    fn test_hit_testing() {
        let mut tree = GadgetTree::new();
        let window = tree.add_root(fill(0, 0, 10, 10));
        let button = tree.add_child(window, fill(1, 1, 3, 1)).unwrap();
        let popup = tree.add_root(fill(2, 0, 4, 4));
        let overlay = tree.add_root(fill(0, 0, 20, 10).transparent(true).enabled(false));

        let map = VisibilityMap::resolve(&tree, SCREEN, RenderMode::Regions);

        assert_eq!(map.gadget_at(&tree, Point::new(1, 1)), Some(button));
        assert_eq!(map.gadget_at(&tree, Point::new(3, 1)), Some(popup));
        assert_eq!(map.gadget_at(&tree, Point::new(8, 8)), Some(window));
        assert_eq!(map.gadget_at(&tree, Point::new(15, 5)), None);
        assert!(!map.is_visible(overlay));

        assert!(map.collides_point(&tree, window, Point::new(1, 1)));
        assert!(!map.collides_point(&tree, window, Point::new(3, 1)));
        assert!(map.collides_point(&tree, button, Point::new(1, 1)));
        assert!(!map.collides_point(&tree, button, Point::new(0, 1)));
    }
}
