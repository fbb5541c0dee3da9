//! Frame diffing for minimal terminal updates.
//!
//! This module compares the canvas of the previous frame with the current one
//! and lists every cell that must be rewritten. Instead of redrawing the whole
//! screen, the terminal writer only emits the cells listed here.
//!
//! A cell changed if its [`Cell`] differs or either of its colors differs.
//! Changes are reported one per cell, in row-major order.

use gadget_tui_core::ColorPair;
use tracing::debug;

use crate::{Canvas, Cell, Grid};

/// A single cell change in the diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    /// Row of the change.
    pub row: u16,
    /// Column of the change.
    pub col: u16,
    /// The new cell value.
    pub cell: Cell,
    /// The new colors.
    pub colors: ColorPair,
}

impl CellChange {
    /// Creates a new cell change.
    #[inline]
    pub const fn new(row: u16, col: u16, cell: Cell, colors: ColorPair) -> Self {
        Self {
            row,
            col,
            cell,
            colors,
        }
    }
}

/// Result of comparing two canvases.
///
/// Contains the changes needed to turn the previous frame into the current one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferDiff {
    /// Changed cells, in row-major order.
    pub changes: Vec<CellChange>,
    /// Whether every cell is listed because there was no comparable previous
    /// frame.
    pub full_repaint: bool,
}

impl BufferDiff {
    /// Creates an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are no changes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns the number of changed cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns an iterator over the changes.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CellChange> {
        self.changes.iter()
    }

    /// Replays the changes onto a canvas. Changes outside the canvas are
    /// ignored.
    pub fn apply(&self, canvas: &mut Canvas) {
        for change in &self.changes {
            canvas.set(change.col, change.row, change.cell, change.colors);
        }
    }
}

impl<'a> IntoIterator for &'a BufferDiff {
    type Item = &'a CellChange;
    type IntoIter = std::slice::Iter<'a, CellChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

/// Marks every cell that differs between two canvases.
///
/// Returns `None` if the canvases have different shapes.
pub fn changed_mask(previous: &Canvas, current: &Canvas) -> Option<Grid<bool>> {
    if previous.size() != current.size() {
        return None;
    }

    let mut mask = Grid::new(current.size(), false);
    for y in 0..current.size().height {
        let rows = (
            previous.chars().row(y),
            current.chars().row(y),
            previous.colors().row(y),
            current.colors().row(y),
        );
        let (Some(prev_chars), Some(cur_chars), Some(prev_colors), Some(cur_colors)) = rows else {
            continue;
        };
        let Some(out) = mask.row_mut(y) else {
            continue;
        };
        let cells = prev_chars.iter().zip(cur_chars).zip(prev_colors.iter().zip(cur_colors));
        for (changed, ((pc, cc), (pp, cp))) in out.iter_mut().zip(cells) {
            *changed = pc != cc || pp != cp;
        }
    }
    Some(mask)
}

/// Computes the changes needed to turn `previous` into `current`.
///
/// A shape mismatch is treated as having no previous frame and yields a full
/// repaint.
///
/// # Examples
///
/// ```
/// use gadget_tui_buffer::{diff, Canvas, Cell};
/// use gadget_tui_core::{ColorPair, Size};
///
/// let previous = Canvas::new(Size::new(80, 24));
/// let mut current = previous.clone();
/// current.set(10, 5, Cell::new('H'), ColorPair::DEFAULT);
///
/// let diff = diff::compute(&previous, &current);
/// assert_eq!(diff.len(), 1);
/// assert_eq!((diff.changes[0].row, diff.changes[0].col), (5, 10));
/// ```
pub fn compute(previous: &Canvas, current: &Canvas) -> BufferDiff {
    let Some(mask) = changed_mask(previous, current) else {
        debug!(
            previous = ?previous.size(),
            current = ?current.size(),
            "canvas shape changed, repainting everything"
        );
        return compute_full(current);
    };

    let mut diff = BufferDiff::new();
    for (y, row) in mask.rows().enumerate() {
        let y = y as u16;
        for (x, _) in row.iter().enumerate().filter(|(_, changed)| **changed) {
            let x = x as u16;
            if let (Some(cell), Some(colors)) = (current.cell(x, y), current.color(x, y)) {
                diff.changes.push(CellChange::new(y, x, *cell, *colors));
            }
        }
    }

    debug!(changed = diff.len(), "computed frame diff");
    diff
}

/// Lists every cell of `current`.
pub fn compute_full(current: &Canvas) -> BufferDiff {
    let width = current.size().width.max(1) as usize;
    let changes = current
        .chars()
        .cells()
        .iter()
        .zip(current.colors().cells())
        .enumerate()
        .map(|(i, (cell, colors))| {
            CellChange::new((i / width) as u16, (i % width) as u16, *cell, *colors)
        })
        .collect();

    BufferDiff {
        changes,
        full_repaint: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gadget_tui_core::{Rgb, Size};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identical_canvases() {
        let canvas = Canvas::new(Size::new(8, 3));
        let diff = compute(&canvas, &canvas.clone());
        assert!(diff.is_empty());
        assert!(!diff.full_repaint);
    }

    #[test]
    fn test_single_changed_character() {
        let previous = Canvas::new(Size::new(8, 3));
        let mut current = previous.clone();
        current.set(6, 2, Cell::new('z'), ColorPair::DEFAULT);

        let diff = compute(&previous, &current);
        assert_eq!(
            diff.changes,
            vec![CellChange::new(2, 6, Cell::new('z'), ColorPair::DEFAULT)]
        );
    }

    #[test]
    fn test_color_only_change() {
        let previous = Canvas::new(Size::new(2, 1));
        let mut current = previous.clone();
        let pair = ColorPair::new(Rgb::WHITE, Rgb::new(0, 0, 1));
        current.set(1, 0, Cell::BLANK, pair);

        let diff = compute(&previous, &current);
        assert_eq!(diff.changes, vec![CellChange::new(0, 1, Cell::BLANK, pair)]);
    }

    #[test]
    fn test_changes_are_row_major_and_not_coalesced() {
        let previous = Canvas::new(Size::new(4, 2));
        let mut current = previous.clone();
        for (x, y) in [(3, 1), (0, 1), (1, 0), (2, 0)] {
            current.set(x, y, Cell::new('#'), ColorPair::DEFAULT);
        }

        let positions: Vec<(u16, u16)> = compute(&previous, &current)
            .iter()
            .map(|c| (c.row, c.col))
            .collect();
        assert_eq!(positions, vec![(0, 1), (0, 2), (1, 0), (1, 3)]);
    }

    #[test]
    fn test_invalidated_previous_repaints_every_cell_once() {
        let mut previous = Canvas::new(Size::new(5, 3));
        previous.invalidate();
        let current = Canvas::new(Size::new(5, 3));

        let diff = compute(&previous, &current);
        assert_eq!(diff.len(), 15);
        let mut positions: Vec<(u16, u16)> = diff.iter().map(|c| (c.row, c.col)).collect();
        positions.dedup();
        assert_eq!(positions.len(), 15);
    }

    #[test]
    fn test_shape_mismatch_is_full_repaint() {
        let previous = Canvas::new(Size::new(2, 2));
        let current = Canvas::new(Size::new(3, 2));
        assert!(changed_mask(&previous, &current).is_none());

        let diff = compute(&previous, &current);
        assert!(diff.full_repaint);
        assert_eq!(diff.len(), 6);
        assert_eq!(diff.changes[5].row, 1);
        assert_eq!(diff.changes[5].col, 2);
    }

    #[test]
    fn test_apply_reproduces_current() {
        let mut previous = Canvas::new(Size::new(4, 2));
        let mut current = previous.clone();
        current.set(0, 0, Cell::new('a'), ColorPair::new(Rgb::RED, Rgb::BLACK));
        current.set(3, 1, Cell::new('b'), ColorPair::DEFAULT);

        compute(&previous, &current).apply(&mut previous);
        assert_eq!(previous, current);
    }
}
