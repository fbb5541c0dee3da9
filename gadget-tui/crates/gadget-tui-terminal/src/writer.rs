//! VT100 encoding of frame diffs.

use std::io::Write;

use crossterm::{
    cursor::{MoveTo, RestorePosition, SavePosition},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use tracing::trace;

use gadget_tui_buffer::{BufferDiff, Canvas, Cell, CellChange};
use gadget_tui_core::{ColorPair, Result, Rgb, TextAttributes};

const ATTRIBUTES: [(TextAttributes, Attribute); 6] = [
    (TextAttributes::BOLD, Attribute::Bold),
    (TextAttributes::ITALIC, Attribute::Italic),
    (TextAttributes::UNDERLINE, Attribute::Underlined),
    (TextAttributes::REVERSE, Attribute::Reverse),
    (TextAttributes::STRIKETHROUGH, Attribute::CrossedOut),
    (TextAttributes::OVERLINE, Attribute::OverLined),
];

#[inline]
const fn to_crossterm(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Writes frame diffs to a terminal as escape sequences.
///
/// Each changed cell is written independently: cursor move, attribute reset,
/// attributes, truecolor foreground and background, then the glyph. The cursor
/// position is saved before the frame and restored after it, so the frame can
/// be drawn without disturbing whatever the application does with the cursor.
///
/// # Examples
///
/// ```
/// use gadget_tui_buffer::{diff, Canvas, Cell};
/// use gadget_tui_core::{ColorPair, Size};
/// use gadget_tui_terminal::AnsiWriter;
///
/// let previous = Canvas::new(Size::new(4, 2));
/// let mut current = previous.clone();
/// current.set(2, 1, Cell::new('x'), ColorPair::DEFAULT);
///
/// let mut writer = AnsiWriter::new(Vec::new());
/// writer.write_diff(&diff::compute(&previous, &current), &current).unwrap();
///
/// let output = String::from_utf8(writer.into_inner()).unwrap();
/// assert!(output.contains("\x1b[2;3H"));
/// assert!(output.ends_with("x\x1b8"));
/// ```
#[derive(Debug)]
pub struct AnsiWriter<W: Write> {
    out: W,
}

impl<W: Write> AnsiWriter<W> {
    /// Wraps an output stream.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns a reference to the output stream.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Returns a mutable reference to the output stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Unwraps the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes the changes of `diff` and flushes.
    ///
    /// `frame` is the canvas the diff was computed against. It is consulted
    /// for wide characters: a changed continuation cell repaints the wide glyph
    /// that owns it, and a wide glyph whose second column was overwritten is
    /// drawn as a space.
    pub fn write_diff(&mut self, diff: &BufferDiff, frame: &Canvas) -> Result<()> {
        if diff.is_empty() {
            return Ok(());
        }

        queue!(self.out, SavePosition)?;
        for change in diff {
            self.write_change(change, frame)?;
        }
        queue!(self.out, RestorePosition)?;
        self.out.flush()?;

        trace!(
            changes = diff.len(),
            full_repaint = diff.full_repaint,
            "flushed frame"
        );
        Ok(())
    }

    fn write_change(&mut self, change: &CellChange, frame: &Canvas) -> Result<()> {
        let CellChange {
            row,
            col,
            cell,
            colors,
        } = *change;

        if cell.is_continuation() {
            let owner = col
                .checked_sub(1)
                .and_then(|x| Some((x, frame.cell(x, row)?, frame.color(x, row)?)));
            return match owner {
                Some((x, owner, owner_colors)) if owner.is_wide() => {
                    self.write_cell(row, x, *owner, *owner_colors)
                }
                _ => self.write_cell(row, col, Cell::BLANK, colors),
            };
        }

        if cell.is_wide() {
            let completed = col
                .checked_add(1)
                .and_then(|x| frame.cell(x, row))
                .is_some_and(Cell::is_continuation);
            if !completed {
                let blank = Cell::BLANK.with_attributes(cell.attributes);
                return self.write_cell(row, col, blank, colors);
            }
        }

        self.write_cell(row, col, cell, colors)
    }

    fn write_cell(&mut self, row: u16, col: u16, cell: Cell, colors: ColorPair) -> Result<()> {
        queue!(self.out, MoveTo(col, row), SetAttribute(Attribute::Reset))?;
        for (flag, attribute) in ATTRIBUTES {
            if cell.attributes.contains(flag) {
                queue!(self.out, SetAttribute(attribute))?;
            }
        }
        queue!(
            self.out,
            SetForegroundColor(to_crossterm(colors.fg)),
            SetBackgroundColor(to_crossterm(colors.bg)),
            Print(cell.character),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gadget_tui_buffer::diff;
    use gadget_tui_core::Size;
    use pretty_assertions::assert_eq;

    fn render(previous: &Canvas, current: &Canvas) -> String {
        let mut writer = AnsiWriter::new(Vec::new());
        writer
            .write_diff(&diff::compute(previous, current), current)
            .unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_diff_writes_nothing() {
        let canvas = Canvas::new(Size::new(3, 3));
        assert_eq!(render(&canvas, &canvas), "");
    }

    #[test]
    fn test_single_cell_encoding() {
        let previous = Canvas::new(Size::new(4, 4));
        let mut current = previous.clone();
        current.set(
            1,
            2,
            Cell::new('A').with_attributes(TextAttributes::BOLD | TextAttributes::OVERLINE),
            ColorPair::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)),
        );

        assert_eq!(
            render(&previous, &current),
            "\x1b7\x1b[3;2H\x1b[0m\x1b[1m\x1b[53m\x1b[38;2;1;2;3m\x1b[48;2;4;5;6mA\x1b8"
        );
    }

    #[test]
    fn test_changes_written_in_row_major_order() {
        let previous = Canvas::new(Size::new(3, 2));
        let mut current = previous.clone();
        current.set(0, 1, Cell::new('b'), ColorPair::DEFAULT);
        current.set(2, 0, Cell::new('a'), ColorPair::DEFAULT);

        let output = render(&previous, &current);
        let a = output.find("\x1b[1;3H").unwrap();
        let b = output.find("\x1b[2;1H").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_changed_continuation_repaints_wide_owner() {
        let mut previous = Canvas::new(Size::new(3, 1));
        previous.set(0, 0, Cell::new('漢'), ColorPair::DEFAULT);
        previous.set(1, 0, Cell::new('x'), ColorPair::DEFAULT);

        let mut current = Canvas::new(Size::new(3, 1));
        current.set(0, 0, Cell::new('漢'), ColorPair::DEFAULT);
        current.set(1, 0, Cell::continuation(), ColorPair::DEFAULT);

        let output = render(&previous, &current);
        assert!(output.contains("\x1b[1;1H"));
        assert!(output.contains('漢'));
        assert!(!output.contains("\x1b[1;2H"));
    }

    #[test]
    fn test_orphaned_continuation_prints_space() {
        let mut previous = Canvas::new(Size::new(3, 1));
        previous.set(1, 0, Cell::new('x'), ColorPair::DEFAULT);
        let mut current = Canvas::new(Size::new(3, 1));
        current.set(1, 0, Cell::continuation(), ColorPair::DEFAULT);

        let output = render(&previous, &current);
        assert!(output.contains("\x1b[1;2H"));
        assert!(output.ends_with(" \x1b8"));
    }

    #[test]
    fn test_clipped_wide_char_prints_space() {
        let previous = Canvas::new(Size::new(2, 1));
        let mut current = previous.clone();
        current.set(1, 0, Cell::new('漢'), ColorPair::DEFAULT);

        let output = render(&previous, &current);
        assert!(!output.contains('漢'));
        assert!(output.ends_with(" \x1b8"));
    }
}
