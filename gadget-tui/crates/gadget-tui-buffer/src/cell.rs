//! Character cell representation.
//!
//! A [`Cell`] is the character half of a terminal position: the glyph, its
//! attributes and its display width. Colors live in a separate grid (see
//! [`Canvas`](crate::Canvas)) so graphics can repaint colors without touching
//! glyphs.

use gadget_tui_core::TextAttributes;
use unicode_width::UnicodeWidthChar;

/// Glyph used by half-block graphics: foreground is the upper pixel, background
/// the lower one.
pub const HALF_BLOCK: char = '▀';

/// A single character cell.
///
/// # Wide Characters
///
/// Characters that occupy two columns (CJK, most emoji) are stored with
/// `width = 2` in their first cell and a continuation cell (`width = 0`) in the
/// next column.
///
/// # Examples
///
/// ```
/// use gadget_tui_buffer::Cell;
/// use gadget_tui_core::TextAttributes;
///
/// let cell = Cell::new('A').with_attributes(TextAttributes::BOLD);
/// assert_eq!(cell.width, 1);
/// assert_eq!(Cell::new('漢').width, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The character displayed in this cell.
    pub character: char,

    /// Text rendering attributes (bold, italic, etc.).
    pub attributes: TextAttributes,

    /// Display width of this cell.
    ///
    /// - `1`: Normal single-width character
    /// - `2`: Wide character - this is the first cell
    /// - `0`: Continuation cell of a wide character
    pub width: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// A space with no attributes.
    pub const BLANK: Self = Self {
        character: ' ',
        attributes: TextAttributes::NONE,
        width: 1,
    };

    /// Marker written into invalidated buffers. Never produced by painting, so
    /// every cell compares as changed against it.
    pub const SENTINEL: Self = Self {
        character: '\u{FFFF}',
        attributes: TextAttributes::NONE,
        width: 1,
    };

    /// Creates a cell for `character`, measuring its display width.
    ///
    /// Control and zero-width characters are given width 1 so they still occupy
    /// their cell.
    #[inline]
    pub fn new(character: char) -> Self {
        let width = character.width().unwrap_or(1).clamp(1, 2) as u8;
        Self {
            character,
            attributes: TextAttributes::NONE,
            width,
        }
    }

    /// Creates a continuation cell for the second column of a wide character.
    #[inline]
    pub const fn continuation() -> Self {
        Self {
            character: ' ',
            attributes: TextAttributes::NONE,
            width: 0,
        }
    }

    /// Sets the text attributes.
    #[inline]
    pub const fn with_attributes(self, attributes: TextAttributes) -> Self {
        Self { attributes, ..self }
    }

    /// Returns true if this is a continuation cell (part of a wide character).
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }

    /// Returns true if this is a wide character (width > 1).
    #[inline]
    pub const fn is_wide(&self) -> bool {
        self.width > 1
    }

    /// Returns true if the glyph draws nothing (a space or a blank braille
    /// pattern).
    #[inline]
    pub const fn is_blank(&self) -> bool {
        matches!(self.character, ' ' | '\u{2800}')
    }
}

impl From<char> for Cell {
    #[inline]
    fn from(character: char) -> Self {
        Self::new(character)
    }
}
