//! Text attributes for terminal cells.

use bitflags::bitflags;
use smallvec::SmallVec;
use std::fmt;

bitflags! {
    /// Text decoration attributes as a compact bitfield.
    ///
    /// These attributes can be combined using bitwise operations:
    ///
    /// ```
    /// use gadget_tui_core::style::TextAttributes;
    ///
    /// let attrs = TextAttributes::BOLD | TextAttributes::UNDERLINE;
    /// assert!(attrs.contains(TextAttributes::BOLD));
    /// assert!(attrs.contains(TextAttributes::UNDERLINE));
    /// assert!(!attrs.contains(TextAttributes::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextAttributes: u8 {
        /// Bold/bright text.
        const BOLD          = 0b0000_0001;
        /// Italic text.
        const ITALIC        = 0b0000_0010;
        /// Underlined text.
        const UNDERLINE     = 0b0000_0100;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0000_1000;
        /// Overlined text (not supported by every terminal).
        const OVERLINE      = 0b0001_0000;
        /// Reverse/inverse video (swap fg and bg colors).
        const REVERSE       = 0b0010_0000;
    }
}

impl TextAttributes {
    /// No attributes set (alias for `empty()`).
    pub const NONE: Self = Self::empty();

    /// Returns the ANSI SGR codes for these attributes.
    ///
    /// - Bold: 1
    /// - Italic: 3
    /// - Underline: 4
    /// - Reverse: 7
    /// - Strikethrough: 9
    /// - Overline: 53
    pub fn to_ansi_codes(self) -> SmallVec<[u8; 6]> {
        const CODES: [(TextAttributes, u8); 6] = [
            (TextAttributes::BOLD, 1),
            (TextAttributes::ITALIC, 3),
            (TextAttributes::UNDERLINE, 4),
            (TextAttributes::REVERSE, 7),
            (TextAttributes::STRIKETHROUGH, 9),
            (TextAttributes::OVERLINE, 53),
        ];

        CODES
            .iter()
            .filter(|(attr, _)| self.contains(*attr))
            .map(|&(_, code)| code)
            .collect()
    }
}

impl fmt::Display for TextAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                write!(f, "+")?;
            }
            write!(f, "{}", name.to_ascii_lowercase())?;
            first = false;
        }
        Ok(())
    }
}
