//! Truecolor types for the cell grids.
//!
//! Terminal cells carry 24-bit colors, so channels are stored as `u8`:
//! - [`Rgb`]: an opaque color
//! - [`Rgba`]: a color with an alpha channel, used for textures
//! - [`ColorPair`]: the foreground and background of a cell
//!
//! # Examples
//!
//! ```
//! use gadget_tui_core::color::{ColorPair, Rgb, Rgba};
//!
//! let red = Rgb::from_hex("#FF0000").unwrap();
//! let pair = ColorPair::new(red, Rgb::BLACK);
//!
//! // 50% transparent white over black.
//! let overlay = Rgba::new(255, 255, 255, 128);
//! let blended = overlay.blend_over(pair.bg, 1.0);
//! assert_eq!(blended, Rgb::new(128, 128, 128));
//! ```

use std::fmt;

use crate::error::ColorParseError;

/// An opaque 24-bit color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb(#{:02X}{:02X}{:02X})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Rgb {
    /// Black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (#FFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red (#FF0000).
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green (#00FF00).
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue (#0000FF).
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Creates a color from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns this color with the given alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }

    /// Parses a color from a hex string.
    ///
    /// Accepts `#RGB` and `#RRGGBB`; the `#` prefix is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        match parse_hex(hex)? {
            (rgb, None) => Ok(rgb),
            (_, Some(_)) => Err(ColorParseError::InvalidLength(
                hex.trim_start_matches('#').len(),
            )),
        }
    }

    /// Moves each channel toward `target` by the fraction `t` (clamped to `0..=1`).
    #[inline]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| {
            let from = f32::from(from);
            (from + (f32::from(to) - from) * t).round() as u8
        };
        Self {
            r: channel(self.r, target.r),
            g: channel(self.g, target.g),
            b: channel(self.b, target.b),
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A 24-bit color with an 8-bit alpha channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component (255 is opaque).
    pub a: u8,
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rgba(#{:02X}{:02X}{:02X}{:02X})",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a color from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the color without its alpha channel.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Returns whether the alpha channel is 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Parses a color from a hex string.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`; the `#` prefix is
    /// optional and missing alpha is opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let (rgb, a) = parse_hex(hex)?;
        Ok(rgb.with_alpha(a.unwrap_or(u8::MAX)))
    }

    /// Composites this color over an opaque background.
    ///
    /// The effective opacity is this color's alpha scaled by `alpha`, so
    /// `alpha = 1.0` uses the color's own alpha and `alpha = 0.0` leaves the
    /// background untouched.
    #[inline]
    pub fn blend_over(self, background: Rgb, alpha: f32) -> Rgb {
        background.lerp(self.rgb(), f32::from(self.a) / 255.0 * alpha)
    }
}

impl From<Rgb> for Rgba {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(u8::MAX)
    }
}

/// Foreground and background color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorPair {
    /// Foreground (glyph) color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
}

impl ColorPair {
    /// White on black.
    pub const DEFAULT: Self = Self::new(Rgb::WHITE, Rgb::BLACK);

    /// Creates a color pair.
    #[inline]
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }

    /// Returns the pair with foreground and background swapped.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self::new(self.bg, self.fg)
    }
}

fn parse_hex(hex: &str) -> Result<(Rgb, Option<u8>), ColorParseError> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if hex.is_empty() {
        return Err(ColorParseError::EmptyInput);
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexChar);
    }

    let digit = |i: usize| -> u8 {
        // All bytes are ASCII hex digits here.
        (hex.as_bytes()[i] as char).to_digit(16).unwrap_or(0) as u8
    };

    let (rgb, a) = match hex.len() {
        3 | 4 => {
            let short = |i: usize| digit(i) * 17;
            let a = (hex.len() == 4).then(|| short(3));
            (Rgb::new(short(0), short(1), short(2)), a)
        }
        6 | 8 => {
            let long = |i: usize| digit(i) * 16 + digit(i + 1);
            let a = (hex.len() == 8).then(|| long(6));
            (Rgb::new(long(0), long(2), long(4)), a)
        }
        len => return Err(ColorParseError::InvalidLength(len)),
    };

    Ok((rgb, a))
}
