//! Core types for `Gadget TUI`.
//!
//! This crate provides the value types the rest of the framework is built on:
//!
//! - [`geometry`]: 2D integer primitives (Point, Size, Rect)
//! - [`region`]: band-based regions with a boolean set algebra
//! - [`color`]: truecolor RGB/RGBA values and cell color pairs
//! - [`style`]: text attributes (bold, italic, etc.)
//! - [`error`]: Error types for the core library
//!
//! # Examples
//!
//! ## Working with Regions
//!
//! ```
//! use gadget_tui_core::{Point, Rect, Region, Size};
//!
//! let screen = Region::from_rect(Rect::from_size(Size::new(80, 24)));
//! let dialog = Region::from_pos_size(Point::new(20, 5), Size::new(40, 10));
//!
//! // Whatever the dialog leaves uncovered.
//! let behind = &screen - &dialog;
//! assert_eq!(behind.area(), 80 * 24 - 40 * 10);
//! assert!(!behind.contains(Point::new(30, 10)));
//!
//! // Regions decompose into disjoint rectangles.
//! for rect in behind.rects() {
//!     assert!(screen.contains_rect(rect));
//! }
//! ```
//!
//! ## Working with Colors
//!
//! ```
//! use gadget_tui_core::{ColorPair, Rgb};
//!
//! let pair = ColorPair::new(Rgb::from_hex("#FF8000").unwrap(), Rgb::BLACK);
//! assert_eq!(pair.reversed().fg, Rgb::BLACK);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod region;
pub mod style;

// Re-export commonly used types at the crate root for convenience
pub use color::{ColorPair, Rgb, Rgba};
pub use error::{ColorParseError, Error, GeometryError, RegionError, Result};
pub use geometry::{Point, Rect, Size};
pub use region::{Band, Region, SetOp};
pub use style::TextAttributes;
