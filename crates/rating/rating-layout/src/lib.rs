//! Star Rating Layout
//!
//! Pure geometry engine for row-wrapping star rating widgets.
//!
//! # Architecture
//!
//! - [`quantize`]: rating value + step -> quantized fill amount
//! - [`wrap`]: stars per row, row count and natural size
//! - [`align`]: per-row origin under a [`Gravity`]
//! - [`slots`]: slot positions and partial-fill geometry
//! - [`measure`]: natural size against host measurement constraints
//! - [`pass`]: one complete layout pass, recomputed from an immutable snapshot
//!
//! Nothing here draws. The output is a list of rectangles that a drawing
//! layer (see `rating-view`) paints in two layers: the empty icon in every
//! slot, then the full icon in the filled slots plus one clipped partial icon.
//!
//! # Example
//!
//! ```
//! use rating_layout::prelude::*;
//! use embedded_graphics::prelude::{Point, Size};
//!
//! let config = LayoutConfig::new(4, Size::new(40, 40)).spacing(10, 0);
//! let rating = RatingInput::new(3.0).max_rating(4.0);
//!
//! let pass = RatingLayout::compute(
//!     &config,
//!     &rating,
//!     MeasureSpec::at_most(400),
//!     MeasureSpec::unconstrained(),
//! );
//!
//! assert_eq!(pass.size, Size::new(190, 40));
//! assert_eq!(pass.slots[3].position, Point::new(150, 0));
//! assert_eq!(pass.fill.full_star_count, 3);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod fmt;

pub mod align;
pub mod config;
pub mod error;
pub mod gravity;
pub mod measure;
pub mod pass;
pub mod quantize;
pub mod slots;
pub mod wrap;

pub use config::{Edges, LayoutConfig, RatingInput};
pub use error::ConfigError;
pub use gravity::{Gravity, HorizontalGravity, VerticalGravity};
pub use measure::{MeasureMode, MeasureSpec, MeasuredSize};
pub use pass::{RatingLayout, MAX_STARS};
pub use slots::{FillResult, StarSlot};
pub use wrap::RowGeometry;

/// Glob import of the types needed for a layout pass.
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::ConfigError;
    pub use crate::gravity::*;
    pub use crate::measure::{MeasureMode, MeasureSpec, MeasuredSize};
    pub use crate::pass::{RatingLayout, MAX_STARS};
    pub use crate::slots::{FillResult, StarSlot};
    pub use crate::wrap::RowGeometry;
}
