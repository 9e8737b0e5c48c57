//! Star Rating View
//!
//! Draws a [`rating_layout`] pass onto any `embedded-graphics` `Gray4` target.
//!
//! # Components
//!
//! - [`StarIcon`](icon::StarIcon) - drawable for one star slot
//! - `ShapeStar`, `BlockIcon`, `BitmapIcon` - built-in icons
//! - [`RatingView`](view::RatingView) - widget holding config, icons and the cached pass
//!
//! # Example
//!
//! ```
//! use rating_view::prelude::*;
//! use embedded_graphics::{mock_display::MockDisplay, pixelcolor::Gray4, prelude::*};
//!
//! let mut view = RatingView::new()
//!     .empty_icon(BlockIcon::new(Size::new(8, 8), Gray4::new(0x4)))
//!     .full_icon(ShapeStar::new(8))
//!     .config(LayoutConfig::default().star_count(5).spacing(2, 2))
//!     .rating(RatingInput::new(3.5));
//!
//! let size = view.measure(MeasureSpec::at_most(64), MeasureSpec::unconstrained());
//! assert_eq!(size, Size::new(48, 8));
//!
//! let mut display: MockDisplay<Gray4> = MockDisplay::new();
//! display.set_allow_overdraw(true);
//! view.render(&mut display, Point::zero()).unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod fmt;

pub mod icon;
pub mod view;

pub use icon::{BitmapIcon, BlockIcon, ShapeStar, StarIcon};
pub use view::RatingView;

/// Widget, icons and the layout types needed to configure them.
pub mod prelude {
    pub use crate::icon::*;
    pub use crate::view::RatingView;
    pub use rating_layout::prelude::*;
}
