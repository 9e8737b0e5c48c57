//! Per-row alignment.
//!
//! Resolves the top-left corner of the first slot in a row from the gravity,
//! the wrapped geometry and the final view size. Horizontal gravity is applied
//! per row (a short last row is centred or end-aligned on its own span);
//! vertical gravity places the whole block of rows.
//!
//! All arithmetic is integer with truncating division, so an odd remainder
//! biases a centred row towards the start/top edge. Positions may be negative
//! when the content is wider or taller than the view.
//!
//! # Example
//!
//! ```
//! use rating_layout::align::row_origin;
//! use rating_layout::config::LayoutConfig;
//! use rating_layout::gravity::{Gravity, HorizontalGravity, VerticalGravity};
//! use rating_layout::wrap::RowGeometry;
//! use embedded_graphics::prelude::{Point, Size};
//!
//! let config = LayoutConfig::new(3, Size::new(10, 10))
//!     .available_width(100)
//!     .gravity(Gravity::new(HorizontalGravity::End, VerticalGravity::Top));
//! let geometry = RowGeometry::compute(&config);
//!
//! let origin = row_origin(0, &geometry, &config, Size::new(100, 10));
//! assert_eq!(origin, Point::new(70, 0));
//! ```

use embedded_graphics::prelude::{Point, Size};

use crate::config::LayoutConfig;
use crate::gravity::{HorizontalGravity, VerticalGravity};
use crate::wrap::RowGeometry;

/// Top-left corner of the first slot in `row`, inside a view of size `bounds`.
pub fn row_origin(row: u32, geometry: &RowGeometry, config: &LayoutConfig, bounds: Size) -> Point {
    Point::new(
        row_x(row, geometry, config, bounds.width),
        row_y(row, geometry, config, bounds.height),
    )
}

/// X coordinate of the first slot in `row`.
// SAFETY: all operands are widened to i64 from u32 pixel values; sums and
// differences of a handful of u32 values cannot overflow i64.
#[allow(clippy::arithmetic_side_effects)]
pub fn row_x(row: u32, geometry: &RowGeometry, config: &LayoutConfig, view_width: u32) -> i32 {
    let padding = config.padding;
    let content = i64::from(config.row_width(geometry.row_star_span(row)));

    let x = match config.gravity.horizontal {
        HorizontalGravity::Start => i64::from(padding.left),
        HorizontalGravity::Center => {
            let start = i64::from(padding.left);
            let end = i64::from(view_width) - i64::from(padding.right);
            (start + end) / 2 - content / 2
        }
        HorizontalGravity::End => {
            i64::from(view_width) - i64::from(padding.right) - content
        }
    };

    to_coord(x)
}

/// Y coordinate of every slot in `row`.
// SAFETY: see `row_x`; `row <= row_count` keeps `row_count - row` in range and
// it is computed with saturating_sub anyway.
#[allow(clippy::arithmetic_side_effects)]
pub fn row_y(row: u32, geometry: &RowGeometry, config: &LayoutConfig, view_height: u32) -> i32 {
    let padding = config.padding;
    let pitch = i64::from(config.icon_height) + i64::from(config.vertical_spacing);
    let row_offset = i64::from(row) * pitch;

    let y = match config.gravity.vertical {
        VerticalGravity::Top => i64::from(padding.top) + row_offset,
        VerticalGravity::Center => {
            let content = i64::from(config.rows_height(geometry.row_count));
            let top = i64::from(padding.top);
            let bottom = i64::from(view_height) - i64::from(padding.bottom);
            let first_row = (top + bottom) / 2 - content / 2;
            first_row + row_offset
        }
        VerticalGravity::Bottom => {
            let rows_below = geometry.row_count.saturating_sub(row);
            i64::from(view_height)
                - i64::from(padding.bottom)
                - i64::from(config.rows_height(rows_below))
        }
    };

    to_coord(y)
}

/// Saturates a pixel coordinate into `i32`, keeping its sign.
pub(crate) fn to_coord(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Edges;
    use crate::gravity::Gravity;

    /// 10 stars of 20x10, spacing 5/4, padding 2 all round, 99 wide:
    /// budget 95 -> 4 per row, 3 rows (4, 4, 2).
    fn setup(gravity: Gravity) -> (LayoutConfig, RowGeometry) {
        let config = LayoutConfig::new(10, Size::new(20, 10))
            .spacing(5, 4)
            .padding(Edges::all(2))
            .available_width(99)
            .gravity(gravity);
        let geometry = RowGeometry::compute(&config);
        assert_eq!((geometry.stars_per_row, geometry.row_count), (4, 3));
        (config, geometry)
    }

    fn gravity(h: HorizontalGravity, v: VerticalGravity) -> Gravity {
        Gravity::new(h, v)
    }

    #[test]
    fn test_start_top() {
        let (c, g) = setup(Gravity::START);
        assert_eq!(row_origin(0, &g, &c, Size::new(99, 42)), Point::new(2, 2));
        assert_eq!(row_origin(1, &g, &c, Size::new(99, 42)), Point::new(2, 16));
        assert_eq!(row_origin(2, &g, &c, Size::new(99, 42)), Point::new(2, 30));
    }

    #[test]
    fn test_center_horizontal_per_row() {
        let (c, g) = setup(gravity(HorizontalGravity::Center, VerticalGravity::Top));
        // Full row: content 95, center (2 + 97) / 2 = 49 -> 49 - 47 = 2.
        assert_eq!(row_x(0, &g, &c, 99), 2);
        // Last row of 2: content 45 -> 49 - 22 = 27.
        assert_eq!(row_x(2, &g, &c, 99), 27);
    }

    #[test]
    fn test_end_horizontal_per_row() {
        let (c, g) = setup(gravity(HorizontalGravity::End, VerticalGravity::Top));
        assert_eq!(row_x(0, &g, &c, 99), 2);
        // 99 - 2 - 45 = 52.
        assert_eq!(row_x(2, &g, &c, 99), 52);
    }

    #[test]
    fn test_center_vertical() {
        let (c, g) = setup(gravity(HorizontalGravity::Start, VerticalGravity::Center));
        // Content 3*10 + 2*4 = 38; view 60: center (2 + 58) / 2 = 30 -> 30 - 19 = 11.
        assert_eq!(row_y(0, &g, &c, 60), 11);
        assert_eq!(row_y(1, &g, &c, 60), 25);
        assert_eq!(row_y(2, &g, &c, 60), 39);
    }

    #[test]
    fn test_bottom_vertical() {
        let (c, g) = setup(gravity(HorizontalGravity::Start, VerticalGravity::Bottom));
        // Last row ends at 60 - 2 = 58 -> starts at 48.
        assert_eq!(row_y(2, &g, &c, 60), 48);
        assert_eq!(row_y(1, &g, &c, 60), 34);
        assert_eq!(row_y(0, &g, &c, 60), 20);
    }

    #[test]
    fn test_natural_height_makes_all_vertical_gravities_agree() {
        let view_height = 42; // natural height: 38 + 4 padding
        for v in [VerticalGravity::Top, VerticalGravity::Center, VerticalGravity::Bottom] {
            let (c, g) = setup(gravity(HorizontalGravity::Start, v));
            assert_eq!(g.natural_height, view_height);
            assert_eq!(row_y(0, &g, &c, view_height), 2);
            assert_eq!(row_y(2, &g, &c, view_height), 30);
        }
    }

    #[test]
    fn test_center_truncates_towards_start() {
        // One 3px star in a 10px view: center 5, 5 - 3/2 = 4.
        let c = LayoutConfig::new(1, Size::new(3, 3))
            .available_width(10)
            .gravity(Gravity::CENTER);
        let g = RowGeometry::compute(&c);
        assert_eq!(row_origin(0, &g, &c, Size::new(10, 10)), Point::new(4, 4));
    }

    #[test]
    fn test_overflowing_content_goes_negative() {
        // One 40px star forced into a 20px view.
        let c = LayoutConfig::new(1, Size::new(40, 40))
            .available_width(20)
            .gravity(Gravity::END);
        let g = RowGeometry::compute(&c);
        assert_eq!(row_origin(0, &g, &c, Size::new(20, 20)), Point::new(-20, -20));
    }
}
