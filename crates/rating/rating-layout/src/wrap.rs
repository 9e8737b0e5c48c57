//! Row wrapping.
//!
//! Packs `n` icons on a row as long as
//!
//! ```text
//! n * icon_width + (n - 1) * spacing <= content_width
//! ```
//!
//! which rearranges to `n <= (content_width + spacing) / (icon_width + spacing)`.
//! The row count is the ceiling of `star_count / stars_per_row`, so an exact
//! multiple never produces a trailing empty row.
//!
//! # Example
//!
//! ```
//! use rating_layout::config::LayoutConfig;
//! use rating_layout::wrap::RowGeometry;
//! use embedded_graphics::prelude::Size;
//!
//! let config = LayoutConfig::new(10, Size::new(20, 20))
//!     .spacing(5, 0)
//!     .available_width(95);
//!
//! let geometry = RowGeometry::compute(&config);
//! assert_eq!(geometry.stars_per_row, 4);
//! assert_eq!(geometry.row_count, 3);
//! assert_eq!(geometry.row_star_span(2), 2);
//! ```

use embedded_graphics::prelude::Size;

use crate::config::LayoutConfig;

/// Result of wrapping the stars into rows.
///
/// An empty geometry (`stars_per_row == 0`) means "nothing to render".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowGeometry {
    /// Stars laid out, equal to the configured count.
    pub star_count: u32,
    /// Slots per full row.
    pub stars_per_row: u32,
    /// Number of rows; the last one may be partly occupied.
    pub row_count: u32,
    /// Width of the widest row plus horizontal padding, capped at the
    /// available width.
    pub natural_width: u32,
    /// Height of all rows plus vertical padding.
    pub natural_height: u32,
}

impl RowGeometry {
    /// Geometry that renders nothing.
    pub const EMPTY: Self = Self {
        star_count: 0,
        stars_per_row: 0,
        row_count: 0,
        natural_width: 0,
        natural_height: 0,
    };

    /// Wraps `config.star_count` stars into `config.available_width`.
    ///
    /// Returns [`RowGeometry::EMPTY`] when there are no stars, no icon size,
    /// no available width, or when padding consumes all of it. A content
    /// width narrower than one icon still gets one star per row (it overflows)
    /// so that row indexing never divides by zero.
    ///
    /// `stars_per_row` is capped at the star count. A width with room for
    /// more stars than exist reports one row of `star_count` stars, and
    /// `natural_width` covers only those stars rather than the empty tail.
    pub fn compute(config: &LayoutConfig) -> Self {
        let star_count = config.star_count;
        let budget = config
            .available_width
            .saturating_sub(config.padding.horizontal());

        if star_count == 0 || config.icon_width == 0 || config.icon_height == 0 || budget == 0 {
            return Self::EMPTY;
        }

        let pitch = config.icon_width.saturating_add(config.horizontal_spacing);
        let fits = budget
            .saturating_add(config.horizontal_spacing)
            .checked_div(pitch)
            .unwrap_or(0);
        let stars_per_row = fits.clamp(1, star_count);
        let row_count = star_count.div_ceil(stars_per_row);

        let natural_width = config
            .row_width(stars_per_row)
            .saturating_add(config.padding.horizontal())
            .min(config.available_width);
        let natural_height = config
            .rows_height(row_count)
            .saturating_add(config.padding.vertical());

        debug!(
            "row geometry: {} stars, {} per row, {} rows, natural {}x{}",
            star_count, stars_per_row, row_count, natural_width, natural_height
        );

        Self {
            star_count,
            stars_per_row,
            row_count,
            natural_width,
            natural_height,
        }
    }

    /// True when there is nothing to render.
    pub const fn is_empty(&self) -> bool {
        self.stars_per_row == 0
    }

    /// True when the stars wrap onto more than one row.
    pub const fn is_multi_line(&self) -> bool {
        self.row_count > 1
    }

    /// Natural size (padding included).
    pub const fn natural_size(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }

    /// Row that holds star `index`. Zero for an empty geometry.
    pub fn row_of(&self, index: u32) -> u32 {
        index.checked_div(self.stars_per_row).unwrap_or(0)
    }

    /// Number of stars occupying row `row`: `stars_per_row` for every row
    /// but possibly the last; zero past the last row.
    pub fn row_star_span(&self, row: u32) -> u32 {
        let first = row.saturating_mul(self.stars_per_row);
        self.star_count
            .saturating_sub(first)
            .min(self.stars_per_row)
    }
}
