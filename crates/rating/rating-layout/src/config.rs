//! Layout and rating inputs.
//!
//! Both types are plain immutable snapshots. A host that changes any field
//! builds a new snapshot and runs a new pass; nothing is patched in place.
//!
//! # Example
//!
//! ```
//! use rating_layout::config::*;
//! use rating_layout::gravity::Gravity;
//! use embedded_graphics::prelude::Size;
//!
//! let config = LayoutConfig::new(5, Size::new(24, 24))
//!     .spacing(4, 2)
//!     .padding(Edges::all(8))
//!     .available_width(120)
//!     .gravity(Gravity::CENTER);
//!
//! assert_eq!(config.icon_size(), Size::new(24, 24));
//! assert!(config.validate().is_ok());
//! ```

use embedded_graphics::prelude::Size;

use crate::error::ConfigError;
use crate::gravity::Gravity;
use crate::pass::MAX_STARS;
use crate::quantize;

/// Edge insets in pixels (padding around the star grid).
///
/// # Examples
///
/// ```
/// use rating_layout::config::Edges;
///
/// let edges = Edges::horizontal_vertical(24, 12);
/// assert_eq!(edges.left, 24);
/// assert_eq!(edges.right, 24);
/// assert_eq!(edges.top, 12);
/// assert_eq!(edges.bottom, 12);
/// assert_eq!(edges.horizontal(), 48);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Edges {
    /// Top edge inset in pixels.
    pub top: u32,

    /// Right edge inset in pixels.
    pub right: u32,

    /// Bottom edge inset in pixels.
    pub bottom: u32,

    /// Left edge inset in pixels.
    pub left: u32,
}

impl Edges {
    /// Creates edges with all sides set to the same value.
    pub const fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates edges with individual values for each side (CSS order).
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates edges with separate horizontal and vertical values.
    pub const fn horizontal_vertical(horizontal: u32, vertical: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns the total horizontal space (left + right).
    pub const fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Returns the total vertical space (top + bottom).
    pub const fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Geometry inputs for one layout pass.
///
/// `icon_width`/`icon_height` are the intrinsic size of the star icon. Zero
/// means "no icon resolved yet" and produces an empty layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Number of star slots.
    pub star_count: u32,

    /// Intrinsic icon width in pixels.
    pub icon_width: u32,

    /// Intrinsic icon height in pixels.
    pub icon_height: u32,

    /// Gap between stars on the same row.
    pub horizontal_spacing: u32,

    /// Gap between rows.
    pub vertical_spacing: u32,

    /// Insets around the star grid.
    pub padding: Edges,

    /// Width offered by the host, padding included.
    pub available_width: u32,

    /// Row alignment.
    pub gravity: Gravity,
}

impl LayoutConfig {
    /// Creates a config with the given star count and icon size. Everything
    /// else takes its default.
    pub const fn new(star_count: u32, icon_size: Size) -> Self {
        Self {
            star_count,
            icon_width: icon_size.width,
            icon_height: icon_size.height,
            horizontal_spacing: 0,
            vertical_spacing: 0,
            padding: Edges::all(0),
            available_width: 0,
            gravity: Gravity::START,
        }
    }

    /// Set the number of stars.
    pub const fn star_count(mut self, star_count: u32) -> Self {
        self.star_count = star_count;
        self
    }

    /// Set the icon's intrinsic size.
    pub const fn icon(mut self, icon_size: Size) -> Self {
        self.icon_width = icon_size.width;
        self.icon_height = icon_size.height;
        self
    }

    /// Set horizontal and vertical spacing.
    pub const fn spacing(mut self, horizontal: u32, vertical: u32) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    /// Set padding.
    pub const fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the width offered by the host.
    pub const fn available_width(mut self, width: u32) -> Self {
        self.available_width = width;
        self
    }

    /// Set gravity.
    pub const fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Icon intrinsic size.
    pub const fn icon_size(&self) -> Size {
        Size::new(self.icon_width, self.icon_height)
    }

    /// Width of `count` stars laid out on one row, spacing included, padding
    /// excluded. Zero for `count == 0`.
    pub const fn row_width(&self, count: u32) -> u32 {
        span(count, self.icon_width, self.horizontal_spacing)
    }

    /// Height of `rows` rows, spacing included, padding excluded.
    pub const fn rows_height(&self, rows: u32) -> u32 {
        span(rows, self.icon_height, self.vertical_spacing)
    }

    /// Checks that this config can produce a non-empty layout.
    ///
    /// A zero star count or zero available width is not an error (there is
    /// simply nothing to draw) and passes validation.
    ///
    /// [`ConfigError::NoContentWidth`] concerns `available_width` as used by
    /// [`RowGeometry::compute`](crate::wrap::RowGeometry::compute). A measured
    /// pass replaces that width with the host's, so the pass does not reject it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.icon_width == 0 || self.icon_height == 0 {
            return Err(ConfigError::ZeroIconSize {
                width: self.icon_width,
                height: self.icon_height,
            });
        }

        #[allow(clippy::cast_possible_truncation)] // MAX_STARS is a small constant
        let max_stars = MAX_STARS as u32;
        if self.star_count > max_stars {
            return Err(ConfigError::TooManyStars {
                requested: self.star_count,
            });
        }

        if self.available_width > 0 && self.padding.horizontal() >= self.available_width {
            return Err(ConfigError::NoContentWidth {
                available: self.available_width,
                padding: self.padding.horizontal(),
            });
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(5, Size::zero())
    }
}

/// `count` items of `item` pixels separated by `gap` pixels.
// SAFETY: `count - 1` is guarded by the zero check; the rest saturates.
#[allow(clippy::arithmetic_side_effects)]
const fn span(count: u32, item: u32, gap: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    count
        .saturating_mul(item)
        .saturating_add((count - 1).saturating_mul(gap))
}

/// Rating value inputs.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RatingInput {
    /// Raw rating value.
    pub rating: f32,

    /// Rating that maps to all stars full. `0.0` means "same as star count".
    pub max_rating: f32,

    /// Quantization step, in stars.
    pub step: f32,
}

impl RatingInput {
    /// Default quantization step (half stars).
    pub const DEFAULT_STEP: f32 = 0.5;

    /// Creates a rating with the default maximum and step.
    pub const fn new(rating: f32) -> Self {
        Self {
            rating,
            max_rating: 0.0,
            step: Self::DEFAULT_STEP,
        }
    }

    /// Set the maximum rating (`0.0` = star count).
    pub const fn max_rating(mut self, max_rating: f32) -> Self {
        self.max_rating = max_rating;
        self
    }

    /// Set the quantization step.
    pub const fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Checks step and maximum rating.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep);
        }
        if !self.max_rating.is_finite() || self.max_rating < 0.0 {
            return Err(ConfigError::InvalidMaxRating);
        }
        Ok(())
    }

    /// Quantized fill amount in stars, clamped to `[0, star_count]`.
    ///
    /// Invalid inputs quantize to `0.0`.
    pub fn quantized(&self, star_count: u32) -> f32 {
        if let Err(_e) = self.validate() {
            warn!("rating input rejected: {}", _e);
            return 0.0;
        }

        #[allow(clippy::cast_precision_loss)] // star counts are small
        let max = star_count as f32;
        quantize::quantize(self.rating, self.max_rating, star_count, self.step).clamp(0.0, max)
    }
}

impl Default for RatingInput {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_constructors() {
        let e = Edges::all(4);
        assert_eq!(e, Edges::new(4, 4, 4, 4));
        assert_eq!(e.horizontal(), 8);
        assert_eq!(e.vertical(), 8);

        let e = Edges::new(1, 2, 3, 4);
        assert_eq!(e.horizontal(), 6);
        assert_eq!(e.vertical(), 4);

        assert_eq!(Edges::default(), Edges::all(0));
    }

    #[test]
    fn test_edges_saturate() {
        let e = Edges::horizontal_vertical(u32::MAX, 0);
        assert_eq!(e.horizontal(), u32::MAX);
    }

    #[test]
    fn test_layout_config_defaults() {
        let c = LayoutConfig::default();
        assert_eq!(c.star_count, 5);
        assert_eq!(c.icon_size(), Size::zero());
        assert_eq!(c.horizontal_spacing, 0);
        assert_eq!(c.vertical_spacing, 0);
        assert_eq!(c.gravity, Gravity::START);
    }

    #[test]
    fn test_layout_config_builder() {
        let c = LayoutConfig::new(3, Size::new(10, 12))
            .spacing(2, 5)
            .padding(Edges::all(1))
            .available_width(50)
            .star_count(4)
            .icon(Size::new(11, 12));

        assert_eq!(c.star_count, 4);
        assert_eq!(c.icon_width, 11);
        assert_eq!(c.horizontal_spacing, 2);
        assert_eq!(c.vertical_spacing, 5);
        assert_eq!(c.available_width, 50);
    }

    #[test]
    fn test_row_width_and_height() {
        let c = LayoutConfig::new(4, Size::new(20, 10)).spacing(5, 3);
        assert_eq!(c.row_width(0), 0);
        assert_eq!(c.row_width(1), 20);
        assert_eq!(c.row_width(4), 95);
        assert_eq!(c.rows_height(0), 0);
        assert_eq!(c.rows_height(3), 36);
    }

    #[test]
    fn test_validate_zero_icon() {
        let c = LayoutConfig::new(5, Size::new(0, 24));
        assert_eq!(
            c.validate(),
            Err(ConfigError::ZeroIconSize {
                width: 0,
                height: 24
            })
        );
    }

    #[test]
    fn test_validate_too_many_stars() {
        let c = LayoutConfig::new(65, Size::new(8, 8));
        assert_eq!(
            c.validate(),
            Err(ConfigError::TooManyStars { requested: 65 })
        );
        assert!(LayoutConfig::new(64, Size::new(8, 8)).validate().is_ok());
    }

    #[test]
    fn test_validate_padding_consumes_width() {
        let c = LayoutConfig::new(5, Size::new(8, 8))
            .padding(Edges::horizontal_vertical(10, 0))
            .available_width(20);
        assert_eq!(
            c.validate(),
            Err(ConfigError::NoContentWidth {
                available: 20,
                padding: 20
            })
        );

        // Zero available width is "nothing to render", not an error.
        assert!(c.available_width(0).validate().is_ok());
    }

    #[test]
    fn test_rating_input_defaults() {
        let r = RatingInput::default();
        assert_eq!(r.rating, 0.0);
        assert_eq!(r.max_rating, 0.0);
        assert_eq!(r.step, 0.5);
    }

    #[test]
    fn test_rating_input_validate() {
        assert!(RatingInput::new(1.0).validate().is_ok());
        assert_eq!(
            RatingInput::new(1.0).step(0.0).validate(),
            Err(ConfigError::InvalidStep)
        );
        assert_eq!(
            RatingInput::new(1.0).step(-0.5).validate(),
            Err(ConfigError::InvalidStep)
        );
        assert_eq!(
            RatingInput::new(1.0).step(f32::NAN).validate(),
            Err(ConfigError::InvalidStep)
        );
        assert_eq!(
            RatingInput::new(1.0).max_rating(-1.0).validate(),
            Err(ConfigError::InvalidMaxRating)
        );
    }

    #[test]
    fn test_quantized_clamps_to_star_count() {
        // Step 2 rounds 5 up to 6; clamped back to 5.
        let r = RatingInput::new(5.0).step(2.0);
        assert_eq!(r.quantized(5), 5.0);
    }

    #[test]
    fn test_quantized_invalid_is_zero() {
        let r = RatingInput::new(3.0).step(0.0);
        assert_eq!(r.quantized(5), 0.0);
    }
}
