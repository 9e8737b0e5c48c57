//! Measurement against host size constraints.
//!
//! Hosts describe the space they offer per axis with a [`MeasureSpec`]:
//!
//! - **Exact**: the view is this size, whatever it wants
//! - **AtMost**: the view may be up to this size
//! - **Unconstrained**: the view picks its natural size
//!
//! Measuring is a two-step process. The width is resolved first, using the
//! width of all stars on a single row as the natural width. The stars are then
//! wrapped into the resolved width, and the resulting natural height is
//! resolved against the height spec.
//!
//! # Example
//!
//! ```rust
//! use rating_layout::config::LayoutConfig;
//! use rating_layout::measure::{measure, MeasureSpec};
//! use embedded_graphics::prelude::Size;
//!
//! let config = LayoutConfig::new(10, Size::new(20, 20)).spacing(5, 5);
//!
//! // Single row would be 245px wide; the host offers at most 95.
//! let measured = measure(&config, MeasureSpec::at_most(95), MeasureSpec::unconstrained());
//!
//! assert_eq!(measured.width, 95);
//! assert_eq!(measured.geometry.stars_per_row, 4);
//! assert_eq!(measured.height, 3 * 20 + 2 * 5);
//! ```

use embedded_graphics::prelude::Size;

use crate::config::LayoutConfig;
use crate::wrap::RowGeometry;

/// How a [`MeasureSpec`] size constrains one axis.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasureMode {
    /// The axis is exactly `size`.
    Exact,
    /// The axis is at most `size`.
    AtMost,
    /// The axis takes its natural size; `size` is ignored.
    #[default]
    Unconstrained,
}

/// One axis of the host's measurement constraints.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureSpec {
    /// Constraint mode.
    pub mode: MeasureMode,
    /// Size in pixels (ignored when unconstrained).
    pub size: u32,
}

impl MeasureSpec {
    /// The axis must be exactly `size` pixels.
    pub const fn exact(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size,
        }
    }

    /// The axis may be up to `size` pixels.
    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// The axis takes its natural size.
    pub const fn unconstrained() -> Self {
        Self {
            mode: MeasureMode::Unconstrained,
            size: 0,
        }
    }

    /// Resolves a natural size against this constraint.
    ///
    /// ```rust
    /// use rating_layout::measure::MeasureSpec;
    ///
    /// assert_eq!(MeasureSpec::exact(50).resolve(80), 50);
    /// assert_eq!(MeasureSpec::exact(50).resolve(20), 50);
    /// assert_eq!(MeasureSpec::at_most(50).resolve(80), 50);
    /// assert_eq!(MeasureSpec::at_most(50).resolve(20), 20);
    /// assert_eq!(MeasureSpec::unconstrained().resolve(80), 80);
    /// ```
    pub const fn resolve(&self, natural: u32) -> u32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::AtMost => {
                if natural < self.size {
                    natural
                } else {
                    self.size
                }
            }
            MeasureMode::Unconstrained => natural,
        }
    }
}

/// Result of measuring a config against host constraints.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct MeasuredSize {
    /// Resolved width, padding included.
    pub width: u32,
    /// Resolved height, padding included.
    pub height: u32,
    /// Row geometry computed against the resolved width.
    pub geometry: RowGeometry,
}

impl MeasuredSize {
    /// Zero size, empty geometry.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
        geometry: RowGeometry::EMPTY,
    };

    /// Resolved size.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Width of every star on one row, padding included.
pub fn single_row_width(config: &LayoutConfig) -> u32 {
    config
        .row_width(config.star_count)
        .saturating_add(config.padding.horizontal())
}

/// Measures `config` against the host's width and height constraints.
///
/// `config.available_width` is ignored; the resolved width takes its place.
/// A config with no stars or no icon size measures as zero on both axes.
pub fn measure(config: &LayoutConfig, width: MeasureSpec, height: MeasureSpec) -> MeasuredSize {
    if config.star_count == 0 || config.icon_width == 0 || config.icon_height == 0 {
        return MeasuredSize::ZERO;
    }

    let resolved_width = width.resolve(single_row_width(config));
    let geometry = RowGeometry::compute(&config.available_width(resolved_width));
    let resolved_height = height.resolve(geometry.natural_height);

    debug!(
        "measured {}x{} ({} per row, {} rows)",
        resolved_width, resolved_height, geometry.stars_per_row, geometry.row_count
    );

    MeasuredSize {
        width: resolved_width,
        height: resolved_height,
        geometry,
    }
}
