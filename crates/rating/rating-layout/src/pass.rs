//! One complete layout pass.
//!
//! A pass is a pure function of a [`LayoutConfig`], a [`RatingInput`] and the
//! host's measurement constraints. It never fails: invalid inputs produce the
//! degenerate (empty) layout and a warning. Nothing in a finished
//! [`RatingLayout`] is patched later; a changed input means a new pass.

use embedded_graphics::prelude::Size;
use heapless::Vec;

use crate::config::{LayoutConfig, RatingInput};
use crate::error::ConfigError;
use crate::measure::{self, MeasureSpec, MeasuredSize};
use crate::slots::{self, FillResult, StarSlot};
use crate::wrap::RowGeometry;

/// Maximum number of stars in one pass.
///
/// This is a compile-time constant to enable `no_std` compatibility. A larger
/// star count produces the degenerate layout.
pub const MAX_STARS: usize = 64;

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingLayout {
    /// Resolved view size.
    pub size: Size,
    /// Wrapped row geometry.
    pub geometry: RowGeometry,
    /// Every slot in index order.
    pub slots: Vec<StarSlot, MAX_STARS>,
    /// Filled stars and partial clip.
    pub fill: FillResult,
    /// Quantized rating in stars, `[0, star_count]`.
    pub quantized: f32,
}

impl RatingLayout {
    /// Layout that renders nothing.
    pub const fn degenerate() -> Self {
        Self {
            size: Size::zero(),
            geometry: RowGeometry::EMPTY,
            slots: Vec::new(),
            fill: FillResult::EMPTY,
            quantized: 0.0,
        }
    }

    /// Measures and lays out `config`, then fills it from `rating`.
    ///
    /// `config.available_width` is replaced by the width resolved from `width`.
    pub fn compute(
        config: &LayoutConfig,
        rating: &RatingInput,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Self {
        if !accept(config, rating) {
            return Self::degenerate();
        }
        Self::place(config, rating, measure::measure(config, width, height))
    }

    /// Lays out an already measured config.
    ///
    /// Slots are placed inside `measured.size()`, which may differ from the
    /// geometry's natural size when the host imposed an exact size.
    pub fn arrange(config: &LayoutConfig, rating: &RatingInput, measured: MeasuredSize) -> Self {
        if !accept(config, rating) {
            return Self::degenerate();
        }
        Self::place(config, rating, measured)
    }

    fn place(config: &LayoutConfig, rating: &RatingInput, measured: MeasuredSize) -> Self {
        if measured.geometry.is_empty() {
            debug!("no room for stars in {}x{}", measured.width, measured.height);
            return Self {
                size: measured.size(),
                ..Self::degenerate()
            };
        }

        let size = measured.size();
        let geometry = measured.geometry;

        // `accept` bounds the star count by MAX_STARS, so every push fits.
        let mut slot_list = Vec::new();
        for slot in slots::layout(config, &geometry, size) {
            if slot_list.push(slot).is_err() {
                break;
            }
        }

        let quantized = rating.quantized(geometry.star_count);
        let fill = slots::fill_geometry(quantized, config, &geometry, size);

        debug!(
            "layout pass: {}x{}, {} slots, {} full, partial width {}",
            size.width,
            size.height,
            slot_list.len(),
            fill.full_star_count,
            fill.partial_rect.size.width
        );

        Self {
            size,
            geometry,
            slots: slot_list,
            fill,
            quantized,
        }
    }

    /// Same geometry with a new rating.
    ///
    /// Only the fill is recomputed; slot positions are reused. `config` must
    /// be the config this layout was computed from. An empty layout has no
    /// geometry to refill and is returned unchanged; run a new pass instead.
    pub fn refilled(&self, config: &LayoutConfig, rating: &RatingInput) -> Self {
        if self.geometry.is_empty() {
            return self.clone();
        }
        if let Err(_e) = rating.validate() {
            warn!("degenerate layout: {}", _e);
            return Self {
                size: self.size,
                ..Self::degenerate()
            };
        }

        let quantized = rating.quantized(self.geometry.star_count);
        let fill = slots::fill_geometry(quantized, config, &self.geometry, self.size);

        Self {
            fill,
            quantized,
            ..self.clone()
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stars per full row (zero when empty).
    pub const fn stars_per_row(&self) -> u32 {
        self.geometry.stars_per_row
    }

    /// Slots drawn with the full icon.
    pub fn full_slots(&self) -> impl Iterator<Item = &StarSlot> + '_ {
        let full = usize::try_from(self.fill.full_star_count).unwrap_or(usize::MAX);
        self.slots.iter().take(full)
    }

    /// Slot that receives the clipped partial icon, if one is drawn.
    pub fn partial_slot(&self) -> Option<&StarSlot> {
        if !self.fill.has_partial() {
            return None;
        }
        let index = usize::try_from(self.fill.full_star_count).ok()?;
        self.slots.get(index)
    }
}

impl Default for RatingLayout {
    fn default() -> Self {
        Self::degenerate()
    }
}

/// Validates both inputs, logging the reason for a rejection.
///
/// The configured available width is not checked; the measured width
/// replaces it.
fn accept(config: &LayoutConfig, rating: &RatingInput) -> bool {
    match config.validate() {
        Ok(()) | Err(ConfigError::NoContentWidth { .. }) => {}
        Err(_e) => {
            warn!("degenerate layout: {}", _e);
            return false;
        }
    }

    if let Err(_e) = rating.validate() {
        warn!("degenerate layout: {}", _e);
        return false;
    }

    true
}
