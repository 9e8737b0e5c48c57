//! Star slot positions and partial-fill geometry.
//!
//! Slots are produced in index order (row-major). Slot `i` sits in row
//! `i / stars_per_row`, column `i % stars_per_row`, offset from the row origin
//! by one icon pitch per column.
//!
//! The fill is drawn as two layers: the empty icon in every slot, then the
//! full icon in the first `full_star_count` slots plus one full icon clipped
//! to [`FillResult::partial_rect`]. Rectangular clipping gives an exact
//! partial fill for any icon shape filled left to right.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::align;
use crate::config::LayoutConfig;
use crate::wrap::RowGeometry;

/// One icon position in the wrapped grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StarSlot {
    /// Star index, `0..star_count`.
    pub index: u32,
    /// Row the star sits in.
    pub row: u32,
    /// Top-left corner of the icon.
    pub position: Point,
}

impl StarSlot {
    /// Icon rectangle for this slot.
    pub fn bounds(&self, icon_size: Size) -> Rectangle {
        Rectangle::new(self.position, icon_size)
    }
}

/// Position of slot `index`, or `None` past the last star.
// SAFETY: `row * stars_per_row <= index` because `row = index / stars_per_row`.
#[allow(clippy::arithmetic_side_effects)]
pub fn slot_at(
    index: u32,
    config: &LayoutConfig,
    geometry: &RowGeometry,
    bounds: Size,
) -> Option<StarSlot> {
    if index >= geometry.star_count || geometry.is_empty() {
        return None;
    }

    let row = geometry.row_of(index);
    let col = index - row * geometry.stars_per_row;
    let origin = align::row_origin(row, geometry, config, bounds);

    Some(StarSlot {
        index,
        row,
        position: Point::new(column_x(origin.x, col, config), origin.y),
    })
}

fn column_x(row_x: i32, col: u32, config: &LayoutConfig) -> i32 {
    let pitch = i64::from(config.icon_width).saturating_add(i64::from(config.horizontal_spacing));
    let x = i64::from(row_x).saturating_add(i64::from(col).saturating_mul(pitch));
    align::to_coord(x)
}

/// Iterator over every slot in index order.
///
/// Created by [`layout`]. The row origin is resolved once per row.
#[derive(Debug, Clone)]
pub struct Slots<'a> {
    config: &'a LayoutConfig,
    geometry: &'a RowGeometry,
    bounds: Size,
    next: u32,
    row: Option<(u32, Point)>,
}

/// Lays out every slot of `geometry` inside a view of size `bounds`.
///
/// # Example
///
/// ```
/// use rating_layout::config::LayoutConfig;
/// use rating_layout::slots::layout;
/// use rating_layout::wrap::RowGeometry;
/// use embedded_graphics::prelude::{Point, Size};
///
/// let config = LayoutConfig::new(4, Size::new(40, 40))
///     .spacing(10, 0)
///     .available_width(190);
/// let geometry = RowGeometry::compute(&config);
///
/// let xs: Vec<i32> = layout(&config, &geometry, geometry.natural_size())
///     .map(|slot| slot.position.x)
///     .collect();
/// assert_eq!(xs, [0, 50, 100, 150]);
/// ```
pub fn layout<'a>(config: &'a LayoutConfig, geometry: &'a RowGeometry, bounds: Size) -> Slots<'a> {
    Slots {
        config,
        geometry,
        bounds,
        next: 0,
        row: None,
    }
}

impl Iterator for Slots<'_> {
    type Item = StarSlot;

    #[allow(clippy::arithmetic_side_effects)] // see slot_at
    fn next(&mut self) -> Option<StarSlot> {
        if self.next >= self.geometry.star_count || self.geometry.is_empty() {
            return None;
        }

        let index = self.next;
        let row = self.geometry.row_of(index);
        let origin = match self.row {
            Some((cached, origin)) if cached == row => origin,
            _ => {
                let origin = align::row_origin(row, self.geometry, self.config, self.bounds);
                self.row = Some((row, origin));
                origin
            }
        };
        let col = index - row * self.geometry.stars_per_row;

        self.next = index.saturating_add(1);

        Some(StarSlot {
            index,
            row,
            position: Point::new(column_x(origin.x, col, self.config), origin.y),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.geometry.is_empty() {
            0
        } else {
            self.geometry.star_count.saturating_sub(self.next)
        };
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Slots<'_> {}

/// Which stars are filled, and the clip rectangle for the partial one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillResult {
    /// Stars drawn with the full icon, `0..=star_count`.
    pub full_star_count: u32,
    /// Filled fraction of slot `full_star_count`, in `[0, 1)`. Always zero
    /// when every star is full.
    pub partial_fraction: f32,
    /// Clip region for the partial star, in view coordinates. Zero width when
    /// `partial_fraction` is zero; [`Rectangle::zero`] when there is no
    /// partial slot at all.
    pub partial_rect: Rectangle,
}

impl FillResult {
    /// No fill.
    pub const EMPTY: Self = Self {
        full_star_count: 0,
        partial_fraction: 0.0,
        partial_rect: Rectangle::zero(),
    };

    /// True when a partial star must be drawn (at least one pixel wide).
    pub fn has_partial(&self) -> bool {
        self.partial_fraction > 0.0 && self.partial_rect.size.width > 0
    }
}

impl Default for FillResult {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Splits a quantized rating into full stars and one partial star.
///
/// `quantized` is clamped to `[0, star_count]` first. The partial clip width
/// is truncated to whole pixels.
///
/// # Example
///
/// ```
/// use rating_layout::config::LayoutConfig;
/// use rating_layout::slots::fill_geometry;
/// use rating_layout::wrap::RowGeometry;
/// use embedded_graphics::prelude::{Point, Size};
///
/// let config = LayoutConfig::new(5, Size::new(20, 20)).available_width(100);
/// let geometry = RowGeometry::compute(&config);
///
/// let fill = fill_geometry(2.5, &config, &geometry, geometry.natural_size());
/// assert_eq!(fill.full_star_count, 2);
/// assert_eq!(fill.partial_fraction, 0.5);
/// assert_eq!(fill.partial_rect.top_left, Point::new(40, 0));
/// assert_eq!(fill.partial_rect.size, Size::new(10, 20));
/// ```
#[allow(clippy::cast_precision_loss)] // star counts and icon widths are small
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // non-negative, truncation == floor
#[allow(clippy::arithmetic_side_effects)] // float arithmetic only
pub fn fill_geometry(
    quantized: f32,
    config: &LayoutConfig,
    geometry: &RowGeometry,
    bounds: Size,
) -> FillResult {
    if geometry.is_empty() {
        return FillResult::EMPTY;
    }

    let stars = geometry.star_count;
    let quantized = if quantized.is_nan() {
        0.0
    } else {
        quantized.clamp(0.0, stars as f32)
    };

    let full_star_count = (quantized as u32).min(stars);
    let Some(slot) = slot_at(full_star_count, config, geometry, bounds) else {
        // Every star is full; there is no slot left for a partial fill.
        return FillResult {
            full_star_count,
            partial_fraction: 0.0,
            partial_rect: Rectangle::zero(),
        };
    };

    let partial_fraction = quantized - full_star_count as f32;
    let width = ((partial_fraction * config.icon_width as f32) as u32).min(config.icon_width);

    FillResult {
        full_star_count,
        partial_fraction,
        partial_rect: Rectangle::new(slot.position, Size::new(width, config.icon_height)),
    }
}
