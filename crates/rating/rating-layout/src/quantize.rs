//! Step quantization of a raw rating.
//!
//! The rating is clamped to `[0, max]`, rescaled from the rating domain into
//! the star domain, then snapped to the nearest multiple of `step` with
//! halves rounding up.
//!
//! ```
//! use rating_layout::quantize::quantize;
//!
//! assert_eq!(quantize(3.24, 5.0, 5, 0.5), 3.0);
//! assert_eq!(quantize(3.25, 5.0, 5, 0.5), 3.5);
//!
//! // A 0..10 score shown on five stars.
//! assert_eq!(quantize(7.0, 10.0, 5, 0.5), 3.5);
//! ```

/// Quantizes `rating` into a fill amount measured in stars.
///
/// - `max_rating == 0.0` means the rating is already in stars
///   (maximum = `star_count`).
/// - A non-positive or non-finite `step`, or a NaN rating, yields `0.0`.
///
/// The result can exceed `star_count` by less than one step when rounding
/// pushes it up; callers clamp (see [`RatingInput::quantized`]).
///
/// [`RatingInput::quantized`]: crate::config::RatingInput::quantized
#[allow(clippy::cast_precision_loss)] // star counts are small
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // ratio >= 0, truncation == floor
#[allow(clippy::arithmetic_side_effects)] // float arithmetic, no overflow traps
pub fn quantize(rating: f32, max_rating: f32, star_count: u32, step: f32) -> f32 {
    if !step.is_finite() || step <= 0.0 || rating.is_nan() {
        return 0.0;
    }

    let stars = star_count as f32;
    let effective_max = if max_rating != 0.0 { max_rating } else { stars };
    if !effective_max.is_finite() || effective_max <= 0.0 {
        return 0.0;
    }

    let clamped = rating.clamp(0.0, effective_max);
    let scaled = clamped * stars / effective_max;

    let ratio = scaled / step;
    let whole = ratio as u32;
    let multiple = if ratio - whole as f32 >= 0.5 {
        whole.saturating_add(1)
    } else {
        whole
    };

    multiple as f32 * step
}
