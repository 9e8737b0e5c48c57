//! Star rating widget.
//!
//! Holds the configuration snapshot, the two icons and the cached layout
//! pass. Every `set_*` call replaces part of the snapshot and marks the cache
//! stale; nothing is recomputed until the next [`RatingView::measure`],
//! [`RatingView::layout`] or [`RatingView::render`].
//!
//! Rating changes (`rating`, `max_rating`, `step`) only refill the cached
//! pass. Anything that moves slots (star count, spacing, padding, gravity,
//! icons) re-runs the whole pass against the last measurement constraints.

use embedded_graphics::{pixelcolor::Gray4, prelude::*};
use rating_layout::{
    Edges, Gravity, LayoutConfig, MeasureSpec, RatingInput, RatingLayout,
};

use crate::icon::StarIcon;

/// What the cached pass is missing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Stale {
    Clean,
    Fill,
    Layout,
}

/// Row-wrapping star rating widget.
///
/// `E` draws the empty layer in every slot, `F` draws the filled layer on
/// top. Either may be absent; a missing layer is skipped. Layout uses the
/// empty icon's size, or the full icon's when only that one is set.
#[derive(Debug)]
pub struct RatingView<E, F> {
    config: LayoutConfig,
    rating: RatingInput,
    empty: Option<E>,
    full: Option<F>,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
    pass: RatingLayout,
    stale: Stale,
}

impl<E: StarIcon, F: StarIcon> RatingView<E, F> {
    /// Create a view with default settings and no icons.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
            rating: RatingInput::default(),
            empty: None,
            full: None,
            width_spec: MeasureSpec::unconstrained(),
            height_spec: MeasureSpec::unconstrained(),
            pass: RatingLayout::degenerate(),
            stale: Stale::Layout,
        }
    }

    /// Set the icon drawn in every slot.
    pub fn empty_icon(mut self, icon: E) -> Self {
        self.set_empty_icon(Some(icon));
        self
    }

    /// Set the icon drawn over filled slots.
    pub fn full_icon(mut self, icon: F) -> Self {
        self.set_full_icon(Some(icon));
        self
    }

    /// Replace the layout config. Its icon size is ignored; the icons decide.
    pub fn config(mut self, config: LayoutConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Set the rating input.
    pub fn rating(mut self, rating: RatingInput) -> Self {
        self.set_rating_input(rating);
        self
    }

    /// Current layout config, with the icon size taken from the icons.
    pub fn layout_config(&self) -> LayoutConfig {
        self.config.icon(self.icon_size())
    }

    /// Current rating input.
    pub fn rating_input(&self) -> RatingInput {
        self.rating
    }

    /// Size layout works with: empty icon, else full icon, else zero.
    pub fn icon_size(&self) -> Size {
        match (&self.empty, &self.full) {
            (Some(icon), _) => icon.size(),
            (None, Some(icon)) => icon.size(),
            (None, None) => Size::zero(),
        }
    }

    /// Set or clear the empty-layer icon.
    pub fn set_empty_icon(&mut self, icon: Option<E>) {
        self.empty = icon;
        self.invalidate(Stale::Layout);
    }

    /// Set or clear the full-layer icon.
    pub fn set_full_icon(&mut self, icon: Option<F>) {
        self.full = icon;
        self.invalidate(Stale::Layout);
    }

    /// Replace every geometry input at once.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.invalidate(Stale::Layout);
    }

    /// Set the number of stars.
    pub fn set_star_count(&mut self, star_count: u32) {
        self.config = self.config.star_count(star_count);
        self.invalidate(Stale::Layout);
    }

    /// Set horizontal and vertical spacing.
    pub fn set_spacing(&mut self, horizontal: u32, vertical: u32) {
        self.config = self.config.spacing(horizontal, vertical);
        self.invalidate(Stale::Layout);
    }

    /// Set padding.
    pub fn set_padding(&mut self, padding: Edges) {
        self.config = self.config.padding(padding);
        self.invalidate(Stale::Layout);
    }

    /// Set gravity.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.config = self.config.gravity(gravity);
        self.invalidate(Stale::Layout);
    }

    /// Replace the whole rating input.
    pub fn set_rating_input(&mut self, rating: RatingInput) {
        self.rating = rating;
        self.invalidate(Stale::Fill);
    }

    /// Set the rating value.
    pub fn set_rating(&mut self, rating: f32) {
        self.rating.rating = rating;
        self.invalidate(Stale::Fill);
    }

    /// Set the maximum rating (`0.0` = star count).
    pub fn set_max_rating(&mut self, max_rating: f32) {
        self.rating = self.rating.max_rating(max_rating);
        self.invalidate(Stale::Fill);
    }

    /// Set the quantization step.
    pub fn set_step(&mut self, step: f32) {
        self.rating = self.rating.step(step);
        self.invalidate(Stale::Fill);
    }

    fn invalidate(&mut self, stale: Stale) {
        self.stale = self.stale.max(stale);
    }

    /// True when the cached pass no longer matches the inputs.
    pub fn is_stale(&self) -> bool {
        self.stale != Stale::Clean
    }

    /// Measures against the host's constraints and caches the pass.
    ///
    /// The constraints are remembered for later relayouts.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.width_spec = width;
        self.height_spec = height;
        self.relayout();
        self.pass.size
    }

    /// Brings the cached pass up to date and returns it.
    pub fn layout(&mut self) -> &RatingLayout {
        match self.stale {
            Stale::Clean => {}
            // An empty pass has no slots to refill.
            Stale::Fill if self.pass.geometry.is_empty() => self.relayout(),
            Stale::Fill => {
                self.pass = self.pass.refilled(&self.layout_config(), &self.rating);
                self.stale = Stale::Clean;
            }
            Stale::Layout => self.relayout(),
        }
        &self.pass
    }

    fn relayout(&mut self) {
        self.pass = RatingLayout::compute(
            &self.layout_config(),
            &self.rating,
            self.width_spec,
            self.height_spec,
        );
        self.stale = Stale::Clean;
    }

    /// Stars per full row in the cached pass.
    pub fn stars_per_row(&self) -> u32 {
        self.pass.stars_per_row()
    }

    /// Size of the cached pass.
    pub fn size(&self) -> Size {
        self.pass.size
    }

    /// Updates the cached pass if needed, then draws it at `position`.
    pub fn render<D>(&mut self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        self.layout();
        self.draw(display, position)
    }

    /// Draws the cached pass as-is at `position`.
    ///
    /// Empty icons go in every slot, full icons in the filled slots, then one
    /// full icon clipped to the partial rectangle.
    pub fn draw<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let pass = &self.pass;
        let mut target = display.translated(position);

        let mut _empty_drawn = 0u32;
        if let Some(icon) = &self.empty {
            for slot in &pass.slots {
                icon.draw(&mut target, slot.position)?;
                _empty_drawn = _empty_drawn.saturating_add(1);
            }
        }

        let mut _full_drawn = 0u32;
        if let Some(icon) = &self.full {
            for slot in pass.full_slots() {
                icon.draw(&mut target, slot.position)?;
                _full_drawn = _full_drawn.saturating_add(1);
            }

            if let Some(slot) = pass.partial_slot() {
                let mut clipped = target.clipped(&pass.fill.partial_rect);
                icon.draw(&mut clipped, slot.position)?;
                debug!(
                    "partial star {} clipped to {} px",
                    slot.index, pass.fill.partial_rect.size.width
                );
            }
        }

        trace!("drew {} empty, {} full", _empty_drawn, _full_drawn);
        Ok(())
    }
}

impl<E: StarIcon, F: StarIcon> Default for RatingView<E, F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::BlockIcon;

    type View = RatingView<BlockIcon, BlockIcon>;

    fn block(size: u32) -> BlockIcon {
        BlockIcon::new(Size::new(size, size), Gray4::BLACK)
    }

    fn view() -> View {
        View::new()
            .empty_icon(block(10))
            .full_icon(block(10))
            .config(LayoutConfig::default().star_count(4).spacing(2, 2))
            .rating(RatingInput::new(2.0))
    }

    #[test]
    fn test_defaults() {
        let view = View::new();
        assert_eq!(view.layout_config().star_count, 5);
        assert_eq!(view.rating_input().step, 0.5);
        assert_eq!(view.icon_size(), Size::zero());
        assert!(view.is_stale());
    }

    #[test]
    fn test_icon_size_prefers_empty_icon() {
        let view = View::new().empty_icon(block(8)).full_icon(block(12));
        assert_eq!(view.icon_size(), Size::new(8, 8));

        let view = View::new().full_icon(block(12));
        assert_eq!(view.icon_size(), Size::new(12, 12));
    }

    #[test]
    fn test_measure_caches_pass() {
        let mut view = view();
        let size = view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
        assert_eq!(size, Size::new(46, 10));
        assert_eq!(view.stars_per_row(), 4);
        assert!(!view.is_stale());
    }

    #[test]
    fn test_rating_change_only_refills() {
        let mut view = view();
        view.measure(MeasureSpec::exact(60), MeasureSpec::exact(30));
        let slots = view.layout().slots.clone();

        view.set_rating(3.5);
        assert!(view.is_stale());
        let pass = view.layout();
        assert_eq!(pass.slots, slots);
        assert_eq!(pass.size, Size::new(60, 30));
        assert_eq!(pass.fill.full_star_count, 3);
    }

    #[test]
    fn test_rating_recovers_after_invalid_step() {
        let mut view = view();
        view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
        assert_eq!(view.layout().slots.len(), 4);

        view.set_step(0.0);
        assert!(view.layout().is_empty());

        view.set_step(0.5);
        let pass = view.layout();
        assert_eq!(pass.slots.len(), 4);
        assert_eq!(pass.fill.full_star_count, 2);
        assert_eq!(pass.size, Size::new(46, 10));
    }

    #[test]
    fn test_measured_with_invalid_rating_then_fixed() {
        let mut view = view().rating(RatingInput::new(3.0).max_rating(-1.0));
        assert_eq!(
            view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained()),
            Size::zero()
        );

        view.set_max_rating(4.0);
        let pass = view.layout();
        assert_eq!(pass.slots.len(), 4);
        assert_eq!(pass.fill.full_star_count, 3);
        assert_eq!(view.size(), Size::new(46, 10));
    }

    #[test]
    fn test_geometry_change_relayouts_with_last_constraints() {
        let mut view = view();
        view.measure(MeasureSpec::at_most(30), MeasureSpec::unconstrained());
        // Budget 30 -> (30 + 2) / 12 = 2 per row.
        assert_eq!(view.stars_per_row(), 2);

        view.set_spacing(0, 0);
        assert_eq!(view.layout().stars_per_row(), 3);
        assert_eq!(view.size(), Size::new(30, 20));
    }

    #[test]
    fn test_fill_then_layout_change_relayouts() {
        let mut view = view();
        view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
        view.set_rating(1.0);
        view.set_star_count(2);
        let pass = view.layout();
        assert_eq!(pass.slots.len(), 2);
        assert_eq!(pass.fill.full_star_count, 1);
    }

    #[test]
    fn test_removing_icons_is_degenerate() {
        let mut view = view();
        view.set_empty_icon(None);
        view.set_full_icon(None);
        assert!(view.layout().is_empty());
        assert_eq!(view.stars_per_row(), 0);
    }
}
