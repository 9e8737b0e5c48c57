//! Two-layer rendering checks against `MockDisplay`.

#![allow(clippy::unwrap_used, missing_docs)]

use embedded_graphics::{mock_display::MockDisplay, pixelcolor::Gray4, prelude::*};
use rating_view::prelude::*;

const EMPTY: Gray4 = Gray4::new(0x3);
const FULL: Gray4 = Gray4::new(0xC);

fn blocks(stars: u32, rating: f32) -> RatingView<BlockIcon, BlockIcon> {
    RatingView::new()
        .empty_icon(BlockIcon::new(Size::new(8, 8), EMPTY))
        .full_icon(BlockIcon::new(Size::new(8, 8), FULL))
        .config(LayoutConfig::default().star_count(stars).spacing(2, 2))
        .rating(RatingInput::new(rating))
}

fn display() -> MockDisplay<Gray4> {
    let mut display = MockDisplay::new();
    display.set_allow_overdraw(true);
    display
}

#[test]
fn half_star_is_split_at_the_clip_edge() {
    let mut view = blocks(4, 2.5);
    view.measure(MeasureSpec::at_most(64), MeasureSpec::unconstrained());

    let mut display = display();
    view.render(&mut display, Point::zero()).unwrap();

    // Slots at x = 0, 10, 20, 30.
    assert_eq!(display.get_pixel(Point::new(0, 0)), Some(FULL));
    assert_eq!(display.get_pixel(Point::new(17, 7)), Some(FULL));
    // Partial star: 4 of 8 columns filled.
    assert_eq!(display.get_pixel(Point::new(23, 4)), Some(FULL));
    assert_eq!(display.get_pixel(Point::new(24, 4)), Some(EMPTY));
    assert_eq!(display.get_pixel(Point::new(37, 7)), Some(EMPTY));
    // Spacing stays untouched.
    assert_eq!(display.get_pixel(Point::new(8, 0)), None);
    assert_eq!(display.get_pixel(Point::new(38, 0)), None);
}

#[test]
fn zero_rating_draws_only_the_empty_layer() {
    let mut view = blocks(3, 0.0);
    view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());

    let mut display = display();
    view.render(&mut display, Point::zero()).unwrap();

    for x in [0, 10, 20] {
        assert_eq!(display.get_pixel(Point::new(x, 0)), Some(EMPTY));
    }
    assert_eq!(
        display.affected_area(),
        embedded_graphics::primitives::Rectangle::new(Point::zero(), Size::new(28, 8))
    );
}

#[test]
fn full_rating_covers_every_slot() {
    let mut view = blocks(3, 3.0);
    view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());

    let mut display = display();
    view.render(&mut display, Point::zero()).unwrap();

    for x in [0, 7, 10, 17, 20, 27] {
        assert_eq!(display.get_pixel(Point::new(x, 3)), Some(FULL));
    }
}

#[test]
fn wrapped_rows_render_at_offset() {
    // 5 stars in 30px: (30 + 2) / 10 = 3 per row, rows of 3 and 2.
    let mut view = blocks(5, 3.5);
    view.measure(MeasureSpec::exact(30), MeasureSpec::unconstrained());
    assert_eq!(view.stars_per_row(), 3);
    assert_eq!(view.size(), Size::new(30, 18));

    let mut display = display();
    view.render(&mut display, Point::new(4, 2)).unwrap();

    // Second row starts at y = 2 + 10. Slot 3 is half full.
    assert_eq!(display.get_pixel(Point::new(4, 12)), Some(FULL));
    assert_eq!(display.get_pixel(Point::new(7, 12)), Some(FULL));
    assert_eq!(display.get_pixel(Point::new(8, 12)), Some(EMPTY));
    assert_eq!(display.get_pixel(Point::new(14, 12)), Some(EMPTY));
    // No third slot on the second row.
    assert_eq!(display.get_pixel(Point::new(24, 12)), None);
}

#[test]
fn missing_full_icon_skips_the_full_layer() {
    let mut view: RatingView<BlockIcon, BlockIcon> = RatingView::new()
        .empty_icon(BlockIcon::new(Size::new(8, 8), EMPTY))
        .config(LayoutConfig::default().star_count(2))
        .rating(RatingInput::new(2.0));
    view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());

    let mut display = display();
    view.render(&mut display, Point::zero()).unwrap();
    assert_eq!(display.get_pixel(Point::new(0, 0)), Some(EMPTY));
    assert_eq!(display.get_pixel(Point::new(15, 7)), Some(EMPTY));
}

#[test]
fn no_icons_draw_nothing() {
    let mut view: RatingView<BlockIcon, BlockIcon> =
        RatingView::new().rating(RatingInput::new(4.0));
    view.measure(MeasureSpec::exact(40), MeasureSpec::exact(40));

    let mut display = display();
    view.render(&mut display, Point::zero()).unwrap();
    for y in 0..64 {
        for x in 0..64 {
            assert_eq!(display.get_pixel(Point::new(x, y)), None);
        }
    }
}

#[test]
fn rating_change_redraws_without_remeasure() {
    let mut view = blocks(2, 0.5);
    view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());
    view.set_rating(1.5);

    let mut display = display();
    view.render(&mut display, Point::zero()).unwrap();
    assert_eq!(display.get_pixel(Point::new(7, 0)), Some(FULL));
    assert_eq!(display.get_pixel(Point::new(13, 0)), Some(FULL));
    assert_eq!(display.get_pixel(Point::new(14, 0)), Some(EMPTY));
}

#[test]
fn shape_star_partial_fill_is_clipped() {
    let mut view = RatingView::new()
        .empty_icon(ShapeStar::new(16).color(EMPTY))
        .full_icon(ShapeStar::new(16).color(FULL))
        .config(LayoutConfig::default().star_count(1))
        .rating(RatingInput::new(0.5));
    view.measure(MeasureSpec::unconstrained(), MeasureSpec::unconstrained());

    let mut display = display();
    view.render(&mut display, Point::zero()).unwrap();

    // Left half of the star body is full, right half is empty.
    assert_eq!(display.get_pixel(Point::new(6, 9)), Some(FULL));
    assert_eq!(display.get_pixel(Point::new(9, 9)), Some(EMPTY));
}
