//! Star icons.
//!
//! The widget draws each layer with a [`StarIcon`]. Layout only needs the
//! icon's intrinsic size; drawing gets a target and a top-left corner and
//! must stay inside `top_left + size()`.

use embedded_graphics::{
    image::{Image, ImageRaw},
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, Triangle},
};

/// Something that can be drawn in a star slot.
pub trait StarIcon {
    /// Intrinsic size in pixels.
    fn size(&self) -> Size;

    /// Draws the icon with its top-left corner at `top_left`.
    fn draw<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>;
}

impl<T: StarIcon + ?Sized> StarIcon for &T {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn draw<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        (**self).draw(target, top_left)
    }
}

/// Unit five-point star in thousandths, clockwise from the top point.
/// Outer points sit on radius 1000, inner points on radius 382.
const STAR_VERTICES: [(i64, i64); 10] = [
    (0, -1000),
    (225, -309),
    (951, -309),
    (363, 118),
    (588, 809),
    (0, 382),
    (-588, 809),
    (-363, 118),
    (-951, -309),
    (-225, -309),
];

/// The outline spans -1000..809 vertically; this shift centres it in the box.
const STAR_CENTER_SHIFT: i64 = 95;

/// Filled five-point star drawn from triangles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShapeStar {
    size: u32,
    color: Gray4,
}

impl ShapeStar {
    /// Create a black star in a `size`x`size` box.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            color: Gray4::BLACK,
        }
    }

    /// Set fill color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    // SAFETY: vertex components are within +-1000 and the radius is a u32
    // widened to i64; the products fit with room to spare.
    #[allow(clippy::arithmetic_side_effects)]
    fn vertices(&self, top_left: Point) -> (Point, [Point; 10]) {
        let radius = i64::from(self.size) / 2;
        let cx = i64::from(top_left.x) + radius;
        let cy = i64::from(top_left.y) + radius + radius * STAR_CENTER_SHIFT / 1000;

        let points =
            STAR_VERTICES.map(|(x, y)| point(cx + x * radius / 1000, cy + y * radius / 1000));
        (point(cx, cy), points)
    }
}

fn point(x: i64, y: i64) -> Point {
    let clamp = |v: i64| i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX });
    Point::new(clamp(x), clamp(y))
}

impl StarIcon for ShapeStar {
    fn size(&self) -> Size {
        Size::new(self.size, self.size)
    }

    fn draw<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let (center, points) = self.vertices(top_left);
        let style = PrimitiveStyle::with_fill(self.color);

        for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
            Triangle::new(center, *a, *b)
                .into_styled(style)
                .draw(target)?;
        }

        Ok(())
    }
}

/// Solid rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BlockIcon {
    size: Size,
    color: Gray4,
}

impl BlockIcon {
    /// Create a block of the given size and color.
    pub fn new(size: Size, color: Gray4) -> Self {
        Self { size, color }
    }
}

impl StarIcon for BlockIcon {
    fn size(&self) -> Size {
        self.size
    }

    fn draw<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        Rectangle::new(top_left, self.size)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(target)
    }
}

/// Raw 4-bit grayscale bitmap, two pixels per byte, rows padded to a whole
/// byte.
#[derive(Debug)]
pub struct BitmapIcon<'a> {
    raw: ImageRaw<'a, Gray4>,
}

impl<'a> BitmapIcon<'a> {
    /// Wrap packed `Gray4` pixel data that is `width` pixels wide.
    pub fn new(data: &'a [u8], width: u32) -> Self {
        Self {
            raw: ImageRaw::new(data, width),
        }
    }
}

impl StarIcon for BitmapIcon<'_> {
    fn size(&self) -> Size {
        OriginDimensions::size(&self.raw)
    }

    fn draw<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        Image::new(&self.raw, top_left).draw(target)
    }
}
