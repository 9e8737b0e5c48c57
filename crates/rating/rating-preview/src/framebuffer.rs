//! In-memory `Gray4` framebuffer with ASCII and PNG export.

use std::path::Path;

use anyhow::{Context, Result};
use embedded_graphics::{pixelcolor::Gray4, prelude::*};

/// Luma ramp for ASCII output, darkest first.
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// CPU framebuffer, row-major, one `Gray4` per pixel.
pub struct Framebuffer {
    pixels: Vec<Gray4>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a framebuffer filled with `background`.
    // SAFETY: callers cap each edge at MAX_PREVIEW_EDGE (4096), so the product
    // fits in u32.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u32, height: u32, background: Gray4) -> Self {
        let len = (width * height) as usize;
        Self {
            pixels: vec![background; len],
            width,
            height,
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.width)?.checked_add(x)?;
        usize::try_from(idx).ok()
    }

    /// Pixel at `point`, or `None` outside the buffer.
    pub fn pixel(&self, point: Point) -> Option<Gray4> {
        self.index(point)
            .and_then(|idx| self.pixels.get(idx))
            .copied()
    }

    fn rows(&self) -> impl Iterator<Item = &[Gray4]> {
        let width = usize::try_from(self.width).unwrap_or(usize::MAX).max(1);
        self.pixels.chunks(width)
    }

    /// One character per pixel, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            for pixel in row {
                out.push(ascii_for(*pixel));
            }
            out.push('\n');
        }
        out
    }

    /// Writes the buffer as an 8-bit grayscale PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        use image::{GrayImage, Luma};

        let mut img = GrayImage::new(self.width, self.height);
        for (y, row) in (0u32..).zip(self.rows()) {
            for (x, pixel) in (0u32..).zip(row) {
                img.put_pixel(x, y, Luma([to_luma8(*pixel)]));
            }
        }

        img.save(path)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))
    }
}

/// Expands 0-15 to 0-255.
fn to_luma8(pixel: Gray4) -> u8 {
    pixel.luma().saturating_mul(17)
}

fn ascii_for(pixel: Gray4) -> char {
    let last = ASCII_RAMP.len().saturating_sub(1);
    let idx = usize::from(pixel.luma())
        .saturating_mul(last)
        .checked_div(15)
        .unwrap_or(0);
    ASCII_RAMP.get(idx).map_or(' ', |b| char::from(*b))
}

impl DrawTarget for Framebuffer {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(slot) = self.index(point).and_then(|idx| self.pixels.get_mut(idx)) {
                *slot = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_draw_and_read_back() {
        let mut fb = Framebuffer::new(4, 3, Gray4::BLACK);
        Rectangle::new(Point::new(1, 1), Size::new(2, 1))
            .into_styled(PrimitiveStyle::with_fill(Gray4::WHITE))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Gray4::WHITE));
        assert_eq!(fb.pixel(Point::new(0, 1)), Some(Gray4::BLACK));
        assert_eq!(fb.pixel(Point::new(4, 0)), None);
        assert_eq!(fb.pixel(Point::new(-1, 0)), None);
    }

    #[test]
    fn test_out_of_bounds_pixels_are_dropped() {
        let mut fb = Framebuffer::new(2, 2, Gray4::BLACK);
        Rectangle::new(Point::new(-5, -5), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(Gray4::WHITE))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.to_ascii(), "@@\n@@\n");
    }

    #[test]
    fn test_ascii_ramp() {
        let mut fb = Framebuffer::new(3, 1, Gray4::BLACK);
        fb.draw_iter([
            Pixel(Point::new(1, 0), Gray4::new(0x8)),
            Pixel(Point::new(2, 0), Gray4::WHITE),
        ])
        .unwrap();
        // 8 * 9 / 15 = 4 -> '='
        assert_eq!(fb.to_ascii(), " =@\n");
    }

    #[test]
    fn test_png_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let fb = Framebuffer::new(5, 2, Gray4::new(0x5));
        fb.save_png(&path).unwrap();

        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.dimensions(), (5, 2));
        assert_eq!(img.get_pixel(4, 1).0, [85]);
    }
}
