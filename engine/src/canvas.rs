use std::convert::Infallible;

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    text::{Baseline, Text},
};

/// CPU-side framebuffer in softbuffer's `0x00RRGGBB` layout.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

#[inline]
fn pack(color: Rgb888) -> u32 {
    (color.r() as u32) << 16 | (color.g() as u32) << 8 | color.b() as u32
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: Rgb888) {
        self.pixels.fill(pack(color));
    }

    /// Fills an axis-aligned rectangle, clipped to the canvas. Coordinates are
    /// truncated towards zero.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb888) {
        let x0 = (x as i64).clamp(0, self.width as i64) as usize;
        let y0 = (y as i64).clamp(0, self.height as i64) as usize;
        let x1 = ((x + width) as i64).clamp(0, self.width as i64) as usize;
        let y1 = ((y + height) as i64).clamp(0, self.height as i64) as usize;
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let stride = self.width as usize;
        let value = pack(color);
        for row in y0..y1 {
            self.pixels[row * stride + x0..row * stride + x1].fill(value);
        }
    }

    /// Draws a line of text with its top-left corner at `(x, y)`.
    pub fn text(&mut self, text: &str, x: i32, y: i32, color: Rgb888) {
        let style = MonoTextStyle::new(&FONT_10X20, color);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self);
    }

    /// Copies the canvas into a presentation buffer of a possibly different
    /// size. Areas outside the canvas are left black.
    pub fn blit_into(&self, target: &mut [u32], target_width: u32, target_height: u32) {
        let copy_w = self.width.min(target_width) as usize;
        let copy_h = self.height.min(target_height) as usize;
        let src_stride = self.width as usize;
        let dst_stride = target_width as usize;

        if copy_w < dst_stride || copy_h < target_height as usize {
            target.fill(0);
        }

        for row in 0..copy_h {
            let src = &self.pixels[row * src_stride..row * src_stride + copy_w];
            target[row * dst_stride..row * dst_stride + copy_w].copy_from_slice(src);
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x < self.width && y < self.height {
                self.pixels[(y * self.width + x) as usize] = pack(color);
            }
        }
        Ok(())
    }
}
