// Core pixel containers: the window framebuffer and the erasable overlay raster.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::Error;

/// Largest overlay edge we agree to allocate. Anything above this (or zero)
/// is treated as an unavailable rendering context.
pub const MAX_RASTER_DIM: u32 = 4096;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub fn unpack_rgb(px: u32) -> (u8, u8, u8) {
    (((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
}

/// RGBA overlay with a straight (non-premultiplied) alpha channel.
/// Exclusively owned by one scratch surface; alpha 0 means fully erased.
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Allocate a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 || width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
            return Err(Error::SurfaceUnavailable { width, height });
        }
        Ok(Self { image: RgbaImage::new(width, height) })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.image.width() as usize * self.image.height() as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y)[3]
    }

    #[inline]
    pub fn set_alpha(&mut self, x: u32, y: u32, a: u8) {
        self.image.get_pixel_mut(x, y)[3] = a;
    }

    /// Alpha channel of every pixel in row-major order.
    pub fn alphas(&self) -> impl Iterator<Item = u8> + '_ {
        self.image.pixels().map(|p| p[3])
    }

    pub fn put(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.image.put_pixel(x, y, color);
    }

    /// Source-over blend of `color` at (x,y); out-of-bounds writes are dropped.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let sa = color[3] as f32 / 255.0;
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            *dst = Rgba([0, 0, 0, 0]);
            return;
        }
        for c in 0..3 {
            let v = (color[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
            dst[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Make every pixel fully transparent.
    pub fn clear(&mut self) {
        for p in self.image.pixels_mut() {
            *p = Rgba([0, 0, 0, 0]);
        }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save_png(&self, path: &Path) -> Result<(), Error> {
        self.image.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_raster_is_unavailable() {
        assert!(matches!(
            RasterSurface::new(0, 200),
            Err(Error::SurfaceUnavailable { width: 0, height: 200 })
        ));
        assert!(RasterSurface::new(350, MAX_RASTER_DIM + 1).is_err());
    }

    #[test]
    fn new_raster_starts_transparent() {
        let raster = RasterSurface::new(4, 3).unwrap();
        assert_eq!(raster.pixel_count(), 12);
        assert!(raster.alphas().all(|a| a == 0));
    }

    #[test]
    fn blend_over_opaque_keeps_it_opaque() {
        let mut raster = RasterSurface::new(2, 2).unwrap();
        raster.put(0, 0, Rgba([0, 0, 0, 255]));
        raster.blend(0, 0, Rgba([255, 255, 255, 153]));
        let px = raster.get(0, 0);
        assert_eq!(px[3], 255);
        assert_eq!(px[0], 153);
        raster.blend(-1, 5, Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn pack_and_unpack_agree() {
        let px = pack_rgb(0xD4, 0xAF, 0x37);
        assert_eq!(px, 0x00D4AF37);
        assert_eq!(unpack_rgb(px), (0xD4, 0xAF, 0x37));
    }
}
