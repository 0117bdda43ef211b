// Window + software drawing utilities for the demo.
// Visual effects provided here:
// 1) A window that shows the current screen.
// 2) Rotated, translucent tiles for the orbit ring.
// 3) The scratch overlay composited over whatever hides behind it.
// 4) A crosshair and 5x7 HUD text on top.

use glam::DVec2;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::font::for_each_text_pixel;
use crate::gamma::GammaLut;
use crate::types::{unpack_rgb, FrameBuffer, RasterSurface};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels; None while the cursor is outside.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Space also presses the center button.
    pub fn space_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Space, KeyRepeat::No)
    }
}

/* ---------- Software drawing ---------- */

#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

#[inline]
fn blend_pixel(fb: &mut FrameBuffer, lut: &GammaLut, x: i32, y: i32, rgb: (u8, u8, u8), alpha: f32) {
    if x < 0 || y < 0 || x as usize >= fb.width || y as usize >= fb.height {
        return;
    }
    let idx = y as usize * fb.width + x as usize;
    fb.pixels[idx] = lut.over(fb.pixels[idx], rgb, alpha);
}

/// Bresenham line between (x0,y0) and (x1,y1).
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Visual: a "+" shape (with a tiny gap at the center) follows the pointer.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    draw_line(fb, cx - size, cy, cx - 2, cy, color);
    draw_line(fb, cx + 2, cy, cx + size, cy, color);
    draw_line(fb, cx, cy - size, cx, cy - 2, color);
    draw_line(fb, cx, cy + 2, cx, cy + size, color);
    put_pixel(fb, cx, cy, color);
}

/// Text with a 1-pixel (times scale) black drop shadow for contrast.
pub fn draw_text_5x7(fb: &mut FrameBuffer, x: i32, y: i32, scale: i32, text: &str, color: u32) {
    let s = scale.max(1);
    for_each_text_pixel(text, x + s, y + s, s, |px, py| put_pixel(fb, px, py, 0x00000000));
    for_each_text_pixel(text, x, y, s, |px, py| put_pixel(fb, px, py, color));
}

pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for py in y..y + h {
        for px in x..x + w {
            put_pixel(fb, px, py, color);
        }
    }
}

/// Filled circle blended at `alpha`.
pub fn fill_circle(fb: &mut FrameBuffer, lut: &GammaLut, center: DVec2, radius: f64, color: u32, alpha: f32) {
    let rgb = unpack_rgb(color);
    let (x0, x1) = ((center.x - radius).floor() as i32, (center.x + radius).ceil() as i32);
    let (y0, y1) = ((center.y - radius).floor() as i32, (center.y + radius).ceil() as i32);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
            if p.distance_squared(center) <= radius * radius {
                blend_pixel(fb, lut, x, y, rgb, alpha);
            }
        }
    }
}

/// A square rotated about its center, in screen pixels.
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    pub center: DVec2,
    pub half: f64,
    pub rotation_degrees: f64,
}

impl Quad {
    /// Point in the quad's unrotated local frame.
    fn local(&self, p: DVec2) -> DVec2 {
        let (sin, cos) = (-self.rotation_degrees.to_radians()).sin_cos();
        let d = p - self.center;
        DVec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }

    pub fn contains(&self, p: DVec2) -> bool {
        let l = self.local(p);
        l.x.abs() <= self.half && l.y.abs() <= self.half
    }

    fn bounds(&self) -> (i32, i32, i32, i32) {
        let reach = self.half * std::f64::consts::SQRT_2;
        (
            (self.center.x - reach).floor() as i32,
            (self.center.y - reach).floor() as i32,
            (self.center.x + reach).ceil() as i32,
            (self.center.y + reach).ceil() as i32,
        )
    }
}

/// Draw a shaded tile (lighter at its top edge), optionally clipped to `clip`.
/// Visual: stands in for a photo; the shading makes rotation readable.
pub fn draw_tile(fb: &mut FrameBuffer, lut: &GammaLut, quad: &Quad, color: u32, opacity: f32, clip: Option<&Quad>) {
    if opacity <= 0.0 || quad.half <= 0.0 {
        return;
    }
    let (r, g, b) = unpack_rgb(color);
    let (x0, y0, x1, y1) = quad.bounds();
    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
            if !quad.contains(p) || clip.is_some_and(|c| !c.contains(p)) {
                continue;
            }
            let ly = quad.local(p).y / (2.0 * quad.half) + 0.5; // 0 top .. 1 bottom
            let shade = (1.0 - 0.3 * ly) as f32;
            let rgb = ((r as f32 * shade) as u8, (g as f32 * shade) as u8, (b as f32 * shade) as u8);
            blend_pixel(fb, lut, x, y, rgb, opacity);
        }
    }
}

/// Composite the overlay raster with its top-left corner at (left, top).
/// `opacity` scales the whole layer (used while it fades after the reveal).
pub fn composite_raster(fb: &mut FrameBuffer, lut: &GammaLut, raster: &RasterSurface, left: i32, top: i32, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    for (x, y, px) in raster.as_image().enumerate_pixels() {
        if px[3] == 0 {
            continue;
        }
        let a = px[3] as f32 / 255.0 * opacity;
        blend_pixel(fb, lut, left + x as i32, top + y as i32, (px[0], px[1], px[2]), a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rotated_quad_contains_its_corners_only_when_turned() {
        let q = Quad { center: DVec2::new(0.0, 0.0), half: 10.0, rotation_degrees: 0.0 };
        assert!(q.contains(DVec2::new(9.0, 9.0)));
        assert!(!q.contains(DVec2::new(0.0, 13.0)));
        let turned = Quad { rotation_degrees: 45.0, ..q };
        assert!(!turned.contains(DVec2::new(9.0, 9.0)));
        assert!(turned.contains(DVec2::new(0.0, 13.0)));
    }

    #[test]
    fn clipped_tile_stays_inside_the_clip() {
        let lut = GammaLut::new();
        let mut fb = FrameBuffer::new(40, 40);
        let tile = Quad { center: DVec2::new(20.0, 20.0), half: 15.0, rotation_degrees: 0.0 };
        let clip = Quad { center: DVec2::new(30.0, 20.0), half: 5.0, rotation_degrees: 0.0 };
        draw_tile(&mut fb, &lut, &tile, 0x00FF0000, 1.0, Some(&clip));
        assert_ne!(fb.pixels[20 * 40 + 30], 0);
        assert_eq!(fb.pixels[20 * 40 + 20], 0);
    }

    #[test]
    fn erased_overlay_pixels_show_the_background() {
        let lut = GammaLut::new();
        let mut fb = FrameBuffer::new(4, 1);
        fb.clear(0x00112233);
        let mut raster = RasterSurface::new(2, 1).unwrap();
        raster.put(0, 0, Rgba([255, 0, 0, 255]));
        composite_raster(&mut fb, &lut, &raster, 1, 0, 1.0);
        assert_eq!(fb.pixels, vec![0x00112233, 0x00FF0000, 0x00112233, 0x00112233]);
    }
}
