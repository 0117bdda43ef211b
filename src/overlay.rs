// Paints the pre-scratch overlay: foil gradient, centered label, sparkle dots.
// Runs once per scratch surface; the result is then only ever erased.

use image::Rgba;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{GradientStop, ScratchConfig};
use crate::font::{for_each_text_pixel, text_width, GLYPH_HEIGHT};
use crate::types::RasterSurface;

/// Color at `t` in [0,1] along the stops (clamped at both ends).
pub fn gradient_color(stops: &[GradientStop], t: f32) -> Rgba<u8> {
    let Some(first) = stops.first() else {
        return Rgba([0, 0, 0, 255]);
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = (b.offset - a.offset).max(f32::EPSILON);
            let k = ((t - a.offset) / span).clamp(0.0, 1.0);
            let mut out = [0u8; 4];
            for c in 0..4 {
                out[c] = (a.color[c] as f32 + (b.color[c] as f32 - a.color[c] as f32) * k).round() as u8;
            }
            return Rgba(out);
        }
    }
    stops[stops.len() - 1].color
}

/// Sparkle centers for a `width`x`height` surface, fixed by `seed`.
pub fn sparkle_positions(seed: u64, count: usize, width: u32, height: u32) -> Vec<(f32, f32)> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.random::<f32>() * width as f32;
            let y = rng.random::<f32>() * height as f32;
            (x, y)
        })
        .collect()
}

/// Blend a filled circle of `radius` centered at (cx,cy).
fn fill_disc(surface: &mut RasterSurface, cx: f32, cy: f32, radius: i32, color: Rgba<u8>) {
    let r = radius as f32;
    let (x0, x1) = ((cx - r).floor() as i32, (cx + r).ceil() as i32);
    let (y0, y1) = ((cy - r).floor() as i32, (cy + r).ceil() as i32);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                surface.blend(x, y, color);
            }
        }
    }
}

/// Paint the full overlay described by `config` onto `surface`.
pub fn paint_overlay(surface: &mut RasterSurface, config: &ScratchConfig) {
    let (w, h) = (surface.width(), surface.height());

    // Diagonal gradient from the top-left to the bottom-right corner.
    let len2 = (w as f32 * w as f32 + h as f32 * h as f32).max(1.0);
    for y in 0..h {
        for x in 0..w {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let t = (px * w as f32 + py * h as f32) / len2;
            surface.put(x, y, gradient_color(&config.overlay_colors, t));
        }
    }

    let scale = config.label_scale.max(1);
    let lx = (w as i32 - text_width(&config.label, scale)) / 2;
    let ly = (h as i32 - GLYPH_HEIGHT * scale) / 2;
    for_each_text_pixel(&config.label, lx, ly, scale, |x, y| surface.blend(x, y, config.label_color));

    for (sx, sy) in sparkle_positions(config.sparkle_seed, config.sparkle_count, w, h) {
        fill_disc(surface, sx, sy, config.sparkle_radius, config.sparkle_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::measure;

    #[test]
    fn gradient_hits_its_stops() {
        let stops = ScratchConfig::gold_ticket().overlay_colors;
        assert_eq!(gradient_color(&stops, 0.0), stops[0].color);
        assert_eq!(gradient_color(&stops, 0.3), stops[1].color);
        assert_eq!(gradient_color(&stops, 2.0), stops[4].color);
        assert_eq!(gradient_color(&[], 0.5), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn sparkles_are_deterministic_and_in_bounds() {
        let a = sparkle_positions(7, 20, 350, 200);
        let b = sparkle_positions(7, 20, 350, 200);
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert!(a.iter().all(|&(x, y)| (0.0..350.0).contains(&x) && (0.0..200.0).contains(&y)));
        assert_ne!(a, sparkle_positions(8, 20, 350, 200));
    }

    #[test]
    fn painted_overlay_is_fully_opaque() {
        let config = ScratchConfig::gold_ticket();
        let mut s = RasterSurface::new(config.width, config.height).unwrap();
        paint_overlay(&mut s, &config);
        assert_eq!(measure(&s), 0.0);
        assert!(s.alphas().all(|a| a == 255));

        // label ink lands somewhere on the middle rows
        let row = config.height / 2;
        assert!((0..config.width).any(|x| s.get(x, row) == config.label_color));
    }
}
