// How much of the overlay is gone, as a percentage of fully transparent pixels.
// Full scan on purpose: stamps overlap arbitrarily, so nothing incremental holds.

use crate::types::RasterSurface;

/// Percentage in [0,100] of pixels whose alpha is exactly 0.
pub fn measure(surface: &RasterSurface) -> f64 {
    let total = surface.pixel_count();
    if total == 0 {
        return 0.0;
    }
    let clear = surface.alphas().filter(|&a| a == 0).count();
    100.0 * clear as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn counts_only_fully_transparent_pixels() {
        let mut s = RasterSurface::new(10, 10).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                s.put(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        assert_eq!(measure(&s), 0.0);

        // 51 of 100 clear, plus one nearly-clear pixel that must not count
        for i in 0..51 {
            s.set_alpha(i % 10, i / 10, 0);
        }
        s.set_alpha(9, 9, 1);
        assert_eq!(measure(&s), 51.0);
    }

    #[test]
    fn fresh_raster_is_fully_clear() {
        let s = RasterSurface::new(3, 3).unwrap();
        assert_eq!(measure(&s), 100.0);
    }
}
