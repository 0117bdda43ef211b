// Soft circular eraser.
// Visual: wherever the stamp lands the overlay becomes see-through, fully at
// the center and fading out to untouched at the brush edge.

use crate::types::RasterSurface;

/// Precomputed radial erase strengths around a center pixel.
/// `weights` holds (2r+1)*(2r+1) entries, 1.0 at the center, 0.0 at and past `radius`.
#[derive(Clone, Debug)]
pub struct Stamp {
    pub radius: i32,
    pub weights: Vec<f32>,
}

/// Build a linear radial falloff: 1 - d/r inside the disk, 0 outside.
pub fn make_radial_stamp(radius: i32) -> Stamp {
    if radius <= 0 {
        return Stamp { radius: 0, weights: Vec::new() };
    }
    let d = 2 * radius + 1;
    let r = radius as f32;
    let mut weights = Vec::with_capacity((d * d) as usize);
    for y in -radius..=radius {
        for x in -radius..=radius {
            let dist = ((x * x + y * y) as f32).sqrt();
            weights.push((1.0 - dist / r).max(0.0));
        }
    }
    Stamp { radius, weights }
}

/// Destination-out: every covered pixel keeps `alpha * (1 - weight)`.
/// Returns how many pixels changed (0 once the area is already clear).
pub fn erase(surface: &mut RasterSurface, x: f32, y: f32, stamp: &Stamp) -> usize {
    if stamp.weights.is_empty() || !x.is_finite() || !y.is_finite() {
        return 0;
    }
    let w = surface.width() as i32;
    let h = surface.height() as i32;
    let r = stamp.radius;

    // A stamp centered this far out cannot reach the raster; also keeps the
    // i32 conversion below away from saturation.
    let reach = (r + 1) as f32;
    if x < -reach || y < -reach || x >= w as f32 + reach || y >= h as f32 + reach {
        return 0;
    }

    let d = 2 * r + 1;
    let cx = x.floor() as i32;
    let cy = y.floor() as i32;

    let mut changed = 0;
    for ky in 0..d {
        let sy = cy + ky - r;
        if sy < 0 || sy >= h { continue; }
        for kx in 0..d {
            let sx = cx + kx - r;
            if sx < 0 || sx >= w { continue; }
            let weight = stamp.weights[(ky * d + kx) as usize];
            if weight <= 0.0 { continue; }

            let a = surface.alpha(sx as u32, sy as u32);
            if a == 0 { continue; }
            let next = (a as f32 * (1.0 - weight)).round().clamp(0.0, 255.0) as u8;
            if next != a {
                surface.set_alpha(sx as u32, sy as u32, next);
                changed += 1;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn opaque(w: u32, h: u32) -> RasterSurface {
        let mut s = RasterSurface::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                s.put(x, y, Rgba([200, 160, 40, 255]));
            }
        }
        s
    }

    #[test]
    fn stamp_peaks_at_center_and_vanishes_at_edge() {
        let stamp = make_radial_stamp(30);
        let d = 61usize;
        assert_eq!(stamp.weights.len(), d * d);
        assert_eq!(stamp.weights[30 * d + 30], 1.0);
        assert_eq!(stamp.weights[30 * d], 0.0); // (−30, 0): on the rim
        assert_eq!(stamp.weights[0], 0.0); // corner, outside the disk
        assert!(stamp.weights[30 * d + 45] > 0.49 && stamp.weights[30 * d + 45] < 0.51);
    }

    #[test]
    fn center_clears_and_rim_is_untouched() {
        let mut s = opaque(100, 100);
        let stamp = make_radial_stamp(30);
        assert!(erase(&mut s, 50.0, 50.0, &stamp) > 0);
        assert_eq!(s.alpha(50, 50), 0);
        assert_eq!(s.alpha(80, 50), 255);
        let mid = s.alpha(65, 50);
        assert!(mid > 0 && mid < 255);
    }

    #[test]
    fn erasing_clear_pixels_is_a_noop() {
        let mut s = RasterSurface::new(20, 20).unwrap();
        assert_eq!(erase(&mut s, 10.0, 10.0, &make_radial_stamp(5)), 0);
    }

    #[test]
    fn stamps_clip_at_the_border() {
        let mut s = opaque(10, 10);
        let stamp = make_radial_stamp(30);
        erase(&mut s, -3.0, 200.0, &stamp);
        erase(&mut s, 0.0, 0.0, &stamp);
        assert_eq!(s.alpha(0, 0), 0);
    }

    #[test]
    fn far_off_surface_points_are_ignored() {
        let mut s = opaque(350, 200);
        let stamp = make_radial_stamp(30);
        for (x, y) in [(-3.0e9, 10.0), (10.0, 3.0e9), (f32::MAX, f32::MIN), (1.75e10, 1.0e10), (-31.5, 100.0)] {
            assert_eq!(erase(&mut s, x, y, &stamp), 0);
        }
        assert!(s.alphas().all(|a| a == 255));

        // just outside the edge still reaches in
        assert!(erase(&mut s, -20.0, 100.0, &stamp) > 0);
    }

    #[test]
    fn zero_radius_brush_does_nothing() {
        let mut s = opaque(10, 10);
        assert_eq!(erase(&mut s, 5.0, 5.0, &make_radial_stamp(0)), 0);
        assert!(s.alphas().all(|a| a == 255));
    }
}
