// Circular layout: phase (one revolution per integer step) -> point on a circle.
// Also the seam relation that keeps the wrap tile's nested copy glued to tile 0.

use std::f64::consts::TAU;

use glam::DVec2;

/// `angle = (phase mod 1) * 2π`, then `(cos, sin) * radius`.
pub fn position(phase: f64, radius: f64) -> DVec2 {
    let angle = phase.rem_euclid(1.0) * TAU;
    DVec2::new(angle.cos(), angle.sin()) * radius
}

/// Starting phase for tile `index` of `count`: evenly spaced around the circle.
pub fn base_phase(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 / count as f64
}

/// A tile slot on the ring. `linked` names the tile whose image this one
/// also hosts (by index; read-only, never owning).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub index: usize,
    pub base_phase: f64,
    pub orbit_radius: f64,
    pub linked: Option<usize>,
}

impl Tile {
    pub fn new(index: usize, count: usize, orbit_radius: f64) -> Self {
        Self { index, base_phase: base_phase(index, count), orbit_radius, linked: None }
    }

    /// Phase after the shared driver has advanced by `progress` revolutions.
    pub fn phase(&self, progress: f64) -> f64 {
        self.base_phase + progress
    }

    pub fn position(&self, progress: f64) -> DVec2 {
        position(self.phase(progress), self.orbit_radius)
    }
}

/// Build `count` tiles; the last one hosts a copy of tile 0 to close the seam.
pub fn ring_tiles(count: usize, orbit_radius: f64) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = (0..count).map(|i| Tile::new(i, count, orbit_radius)).collect();
    if count > 1 {
        tiles[count - 1].linked = Some(0);
    }
    tiles
}

/// Offset of the nested copy inside `host`, relative to the host's own
/// position: `linked.position - host.position` at the same progress.
pub fn seam_offset(host: &Tile, linked: &Tile, progress: f64) -> DVec2 {
    linked.position(progress) - host.position(progress)
}
