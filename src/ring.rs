// The tile ring screen: eight tiles orbiting a center "advance" button.
// Owns one phase driver per tile; they live and die with the ring.

use glam::DVec2;
use log::{debug, info};

use crate::config::OrbitConfig;
use crate::orbit::{ring_tiles, seam_offset, Tile};
use crate::phase::PhaseDriver;
use crate::transition::{Presentation, TileVisual, TransitionController};

/// The copy of another tile drawn inside a host tile to hide the seam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NestedCopy {
    pub linked: usize,
    pub offset: DVec2, // relative to the host tile's center
}

pub struct TileRing {
    config: OrbitConfig,
    tiles: Vec<Tile>,
    drivers: Vec<PhaseDriver>,
    transition: TransitionController,
    on_advance: Box<dyn FnMut()>,
}

impl TileRing {
    pub fn mount(config: OrbitConfig, on_advance: impl FnMut() + 'static) -> Self {
        let tiles = ring_tiles(config.tile_count, config.orbit_radius);
        let drivers = tiles.iter().map(|_| PhaseDriver::from_config(&config)).collect();
        info!("tile ring mounted ({} tiles, radius {})", config.tile_count, config.orbit_radius);
        Self {
            transition: TransitionController::new(&config),
            config,
            tiles,
            drivers,
            on_advance: Box::new(on_advance),
        }
    }

    /// Step every driver and the presentation clock by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        for d in &mut self.drivers {
            d.advance(dt);
        }
        self.transition.advance(dt);
    }

    pub fn set_transitioning(&mut self, transitioning: bool) {
        self.transition.set_transitioning(transitioning);
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.presentation() == Presentation::Scattering
    }

    /// Press at `local` (relative to the ring center). Hitting the center
    /// button fires `on_advance`; returns whether it was hit.
    pub fn press(&mut self, local: DVec2) -> bool {
        if local.length() > self.config.advance_button_radius {
            return false;
        }
        debug!("advance pressed at ({:.1},{:.1})", local.x, local.y);
        (self.on_advance)();
        true
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Revolutions tile `index` has advanced since mount.
    pub fn progress(&self, index: usize) -> f64 {
        self.drivers.get(index).map_or(0.0, PhaseDriver::progress)
    }

    pub fn visual(&self, index: usize) -> Option<TileVisual> {
        let tile = self.tiles.get(index)?;
        Some(self.transition.visual(tile, self.progress(index)))
    }

    /// Nested copy hosted by tile `index`, positioned from the host's own
    /// phase so both stay in lockstep.
    pub fn nested_copy(&self, index: usize) -> Option<NestedCopy> {
        let host = self.tiles.get(index)?;
        let linked = self.tiles.get(host.linked?)?;
        Some(NestedCopy { linked: linked.index, offset: seam_offset(host, linked, self.progress(index)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ring() -> (TileRing, Rc<Cell<u32>>) {
        let pressed = Rc::new(Cell::new(0));
        let seen = pressed.clone();
        (TileRing::mount(OrbitConfig::default(), move || seen.set(seen.get() + 1)), pressed)
    }

    #[test]
    fn starts_evenly_spaced() {
        let (r, _) = ring();
        let v0 = r.visual(0).unwrap().position;
        let v4 = r.visual(4).unwrap().position;
        assert!((v0 - DVec2::new(180.0, 0.0)).length() < 1e-9);
        assert!((v4 - DVec2::new(-180.0, 0.0)).length() < 1e-9);
        assert!(r.visual(8).is_none());
    }

    #[test]
    fn center_button_fires_advance() {
        let (mut r, pressed) = ring();
        assert!(!r.press(DVec2::new(100.0, 0.0)));
        assert!(r.press(DVec2::new(10.0, -12.0)));
        assert_eq!(pressed.get(), 1);
    }

    #[test]
    fn scattering_keeps_phase_running() {
        let (mut r, _) = ring();
        r.advance(2.0);
        let before = r.progress(3);
        r.set_transitioning(true);
        assert!(r.is_transitioning());
        r.advance(1.0);
        assert!(r.progress(3) > before);
    }

    #[test]
    fn nested_copy_sits_on_tile_zero() {
        let (mut r, _) = ring();
        assert!(r.nested_copy(0).is_none());
        for _ in 0..300 {
            r.advance(0.05);
            let copy = r.nested_copy(7).unwrap();
            assert_eq!(copy.linked, 0);
            let host = r.visual(7).unwrap().position;
            let first = r.visual(0).unwrap().position;
            assert!((host + copy.offset - first).length() < 1e-9);
        }
    }
}
