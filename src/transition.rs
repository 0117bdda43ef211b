// Orbiting <-> Scattering presentation for ring tiles.
// Purely visual: it reads tile phases but never touches the phase drivers.

use glam::DVec2;
use log::info;

use crate::config::OrbitConfig;
use crate::easing::{Tween, EASE_OUT};
use crate::orbit::{position, Tile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Orbiting,
    Scattering,
}

/// Everything the renderer needs to place one tile this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileVisual {
    pub position: DVec2,        // offset from the ring center
    pub opacity: f64,
    pub scale: f64,
    pub rotation_degrees: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pose {
    opacity: f64,
    scale: f64,
    rotation: f64,
}

/// Entrance pose: invisible and slightly shrunk.
const MOUNT_POSE: Pose = Pose { opacity: 0.0, scale: 0.9, rotation: 0.0 };

pub struct TransitionController {
    config: OrbitConfig,
    clock: f64,
    presentation: Presentation,
    switched_at: f64,
    start: Vec<Pose>, // per tile, captured at the last switch
}

impl TransitionController {
    pub fn new(config: &OrbitConfig) -> Self {
        Self {
            config: config.clone(),
            clock: 0.0,
            presentation: Presentation::Orbiting,
            switched_at: 0.0,
            start: vec![MOUNT_POSE; config.tile_count],
        }
    }

    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.clock += dt;
        }
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Follow the host's flag. Tweens restart from wherever each tile is now.
    pub fn set_transitioning(&mut self, transitioning: bool) {
        let next = if transitioning { Presentation::Scattering } else { Presentation::Orbiting };
        if next == self.presentation {
            return;
        }
        self.start = (0..self.start.len()).map(|i| self.pose(i)).collect();
        self.switched_at = self.clock;
        self.presentation = next;
        info!("tiles now {:?}", next);
    }

    fn tweens(&self, index: usize) -> [Tween; 3] {
        let from = self.start.get(index).copied().unwrap_or(MOUNT_POSE);
        match self.presentation {
            Presentation::Orbiting => {
                let delay = index as f64 * 0.12 + 0.35;
                [
                    Tween { from: from.opacity, to: 1.0, delay, duration: 1.0, curve: EASE_OUT },
                    Tween { from: from.scale, to: 1.0, delay, duration: 1.0, curve: EASE_OUT },
                    Tween { from: from.rotation, to: 0.0, delay: 0.0, duration: 0.5, curve: EASE_OUT },
                ]
            }
            Presentation::Scattering => {
                let spin = index as f64 * self.config.scatter_rotation_step_degrees;
                [
                    Tween { from: from.opacity, to: 0.0, delay: 0.0, duration: 0.4, curve: EASE_OUT },
                    Tween { from: from.scale, to: 0.5, delay: 0.0, duration: 0.4, curve: EASE_OUT },
                    Tween { from: from.rotation, to: spin, delay: 0.0, duration: 0.5, curve: EASE_OUT },
                ]
            }
        }
    }

    fn pose(&self, index: usize) -> Pose {
        let t = self.clock - self.switched_at;
        let [opacity, scale, rotation] = self.tweens(index);
        Pose { opacity: opacity.value_at(t), scale: scale.value_at(t), rotation: rotation.value_at(t) }
    }

    /// Where and how to draw `tile` when its phase has advanced by `progress`.
    pub fn visual(&self, tile: &Tile, progress: f64) -> TileVisual {
        let radius = match self.presentation {
            Presentation::Orbiting => tile.orbit_radius,
            Presentation::Scattering => self.config.scatter_radius,
        };
        let pose = self.pose(tile.index);
        TileVisual {
            position: position(tile.phase(progress), radius),
            opacity: pose.opacity,
            scale: pose.scale,
            rotation_degrees: pose.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::ring_tiles;

    fn setup() -> (TransitionController, Vec<Tile>) {
        let config = OrbitConfig::default();
        (TransitionController::new(&config), ring_tiles(config.tile_count, config.orbit_radius))
    }

    #[test]
    fn tiles_fade_in_staggered() {
        let (mut c, tiles) = setup();
        let v = c.visual(&tiles[0], 0.0);
        assert_eq!(v.opacity, 0.0);
        assert_eq!(v.scale, 0.9);
        c.advance(0.9);
        assert!(c.visual(&tiles[0], 0.0).opacity > c.visual(&tiles[7], 0.0).opacity);
        c.advance(5.0);
        for t in &tiles {
            let v = c.visual(t, 0.0);
            assert_eq!((v.opacity, v.scale, v.rotation_degrees), (1.0, 1.0, 0.0));
        }
    }

    #[test]
    fn scattering_pushes_every_tile_outward() {
        let (mut c, tiles) = setup();
        c.advance(3.0);
        for i in 0..40 {
            let progress = i as f64 * 0.09;
            let orbit: Vec<f64> = tiles.iter().map(|t| c.visual(t, progress).position.length()).collect();
            c.set_transitioning(true);
            for (t, r) in tiles.iter().zip(&orbit) {
                assert!(c.visual(t, progress).position.length() > *r);
            }
            c.set_transitioning(false);
        }
    }

    #[test]
    fn scatter_fades_and_spins_by_index() {
        let (mut c, tiles) = setup();
        c.advance(3.0);
        c.set_transitioning(true);
        assert_eq!(c.presentation(), Presentation::Scattering);
        assert_eq!(c.visual(&tiles[3], 0.0).opacity, 1.0);
        c.advance(1.0);
        for t in &tiles {
            let v = c.visual(t, 0.0);
            assert_eq!(v.opacity, 0.0);
            assert_eq!(v.scale, 0.5);
            assert_eq!(v.rotation_degrees, t.index as f64 * 45.0);
        }
        // same direction, bigger circle
        let v = c.visual(&tiles[2], 0.1);
        let dir = tiles[2].position(0.1).normalize();
        assert!((v.position - dir * 600.0).length() < 1e-9);
    }

    #[test]
    fn repeated_flag_does_not_restart_tweens() {
        let (mut c, tiles) = setup();
        c.advance(3.0);
        c.set_transitioning(true);
        c.advance(0.2);
        let mid = c.visual(&tiles[1], 0.0).opacity;
        c.set_transitioning(true);
        assert_eq!(c.visual(&tiles[1], 0.0).opacity, mid);
        assert!(mid > 0.0 && mid < 1.0);
    }
}
