// Scratch card: pointer gestures erase the overlay until enough of it is gone,
// then the card reveals itself once and stops listening.

use std::path::Path;

use log::{debug, info, warn};

use crate::brush::{erase, make_radial_stamp, Stamp};
use crate::config::ScratchConfig;
use crate::coverage::measure;
use crate::error::Error;
use crate::overlay::paint_overlay;
use crate::pointer::{map_to_raster, PointerSource, SurfaceRect};
use crate::reveal::{RevealMachine, RevealState};
use crate::types::RasterSurface;

pub struct ScratchSurface {
    config: ScratchConfig,
    raster: Option<RasterSurface>, // None = no rendering context; everything no-ops
    stamp: Stamp,
    reveal: RevealMachine,
    scratching: bool,
    coverage: f64,
}

impl ScratchSurface {
    /// Allocate and paint the overlay. This is the only time it is painted.
    pub fn mount(config: ScratchConfig, on_revealed: impl FnOnce() + 'static) -> Self {
        let raster = match RasterSurface::new(config.width, config.height) {
            Ok(mut raster) => {
                paint_overlay(&mut raster, &config);
                info!("scratch surface mounted ({}x{}, brush {})", config.width, config.height, config.brush_radius);
                Some(raster)
            }
            Err(e) => {
                warn!("scratch surface disabled: {e}");
                None
            }
        };
        Self {
            stamp: make_radial_stamp(config.brush_radius),
            reveal: RevealMachine::new(config.reveal_threshold_percent, Box::new(on_revealed)),
            config,
            raster,
            scratching: false,
            coverage: 0.0,
        }
    }

    pub fn pointer_down(&mut self, source: &PointerSource, rect: &SurfaceRect) {
        if self.reveal.is_revealed() {
            return;
        }
        self.scratching = true;
        self.scratch_from(source, rect);
    }

    pub fn pointer_move(&mut self, source: &PointerSource, rect: &SurfaceRect) {
        if !self.scratching {
            return;
        }
        self.scratch_from(source, rect);
    }

    pub fn pointer_up(&mut self) {
        self.scratching = false;
    }

    /// Leaving the surface ends the gesture like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    fn scratch_from(&mut self, source: &PointerSource, rect: &SurfaceRect) {
        let (x, y) = map_to_raster(source, rect, self.config.width, self.config.height);
        self.scratch_at(x, y);
    }

    /// One erase + measure + reveal-check cycle at raster coordinates.
    pub fn scratch_at(&mut self, x: f32, y: f32) {
        if self.reveal.is_revealed() {
            return;
        }
        let Some(raster) = self.raster.as_mut() else {
            return;
        };
        let changed = erase(raster, x, y, &self.stamp);
        self.coverage = measure(raster);
        debug!("scratch at ({x:.1},{y:.1}): {changed} px, coverage {:.2}%", self.coverage);

        if self.reveal.observe(self.coverage) {
            raster.clear();
            self.coverage = 100.0;
        }
    }

    pub fn coverage(&self) -> f64 {
        self.coverage
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    pub fn state(&self) -> RevealState {
        self.reveal.state()
    }

    pub fn is_scratching(&self) -> bool {
        self.scratching
    }

    pub fn raster(&self) -> Option<&RasterSurface> {
        self.raster.as_ref()
    }

    pub fn config(&self) -> &ScratchConfig {
        &self.config
    }

    /// Badge text for the progress indicator, hidden before the first
    /// scratch and after the reveal.
    pub fn progress_label(&self) -> Option<String> {
        if self.is_revealed() || self.coverage <= 0.0 {
            return None;
        }
        Some(format!("{}% scratched", self.coverage.round() as u32))
    }

    pub fn save_overlay(&self, path: &Path) -> Result<(), Error> {
        match &self.raster {
            Some(raster) => raster.save_png(path),
            None => Err(Error::SurfaceUnavailable { width: self.config.width, height: self.config.height }),
        }
    }
}
