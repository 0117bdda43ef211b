// Tunables for the scratch cards and the tile ring.
// Defaults reproduce the values the screens ship with.

use image::Rgba;

/// Coverage (percent) that must be strictly exceeded before the card reveals.
pub const REVEAL_THRESHOLD_PERCENT: f64 = 50.0;

/// Brush radius used by the gold ticket.
pub const DEFAULT_BRUSH_RADIUS: i32 = 30;

/// Number of decorative sparkle dots painted onto a fresh overlay.
pub const SPARKLE_COUNT: usize = 20;

/// One color stop of the overlay's diagonal gradient; `offset` is in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba<u8>,
}

impl GradientStop {
    pub const fn new(offset: f32, r: u8, g: u8, b: u8) -> Self {
        Self { offset, color: Rgba([r, g, b, 255]) }
    }
}

/// Five stops alternating `base` and `shine`, the look of a foil ticket.
fn foil(base: (u8, u8, u8), shine: (u8, u8, u8)) -> Vec<GradientStop> {
    [(0.0, base), (0.3, shine), (0.5, base), (0.7, shine), (1.0, base)]
        .into_iter()
        .map(|(o, (r, g, b))| GradientStop::new(o, r, g, b))
        .collect()
}

#[derive(Clone, Debug)]
pub struct ScratchConfig {
    pub width: u32,
    pub height: u32,
    pub brush_radius: i32,
    pub reveal_threshold_percent: f64,
    pub overlay_colors: Vec<GradientStop>,
    pub label: String,
    pub label_color: Rgba<u8>,
    pub label_scale: i32,       // 5x7 glyphs are multiplied by this
    pub sparkle_count: usize,
    pub sparkle_radius: i32,
    pub sparkle_color: Rgba<u8>,
    pub sparkle_seed: u64,
}

impl ScratchConfig {
    /// 350x200 gold card.
    pub fn gold_ticket() -> Self {
        Self {
            width: 350,
            height: 200,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            reveal_threshold_percent: REVEAL_THRESHOLD_PERCENT,
            overlay_colors: foil((0xD4, 0xAF, 0x37), (0xF5, 0xE6, 0xA3)),
            label: "GRATTE-MOI !".to_string(),
            label_color: Rgba([0x8B, 0x69, 0x14, 255]),
            label_scale: 3,
            sparkle_count: SPARKLE_COUNT,
            sparkle_radius: 2,
            sparkle_color: Rgba([255, 255, 255, 153]),
            sparkle_seed: 0x5C2A7C4,
        }
    }

    /// 400x300 blue card with a slightly wider brush.
    pub fn sky_ticket() -> Self {
        Self {
            width: 400,
            height: 300,
            brush_radius: 35,
            overlay_colors: foil((0x4A, 0x90, 0xD9), (0x87, 0xCE, 0xEB)),
            label: "GRATTE POUR DECOUVRIR !".to_string(),
            label_color: Rgba([0x1E, 0x3A, 0x5F, 255]),
            label_scale: 2,
            ..Self::gold_ticket()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sparkle_seed = seed;
        self
    }
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self::gold_ticket()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub tile_count: usize,
    pub orbit_radius: f64,
    pub scatter_radius: f64,
    pub tile_size: f64,
    pub cycle_seconds: f64,   // one full revolution
    pub pause_seconds: f64,   // rest between revolutions
    pub scatter_rotation_step_degrees: f64,
    pub advance_button_radius: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            tile_count: 8,
            orbit_radius: 180.0,
            scatter_radius: 600.0,
            tile_size: 150.0,
            cycle_seconds: 7.0,
            pause_seconds: 1.0,
            scatter_rotation_step_degrees: 45.0,
            advance_button_radius: 40.0,
        }
    }
}
