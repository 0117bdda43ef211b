use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use greeting_reveal::ScratchConfig;

#[derive(Parser, Debug)]
#[command(about = "Orbiting photo ring followed by a scratch-to-reveal card", version)]
pub struct Args {
    /// Which scratch card to show after the ring
    #[arg(long, value_enum, default_value_t = CardKind::Gold)]
    pub card: CardKind,

    /// Seed for the overlay's sparkle dots (defaults to the card's own seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Window width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 640)]
    pub height: usize,

    /// Start directly on the scratch card
    #[arg(long)]
    pub skip_orbit: bool,

    /// When set, write the overlay raster to this PNG on exit
    #[arg(long)]
    pub dump_overlay: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CardKind {
    Gold,
    Sky,
}

impl Args {
    pub fn scratch_config(&self) -> ScratchConfig {
        let base = match self.card {
            CardKind::Gold => ScratchConfig::gold_ticket(),
            CardKind::Sky => ScratchConfig::sky_ticket(),
        };
        match self.seed {
            Some(seed) => base.with_seed(seed),
            None => base,
        }
    }
}
