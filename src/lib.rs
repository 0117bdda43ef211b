//! Scratch-to-reveal cards and a phase-locked orbiting tile ring.
//!
//! Two interactive pieces of a greeting presentation:
//! - [`ScratchSurface`]: an RGBA overlay the pointer erases with a soft brush;
//!   coverage is re-measured after every stroke sample and the card reveals
//!   itself exactly once past the threshold.
//! - [`TileRing`]: tiles orbiting a circle with evenly spaced phases, a seam
//!   copy that hides the wrap from last to first tile, and a scatter
//!   transition when the host advances.
//!
//! Everything is single-threaded and frame driven; the host feeds pointer
//! events and `dt` steps.

pub mod brush;
pub mod config;
pub mod coverage;
pub mod draw;
pub mod easing;
pub mod error;
pub mod font;
pub mod gamma;
pub mod orbit;
pub mod overlay;
pub mod phase;
pub mod pointer;
pub mod reveal;
pub mod ring;
pub mod scratch;
pub mod transition;
pub mod types;

pub use config::{OrbitConfig, ScratchConfig, REVEAL_THRESHOLD_PERCENT};
pub use error::Error;
pub use pointer::{PointerSource, SurfaceRect, TouchPoint};
pub use reveal::RevealState;
pub use ring::{NestedCopy, TileRing};
pub use scratch::ScratchSurface;
pub use transition::{Presentation, TileVisual};
pub use types::{FrameBuffer, RasterSurface};
