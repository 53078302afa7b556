//! Placeholder texture atlas generator for the block game.
//!
//! Rasterizes a 16x16 grid of 16x16-pixel material tiles into one 256x256
//! RGBA buffer and writes it out as a PNG:
//! - [`tiles`]: the hand-authored material color catalog
//! - [`detail`]: per-pixel noise and border darkening
//! - [`atlas`]: the two fill passes and PNG serialization
//!
//! The random source is injected as a [`rand::Rng`] parameter throughout,
//! so tests can run the whole pipeline on a seeded generator.

pub mod atlas;
pub mod coords;
pub mod detail;
pub mod error;
pub mod rgba;
pub mod tiles;

pub use atlas::{AtlasSummary, generate, write_png};
pub use coords::{ATLAS_SIZE, LocalPos, TILE_SIZE, TILES_PER_ROW, TilePos};
pub use detail::{BORDER_FACTOR, NOISE_RANGE, texture_detail};
pub use error::AtlasError;
pub use rgba::Rgba;
pub use tiles::{CHECKER_EVEN, CHECKER_ODD, TileColor, TileColors, checkerboard};
