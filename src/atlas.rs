//! Atlas assembly and serialization.
//!
//! Rasterizes the full tile grid into one RGBA buffer in two passes:
//! cataloged materials first, then a checkerboard fill for every cell
//! without an assigned color. The two passes partition the grid, so every
//! pixel is written exactly once and the magenta sentinel fill can only
//! survive a skipped cell.

use std::path::Path;

use image::RgbaImage;
use log::{debug, info};
use rand::Rng;

use crate::coords::{ATLAS_SIZE, LocalPos, TilePos};
use crate::detail::texture_detail;
use crate::error::AtlasError;
use crate::rgba::Rgba;
use crate::tiles::{TileColors, checkerboard};

/// Tile counts reported after a generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasSummary {
  /// Grid cells filled from the color catalog.
  pub textured_tiles: usize,
  /// Grid cells filled with the checkerboard placeholder.
  pub placeholder_tiles: usize,
}

/// Rasterizes the full atlas into a fresh buffer.
pub fn generate<R: Rng>(colors: &TileColors, rng: &mut R) -> (RgbaImage, AtlasSummary) {
  let mut image = RgbaImage::from_pixel(ATLAS_SIZE, ATLAS_SIZE, Rgba::MAGENTA.into());

  for tile in colors.iter() {
    fill_tile(&mut image, tile.pos, tile.color, rng);
  }
  debug!("filled {} cataloged tiles", colors.len());

  let mut placeholders = 0;
  for pos in TilePos::grid() {
    if colors.get(pos).is_none() {
      fill_tile(&mut image, pos, checkerboard(pos), rng);
      placeholders += 1;
    }
  }
  debug!("filled {placeholders} placeholder tiles");

  let summary = AtlasSummary {
    textured_tiles: colors.len(),
    placeholder_tiles: placeholders,
  };
  (image, summary)
}

/// Writes one tile's pixels through the detail pass.
fn fill_tile<R: Rng>(image: &mut RgbaImage, pos: TilePos, base: Rgba, rng: &mut R) {
  let (origin_x, origin_y) = pos.origin();
  for local in LocalPos::tile_area() {
    let color = texture_detail(base, local, rng);
    image.put_pixel(origin_x + local.x, origin_y + local.y, color.into());
  }
}

/// Encodes the buffer as a PNG at `path`, overwriting any existing file.
///
/// The target directory must already exist; a missing directory surfaces as
/// [`AtlasError::Io`].
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), AtlasError> {
  image.save(path)?;
  info!("atlas written to {}", path.display());
  Ok(())
}
