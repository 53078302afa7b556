use std::path::Path;

use block_atlas::{ATLAS_SIZE, AtlasError, TILE_SIZE, TILES_PER_ROW, TileColors, atlas};
use log::error;

/// Where the game expects the block atlas, relative to this tool's
/// invocation directory.
const OUTPUT_PATH: &str = "../../assets/textures/block_atlas.png";

fn main() {
  env_logger::init();

  if let Err(err) = run() {
    error!("atlas generation failed: {err}");
    std::process::exit(1);
  }
}

fn run() -> Result<(), AtlasError> {
  println!("🎨 Generating placeholder texture atlas...");

  let colors = TileColors::new();
  let mut rng = rand::rng();
  let (image, summary) = atlas::generate(&colors, &mut rng);
  atlas::write_png(&image, Path::new(OUTPUT_PATH))?;

  println!("✅ Atlas written: {OUTPUT_PATH}");
  println!("📊 Size: {ATLAS_SIZE}x{ATLAS_SIZE} pixels");
  println!("📦 Tiles: {TILES_PER_ROW}x{TILES_PER_ROW} ({TILE_SIZE}x{TILE_SIZE} each)");
  println!("🎨 Textured tiles: {}", summary.textured_tiles);
  println!("💜 Placeholder tiles: {}", summary.placeholder_tiles);

  Ok(())
}
