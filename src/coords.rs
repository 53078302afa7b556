//! Atlas geometry constants and coordinate types.
//!
//! Two coordinate spaces exist in the generator:
//! - [`TilePos`]: a cell in the atlas grid (0..`TILES_PER_ROW` per axis)
//! - [`LocalPos`]: a pixel offset within one tile (0..`TILE_SIZE` per axis)
//!
//! Absolute pixel positions only appear at the write site, as
//! `tile origin + local offset`, so tile-space and pixel-space values
//! never mix silently.

/// Atlas edge length in pixels (width and height).
pub const ATLAS_SIZE: u32 = 256;

/// Tile edge length in pixels.
pub const TILE_SIZE: u32 = 16;

/// Number of tiles per atlas edge (derived from atlas/tile sizes).
pub const TILES_PER_ROW: u32 = ATLAS_SIZE / TILE_SIZE;

/// Cell position in the atlas grid.
///
/// Each tile spans [`TILE_SIZE`] pixels in each dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TilePos {
  pub x: u32,
  pub y: u32,
}

impl TilePos {
  /// Creates a new tile position.
  pub const fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }

  /// Absolute pixel origin of this tile (top-left corner).
  pub const fn origin(self) -> (u32, u32) {
    (self.x * TILE_SIZE, self.y * TILE_SIZE)
  }

  /// Iterates every cell of the atlas grid.
  pub fn grid() -> impl Iterator<Item = TilePos> {
    (0..TILES_PER_ROW).flat_map(|x| (0..TILES_PER_ROW).map(move |y| TilePos::new(x, y)))
  }
}

/// Pixel position within a tile (0 to TILE_SIZE-1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalPos {
  pub x: u32,
  pub y: u32,
}

impl LocalPos {
  /// Creates a new local position.
  pub const fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }

  /// Returns true when the pixel lies on the tile's outer edge.
  pub const fn is_border(self) -> bool {
    self.x == 0 || self.y == 0 || self.x == TILE_SIZE - 1 || self.y == TILE_SIZE - 1
  }

  /// Iterates every pixel offset of one tile.
  pub fn tile_area() -> impl Iterator<Item = LocalPos> {
    (0..TILE_SIZE).flat_map(|x| (0..TILE_SIZE).map(move |y| LocalPos::new(x, y)))
  }
}
