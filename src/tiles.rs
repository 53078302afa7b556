//! Tile color catalog: which atlas cell belongs to which material.
//!
//! The catalog is hand-authored and immutable for a run. Cells it does not
//! cover are filled with the [`checkerboard`] placeholder shades so a
//! missing texture is obvious in-game.

use crate::coords::TilePos;
use crate::rgba::Rgba;

/// One catalog entry: a named material and its cell in the atlas grid.
pub struct TileColor {
  pub name: &'static str,
  pub pos: TilePos,
  pub color: Rgba,
}

/// Checkerboard shade for cells where `(x + y)` is even.
pub const CHECKER_EVEN: Rgba = Rgba::rgb(204, 0, 204);

/// Checkerboard shade for cells where `(x + y)` is odd.
pub const CHECKER_ODD: Rgba = Rgba::rgb(153, 0, 153);

/// Material color registry keyed by grid position.
pub struct TileColors {
  entries: Vec<TileColor>,
}

impl TileColors {
  /// Builds the registry with the built-in material colors.
  pub fn new() -> Self {
    Self {
      entries: vec![
        // Row 0
        TileColor {
          name: "dirt",
          pos: TilePos::new(0, 0),
          color: Rgba::rgb(115, 71, 46),
        },
        TileColor {
          name: "stone",
          pos: TilePos::new(1, 0),
          color: Rgba::rgb(107, 112, 117),
        },
        TileColor {
          name: "wood",
          pos: TilePos::new(2, 0),
          color: Rgba::rgb(133, 94, 66),
        },
        TileColor {
          name: "sand",
          pos: TilePos::new(3, 0),
          color: Rgba::rgb(237, 214, 158),
        },
        // Row 1
        TileColor {
          name: "grass_top",
          pos: TilePos::new(0, 1),
          color: Rgba::rgb(89, 191, 64),
        },
        TileColor {
          name: "grass_side",
          pos: TilePos::new(1, 1),
          color: Rgba::rgb(102, 140, 56),
        },
        TileColor {
          name: "leaves",
          pos: TilePos::new(2, 1),
          color: Rgba::rgb(51, 140, 38),
        },
        // Row 2
        TileColor {
          name: "glass",
          pos: TilePos::new(0, 2),
          color: Rgba::rgb(77, 204, 255),
        },
        TileColor {
          name: "gold",
          pos: TilePos::new(1, 2),
          color: Rgba::rgb(255, 194, 8),
        },
        TileColor {
          name: "silver",
          pos: TilePos::new(2, 2),
          color: Rgba::rgb(217, 222, 232),
        },
        TileColor {
          name: "metal",
          pos: TilePos::new(3, 2),
          color: Rgba::rgb(166, 171, 176),
        },
        // Row 3
        TileColor {
          name: "snow",
          pos: TilePos::new(0, 3),
          color: Rgba::rgb(250, 250, 255),
        },
        TileColor {
          name: "ice",
          pos: TilePos::new(1, 3),
          color: Rgba::rgb(153, 217, 242),
        },
      ],
    }
  }

  /// Returns the base color assigned to a cell, if any.
  pub fn get(&self, pos: TilePos) -> Option<Rgba> {
    self.entries.iter().find(|t| t.pos == pos).map(|t| t.color)
  }

  /// Iterates the catalog entries in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = &TileColor> {
    self.entries.iter()
  }

  /// Returns the number of cataloged materials.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns true if no materials are cataloged.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for TileColors {
  fn default() -> Self {
    Self::new()
  }
}

/// Placeholder shade for a cell outside the catalog, chosen by cell parity.
pub fn checkerboard(pos: TilePos) -> Rgba {
  if (pos.x + pos.y) % 2 == 0 {
    CHECKER_EVEN
  } else {
    CHECKER_ODD
  }
}
