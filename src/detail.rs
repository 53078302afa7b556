//! Per-pixel texture simulation.
//!
//! Turns a flat base color into something that reads as a surface: a small
//! random offset on each color channel, then a darkened rim on tile-edge
//! pixels so adjacent tiles stay visually separated.

use rand::Rng;

use crate::coords::LocalPos;
use crate::rgba::Rgba;

/// Symmetric bound for the per-channel noise offset.
pub const NOISE_RANGE: i16 = 12;

/// Channel multiplier applied to tile-edge pixels.
pub const BORDER_FACTOR: f32 = 0.7;

/// Computes the final color of one tile pixel.
///
/// Noise is applied before border darkening, so the edge rows keep the same
/// noise structure as the tile interior. The result is always fully opaque.
pub fn texture_detail<R: Rng>(base: Rgba, local: LocalPos, rng: &mut R) -> Rgba {
  let noisy = base.offset(
    rng.random_range(-NOISE_RANGE..=NOISE_RANGE),
    rng.random_range(-NOISE_RANGE..=NOISE_RANGE),
    rng.random_range(-NOISE_RANGE..=NOISE_RANGE),
  );
  let Rgba { r, g, b, .. } = if local.is_border() {
    noisy.darken(BORDER_FACTOR)
  } else {
    noisy
  };
  Rgba::rgb(r, g, b)
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  use super::*;
  use crate::coords::TILE_SIZE;

  #[test]
  fn interior_pixels_stay_within_noise_range() {
    let base = Rgba::rgb(115, 71, 46);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
      let px = texture_detail(base, LocalPos::new(5, 5), &mut rng);
      assert!((px.r as i16 - base.r as i16).abs() <= NOISE_RANGE);
      assert!((px.g as i16 - base.g as i16).abs() <= NOISE_RANGE);
      assert!((px.b as i16 - base.b as i16).abs() <= NOISE_RANGE);
    }
  }

  #[test]
  fn noise_clamps_at_channel_bounds() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1000 {
      let bright = texture_detail(Rgba::rgb(250, 250, 255), LocalPos::new(3, 3), &mut rng);
      assert!(bright.r >= 238);
      assert!(bright.b >= 243);

      let dark = texture_detail(Rgba::rgb(5, 0, 3), LocalPos::new(3, 3), &mut rng);
      assert!(dark.r <= 17);
      assert!(dark.g <= 12);
    }
  }

  #[test]
  fn border_pixels_are_darkened_after_noise() {
    let base = Rgba::rgb(200, 180, 160);

    // Same seed gives the same noise draws, so the border result must be
    // exactly the truncated 0.7 scale of the interior result.
    for seed in 0..100 {
      let mut interior_rng = StdRng::seed_from_u64(seed);
      let mut border_rng = StdRng::seed_from_u64(seed);

      let interior = texture_detail(base, LocalPos::new(5, 5), &mut interior_rng);
      let border = texture_detail(base, LocalPos::new(0, 5), &mut border_rng);

      assert_eq!(border.r, (interior.r as f32 * BORDER_FACTOR) as u8);
      assert_eq!(border.g, (interior.g as f32 * BORDER_FACTOR) as u8);
      assert_eq!(border.b, (interior.b as f32 * BORDER_FACTOR) as u8);
    }
  }

  #[test]
  fn all_four_edges_darken() {
    let base = Rgba::rgb(200, 200, 200);
    let edges = [
      LocalPos::new(0, 5),
      LocalPos::new(5, 0),
      LocalPos::new(TILE_SIZE - 1, 5),
      LocalPos::new(5, TILE_SIZE - 1),
    ];

    for edge in edges {
      let mut rng = StdRng::seed_from_u64(99);
      let px = texture_detail(base, edge, &mut rng);
      // 0.7 * (200 + 12) = 148.4 is the highest any channel can reach.
      assert!(px.r <= 148);
      assert!(px.g <= 148);
      assert!(px.b <= 148);
    }
  }

  #[test]
  fn output_is_always_opaque() {
    let mut rng = StdRng::seed_from_u64(1);
    let translucent = Rgba::new(100, 100, 100, 0);

    assert_eq!(texture_detail(translucent, LocalPos::new(4, 4), &mut rng).a, 255);
    assert_eq!(texture_detail(translucent, LocalPos::new(0, 0), &mut rng).a, 255);
  }

  #[test]
  fn same_seed_reproduces_pixels() {
    let base = Rgba::rgb(89, 191, 64);
    let mut rng_a = StdRng::seed_from_u64(1234);
    let mut rng_b = StdRng::seed_from_u64(1234);

    for local in LocalPos::tile_area() {
      assert_eq!(
        texture_detail(base, local, &mut rng_a),
        texture_detail(base, local, &mut rng_b)
      );
    }
  }
}
