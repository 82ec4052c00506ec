//! Eight-level grayscale buckets for the 4bpp encoding.

use log::debug;

use crate::grid::{GrayGrid, LevelGrid};

/// Number of distinct gray levels the 4bpp encoding carries.
pub const LEVEL_COUNT: u8 = 8;
/// Highest level; white maps here.
pub const MAX_LEVEL: u8 = LEVEL_COUNT - 1;
/// Width of each bucket over 0..=255.
pub const BUCKET_WIDTH: u8 = 32;

/// Bucket index of a grayscale value: `value / 32`.
///
/// Floor division keeps 255 in level 7, so no clamping is needed.
#[inline]
pub fn level_for(value: u8) -> u8 {
    value / BUCKET_WIDTH
}

/// Representative intensity of a level, spreading 0..=7 over 0..=255.
#[inline]
pub fn level_intensity(level: u8) -> u8 {
    let level = level.min(MAX_LEVEL) as u16;
    (level * 255 / MAX_LEVEL as u16) as u8
}

/// Map every sample of a grayscale grid to its level. No dithering.
pub fn to_levels(gray: &GrayGrid) -> LevelGrid {
    debug!("bucketing {}x{} grid into {} levels", gray.width(), gray.height(), LEVEL_COUNT);
    gray.map(|&v| level_for(v))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the level is floor division by 32 and always fits in 3 bits.
        #[test]
        fn prop_bucket_law(v in any::<u8>()) {
            let level = level_for(v);
            prop_assert_eq!(level, v / 32);
            prop_assert!(level <= MAX_LEVEL);
        }

        /// Property: levels never decrease as the input gets brighter.
        #[test]
        fn prop_monotonic(a in any::<u8>(), b in any::<u8>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_for(lo) <= level_for(hi));
        }
    }
}
