//! Binary quantization for the 1bpp encoding.

use log::debug;

use super::{Dither, DEFAULT_THRESHOLD};
use crate::grid::{BitGrid, GrayGrid, PixelGrid};

/// 4x4 Bayer index matrix, values 0..16.
const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

/// Reduce a grayscale grid to dark/light decisions (`true` = dark).
///
/// Uniform black input yields an all-dark grid and uniform white input an
/// all-light grid for every method.
pub fn dither(gray: &GrayGrid, method: Dither) -> BitGrid {
    debug!(
        "dithering {}x{} grid with {}",
        gray.width(),
        gray.height(),
        method
    );
    match method {
        Dither::FloydSteinberg => floyd_steinberg(gray),
        Dither::Bayer => bayer(gray),
        Dither::Threshold(t) => threshold(gray, t),
    }
}

/// Floyd-Steinberg error diffusion.
///
/// Error distribution pattern:
/// - Right:        7/16
/// - Bottom-left:  3/16
/// - Bottom:       5/16
/// - Bottom-right: 1/16
fn floyd_steinberg(gray: &GrayGrid) -> BitGrid {
    let width = gray.width() as usize;
    let cutoff = DEFAULT_THRESHOLD as i16;

    // Error rows carry one guard cell on each side; pixel x lives at x + 1.
    let mut current = vec![0i16; width + 2];
    let mut below = vec![0i16; width + 2];
    let mut dark = Vec::with_capacity(gray.len());

    for y in 0..gray.height() {
        for (x, &sample) in gray.row(y).iter().enumerate() {
            let value = sample as i16 + current[x + 1];
            let is_dark = value < cutoff;
            let error = value - if is_dark { 0 } else { 255 };

            current[x + 2] += error * 7 / 16;
            below[x] += error * 3 / 16;
            below[x + 1] += error * 5 / 16;
            below[x + 2] += error / 16;

            dark.push(is_dark);
        }
        std::mem::swap(&mut current, &mut below);
        below.fill(0);
    }

    gray.with_samples(dark)
}

fn bayer(gray: &GrayGrid) -> BitGrid {
    PixelGrid::from_fn(gray.width(), gray.height(), |x, y| {
        // Cell centres spread the 16 thresholds over 8..=248
        let cutoff = BAYER_4X4[(y & 3) as usize][(x & 3) as usize] as u16 * 16 + 8;
        (gray.row(y)[x as usize] as u16) < cutoff
    })
}

/// A zero threshold is raised to 1 so black stays black.
fn threshold(gray: &GrayGrid, cutoff: u8) -> BitGrid {
    let cutoff = cutoff.max(1);
    gray.map(|&v| v < cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;

    const METHODS: [Dither; 4] = [
        Dither::FloydSteinberg,
        Dither::Bayer,
        Dither::Threshold(128),
        Dither::Threshold(0),
    ];

    fn gradient(width: u32, height: u32) -> GrayGrid {
        PixelGrid::from_fn(width, height, |x, _| (x * 255 / (width - 1)) as u8)
    }

    fn dark_fraction(bits: &BitGrid) -> f64 {
        bits.samples().iter().filter(|&&d| d).count() as f64 / bits.len() as f64
    }

    #[test]
    fn test_all_white_is_all_light() {
        let white = PixelGrid::filled(16, 8, 255u8);
        for method in METHODS {
            let bits = dither(&white, method);
            assert!(
                bits.samples().iter().all(|&d| !d),
                "{} produced dark pixels on white",
                method
            );
        }
    }

    #[test]
    fn test_all_black_is_all_dark() {
        let black = PixelGrid::filled(16, 8, 0u8);
        for method in METHODS {
            let bits = dither(&black, method);
            assert!(
                bits.samples().iter().all(|&d| d),
                "{} produced light pixels on black",
                method
            );
        }
    }

    #[test]
    fn test_preserves_geometry() {
        let gray = gradient(10, 5);
        for method in METHODS {
            let bits = dither(&gray, method);
            assert_eq!((bits.width(), bits.height()), (10, 5));
            assert_eq!(bits.len(), 50);
        }
    }

    #[test]
    fn test_floyd_steinberg_mid_gray_is_half_dark() {
        let gray = PixelGrid::filled(64, 64, 128u8);
        let fraction = dark_fraction(&dither(&gray, Dither::FloydSteinberg));
        assert!(
            (0.4..=0.6).contains(&fraction),
            "expected about half dark, got {}",
            fraction
        );
    }

    #[test]
    fn test_floyd_steinberg_tracks_luminance() {
        let light = PixelGrid::filled(64, 64, 192u8);
        let dark = PixelGrid::filled(64, 64, 64u8);
        let light_fraction = dark_fraction(&dither(&light, Dither::FloydSteinberg));
        let dark_fraction = dark_fraction(&dither(&dark, Dither::FloydSteinberg));

        assert!((0.15..=0.35).contains(&light_fraction));
        assert!((0.65..=0.85).contains(&dark_fraction));
    }

    #[test]
    fn test_floyd_steinberg_breaks_up_flat_regions() {
        // A fixed cut-off turns uniform 100 into solid black
        let gray = PixelGrid::filled(32, 32, 100u8);
        let banded = dither(&gray, Dither::Threshold(128));
        assert!(banded.samples().iter().all(|&d| d));
        assert!(dark_fraction(&dither(&gray, Dither::FloydSteinberg)) < 0.8);
    }

    #[test]
    fn test_bayer_pattern_on_mid_gray() {
        let gray = PixelGrid::filled(4, 4, 128u8);
        let bits = dither(&gray, Dither::Bayer);
        // Thresholds above 128 are cells 8..=15: exactly half the matrix
        assert_eq!(bits.samples().iter().filter(|&&d| d).count(), 8);
        // Cell (0,0) has threshold 8, cell (1,0) has threshold 136
        assert!(!bits.samples()[0]);
        assert!(bits.samples()[1]);
    }

    #[test]
    fn test_bayer_tiles_across_rows() {
        let gray = PixelGrid::filled(8, 8, 100u8);
        let bits = dither(&gray, Dither::Bayer);
        for y in 0..8 {
            assert_eq!(&bits.row(y)[0..4], &bits.row(y)[4..8]);
        }
        assert_eq!(bits.row(0), bits.row(4));
    }

    #[test]
    fn test_threshold_cutoff() {
        let gray = PixelGrid::from_samples(4, 1, vec![0u8, 127, 128, 255]).unwrap();
        let bits = dither(&gray, Dither::Threshold(128));
        assert_eq!(bits.samples(), &[true, true, false, false]);
    }

    #[test]
    fn test_gradient_black_end_has_more_dark_pixels() {
        let gray = gradient(64, 16);
        let bits = dither(&gray, Dither::FloydSteinberg);
        let left: usize = (0..16).map(|y| bits.row(y)[..16].iter().filter(|&&d| d).count()).sum();
        let right: usize = (0..16).map(|y| bits.row(y)[48..].iter().filter(|&&d| d).count()).sum();
        assert!(left > right, "left {} right {}", left, right);
    }

    #[test]
    fn test_empty_grid() {
        let gray = PixelGrid::filled(0, 0, 0u8);
        for method in METHODS {
            assert!(dither(&gray, method).is_empty());
        }
    }
}
