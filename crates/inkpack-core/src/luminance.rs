//! Luma reduction using ITU-R BT.601 coefficients.
//!
//! These are the weights PIL and most image tools use for RGB to "L", which
//! keeps levels in line with bitmaps prepared by other tooling.

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Luma from u8 RGB values (0 to 255), rounded to the nearest integer.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma_u8(255, 255, 255), 255);
        assert_eq!(luma_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in [0u8, 31, 32, 64, 128, 192, 224, 255] {
            assert_eq!(luma_u8(v, v, v), v, "gray {} should map to itself", v);
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
        assert_eq!(luma_u8(255, 0, 0), 76);
        assert_eq!(luma_u8(0, 255, 0), 150);
        assert_eq!(luma_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_green_is_brighter_than_red_and_blue() {
        // A channel average would put all three primaries at 85
        let r = luma_u8(200, 0, 0);
        let g = luma_u8(0, 200, 0);
        let b = luma_u8(0, 0, 200);
        assert!(g > r && r > b);
    }
}
