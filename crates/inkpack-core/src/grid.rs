//! Row-major pixel grids passed between pipeline stages.

use crate::decode::DecodedImage;
use crate::luminance::luma_u8;

/// A rectangular, row-major grid of samples.
///
/// `samples.len() == width * height` always holds; row `i` occupies
/// `samples[i * width..(i + 1) * width]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<T> {
    width: u32,
    height: u32,
    samples: Vec<T>,
}

/// Grayscale intensities, 0 = black, 255 = white.
pub type GrayGrid = PixelGrid<u8>;
/// 1bpp decisions, `true` = dark.
pub type BitGrid = PixelGrid<bool>;
/// 4bpp levels in `0..=7`.
pub type LevelGrid = PixelGrid<u8>;

impl<T> PixelGrid<T> {
    /// Wrap `samples`, returning `None` if the length does not match.
    pub fn from_samples(width: u32, height: u32, samples: Vec<T>) -> Option<Self> {
        if samples.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a grid by evaluating `f(x, y)` in scan order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in scan order.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    pub fn row(&self, y: u32) -> &[T] {
        let start = y as usize * self.width as usize;
        &self.samples[start..start + self.width as usize]
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.samples.get(y as usize * self.width as usize + x as usize)
    }

    /// Pair this grid's geometry with samples produced in scan order.
    pub(crate) fn with_samples<U>(&self, samples: Vec<U>) -> PixelGrid<U> {
        debug_assert_eq!(samples.len(), self.samples.len(), "Sample count mismatch");
        PixelGrid {
            width: self.width,
            height: self.height,
            samples,
        }
    }

    /// Apply `f` to every sample, keeping the geometry.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> PixelGrid<U> {
        PixelGrid {
            width: self.width,
            height: self.height,
            samples: self.samples.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> PixelGrid<T> {
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            samples: vec![value; width as usize * height as usize],
        }
    }
}

impl GrayGrid {
    /// Reduce an RGB image to perceptual luma.
    ///
    /// Returns `None` if the pixel buffer is not exactly `width * height`
    /// RGB triples.
    pub fn from_rgb(image: &DecodedImage) -> Option<Self> {
        if image.pixels.len() != image.pixel_count() * 3 {
            return None;
        }
        let samples = image
            .pixels
            .chunks_exact(3)
            .map(|px| luma_u8(px[0], px[1], px[2]))
            .collect();
        Self::from_samples(image.width, image.height, samples)
    }

    pub fn from_gray_image(image: &image::GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            samples: image.as_raw().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_checks_length() {
        assert!(PixelGrid::from_samples(2, 2, vec![0u8; 4]).is_some());
        assert!(PixelGrid::from_samples(2, 2, vec![0u8; 5]).is_none());
        assert!(PixelGrid::from_samples(0, 7, Vec::<u8>::new()).is_some());
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| (y * 10 + x) as u8);
        assert_eq!(grid.samples(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.row(1), &[10, 11, 12]);
        assert_eq!(grid.get(2, 1), Some(&12));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_map_keeps_geometry() {
        let grid = PixelGrid::filled(4, 3, 200u8);
        let bits = grid.map(|&v| v < 128);
        assert_eq!((bits.width(), bits.height()), (4, 3));
        assert_eq!(bits.len(), 12);
        assert!(bits.samples().iter().all(|&dark| !dark));
    }

    #[test]
    fn test_gray_from_rgb() {
        let image = DecodedImage::new(2, 1, vec![255, 255, 255, 0, 0, 0]);
        let gray = GrayGrid::from_rgb(&image).unwrap();
        assert_eq!(gray.samples(), &[255, 0]);
    }

    #[test]
    fn test_gray_from_rgb_rejects_short_buffer() {
        let image = DecodedImage {
            width: 16,
            height: 8,
            pixels: vec![0; 30],
        };
        assert!(GrayGrid::from_rgb(&image).is_none());

        let image = DecodedImage {
            width: 2,
            height: 1,
            pixels: vec![0; 7],
        };
        assert!(GrayGrid::from_rgb(&image).is_none());
    }

    #[test]
    fn test_gray_from_gray_image() {
        let image = image::GrayImage::from_pixel(5, 2, image::Luma([9]));
        let gray = GrayGrid::from_gray_image(&image);
        assert_eq!(gray.len(), 10);
        assert!(gray.samples().iter().all(|&v| v == 9));
    }
}
