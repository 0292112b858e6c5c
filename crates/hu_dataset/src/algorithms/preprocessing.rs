use image::GrayImage;

use crate::traits::ImagePreprocessor;

/// Cutoff used for every dataset image (0-255 scale)
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Fixed-level inverted thresholding.
///
/// Assumes dark shapes on a light background: pixels above `threshold` become
/// background (0), everything else becomes foreground (255).
#[derive(Debug, Clone)]
pub struct InvertedThresholdPreprocessor {
    pub threshold: u8,
}

impl Default for InvertedThresholdPreprocessor {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ImagePreprocessor for InvertedThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> GrayImage {
        let mut binary = imageproc::contrast::threshold(image, self.threshold);
        image::imageops::invert(&mut binary);
        binary
    }
}
