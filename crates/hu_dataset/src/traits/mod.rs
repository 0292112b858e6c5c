use image::GrayImage;
use imageproc::point::Point;

use crate::types::{HuDescriptor, Silhouette};

/// Trait for image preprocessing algorithms
pub trait ImagePreprocessor: Send + Sync {
    /// Turn a grayscale image into a binary image (foreground non-zero)
    fn preprocess(&self, image: &GrayImage) -> GrayImage;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract contours from a binary image, in discovery order
    fn extract_contours(&self, binary_image: &GrayImage) -> Vec<Vec<Point<i32>>>;
}

/// Trait for turning a closed contour back into a filled mask
pub trait ContourFiller: Send + Sync {
    /// Rasterize `contour` onto a blank canvas of the given size
    fn fill(&self, contour: &[Point<i32>], width: u32, height: u32) -> Silhouette;
}

/// Trait for shape descriptors computed from a silhouette
pub trait ShapeDescriptor: Send + Sync {
    fn describe(&self, silhouette: &Silhouette) -> HuDescriptor;
}
