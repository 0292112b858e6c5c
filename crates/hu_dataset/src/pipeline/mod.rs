pub mod builder;

use std::path::Path;

use image::GrayImage;

use crate::{
    io::load_grayscale,
    traits::{ContourExtractor, ContourFiller, ImagePreprocessor, ShapeDescriptor},
    types::{HuDescriptor, Silhouette, SkipReason},
};

/// Per-image processing: binarize, take the first external contour, fill it,
/// and describe the resulting silhouette
pub struct Pipeline {
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    contour_extractor: Box<dyn ContourExtractor>,
    filler: Box<dyn ContourFiller>,
    descriptor: Box<dyn ShapeDescriptor>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(
        preprocessors: Vec<Box<dyn ImagePreprocessor>>,
        contour_extractor: Box<dyn ContourExtractor>,
        filler: Box<dyn ContourFiller>,
        descriptor: Box<dyn ShapeDescriptor>,
    ) -> Self {
        Self {
            preprocessors,
            contour_extractor,
            filler,
            descriptor,
        }
    }

    /// Build the filled silhouette of the first external contour the extractor
    /// reports (with the default extractor, the last one in raster order).
    ///
    /// Any further external contours are ignored.
    pub fn silhouette(&self, image: &GrayImage) -> Result<Silhouette, SkipReason> {
        let mut binary = image.clone();
        for preprocessor in &self.preprocessors {
            binary = preprocessor.preprocess(&binary);
        }

        let contours = self.contour_extractor.extract_contours(&binary);
        let first = contours
            .first()
            .filter(|contour| !contour.is_empty())
            .ok_or(SkipReason::NoContour)?;

        Ok(self.filler.fill(first, image.width(), image.height()))
    }

    pub fn describe_image(&self, image: &GrayImage) -> Result<HuDescriptor, SkipReason> {
        let silhouette = self.silhouette(image)?;
        Ok(self.descriptor.describe(&silhouette))
    }

    /// Load `path` as 8-bit grayscale and describe it
    pub fn describe_file<P: AsRef<Path>>(&self, path: P) -> Result<HuDescriptor, SkipReason> {
        let image = load_grayscale(path)?;
        self.describe_image(&image)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: {} preprocessors, 1 contour extractor, 1 filler, 1 descriptor",
            self.preprocessors.len()
        )
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::builder().build()
    }
}
