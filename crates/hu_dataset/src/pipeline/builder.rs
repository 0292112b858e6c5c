use crate::{
    algorithms::{ExternalContourExtractor, HuMomentDescriptor, InvertedThresholdPreprocessor, PolygonFiller},
    pipeline::Pipeline,
    traits::{ContourExtractor, ContourFiller, ImagePreprocessor, ShapeDescriptor},
};

/// Builder for creating processing pipelines with a fluent API
pub struct PipelineBuilder {
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    filler: Option<Box<dyn ContourFiller>>,
    descriptor: Option<Box<dyn ShapeDescriptor>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            preprocessors: Vec::new(),
            contour_extractor: None,
            filler: None,
            descriptor: None,
        }
    }

    /// Add a preprocessor to the pipeline
    pub fn add_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.preprocessors.push(Box::new(preprocessor));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    pub fn set_filler<F>(mut self, filler: F) -> Self
    where
        F: ContourFiller + 'static,
    {
        self.filler = Some(Box::new(filler));
        self
    }

    pub fn set_descriptor<D>(mut self, descriptor: D) -> Self
    where
        D: ShapeDescriptor + 'static,
    {
        self.descriptor = Some(Box::new(descriptor));
        self
    }

    /// Build the pipeline, filling unset stages with the dataset defaults.
    ///
    /// With no preprocessors the fixed inverted threshold (127) is used.
    pub fn build(mut self) -> Pipeline {
        if self.preprocessors.is_empty() {
            self.preprocessors.push(Box::new(InvertedThresholdPreprocessor::default()));
        }

        let contour_extractor = self
            .contour_extractor
            .unwrap_or_else(|| Box::new(ExternalContourExtractor));

        let filler = self.filler.unwrap_or_else(|| Box::new(PolygonFiller));

        let descriptor = self
            .descriptor
            .unwrap_or_else(|| Box::new(HuMomentDescriptor));

        Pipeline::new(self.preprocessors, contour_extractor, filler, descriptor)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn default_build_uses_inverted_threshold() {
        let pipeline = Pipeline::builder().build();
        assert_eq!(
            pipeline.info(),
            "Pipeline: 1 preprocessors, 1 contour extractor, 1 filler, 1 descriptor"
        );
    }

    #[test]
    fn custom_threshold_changes_foreground() {
        // mid-gray square, background white
        let mut img = GrayImage::from_pixel(40, 40, Luma([255u8]));
        for y in 10..30 {
            for x in 10..30 {
                img.put_pixel(x, y, Luma([160u8]));
            }
        }

        assert!(Pipeline::default().silhouette(&img).is_err());

        let pipeline = Pipeline::builder()
            .add_preprocessor(InvertedThresholdPreprocessor { threshold: 200 })
            .build();
        let silhouette = pipeline.silhouette(&img).unwrap();
        assert_eq!(silhouette.area(), 400);
    }
}
