use std::path::PathBuf;

use image::GrayImage;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

/// Number of Hu invariants in a descriptor
pub const HU_COUNT: usize = 7;

/// Offset added to each magnitude before taking the logarithm
pub const LOG_EPSILON: f64 = 1e-10;

/// Foreground value written into silhouette masks
pub const FOREGROUND: u8 = 255;

/// One image file together with its class label (the parent directory name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub label: String,
    pub path: PathBuf,
}

/// Filled outer silhouette of the first external contour.
///
/// Same dimensions as the source image; pixels are either 0 or [`FOREGROUND`].
#[derive(Debug, Clone)]
pub struct Silhouette {
    mask: GrayImage,
}

impl Silhouette {
    pub(crate) fn new(mask: GrayImage) -> Self {
        Self { mask }
    }

    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }

    pub fn into_mask(self) -> GrayImage {
        self.mask
    }

    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    /// Number of foreground pixels
    pub fn area(&self) -> usize {
        self.mask.pixels().filter(|p| p[0] != 0).count()
    }
}

/// The seven Hu invariant moments of a silhouette, in raw (unscaled) form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HuDescriptor(pub [f64; HU_COUNT]);

impl HuDescriptor {
    pub fn values(&self) -> &[f64; HU_COUNT] {
        &self.0
    }

    /// `log10(|h| + 1e-10)` for each invariant
    pub fn log_scaled(&self) -> [f64; HU_COUNT] {
        self.0.map(|h| (h.abs() + LOG_EPSILON).log10())
    }
}

/// One line of the output dataset: a label and seven log-scaled invariants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub label: String,
    pub values: [f64; HU_COUNT],
}

impl DatasetRow {
    pub fn new(label: impl Into<String>, descriptor: &HuDescriptor) -> Self {
        Self {
            label: label.into(),
            values: descriptor.log_scaled(),
        }
    }
}

/// Why a sample produced no dataset row
#[derive(Error, Debug, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    #[error("image could not be loaded: {0}")]
    Unreadable(#[from] image::ImageError),

    #[error("no external contour found")]
    NoContour,
}

/// Per-run tallies returned by the dataset generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub written: usize,
    pub unreadable: usize,
    pub no_contour: usize,
}

impl RunSummary {
    pub fn record_skip(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::Unreadable(_) => self.unreadable += 1,
            SkipReason::NoContour => self.no_contour += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.unreadable + self.no_contour
    }

    /// Every sample the walker produced
    pub fn total(&self) -> usize {
        self.written + self.skipped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_descriptor_scales_to_epsilon_floor() {
        let scaled = HuDescriptor([0.0; HU_COUNT]).log_scaled();
        for v in scaled {
            assert!((v - -10.0).abs() < 1e-12);
        }
    }

    #[test]
    fn log_scaling_uses_magnitude() {
        let scaled = HuDescriptor([1.0, -1.0, 0.01, -0.01, 1e3, 0.0, 1e-4]).log_scaled();
        assert!(scaled[0].abs() < 1e-9);
        assert!(scaled[1].abs() < 1e-9);
        assert!((scaled[2] - -2.0).abs() < 1e-7);
        assert!((scaled[3] - -2.0).abs() < 1e-7);
        assert!((scaled[4] - 3.0).abs() < 1e-9);
        assert!((scaled[6] - -4.0).abs() < 1e-5);
    }

    #[test]
    fn skip_reason_kind_names() {
        let kind: &'static str = (&SkipReason::NoContour).into();
        assert_eq!(kind, "no_contour");
    }

    #[test]
    fn summary_counts_skips_by_kind() {
        let mut summary = RunSummary::default();
        summary.written = 3;
        summary.record_skip(&SkipReason::NoContour);
        summary.record_skip(&SkipReason::Unreadable(image::ImageError::IoError(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        )));
        assert_eq!(summary.no_contour, 1);
        assert_eq!(summary.unreadable, 1);
        assert_eq!(summary.total(), 5);
    }
}
