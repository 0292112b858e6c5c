//! # Hu-moment silhouette dataset generator
//!
//! Turns a directory of labeled images into a CSV of shape descriptors.
//! Each image goes through a fixed pipeline:
//!
//! - grayscale load
//! - inverted fixed threshold (dark shape on light background)
//! - first external contour, filled into a silhouette mask
//! - raster moments and the seven Hu invariants
//! - `log10(|h| + 1e-10)` per invariant, written as `label,h1,...,h7`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hu_dataset::{generate_dataset, DatasetConfig};
//!
//! // all-images/<label>/<image files>
//! let config = DatasetConfig::new("all-images", "hu_dataset.csv");
//! let summary = generate_dataset(&config)?;
//! println!("{} rows written", summary.written);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Single image
//!
//! ```rust,no_run
//! use hu_dataset::Pipeline;
//!
//! let descriptor = Pipeline::default().describe_file("circle/01.png")?;
//! println!("{:?}", descriptor.log_scaled());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod io;
pub mod config;
pub mod dataset;

pub use error::{DatasetError, Result};
pub use types::{DatasetRow, HuDescriptor, RunSummary, Sample, Silhouette, SkipReason, HU_COUNT, LOG_EPSILON};
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use io::{load_grayscale, read_dataset, DatasetWalker, DatasetWriter};
pub use config::{DatasetConfig, DEFAULT_OUTPUT};
pub use dataset::{generate_dataset, generate_with};
