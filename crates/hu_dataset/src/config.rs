use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output file used when none is configured
pub const DEFAULT_OUTPUT: &str = "hu_dataset.csv";

/// Where to read class directories from and where to write the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetConfig {
    pub input_dir: PathBuf,
    #[serde(default = "default_output")]
    pub output_csv: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl DatasetConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_csv: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_csv: output_csv.into(),
        }
    }

    /// Read `input_dir`, write to [`DEFAULT_OUTPUT`] in the working directory
    pub fn with_default_output(input_dir: impl Into<PathBuf>) -> Self {
        Self::new(input_dir, default_output())
    }
}
