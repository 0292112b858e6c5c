use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use hu_dataset::{DatasetConfig, DatasetRow, DatasetWriter, Pipeline, SkipReason};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
    #[error("Either an input directory or a configuration file is required")]
    MissingInput,
}

/// Load a dataset configuration from a TOML string
pub fn config_from_toml(content: &str) -> Result<DatasetConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load a dataset configuration from a JSON string
pub fn config_from_json(content: &str) -> Result<DatasetConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Auto-detect file format and load configuration
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DatasetConfig, ConfigError> {
    let path_ref = path.as_ref();
    match path_ref.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => config_from_toml(&fs::read_to_string(path_ref)?),
        Some("json") => config_from_json(&fs::read_to_string(path_ref)?),
        _ => Err(ConfigError::UnsupportedFileFormat),
    }
}

/// Save a configuration, picking the format from the file extension
pub fn save_config<P: AsRef<Path>>(config: &DatasetConfig, path: P) -> Result<(), ConfigError> {
    let path_ref = path.as_ref();
    let content = match path_ref.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::to_string_pretty(config)?,
        Some("json") => serde_json::to_string_pretty(config)?,
        _ => return Err(ConfigError::UnsupportedFileFormat),
    };
    fs::write(path_ref, content)?;
    Ok(())
}

/// Pick the run configuration: a config file wins, otherwise `input` + `output`
pub fn resolve_config(
    config: Option<&Path>,
    input: Option<&Path>,
    output: &Path,
) -> Result<DatasetConfig, ConfigError> {
    match (config, input) {
        (Some(path), _) => load_config(path),
        (None, Some(input)) => Ok(DatasetConfig::new(input, output)),
        (None, None) => Err(ConfigError::MissingInput),
    }
}

/// Format a row exactly as the dataset writer emits it, without the line end
pub fn format_row(row: &DatasetRow) -> hu_dataset::Result<String> {
    let mut writer = DatasetWriter::from_writer(Vec::new());
    writer.write_row(row)?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&bytes).trim_end_matches(['\r', '\n']).to_string())
}

/// Describe a single image; its parent directory name is the label
pub fn describe_row(image: &Path) -> Result<DatasetRow, SkipReason> {
    let label = image
        .parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let descriptor = Pipeline::default().describe_file(image)?;
    Ok(DatasetRow::new(label, &descriptor))
}

/// Config file name used by the `skeleton` command when none is given
pub fn default_config_path() -> PathBuf {
    PathBuf::from("hu_dataset.toml")
}

/// Rows per label, in label order
pub fn label_counts(rows: &[DatasetRow]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.label.as_str()).or_insert(0) += 1;
    }
    counts
}
