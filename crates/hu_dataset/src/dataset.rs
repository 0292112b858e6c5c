use tracing::{debug, info, warn};

use crate::{
    config::DatasetConfig,
    error::Result,
    io::{DatasetWalker, DatasetWriter},
    pipeline::Pipeline,
    types::{DatasetRow, RunSummary, SkipReason},
};

/// Generate the Hu-moment dataset with the default pipeline
pub fn generate_dataset(config: &DatasetConfig) -> Result<RunSummary> {
    generate_with(&Pipeline::default(), config)
}

/// Walk `config.input_dir`, describe every sample with `pipeline` and write one
/// row per described sample to `config.output_csv`.
///
/// Samples that cannot be loaded or have no external contour are logged and
/// counted, never fatal. The output file is truncated at the start of the run.
pub fn generate_with(pipeline: &Pipeline, config: &DatasetConfig) -> Result<RunSummary> {
    let walker = DatasetWalker::new(&config.input_dir)?;
    let mut writer = DatasetWriter::create(&config.output_csv)?;
    let mut summary = RunSummary::default();

    debug!(
        input = %config.input_dir.display(),
        output = %config.output_csv.display(),
        "{}",
        pipeline.info()
    );

    for sample in walker {
        let sample = sample?;

        match pipeline.describe_file(&sample.path) {
            Ok(descriptor) => {
                writer.write_row(&DatasetRow::new(sample.label.as_str(), &descriptor))?;
                summary.written += 1;
                info!(path = %sample.path.display(), label = %sample.label, "Processed");
            }
            Err(reason) => {
                match &reason {
                    SkipReason::Unreadable(err) => {
                        warn!(path = %sample.path.display(), error = %err, "Error loading image");
                    }
                    SkipReason::NoContour => {
                        info!(path = %sample.path.display(), "No external contour, skipping");
                    }
                }
                summary.record_skip(&reason);
            }
        }
    }

    writer.flush()?;

    info!(
        written = summary.written,
        unreadable = summary.unreadable,
        no_contour = summary.no_contour,
        output = %config.output_csv.display(),
        "Dataset generated"
    );

    Ok(summary)
}
