use clap::{Parser, Subcommand};
use cli::{default_config_path, describe_row, format_row, label_counts, resolve_config, save_config};
use color_eyre::eyre::Result;
use hu_dataset::{generate_dataset, read_dataset, DatasetConfig, SkipReason, DEFAULT_OUTPUT};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the Hu-moment CSV from a directory of labeled image folders
    Generate {
        /// Root directory; each subdirectory name is a class label
        #[arg(short, long, required_unless_present = "config", conflicts_with = "config")]
        input: Option<PathBuf>,
        /// Output CSV file (overwritten)
        #[arg(short, long, default_value = DEFAULT_OUTPUT, conflicts_with = "config")]
        output: PathBuf,
        /// TOML or JSON configuration file with `input_dir` and `output_csv`
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write a configuration file to edit and pass to `generate --config`
    Skeleton {
        /// Destination; `.toml` or `.json`
        path: Option<PathBuf>,
        /// Root directory of labeled image folders
        #[arg(short, long, default_value = "all-images")]
        input: PathBuf,
        /// Output CSV file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Print the dataset row for a single image
    Describe {
        /// Image file; its parent directory name is used as the label
        image: PathBuf,
    },
    /// Summarize an existing dataset file
    Inspect {
        /// Dataset CSV produced by `generate`
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { input, output, config } => {
            let config = resolve_config(config.as_deref(), input.as_deref(), output)?;
            generate(&config)?;
        }
        Commands::Skeleton { path, input, output } => {
            let path = path.clone().unwrap_or_else(default_config_path);
            save_config(&DatasetConfig::new(input, output), &path)?;
            info!("Wrote configuration skeleton to {}", path.display());
        }
        Commands::Describe { image } => {
            describe(image)?;
        }
        Commands::Inspect { csv } => {
            inspect(csv)?;
        }
    }

    Ok(())
}

fn generate(config: &DatasetConfig) -> Result<()> {
    info!(
        "Generating dataset from {} into {}",
        config.input_dir.display(),
        config.output_csv.display()
    );

    let summary = generate_dataset(config)?;

    info!(
        "✅ {} rows written, {} skipped ({} unreadable, {} without contour)",
        summary.written,
        summary.skipped(),
        summary.unreadable,
        summary.no_contour
    );
    Ok(())
}

fn describe(image: &Path) -> Result<()> {
    match describe_row(image) {
        Ok(row) => {
            println!("{}", format_row(&row)?);
        }
        Err(reason) => {
            let kind: &'static str = (&reason).into();
            match &reason {
                SkipReason::Unreadable(_) => warn!(path = %image.display(), kind, "{}", reason),
                SkipReason::NoContour => info!(path = %image.display(), kind, "{}", reason),
            }
        }
    }
    Ok(())
}

fn inspect(csv: &Path) -> Result<()> {
    let rows = read_dataset(csv)?;
    info!("{}: {} rows", csv.display(), rows.len());
    for (label, count) in label_counts(&rows) {
        info!("  {label}: {count}");
    }
    Ok(())
}
