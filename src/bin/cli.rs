//! surfstate CLI
//!
//! Fetches the NOAA Hawaii surf bulletin and prints it raw, as JSON, or as a summary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use surfstate::{
    error::Result,
    models::{BulletinFormat, Config},
    pipeline::{self, BulletinSource},
};

/// surfstate - NOAA surf bulletin reader
#[derive(Parser, Debug)]
#[command(name = "surfstate", version, about = "NOAA Hawaii surf bulletin reader")]

struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "surfstate.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download the raw bulletin
    Fetch {
        /// Save to a file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse the bulletin into a surf report
    Report {
        /// Island whose forecast to read (default: parser.default_region)
        #[arg(short, long)]
        island: Option<String>,

        /// Read a saved bulletin instead of downloading
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Override the configured wave table layout
        #[arg(long, value_enum)]
        format_variant: Option<FormatVariant>,
    },

    /// Validate configuration file
    Validate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
    Raw,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatVariant {
    Compact,
    Expanded,
}

impl From<FormatVariant> for BulletinFormat {
    fn from(variant: FormatVariant) -> Self {
        match variant {
            FormatVariant::Compact => BulletinFormat::Compact,
            FormatVariant::Expanded => BulletinFormat::Expanded,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Fetch { output } => {
            let xml = pipeline::run_fetch(&config, output.as_deref()).await?;
            if output.is_none() {
                println!("{xml}");
            }
        }

        Command::Report {
            island,
            input,
            format,
            format_variant,
        } => {
            if let Some(variant) = format_variant {
                config.parser.format = variant.into();
            }
            let source = input.map_or(BulletinSource::Remote, BulletinSource::File);

            match format {
                OutputFormat::Raw => {
                    let xml = pipeline::load_bulletin(&config, &source).await?;
                    println!("{xml}");
                }
                OutputFormat::Json => {
                    let report =
                        pipeline::run_report(&config, &source, island.as_deref()).await?;
                    println!("{}", pipeline::render_json(&report, config.output.pretty)?);
                }
                OutputFormat::Text => {
                    let report =
                        pipeline::run_report(&config, &source, island.as_deref()).await?;
                    print!(
                        "{}",
                        pipeline::render_text(&report, &config.output.wave_template)
                    );
                }
            }
        }

        Command::Validate => pipeline::run_validate(&config)?,
    }

    Ok(())
}
