//! pdfsplit-rs CLI application
//!
//! Command-line interface for the pdfsplit-rs library.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use pdfsplit_rs::utils::{format_file_size, is_pdf_file, write_parts};
use pdfsplit_rs::{Config, TextExtractor, chunk_text};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdfsplit-rs")]
#[command(about = "Extract text from a PDF and split it into prompt-sized parts")]
#[command(version)]
struct Cli {
    /// JSON configuration file (defaults to environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text of a PDF
    Extract {
        /// PDF document
        input: PathBuf,

        /// Skip embedded text and always run OCR
        #[arg(long)]
        ocr: bool,
    },

    /// Extract a PDF and split its text into parts
    Split {
        /// PDF document
        input: PathBuf,

        /// Maximum characters per part
        #[arg(short, long)]
        max_part_length: Option<String>,

        /// Directory to write split_XXX_of_YYY.txt files into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print parts as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract { input, ocr } => {
            extract_command(&config, &input, ocr).await?;
        }
        Commands::Split {
            input,
            max_part_length,
            output_dir,
            json,
        } => {
            split_command(&config, &input, max_part_length, output_dir, json).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::from_env().context("reading configuration from environment")?,
    };
    config.validate()?;
    Ok(config)
}

fn check_input(input: &Path) -> anyhow::Result<()> {
    if !is_pdf_file(input) {
        bail!("{} is not a PDF file", input.display());
    }

    let size = std::fs::metadata(input)
        .with_context(|| format!("cannot access {}", input.display()))?
        .len();
    log::info!("📄 Processing {} ({})", input.display(), format_file_size(size));

    Ok(())
}

async fn extract_command(config: &Config, input: &Path, force_ocr: bool) -> anyhow::Result<()> {
    check_input(input)?;

    let extractor = TextExtractor::new(config)?;
    let text = if force_ocr {
        extractor.perform_ocr(input).await?
    } else {
        extractor.extract_text(input).await?
    };

    println!("{}", text);
    Ok(())
}

async fn split_command(
    config: &Config,
    input: &Path,
    max_part_length: Option<String>,
    output_dir: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    check_input(input)?;

    let max_part_length = match max_part_length {
        Some(raw) => raw.trim().parse::<i64>().ok(),
        None => i64::try_from(config.splitter.max_part_length).ok(),
    };

    let extractor = TextExtractor::new(config)?;
    let text = extractor.extract_text(input).await?;
    let parts = chunk_text(&text, max_part_length)?;

    if parts.is_empty() {
        eprintln!("No parts produced for {}", input.display());
        return Ok(());
    }

    if let Some(dir) = output_dir {
        let paths = write_parts(&dir, &parts)?;
        for path in paths {
            println!("{}", path.display());
        }
    } else if json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
    } else {
        for part in &parts {
            println!("===== {} =====", part.name);
            println!("{}", part.content);
        }
    }

    Ok(())
}
