//! Split and reverse command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_sources, InputSource};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordflip_api::{Config, Operation, Output, TextProcessor};

/// Arguments shared by the split and reverse commands
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Omit word offsets from structured output
    #[arg(long)]
    pub no_spans: bool,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text: one word per line, or the reversed text
    Text,
    /// JSON array of words or reversed documents
    Json,
    /// Markdown list of words or reversed sections
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from configuration
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")))
    }
}

impl ProcessArgs {
    /// Execute the command with the given operation
    pub fn execute(&self, operation: Operation) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting {operation}");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&cli_config.output.default_format)?,
        };

        if self.threads == Some(0) {
            return Err(
                CliError::ConfigError("Thread count must be greater than 0".into()).into(),
            );
        }

        let config = Config::builder()
            .operation(operation)
            .include_spans(!self.no_spans && cli_config.output.include_spans)
            .max_input_bytes(cli_config.max_input_bytes())
            .build()
            .map_err(CliError::from)?;
        let processor = TextProcessor::with_config(config).map_err(CliError::from)?;

        let sources = resolve_sources(&self.input)?;
        log::info!("Resolved {} input(s)", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let results = if self.use_parallel(&cli_config, sources.len()) {
            let threads = self
                .threads
                .or(match cli_config.performance.worker_threads {
                    0 => None,
                    n => Some(n),
                })
                .unwrap_or_else(num_cpus::get);
            log::info!("Processing in parallel with {threads} threads");

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                sources
                    .par_iter()
                    .map(|source| process_source(&processor, source, &progress))
                    .collect::<Result<Vec<_>>>()
            })?
        } else {
            sources
                .iter()
                .map(|source| process_source(&processor, source, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let mut formatter =
            self.create_formatter(format, cli_config.output.pretty_json, results.len())?;
        for (source, output) in &results {
            match &output.reversed {
                Some(text) => formatter.format_reversed(source, text)?,
                None => formatter.format_words(source, &output.words)?,
            }
        }
        formatter.finish()?;

        let total_words: usize = results.iter().map(|(_, o)| o.metadata.word_count).sum();
        log::info!("Finished {operation}: {total_words} words");

        Ok(())
    }

    fn use_parallel(&self, config: &CliConfig, source_count: usize) -> bool {
        if source_count < 2 {
            return false;
        }
        let threshold = config.performance.parallel_file_threshold;
        self.parallel || (threshold > 0 && source_count >= threshold)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty: bool,
        documents: usize,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::with_headers(writer, documents > 1)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

/// Read and process one source, returning its display name and output
fn process_source(
    processor: &TextProcessor,
    source: &InputSource,
    progress: &ProgressReporter,
) -> Result<(String, Output)> {
    let name = source.to_string();
    let text = source.read_text(processor.config().max_input_bytes())?;
    log::debug!("Read {} ({} bytes)", name, text.len());

    let output = processor
        .process_text(&text)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to process {name}"))?;

    progress.file_completed(&name);
    Ok((name, output))
}
