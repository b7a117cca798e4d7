//! Process command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader, InputSource};
use crate::language_source::LanguageSource;
use crate::output::{create_writer, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pragmaseg_core::{Config, DocType, Segmenter};
use rayon::prelude::*;
use std::path::PathBuf;
use std::str::FromStr;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language code or English name [default: en]
    #[arg(short, long, value_name = "CODE", conflicts_with = "language_config")]
    pub language: Option<String>,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Override the code declared in the external language file
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,

    /// Document type, selects the cleaning steps [default: plain]
    #[arg(short, long, value_enum)]
    pub doc_type: Option<DocTypeArg>,

    /// Skip the cleaning stage
    #[arg(long)]
    pub no_clean: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// CLI configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

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
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Document types accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocTypeArg {
    /// Plain text
    Plain,
    /// Text extracted from PDF, with hard-wrapped lines
    Pdf,
    /// HTML markup
    Html,
}

impl From<DocTypeArg> for DocType {
    fn from(arg: DocTypeArg) -> Self {
        match arg {
            DocTypeArg::Plain => DocType::Plain,
            DocTypeArg::Pdf => DocType::Pdf,
            DocTypeArg::Html => DocType::Html,
        }
    }
}

/// Settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub language: LanguageSource,
    pub doc_type: DocType,
    pub format: OutputFormat,
    pub clean: bool,
    pub max_input_chars: Option<usize>,
    pub threads: usize,
    pub pretty_json: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.resolve_settings(&config)?;
        log::info!("Language: {}", settings.language.display_name());

        let segmenter = self.build_segmenter(&settings)?;
        let inputs = resolve_patterns(&self.input)?;
        log::info!("Processing {} input(s)", inputs.len());

        let results = self.segment_inputs(&segmenter, &inputs, settings.threads)?;

        let writer = create_writer(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, inputs.len() > 1)),
        };

        let mut total = 0;
        for (source, sentences) in &results {
            let name = source.to_string();
            for sentence in sentences {
                formatter.format_sentence(sentence, &name)?;
            }
            total += sentences.len();
        }
        formatter.finish()?;

        log::info!("Wrote {total} sentences");
        Ok(())
    }

    /// Merge command-line flags over the config file
    pub fn resolve_settings(&self, config: &CliConfig) -> Result<ResolvedSettings> {
        let language = match &self.language_config {
            Some(path) => LanguageSource::External {
                path: path.clone(),
                language_code: self.language_code.clone(),
            },
            None => LanguageSource::BuiltIn(
                self.language
                    .clone()
                    .unwrap_or_else(|| config.processing.default_language.clone()),
            ),
        };

        let doc_type = match self.doc_type {
            Some(arg) => arg.into(),
            None => DocType::from_str(&config.processing.doc_type)
                .context("Invalid doc_type in config file")?,
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true)
                .map_err(|e| anyhow::anyhow!("Invalid default_format in config file: {e}"))?,
        };

        let threads = match self.threads {
            Some(0) => anyhow::bail!("--threads must be at least 1"),
            Some(n) => n,
            None => config.worker_threads(),
        };

        let max_input_chars = match config.processing.max_input_chars {
            0 => None,
            n => Some(n),
        };

        Ok(ResolvedSettings {
            language,
            doc_type,
            format,
            clean: config.processing.clean && !self.no_clean,
            max_input_chars,
            threads,
            pretty_json: config.output.pretty_json,
        })
    }

    fn build_segmenter(&self, settings: &ResolvedSettings) -> Result<Segmenter> {
        let profile = settings.language.load()?;
        let mut builder = Config::builder()
            .language(profile.code())
            .doc_type(settings.doc_type)
            .clean(settings.clean);
        if let Some(cap) = settings.max_input_chars {
            builder = builder.max_input_len(cap);
        }
        let config = builder.build()?;
        Ok(Segmenter::with_profile_config(profile, config)?)
    }

    /// Read and segment every input on a rayon pool. Results keep input
    /// order.
    fn segment_inputs(
        &self,
        segmenter: &Segmenter,
        inputs: &[InputSource],
        threads: usize,
    ) -> Result<Vec<(InputSource, Vec<String>)>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker thread pool")?;

        let results = pool.install(|| {
            inputs
                .par_iter()
                .map(|source| -> Result<(InputSource, Vec<String>)> {
                    let text = match source {
                        InputSource::Stdin => FileReader::read_stdin()?,
                        InputSource::File(path) => {
                            log::debug!(
                                "Reading {} ({} bytes)",
                                path.display(),
                                FileReader::file_size(path)?
                            );
                            FileReader::read_text(path)?
                        }
                    };
                    let sentences = segmenter.segment(&text);
                    progress.file_completed(&source.to_string());
                    Ok((source.clone(), sentences))
                })
                .collect::<Result<Vec<_>>>()
        });

        progress.finish();
        results
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // a second initialization (tests, embedding) keeps the first logger
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
