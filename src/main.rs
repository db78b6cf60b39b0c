use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use gist::discovery::{self, DiscoveryConfig};
use gist::progress::ProgressReporter;
use gist::reader::{read_document, read_word_list};
use gist::summarizer::lexicon::{DEFAULT_ABBREVIATIONS, DEFAULT_STOPWORDS};
use gist::{
    process_files_parallel, Lexicon, ProcessingOptions, SelectionPolicy, Summarizer,
    SummarizerConfig, WordSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Summary text only
    Text,
    /// Selected sentences with index and score
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "gist")]
#[command(about = "Frequency-based extractive summarizer for plain-text documents")]
#[command(version)]
struct Args {
    /// Document to summarize, or a directory scanned for **/*.txt documents
    input: PathBuf,

    /// Write the summary here instead of stdout (single document only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop word list, one word per line (defaults to a built-in English list)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Abbreviation list, one entry per line including periods (defaults to a built-in list)
    #[arg(long)]
    abbreviations: Option<PathBuf>,

    /// Select exactly this many sentences instead of roughly a fifth of the document
    #[arg(long)]
    sentences: Option<usize>,

    /// Output format for single documents
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Resummarize documents that already have a complete summary
    #[arg(long)]
    overwrite_all: bool,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bars
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path for directory runs (defaults to <INPUT>/run_stats.json)
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: stdout carries the summary, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if !args.input.exists() {
        anyhow::bail!("Input path does not exist: {}", args.input.display());
    }

    let summarizer = Arc::new(build_summarizer(&args).await?);

    if args.input.is_dir() {
        summarize_directory(&args, summarizer).await
    } else {
        summarize_document(&args, &summarizer).await
    }
}

async fn build_summarizer(args: &Args) -> Result<Summarizer> {
    let stop_words = match &args.stopwords {
        Some(path) => read_word_list(path).await?,
        None => DEFAULT_STOPWORDS.iter().collect::<WordSet>(),
    };
    let abbreviations = match &args.abbreviations {
        Some(path) => read_word_list(path).await?,
        None => DEFAULT_ABBREVIATIONS.iter().collect::<WordSet>(),
    };
    info!(
        stop_words = stop_words.len(),
        abbreviations = abbreviations.len(),
        "Loaded lexicon"
    );

    let selection = match args.sentences {
        Some(count) => SelectionPolicy::Fixed(count),
        None => SelectionPolicy::default(),
    };
    Summarizer::new(
        Lexicon::new(stop_words, abbreviations),
        SummarizerConfig { selection },
    )
}

async fn summarize_document(args: &Args, summarizer: &Summarizer) -> Result<()> {
    let (text, read_stats) = read_document(&args.input).await?;
    let summary = summarizer.summarize(&text)?;
    info!(
        lines_read = read_stats.lines_read,
        bytes_read = read_stats.bytes_read,
        sentences_detected = summary.sentences_detected,
        sentences_selected = summary.sentences.len(),
        "Summarized {}",
        args.input.display()
    );

    let rendered = match args.format {
        OutputFormat::Text => summary.text(),
        OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
    };

    match &args.output {
        Some(path) => write_output(path, &rendered).await,
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

async fn write_output(path: &Path, rendered: &str) -> Result<()> {
    tokio::fs::write(path, format!("{rendered}\n"))
        .await
        .with_context(|| format!("Failed to write summary to {}", path.display()))
}

async fn summarize_directory(args: &Args, summarizer: Arc<Summarizer>) -> Result<()> {
    if args.output.is_some() {
        anyhow::bail!("--output applies to single documents; directory runs write <stem>_summary.txt files");
    }

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
    };
    let discovered = discovery::collect_discovered_files(&args.input, discovery_config).await?;
    let (valid, invalid): (Vec<_>, Vec<_>) =
        discovered.into_iter().partition(|f| f.error.is_none());
    if args.fail_fast {
        if let Some(error) = invalid.iter().find_map(|f| f.error.as_ref()) {
            anyhow::bail!("Document failed validation: {error}");
        }
    }
    let files: Vec<PathBuf> = valid.into_iter().map(|f| f.path).collect();

    let progress = if args.no_progress {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::for_files(files.len() as u64)?
    };

    let options = ProcessingOptions {
        overwrite_all: args.overwrite_all,
        fail_fast: args.fail_fast,
        max_concurrency: None,
    };
    let mut run_stats = process_files_parallel(&files, summarizer, options, &progress).await?;
    progress.finish();
    for file in invalid {
        if let Some(error) = file.error {
            run_stats.record_failed(&file.path, error);
        }
    }

    let stats_path = args
        .stats_out
        .clone()
        .unwrap_or_else(|| args.input.join("run_stats.json"));
    run_stats.write_json(&stats_path).await?;

    println!("gist v{} - directory run complete", env!("CARGO_PKG_VERSION"));
    println!("  Summarized: {} documents", run_stats.files_processed);
    println!("  Skipped: {} documents", run_stats.files_skipped);
    if run_stats.files_failed > 0 {
        println!("  Failed: {} documents", run_stats.files_failed);
    }
    println!("  Stats written to {}", stats_path.display());

    Ok(())
}
