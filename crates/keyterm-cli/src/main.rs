use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use keyterm_core::{
    load_content, ExtractorParams, Keyword, KeywordExtractor, StopwordSet, DEFAULT_DELIMITER,
    DEFAULT_MIN_TERM_LEN,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Print the most frequent meaningful words of a document
#[derive(Parser, Debug)]
#[command(name = "keyterm", version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "text"])))]
struct Cli {
    /// Document to extract keywords from
    file: Option<PathBuf>,

    /// Extract keywords from this text instead of a file
    #[arg(long)]
    text: Option<String>,

    /// Number of keywords to print
    #[arg(short = 'n', long, default_value_t = 5)]
    top: usize,

    /// Stopword file, one word per line
    #[arg(short, long)]
    stopwords: Option<PathBuf>,

    /// Use the built-in English stopword list
    #[arg(long, conflicts_with = "stopwords")]
    english: bool,

    /// Regex separating words
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pattern: String,

    /// Minimum keyword length in characters
    #[arg(long, default_value_t = DEFAULT_MIN_TERM_LEN)]
    min_len: usize,

    /// Print keywords with counts and frequencies as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_filter(&self) -> EnvFilter {
        let default = match self.verbose {
            0 => "keyterm=warn",
            1 => "keyterm=info,keyterm_core=info",
            2 => "keyterm=debug,keyterm_core=debug",
            _ => "keyterm=trace,keyterm_core=trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }

    fn stopword_set(&self) -> Result<StopwordSet> {
        if let Some(path) = &self.stopwords {
            return StopwordSet::load(path).context("failed to load stopwords");
        }
        if self.english {
            return Ok(StopwordSet::english());
        }
        Ok(StopwordSet::empty())
    }

    fn content(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => load_content(path).context("failed to load document"),
            (None, None) => anyhow::bail!("no input given"),
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<Keyword>> {
    let params = ExtractorParams {
        delimiter: cli.pattern.clone(),
        min_term_len: cli.min_len,
    };
    let stopwords = cli.stopword_set()?;
    info!(stopwords = stopwords.len(), "stopwords ready");

    let extractor = KeywordExtractor::with_params(&params, stopwords)?;
    let content = cli.content()?;
    debug!(bytes = content.len(), top = cli.top, "extracting");

    let keywords = extractor.extract_scored(&content, cli.top)?;
    Ok(keywords)
}

fn render(keywords: &[Keyword], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(keywords)?);
    }
    Ok(keywords
        .iter()
        .map(|kw| kw.term.as_str())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let keywords = run(&cli)?;
    let output = render(&keywords, cli.json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
