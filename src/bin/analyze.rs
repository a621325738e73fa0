//! Analyze articles from the command line.
//!
//! ```sh
//! analyze https://inosmi.ru/20230328/indiya-261728000.html --timeout 5
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use jaundice::{
    analysis::{Analyzer, ArticleResult},
    charged_words::load_charged_words,
    config::{self, Config, parse_timeout},
    fetcher::{Fetcher, build_client},
    load_lemmatizer,
    sanitizers::SanitizerRegistry,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rate how charged news articles are")]
struct Cli {
    /// Article URLs
    #[arg(required = true)]
    urls: Vec<String>,

    /// Fetch timeout in seconds (overrides FETCH_TIMEOUT)
    #[arg(short, long, value_parser = |raw: &str| parse_timeout("--timeout", raw).map_err(|e| e.to_string()))]
    timeout: Option<std::time::Duration>,

    /// Directory with charged word lists (overrides CHARGED_WORDS_DIRECTORY)
    #[arg(short, long)]
    charged_words: Option<PathBuf>,

    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(timeout) = cli.timeout {
        config = config.with_fetch_timeout(timeout);
    }
    if let Some(directory) = cli.charged_words {
        config = config.with_charged_words_directory(directory);
    }
    if cli.urls.len() > config.url_limit() {
        bail!(
            "too many urls, should be {} or less (set URL_LIMIT to raise it)",
            config.url_limit()
        );
    }

    let lemmatizer = load_lemmatizer(config.lemma_dictionary()).await?;
    let charged_words = load_charged_words(config.charged_words_directory(), lemmatizer.as_ref())
        .await
        .context("failed to load charged words")?;

    let analyzer = Analyzer::new(
        Fetcher::new(build_client()?),
        lemmatizer,
        Arc::new(SanitizerRegistry::with_defaults()),
        Arc::new(charged_words),
    )
    .with_fetch_timeout(config.fetch_timeout());

    let results = analyzer.run(cli.urls).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            print_report(result);
        }
    }
    Ok(())
}

fn print_report(result: &ArticleResult) {
    let missing = || "-".to_string();
    println!("URL: {}", result.url());
    println!("Status: {}", result.status());
    println!(
        "Score: {}",
        result.score().map(|score| score.to_string()).unwrap_or_else(missing)
    );
    println!(
        "Words: {}",
        result.word_count().map(|count| count.to_string()).unwrap_or_else(missing)
    );
    println!(
        "Elapsed: {}",
        result
            .elapsed_time()
            .map(|secs| format!("{secs} s"))
            .unwrap_or_else(missing)
    );
    println!("{}", "-".repeat(10));
}
