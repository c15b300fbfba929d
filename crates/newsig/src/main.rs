use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use newsig::sources::{parse_articles, ArticleSource, PriceSource, Sources};
use newsig_models::report::SignalReport;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "newsig",
    about = "Commodity news sentiment signal - scores articles and calls BUY/SELL/HOLD"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/newsig.toml")]
    config: String,

    /// Read the article JSON array from a file instead of stdin
    #[arg(short, long)]
    articles: Option<String>,

    /// Price series JSON file ([{"timestamp", "price"}, ...])
    #[arg(long)]
    prices: Option<String>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Keep running, refreshing on the configured interval until Ctrl-C
    #[arg(short, long)]
    watch: bool,
}

fn print_report(report: &SignalReport, pretty: bool) {
    let output = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "Failed to serialize report"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = newsig::load_config(&cli.config)?;
    let pipeline = newsig::build_pipeline(&config).context("Failed to build pipeline")?;

    // Stdin can only be drained once, so it becomes a fixed batch
    let articles = match &cli.articles {
        Some(path) => ArticleSource::File(PathBuf::from(path)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            let batch = parse_articles(&buf).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring unreadable article input");
                Vec::new()
            });
            ArticleSource::Fixed(batch)
        }
    };
    let prices = match &cli.prices {
        Some(path) => PriceSource::File(PathBuf::from(path)),
        None => PriceSource::Unavailable,
    };
    let sources = Sources { articles, prices };

    if !cli.watch {
        let report = newsig::run_cycle(&pipeline, &sources).await;
        print_report(&report, cli.pretty);
        return Ok(());
    }

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Received shutdown signal");
            cancel.cancel();
        });
    }

    let pretty = cli.pretty;
    newsig::refresh::refresh_loop(
        &pipeline,
        &sources,
        Duration::from_secs(config.refresh.interval_seconds),
        cancel,
        |report| print_report(report, pretty),
    )
    .await;

    Ok(())
}
