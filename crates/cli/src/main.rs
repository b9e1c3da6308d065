//! versebench entry point.
//!
//! Runs the four-variant sweep (inline/boxed future, cached/uncached)
//! over the configured dataset against the live lyrics site and reports
//! per-variant wall time. Criterion benches in `versebench-client` do the
//! statistically honest comparison; this binary is the smoke-test run.

use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use versebench_client::fetch::{FetchConfig, HttpTransport, Transport};
use versebench_client::lyrics::LyricsFetcher;
use versebench_core::{AppConfig, TrackQuery};

mod sweep;

use sweep::{SweepReport, TaskShape};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    tracing::info!(base_url = %config.base_url, pairs = config.dataset.len(), "starting versebench sweep");

    let variants = [
        ("inline_cached", TaskShape::Inline, true),
        ("boxed_cached", TaskShape::Boxed, true),
        ("inline_uncached", TaskShape::Inline, false),
        ("boxed_uncached", TaskShape::Boxed, false),
    ];

    for (name, shape, cached) in variants {
        let transport = HttpTransport::new(FetchConfig::from(&config))?;
        let fetcher = if cached {
            LyricsFetcher::with_cache(transport, config.base_url.clone())
        } else {
            LyricsFetcher::new(transport, config.base_url.clone())
        };

        let report = run_variant(&fetcher, &config.dataset, shape).await;
        tracing::info!(
            variant = name,
            elapsed_ms = report.elapsed_ms,
            ok = report.ok,
            empty = report.empty,
            failed = report.failed,
            cached_entries = fetcher.cached_entries(),
            "variant complete"
        );
    }

    Ok(())
}

/// Run one variant over the whole dataset, timing the sweep.
///
/// Transport and extraction failures are logged and counted, not fatal;
/// a benchmark run should survive the deliberate 404 pair and flaky pages.
async fn run_variant<T: Transport>(
    fetcher: &LyricsFetcher<T>, dataset: &[TrackQuery], shape: TaskShape,
) -> SweepReport {
    let mut report = SweepReport::default();
    let start = Instant::now();

    for query in dataset {
        let result = match shape {
            TaskShape::Inline => fetcher.fetch(&query.artist, &query.song).await,
            TaskShape::Boxed => fetcher.fetch_boxed(&query.artist, &query.song).await,
        };

        match result {
            Ok(lyrics) if lyrics.is_empty() => {
                tracing::debug!(artist = %query.artist, song = %query.song, "empty result");
                report.empty += 1;
            }
            Ok(lyrics) => {
                tracing::debug!(artist = %query.artist, song = %query.song, chars = lyrics.len(), "lyrics extracted");
                report.ok += 1;
            }
            Err(err) => {
                tracing::warn!(artist = %query.artist, song = %query.song, %err, "fetch failed");
                report.failed += 1;
            }
        }
    }

    report.elapsed_ms = start.elapsed().as_millis() as u64;
    report
}
