mod config;
mod input;
mod progress;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_report::{
    aggregate_with_session, paginate, ApifyExtractor, ExportConfig, ExportResolver,
    MemorySessionStore, ReportConfig, ReportSummary, DEFAULT_BASE_FILENAME,
};

use crate::config::Config;
use crate::progress::{create_progress_bar, BarProgress};

/// Build an engagement report from a list of TikTok video URLs.
#[derive(Debug, Parser)]
#[command(name = "campaign-report", version, about)]
struct Args {
    /// File with one video URL per line (repeat for several reports)
    #[arg(short, long, required = true)]
    input: Vec<PathBuf>,

    /// Directory the export is written to [env: REPORT_OUTPUT_DIR]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Rows per displayed page [env: REPORT_PAGE_SIZE]
    #[arg(long)]
    page_size: Option<NonZeroUsize>,

    /// Milliseconds to wait between extractor calls [env: REPORT_REQUEST_DELAY_MS]
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Re-extract URLs already fetched earlier in this run
    #[arg(long)]
    force_refresh: bool,

    /// Export file name without extension
    #[arg(long, default_value = DEFAULT_BASE_FILENAME)]
    base_filename: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,video_report=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let mut report_config = ReportConfig::default();
    if let Some(page_size) = args.page_size.or(config.page_size) {
        report_config = report_config.with_page_size(page_size);
    }
    if let Some(ms) = args.delay_ms.or(config.request_delay_ms) {
        report_config = report_config.with_request_delay(Duration::from_millis(ms));
    }
    if args.force_refresh {
        report_config = report_config.force_refresh();
    }

    let out_dir = args.out_dir.clone().unwrap_or(config.output_dir.clone());
    let extractor = ApifyExtractor::new(config.apify_token.clone());
    let session = MemorySessionStore::new();

    for path in &args.input {
        let base = if args.input.len() == 1 {
            args.base_filename.clone()
        } else {
            format!("{}_{}", args.base_filename, file_stem(path))
        };
        let run_config = report_config
            .clone()
            .with_export(ExportConfig::default().with_base_filename(base));

        run_report(path, &extractor, &session, &run_config, &out_dir).await?;
    }

    Ok(())
}

async fn run_report(
    path: &Path,
    extractor: &ApifyExtractor,
    session: &MemorySessionStore,
    config: &ReportConfig,
    out_dir: &Path,
) -> Result<()> {
    let urls = input::read_urls(path)?;
    println!();
    println!("{}", format!("📄 {}", path.display()).bright_cyan().bold());

    if urls.is_empty() {
        println!("{}", "⚠️  No URLs found, nothing to report".yellow());
        return Ok(());
    }

    let mut progress = BarProgress::new(create_progress_bar(urls.len() as u64));
    let outcome = aggregate_with_session(&urls, extractor, session, config, &mut progress).await;
    progress.finish();

    if !outcome.failed_urls.is_empty() || !outcome.empty_urls.is_empty() {
        println!(
            "{}",
            format!(
                "⚠️  Skipped {} of {} URLs (see log for details)",
                outcome.skipped(),
                outcome.attempted
            )
            .yellow()
        );
    }

    if outcome.table.is_empty() {
        println!("{}", "❌ No videos could be extracted".red().bold());
        return Ok(());
    }

    let summary = ReportSummary::from_table(&outcome.table);
    println!();
    for line in render::summary_lines(&summary) {
        println!("  {}", line.bold());
    }

    for page in paginate(&outcome.table, config.page_size) {
        println!();
        println!("{}", render::page_header(&page).bright_blue().bold());
        println!("{}", render::column_header().dimmed());
        for row in render::page_rows(&page) {
            println!("{row}");
        }
        if page.needs_break_after() {
            println!("{}", "─".repeat(40).dimmed());
        }
    }

    let artifact = ExportResolver::new(config.export.clone())
        .export(&outcome.table)
        .context("Failed to export report")?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let target = out_dir.join(&artifact.filename);
    std::fs::write(&target, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    info!(
        path = %target.display(),
        kind = %artifact.kind,
        bytes = artifact.len(),
        "Wrote report"
    );

    println!();
    if artifact.is_primary() {
        println!("{}", format!("✅ Excel report saved to {}", target.display()).green());
    } else {
        println!(
            "{}",
            format!("✅ CSV report saved to {} (Excel export unavailable)", target.display())
                .green()
        );
    }

    if summary.missing_followers > 0 {
        println!(
            "{}",
            format!(
                "ℹ️  Follower counts unavailable for {} of {} videos (shown as N/A)",
                summary.missing_followers, summary.videos
            )
            .yellow()
        );
    }

    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string())
}
