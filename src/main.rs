use anyhow::Context;
use clap::Parser;
use ktane::io::{FileCapture, ScreenCapture};
use ktane::{scan_edge, EngineConfig, Side};
use ktane_cv::detection::Frame;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Scan a screenshot of one bomb edge and print its widgets as JSON.
#[derive(Debug, Parser)]
#[command(name = "ktane", version)]
struct Args {
    /// 1920x1080 PNG screenshot
    screenshot: PathBuf,

    /// Engine configuration (JSON)
    config: Option<PathBuf>,

    /// Edge shown in the screenshot
    #[arg(long, value_enum, default_value_t = Side::Bottom)]
    side: Side,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let mut capture = FileCapture::new([args.screenshot.clone()]);
    let screen = capture
        .capture(config.capture_timeout())
        .with_context(|| format!("Failed to load screenshot: {}", args.screenshot.display()))?;

    let scan = scan_edge(&Frame::new(screen), args.side);
    if scan.report.border.is_none() {
        warn!(side = ?args.side, "no side border found");
    }
    println!("{}", serde_json::to_string_pretty(&scan.report)?);
    Ok(())
}
