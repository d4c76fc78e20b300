//! Line Joiner - clipboard line collapser
//!
//! Watches the clipboard and rewrites multi-line text as a single line, either
//! automatically in the background or on demand.

use anyhow::Result;
use clap::Parser;
use linejoiner::app;
use linejoiner::clipboard::SystemClipboard;
use linejoiner::{AppSettings, Mode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Start in manual mode
    #[arg(long)]
    manual: bool,

    /// Poll interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Watch the clipboard without opening a window
    #[arg(long, conflicts_with = "once")]
    headless: bool,

    /// Join the current clipboard text once, print it and exit
    #[arg(long)]
    once: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = AppSettings::load(args.config.as_deref())?;
    if let Some(interval_ms) = args.interval_ms {
        settings = settings.with_poll_interval(interval_ms)?;
    }
    if args.manual {
        settings.start_mode = Mode::Manual;
    }

    if args.once {
        let joined = app::run_once(&settings, &mut SystemClipboard::new())?;
        println!("{}", joined);
        return Ok(());
    }

    if args.headless {
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(app::run_headless(settings));
    }

    // Start the GUI application (synchronous entrypoint)
    app::run_gui(settings)
}
