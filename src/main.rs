//! recipe - terminal recipe detail screen
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use recipe_core::prelude::*;
use recipe_demo::StartupOptions;

/// A recipe detail screen with a parallax collapsing header
#[derive(Parser, Debug)]
#[command(name = "recipe")]
#[command(about = "A recipe detail screen with a parallax collapsing header", long_about = None)]
struct Args {
    /// Directory containing .recipe/config.toml (default: current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Rows reserved at the top of the screen
    #[arg(long, value_name = "ROWS")]
    status_inset: Option<u16>,

    /// Write a default .recipe/config.toml if missing
    #[arg(long)]
    init_config: bool,

    /// Print the header animation as JSON lines, no TUI
    #[arg(long, conflicts_with = "snapshot")]
    headless: bool,

    /// Print a single rendered frame as text, no TUI
    #[arg(long)]
    snapshot: bool,

    /// Scroll offset for --snapshot
    #[arg(long, default_value_t = 0)]
    offset: u16,

    /// Width for --snapshot
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Height for --snapshot
    #[arg(long, default_value_t = 24)]
    height: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let options = StartupOptions {
        config_dir: args
            .config_dir
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
        status_inset: args.status_inset,
        init_config: args.init_config,
    };

    if args.headless {
        recipe_demo::run_headless(&options)
    } else if args.snapshot {
        recipe_demo::run_snapshot(&options, args.offset, args.width, args.height)
    } else {
        recipe_demo::run(&options).await
    }
}
