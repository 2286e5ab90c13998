//! # Gomoku
//!
//! Entry point of the `play` binary: a two-player five-in-a-row game on a
//! 15x15 board.
//!
//! The default front end is a terminal user interface built with Ratatui,
//! played with the mouse or the arrow keys. `--mode cli` switches to a
//! line-based shell for terminals without mouse support.
//!
//! ## Usage
//! ```text
//! play                          # mouse-driven TUI
//! play --mode cli --no-color    # line mode
//! play --log-file gomoku.log --log-level debug
//! ```

use clap::{Parser, ValueEnum};
use gomoku::app::App;
use gomoku::config::AppConfig;
use log::LevelFilter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Full-screen terminal UI with mouse support
    Tui,
    /// Line-based text commands
    Cli,
}

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, value_enum, default_value_t = Mode::Tui)]
    mode: Mode,

    /// Milliseconds between the winning move and the victory announcement
    #[clap(long, default_value_t = 10)]
    announce_delay_ms: u64,

    #[clap(long, action = clap::ArgAction::SetTrue)]
    no_color: bool,

    /// Log filter (off, error, warn, info, debug, trace). Falls back to RUST_LOG.
    #[clap(long)]
    log_level: Option<LevelFilter>,

    /// Write logs to this file instead of stderr
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = args.log_level {
        builder.filter_level(level);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Info);
    }

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        // stderr would draw over the alternate screen
        None if args.mode == Mode::Tui => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = AppConfig::new(Duration::from_millis(args.announce_delay_ms), !args.no_color)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    log::debug!("Starting in {:?} mode with {:?}", args.mode, config);

    match args.mode {
        Mode::Tui => {
            let mut app = App::new(config);
            gomoku::tui::run(&mut app)
        }
        Mode::Cli => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            gomoku::cli::run(stdin.lock(), &mut stdout, config)
        }
    }
}
