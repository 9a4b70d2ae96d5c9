//! peertop - live table of a beacon node's connected peers.
//!
//! Usage:
//!   peertop                                  # query http://127.0.0.1:3500
//!   peertop --endpoint http://10.0.0.5:5052  # query another node
//!   peertop -i 5 --log-file /tmp/peertop.log # slower refresh, debug log to file
//!
//! Press Ctrl-C to quit.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use peertop::config::{Config, DEFAULT_ENDPOINT, open_log_file};
use peertop::provider::HttpPeerSource;
use peertop::refresh::DEFAULT_REFRESH_INTERVAL;
use peertop::tui::App;

/// Live terminal view of a beacon node's connected peers.
#[derive(Parser)]
#[command(name = "peertop", about = "Beacon node peer monitor", version)]
struct Args {
    /// Base URL of the beacon node API.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Refresh interval in seconds.
    #[arg(short, long, default_value_t = DEFAULT_REFRESH_INTERVAL.as_secs())]
    interval: u64,

    /// Write logs to this file. Without it only errors are printed, after the
    /// terminal is restored.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber.
///
/// The alternate screen owns stdout/stderr while running, so anything below
/// ERROR goes only to `--log-file`.
fn init_logging(verbose: u8, quiet: bool, log_file: Option<&PathBuf>) -> Result<(), String> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    match log_file {
        Some(path) => {
            let file = open_log_file(path)
                .map_err(|e| format!("cannot open log file '{}': {}", path.display(), e))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level)?)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(Level::ERROR)?)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn env_filter(level: Level) -> Result<EnvFilter, String> {
    let directive = format!("peertop={}", level)
        .parse()
        .map_err(|e| format!("invalid log directive: {}", e))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose, args.quiet, args.log_file.as_ref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = match Config::new(&args.endpoint, args.interval) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let source = match HttpPeerSource::new(&config.endpoint) {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            // Errors already reach stderr unless logging goes to a file.
            if args.log_file.is_some() {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    };

    info!(
        "peertop {} starting: url={}, interval={}s",
        env!("CARGO_PKG_VERSION"),
        source.url(),
        config.interval.as_secs()
    );

    let app = App::new(Box::new(source), config.interval);
    match app.run() {
        Ok(()) => {
            info!("exiting");
            // The refresh thread may be mid-fetch; don't wait for it.
            std::process::exit(0);
        }
        Err(e) => {
            error!("{}", e);
            // Errors already reach stderr unless logging goes to a file.
            if args.log_file.is_some() {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    }
}
