//! upcheck - Terminal about panel with release update checks

use anyhow::Result;
use clap::{CommandFactory, Parser};
use upcheck::app::App;
use upcheck::config::Config;
use upcheck::host::HostInfo;
use upcheck::theme::ThemeFlag;

/// Terminal about panel with release update checks
#[derive(Parser)]
#[command(name = "upcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start with the dark palette
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start with the light palette
    #[arg(long)]
    light: bool,

    /// Override the release-metadata endpoint URL
    #[arg(long)]
    endpoint: Option<String>,
}

impl Cli {
    /// The CLI's theme choice, if one was made.
    const fn theme_choice(&self) -> Option<bool> {
        if self.dark {
            Some(true)
        } else if self.light {
            Some(false)
        } else {
            None
        }
    }
}

fn main() -> Result<()> {
    // Clear the log file on startup
    let log_path = upcheck::paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to the temp dir - tail with: tail -f /tmp/upcheck.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let log_dir = log_path
            .parent()
            .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(log_dir, "upcheck.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e}");
            Config::default()
        }
    };
    if let Some(endpoint) = cli.endpoint.clone() {
        config.endpoint = endpoint;
    }

    let host = HostInfo::from_build_env()?;
    let theme = ThemeFlag::seed(cli.theme_choice(), config.theme);

    let app = App::new(config, host, theme);
    upcheck::tui::run(app)
}
