//! EventCatalog: a filterable, sortable viewer and editor for a bilingual
//! cultural-events catalog.
//!
//! Entry point: parses the command line, initialises structured logging
//! and launches the eframe application window.

// Hide the console window in release builds on Windows.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod app_actions;
mod app_update;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::Layer as _;

use app::{CatalogApp, StartupOptions};
use eventcatalog::backend::{AuthContext, Role};
use eventcatalog::util::constants;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "EventCatalog", version, about = "Browse and edit a cultural-events catalog")]
struct Cli {
    /// Catalog JSON file to open. Defaults to the last file opened.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Editing role for this session.
    #[arg(long, value_enum, env = constants::ENV_ROLE, default_value_t = Role::Viewer)]
    role: Role,

    /// Session token. Writes are refused without one.
    #[arg(long, env = constants::ENV_TOKEN, hide_env_values = true)]
    token: Option<String>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // ── Persistent file logging ─────────────────────────────────────
    // stderr (env-controlled) + file (always debug).
    let log_dir = init_log_dir();
    init_logging(&log_dir);

    tracing::info!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);
    if let Some(dir) = &log_dir {
        tracing::info!("Log file: {}", dir.join(constants::LOG_FILE_NAME).display());
    }

    let startup = StartupOptions {
        catalog_path: cli.catalog,
        auth: AuthContext::new(cli.token, cli.role),
    };

    let viewport = egui::ViewportBuilder::default()
        .with_title(format!("{} v{}", constants::APP_NAME, constants::APP_VERSION))
        .with_inner_size([1280.0, 800.0])
        .with_min_inner_size([800.0, 500.0]);

    let options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(CatalogApp::new(cc, startup)))),
    )
}

/// Create the persistent log directory.
///
/// Uses `%LOCALAPPDATA%` on Windows and `$XDG_DATA_HOME` (or
/// `~/.local/share`) elsewhere. Returns `None` if no directory can be
/// created; logging then goes to stderr only.
fn init_log_dir() -> Option<PathBuf> {
    let base = std::env::var_os("LOCALAPPDATA")
        .or_else(|| std::env::var_os("XDG_DATA_HOME"))
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local").join("share")))?;
    let log_dir = base.join(constants::APP_DATA_DIR).join(constants::LOG_DIR);
    std::fs::create_dir_all(&log_dir).ok()?;

    // Rotate the log file once it exceeds the size limit.
    let log_file = log_dir.join(constants::LOG_FILE_NAME);
    if let Ok(meta) = std::fs::metadata(&log_file) {
        if meta.len() > constants::MAX_LOG_FILE_SIZE {
            let backup = log_dir.join(format!("{}.old", constants::LOG_FILE_NAME));
            let _ = std::fs::rename(&log_file, &backup);
        }
    }

    Some(log_dir)
}

/// Initialise the dual-layer tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` (default: `info`).
/// - **file layer** (if `log_dir` is `Some`): always `debug`, for
///   post-mortem diagnostics.
fn init_logging(log_dir: &Option<PathBuf>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(dir) = log_dir {
        let log_path = dir.join(constants::LOG_FILE_NAME);
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .with_filter(tracing_subscriber::EnvFilter::new("debug"));

            tracing_subscriber::registry()
                .with(stderr_layer.with_filter(env_filter))
                .with(file_layer)
                .init();
            return;
        }
    }

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
