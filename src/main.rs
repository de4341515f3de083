use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, time::Instant};
use tracing_subscriber::EnvFilter;

/// Seller console: lead triage and opportunity conversion
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp>/sellertui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Probability (0.0-1.0) that a simulated API call fails
    #[arg(long, value_name = "RATE")]
    failure_rate: Option<f64>,
}

mod app;
mod handlers;
mod services;
mod ui;
mod utils;

use sellertui::api::SimulatedApi;
use sellertui::config::Config;
use sellertui::model::{self, ToastKind};
use sellertui::storage::KvStore;
use services::{ApiRequest, ApiResponse};

pub struct App {
    pub model: model::Model,

    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,

    /// Local preferences store; `None` when it could not be opened
    store: Option<KvStore>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let settings = config.api_settings();
        let api = match &config.dataset_path {
            Some(path) => SimulatedApi::with_dataset_file(path, settings)?,
            None => SimulatedApi::with_embedded_dataset(settings)?,
        };
        tracing::info!(
            failure_rate = api.settings().failure_rate,
            dataset = ?config.dataset_path,
            "simulated API ready"
        );

        let (api_tx, api_rx) = services::api::spawn_api_service(api);

        let store = match KvStore::open(config.storage_path.as_deref()) {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "storage unavailable, preferences kept in memory only");
                None
            }
        };

        let mut model = model::Model::new(config.vim_mode, config.toast_duration());
        if let Some(store) = &store {
            model.ui.filters = store.load_filters();
            model.pipeline.opportunities = store.load_opportunities();
        }

        let mut app = App {
            model,
            api_tx,
            api_rx,
            store,
        };

        if app.store.is_none() {
            app.model
                .show_toast("Local storage unavailable; changes will not be kept", ToastKind::Error);
        }

        app.request_leads();
        app.request_opportunities();

        Ok(app)
    }

    /// Hand a request to the background worker
    fn send(&mut self, request: ApiRequest) {
        if let Err(e) = self.api_tx.send(request) {
            tracing::error!(request = ?e.0, "API worker is gone");
            self.model
                .show_toast("Background worker stopped", ToastKind::Error);
        }
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `None` when no file exists in the default locations; the
/// built-in defaults are used then.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/sellertui/config.yaml
    if let Some(config_path) = utils::get_default_config_path() {
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Log to a file only; stdout belongs to the terminal UI
fn init_logging() -> Result<()> {
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
        .context("Failed to open debug log")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sellertui=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.debug {
        init_logging()?;
        tracing::info!("Debug mode enabled");
    }

    // Determine config file path
    let config_path = get_config_path(args.config)?;
    tracing::debug!(path = ?config_path, "loading config");

    let mut config = load_config(config_path.as_ref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(rate) = args.failure_rate {
        config.failure_rate = rate;
    }

    // Initialize app
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %format!("{:#}", e), "exited with error");
    }

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        app.model.expire_toasts(Instant::now());

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Short poll keeps skeletons and toasts moving while calls are pending
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use sellertui::config::LatencyConfig;
    use std::path::Path;
    use std::time::Duration;

    /// Fresh store location for one test
    pub(crate) fn temp_store_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "sellertui-{}-{}.db",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    /// App with instant, never failing API calls and its store at `store_path`
    pub(crate) fn app_with_store(store_path: &Path) -> App {
        let config = Config {
            failure_rate: 0.0,
            latency: LatencyConfig {
                fetch_leads: 0,
                update_lead: 0,
                create_opportunity: 0,
                fetch_opportunities: 0,
            },
            storage_path: Some(store_path.to_path_buf()),
            ..Config::default()
        };
        App::new(config).expect("app starts")
    }

    /// Wait for `count` worker answers and apply them
    pub(crate) async fn settle(app: &mut App, count: usize) {
        for _ in 0..count {
            let response = tokio::time::timeout(Duration::from_secs(2), app.api_rx.recv())
                .await
                .expect("worker answered in time")
                .expect("worker still running");
            app.handle_api_response(response);
        }
    }
}
