//! GovChime TUI — four-panel contract-award dashboard.
//!
//! Panels:
//! 1. Awards — the award wall: filter, sort, summarize, drill down
//! 2. Chatter — recent-awards feed over the same dataset
//! 3. Spending — rollups by agency or set-aside program
//! 4. Help — keyboard shortcuts and the error history

mod app;
mod format;
mod input;
mod persistence;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use govchime_core::analytics::{AnalyticsClient, AnalyticsConfig};
use govchime_core::domain::ContractRecord;
use govchime_core::sample::sample_awards;

use crate::app::{handle_worker_response, AppState};
use crate::worker::WorkerCommand;

/// Fixed click-tracking endpoint.
const ANALYTICS_ENDPOINT: &str = "https://api.govchime.example/v1/clicks";

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("govchime")
        .join("state.json");

    // Dataset: a JSON file passed as the first argument, else the
    // built-in sample set.
    let records = match std::env::args().nth(1) {
        Some(path) => load_records(&PathBuf::from(path))?,
        None => sample_awards(),
    };

    // Analytics client: credentials come from the environment at the
    // binary boundary and are injected at construction. A missing key
    // disables tracking.
    let analytics = AnalyticsClient::new(AnalyticsConfig {
        endpoint: ANALYTICS_ENDPOINT.into(),
        affiliate: std::env::var("GOVCHIME_AFFILIATE").unwrap_or_else(|_| "govchime".into()),
        access_key: std::env::var("GOVCHIME_ACCESS_KEY").ok(),
    });
    let tracking_enabled = analytics.is_enabled();

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(analytics, cmd_rx, resp_tx);

    // Build app state
    let mut app = AppState::new(records, cmd_tx.clone(), resp_rx, state_path.clone());

    // Apply persisted chrome (panel, theme, welcome flag).
    let persisted = persistence::load(&state_path);
    persistence::apply(&mut app, persisted);

    if !tracking_enabled {
        app.set_warning("Click tracking disabled (no access key configured)");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save chrome before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Load records from a JSON file at the data boundary.
fn load_records(path: &PathBuf) -> Result<Vec<ContractRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse dataset: {}", path.display()))
}
