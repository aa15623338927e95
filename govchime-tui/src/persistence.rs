//! UI chrome persistence — JSON save/load across restarts.
//!
//! Only chrome survives: active panel, theme mode, welcome flag.
//! Filter state is deliberately not persisted; every launch starts
//! from the all-inclusive defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::{AppState, Overlay, Panel};
use crate::theme::{Theme, ThemeMode};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_panel: Panel,
    pub theme_mode: ThemeMode,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_panel: Panel::Awards,
            theme_mode: ThemeMode::Dark,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is
/// missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        active_panel: app.active_panel,
        theme_mode: app.theme.mode,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active_panel = state.active_panel;
    app.theme = Theme::for_mode(state.theme_mode);
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}
