//! Application state — single-owner, main-thread only.
//!
//! All dashboard state lives here. The analytics worker communicates
//! via channels and never blocks the UI thread.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use govchime_core::domain::ContractRecord;
use govchime_core::filter::{
    distinct_agencies, distinct_set_asides, FilterState, FilteredAwards, SortDirection, SortField,
};
use govchime_core::reference::{NaicsCatalog, SetAsideCatalog};

use crate::theme::Theme;
use crate::worker::{WorkerCommand, WorkerResponse};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Awards,
    Chatter,
    Spending,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Awards => 0,
            Panel::Chatter => 1,
            Panel::Spending => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Awards),
            1 => Some(Panel::Chatter),
            2 => Some(Panel::Spending),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Awards => "Awards",
            Panel::Chatter => "Chatter",
            Panel::Spending => "Spending",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Analytics,
    Data,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Analytics => "TRACK",
            ErrorCategory::Data => "DATA",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    /// Detail view for an index into the active panel's filtered set.
    Detail(usize),
    ErrorHistory,
    Search,
    AmountRange,
    DateRange,
}

/// Awards panel state — the award wall.
pub struct AwardsPanelState {
    pub filters: FilterState,
    pub cursor: usize,
}

impl AwardsPanelState {
    pub fn new() -> Self {
        Self {
            filters: FilterState::default(),
            cursor: 0,
        }
    }
}

/// Chatter panel state — the recent-awards feed.
pub struct ChatterPanelState {
    pub filters: FilterState,
    pub cursor: usize,
}

impl ChatterPanelState {
    pub fn new() -> Self {
        let mut filters = FilterState::default();
        // The feed reads newest-first.
        filters.sort_field = SortField::Date;
        filters.sort_dir = SortDirection::Desc;
        Self { filters, cursor: 0 }
    }
}

/// Grouping axis for the spending rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Agency,
    SetAside,
}

impl GroupBy {
    pub fn label(self) -> &'static str {
        match self {
            GroupBy::Agency => "Agency",
            GroupBy::SetAside => "Set-aside",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            GroupBy::Agency => GroupBy::SetAside,
            GroupBy::SetAside => GroupBy::Agency,
        }
    }
}

/// Spending panel state.
pub struct SpendingPanelState {
    pub group_by: GroupBy,
    pub cursor: usize,
}

impl SpendingPanelState {
    pub fn new() -> Self {
        Self {
            group_by: GroupBy::Agency,
            cursor: 0,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Data boundary: supplied at construction, never mutated.
    pub records: Vec<ContractRecord>,
    pub today: NaiveDate,
    pub naics: NaicsCatalog,
    pub set_asides: SetAsideCatalog,

    // Panel states
    pub awards: AwardsPanelState,
    pub chatter: ChatterPanelState,
    pub spending: SpendingPanelState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub theme: Theme,
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub input_buffer: String,

    // Paths
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(
        records: Vec<ContractRecord>,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        state_path: PathBuf,
    ) -> Self {
        Self {
            active_panel: Panel::Awards,
            running: true,
            records,
            today: chrono::Local::now().date_naive(),
            naics: NaicsCatalog::builtin(),
            set_asides: SetAsideCatalog::builtin(),
            awards: AwardsPanelState::new(),
            chatter: ChatterPanelState::new(),
            spending: SpendingPanelState::new(),
            worker_tx,
            worker_rx,
            theme: Theme::dark(),
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
            input_buffer: String::new(),
            state_path,
        }
    }

    /// The filter state of the currently active list panel, if any.
    pub fn active_filters_mut(&mut self) -> Option<&mut FilterState> {
        match self.active_panel {
            Panel::Awards => Some(&mut self.awards.filters),
            Panel::Chatter => Some(&mut self.chatter.filters),
            _ => None,
        }
    }

    /// Run the pipeline for the awards panel.
    pub fn awards_view(&self) -> FilteredAwards<'_> {
        self.awards.filters.apply(&self.records, self.today)
    }

    /// Run the pipeline for the chatter panel.
    pub fn chatter_view(&self) -> FilteredAwards<'_> {
        self.chatter.filters.apply(&self.records, self.today)
    }

    /// The filtered view for whichever list panel is active.
    pub fn active_view(&self) -> Option<FilteredAwards<'_>> {
        match self.active_panel {
            Panel::Awards => Some(self.awards_view()),
            Panel::Chatter => Some(self.chatter_view()),
            _ => None,
        }
    }

    /// Distinct agencies in the dataset, for selection cycling.
    pub fn agency_options(&self) -> Vec<String> {
        distinct_agencies(&self.records)
    }

    /// Distinct set-aside tags in the dataset, for selection cycling.
    pub fn set_aside_options(&self) -> Vec<String> {
        distinct_set_asides(&self.records)
    }

    /// Clamp panel cursors after a filter change shrank a result set.
    pub fn clamp_cursors(&mut self) {
        let awards_len = self.awards_view().len();
        if self.awards.cursor >= awards_len {
            self.awards.cursor = awards_len.saturating_sub(1);
        }
        let chatter_len = self.chatter_view().len();
        if self.chatter.cursor >= chatter_len {
            self.chatter.cursor = chatter_len.saturating_sub(1);
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Flip between the dark and light palettes.
    pub fn toggle_theme(&mut self) {
        self.theme = Theme::for_mode(self.theme.mode.toggled());
    }
}

/// Handle one worker response.
///
/// Analytics outcomes degrade silently: failures become a warning in
/// the history, success stays quiet.
pub fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::TrackSent => {}
        WorkerResponse::TrackDisabled => {
            app.set_warning("Click tracking disabled (no access key configured)");
        }
        WorkerResponse::TrackFailed { error } => {
            app.push_error(ErrorCategory::Analytics, error, "click tracking".into());
            // Tracking failures must not read as user-facing errors.
            if let Some((msg, _)) = app.status_message.take() {
                app.status_message = Some((msg, StatusLevel::Warning));
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn test_app(records: Vec<ContractRecord>) -> AppState {
    let (tx, _rx) = std::sync::mpsc::channel();
    let (_tx2, rx2) = std::sync::mpsc::channel();
    let mut app = AppState::new(records, tx, rx2, PathBuf::from("."));
    // Tests pin "today" so the recent quick filter is deterministic.
    app.today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use govchime_core::sample::sample_awards;

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Awards.next(), Panel::Chatter);
        assert_eq!(Panel::Help.next(), Panel::Awards);
        assert_eq!(Panel::Awards.prev(), Panel::Help);
        assert_eq!(Panel::Chatter.prev(), Panel::Awards);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..4 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(4).is_none());
    }

    #[test]
    fn error_history_caps_at_50() {
        let mut app = test_app(vec![]);
        for i in 0..60 {
            app.push_error(ErrorCategory::Other, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn views_share_records_with_independent_filters() {
        let mut app = test_app(sample_awards());
        app.awards.filters.search = "bridge".into();
        let awards = app.awards_view();
        let chatter = app.chatter_view();
        assert!(awards.len() < chatter.len());
    }

    #[test]
    fn chatter_defaults_to_newest_first() {
        let app = test_app(sample_awards());
        let view = app.chatter_view();
        for pair in view.records.windows(2) {
            assert!(pair[0].award_date >= pair[1].award_date);
        }
    }

    #[test]
    fn clamp_cursor_after_narrowing() {
        let mut app = test_app(sample_awards());
        app.awards.cursor = app.awards_view().len() - 1;
        app.awards.filters.search = "bridge".into();
        app.clamp_cursors();
        assert!(app.awards.cursor < app.awards_view().len().max(1));
    }

    #[test]
    fn track_failure_reads_as_warning() {
        let mut app = test_app(vec![]);
        handle_worker_response(
            &mut app,
            WorkerResponse::TrackFailed {
                error: "connection refused".into(),
            },
        );
        let (_, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert_eq!(app.error_history.len(), 1);
        assert_eq!(app.error_history[0].category, ErrorCategory::Analytics);
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut app = test_app(vec![]);
        assert_eq!(app.theme.mode, ThemeMode::Dark);
        app.toggle_theme();
        assert_eq!(app.theme.mode, ThemeMode::Light);
        app.toggle_theme();
        assert_eq!(app.theme.mode, ThemeMode::Dark);
    }
}
