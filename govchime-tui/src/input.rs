//! Keyboard input dispatch — global keys → overlays → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use govchime_core::analytics::ClickEvent;
use govchime_core::filter::SortField;

use crate::app::{AppState, Overlay, Panel};
use crate::worker::WorkerCommand;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::Search => {
            handle_text_overlay(app, key, apply_search);
            return;
        }
        Overlay::AmountRange => {
            handle_text_overlay(app, key, apply_amount_range);
            return;
        }
        Overlay::DateRange => {
            handle_text_overlay(app, key, apply_date_range);
            return;
        }
        Overlay::Detail(_) => {
            handle_detail_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Awards; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Chatter; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Spending; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            app.active_panel = app.active_panel.next();
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('T') => {
            app.toggle_theme();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Awards => handle_awards_key(app, key),
        Panel::Chatter => handle_chatter_key(app, key),
        Panel::Spending => handle_spending_key(app, key),
        Panel::Help => handle_help_key(app, key),
    }
}

// ── Overlay handlers ─────────────────────────────────────────────────

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_detail_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

/// Shared line-editor loop for the text-input overlays.
fn handle_text_overlay(app: &mut AppState, key: KeyEvent, apply: fn(&mut AppState, String)) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.input_buffer.clear();
        }
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.input_buffer);
            app.overlay = Overlay::None;
            apply(app, input);
            app.clamp_cursors();
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}

fn apply_search(app: &mut AppState, input: String) {
    let text = input.trim().to_string();
    if let Some(filters) = app.active_filters_mut() {
        filters.search = text;
    }
}

/// Amount bounds arrive as `min..max`; either side may be blank or
/// unparseable, which leaves that bound unset.
fn apply_amount_range(app: &mut AppState, input: String) {
    let (min, max) = split_range(&input);
    if let Some(filters) = app.active_filters_mut() {
        filters.set_amount_bounds_text(&min, &max);
    }
}

fn apply_date_range(app: &mut AppState, input: String) {
    let (start, end) = split_range(&input);
    if let Some(filters) = app.active_filters_mut() {
        filters.set_date_range_text(&start, &end);
    }
}

fn split_range(input: &str) -> (String, String) {
    match input.split_once("..") {
        Some((lo, hi)) => (lo.to_string(), hi.to_string()),
        None => (input.to_string(), String::new()),
    }
}

// ── Panel handlers ───────────────────────────────────────────────────

fn handle_awards_key(app: &mut AppState, key: KeyEvent) {
    let len = app.awards_view().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if len > 0 && app.awards.cursor + 1 < len {
                app.awards.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.awards.cursor = app.awards.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            if len > 0 {
                open_detail(app, Panel::Awards, app.awards.cursor);
            }
        }
        KeyCode::Char('/') => {
            app.input_buffer = app.awards.filters.search.clone();
            app.overlay = Overlay::Search;
        }
        KeyCode::Char('b') => {
            app.input_buffer.clear();
            app.overlay = Overlay::AmountRange;
        }
        KeyCode::Char('D') => {
            app.input_buffer.clear();
            app.overlay = Overlay::DateRange;
        }
        KeyCode::Char('f') => {
            app.awards.filters.quick = app.awards.filters.quick.next();
            app.clamp_cursors();
        }
        KeyCode::Char('s') => {
            let options = app.set_aside_options();
            let next = cycle_option(app.awards.filters.set_aside.take(), &options);
            app.awards.filters.set_aside = next;
            app.clamp_cursors();
        }
        KeyCode::Char('a') => {
            let options = app.agency_options();
            let next = cycle_option(app.awards.filters.agency.take(), &options);
            app.awards.filters.agency = next;
            app.clamp_cursors();
        }
        KeyCode::Char('c') => {
            app.awards.filters.clear_all();
            app.awards.cursor = 0;
            app.set_status("Filters cleared");
        }
        KeyCode::Char('m') => {
            app.awards.filters.toggle_sort(SortField::Amount);
        }
        KeyCode::Char('d') => {
            app.awards.filters.toggle_sort(SortField::Date);
        }
        KeyCode::Char('t') => {
            app.awards.filters.toggle_sort(SortField::Title);
        }
        _ => {}
    }
}

fn handle_chatter_key(app: &mut AppState, key: KeyEvent) {
    let len = app.chatter_view().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if len > 0 && app.chatter.cursor + 1 < len {
                app.chatter.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.chatter.cursor = app.chatter.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            if len > 0 {
                open_detail(app, Panel::Chatter, app.chatter.cursor);
            }
        }
        KeyCode::Char('/') => {
            app.input_buffer = app.chatter.filters.search.clone();
            app.overlay = Overlay::Search;
        }
        KeyCode::Char('f') => {
            app.chatter.filters.quick = app.chatter.filters.quick.next();
            app.clamp_cursors();
        }
        KeyCode::Char('c') => {
            app.chatter.filters.clear_all();
            app.chatter.cursor = 0;
            app.set_status("Filters cleared");
        }
        _ => {}
    }
}

fn handle_spending_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('g') => {
            app.spending.group_by = app.spending.group_by.toggled();
            app.spending.cursor = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.spending.cursor += 1; // clamped at render time
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.spending.cursor = app.spending.cursor.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_help_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char('e') = key.code {
        app.overlay = Overlay::ErrorHistory;
        app.error_scroll = 0;
    }
}

/// Open the detail overlay and enqueue the click event. The send is
/// fire-and-forget; a dead worker is ignored.
fn open_detail(app: &mut AppState, panel: Panel, cursor: usize) {
    let (record_id, query) = {
        let view = match panel {
            Panel::Awards => app.awards_view(),
            _ => app.chatter_view(),
        };
        match view.records.get(cursor) {
            Some(r) => (
                r.id.clone(),
                match panel {
                    Panel::Awards => app.awards.filters.search.clone(),
                    _ => app.chatter.filters.search.clone(),
                },
            ),
            None => return,
        }
    };

    let module_code = match panel {
        Panel::Awards => "awards-wall",
        _ => "chatter-wall",
    };
    let _ = app.worker_tx.send(WorkerCommand::TrackClick {
        event: ClickEvent {
            url: format!("https://govchime.example/awards/{record_id}"),
            query,
            position: cursor + 1,
            module_code: module_code.into(),
        },
    });

    app.overlay = Overlay::Detail(cursor);
}

/// Advance a selection through `options`: all → first → ... → last → all.
fn cycle_option(current: Option<String>, options: &[String]) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    match current {
        None => Some(options[0].clone()),
        Some(value) => match options.iter().position(|o| *o == value) {
            Some(i) if i + 1 < options.len() => Some(options[i + 1].clone()),
            // Last option, or a stale value no longer in the dataset.
            _ => None,
        },
    }
}

/// Key bindings shown on the help panel.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q", "Quit"),
        ("1-4 / Tab", "Switch panel"),
        ("j/k or ↑/↓", "Move cursor"),
        ("Enter", "Open award detail"),
        ("/", "Search (title, agency, location)"),
        ("f", "Cycle quick filter"),
        ("s", "Cycle set-aside filter"),
        ("a", "Cycle agency filter"),
        ("b", "Amount range (min..max)"),
        ("D", "Date range (YYYY-MM-DD..YYYY-MM-DD)"),
        ("m / d / t", "Sort by amount / date / title (repeat flips)"),
        ("c", "Clear all filters"),
        ("g", "Spending: toggle grouping"),
        ("T", "Toggle dark/light theme"),
        ("e", "Help: show error history"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;
    use govchime_core::filter::{QuickFilter, SortDirection};
    use govchime_core::sample::sample_awards;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn quit_on_q() {
        let mut app = test_app(sample_awards());
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn digits_switch_panels() {
        let mut app = test_app(sample_awards());
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.active_panel, Panel::Spending);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Help);
    }

    #[test]
    fn cursor_moves_and_stops_at_ends() {
        let mut app = test_app(sample_awards());
        let len = app.awards_view().len();

        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.awards.cursor, 0);

        for _ in 0..len + 5 {
            handle_key(&mut app, press(KeyCode::Char('j')));
        }
        assert_eq!(app.awards.cursor, len - 1);
    }

    #[test]
    fn sort_keys_toggle_direction() {
        let mut app = test_app(sample_awards());
        handle_key(&mut app, press(KeyCode::Char('m')));
        assert_eq!(app.awards.filters.sort_field, SortField::Amount);
        assert_eq!(app.awards.filters.sort_dir, SortDirection::Desc);
        handle_key(&mut app, press(KeyCode::Char('m')));
        assert_eq!(app.awards.filters.sort_dir, SortDirection::Asc);
    }

    #[test]
    fn quick_filter_cycles() {
        let mut app = test_app(sample_awards());
        handle_key(&mut app, press(KeyCode::Char('f')));
        assert_eq!(app.awards.filters.quick, QuickFilter::Large);
    }

    #[test]
    fn search_overlay_applies_on_enter() {
        let mut app = test_app(sample_awards());
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.overlay, Overlay::Search);

        for c in "bridge".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.awards.filters.search, "bridge");
        assert_eq!(app.awards_view().len(), 1);
    }

    #[test]
    fn search_overlay_escape_cancels() {
        let mut app = test_app(sample_awards());
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.awards.filters.search, "");
    }

    #[test]
    fn amount_overlay_parses_leniently() {
        let mut app = test_app(sample_awards());
        handle_key(&mut app, press(KeyCode::Char('b')));
        for c in "$5,000,000..garbage".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.awards.filters.amount_min, Some(5_000_000.0));
        assert_eq!(app.awards.filters.amount_max, None);
    }

    #[test]
    fn clear_all_resets_count() {
        let mut app = test_app(sample_awards());
        app.awards.filters.search = "bridge".into();
        app.awards.filters.quick = QuickFilter::Large;
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.awards.filters.active_filter_count(), 0);
    }

    #[test]
    fn enter_opens_detail_and_enqueues_click() {
        let (tx, cmd_rx) = std::sync::mpsc::channel();
        let (_resp_tx, resp_rx) = std::sync::mpsc::channel();
        let mut app = crate::app::AppState::new(
            sample_awards(),
            tx,
            resp_rx,
            std::path::PathBuf::from("."),
        );
        app.today = chrono::NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        handle_key(&mut app, press(KeyCode::Enter));
        assert!(matches!(app.overlay, Overlay::Detail(0)));

        match cmd_rx.try_recv().unwrap() {
            WorkerCommand::TrackClick { event } => {
                assert_eq!(event.module_code, "awards-wall");
                assert_eq!(event.position, 1);
            }
            other => panic!("expected TrackClick, got {other:?}"),
        }
    }

    #[test]
    fn detail_overlay_closes_on_esc() {
        let mut app = test_app(sample_awards());
        app.overlay = Overlay::Detail(0);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn cycle_option_walks_and_wraps() {
        let options = vec!["a".to_string(), "b".to_string()];
        assert_eq!(cycle_option(None, &options), Some("a".into()));
        assert_eq!(cycle_option(Some("a".into()), &options), Some("b".into()));
        assert_eq!(cycle_option(Some("b".into()), &options), None);
        assert_eq!(cycle_option(Some("stale".into()), &options), None);
        assert_eq!(cycle_option(None, &[]), None);
    }

    #[test]
    fn welcome_dismisses_on_any_key() {
        let mut app = test_app(sample_awards());
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('z')));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn help_bindings_not_empty() {
        let bindings = key_bindings_help();
        assert!(!bindings.is_empty());
        assert_eq!(bindings[0].0, "q");
    }
}
