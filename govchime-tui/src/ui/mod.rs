//! Top-level UI layout — single active panel with status bar.

pub mod awards_panel;
pub mod chatter_panel;
pub mod help_panel;
pub mod overlays;
pub mod spending_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Overlays on top.
    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area, app),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::Detail(idx) => overlays::render_detail(f, main_area, app, *idx),
        Overlay::Search => {
            overlays::render_text_input(f, main_area, app, " Search ", "Search text:")
        }
        Overlay::AmountRange => overlays::render_text_input(
            f,
            main_area,
            app,
            " Amount Range ",
            "Bounds as min..max (either side may be blank):",
        ),
        Overlay::DateRange => overlays::render_text_input(
            f,
            main_area,
            app,
            " Date Range ",
            "Range as YYYY-MM-DD..YYYY-MM-DD:",
        ),
        Overlay::None => {}
    }
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.accent_style())
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(app.theme.accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Awards => awards_panel::render(f, inner, app),
        Panel::Chatter => chatter_panel::render(f, inner, app),
        Panel::Spending => spending_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
