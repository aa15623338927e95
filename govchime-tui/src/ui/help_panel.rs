//! Panel 4 — Help: key bindings and a short orientation.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::input::key_bindings_help;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "GovChime — federal contract awards at a glance",
        theme.accent_bold(),
    )));
    lines.push(Line::from(Span::styled(
        "Award wall, chatter feed and spending rollups over the loaded dataset.",
        theme.muted(),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Key bindings", theme.accent_bold())));
    for (keys, action) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<14}"), theme.accent_style()),
            Span::styled(action, theme.text()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} errors recorded — press e to review", app.error_history.len()),
        theme.muted(),
    )));

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
