//! Panel 2 — Chatter: the recent-awards feed.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::format::{currency_compact, date, truncate};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let view = app.chatter_view();
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("{} updates", view.summary.count),
            theme.accent_bold(),
        ),
        Span::styled(
            format!("  Quick: {}", app.chatter.filters.quick.label()),
            theme.muted(),
        ),
        Span::styled("  [/]search [f]quick [c]lear [Enter]detail", theme.muted()),
    ]));
    lines.push(Line::from(""));

    if view.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing on the wall. Press c to clear all filters.",
            theme.muted(),
        )));
    } else {
        let visible_height = area.height.saturating_sub(2) as usize / 2;
        let start = if app.chatter.cursor >= visible_height {
            app.chatter.cursor + 1 - visible_height
        } else {
            0
        };
        let end = (start + visible_height).min(view.records.len());

        for i in start..end {
            let record = &view.records[i];
            let is_cursor = i == app.chatter.cursor;
            let style = if is_cursor {
                theme.accent_style().add_modifier(Modifier::REVERSED)
            } else {
                theme.text()
            };

            let program = record
                .set_aside
                .as_deref()
                .map(|tag| {
                    let d = app.set_asides.describe(tag);
                    format!(" [{}]", d.code)
                })
                .unwrap_or_default();

            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", date(record.award_date)), theme.muted()),
                Span::styled(
                    format!(
                        "{} awarded {}{}",
                        truncate(&record.agency, 34),
                        currency_compact(record.amount),
                        program
                    ),
                    style,
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("             "),
                Span::styled(truncate(&record.title, 60), theme.muted()),
            ]));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
