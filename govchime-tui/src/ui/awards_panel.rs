//! Panel 1 — Awards: the award wall with filters, sort and summary.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::format::{currency_compact, date, truncate};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let view = app.awards_view();
    let filters = &app.awards.filters;
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    // Summary header.
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} awards", view.summary.count),
            theme.accent_bold(),
        ),
        Span::styled(
            format!(
                " | Total {} | Avg {}",
                currency_compact(view.summary.total_value),
                currency_compact(view.summary.average_value)
            ),
            theme.text(),
        ),
        Span::styled(
            format!(
                " | Sort: {} {} | {} filter(s)",
                filters.sort_field.label(),
                filters.sort_dir.arrow(),
                filters.active_filter_count()
            ),
            theme.muted(),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!(
            "Quick: {}  [/]search [f]quick [s]et-aside [a]gency [b]ounds [D]ates [m/d/t]sort [c]lear",
            filters.quick.label()
        ),
        theme.muted(),
    )));
    lines.push(Line::from(""));

    if view.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No awards match the current filters.",
            theme.text(),
        )));
        lines.push(Line::from(Span::styled(
            "Press c to clear all filters.",
            theme.muted(),
        )));
    } else {
        // Column headers.
        lines.push(Line::from(Span::styled(
            format!(
                "{:<34} {:<26} {:>9} {:<13} {:<7} {:<10}",
                "Title", "Agency", "Amount", "Date", "Program", "Status"
            ),
            theme.accent_bold(),
        )));

        // Visible rows, keeping the cursor in view.
        let visible_height = (area.height.saturating_sub(5) as usize).max(1);
        let start = if app.awards.cursor >= visible_height {
            app.awards.cursor + 1 - visible_height
        } else {
            0
        };
        let end = (start + visible_height).min(view.records.len());

        for i in start..end {
            let record = &view.records[i];
            let is_cursor = i == app.awards.cursor;

            let base = if is_cursor {
                theme.accent_style().add_modifier(Modifier::REVERSED)
            } else {
                theme.text()
            };
            let amount_style = if is_cursor {
                base
            } else {
                ratatui::style::Style::default().fg(theme.amount_color(record.amount))
            };
            let status_style = if is_cursor {
                base
            } else {
                ratatui::style::Style::default().fg(theme.status_color(record.status))
            };
            let program = record
                .set_aside
                .as_deref()
                .map(|tag| app.set_asides.describe(tag).code)
                .unwrap_or_default();

            lines.push(Line::from(vec![
                Span::styled(format!("{:<34} ", truncate(&record.title, 33)), base),
                Span::styled(format!("{:<26} ", truncate(&record.agency, 25)), base),
                Span::styled(
                    format!("{:>9} ", currency_compact(record.amount)),
                    amount_style,
                ),
                Span::styled(format!("{:<13} ", date(record.award_date)), base),
                Span::styled(format!("{:<7} ", truncate(&program, 7)), base),
                Span::styled(record.status.label(), status_style),
            ]));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
