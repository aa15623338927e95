//! Overlay widgets — welcome, award detail, error history, text input.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::format::{currency, date};
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(" Welcome to GovChime ")
        .title_style(theme.accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme.accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Browse the award wall with j/k, open details with Enter",
            theme.muted(),
        )),
        Line::from(Span::styled(
            "  2. Press / to search, f to cycle quick filters",
            theme.muted(),
        )),
        Line::from(Span::styled(
            "  3. Press 3 for spending rollups by agency or program",
            theme.muted(),
        )),
        Line::from(Span::styled(
            "  4. Press c any time to clear all filters",
            theme.muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss...",
            theme.neutral_style(),
        )),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.negative_style())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme.negative_style());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme.muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let err = &app.error_history[i];
        let is_active = i == app.error_scroll;
        let style = if is_active {
            theme.negative_style().add_modifier(Modifier::BOLD)
        } else {
            theme.muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", err.timestamp.format("%H:%M:%S")),
                theme.muted(),
            ),
            Span::styled(format!("[{}] ", err.category.label()), theme.warning_style()),
            Span::styled(&err.message, style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(&err.context, theme.muted()),
            ]));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}

/// Shared text-input overlay (search, amount range, date range).
pub fn render_text_input(f: &mut Frame, area: Rect, app: &AppState, title: &str, prompt: &str) {
    let theme = &app.theme;
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(format!("{title}[Enter]apply [Esc]cancel "))
        .title_style(theme.accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(prompt, theme.muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme.accent_style()),
            Span::styled(app.input_buffer.as_str(), theme.accent_bold()),
            Span::styled("_", theme.accent_style()),
        ]),
    ];

    let para = Paragraph::new(text);
    f.render_widget(para, inner);
}

/// Award detail overlay with reference lookups.
pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let theme = &app.theme;
    let popup = centered_rect(80, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(" Award Detail [Esc]close ")
        .title_style(theme.accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let view = match app.active_panel {
        Panel::Chatter => app.chatter_view(),
        _ => app.awards_view(),
    };
    let record = match view.records.get(idx) {
        Some(r) => *r,
        None => {
            let text = Paragraph::new(Span::styled("Award not found.", theme.muted()));
            f.render_widget(text, inner);
            return;
        }
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(&record.title, theme.accent_bold())));
    lines.push(Line::from(Span::styled(&record.description, theme.muted())));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Award", theme.accent_bold())));
    detail_line(&mut lines, app, "Contract ID", &record.id);
    detail_line(&mut lines, app, "Agency", &record.agency);
    detail_line(&mut lines, app, "Location", &record.location);
    detail_line(&mut lines, app, "Amount", &currency(record.amount));
    detail_line(&mut lines, app, "Award Date", &date(record.award_date));
    if let Some(end) = record.end_date {
        detail_line(&mut lines, app, "End Date", &date(end));
    }
    detail_line(&mut lines, app, "Status", record.status.label());
    lines.push(Line::from(""));

    // Industry classification, degrading to the generic description
    // for unknown codes.
    lines.push(Line::from(Span::styled("Industry", theme.accent_bold())));
    match &record.naics_code {
        Some(code) => {
            let description = record
                .naics_description
                .clone()
                .unwrap_or_else(|| app.naics.describe(code).to_string());
            detail_line(&mut lines, app, "NAICS", code);
            detail_line(&mut lines, app, "Sector", &description);
        }
        None => detail_line(&mut lines, app, "NAICS", "not reported"),
    }
    lines.push(Line::from(""));

    // Set-aside program, falling back to the generic descriptor.
    lines.push(Line::from(Span::styled("Set-aside", theme.accent_bold())));
    match &record.set_aside {
        Some(tag) => {
            let descriptor = app.set_asides.describe(tag);
            let accent = theme.set_aside_color(&descriptor.accent);
            lines.push(Line::from(vec![
                Span::styled(format!("  {:>12}: ", "Program"), theme.muted()),
                Span::styled(
                    format!("{} ({})", descriptor.label, descriptor.code),
                    ratatui::style::Style::default().fg(accent),
                ),
            ]));
            detail_line(&mut lines, app, "About", &descriptor.description);
        }
        None => detail_line(&mut lines, app, "Program", "none (full and open)"),
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}

fn detail_line<'a>(lines: &mut Vec<Line<'a>>, app: &AppState, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>12}: "), app.theme.muted()),
        Span::styled(value.to_string(), app.theme.text()),
    ]));
}
