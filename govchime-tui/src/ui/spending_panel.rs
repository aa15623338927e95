//! Panel 3 — Spending: aggregate rollups by agency or set-aside.

use std::collections::BTreeMap;

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use govchime_core::domain::ContractRecord;
use govchime_core::filter::DerivedSummary;

use crate::app::{AppState, GroupBy};
use crate::format::{currency, currency_compact, truncate};

/// Label for records with no set-aside tag.
const UNTAGGED: &str = "(no set-aside)";

/// Group all records along the chosen axis, sorted by total
/// descending with a stable name tie-break.
pub fn group_summaries(records: &[ContractRecord], by: GroupBy) -> Vec<(String, DerivedSummary)> {
    let mut groups: BTreeMap<String, Vec<&ContractRecord>> = BTreeMap::new();
    for record in records {
        let key = match by {
            GroupBy::Agency => record.agency.clone(),
            GroupBy::SetAside => record
                .set_aside
                .clone()
                .unwrap_or_else(|| UNTAGGED.to_string()),
        };
        groups.entry(key).or_default().push(record);
    }

    let mut rows: Vec<(String, DerivedSummary)> = groups
        .into_iter()
        .map(|(name, members)| (name, DerivedSummary::from_records(&members)))
        .collect();
    // BTreeMap iteration gives name order; stable sort keeps it as
    // the tie-break for equal totals.
    rows.sort_by(|a, b| {
        b.1.total_value
            .partial_cmp(&a.1.total_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let rows = group_summaries(&app.records, app.spending.group_by);
    let cursor = app.spending.cursor.min(rows.len().saturating_sub(1));
    let mut lines: Vec<Line> = Vec::new();

    let grand_total: f64 = rows.iter().map(|(_, s)| s.total_value).sum();
    lines.push(Line::from(vec![
        Span::styled(
            format!("Spending by {}", app.spending.group_by.label()),
            theme.accent_bold(),
        ),
        Span::styled(
            format!("  Grand total {}", currency(grand_total)),
            theme.text(),
        ),
        Span::styled("  [g]roup toggle [j/k]scroll", theme.muted()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{:<34} {:>7} {:>12} {:>12}",
            "Group", "Awards", "Total", "Average"
        ),
        theme.accent_bold(),
    )));

    for (i, (name, summary)) in rows.iter().enumerate() {
        let is_cursor = i == cursor;
        let style = if is_cursor {
            theme.accent_style().add_modifier(Modifier::REVERSED)
        } else {
            theme.text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<34} ", truncate(name, 33)), style),
            Span::styled(format!("{:>7} ", summary.count), style),
            Span::styled(
                format!("{:>12} ", currency_compact(summary.total_value)),
                style,
            ),
            Span::styled(
                format!("{:>12}", currency_compact(summary.average_value)),
                style,
            ),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
