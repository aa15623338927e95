//! Display formatting — currency and dates.

use chrono::NaiveDate;

/// Full currency with thousands separators: `$15,750,000`.
pub fn currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Compact currency for table columns: `$15.8M`, `$450K`, `$980`.
pub fn currency_compact(amount: f64) -> String {
    let a = amount.abs();
    let formatted = if a >= 1_000_000_000.0 {
        format!("${:.1}B", a / 1_000_000_000.0)
    } else if a >= 1_000_000.0 {
        format!("${:.1}M", a / 1_000_000.0)
    } else if a >= 1_000.0 {
        format!("${:.0}K", a / 1_000.0)
    } else {
        format!("${a:.0}")
    };
    if amount < 0.0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Human date: `Jan 15, 2025`.
pub fn date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// Truncate a string to `max` characters with a trailing period.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}.")
    }
}
