//! Theme tokens — dark and light palettes with a runtime toggle.
//!
//! # Color roles
//! - **Background**: primary surface
//! - **Accent**: focus, highlights, sort indicators
//! - **Positive**: small-business-friendly accents, large totals
//! - **Negative**: errors, cancelled awards
//! - **Warning**: warnings, pending awards
//! - **Neutral**: secondary program accents
//! - **Muted**: hints, disabled, secondary text

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use govchime_core::domain::ContractStatus;

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Theme tokens for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted_c: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(16, 18, 24),
            accent: Color::Rgb(80, 200, 255),
            positive: Color::Rgb(70, 220, 130),
            negative: Color::Rgb(240, 80, 110),
            warning: Color::Rgb(250, 170, 50),
            neutral: Color::Rgb(160, 130, 230),
            muted_c: Color::Rgb(120, 130, 150),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 175, 185),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::Rgb(248, 248, 245),
            accent: Color::Rgb(20, 110, 180),
            positive: Color::Rgb(20, 140, 70),
            negative: Color::Rgb(190, 40, 70),
            warning: Color::Rgb(180, 110, 10),
            neutral: Color::Rgb(110, 70, 180),
            muted_c: Color::Rgb(110, 115, 125),
            text_primary: Color::Black,
            text_secondary: Color::Rgb(80, 85, 95),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    // ── Style helpers ──

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted_c)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn negative_style(&self) -> Style {
        Style::default().fg(self.negative)
    }

    pub fn neutral_style(&self) -> Style {
        Style::default().fg(self.neutral)
    }

    // ── Value-mapped colors ──

    /// Color for an award amount by magnitude.
    pub fn amount_color(&self, amount: f64) -> Color {
        match amount {
            a if a > 10_000_000.0 => self.warning,
            a if a >= 1_000_000.0 => self.positive,
            _ => self.text_secondary,
        }
    }

    /// Color for a contract status.
    pub fn status_color(&self, status: ContractStatus) -> Color {
        match status {
            ContractStatus::Active => self.positive,
            ContractStatus::Completed => self.muted_c,
            ContractStatus::Pending => self.warning,
            ContractStatus::Cancelled => self.negative,
        }
    }

    /// Resolve a set-aside accent token. Unknown tokens (including
    /// the fallback descriptor's empty accent) use secondary text.
    pub fn set_aside_color(&self, accent: &str) -> Color {
        match accent {
            "positive" => self.positive,
            "accent" => self.accent,
            "warning" => self.warning,
            "neutral" => self.neutral,
            _ => self.text_secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn for_mode_roundtrip() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(Theme::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
    }

    #[test]
    fn amount_colors_by_magnitude() {
        let t = Theme::dark();
        assert_eq!(t.amount_color(25_000_000.0), t.warning);
        assert_eq!(t.amount_color(5_000_000.0), t.positive);
        assert_eq!(t.amount_color(250_000.0), t.text_secondary);
    }

    #[test]
    fn status_colors() {
        let t = Theme::dark();
        assert_eq!(t.status_color(ContractStatus::Active), t.positive);
        assert_eq!(t.status_color(ContractStatus::Cancelled), t.negative);
    }

    #[test]
    fn unknown_set_aside_accent_falls_back() {
        let t = Theme::dark();
        assert_eq!(t.set_aside_color(""), t.text_secondary);
        assert_eq!(t.set_aside_color("sparkly"), t.text_secondary);
        assert_eq!(t.set_aside_color("positive"), t.positive);
    }
}
