//! FilterState — the filter/sort state controller.
//!
//! Owned by exactly one view. `None`/empty is the all-inclusive
//! default for every filter field. Sort field and direction are part
//! of the state but are not filters: they survive `clear_all` and are
//! excluded from `active_filter_count`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::predicate::QuickFilter;
use super::sort::{SortDirection, SortField};

/// Current filter and sort selections for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub set_aside: Option<String>,
    pub agency: Option<String>,
    pub location: Option<String>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub quick: QuickFilter,
    pub sort_field: SortField,
    pub sort_dir: SortDirection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            set_aside: None,
            agency: None,
            location: None,
            amount_min: None,
            amount_max: None,
            date_start: None,
            date_end: None,
            quick: QuickFilter::All,
            sort_field: SortField::Date,
            sort_dir: SortDirection::Desc,
        }
    }
}

impl FilterState {
    /// Reset every filter field to its all-inclusive default.
    /// Sort field and direction are left untouched.
    pub fn clear_all(&mut self) {
        let sort_field = self.sort_field;
        let sort_dir = self.sort_dir;
        *self = Self {
            sort_field,
            sort_dir,
            ..Self::default()
        };
    }

    /// Number of filter fields deviating from their defaults.
    ///
    /// Each bound (min, max, start, end) counts individually. Sort
    /// field/direction never count.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.search.trim().is_empty() {
            count += 1;
        }
        count += self.set_aside.is_some() as usize;
        count += self.agency.is_some() as usize;
        count += self.location.is_some() as usize;
        count += self.amount_min.is_some() as usize;
        count += self.amount_max.is_some() as usize;
        count += self.date_start.is_some() as usize;
        count += self.date_end.is_some() as usize;
        if self.quick != QuickFilter::All {
            count += 1;
        }
        count
    }

    /// Set the amount bounds from raw text input.
    ///
    /// Dollar signs, commas and whitespace are stripped before
    /// parsing; unparseable or absent input yields an unset bound,
    /// never an error.
    pub fn set_amount_bounds_text(&mut self, min: &str, max: &str) {
        self.amount_min = parse_amount_text(min);
        self.amount_max = parse_amount_text(max);
    }

    /// Set the date range from raw text input (`YYYY-MM-DD`).
    /// Unparseable or absent input yields an unset bound.
    pub fn set_date_range_text(&mut self, start: &str, end: &str) {
        self.date_start = parse_date_text(start);
        self.date_end = parse_date_text(end);
    }

    /// Select a sort field. Selecting the active field flips the
    /// direction; selecting a new field resets to descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_field = field;
            self.sort_dir = SortDirection::Desc;
        }
    }
}

/// Parse a dollar amount from user text. `None` when unset or
/// unparseable.
pub fn parse_amount_text(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Parse an ISO date from user text. `None` when unset or unparseable.
pub fn parse_date_text(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}
