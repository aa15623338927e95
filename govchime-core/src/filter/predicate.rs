//! Inclusion predicates — seven independent checks combined by AND.
//!
//! Matching policy: structured selections (set-aside, agency) are
//! exact and case-sensitive; free-text matching (search, location
//! containment, quick-filter substring checks) is case-insensitive.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::ContractRecord;
use crate::filter::state::FilterState;

/// Amount threshold for the "large" quick filter.
pub const LARGE_AWARD_THRESHOLD: f64 = 10_000_000.0;

/// Window for the "recent" quick filter.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Predefined filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickFilter {
    All,
    Large,
    Recent,
    Tech,
    Defense,
}

impl QuickFilter {
    pub fn label(self) -> &'static str {
        match self {
            QuickFilter::All => "All",
            QuickFilter::Large => "Large ($10M+)",
            QuickFilter::Recent => "Recent (30d)",
            QuickFilter::Tech => "Technology",
            QuickFilter::Defense => "Defense",
        }
    }

    /// Parse a category name. Unknown values behave as `All` — a
    /// defined fallback, not an error.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "large" => QuickFilter::Large,
            "recent" => QuickFilter::Recent,
            "tech" => QuickFilter::Tech,
            "defense" => QuickFilter::Defense,
            _ => QuickFilter::All,
        }
    }

    pub fn next(self) -> Self {
        match self {
            QuickFilter::All => QuickFilter::Large,
            QuickFilter::Large => QuickFilter::Recent,
            QuickFilter::Recent => QuickFilter::Tech,
            QuickFilter::Tech => QuickFilter::Defense,
            QuickFilter::Defense => QuickFilter::All,
        }
    }
}

impl FilterState {
    /// Overall inclusion: the AND of all seven predicates.
    ///
    /// `today` anchors the "recent" quick filter; passing it in keeps
    /// the pipeline a pure function of its inputs.
    pub fn matches(&self, record: &ContractRecord, today: NaiveDate) -> bool {
        matches_search(record, &self.search)
            && matches_set_aside(record, self.set_aside.as_deref())
            && matches_agency(record, self.agency.as_deref())
            && matches_location(record, self.location.as_deref())
            && matches_amount(record, self.amount_min, self.amount_max)
            && matches_date(record, self.date_start, self.date_end)
            && matches_quick(record, self.quick, today)
    }
}

/// Case-insensitive substring of the search text against title,
/// agency and location. Empty search matches everything.
pub fn matches_search(record: &ContractRecord, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(&needle)
        || record.agency.to_lowercase().contains(&needle)
        || record.location.to_lowercase().contains(&needle)
}

/// Exact, case-sensitive tag equality. A record with no tag only
/// matches the all-inclusive selection.
pub fn matches_set_aside(record: &ContractRecord, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(tag) => record.set_aside.as_deref() == Some(tag),
    }
}

/// Exact agency equality.
pub fn matches_agency(record: &ContractRecord, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(agency) => record.agency == agency,
    }
}

/// Case-insensitive containment of the selected value in the record
/// location, so "VA" matches "Arlington, VA".
pub fn matches_location(record: &ContractRecord, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(loc) => record
            .location
            .to_lowercase()
            .contains(&loc.to_lowercase()),
    }
}

/// Unset bounds are all-inclusive.
pub fn matches_amount(record: &ContractRecord, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |m| record.amount >= m) && max.map_or(true, |m| record.amount <= m)
}

/// Unset bounds are all-inclusive; both endpoints inclusive.
pub fn matches_date(
    record: &ContractRecord,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    start.map_or(true, |s| record.award_date >= s) && end.map_or(true, |e| record.award_date <= e)
}

/// Fixed-category switch anchored at `today`.
pub fn matches_quick(record: &ContractRecord, quick: QuickFilter, today: NaiveDate) -> bool {
    match quick {
        QuickFilter::All => true,
        QuickFilter::Large => record.amount > LARGE_AWARD_THRESHOLD,
        QuickFilter::Recent => {
            let cutoff = today - Duration::days(RECENT_WINDOW_DAYS);
            record.award_date >= cutoff && record.award_date <= today
        }
        QuickFilter::Tech => record
            .naics_description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains("technology")),
        QuickFilter::Defense => record.agency.to_lowercase().contains("defense"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContractStatus;

    fn record(agency: &str, amount: f64, date: (i32, u32, u32)) -> ContractRecord {
        ContractRecord {
            id: "test".into(),
            title: "Logistics Support Services".into(),
            description: String::new(),
            agency: agency.into(),
            location: "Arlington, VA".into(),
            amount,
            award_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            end_date: None,
            naics_code: Some("541512".into()),
            naics_description: Some("Information Technology Services".into()),
            set_aside: Some("small-business".into()),
            status: ContractStatus::Active,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn search_matches_any_of_three_fields() {
        let r = record("Department of Defense", 1.0, (2025, 1, 15));
        assert!(matches_search(&r, "DEFENSE")); // agency, case folded
        assert!(matches_search(&r, "logistics")); // title
        assert!(matches_search(&r, "arlington")); // location
        assert!(matches_search(&r, "")); // empty matches
        assert!(!matches_search(&r, "submarine"));
    }

    #[test]
    fn set_aside_is_exact_and_case_sensitive() {
        let r = record("Department of Energy", 1.0, (2025, 1, 15));
        assert!(matches_set_aside(&r, None));
        assert!(matches_set_aside(&r, Some("small-business")));
        assert!(!matches_set_aside(&r, Some("Small-Business")));
        assert!(!matches_set_aside(&r, Some("8a")));
    }

    #[test]
    fn untagged_record_matches_only_all() {
        let mut r = record("Department of Energy", 1.0, (2025, 1, 15));
        r.set_aside = None;
        assert!(matches_set_aside(&r, None));
        assert!(!matches_set_aside(&r, Some("small-business")));
    }

    #[test]
    fn location_containment_is_case_insensitive() {
        let r = record("Department of Energy", 1.0, (2025, 1, 15));
        assert!(matches_location(&r, Some("va")));
        assert!(matches_location(&r, Some("Arlington")));
        assert!(!matches_location(&r, Some("TX")));
    }

    #[test]
    fn amount_bounds_inclusive() {
        let r = record("Department of Energy", 5_000.0, (2025, 1, 15));
        assert!(matches_amount(&r, None, None));
        assert!(matches_amount(&r, Some(5_000.0), None));
        assert!(matches_amount(&r, None, Some(5_000.0)));
        assert!(!matches_amount(&r, Some(5_000.01), None));
        assert!(!matches_amount(&r, None, Some(4_999.99)));
    }

    #[test]
    fn date_bounds_inclusive() {
        let r = record("Department of Energy", 1.0, (2025, 1, 15));
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert!(matches_date(&r, Some(d(2025, 1, 15)), Some(d(2025, 1, 15))));
        assert!(!matches_date(&r, Some(d(2025, 1, 16)), None));
        assert!(!matches_date(&r, None, Some(d(2025, 1, 14))));
    }

    #[test]
    fn quick_large_is_strictly_over_threshold() {
        let at = record("Department of Energy", LARGE_AWARD_THRESHOLD, (2025, 1, 15));
        let over = record("Department of Energy", LARGE_AWARD_THRESHOLD + 1.0, (2025, 1, 15));
        assert!(!matches_quick(&at, QuickFilter::Large, today()));
        assert!(matches_quick(&over, QuickFilter::Large, today()));
    }

    #[test]
    fn quick_recent_window() {
        let inside = record("Department of Energy", 1.0, (2025, 1, 15));
        let edge = record("Department of Energy", 1.0, (2025, 1, 2));
        let outside = record("Department of Energy", 1.0, (2024, 12, 1));
        let future = record("Department of Energy", 1.0, (2025, 3, 1));
        assert!(matches_quick(&inside, QuickFilter::Recent, today()));
        assert!(matches_quick(&edge, QuickFilter::Recent, today()));
        assert!(!matches_quick(&outside, QuickFilter::Recent, today()));
        assert!(!matches_quick(&future, QuickFilter::Recent, today()));
    }

    #[test]
    fn quick_tech_and_defense() {
        let r = record("Department of Defense", 1.0, (2025, 1, 15));
        assert!(matches_quick(&r, QuickFilter::Tech, today()));
        assert!(matches_quick(&r, QuickFilter::Defense, today()));

        let mut civilian = record("Department of Energy", 1.0, (2025, 1, 15));
        civilian.naics_description = Some("Engineering Services".into());
        assert!(!matches_quick(&civilian, QuickFilter::Tech, today()));
        assert!(!matches_quick(&civilian, QuickFilter::Defense, today()));
    }

    #[test]
    fn quick_tech_without_naics_description() {
        let mut r = record("Department of Energy", 1.0, (2025, 1, 15));
        r.naics_description = None;
        assert!(!matches_quick(&r, QuickFilter::Tech, today()));
    }

    #[test]
    fn unknown_quick_category_parses_as_all() {
        assert_eq!(QuickFilter::parse("large"), QuickFilter::Large);
        assert_eq!(QuickFilter::parse("DEFENSE"), QuickFilter::Defense);
        assert_eq!(QuickFilter::parse("mega"), QuickFilter::All);
        assert_eq!(QuickFilter::parse(""), QuickFilter::All);
    }

    #[test]
    fn quick_cycle_returns_to_all() {
        let mut q = QuickFilter::All;
        for _ in 0..5 {
            q = q.next();
        }
        assert_eq!(q, QuickFilter::All);
    }

    #[test]
    fn combined_matches_is_and_of_all() {
        let r = record("Department of Defense", 15_750_000.0, (2025, 1, 15));
        let mut s = FilterState::default();
        assert!(s.matches(&r, today()));

        s.quick = QuickFilter::Large;
        assert!(s.matches(&r, today()));

        s.agency = Some("Department of Energy".into());
        assert!(!s.matches(&r, today()));
    }
}
