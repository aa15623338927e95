//! Sort comparator — total order over the filtered set.
//!
//! Title comparison folds case (the stand-in for locale collation);
//! amount and date compare numerically. The sort itself is
//! `slice::sort_by`, which is stable: equal keys keep input order in
//! both directions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::ContractRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Amount,
    Date,
    Title,
}

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            SortField::Amount => "Amount",
            SortField::Date => "Date",
            SortField::Title => "Title",
        }
    }

    /// Parse a field name; defaults to date for unknown input.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "amount" => SortField::Amount,
            "title" => SortField::Title,
            _ => SortField::Date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Ascending comparison on one field. NaN amounts compare equal so a
/// malformed record cannot poison the ordering.
pub fn compare(a: &ContractRecord, b: &ContractRecord, field: SortField) -> Ordering {
    match field {
        SortField::Amount => a
            .amount
            .partial_cmp(&b.amount)
            .unwrap_or(Ordering::Equal),
        SortField::Date => a.award_date.cmp(&b.award_date),
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

/// Stable in-place sort of record references.
pub fn sort_records(records: &mut [&ContractRecord], field: SortField, dir: SortDirection) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match dir {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}
