//! The full pipeline: filter → stable sort → aggregate.

use chrono::NaiveDate;

use crate::domain::ContractRecord;
use crate::filter::aggregate::DerivedSummary;
use crate::filter::sort::sort_records;
use crate::filter::state::FilterState;

/// A filtered, sorted view over borrowed records plus its summary.
#[derive(Debug, Clone)]
pub struct FilteredAwards<'a> {
    pub records: Vec<&'a ContractRecord>,
    pub summary: DerivedSummary,
}

impl<'a> FilteredAwards<'a> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl FilterState {
    /// Run the pipeline over a record collection.
    ///
    /// Pure function of `(records, self, today)`; called after every
    /// state change.
    pub fn apply<'a>(
        &self,
        records: &'a [ContractRecord],
        today: NaiveDate,
    ) -> FilteredAwards<'a> {
        let mut included: Vec<&ContractRecord> = records
            .iter()
            .filter(|r| self.matches(r, today))
            .collect();
        sort_records(&mut included, self.sort_field, self.sort_dir);
        let summary = DerivedSummary::from_records(&included);
        FilteredAwards {
            records: included,
            summary,
        }
    }
}

/// Distinct values of a record field, sorted, for selection cycling.
pub fn distinct_agencies(records: &[ContractRecord]) -> Vec<String> {
    let mut values: Vec<String> = records.iter().map(|r| r.agency.clone()).collect();
    values.sort();
    values.dedup();
    values
}

/// Distinct set-aside tags present in the records, sorted.
pub fn distinct_set_asides(records: &[ContractRecord]) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|r| r.set_aside.clone())
        .collect();
    values.sort();
    values.dedup();
    values
}
