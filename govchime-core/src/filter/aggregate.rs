//! Derived summary statistics over the filtered set.

use serde::{Deserialize, Serialize};

use crate::domain::ContractRecord;

/// Count, total and average of a filtered result set.
///
/// Recomputed from scratch on every change; the empty set yields all
/// zeros rather than NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedSummary {
    pub count: usize,
    pub total_value: f64,
    pub average_value: f64,
}

impl DerivedSummary {
    /// Summarize a slice of record references.
    pub fn from_records(records: &[&ContractRecord]) -> Self {
        let count = records.len();
        let total_value: f64 = records.iter().map(|r| r.amount).sum();
        let average_value = if count == 0 {
            0.0
        } else {
            total_value / count as f64
        };
        Self {
            count,
            total_value,
            average_value,
        }
    }
}
