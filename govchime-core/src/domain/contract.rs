//! ContractRecord — a single federal contract award.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::ContractStatus;
use crate::reference::naics;

/// A federal contract award as supplied by the data boundary.
///
/// Records are immutable once constructed. Validation is advisory:
/// the query pipeline accepts unvalidated records and treats every
/// lookup as total, so a malformed record degrades to a defined
/// fallback rather than a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRecord {
    // ── Identification ──
    pub id: String,
    pub title: String,
    pub description: String,

    // ── Parties ──
    pub agency: String,
    pub location: String,

    // ── Money ──
    /// Award amount in US dollars. Non-negative.
    pub amount: f64,

    // ── Dates ──
    pub award_date: NaiveDate,
    /// Period-of-performance end. Must be >= award_date when present.
    pub end_date: Option<NaiveDate>,

    // ── Classification ──
    pub naics_code: Option<String>,
    pub naics_description: Option<String>,
    /// Set-aside program tag, matched against the reference catalog.
    pub set_aside: Option<String>,

    pub status: ContractStatus,
}

/// Structured validation errors for contract records.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("record '{id}': amount is negative ({amount})")]
    NegativeAmount { id: String, amount: f64 },

    #[error("record '{id}': end date {end} precedes award date {start}")]
    EndBeforeAward {
        id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("record '{id}': malformed NAICS code '{code}' (expected 6 digits)")]
    MalformedNaics { id: String, code: String },
}

impl ContractRecord {
    /// Check the record invariants.
    ///
    /// Returns the first violation found. Callers that skip this are
    /// still safe: the pipeline never assumes a validated record.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.amount < 0.0 {
            return Err(DomainError::NegativeAmount {
                id: self.id.clone(),
                amount: self.amount,
            });
        }
        if let Some(end) = self.end_date {
            if end < self.award_date {
                return Err(DomainError::EndBeforeAward {
                    id: self.id.clone(),
                    start: self.award_date,
                    end,
                });
            }
        }
        if let Some(code) = &self.naics_code {
            if !naics::is_well_formed(code) {
                return Err(DomainError::MalformedNaics {
                    id: self.id.clone(),
                    code: code.clone(),
                });
            }
        }
        Ok(())
    }

    /// Period of performance in days, when an end date is known.
    pub fn performance_days(&self) -> Option<i64> {
        self.end_date
            .map(|end| (end - self.award_date).num_days())
    }
}
