//! Filter/sort/aggregate pipeline over contract records.
//!
//! `FilterState` is the single mutable object; everything else is a
//! pure function of `(records, state, today)`. The pipeline is
//! recomputed from scratch on every change — record counts are
//! bounded (tens to low hundreds), so there is no caching layer.

pub mod aggregate;
pub mod pipeline;
pub mod predicate;
pub mod sort;
pub mod state;

pub use aggregate::DerivedSummary;
pub use pipeline::{distinct_agencies, distinct_set_asides, FilteredAwards};
pub use predicate::QuickFilter;
pub use sort::{SortDirection, SortField};
pub use state::FilterState;
