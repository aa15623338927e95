//! GovChime Core — contract-award domain model and query pipeline.
//!
//! This crate contains everything below the presentation layer:
//! - Domain types (contract records, statuses)
//! - Reference catalogs (NAICS codes, set-aside programs) with
//!   mandatory fallback lookups
//! - The filter/sort/aggregate pipeline and its state controller
//! - Best-effort click analytics client
//! - CSV/JSON export of filtered selections
//! - The built-in sample dataset

pub mod analytics;
pub mod domain;
pub mod export;
pub mod filter;
pub mod reference;
pub mod sample;

pub use analytics::{AnalyticsClient, AnalyticsConfig, AnalyticsError, ClickEvent, TrackOutcome};
pub use domain::{ContractRecord, ContractStatus, DomainError};
pub use filter::{
    DerivedSummary, FilterState, FilteredAwards, QuickFilter, SortDirection, SortField,
};
pub use reference::{NaicsCatalog, SetAsideCatalog, SetAsideDescriptor};
