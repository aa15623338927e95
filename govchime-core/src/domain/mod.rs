//! Domain types — contract awards and their statuses.

pub mod contract;
pub mod status;

pub use contract::{ContractRecord, DomainError};
pub use status::ContractStatus;
