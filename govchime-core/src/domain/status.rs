//! Contract lifecycle status.

use serde::{Deserialize, Serialize};

/// Where a contract sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractStatus {
    Active,
    Completed,
    Pending,
    Cancelled,
}

impl ContractStatus {
    pub fn label(self) -> &'static str {
        match self {
            ContractStatus::Active => "Active",
            ContractStatus::Completed => "Completed",
            ContractStatus::Pending => "Pending",
            ContractStatus::Cancelled => "Cancelled",
        }
    }
}
