//! NAICS industry-code catalog.
//!
//! Codes are 6-digit numeric strings. Well-formed-but-unknown codes
//! resolve to a generic description; lookups never fail.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Description shown for well-formed codes with no catalog entry.
pub const UNCLASSIFIED: &str = "Unclassified industry";

/// Is this a well-formed NAICS code (exactly six ASCII digits)?
pub fn is_well_formed(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
}

/// Catalog of NAICS codes and their descriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaicsCatalog {
    pub codes: BTreeMap<String, String>,
}

impl NaicsCatalog {
    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read NAICS catalog: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse NAICS catalog TOML: {e}"))
    }

    /// Serialize the catalog to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize NAICS catalog: {e}"))
    }

    /// Exact lookup without the fallback.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.codes.get(code).map(|s| s.as_str())
    }

    /// Describe a code, falling back to a generic description for
    /// unknown codes. Never fails, even for malformed input.
    pub fn describe(&self, code: &str) -> &str {
        self.get(code).unwrap_or(UNCLASSIFIED)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Built-in catalog of codes common in federal contracting.
    pub fn builtin() -> Self {
        let mut codes = BTreeMap::new();
        let entries: &[(&str, &str)] = &[
            ("236220", "Commercial and Institutional Building Construction"),
            ("237310", "Highway, Street, and Bridge Construction"),
            ("336411", "Aircraft Manufacturing"),
            ("511210", "Software Publishers"),
            ("517311", "Wired Telecommunications Carriers"),
            ("518210", "Data Processing, Hosting, and Related Services"),
            ("541330", "Engineering Services"),
            ("541511", "Custom Computer Programming Services"),
            ("541512", "Computer Systems Design Services"),
            ("541519", "Other Computer Related Services"),
            ("541611", "Administrative Management Consulting Services"),
            ("541690", "Other Scientific and Technical Consulting Services"),
            ("541715", "Research and Development in the Physical Sciences"),
            ("561210", "Facilities Support Services"),
            ("561612", "Security Guards and Patrol Services"),
            ("562910", "Remediation Services"),
            ("621111", "Offices of Physicians"),
            ("811310", "Commercial Machinery Repair and Maintenance"),
        ];
        for (code, desc) in entries {
            codes.insert((*code).to_string(), (*desc).to_string());
        }
        Self { codes }
    }
}

impl Default for NaicsCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_codes() {
        assert!(is_well_formed("541511"));
        assert!(!is_well_formed("54151"));
        assert!(!is_well_formed("5415111"));
        assert!(!is_well_formed("54151x"));
        assert!(!is_well_formed(""));
    }

    #[test]
    fn known_code_describes() {
        let c = NaicsCatalog::builtin();
        assert_eq!(c.describe("541511"), "Custom Computer Programming Services");
    }

    #[test]
    fn unknown_code_falls_back() {
        let c = NaicsCatalog::builtin();
        assert_eq!(c.describe("999999"), UNCLASSIFIED);
    }

    #[test]
    fn malformed_code_falls_back_without_panic() {
        let c = NaicsCatalog::builtin();
        assert_eq!(c.describe("not-a-code"), UNCLASSIFIED);
    }

    #[test]
    fn toml_roundtrip() {
        let c = NaicsCatalog::builtin();
        let toml_str = c.to_toml().unwrap();
        let parsed = NaicsCatalog::from_toml(&toml_str).unwrap();
        assert_eq!(c.len(), parsed.len());
        assert_eq!(parsed.describe("541330"), "Engineering Services");
    }
}
