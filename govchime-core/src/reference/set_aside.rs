//! Set-aside program catalog.
//!
//! Tags are treated as opaque text and matched case-sensitively:
//! structured selections are exact, only free-text matching elsewhere
//! in the pipeline is case-insensitive. Unmatched tags resolve to a
//! generic fallback descriptor with no accent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Display metadata for one set-aside program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAsideDescriptor {
    /// Short program code shown in table columns (e.g. "SB", "SDVOSB").
    pub code: String,
    /// Full program label shown in detail views.
    pub label: String,
    pub description: String,
    /// Theme accent token name. Empty for the fallback descriptor.
    pub accent: String,
}

/// Catalog of set-aside programs keyed by tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAsideCatalog {
    pub programs: BTreeMap<String, SetAsideDescriptor>,
}

impl SetAsideCatalog {
    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read set-aside catalog: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse set-aside catalog TOML: {e}"))
    }

    /// Serialize the catalog to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize set-aside catalog: {e}"))
    }

    /// Look up a tag, falling back to a generic descriptor for
    /// unknown tags. Never fails.
    pub fn describe(&self, tag: &str) -> SetAsideDescriptor {
        self.programs
            .get(tag)
            .cloned()
            .unwrap_or_else(|| Self::fallback(tag))
    }

    /// Exact lookup without the fallback.
    pub fn get(&self, tag: &str) -> Option<&SetAsideDescriptor> {
        self.programs.get(tag)
    }

    /// All known tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        self.programs.keys().map(|s| s.as_str()).collect()
    }

    /// Generic descriptor for tags with no catalog entry.
    fn fallback(tag: &str) -> SetAsideDescriptor {
        SetAsideDescriptor {
            code: "SA".into(),
            label: format!("Set-aside program ({tag})"),
            description: "No reference entry for this program tag.".into(),
            accent: String::new(),
        }
    }

    /// Built-in catalog of the common federal set-aside programs.
    pub fn builtin() -> Self {
        let mut programs = BTreeMap::new();

        fn entry(code: &str, label: &str, description: &str, accent: &str) -> SetAsideDescriptor {
            SetAsideDescriptor {
                code: code.into(),
                label: label.into(),
                description: description.into(),
                accent: accent.into(),
            }
        }

        programs.insert(
            "small-business".into(),
            entry(
                "SB",
                "Small Business Set-Aside",
                "Reserved for firms under the applicable SBA size standard.",
                "positive",
            ),
        );
        programs.insert(
            "minority-owned".into(),
            entry(
                "MOSB",
                "Minority-Owned Small Business",
                "Reserved for small businesses majority-owned by minority individuals.",
                "neutral",
            ),
        );
        programs.insert(
            "veteran-owned".into(),
            entry(
                "VOSB",
                "Veteran-Owned Small Business",
                "Reserved for small businesses majority-owned by veterans.",
                "accent",
            ),
        );
        programs.insert(
            "woman-owned".into(),
            entry(
                "WOSB",
                "Woman-Owned Small Business",
                "Reserved for small businesses majority-owned by women.",
                "neutral",
            ),
        );
        programs.insert(
            "sdvosb".into(),
            entry(
                "SDVOSB",
                "Service-Disabled Veteran-Owned Small Business",
                "Reserved for small businesses majority-owned by service-disabled veterans.",
                "accent",
            ),
        );
        programs.insert(
            "8a".into(),
            entry(
                "8(a)",
                "8(a) Business Development",
                "Reserved for participants in the SBA 8(a) development program.",
                "warning",
            ),
        );
        programs.insert(
            "hubzone".into(),
            entry(
                "HUBZone",
                "Historically Underutilized Business Zone",
                "Reserved for firms principally located in a HUBZone.",
                "positive",
            ),
        );
        programs.insert(
            "sdb".into(),
            entry(
                "SDB",
                "Small Disadvantaged Business",
                "Reserved for small businesses owned by disadvantaged individuals.",
                "neutral",
            ),
        );

        Self { programs }
    }
}

impl Default for SetAsideCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
