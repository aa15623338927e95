//! Export — CSV and JSON artifacts for a filtered selection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::ContractRecord;
use crate::filter::DerivedSummary;

/// Serialize records to pretty JSON.
pub fn export_awards_json(records: &[&ContractRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("failed to serialize awards to JSON")
}

/// Export records as CSV.
///
/// Columns: id, title, agency, location, amount, award_date,
/// end_date, naics_code, set_aside, status
pub fn export_awards_csv(records: &[&ContractRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "title",
        "agency",
        "location",
        "amount",
        "award_date",
        "end_date",
        "naics_code",
        "set_aside",
        "status",
    ])?;

    for r in records {
        wtr.write_record([
            r.id.as_str(),
            r.title.as_str(),
            r.agency.as_str(),
            r.location.as_str(),
            &format!("{:.2}", r.amount),
            &r.award_date.to_string(),
            &r.end_date.map(|d| d.to_string()).unwrap_or_default(),
            r.naics_code.as_deref().unwrap_or(""),
            r.set_aside.as_deref().unwrap_or(""),
            r.status.label(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Save the artifact set for a filtered selection.
///
/// Creates `awards_{timestamp}/` under `output_dir` containing:
/// - `awards.json` — the selected records
/// - `awards.csv` — the same records in CSV form
/// - `summary.json` — the derived summary
///
/// Returns the path to the created directory.
pub fn save_artifacts(
    records: &[&ContractRecord],
    summary: &DerivedSummary,
    output_dir: &Path,
) -> Result<PathBuf> {
    let dirname = format!("awards_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    std::fs::write(run_dir.join("awards.json"), export_awards_json(records)?)?;
    std::fs::write(run_dir.join("awards.csv"), export_awards_csv(records)?)?;
    std::fs::write(
        run_dir.join("summary.json"),
        serde_json::to_string_pretty(summary).context("failed to serialize summary")?,
    )?;

    Ok(run_dir)
}
