//! GovChime CLI — query contract awards from the command line.
//!
//! Commands:
//! - `list` — filter, sort and summarize awards as a table or JSON
//! - `summary` — aggregate totals grouped by agency or set-aside
//! - `lookup` — NAICS and set-aside reference lookups
//! - `export` — write the filtered selection as CSV/JSON artifacts

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use govchime_core::domain::ContractRecord;
use govchime_core::export::save_artifacts;
use govchime_core::filter::{
    DerivedSummary, FilterState, QuickFilter, SortDirection, SortField,
};
use govchime_core::reference::{NaicsCatalog, SetAsideCatalog};
use govchime_core::sample::sample_awards;

#[derive(Parser)]
#[command(
    name = "govchime",
    about = "GovChime CLI — federal contract-award explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Case-insensitive search across title, agency and location.
    #[arg(long)]
    search: Option<String>,

    /// Exact agency name.
    #[arg(long)]
    agency: Option<String>,

    /// Exact set-aside tag (e.g. small-business, sdvosb, 8a).
    #[arg(long)]
    set_aside: Option<String>,

    /// Location substring (e.g. "VA" or "Arlington").
    #[arg(long)]
    location: Option<String>,

    /// Minimum amount. Lenient: "$5,000,000" works; junk means unset.
    #[arg(long)]
    min_amount: Option<String>,

    /// Maximum amount.
    #[arg(long)]
    max_amount: Option<String>,

    /// Earliest award date (YYYY-MM-DD).
    #[arg(long)]
    from: Option<String>,

    /// Latest award date (YYYY-MM-DD).
    #[arg(long)]
    to: Option<String>,

    /// Quick filter: large, recent, tech, defense. Unknown means all.
    #[arg(long)]
    quick: Option<String>,

    /// Sort field: amount, date, title.
    #[arg(long, default_value = "date")]
    sort: String,

    /// Sort ascending (default is descending).
    #[arg(long, default_value_t = false)]
    asc: bool,

    /// Load records from a JSON file instead of the sample dataset.
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and summarize awards.
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Machine-readable JSON output.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Aggregate totals grouped by agency or set-aside.
    Summary {
        /// Grouping axis: agency or set-aside.
        #[arg(long, default_value = "agency")]
        by: String,

        /// Load records from a JSON file instead of the sample dataset.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Machine-readable JSON output.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Reference lookups.
    Lookup {
        #[command(subcommand)]
        what: LookupCommands,
    },
    /// Write the filtered selection as CSV/JSON artifacts.
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output directory for the artifact bundle.
        #[arg(long, default_value = "artifacts")]
        output_dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum LookupCommands {
    /// Describe a NAICS code.
    Naics { code: String },
    /// Describe a set-aside program tag.
    SetAside { tag: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { filters, json } => run_list(filters, json),
        Commands::Summary { by, data, json } => run_summary(&by, data, json),
        Commands::Lookup { what } => run_lookup(what),
        Commands::Export {
            filters,
            output_dir,
        } => run_export(filters, &output_dir),
    }
}

/// Build a FilterState from CLI flags, validating the date flags
/// (interactive text inputs are lenient; explicit flags should fail
/// loudly when malformed).
fn build_state(args: &FilterArgs) -> Result<FilterState> {
    let mut state = FilterState::default();
    state.search = args.search.clone().unwrap_or_default();
    state.agency = args.agency.clone();
    state.set_aside = args.set_aside.clone();
    state.location = args.location.clone();
    state.set_amount_bounds_text(
        args.min_amount.as_deref().unwrap_or(""),
        args.max_amount.as_deref().unwrap_or(""),
    );
    state.date_start = parse_date_flag(args.from.as_deref(), "--from")?;
    state.date_end = parse_date_flag(args.to.as_deref(), "--to")?;
    state.quick = args
        .quick
        .as_deref()
        .map(QuickFilter::parse)
        .unwrap_or(QuickFilter::All);
    state.sort_field = SortField::parse(&args.sort);
    state.sort_dir = if args.asc {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };
    Ok(state)
}

fn parse_date_flag(value: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("{flag} expects YYYY-MM-DD, got '{s}'")),
    }
}

fn load_records(data: Option<&PathBuf>) -> Result<Vec<ContractRecord>> {
    match data {
        None => Ok(sample_awards()),
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read dataset: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse dataset: {}", path.display()))
        }
    }
}

fn run_list(args: FilterArgs, json: bool) -> Result<()> {
    let records = load_records(args.data.as_ref())?;
    let state = build_state(&args)?;
    let today = chrono::Local::now().date_naive();
    let view = state.apply(&records, today);

    if json {
        let out = serde_json::json!({
            "summary": view.summary,
            "awards": view.records,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("No awards match the current filters.");
        return Ok(());
    }

    println!(
        "{:<36} {:<28} {:>14} {:<12} {:<16}",
        "Title", "Agency", "Amount", "Date", "Set-aside"
    );
    println!("{}", "-".repeat(110));
    for r in &view.records {
        println!(
            "{:<36} {:<28} {:>14} {:<12} {:<16}",
            clip(&r.title, 36),
            clip(&r.agency, 28),
            format!("${:.0}", r.amount),
            r.award_date,
            r.set_aside.as_deref().unwrap_or("-"),
        );
    }
    println!();
    print_summary(&view.summary);

    Ok(())
}

fn run_summary(by: &str, data: Option<PathBuf>, json: bool) -> Result<()> {
    let records = load_records(data.as_ref())?;

    if by != "agency" && by != "set-aside" {
        bail!("--by expects 'agency' or 'set-aside', got '{by}'");
    }
    let group_key = |r: &ContractRecord| -> String {
        if by == "agency" {
            r.agency.clone()
        } else {
            r.set_aside
                .clone()
                .unwrap_or_else(|| "(no set-aside)".into())
        }
    };

    let mut groups: std::collections::BTreeMap<String, Vec<&ContractRecord>> =
        std::collections::BTreeMap::new();
    for r in &records {
        groups.entry(group_key(r)).or_default().push(r);
    }

    let mut rows: Vec<(String, DerivedSummary)> = groups
        .into_iter()
        .map(|(name, members)| (name, DerivedSummary::from_records(&members)))
        .collect();
    rows.sort_by(|a, b| {
        b.1.total_value
            .partial_cmp(&a.1.total_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if json {
        let out: Vec<serde_json::Value> = rows
            .iter()
            .map(|(name, s)| serde_json::json!({ "group": name, "summary": s }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{:<36} {:>7} {:>16} {:>16}", "Group", "Awards", "Total", "Average");
    println!("{}", "-".repeat(78));
    for (name, s) in &rows {
        println!(
            "{:<36} {:>7} {:>16} {:>16}",
            clip(name, 36),
            s.count,
            format!("${:.0}", s.total_value),
            format!("${:.0}", s.average_value),
        );
    }

    Ok(())
}

fn run_lookup(what: LookupCommands) -> Result<()> {
    match what {
        LookupCommands::Naics { code } => {
            let catalog = NaicsCatalog::builtin();
            println!("NAICS {code}: {}", catalog.describe(&code));
        }
        LookupCommands::SetAside { tag } => {
            let catalog = SetAsideCatalog::builtin();
            let d = catalog.describe(&tag);
            println!("{} ({})", d.label, d.code);
            println!("{}", d.description);
        }
    }
    Ok(())
}

fn run_export(args: FilterArgs, output_dir: &PathBuf) -> Result<()> {
    let records = load_records(args.data.as_ref())?;
    let state = build_state(&args)?;
    let today = chrono::Local::now().date_naive();
    let view = state.apply(&records, today);

    let run_dir = save_artifacts(&view.records, &view.summary, output_dir)?;
    println!(
        "Exported {} award(s) to: {}",
        view.summary.count,
        run_dir.display()
    );
    Ok(())
}

fn print_summary(summary: &DerivedSummary) {
    println!("Awards:  {}", summary.count);
    println!("Total:   ${:.0}", summary.total_value);
    println!("Average: ${:.0}", summary.average_value);
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}.")
    }
}
