// refsync - sync a needed-publications list against a Zotero group library

mod exit_codes;
mod export;
mod fetch;
mod needed;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use exit_codes::EXIT_SUCCESS;

#[derive(Parser)]
#[command(name = "refsync")]
#[command(about = "Sync a needed-publications list against a Zotero group library")]
#[command(version)]
#[command(after_help = "\
Examples:
  refsync --needed needed.csv --group 1234
  refsync --needed needed.csv --group 1234 --collection ABCD2345 --out export.csv
  REFSYNC_GROUP=1234 refsync --needed needed.csv --quiet")]
struct Cli {
    /// Needed-list CSV (must have a reportNumber column)
    #[arg(long)]
    needed: PathBuf,

    /// Zotero group ID
    #[arg(long, env = "REFSYNC_GROUP")]
    group: String,

    /// Collection key within the group (default: whole group)
    #[arg(long, env = "REFSYNC_COLLECTION")]
    collection: Option<String>,

    /// Output CSV path (overwritten)
    #[arg(long, default_value = "zotero_export.csv")]
    out: PathBuf,

    /// Maximum items to fetch; the API caps a single response, larger
    /// catalogs are truncated
    #[arg(long, default_value_t = fetch::DEFAULT_FETCH_LIMIT)]
    limit: u32,

    /// Zotero API base URL
    #[arg(long, env = "REFSYNC_API_BASE", default_value = fetch::DEFAULT_API_BASE)]
    api_base: String,

    /// Suppress progress on stderr (the gap report is always printed)
    #[arg(long, short = 'q')]
    quiet: bool,
}

/// Run configuration, built once at startup and read-only thereafter.
struct SyncConfig {
    needed: PathBuf,
    group: String,
    collection: Option<String>,
    out: PathBuf,
    limit: u32,
    api_base: String,
    quiet: bool,
}

impl From<Cli> for SyncConfig {
    fn from(cli: Cli) -> Self {
        Self {
            needed: cli.needed,
            group: cli.group,
            collection: cli.collection,
            out: cli.out,
            limit: cli.limit,
            api_base: cli.api_base,
            quiet: cli.quiet,
        }
    }
}

fn main() -> ExitCode {
    let config = SyncConfig::from(Cli::parse());

    match run_sync(&config) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

/// The whole run: load needed list, fetch, reconcile, export, report.
/// The export is written once, after all filtering decisions are final,
/// so no fatal path leaves a partial output file behind.
fn run_sync(config: &SyncConfig) -> Result<(), CliError> {
    let needed = needed::load_needed(&config.needed)?;
    if !config.quiet {
        eprintln!(
            "Loaded {} needed report number(s) from {}",
            needed.len(),
            config.needed.display(),
        );
    }

    let client = fetch::ZoteroClient::new(config.api_base.clone());
    if !config.quiet {
        match &config.collection {
            Some(collection) => eprintln!(
                "Fetching up to {} item(s) from group {} collection {}...",
                config.limit, config.group, collection,
            ),
            None => eprintln!(
                "Fetching up to {} item(s) from group {}...",
                config.limit, config.group,
            ),
        }
    }
    let records =
        client.fetch_items(&config.group, config.collection.as_deref(), config.limit)?;
    if !config.quiet {
        eprintln!("  fetched {} item(s)", records.len());
    }

    let report = refsync_recon::reconcile(records, &needed);
    if !config.quiet {
        eprintln!("  dropped {} item(s) without a url", report.dropped_no_url);
        eprintln!(
            "  matched {} item(s) against the needed list",
            report.kept.len(),
        );
    }

    export::write_export(&report.kept, &config.out)?;
    if !config.quiet {
        eprintln!(
            "Done: {} row(s) written to {}",
            report.kept.len(),
            config.out.display(),
        );
    }

    // Advisory only: surfaced for the operator, never changes the exit
    // status, printed even under --quiet.
    if !report.gaps.is_empty() {
        eprintln!(
            "warning: {} needed report(s) not found in Zotero:",
            report.gaps.len(),
        );
        for raw in &report.gaps {
            eprintln!("  {}", raw);
        }
    }

    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────
