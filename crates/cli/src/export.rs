//! Export writer: serialize retained records to the output CSV.

use std::path::Path;

use refsync_recon::model::CatalogRecord;

use crate::exit_codes;
use crate::CliError;

/// Export column order. The normalization key is internal-only and never
/// appears here.
const EXPORT_HEADERS: [&str; 7] = [
    "key",
    "title",
    "reportNumber",
    "url",
    "itemType",
    "date",
    "thumbnail",
];

/// Write the export file, overwriting any existing file at `path`.
/// The header row is always written, even for an empty record set.
pub fn write_export(records: &[CatalogRecord], path: &Path) -> Result<(), CliError> {
    let file = std::fs::File::create(path).map_err(|e| CliError {
        code: exit_codes::EXIT_EXPORT_WRITE,
        message: format!("cannot create {}: {}", path.display(), e),
        hint: None,
    })?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(std::io::BufWriter::new(file));

    // serde emits the header with the first record; zero rows need it
    // written explicitly.
    if records.is_empty() {
        writer
            .write_record(EXPORT_HEADERS)
            .map_err(|e| write_error(path, e))?;
    }

    for record in records {
        writer.serialize(record).map_err(|e| write_error(path, e))?;
    }

    writer.flush().map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, e: impl std::fmt::Display) -> CliError {
    CliError {
        code: exit_codes::EXIT_EXPORT_WRITE,
        message: format!("cannot write {}: {}", path.display(), e),
        hint: None,
    }
}
