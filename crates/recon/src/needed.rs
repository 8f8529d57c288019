//! Needed-list parsing: the local CSV of required report numbers.

use crate::error::ReconError;
use crate::model::NeededList;

/// Header of the identifier column in the needed-list CSV.
pub const REPORT_NUMBER_COLUMN: &str = "reportNumber";

/// Literal marking "no report number assigned". Case-sensitive exact match.
pub const NO_REPORT_SENTINEL: &str = "EMPTY";

/// Parse the needed-list CSV into the unique set of raw report numbers.
///
/// Requires a `reportNumber` header column. The empty string and the
/// `EMPTY` sentinel are excluded; duplicates collapse. No normalization
/// happens here; it is applied uniformly during reconciliation.
pub fn parse_needed_list(csv_data: &str) -> Result<NeededList, ReconError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let idx = reader
        .headers()
        .map_err(|e| ReconError::Csv(e.to_string()))?
        .iter()
        .position(|h| h == REPORT_NUMBER_COLUMN)
        .ok_or_else(|| ReconError::MissingColumn {
            column: REPORT_NUMBER_COLUMN.into(),
        })?;

    let mut raw = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ReconError::Csv(e.to_string()))?;
        let value = record.get(idx).unwrap_or("");
        if value.is_empty() || value == NO_REPORT_SENTINEL {
            continue;
        }
        raw.push(value.to_string());
    }

    Ok(NeededList::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unique_non_sentinel_values() {
        let csv = "\
title,reportNumber
Streamflow,PNW 615
Agnet notes,AGNET
No number,EMPTY
Blank,
Duplicate,PNW 615
";
        let needed = parse_needed_list(csv).unwrap();
        assert_eq!(needed.len(), 2);
        let raw: Vec<&str> = needed.iter().collect();
        assert_eq!(raw, ["AGNET", "PNW 615"]);
    }

    #[test]
    fn sentinel_match_is_case_sensitive() {
        let csv = "\
reportNumber
EMPTY
empty
Empty
";
        let needed = parse_needed_list(csv).unwrap();
        let raw: Vec<&str> = needed.iter().collect();
        assert_eq!(raw, ["Empty", "empty"]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "title,number\nStreamflow,PNW 615\n";
        let err = parse_needed_list(csv).unwrap_err();
        assert!(matches!(
            err,
            ReconError::MissingColumn { ref column } if column == "reportNumber"
        ));
    }

    #[test]
    fn header_only_input_yields_empty_set() {
        let needed = parse_needed_list("reportNumber\n").unwrap();
        assert!(needed.is_empty());
    }
}
