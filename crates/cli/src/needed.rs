//! Needed-list loading: read the local CSV of required report numbers.

use std::path::Path;

use refsync_recon::{parse_needed_list, NeededList, ReconError};

use crate::exit_codes;
use crate::CliError;

pub fn load_needed(path: &Path) -> Result<NeededList, CliError> {
    let data = std::fs::read_to_string(path).map_err(|e| CliError {
        code: exit_codes::EXIT_INPUT_MISSING,
        message: format!("cannot read needed list {}: {}", path.display(), e),
        hint: Some("pass --needed with the CSV of required report numbers".into()),
    })?;

    parse_needed_list(&data).map_err(|e| {
        let hint = match e {
            ReconError::MissingColumn { .. } => {
                Some("the needed list must have a reportNumber header column".into())
            }
            _ => None,
        };
        CliError {
            code: exit_codes::EXIT_INPUT_PARSE,
            message: format!("{}: {}", path.display(), e),
            hint,
        }
    })
}
