use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// Missing required column in the needed-list header.
    MissingColumn { column: String },
    /// CSV read / parse error.
    Csv(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { column } => {
                write!(f, "missing column '{column}'")
            }
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
