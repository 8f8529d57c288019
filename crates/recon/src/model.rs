use std::collections::BTreeSet;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Needed list
// ---------------------------------------------------------------------------

/// Unique raw report numbers from the local needed list.
///
/// Raw forms only. Normalization happens inside [`crate::reconcile`] so the
/// same function is applied to both sides of the join.
#[derive(Debug, Clone, Default)]
pub struct NeededList {
    raw: BTreeSet<String>,
}

impl NeededList {
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            raw: raw.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Raw forms in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.raw.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// One item from the remote catalog.
///
/// Serializes to the export CSV in field order; the header row is exactly
/// `key,title,reportNumber,url,itemType,date,thumbnail`. Missing upstream
/// fields are empty strings, never absent columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRecord {
    pub key: String,
    pub title: String,
    #[serde(rename = "reportNumber")]
    pub report_number: String,
    pub url: String,
    #[serde(rename = "itemType")]
    pub item_type: String,
    pub date: String,
    /// Derived during reconciliation; empty until then.
    pub thumbnail: String,
}

// ---------------------------------------------------------------------------
// Reconciliation output
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ReconReport {
    /// Records retained for export: url present, report number in the
    /// needed set, thumbnail populated. Fetch order preserved.
    pub kept: Vec<CatalogRecord>,
    /// Records dropped because they had no resolvable url.
    pub dropped_no_url: usize,
    /// Needed raw report numbers with no retained match, each exactly
    /// once, sorted.
    pub gaps: Vec<String>,
}
