//! Zotero catalog fetcher — one bounded GET per run.
//!
//! The remote caps a single response at [`DEFAULT_FETCH_LIMIT`] items;
//! catalogs larger than the cap are silently truncated (no pagination).
//! Every failure is fatal and is never retried.

use std::time::Duration;

use serde::Deserialize;

use refsync_recon::model::CatalogRecord;

use crate::exit_codes;
use crate::CliError;

// ── Constants ───────────────────────────────────────────────────────

pub const DEFAULT_API_BASE: &str = "https://api.zotero.org";
pub const DEFAULT_FETCH_LIMIT: u32 = 100;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("refsync/", env!("CARGO_PKG_VERSION"));

/// Cap on how much of an upstream body is surfaced in error messages.
const BODY_DISPLAY_LIMIT: usize = 200;

// ── Response shape ──────────────────────────────────────────────────

/// One element of the Zotero items array: a key plus a nested data object.
/// Absent data fields are logically empty, not errors.
#[derive(Debug, Deserialize)]
struct ZoteroItem {
    #[serde(default)]
    key: String,
    #[serde(default)]
    data: ZoteroItemData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ZoteroItemData {
    title: String,
    #[serde(rename = "reportNumber")]
    report_number: String,
    url: String,
    #[serde(rename = "itemType")]
    item_type: String,
    date: String,
}

impl From<ZoteroItem> for CatalogRecord {
    fn from(item: ZoteroItem) -> Self {
        Self {
            key: item.key,
            title: item.data.title,
            report_number: item.data.report_number,
            url: item.data.url,
            item_type: item.data.item_type,
            date: item.data.date,
            thumbnail: String::new(),
        }
    }
}

// ── Zotero client ───────────────────────────────────────────────────

pub struct ZoteroClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ZoteroClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Top-level items of a group, or of one collection within the group.
    fn items_url(
        &self,
        group_id: &str,
        collection: Option<&str>,
        limit: u32,
    ) -> Result<url::Url, CliError> {
        let mut url = url::Url::parse(&self.base_url).map_err(|e| CliError {
            code: exit_codes::EXIT_USAGE,
            message: format!("invalid API base URL {:?}: {}", self.base_url, e),
            hint: None,
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| CliError {
                code: exit_codes::EXIT_USAGE,
                message: format!("API base URL {:?} cannot carry paths", self.base_url),
                hint: None,
            })?;
            segments.pop_if_empty();
            segments.extend(["groups", group_id]);
            if let Some(collection) = collection {
                segments.extend(["collections", collection]);
            }
            segments.push("items");
        }

        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("limit", &limit.to_string());

        Ok(url)
    }

    /// Fetch up to `limit` items in one request, preserving response order.
    pub fn fetch_items(
        &self,
        group_id: &str,
        collection: Option<&str>,
        limit: u32,
    ) -> Result<Vec<CatalogRecord>, CliError> {
        let url = self.items_url(group_id, collection, limit)?;

        let resp = self.http.get(url).send().map_err(|e| CliError {
            code: exit_codes::EXIT_FETCH_NETWORK,
            message: format!("cannot reach Zotero: {e}"),
            hint: Some("check the network connection and --api-base".into()),
        })?;

        let status = resp.status().as_u16();
        let text = resp.text().map_err(|e| CliError {
            code: exit_codes::EXIT_FETCH_NETWORK,
            message: format!("failed to read Zotero response body: {e}"),
            hint: None,
        })?;

        if !(200..300).contains(&status) {
            return Err(CliError {
                code: exit_codes::EXIT_FETCH_STATUS,
                message: format!("Zotero error ({}): {}", status, display_body(&text)),
                hint: None,
            });
        }

        // Read as text first to tolerate BOM-prefixed bodies.
        let trimmed = text.trim_start_matches('\u{feff}');
        let items: Vec<ZoteroItem> = serde_json::from_str(trimmed).map_err(|e| CliError {
            code: exit_codes::EXIT_FETCH_DECODE,
            message: format!(
                "failed to parse Zotero JSON response: {} (body: {})",
                e,
                display_body(trimmed),
            ),
            hint: None,
        })?;

        Ok(items.into_iter().map(CatalogRecord::from).collect())
    }
}

/// Truncate an upstream body for display, respecting char boundaries.
fn display_body(body: &str) -> &str {
    if body.len() <= BODY_DISPLAY_LIMIT {
        return body;
    }
    let mut end = BODY_DISPLAY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

// ── Tests ───────────────────────────────────────────────────────────
