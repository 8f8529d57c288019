//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args)               |
//! | 10-19   | input            | Needed-list file codes                   |
//! | 20-29   | fetch            | Zotero fetch codes                       |
//! | 30-39   | export           | Export file codes                        |
//!
//! The gap report ("needed report numbers not found in Zotero") is advisory
//! and never changes the exit status.

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Input (10-19) — the local needed-list CSV
// =============================================================================

/// Needed-list file missing or unreadable.
pub const EXIT_INPUT_MISSING: u8 = 10;

/// Needed-list file present but not parseable (bad CSV, missing column).
pub const EXIT_INPUT_PARSE: u8 = 11;

// =============================================================================
// Fetch (20-29) — the remote Zotero catalog
// =============================================================================

/// Network failure reaching Zotero (connection error, timeout).
pub const EXIT_FETCH_NETWORK: u8 = 20;

/// Non-success HTTP status from Zotero.
pub const EXIT_FETCH_STATUS: u8 = 21;

/// Response body not decodable as the expected JSON item array.
pub const EXIT_FETCH_DECODE: u8 = 22;

// =============================================================================
// Export (30-39)
// =============================================================================

/// Export file cannot be created or written.
pub const EXIT_EXPORT_WRITE: u8 = 30;
