//! `refsync-recon` — needed-list reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded records, returns the retained
//! set plus a gap report. No network or file IO dependencies.

pub mod engine;
pub mod error;
pub mod model;
pub mod needed;
pub mod normalize;

pub use engine::reconcile;
pub use error::ReconError;
pub use model::{CatalogRecord, NeededList, ReconReport};
pub use needed::parse_needed_list;
