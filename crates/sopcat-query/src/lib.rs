#![deny(missing_docs)]

//! # sopcat-query — Catalog Query Layer
//!
//! The three read operations over a [`Catalog`](sopcat_catalog::Catalog)
//! snapshot:
//!
//! - [`list_procedures`]: composable AND-ed predicates (category, status,
//!   priority, compliance flags, free-text search) plus pagination.
//! - [`group_by_category`]: partition an already-filtered result set by
//!   category for the grouped presentation mode.
//! - [`compute_statistics`]: dashboard rollups over the *entire* store,
//!   deliberately independent of any active filter.
//!
//! ## Purity Contract
//!
//! Every function here is a pure transform of `(snapshot, arguments) →
//! result`. Nothing mutates the snapshot, nothing suspends, and no
//! well-typed input produces an error: degenerate pagination clamps,
//! out-of-range pages yield empty slices, and missed lookups degrade to
//! empty output. Identical arguments against an unchanged snapshot yield
//! identical results.

pub mod filter;
pub mod group;
pub mod stats;

pub use filter::{
    filter_procedures, list_procedures, matches, FilterCriteria, Page, PageRequest,
    DEFAULT_PAGE_LIMIT,
};
pub use group::{group_by_category, CategoryGroup};
pub use stats::{compute_statistics, Statistics};
