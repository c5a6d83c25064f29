#![deny(missing_docs)]

//! # sopcat-catalog — The Catalog Store
//!
//! Holds the authoritative in-process collection of [`Category`] and
//! [`Procedure`](sopcat_core::Procedure) records for the current session
//! and exposes read accessors over it.
//!
//! ## Immutability Contract
//!
//! A [`Catalog`] is populated exactly once — from a JSON bundle on disk
//! or from records already in memory — and is immutable for the rest of
//! the session. There is no write path. Because no operation mutates the
//! snapshot, the query layer may run any number of concurrent reads
//! against it without coordination.
//!
//! ## Population
//!
//! ```text
//! CatalogBundle (JSON document)  -->  Catalog::from_bundle  -->  Catalog
//!     collaborator's concern          validation + indexing      read-only
//! ```
//!
//! Bundle validation rejects duplicate ids, duplicate `sop_number`s, and
//! duplicate `category_code`s. A procedure whose `category_id` resolves
//! to no category is *not* fatal — that is a grouping-time concern — but
//! it is logged at `warn` during construction.

pub mod bundle;
pub mod catalog;

pub use bundle::CatalogBundle;
pub use catalog::Catalog;
