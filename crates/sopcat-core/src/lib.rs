#![deny(missing_docs)]

//! # sopcat-core — Foundational Types for the SOPCAT Stack
//!
//! This crate defines the entity model that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only
//! `serde`, `serde_json`, `thiserror`, and `chrono` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Single enumerations for closed vocabularies.** [`ProcedureStatus`],
//!    [`PriorityLevel`], and [`ComplianceFlag`] are each defined exactly
//!    once. Exhaustive `match` everywhere — adding a variant forces every
//!    consumer to handle it at compile time.
//!
//! 2. **Records are read-only data.** [`Category`] and [`Procedure`] are
//!    plain serde structs. No core operation mutates a record after the
//!    catalog is populated; authoring happens in an external collaborator.
//!
//! 3. **[`CatalogError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests. Lookups that can
//!    legitimately miss return `Option`, never an error.

pub mod category;
pub mod domain;
pub mod error;
pub mod procedure;

// Re-export primary types at crate root for ergonomic imports.
pub use category::Category;
pub use domain::{ComplianceFlag, PriorityLevel, ProcedureStatus};
pub use error::{CatalogError, CatalogResult};
pub use procedure::{Procedure, ProcedureRef};
