//! # Catalog Snapshot
//!
//! The immutable session snapshot of categories and procedures, with
//! O(1) lookup indexes keyed by record id and `sop_number`.

use std::collections::HashMap;

use sopcat_core::{Category, CatalogError, CatalogResult, Procedure, ProcedureRef};

use crate::bundle::CatalogBundle;

/// The in-memory catalog: an ordered collection of procedures and
/// categories, indexed for id and number lookups.
///
/// Records keep their insertion order — that order is the stable default
/// sort key for every query; no re-sorting happens anywhere in the core.
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<Category>,
    procedures: Vec<Procedure>,
    category_by_id: HashMap<i64, usize>,
    procedure_by_id: HashMap<i64, usize>,
    procedure_by_number: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-loaded records, validating uniqueness
    /// invariants and constructing the lookup indexes.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-key error if two categories share an `id` or
    /// `category_code`, or two procedures share an `id` or `sop_number`.
    pub fn new(categories: Vec<Category>, procedures: Vec<Procedure>) -> CatalogResult<Self> {
        let mut category_by_id = HashMap::with_capacity(categories.len());
        let mut codes = HashMap::with_capacity(categories.len());
        for (idx, category) in categories.iter().enumerate() {
            if category_by_id.insert(category.id, idx).is_some() {
                return Err(CatalogError::DuplicateCategoryId { id: category.id });
            }
            if codes.insert(category.category_code.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateCategoryCode {
                    code: category.category_code.clone(),
                });
            }
        }

        let mut procedure_by_id = HashMap::with_capacity(procedures.len());
        let mut procedure_by_number = HashMap::with_capacity(procedures.len());
        for (idx, procedure) in procedures.iter().enumerate() {
            if procedure_by_id.insert(procedure.id, idx).is_some() {
                return Err(CatalogError::DuplicateProcedureId { id: procedure.id });
            }
            if procedure_by_number
                .insert(procedure.sop_number.clone(), idx)
                .is_some()
            {
                return Err(CatalogError::DuplicateSopNumber {
                    sop_number: procedure.sop_number.clone(),
                });
            }
            // Data-integrity concern of whoever authored the bundle, not
            // fatal here: the record stays listable, but grouping will
            // drop it.
            if !category_by_id.contains_key(&procedure.category_id) {
                tracing::warn!(
                    sop_number = %procedure.sop_number,
                    category_id = procedure.category_id,
                    "procedure references unknown category"
                );
            }
        }

        Ok(Self {
            categories,
            procedures,
            category_by_id,
            procedure_by_id,
            procedure_by_number,
        })
    }

    /// Build a catalog from a parsed bundle document.
    pub fn from_bundle(bundle: CatalogBundle) -> CatalogResult<Self> {
        Self::new(bundle.categories, bundle.procedures)
    }

    /// Read a bundle file from disk, parse it, and build the catalog.
    ///
    /// This is the collaborator step that populates the store; it runs to
    /// completion before any query operates on the snapshot.
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> CatalogResult<Self> {
        let bundle = CatalogBundle::from_path(path)?;
        Self::from_bundle(bundle)
    }

    /// All categories in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All procedures in insertion order.
    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    /// Active categories in insertion order (`is_active` only).
    pub fn active_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_active)
    }

    /// Look up a category by id.
    pub fn category_by_id(&self, id: i64) -> Option<&Category> {
        self.category_by_id.get(&id).map(|&idx| &self.categories[idx])
    }

    /// Look up a procedure by numeric id.
    pub fn procedure_by_id(&self, id: i64) -> Option<&Procedure> {
        self.procedure_by_id.get(&id).map(|&idx| &self.procedures[idx])
    }

    /// Look up a procedure by its `sop_number`.
    pub fn procedure_by_number(&self, sop_number: &str) -> Option<&Procedure> {
        self.procedure_by_number
            .get(sop_number)
            .map(|&idx| &self.procedures[idx])
    }

    /// Look up a procedure by id or `sop_number`.
    pub fn procedure(&self, key: &ProcedureRef) -> Option<&Procedure> {
        match key {
            ProcedureRef::Id(id) => self.procedure_by_id(*id),
            ProcedureRef::Number(number) => self.procedure_by_number(number),
        }
    }
}
