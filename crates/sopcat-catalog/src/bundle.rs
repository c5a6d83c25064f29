//! # Catalog Bundle
//!
//! The JSON document the populating collaborator hands to the store:
//! a flat object with a `categories` array and a `procedures` array.
//! Any wire format the collaborator uses upstream of this document is
//! the collaborator's concern; the bundle is the core's only ingestion
//! contract.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use sopcat_core::{Category, CatalogError, CatalogResult, Procedure};

/// A parsed catalog bundle, not yet validated or indexed.
///
/// Turn it into a queryable snapshot with
/// [`Catalog::from_bundle`](crate::Catalog::from_bundle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogBundle {
    /// Category records in the collaborator's order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Procedure records in the collaborator's order.
    #[serde(default)]
    pub procedures: Vec<Procedure>,
}

impl CatalogBundle {
    /// Read and parse a bundle file.
    ///
    /// # Errors
    ///
    /// [`CatalogError::BundleRead`] if the file cannot be read,
    /// [`CatalogError::BundleParse`] if it is not a valid bundle document.
    /// Both carry the offending path.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::BundleRead {
            path: path.to_path_buf(),
            source,
        })?;
        let bundle: Self =
            serde_json::from_str(&raw).map_err(|source| CatalogError::BundleParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            categories = bundle.categories.len(),
            procedures = bundle.procedures.len(),
            "catalog bundle parsed"
        );
        Ok(bundle)
    }
}
