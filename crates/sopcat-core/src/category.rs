//! # Category Records
//!
//! A category is a named grouping bucket that procedures reference by id.
//! Categories are authored administratively and are read-only from the
//! catalog core's perspective.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A procedure category.
///
/// `id` is unique across the collection, and exactly one category owns a
/// given `category_code` at a time. `color_code` and `icon_name` are
/// presentation hints the core stores opaquely and never interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable unique identifier.
    pub id: i64,
    /// Short human-readable series label (e.g. `"1000"`).
    pub category_code: String,
    /// Display name.
    pub category_name: String,
    /// Free-text description.
    pub description: String,
    /// Presentation hint (opaque to the core).
    #[serde(default)]
    pub color_code: String,
    /// Presentation hint (opaque to the core).
    #[serde(default)]
    pub icon_name: String,
    /// Display ordering hint used by the collaborator; stored opaquely.
    #[serde(default)]
    pub sort_order: i64,
    /// Inactive categories are excluded from active-category queries.
    pub is_active: bool,
    /// Record creation time (immutable once set).
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}
