//! # Grouping Transform
//!
//! Partitions an already-filtered procedure sequence by category for the
//! category-oriented presentation mode.

use std::collections::HashMap;

use serde::Serialize;

use sopcat_catalog::Catalog;
use sopcat_core::{Category, Procedure};

/// One category's slice of a grouped result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    /// The owning category, resolved through the catalog.
    pub category: &'a Category,
    /// The group's procedures, in the order they appeared in the input.
    pub procedures: Vec<&'a Procedure>,
}

/// Partition `items` by `category_id`, attaching each group's owning
/// category.
///
/// Groups are emitted in order of *first appearance* of their category in
/// the input sequence — the order falls out of the single accumulation
/// pass, not out of category id or name. Per-group ordering preserves the
/// input encounter order.
///
/// Records whose `category_id` resolves to no known category are dropped
/// from the grouped output (and logged); they remain visible in the flat
/// list view, so nothing is lost from the catalog itself.
pub fn group_by_category<'a, I>(catalog: &'a Catalog, items: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a Procedure>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    let mut slot_by_category: HashMap<i64, usize> = HashMap::new();

    for procedure in items {
        let Some(category) = catalog.category_by_id(procedure.category_id) else {
            tracing::warn!(
                sop_number = %procedure.sop_number,
                category_id = procedure.category_id,
                "dropping procedure with unresolved category from grouped view"
            );
            continue;
        };
        let slot = *slot_by_category
            .entry(procedure.category_id)
            .or_insert_with(|| {
                groups.push(CategoryGroup {
                    category,
                    procedures: Vec::new(),
                });
                groups.len() - 1
            });
        groups[slot].procedures.push(procedure);
    }

    groups
}
