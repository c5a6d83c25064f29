//! Subcommand handlers.
//!
//! Each handler builds a `serde_json::Value` from the query layer's
//! output and prints it pretty; the builders are separated from the
//! printing so tests can assert on the document shape.

use anyhow::bail;
use clap::Args;

use sopcat_catalog::Catalog;
use sopcat_core::{PriorityLevel, ProcedureRef, ProcedureStatus};
use sopcat_query::{
    compute_statistics, filter_procedures, group_by_category, list_procedures, FilterCriteria,
    PageRequest, DEFAULT_PAGE_LIMIT,
};

/// Arguments for `sopcat list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Restrict to one category id.
    #[arg(long)]
    pub category: Option<i64>,

    /// Restrict to a lifecycle status (draft, active, under_review, archived).
    #[arg(long)]
    pub status: Option<ProcedureStatus>,

    /// Restrict to a priority level (critical, high, standard, low).
    #[arg(long)]
    pub priority: Option<PriorityLevel>,

    /// Only Florida-specific procedures.
    #[arg(long)]
    pub florida: bool,

    /// Only hurricane-related procedures.
    #[arg(long)]
    pub hurricane: bool,

    /// Only OSHA-related procedures.
    #[arg(long)]
    pub osha: bool,

    /// Case-insensitive free-text search.
    #[arg(long)]
    pub search: Option<String>,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Page size.
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: usize,

    /// Group the (unpaginated) filtered set by category instead of paging.
    #[arg(long)]
    pub group: bool,
}

impl ListArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category_id: self.category,
            status: self.status,
            priority: self.priority,
            // The boolean flags only ever narrow to `true` from the CLI,
            // matching the source system's type filter.
            florida_specific: self.florida.then_some(true),
            hurricane_related: self.hurricane.then_some(true),
            osha_related: self.osha.then_some(true),
            search: self.search.clone(),
        }
    }
}

/// Arguments for `sopcat show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Procedure id or sop_number (e.g. `17` or `SOP-1001`).
    pub key: ProcedureRef,
}

/// Build the `list` output document.
pub fn list_output(catalog: &Catalog, args: &ListArgs) -> serde_json::Value {
    let criteria = args.criteria();
    if args.group {
        let filtered = filter_procedures(catalog, &criteria);
        let groups = group_by_category(catalog, filtered);
        serde_json::json!({ "groups": groups })
    } else {
        let page = list_procedures(
            catalog,
            &criteria,
            PageRequest {
                page: args.page,
                limit: args.limit,
            },
        );
        serde_json::json!({
            "items": page.items,
            "pagination": {
                "page": page.page,
                "limit": page.limit,
                "total": page.total,
                "total_pages": page.total_pages,
            },
        })
    }
}

/// Build the `show` output document, or fail if the key misses.
pub fn show_output(catalog: &Catalog, args: &ShowArgs) -> anyhow::Result<serde_json::Value> {
    match catalog.procedure(&args.key) {
        Some(procedure) => Ok(serde_json::to_value(procedure)?),
        None => bail!("procedure not found: {}", args.key),
    }
}

/// Build the `categories` output document (active categories only).
pub fn categories_output(catalog: &Catalog) -> serde_json::Value {
    let categories: Vec<_> = catalog.active_categories().collect();
    serde_json::json!({ "categories": categories })
}

/// Build the `stats` output document.
pub fn stats_output(catalog: &Catalog) -> serde_json::Value {
    serde_json::json!(compute_statistics(catalog))
}

/// Run `sopcat list`.
pub fn run_list(catalog: &Catalog, args: &ListArgs) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&list_output(catalog, args))?);
    Ok(())
}

/// Run `sopcat show`.
pub fn run_show(catalog: &Catalog, args: &ShowArgs) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&show_output(catalog, args)?)?);
    Ok(())
}

/// Run `sopcat categories`.
pub fn run_categories(catalog: &Catalog) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&categories_output(catalog))?);
    Ok(())
}

/// Run `sopcat stats`.
pub fn run_stats(catalog: &Catalog) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&stats_output(catalog))?);
    Ok(())
}
