//! # Filter/Search Engine
//!
//! Applies caller-supplied predicates to the procedure collection and
//! slices the surviving sequence into a page. The full insertion-order
//! sequence is the default, stable sort key — no secondary sort is
//! applied anywhere.

use serde::{Deserialize, Serialize};

use sopcat_catalog::Catalog;
use sopcat_core::{PriorityLevel, Procedure, ProcedureStatus};

/// Default page size, matching the collaborator's list endpoint.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Caller-supplied filter constraints. All fields are optional; an
/// absent field means "no constraint on that field," never "match false."
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Restrict to a single category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Restrict to a lifecycle status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProcedureStatus>,
    /// Restrict to a priority level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityLevel>,
    /// Require the Florida-specific flag to equal this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub florida_specific: Option<bool>,
    /// Require the hurricane-related flag to equal this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hurricane_related: Option<bool>,
    /// Require the OSHA-related flag to equal this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osha_related: Option<bool>,
    /// Case-insensitive free-text search over title, sop_number,
    /// description, and category_name. Trimmed before matching; an empty
    /// or whitespace-only string is no constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterCriteria {
    /// The trimmed, lowercased search needle, or `None` when the search
    /// field is absent or blank.
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// The pagination window a caller asks for. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number. Zero clamps to 1.
    pub page: usize,
    /// Page size. Zero clamps to 1.
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    /// Clamp degenerate input to the smallest sane window. The engine is
    /// total: it always returns *some* page rather than rejecting input.
    fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.max(1),
        }
    }
}

/// One page of filtered results plus the pagination metadata the caller
/// needs to render controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    /// The records in this window, insertion order preserved.
    pub items: Vec<&'a Procedure>,
    /// Echo of the (clamped) requested page.
    pub page: usize,
    /// Echo of the (clamped) page size.
    pub limit: usize,
    /// Count of records matching the filter, independent of the window.
    pub total: usize,
    /// `ceil(total / limit)`, floored at 1 so an empty result still has a
    /// well-defined page one.
    pub total_pages: usize,
}

/// Whether a single procedure satisfies every supplied predicate.
///
/// The free-text search matches if the needle occurs in *any one* of
/// title, sop_number, description, or category_name (the explicit
/// searchable-field list; fields are never discovered reflectively).
pub fn matches(procedure: &Procedure, criteria: &FilterCriteria) -> bool {
    matches_with_needle(procedure, criteria, criteria.search_needle().as_deref())
}

fn matches_with_needle(
    procedure: &Procedure,
    criteria: &FilterCriteria,
    needle: Option<&str>,
) -> bool {
    if let Some(category_id) = criteria.category_id {
        if procedure.category_id != category_id {
            return false;
        }
    }
    if let Some(status) = criteria.status {
        if procedure.status != status {
            return false;
        }
    }
    if let Some(priority) = criteria.priority {
        if procedure.priority_level != priority {
            return false;
        }
    }
    if let Some(wanted) = criteria.florida_specific {
        if procedure.florida_specific != wanted {
            return false;
        }
    }
    if let Some(wanted) = criteria.hurricane_related {
        if procedure.hurricane_related != wanted {
            return false;
        }
    }
    if let Some(wanted) = criteria.osha_related {
        if procedure.osha_related != wanted {
            return false;
        }
    }
    if let Some(needle) = needle {
        let hit = procedure.title.to_lowercase().contains(needle)
            || procedure.sop_number.to_lowercase().contains(needle)
            || procedure.description.to_lowercase().contains(needle)
            || procedure.category_name.to_lowercase().contains(needle);
        if !hit {
            return false;
        }
    }
    true
}

/// The full filtered sequence, unpaginated, in insertion order.
///
/// The grouped presentation mode consumes this directly; `list_procedures`
/// slices it into a window.
pub fn filter_procedures<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
) -> Vec<&'a Procedure> {
    let needle = criteria.search_needle();
    catalog
        .procedures()
        .iter()
        .filter(|p| matches_with_needle(p, criteria, needle.as_deref()))
        .collect()
}

/// Filter the catalog and return the requested page plus pagination
/// metadata.
///
/// Pure function of `(snapshot, criteria, pagination)`. A `page` beyond
/// the last page yields an empty item list, not an error.
pub fn list_procedures<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    request: PageRequest,
) -> Page<'a> {
    let request = request.clamped();
    let filtered = filter_procedures(catalog, criteria);
    let total = filtered.len();
    let total_pages = if total == 0 {
        1
    } else {
        total.div_ceil(request.limit)
    };

    let start = (request.page - 1).saturating_mul(request.limit);
    let items: Vec<&Procedure> = filtered
        .into_iter()
        .skip(start)
        .take(request.limit)
        .collect();

    tracing::debug!(
        total,
        total_pages,
        page = request.page,
        limit = request.limit,
        returned = items.len(),
        "procedure query executed"
    );

    Page {
        items,
        page: request.page,
        limit: request.limit,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sopcat_core::Category;

    fn category(id: i64, code: &str, name: &str) -> Category {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Category {
            id,
            category_code: code.to_string(),
            category_name: name.to_string(),
            description: String::new(),
            color_code: String::new(),
            icon_name: String::new(),
            sort_order: 0,
            is_active: true,
            created_at: t,
            updated_at: t,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn procedure(
        id: i64,
        number: &str,
        title: &str,
        category_id: i64,
        category_name: &str,
        status: ProcedureStatus,
        priority: PriorityLevel,
        osha: bool,
    ) -> Procedure {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Procedure {
            id,
            sop_number: number.to_string(),
            title: title.to_string(),
            description: String::new(),
            category_id,
            category_name: category_name.to_string(),
            status,
            priority_level: priority,
            compliance_required: true,
            florida_specific: false,
            hurricane_related: false,
            osha_related: osha,
            estimated_duration_minutes: 30,
            created_at: t,
            updated_at: t,
            purpose: None,
            scope: None,
            procedure_steps: vec![],
            required_materials: vec![],
            safety_requirements: None,
            quality_checkpoints: vec![],
            forms_required: vec![],
            version: None,
            created_by: None,
            approved_by: None,
            approval_date: None,
            effective_date: None,
            review_date: None,
            next_review_date: None,
            attachments: vec![],
            regulatory_compliance: vec![],
            cross_references: vec![],
            legal_citations: vec![],
            verification_sources: vec![],
            last_legal_review: None,
        }
    }

    fn five_procedure_catalog() -> Catalog {
        // 3 of 5 are OSHA-related; mixed statuses and categories.
        Catalog::new(
            vec![category(1, "1000", "Safety"), category(2, "2000", "Software")],
            vec![
                procedure(
                    1,
                    "SOP-1001",
                    "Fall Protection",
                    1,
                    "Safety",
                    ProcedureStatus::Active,
                    PriorityLevel::Critical,
                    true,
                ),
                procedure(
                    2,
                    "SOP-1002",
                    "Ladder Inspection",
                    1,
                    "Safety",
                    ProcedureStatus::Active,
                    PriorityLevel::High,
                    true,
                ),
                procedure(
                    3,
                    "SOP-2001",
                    "CRM Data Entry",
                    2,
                    "Software",
                    ProcedureStatus::Draft,
                    PriorityLevel::Standard,
                    false,
                ),
                procedure(
                    4,
                    "SOP-1003",
                    "Scaffold Assembly",
                    1,
                    "Safety",
                    ProcedureStatus::UnderReview,
                    PriorityLevel::Critical,
                    true,
                ),
                procedure(
                    5,
                    "SOP-2002",
                    "Invoice Workflow",
                    2,
                    "Software",
                    ProcedureStatus::Active,
                    PriorityLevel::Low,
                    false,
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn unconstrained_criteria_match_everything() {
        let catalog = five_procedure_catalog();
        let page = list_procedures(&catalog, &FilterCriteria::default(), PageRequest::default());
        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn osha_flag_filter_counts_three_of_five() {
        // Scenario 1 from the contract.
        let catalog = five_procedure_catalog();
        let criteria = FilterCriteria {
            osha_related: Some(true),
            ..Default::default()
        };
        let page = list_procedures(&catalog, &criteria, PageRequest { page: 1, limit: 10 });
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn flag_filter_false_is_a_constraint_not_absence() {
        let catalog = five_procedure_catalog();
        let criteria = FilterCriteria {
            osha_related: Some(false),
            ..Default::default()
        };
        let page = list_procedures(&catalog, &criteria, PageRequest::default());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let catalog = five_procedure_catalog();
        let criteria = FilterCriteria {
            category_id: Some(1),
            status: Some(ProcedureStatus::Active),
            priority: Some(PriorityLevel::Critical),
            ..Default::default()
        };
        let page = list_procedures(&catalog, &criteria, PageRequest::default());
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].sop_number, "SOP-1001");
        for item in &page.items {
            assert!(matches(item, &criteria));
        }
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let catalog = five_procedure_catalog();

        // Title hit.
        let criteria = FilterCriteria {
            search: Some("LADDER".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_procedures(&catalog, &criteria).len(), 1);

        // sop_number hit.
        let criteria = FilterCriteria {
            search: Some("sop-2001".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_procedures(&catalog, &criteria).len(), 1);

        // category_name hit (denormalized copy, no join).
        let criteria = FilterCriteria {
            search: Some("software".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_procedures(&catalog, &criteria).len(), 2);
    }

    #[test]
    fn search_matches_title_and_description_independently() {
        // Scenario 3: a title hit and a description hit both qualify; an
        // unrelated record does not.
        let mut title_hit = procedure(
            10,
            "SOP-6001",
            "Hurricane Preparedness",
            1,
            "Safety",
            ProcedureStatus::Active,
            PriorityLevel::High,
            false,
        );
        title_hit.hurricane_related = true;
        let mut description_hit = procedure(
            11,
            "SOP-6002",
            "Site Cleanup",
            1,
            "Safety",
            ProcedureStatus::Active,
            PriorityLevel::Standard,
            false,
        );
        description_hit.description = "Debris removal post-hurricane".to_string();
        let miss = procedure(
            12,
            "SOP-6003",
            "Roof Measurement",
            1,
            "Safety",
            ProcedureStatus::Active,
            PriorityLevel::Standard,
            false,
        );

        let catalog = Catalog::new(
            vec![category(1, "1000", "Safety")],
            vec![title_hit, description_hit, miss],
        )
        .unwrap();

        let criteria = FilterCriteria {
            search: Some("hurricane".to_string()),
            ..Default::default()
        };
        let matched: Vec<i64> = filter_procedures(&catalog, &criteria)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(matched, vec![10, 11]);
    }

    #[test]
    fn blank_search_is_no_constraint() {
        let catalog = five_procedure_catalog();
        for blank in ["", "   ", "\t\n"] {
            let criteria = FilterCriteria {
                search: Some(blank.to_string()),
                ..Default::default()
            };
            assert_eq!(filter_procedures(&catalog, &criteria).len(), 5);
        }
    }

    #[test]
    fn search_term_is_trimmed() {
        let catalog = five_procedure_catalog();
        let criteria = FilterCriteria {
            search: Some("  ladder  ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_procedures(&catalog, &criteria).len(), 1);
    }

    #[test]
    fn pagination_windows_partition_the_filtered_set() {
        // Scenario 2: limit=2 over total=5 gives 3 pages, last page has 1.
        let catalog = five_procedure_catalog();
        let criteria = FilterCriteria::default();

        let p1 = list_procedures(&catalog, &criteria, PageRequest { page: 1, limit: 2 });
        let p2 = list_procedures(&catalog, &criteria, PageRequest { page: 2, limit: 2 });
        let p3 = list_procedures(&catalog, &criteria, PageRequest { page: 3, limit: 2 });

        assert_eq!(p1.total_pages, 3);
        assert_eq!(p1.items.len(), 2);
        assert_eq!(p2.items.len(), 2);
        assert_eq!(p3.items.len(), 1);

        // Concatenation reproduces the filtered set exactly, no overlap.
        let all: Vec<i64> = p1
            .items
            .iter()
            .chain(p2.items.iter())
            .chain(p3.items.iter())
            .map(|p| p.id)
            .collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn page_beyond_last_is_empty_not_an_error() {
        // Scenario 4.
        let catalog = five_procedure_catalog();
        let page = list_procedures(
            &catalog,
            &FilterCriteria::default(),
            PageRequest { page: 99, limit: 2 },
        );
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 99);
    }

    #[test]
    fn zero_page_and_zero_limit_clamp() {
        let catalog = five_procedure_catalog();
        let page = list_procedures(
            &catalog,
            &FilterCriteria::default(),
            PageRequest { page: 0, limit: 0 },
        );
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn empty_result_still_has_page_one() {
        let catalog = five_procedure_catalog();
        let criteria = FilterCriteria {
            search: Some("no such text anywhere".to_string()),
            ..Default::default()
        };
        let page = list_procedures(&catalog, &criteria, PageRequest::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn total_is_independent_of_window() {
        let catalog = five_procedure_catalog();
        let criteria = FilterCriteria {
            category_id: Some(1),
            ..Default::default()
        };
        for (page_no, limit) in [(1, 1), (2, 1), (1, 10), (7, 3)] {
            let page = list_procedures(
                &catalog,
                &criteria,
                PageRequest {
                    page: page_no,
                    limit,
                },
            );
            assert_eq!(page.total, 3);
        }
    }

    #[test]
    fn identical_queries_are_idempotent() {
        let catalog = five_procedure_catalog();
        let criteria = FilterCriteria {
            status: Some(ProcedureStatus::Active),
            ..Default::default()
        };
        let request = PageRequest { page: 1, limit: 2 };
        let first = list_procedures(&catalog, &criteria, request);
        let second = list_procedures(&catalog, &criteria, request);
        assert_eq!(first, second);
    }
}
