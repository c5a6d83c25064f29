//! # Statistics Aggregator
//!
//! Dashboard rollups computed in a single pass over the *entire* catalog.
//! The aggregate never looks at a filtered view: dashboard figures must
//! not silently change because the user narrowed a search.

use serde::{Deserialize, Serialize};

use sopcat_catalog::Catalog;
use sopcat_core::{ComplianceFlag, PriorityLevel, ProcedureStatus};

/// A derived statistics snapshot. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Count of all procedure records.
    pub total: usize,
    /// Count with `status == active`.
    pub active: usize,
    /// Count with the Florida-specific flag set.
    pub florida_specific: usize,
    /// Count with the hurricane-related flag set.
    pub hurricane_related: usize,
    /// Count with the OSHA-related flag set.
    pub osha_related: usize,
    /// Count with critical priority.
    pub critical_priority: usize,
    /// Count with high priority.
    pub high_priority: usize,
    /// Share of records that are both compliance-required and active,
    /// as a whole-number percentage of the total. Zero for an empty
    /// catalog. Computed locally — never a passthrough of an externally
    /// supplied average.
    pub compliance_rate: u32,
}

/// Compute a [`Statistics`] snapshot over the full catalog.
///
/// Pure function of the snapshot; invariant under any filter a caller
/// may have active elsewhere.
pub fn compute_statistics(catalog: &Catalog) -> Statistics {
    let mut stats = Statistics {
        total: 0,
        active: 0,
        florida_specific: 0,
        hurricane_related: 0,
        osha_related: 0,
        critical_priority: 0,
        high_priority: 0,
        compliance_rate: 0,
    };
    let mut compliant_active = 0usize;

    for procedure in catalog.procedures() {
        stats.total += 1;
        if procedure.status == ProcedureStatus::Active {
            stats.active += 1;
            if procedure.compliance_required {
                compliant_active += 1;
            }
        }
        for flag in ComplianceFlag::all() {
            if procedure.flag(*flag) {
                match flag {
                    ComplianceFlag::FloridaSpecific => stats.florida_specific += 1,
                    ComplianceFlag::HurricaneRelated => stats.hurricane_related += 1,
                    ComplianceFlag::OshaRelated => stats.osha_related += 1,
                }
            }
        }
        match procedure.priority_level {
            PriorityLevel::Critical => stats.critical_priority += 1,
            PriorityLevel::High => stats.high_priority += 1,
            PriorityLevel::Standard | PriorityLevel::Low => {}
        }
    }

    if stats.total > 0 {
        let rate = 100.0 * compliant_active as f64 / stats.total as f64;
        stats.compliance_rate = rate.round() as u32;
    }

    stats
}
