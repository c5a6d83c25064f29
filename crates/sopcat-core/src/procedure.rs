//! # Procedure Records
//!
//! A procedure is a single standard-operating-procedure record, the
//! catalog's primary entity. The core reads procedures; no core operation
//! mutates one after the catalog is populated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{ComplianceFlag, PriorityLevel, ProcedureStatus};

/// A standard-operating-procedure record.
///
/// The typed head of the record (identity, category link, status,
/// priority, compliance flags, duration) is what the filter engine and
/// the statistics aggregator operate on. Everything below the
/// `descriptive payload` divider is opaque: the core stores and returns
/// it but never validates or transforms it.
///
/// `category_name` is a denormalized copy of the owning category's name,
/// kept in sync by whoever writes the record. The core does not re-derive
/// it; it is carried so free-text search can match on it without a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    /// Stable unique identifier.
    pub id: i64,
    /// Unique human-readable code (e.g. `"SOP-1001"`), the externally
    /// addressable key.
    pub sop_number: String,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Foreign key into the category collection.
    pub category_id: i64,
    /// Denormalized copy of the owning category's name.
    pub category_name: String,
    /// Lifecycle status.
    pub status: ProcedureStatus,
    /// Assigned priority.
    pub priority_level: PriorityLevel,
    /// Whether compliance tracking is required for this procedure.
    pub compliance_required: bool,
    /// Florida-specific statute or building-code flag.
    pub florida_specific: bool,
    /// Hurricane preparation/recovery flag.
    pub hurricane_related: bool,
    /// OSHA requirement flag.
    pub osha_related: bool,
    /// Estimated execution time in minutes.
    #[serde(default)]
    pub estimated_duration_minutes: u32,
    /// Record creation time (immutable once set).
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,

    // --- descriptive payload (opaque to the core) ---------------------
    /// Why the procedure exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Where the procedure applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Ordered execution steps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub procedure_steps: Vec<String>,
    /// Materials and equipment needed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_materials: Vec<String>,
    /// Safety text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_requirements: Option<String>,
    /// Quality checkpoints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quality_checkpoints: Vec<String>,
    /// Forms that must accompany execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forms_required: Vec<String>,
    /// Document version label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Approver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// Approval date (opaque date string, collaborator-formatted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<String>,
    /// Effective date (opaque date string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    /// Last review date (opaque date string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<String>,
    /// Next scheduled review date (opaque date string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<String>,
    /// Attachment references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    /// Regulatory references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regulatory_compliance: Vec<String>,
    /// Cross-references to other procedures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_references: Vec<String>,
    /// Legal citations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legal_citations: Vec<String>,
    /// Verification sources consulted during authoring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verification_sources: Vec<String>,
    /// Date of the last legal review (opaque date string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_legal_review: Option<String>,
}

impl Procedure {
    /// Returns the value of one of the three compliance flags.
    ///
    /// Filtering and aggregation both go through this accessor, so the
    /// flag-to-field mapping exists in exactly one place.
    pub fn flag(&self, flag: ComplianceFlag) -> bool {
        match flag {
            ComplianceFlag::FloridaSpecific => self.florida_specific,
            ComplianceFlag::HurricaneRelated => self.hurricane_related,
            ComplianceFlag::OshaRelated => self.osha_related,
        }
    }
}

/// A lookup key for a procedure: numeric id or `sop_number`.
///
/// Callers address procedures either way; the catalog resolves both
/// through O(1) indexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProcedureRef {
    /// Numeric record id.
    Id(i64),
    /// Human-readable code such as `SOP-1001`.
    Number(String),
}

impl FromStr for ProcedureRef {
    type Err = std::convert::Infallible;

    /// All-digit strings parse as [`ProcedureRef::Id`]; anything else is
    /// taken verbatim as a `sop_number`. Parsing never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(id) => Ok(Self::Id(id)),
            Err(_) => Ok(Self::Number(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProcedureRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Number(n) => f.write_str(n),
        }
    }
}
