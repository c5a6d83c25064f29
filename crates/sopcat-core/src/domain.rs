//! # Catalog Vocabularies — Single Source of Truth
//!
//! Defines the closed enumerations of the procedure catalog: lifecycle
//! status, priority level, and the three independent compliance flags.
//! Each vocabulary is defined exactly once; every `match` on these enums
//! must be exhaustive, so a new variant cannot be silently ignored by
//! the filter engine or the statistics aggregator.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CatalogError;

/// The lifecycle status of a procedure record.
///
/// Records are authored as `draft`, typically promoted to `active`, and
/// eventually cycled through `under_review` or retired as `archived`.
/// The catalog core only reads the status; transitions happen in the
/// external authoring flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcedureStatus {
    /// Authored but not yet in force.
    Draft,
    /// In force and assignable.
    Active,
    /// In force but flagged for periodic review.
    UnderReview,
    /// Retired; retained for audit history.
    Archived,
}

impl ProcedureStatus {
    /// Returns all statuses in canonical order.
    pub fn all() -> &'static [ProcedureStatus] {
        &[Self::Draft, Self::Active, Self::UnderReview, Self::Archived]
    }

    /// Returns the snake_case string identifier for this status.
    ///
    /// Matches the serde serialization format and the wire values used
    /// by the collaborator that populates the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::UnderReview => "under_review",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ProcedureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcedureStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "under_review" => Ok(Self::UnderReview),
            "archived" => Ok(Self::Archived),
            other => Err(CatalogError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// The priority level assigned to a procedure record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    /// Failure to follow the procedure risks life, safety, or license.
    Critical,
    /// Material business or compliance exposure.
    High,
    /// Routine operating procedure.
    Standard,
    /// Informational or convenience procedure.
    Low,
}

impl PriorityLevel {
    /// Returns all priority levels in canonical order (highest first).
    pub fn all() -> &'static [PriorityLevel] {
        &[Self::Critical, Self::High, Self::Standard, Self::Low]
    }

    /// Returns the snake_case string identifier for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Standard => "standard",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "standard" => Ok(Self::Standard),
            "low" => Ok(Self::Low),
            other => Err(CatalogError::UnknownPriority {
                value: other.to_string(),
            }),
        }
    }
}

/// The three independent boolean compliance flags carried by every
/// procedure record.
///
/// The flags are independent: a hurricane preparation procedure can be
/// both `florida_specific` and `hurricane_related` without either
/// implying the other. Filtering and aggregation both iterate this enum,
/// so the flag list cannot drift between the two code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceFlag {
    /// Procedure addresses Florida-specific statutes or building code.
    FloridaSpecific,
    /// Procedure is part of hurricane preparation or recovery.
    HurricaneRelated,
    /// Procedure implements an OSHA requirement.
    OshaRelated,
}

impl ComplianceFlag {
    /// Returns all compliance flags in canonical order.
    pub fn all() -> &'static [ComplianceFlag] {
        &[Self::FloridaSpecific, Self::HurricaneRelated, Self::OshaRelated]
    }

    /// Returns the snake_case string identifier for this flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FloridaSpecific => "florida_specific",
            Self::HurricaneRelated => "hurricane_related",
            Self::OshaRelated => "osha_related",
        }
    }
}

impl std::fmt::Display for ComplianceFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_as_str_roundtrip() {
        for status in ProcedureStatus::all() {
            let parsed: ProcedureStatus = status.as_str().parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn status_from_str_invalid() {
        assert!("retired".parse::<ProcedureStatus>().is_err());
        assert!("Active".parse::<ProcedureStatus>().is_err()); // case-sensitive
        assert!("".parse::<ProcedureStatus>().is_err());
    }

    #[test]
    fn status_serde_format_matches_as_str() {
        for status in ProcedureStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn priority_as_str_roundtrip() {
        for priority in PriorityLevel::all() {
            let parsed: PriorityLevel = priority.as_str().parse().unwrap();
            assert_eq!(*priority, parsed);
        }
    }

    #[test]
    fn priority_from_str_invalid() {
        assert!("urgent".parse::<PriorityLevel>().is_err());
        assert!("CRITICAL".parse::<PriorityLevel>().is_err());
    }

    #[test]
    fn flag_identifiers_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for flag in ComplianceFlag::all() {
            assert!(seen.insert(flag.as_str()), "duplicate flag: {flag}");
        }
    }

    #[test]
    fn flag_serde_format_matches_as_str() {
        for flag in ComplianceFlag::all() {
            let json = serde_json::to_string(flag).unwrap();
            assert_eq!(json, format!("\"{}\"", flag.as_str()));
        }
    }

    #[test]
    fn display_matches_as_str() {
        for status in ProcedureStatus::all() {
            assert_eq!(status.to_string(), status.as_str());
        }
        for priority in PriorityLevel::all() {
            assert_eq!(priority.to_string(), priority.as_str());
        }
        for flag in ComplianceFlag::all() {
            assert_eq!(flag.to_string(), flag.as_str());
        }
    }
}
