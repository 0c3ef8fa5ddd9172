use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::operations::incidents::RegionId;
use crate::operations::resources::ResourceId;

/// Identifier wrapper for committed allocations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AllocationId(pub String);

impl fmt::Display for AllocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Progress state of a committed allocation, the one field that may change
/// after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationStatus {
    Pending,
    InProgress,
    Completed,
}

impl AllocationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AllocationStatus::Pending => "pending",
            AllocationStatus::InProgress => "in-progress",
            AllocationStatus::Completed => "completed",
        }
    }
}

/// One line of an allocation: a quantity drawn from a single resource and
/// directed at an incident site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationItem {
    pub resource_id: ResourceId,
    pub quantity: u32,
    pub destination: String,
    pub assigned_task: String,
    pub estimated_arrival_minutes: u32,
}

/// A committed allocation record held by the ledger. Immutable once created
/// except for `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: AllocationId,
    pub region_id: RegionId,
    pub created_at: DateTime<Utc>,
    pub items: Vec<AllocationItem>,
    pub status: AllocationStatus,
    pub effectiveness_score: u8,
    pub created_by: String,
}
