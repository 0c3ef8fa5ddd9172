use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::domain::{Allocation, AllocationId, AllocationItem, AllocationStatus};
use super::scoring::ScoringEngine;
use crate::operations::incidents::{IncidentStatus, IncidentStore, RegionId};
use crate::operations::resources::{InventoryError, ResourceId, ResourceRegistry, ResourceType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("unknown allocation '{0}'")]
    UnknownAllocation(AllocationId),
}

/// What happened to one allocation item at commit time. Insufficient balances
/// leave the resource untouched; nothing is partially decremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ItemCommitOutcome {
    Committed { remaining: u32 },
    InsufficientInventory { requested: u32, available: u32 },
    UnknownResource,
}

impl ItemCommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, ItemCommitOutcome::Committed { .. })
    }
}

/// Per-item line of a commit receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCommit {
    pub resource_id: ResourceId,
    pub quantity: u32,
    #[serde(flatten)]
    pub outcome: ItemCommitOutcome,
}

/// Result of committing an allocation: the stored record's id and score plus
/// the explicit per-item outcomes that replace the silent under-commit of
/// earlier revisions of this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReceipt {
    pub allocation_id: AllocationId,
    pub effectiveness_score: u8,
    pub items: Vec<ItemCommit>,
}

impl CommitReceipt {
    pub fn committed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.outcome.is_committed())
            .count()
    }

    pub fn fully_committed(&self) -> bool {
        self.committed_count() == self.items.len()
    }
}

/// Inventory position of one resource type across ledger and registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeUtilization {
    pub allocated: u64,
    pub available: u64,
    pub total: u64,
}

/// Aggregate utilization snapshot for dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationStatistics {
    pub by_type: BTreeMap<ResourceType, TypeUtilization>,
    pub open_allocations: usize,
    pub active_incidents: usize,
}

/// Owner of committed allocation records. Commitment mutates the registry;
/// everything else here is read-only reporting.
#[derive(Debug, Clone, Default)]
pub struct AllocationLedger {
    allocations: BTreeMap<AllocationId, Allocation>,
    sequence: u64,
}

impl AllocationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an allocation record and attempt per-item inventory commitment.
    ///
    /// The record is scored before any decrement and stored regardless of the
    /// outcomes; items that cannot be honored are reported in the receipt
    /// rather than silently skipped.
    pub fn commit(
        &mut self,
        registry: &mut ResourceRegistry,
        store: &IncidentStore,
        engine: &ScoringEngine,
        region: &RegionId,
        items: Vec<AllocationItem>,
        created_by: &str,
    ) -> CommitReceipt {
        let effectiveness_score = engine.effectiveness(registry, store, region, &items);
        let id = self.next_id();

        let mut receipt_items = Vec::with_capacity(items.len());
        for item in &items {
            let outcome = match registry.consume(&item.resource_id, item.quantity) {
                Ok(remaining) => ItemCommitOutcome::Committed { remaining },
                Err(InventoryError::Insufficient {
                    requested,
                    available,
                    ..
                }) => ItemCommitOutcome::InsufficientInventory {
                    requested,
                    available,
                },
                Err(InventoryError::UnknownResource(_)) => ItemCommitOutcome::UnknownResource,
            };
            receipt_items.push(ItemCommit {
                resource_id: item.resource_id.clone(),
                quantity: item.quantity,
                outcome,
            });
        }

        let allocation = Allocation {
            id: id.clone(),
            region_id: region.clone(),
            created_at: Utc::now(),
            items,
            status: AllocationStatus::Pending,
            effectiveness_score,
            created_by: created_by.to_string(),
        };
        self.allocations.insert(id.clone(), allocation);

        CommitReceipt {
            allocation_id: id,
            effectiveness_score,
            items: receipt_items,
        }
    }

    fn next_id(&mut self) -> AllocationId {
        self.sequence += 1;
        AllocationId(format!("alloc-{:06}", self.sequence))
    }

    pub fn get(&self, id: &AllocationId) -> Option<&Allocation> {
        self.allocations.get(id)
    }

    /// Advance the status of a stored allocation, the only permitted mutation.
    pub fn set_status(
        &mut self,
        id: &AllocationId,
        status: AllocationStatus,
    ) -> Result<(), LedgerError> {
        let allocation = self
            .allocations
            .get_mut(id)
            .ok_or_else(|| LedgerError::UnknownAllocation(id.clone()))?;
        allocation.status = status;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Allocation> {
        self.allocations.values()
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Per-type utilization across all non-completed allocations, alongside
    /// what the registry still holds.
    pub fn statistics(
        &self,
        registry: &ResourceRegistry,
        store: &IncidentStore,
    ) -> AllocationStatistics {
        let mut by_type: BTreeMap<ResourceType, TypeUtilization> = BTreeMap::new();
        let mut open_allocations = 0usize;

        for allocation in self
            .allocations
            .values()
            .filter(|allocation| allocation.status != AllocationStatus::Completed)
        {
            open_allocations += 1;
            for item in &allocation.items {
                if let Some(resource) = registry.get(&item.resource_id) {
                    by_type
                        .entry(resource.kind.clone())
                        .or_default()
                        .allocated += u64::from(item.quantity);
                }
            }
        }

        for resource in registry.iter() {
            by_type.entry(resource.kind.clone()).or_default().available +=
                u64::from(resource.quantity);
        }

        for utilization in by_type.values_mut() {
            utilization.total = utilization.allocated + utilization.available;
        }

        let active_incidents = store
            .iter()
            .filter(|incident| incident.status != IncidentStatus::Resolved)
            .count();

        AllocationStatistics {
            by_type,
            open_allocations,
            active_incidents,
        }
    }
}
