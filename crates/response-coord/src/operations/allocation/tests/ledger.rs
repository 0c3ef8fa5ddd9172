use super::common::*;
use crate::operations::allocation::domain::{AllocationId, AllocationItem, AllocationStatus};
use crate::operations::allocation::ledger::{AllocationLedger, ItemCommitOutcome, LedgerError};
use crate::operations::allocation::scoring::ScoringEngine;
use crate::operations::incidents::{IncidentStore, RegionId, Severity};
use crate::operations::resources::{ResourceId, ResourceRegistry, ResourceStatus, ResourceType};

fn region() -> RegionId {
    RegionId(REGION.to_string())
}

fn item(resource_id: &str, quantity: u32) -> AllocationItem {
    AllocationItem {
        resource_id: ResourceId(resource_id.to_string()),
        quantity,
        destination: "river bend settlement".to_string(),
        assigned_task: "Respond to flood incident".to_string(),
        estimated_arrival_minutes: 15,
    }
}

#[test]
fn commitments_conserve_inventory_and_never_go_negative() {
    let mut registry = ResourceRegistry::new();
    registry.register(rescue_team("rt-1", 10, 15)).expect("registers");
    let store = IncidentStore::new();
    let engine = ScoringEngine::default();
    let mut ledger = AllocationLedger::new();

    let first = ledger.commit(&mut registry, &store, &engine, &region(), vec![item("rt-1", 4)], "ops");
    assert_eq!(
        first.items[0].outcome,
        ItemCommitOutcome::Committed { remaining: 6 }
    );

    let second = ledger.commit(&mut registry, &store, &engine, &region(), vec![item("rt-1", 7)], "ops");
    assert_eq!(
        second.items[0].outcome,
        ItemCommitOutcome::InsufficientInventory {
            requested: 7,
            available: 6,
        }
    );
    assert!(!second.fully_committed());

    let third = ledger.commit(&mut registry, &store, &engine, &region(), vec![item("rt-1", 6)], "ops");
    assert_eq!(
        third.items[0].outcome,
        ItemCommitOutcome::Committed { remaining: 0 }
    );

    // 10 initial minus the 4 + 6 that actually committed; the refused 7 left
    // no trace on the balance.
    let rescue = registry.get(&ResourceId("rt-1".to_string())).expect("present");
    assert_eq!(rescue.quantity, 0);
    assert_eq!(rescue.status, ResourceStatus::Deployed);
}

#[test]
fn unknown_resources_are_reported_not_dropped() {
    let mut registry = ResourceRegistry::new();
    let store = IncidentStore::new();
    let engine = ScoringEngine::default();
    let mut ledger = AllocationLedger::new();

    let receipt = ledger.commit(
        &mut registry,
        &store,
        &engine,
        &region(),
        vec![item("ghost", 2)],
        "ops",
    );
    assert_eq!(receipt.items[0].outcome, ItemCommitOutcome::UnknownResource);
    assert_eq!(receipt.committed_count(), 0);

    // The allocation record itself is still stored.
    let stored = ledger.get(&receipt.allocation_id).expect("record stored");
    assert_eq!(stored.items.len(), 1);
}

#[test]
fn commit_stores_a_pending_scored_record() {
    let mut registry = ResourceRegistry::new();
    registry.register(rescue_team("rt-1", 10, 15)).expect("registers");
    let mut store = IncidentStore::new();
    store.record(flood(REGION, Severity::Critical, 5000));
    let engine = ScoringEngine::default();
    let mut ledger = AllocationLedger::new();

    let receipt = ledger.commit(
        &mut registry,
        &store,
        &engine,
        &region(),
        vec![item("rt-1", 10)],
        "duty-officer",
    );
    assert_eq!(receipt.allocation_id, AllocationId("alloc-000001".to_string()));

    let stored = ledger.get(&receipt.allocation_id).expect("record stored");
    assert_eq!(stored.status, AllocationStatus::Pending);
    assert_eq!(stored.created_by, "duty-officer");
    assert_eq!(stored.effectiveness_score, receipt.effectiveness_score);
    assert!(stored.effectiveness_score <= 100);
}

#[test]
fn set_status_is_the_only_mutation_and_validates_the_id() {
    let mut registry = ResourceRegistry::new();
    registry.register(rescue_team("rt-1", 10, 15)).expect("registers");
    let store = IncidentStore::new();
    let engine = ScoringEngine::default();
    let mut ledger = AllocationLedger::new();

    let receipt = ledger.commit(&mut registry, &store, &engine, &region(), vec![item("rt-1", 2)], "ops");
    ledger
        .set_status(&receipt.allocation_id, AllocationStatus::InProgress)
        .expect("known id");
    assert_eq!(
        ledger.get(&receipt.allocation_id).expect("stored").status,
        AllocationStatus::InProgress
    );

    let err = ledger
        .set_status(&AllocationId("alloc-999999".to_string()), AllocationStatus::Completed)
        .expect_err("unknown id");
    assert_eq!(
        err,
        LedgerError::UnknownAllocation(AllocationId("alloc-999999".to_string()))
    );
}

#[test]
fn statistics_split_allocated_and_available_per_type() {
    let mut registry = ResourceRegistry::new();
    registry.register(rescue_team("rt-1", 10, 15)).expect("registers");
    registry.register(boat("bt-1", 5, 25)).expect("registers");
    let mut store = IncidentStore::new();
    store.record(flood(REGION, Severity::High, 2000));
    let engine = ScoringEngine::default();
    let mut ledger = AllocationLedger::new();

    let receipt = ledger.commit(&mut registry, &store, &engine, &region(), vec![item("rt-1", 4)], "ops");

    let stats = ledger.statistics(&registry, &store);
    let rescue = stats
        .by_type
        .get(&ResourceType::RescueTeam)
        .expect("rescue tracked");
    assert_eq!(rescue.allocated, 4);
    assert_eq!(rescue.available, 6);
    assert_eq!(rescue.total, 10);

    let boats = stats
        .by_type
        .get(&ResourceType::Boat)
        .expect("boat tracked");
    assert_eq!(boats.allocated, 0);
    assert_eq!(boats.available, 5);

    assert_eq!(stats.open_allocations, 1);
    assert_eq!(stats.active_incidents, 1);

    // Completed allocations fall out of the in-flight totals.
    ledger
        .set_status(&receipt.allocation_id, AllocationStatus::Completed)
        .expect("known id");
    let stats = ledger.statistics(&registry, &store);
    let rescue = stats
        .by_type
        .get(&ResourceType::RescueTeam)
        .expect("rescue tracked");
    assert_eq!(rescue.allocated, 0);
    assert_eq!(rescue.total, 6);
    assert_eq!(stats.open_allocations, 0);
}
