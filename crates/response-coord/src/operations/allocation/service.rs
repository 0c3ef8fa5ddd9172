use super::ledger::{AllocationLedger, AllocationStatistics, CommitReceipt, LedgerError};
use super::optimizer::{self, AllocationRecommendation};
use super::scoring::{ScoringConfig, ScoringEngine};
use crate::operations::allocation::domain::{AllocationId, AllocationItem, AllocationStatus};
use crate::operations::incidents::{
    IncidentId, IncidentReport, IncidentStatus, IncidentStore, RegionId, StoreError,
};
use crate::operations::resources::{
    RegistryError, Resource, ResourceId, ResourceRegistry, ResourceType, ResourceUpdate,
};

/// Facade composing the registry, the incident store, the ledger, and the
/// scoring engine into the in-process surface consumed by presentation
/// layers. Mutating operations take `&mut self`, which is what serializes
/// commits against shared inventory; reads borrow immutably and may run
/// side by side.
#[derive(Debug, Clone, Default)]
pub struct ResponseCoordinator {
    registry: ResourceRegistry,
    incidents: IncidentStore,
    ledger: AllocationLedger,
    engine: ScoringEngine,
}

impl ResponseCoordinator {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            registry: ResourceRegistry::new(),
            incidents: IncidentStore::new(),
            ledger: AllocationLedger::new(),
            engine: ScoringEngine::new(config),
        }
    }

    pub fn register_resource(&mut self, resource: Resource) -> Result<ResourceId, RegistryError> {
        self.registry.register(resource)
    }

    pub fn register_resources(
        &mut self,
        resources: impl IntoIterator<Item = Resource>,
    ) -> usize {
        self.registry.register_many(resources)
    }

    pub fn update_resource(
        &mut self,
        id: &ResourceId,
        update: ResourceUpdate,
    ) -> Result<(), RegistryError> {
        self.registry.update(id, update)
    }

    pub fn available_resources<'a>(
        &'a self,
        kind: Option<&'a ResourceType>,
    ) -> impl Iterator<Item = &'a Resource> + 'a {
        self.registry.available(kind)
    }

    pub fn record_incident(&mut self, report: IncidentReport) -> IncidentId {
        self.incidents.record(report)
    }

    pub fn set_incident_status(
        &mut self,
        id: &IncidentId,
        status: IncidentStatus,
    ) -> Result<(), StoreError> {
        self.incidents.set_status(id, status)
    }

    /// Compute the recommended allocation for a region. Read-only: no
    /// inventory is consumed, and repeated calls against unchanged state
    /// return identical recommendations.
    pub fn recommend_allocation(&self, region: &RegionId) -> AllocationRecommendation {
        optimizer::recommend(&self.registry, &self.incidents, &self.engine, region)
    }

    /// Commit an allocation: store the scored record and decrement inventory
    /// item by item, reporting each outcome in the receipt.
    pub fn commit_allocation(
        &mut self,
        region: &RegionId,
        items: Vec<AllocationItem>,
        created_by: &str,
    ) -> CommitReceipt {
        self.ledger.commit(
            &mut self.registry,
            &self.incidents,
            &self.engine,
            region,
            items,
            created_by,
        )
    }

    pub fn set_allocation_status(
        &mut self,
        id: &AllocationId,
        status: AllocationStatus,
    ) -> Result<(), LedgerError> {
        self.ledger.set_status(id, status)
    }

    pub fn statistics(&self) -> AllocationStatistics {
        self.ledger.statistics(&self.registry, &self.incidents)
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn incidents(&self) -> &IncidentStore {
        &self.incidents
    }

    pub fn ledger(&self) -> &AllocationLedger {
        &self.ledger
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.engine
    }
}
