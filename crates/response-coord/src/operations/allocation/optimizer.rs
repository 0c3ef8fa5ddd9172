use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::AllocationItem;
use super::needs::needs_for;
use super::scoring::{ScoreBreakdown, ScoringEngine};
use crate::operations::incidents::{Incident, IncidentStore, RegionId};
use crate::operations::resources::{Resource, ResourceRegistry, ResourceType};

/// A scored, read-only allocation proposal for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecommendation {
    pub region_id: RegionId,
    pub items: Vec<AllocationItem>,
    pub scores: ScoreBreakdown,
    pub unmet_needs: BTreeMap<ResourceType, u32>,
    pub generated_at: DateTime<Utc>,
}

impl AllocationRecommendation {
    /// Total units proposed across all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

/// Build the recommended allocation for a region. Reads the registry and
/// store, mutates neither: calling this twice against unchanged state yields
/// identical recommendations (timestamps aside).
///
/// Incident passes are independent. Each incident's needs are served from the
/// full available inventory, cheapest deployment time first; the commitment
/// step is where contention between incidents becomes visible.
pub(crate) fn recommend(
    registry: &ResourceRegistry,
    store: &IncidentStore,
    engine: &ScoringEngine,
    region: &RegionId,
) -> AllocationRecommendation {
    let incidents: Vec<&Incident> = store.active_in_region(region).collect();

    let mut items = Vec::new();
    for incident in &incidents {
        let needs = needs_for(incident);
        for (kind, needed) in &needs {
            let mut remaining = *needed;
            if remaining == 0 {
                continue;
            }

            let mut candidates: Vec<&Resource> = registry.available(Some(kind)).collect();
            candidates.sort_by_key(|resource| resource.deployment_time_minutes);

            for candidate in candidates {
                if remaining == 0 {
                    break;
                }
                let granted = candidate.quantity.min(remaining);
                if granted == 0 {
                    continue;
                }
                items.push(AllocationItem {
                    resource_id: candidate.id.clone(),
                    quantity: granted,
                    destination: incident.location.description.clone(),
                    assigned_task: format!("Respond to {} incident", incident.kind),
                    estimated_arrival_minutes: candidate.deployment_time_minutes,
                });
                remaining -= granted;
            }
        }
    }

    let scores = ScoreBreakdown {
        overall: engine.effectiveness(registry, store, region, &items),
        coverage: engine.coverage(registry, &incidents, &items),
        response_time: engine.response_time(&items),
    };
    let unmet_needs = engine.unmet_needs(registry, &incidents, &items);

    AllocationRecommendation {
        region_id: region.clone(),
        items,
        scores,
        unmet_needs,
        generated_at: Utc::now(),
    }
}
