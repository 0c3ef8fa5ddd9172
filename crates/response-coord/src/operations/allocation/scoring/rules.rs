use std::collections::BTreeMap;

use crate::operations::allocation::domain::AllocationItem;
use crate::operations::allocation::needs::needs_for;
use crate::operations::incidents::Incident;
use crate::operations::resources::{ResourceRegistry, ResourceType};

/// Per-incident need maps alongside the combined per-type totals.
pub(crate) struct NeedTotals {
    pub per_incident: Vec<BTreeMap<ResourceType, u32>>,
    pub combined: BTreeMap<ResourceType, u64>,
}

pub(crate) fn need_totals(incidents: &[&Incident]) -> NeedTotals {
    let per_incident: Vec<BTreeMap<ResourceType, u32>> = incidents
        .iter()
        .map(|incident| needs_for(incident))
        .collect();

    let mut combined: BTreeMap<ResourceType, u64> = BTreeMap::new();
    for needs in &per_incident {
        for (kind, quantity) in needs {
            *combined.entry(kind.clone()).or_insert(0) += u64::from(*quantity);
        }
    }

    NeedTotals {
        per_incident,
        combined,
    }
}

/// Total allocated quantity per resource type, with each item resolved to its
/// type through the registry. Items naming unknown resources resolve to
/// nothing and are ignored.
pub(crate) fn allocated_by_type(
    registry: &ResourceRegistry,
    items: &[AllocationItem],
) -> BTreeMap<ResourceType, u64> {
    let mut totals: BTreeMap<ResourceType, u64> = BTreeMap::new();
    for item in items {
        if let Some(resource) = registry.get(&item.resource_id) {
            *totals.entry(resource.kind.clone()).or_insert(0) += u64::from(item.quantity);
        }
    }
    totals
}

/// Round to the nearest integer and pin to the 0-100 band every score lives in.
pub(crate) fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
