mod config;
pub(crate) mod rules;

pub use config::ScoringConfig;

use serde::{Deserialize, Serialize};

use crate::operations::allocation::domain::AllocationItem;
use crate::operations::allocation::needs::needs_for;
use crate::operations::incidents::{Incident, IncidentStore, RegionId};
use crate::operations::resources::{ResourceRegistry, ResourceType};
use rules::{allocated_by_type, clamp_score, need_totals};
use std::collections::BTreeMap;

/// The three scores attached to every recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overall: u8,
    pub coverage: u8,
    pub response_time: u8,
}

/// Stateless scorer applying a [`ScoringConfig`] to proposed or committed
/// allocations. All outputs are integers in [0, 100].
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Composite effectiveness of an allocation against the region's active
    /// incidents: weighted type coverage, quantity coverage, and worst-case
    /// response time. Empty allocations score 0; allocating into a region
    /// with no active incidents earns the configured idle constant.
    pub fn effectiveness(
        &self,
        registry: &ResourceRegistry,
        store: &IncidentStore,
        region: &RegionId,
        items: &[AllocationItem],
    ) -> u8 {
        if items.is_empty() {
            return 0;
        }
        let incidents: Vec<&Incident> = store.active_in_region(region).collect();
        if incidents.is_empty() {
            return self.config.idle_allocation_score;
        }

        let totals = need_totals(&incidents);
        let allocated = allocated_by_type(registry, items);

        let type_coverage = if totals.combined.is_empty() {
            0.0
        } else {
            let covered_types = totals
                .combined
                .keys()
                .filter(|kind| allocated.contains_key(*kind))
                .count();
            covered_types as f64 / totals.combined.len() as f64
        };

        let total_needed: u64 = totals.combined.values().sum();
        let quantity_coverage = if total_needed == 0 {
            0.0
        } else {
            let met: u64 = totals
                .per_incident
                .iter()
                .flat_map(|needs| {
                    needs.iter().map(|(kind, quantity)| {
                        u64::from(*quantity).min(allocated.get(kind).copied().unwrap_or(0))
                    })
                })
                .sum();
            met as f64 / total_needed as f64
        };

        let max_arrival = items
            .iter()
            .map(|item| item.estimated_arrival_minutes)
            .max()
            .unwrap_or(0);
        let response_factor =
            (1.0 - f64::from(max_arrival) / self.config.response_horizon_minutes).max(0.0);

        clamp_score(
            100.0
                * (self.config.type_coverage_weight * type_coverage
                    + self.config.quantity_coverage_weight * quantity_coverage
                    + self.config.response_time_weight * response_factor),
        )
    }

    /// Share of incidents whose needs are sufficiently met by the allocation.
    /// An incident counts as covered when at least the configured fraction of
    /// its distinct needs is met in full by the cumulative allocation.
    pub fn coverage(
        &self,
        registry: &ResourceRegistry,
        incidents: &[&Incident],
        items: &[AllocationItem],
    ) -> u8 {
        if incidents.is_empty() || items.is_empty() {
            return 0;
        }
        let allocated = allocated_by_type(registry, items);

        let covered = incidents
            .iter()
            .filter(|incident| {
                let needs = needs_for(incident);
                if needs.is_empty() {
                    return true;
                }
                let met = needs
                    .iter()
                    .filter(|(kind, quantity)| {
                        allocated.get(*kind).copied().unwrap_or(0) >= u64::from(**quantity)
                    })
                    .count();
                met as f64 / needs.len() as f64 >= self.config.coverage_need_threshold
            })
            .count();

        clamp_score(100.0 * covered as f64 / incidents.len() as f64)
    }

    /// Average-arrival score on the 0-100 scale, distinct from the worst-case
    /// factor folded into [`Self::effectiveness`].
    pub fn response_time(&self, items: &[AllocationItem]) -> u8 {
        if items.is_empty() {
            return 0;
        }
        let average = items
            .iter()
            .map(|item| f64::from(item.estimated_arrival_minutes))
            .sum::<f64>()
            / items.len() as f64;
        clamp_score((100.0 - average * 100.0 / self.config.response_horizon_minutes).max(0.0))
    }

    /// Per-type shortfall between total need and total allocation. Types with
    /// no gap are omitted.
    pub fn unmet_needs(
        &self,
        registry: &ResourceRegistry,
        incidents: &[&Incident],
        items: &[AllocationItem],
    ) -> BTreeMap<ResourceType, u32> {
        let totals = need_totals(incidents);
        let allocated = allocated_by_type(registry, items);

        totals
            .combined
            .into_iter()
            .filter_map(|(kind, needed)| {
                let have = allocated.get(&kind).copied().unwrap_or(0);
                if needed > have {
                    Some((kind, u32::try_from(needed - have).unwrap_or(u32::MAX)))
                } else {
                    None
                }
            })
            .collect()
    }
}
