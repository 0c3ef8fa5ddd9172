//! Pure estimation of per-incident resource needs.
//!
//! The formulas are load-bearing: the scoring engine and the optimizer both
//! assume these exact integer outputs, so any change here shifts every score
//! downstream.

use std::collections::BTreeMap;

use crate::operations::incidents::{Incident, IncidentType};
use crate::operations::resources::ResourceType;

/// Population assumed when a report arrives without an estimate.
pub const DEFAULT_AFFECTED_POPULATION: u32 = 100;

/// Estimate the quantities required to respond to one incident, keyed by
/// resource type. Quantities are ceiling-rounded; the map is ephemeral and
/// never persisted.
pub fn needs_for(incident: &Incident) -> BTreeMap<ResourceType, u32> {
    let scale = u64::from(incident.severity.scale());
    let population = u64::from(
        incident
            .affected_population
            .unwrap_or(DEFAULT_AFFECTED_POPULATION),
    );

    let mut needs = BTreeMap::new();
    match &incident.kind {
        IncidentType::Flood => {
            needs.insert(ResourceType::RescueTeam, ceil_div(scale * population, 1000));
            needs.insert(ResourceType::Boat, ceil_div(scale * population, 2000));
            needs.insert(ResourceType::WaterPump, quantity(scale * 2));
            needs.insert(ResourceType::MedicalKit, ceil_div(scale * population, 500));
            needs.insert(ResourceType::ShelterKit, ceil_div(scale * population, 1000));
        }
        IncidentType::Landslide => {
            needs.insert(ResourceType::RescueTeam, ceil_div(scale * population, 800));
            needs.insert(ResourceType::Excavator, quantity(scale));
            needs.insert(ResourceType::MedicalKit, ceil_div(scale * population, 400));
            needs.insert(ResourceType::ShelterKit, ceil_div(scale * population, 800));
        }
        IncidentType::Evacuation => {
            needs.insert(ResourceType::Transport, ceil_div(scale * population, 500));
            needs.insert(ResourceType::RescueTeam, ceil_div(scale * population, 2000));
            needs.insert(ResourceType::MedicalKit, ceil_div(scale * population, 1000));
            needs.insert(ResourceType::FoodSupply, quantity(scale * population));
        }
        IncidentType::Other(_) => {
            needs.insert(ResourceType::RescueTeam, quantity(scale));
            needs.insert(ResourceType::MedicalKit, ceil_div(scale * population, 1000));
        }
    }
    needs
}

fn ceil_div(numerator: u64, denominator: u64) -> u32 {
    quantity(numerator.div_ceil(denominator))
}

fn quantity(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
