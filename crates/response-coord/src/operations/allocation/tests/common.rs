use crate::operations::incidents::{IncidentReport, IncidentType, Severity};
use crate::operations::resources::{Resource, ResourceType};

pub(super) const REGION: &str = "coastal-north";

pub(super) fn rescue_team(id: &str, quantity: u32, deployment_minutes: u32) -> Resource {
    Resource::new(id, "Swiftwater rescue squad", ResourceType::RescueTeam, quantity)
        .with_location("county staging yard")
        .with_deployment_time(deployment_minutes)
}

pub(super) fn boat(id: &str, quantity: u32, deployment_minutes: u32) -> Resource {
    Resource::new(id, "Flat-bottom boat", ResourceType::Boat, quantity)
        .with_location("north dock")
        .with_deployment_time(deployment_minutes)
}

pub(super) fn water_pump(id: &str, quantity: u32, deployment_minutes: u32) -> Resource {
    Resource::new(id, "Trailer pump", ResourceType::WaterPump, quantity)
        .with_location("public works depot")
        .with_deployment_time(deployment_minutes)
}

pub(super) fn flood(region: &str, severity: Severity, population: u32) -> IncidentReport {
    IncidentReport {
        affected_population: Some(population),
        ..IncidentReport::new(IncidentType::Flood, severity, region, "river bend settlement")
    }
}

pub(super) fn evacuation(region: &str, severity: Severity, population: u32) -> IncidentReport {
    IncidentReport {
        affected_population: Some(population),
        ..IncidentReport::new(IncidentType::Evacuation, severity, region, "hillside ward")
    }
}
