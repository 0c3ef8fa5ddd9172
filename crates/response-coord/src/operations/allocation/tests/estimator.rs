use super::common::*;
use crate::operations::allocation::needs::needs_for;
use crate::operations::incidents::{
    Incident, IncidentReport, IncidentStore, IncidentType, Severity,
};
use crate::operations::resources::ResourceType;

fn recorded(report: IncidentReport) -> Incident {
    let mut store = IncidentStore::new();
    let id = store.record(report);
    store.get(&id).cloned().expect("incident stored")
}

#[test]
fn flood_needs_match_reference_profile() {
    let incident = recorded(flood(REGION, Severity::High, 2000));
    let needs = needs_for(&incident);

    assert_eq!(needs.get(&ResourceType::RescueTeam), Some(&6));
    assert_eq!(needs.get(&ResourceType::Boat), Some(&3));
    assert_eq!(needs.get(&ResourceType::WaterPump), Some(&6));
    assert_eq!(needs.get(&ResourceType::MedicalKit), Some(&12));
    assert_eq!(needs.get(&ResourceType::ShelterKit), Some(&6));
    assert_eq!(needs.len(), 5);
}

#[test]
fn landslide_needs_are_ceiling_rounded() {
    let incident = recorded(IncidentReport {
        affected_population: Some(900),
        ..IncidentReport::new(IncidentType::Landslide, Severity::Medium, REGION, "slip zone")
    });
    let needs = needs_for(&incident);

    // 2 * 900 / 800 = 2.25 and 2 * 900 / 400 = 4.5 both round up.
    assert_eq!(needs.get(&ResourceType::RescueTeam), Some(&3));
    assert_eq!(needs.get(&ResourceType::Excavator), Some(&2));
    assert_eq!(needs.get(&ResourceType::MedicalKit), Some(&5));
    assert_eq!(needs.get(&ResourceType::ShelterKit), Some(&3));
    assert_eq!(needs.len(), 4);
}

#[test]
fn evacuation_needs_feed_everyone() {
    let incident = recorded(evacuation(REGION, Severity::Critical, 2600));
    let needs = needs_for(&incident);

    assert_eq!(needs.get(&ResourceType::Transport), Some(&26));
    assert_eq!(needs.get(&ResourceType::RescueTeam), Some(&7));
    assert_eq!(needs.get(&ResourceType::MedicalKit), Some(&13));
    assert_eq!(needs.get(&ResourceType::FoodSupply), Some(&13_000));
    assert_eq!(needs.len(), 4);
}

#[test]
fn unlisted_incident_types_get_the_default_profile() {
    let incident = recorded(IncidentReport::new(
        IncidentType::Other("wildfire".to_string()),
        Severity::Low,
        REGION,
        "ridge line",
    ));
    let needs = needs_for(&incident);

    assert_eq!(needs.get(&ResourceType::RescueTeam), Some(&1));
    assert_eq!(needs.get(&ResourceType::MedicalKit), Some(&1));
    assert_eq!(needs.len(), 2);
}

#[test]
fn missing_population_defaults_to_one_hundred() {
    let incident = recorded(IncidentReport::new(
        IncidentType::Flood,
        Severity::Low,
        REGION,
        "low ford",
    ));
    let needs = needs_for(&incident);

    assert_eq!(needs.get(&ResourceType::RescueTeam), Some(&1));
    assert_eq!(needs.get(&ResourceType::Boat), Some(&1));
    assert_eq!(needs.get(&ResourceType::WaterPump), Some(&2));
    assert_eq!(needs.get(&ResourceType::MedicalKit), Some(&1));
    assert_eq!(needs.get(&ResourceType::ShelterKit), Some(&1));
}

#[test]
fn severity_scale_is_nonlinear_at_the_top() {
    let low = recorded(flood(REGION, Severity::Low, 1000));
    let critical = recorded(flood(REGION, Severity::Critical, 1000));

    assert_eq!(needs_for(&low).get(&ResourceType::RescueTeam), Some(&1));
    assert_eq!(needs_for(&critical).get(&ResourceType::RescueTeam), Some(&5));
}
