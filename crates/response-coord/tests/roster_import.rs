//! Specifications for roster CSV ingestion and its hand-off to the registry.

use response_coord::operations::allocation::ResponseCoordinator;
use response_coord::operations::resources::{ResourceId, ResourceStatus, ResourceType};
use response_coord::operations::roster::{RosterImportError, RosterImporter};

const ROSTER: &str = "\
id,name,type,quantity,location,capacity_per_unit,status,deployment_time_minutes,capabilities,constraints
rt-1,Swiftwater rescue squad,Rescue Team,4,county staging yard,,available,15,swiftwater;rope,flood
bt-1,Flat-bottom boat,boat,6,north dock,8,available,25,,shallow-water
wp-9,Trailer pump,water-pump,3,public works depot,500,maintenance,40,,
dr-1,Scout drone,Recon Drone,2,airfield,,available,5,thermal,
";

#[test]
fn well_formed_roster_rows_become_resources() {
    let resources = RosterImporter::from_reader(ROSTER.as_bytes()).expect("roster parses");
    assert_eq!(resources.len(), 4);

    let squad = &resources[0];
    assert_eq!(squad.id, ResourceId("rt-1".to_string()));
    assert_eq!(squad.kind, ResourceType::RescueTeam);
    assert_eq!(squad.quantity, 4);
    assert_eq!(squad.capacity_per_unit, None);
    assert_eq!(squad.deployment_time_minutes, 15);
    assert_eq!(squad.capabilities.get("swiftwater"), Some(&true));
    assert_eq!(squad.capabilities.get("rope"), Some(&true));
    assert_eq!(squad.constraints, vec!["flood".to_string()]);

    let boat = &resources[1];
    assert_eq!(boat.kind, ResourceType::Boat);
    assert_eq!(boat.capacity_per_unit, Some(8.0));

    let pump = &resources[2];
    assert_eq!(pump.kind, ResourceType::WaterPump);
    assert_eq!(pump.status, ResourceStatus::Maintenance);

    // Unlisted categories survive classification instead of failing the row.
    let drone = &resources[3];
    assert_eq!(drone.kind, ResourceType::Other("recon_drone".to_string()));
}

#[test]
fn imported_roster_feeds_the_registry_wholesale() {
    let resources = RosterImporter::from_reader(ROSTER.as_bytes()).expect("roster parses");
    let mut coordinator = ResponseCoordinator::default();
    assert_eq!(coordinator.register_resources(resources), 4);

    // The pump is in maintenance, so only three records are deployable.
    assert_eq!(coordinator.available_resources(None).count(), 3);
    assert_eq!(
        coordinator
            .available_resources(Some(&ResourceType::Boat))
            .count(),
        1
    );
}

#[test]
fn unknown_status_fails_with_the_record_number() {
    let roster = "\
id,name,type,quantity,location,capacity_per_unit,status,deployment_time_minutes,capabilities,constraints
rt-1,Squad,rescue_team,4,yard,,available,15,,
bt-1,Boat,boat,6,dock,,standby,25,,
";
    let err = RosterImporter::from_reader(roster.as_bytes()).expect_err("bad status");
    match err {
        RosterImportError::UnknownStatus { record, value } => {
            assert_eq!(record, 2);
            assert_eq!(value, "standby");
        }
        other => panic!("expected unknown status error, got {other:?}"),
    }
}

#[test]
fn blank_id_fails_with_the_record_number() {
    let roster = "\
id,name,type,quantity,location,capacity_per_unit,status,deployment_time_minutes,capabilities,constraints
,Squad,rescue_team,4,yard,,available,15,,
";
    let err = RosterImporter::from_reader(roster.as_bytes()).expect_err("blank id");
    assert!(matches!(err, RosterImportError::BlankId { record: 1 }));
}

#[test]
fn missing_file_surfaces_an_io_error_with_the_path() {
    let err = RosterImporter::from_path("/nonexistent/roster.csv").expect_err("missing file");
    match err {
        RosterImportError::Io { path, .. } => {
            assert!(path.ends_with("roster.csv"));
        }
        other => panic!("expected io error, got {other:?}"),
    }
}
