use std::path::PathBuf;

use clap::Args;
use response_coord::config::AppConfig;
use response_coord::error::AppError;
use response_coord::operations::allocation::{
    AllocationRecommendation, CommitReceipt, ItemCommitOutcome, ResponseCoordinator,
};
use response_coord::operations::incidents::{
    IncidentAnalysis, IncidentReport, IncidentType, RegionId, Severity,
};
use response_coord::operations::resources::{Resource, ResourceStatus, ResourceType};
use response_coord::operations::roster::RosterImporter;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed the registry from a roster CSV instead of the built-in sample fleet.
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
    /// Region to plan for. Defaults to the configured region.
    #[arg(long)]
    pub(crate) region: Option<String>,
    /// Stop after printing the recommendation; leave inventory untouched.
    #[arg(long)]
    pub(crate) skip_commit: bool,
    /// Also emit the recommendation as pretty-printed JSON.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        roster_csv,
        region,
        skip_commit,
        json,
    } = args;

    let region = RegionId(region.unwrap_or_else(|| config.operations.default_region.clone()));
    let mut coordinator = ResponseCoordinator::default();

    let registered = match roster_csv {
        Some(path) => {
            let resources = RosterImporter::from_path(&path)?;
            let count = coordinator.register_resources(resources);
            println!("Inventory source: roster import ({})", path.display());
            count
        }
        None => {
            let count = coordinator.register_resources(sample_fleet());
            println!("Inventory source: built-in sample fleet");
            count
        }
    };
    info!(registered, region = %region, "seeded demo inventory");

    for report in sample_incidents(&region) {
        coordinator.record_incident(report);
    }

    println!("Response coordination demo");
    println!(
        "Evaluated {} | region {} | {} resources registered, {} incidents on record",
        chrono::Local::now().format("%Y-%m-%d %H:%M"),
        region,
        registered,
        coordinator.incidents().len()
    );

    println!("\nActive incidents");
    for incident in coordinator.incidents().iter() {
        println!(
            "- {} | {} | severity {} | ~{} people | {}",
            incident.id,
            incident.kind,
            incident.severity.label(),
            incident.affected_population.unwrap_or(0),
            incident.location.description
        );
    }

    let recommendation = coordinator.recommend_allocation(&region);
    render_recommendation(&recommendation, &coordinator);

    if json {
        match serde_json::to_string_pretty(&recommendation) {
            Ok(payload) => println!("\nRecommendation payload:\n{}", payload),
            Err(err) => println!("\nRecommendation payload unavailable: {}", err),
        }
    }

    if skip_commit {
        println!("\nCommit skipped; inventory untouched.");
        return Ok(());
    }

    let receipt =
        coordinator.commit_allocation(&region, recommendation.items, &config.operations.operator);
    render_receipt(&receipt);

    let stats = coordinator.statistics();
    println!("\nPost-commit utilization");
    for (kind, utilization) in &stats.by_type {
        println!(
            "- {}: {} allocated | {} available | {} total",
            kind, utilization.allocated, utilization.available, utilization.total
        );
    }
    println!(
        "{} open allocation(s), {} active incident(s)",
        stats.open_allocations, stats.active_incidents
    );

    Ok(())
}

fn render_recommendation(
    recommendation: &AllocationRecommendation,
    coordinator: &ResponseCoordinator,
) {
    println!("\nRecommended allocation ({} items)", recommendation.items.len());
    for item in &recommendation.items {
        let name = coordinator
            .registry()
            .get(&item.resource_id)
            .map(|resource| resource.name.as_str())
            .unwrap_or("unknown resource");
        println!(
            "- {} x{} ({}) -> {} | ETA {} min | {}",
            item.resource_id,
            item.quantity,
            name,
            item.destination,
            item.estimated_arrival_minutes,
            item.assigned_task
        );
    }

    println!(
        "Scores: effectiveness {} | coverage {} | response time {}",
        recommendation.scores.overall,
        recommendation.scores.coverage,
        recommendation.scores.response_time
    );

    if recommendation.unmet_needs.is_empty() {
        println!("Unmet needs: none");
    } else {
        println!("Unmet needs");
        for (kind, shortfall) in &recommendation.unmet_needs {
            println!("- {}: short {} unit(s)", kind, shortfall);
        }
    }
}

fn render_receipt(receipt: &CommitReceipt) {
    println!(
        "\nCommitted allocation {} (effectiveness {})",
        receipt.allocation_id, receipt.effectiveness_score
    );
    for item in &receipt.items {
        match &item.outcome {
            ItemCommitOutcome::Committed { remaining } => println!(
                "- {} x{}: committed ({} remaining)",
                item.resource_id, item.quantity, remaining
            ),
            ItemCommitOutcome::InsufficientInventory {
                requested,
                available,
            } => println!(
                "- {} x{}: NOT committed (requested {}, only {} available)",
                item.resource_id, item.quantity, requested, available
            ),
            ItemCommitOutcome::UnknownResource => println!(
                "- {} x{}: NOT committed (unknown resource)",
                item.resource_id, item.quantity
            ),
        }
    }
    println!(
        "{}/{} items committed",
        receipt.committed_count(),
        receipt.items.len()
    );
}

/// A plausible county-scale fleet covering every need profile, with one
/// asset down for maintenance so the availability filter is visible in the
/// demo output.
fn sample_fleet() -> Vec<Resource> {
    vec![
        Resource::new("rt-alpha", "Swiftwater rescue squad", ResourceType::RescueTeam, 6)
            .with_location("county staging yard")
            .with_deployment_time(15)
            .with_capability("swiftwater")
            .with_capability("rope"),
        Resource::new("rt-bravo", "Urban search team", ResourceType::RescueTeam, 4)
            .with_location("east fire hall")
            .with_deployment_time(25)
            .with_capability("structural"),
        Resource::new("bt-1", "Flat-bottom boats", ResourceType::Boat, 8)
            .with_location("north dock")
            .with_deployment_time(20)
            .with_capacity_per_unit(6.0)
            .with_constraint("shallow-water"),
        Resource::new("bt-2", "Rigid inflatables", ResourceType::Boat, 4)
            .with_location("harbor shed")
            .with_deployment_time(35)
            .with_capacity_per_unit(8.0),
        Resource::new("bt-3", "Airboat", ResourceType::Boat, 1)
            .with_location("harbor shed")
            .with_deployment_time(30)
            .with_status(ResourceStatus::Maintenance),
        Resource::new("wp-1", "Trailer pumps", ResourceType::WaterPump, 10)
            .with_location("public works depot")
            .with_deployment_time(40)
            .with_capacity_per_unit(500.0),
        Resource::new("mk-1", "Trauma kits", ResourceType::MedicalKit, 60)
            .with_location("central clinic")
            .with_deployment_time(10),
        Resource::new("mk-2", "Field kits", ResourceType::MedicalKit, 40)
            .with_location("warehouse 4")
            .with_deployment_time(30),
        Resource::new("sk-1", "Shelter kits", ResourceType::ShelterKit, 45)
            .with_location("warehouse 4")
            .with_deployment_time(30),
        Resource::new("fs-1", "Ration pallets", ResourceType::FoodSupply, 3000)
            .with_location("regional depot")
            .with_deployment_time(45),
        Resource::new("tr-1", "Evacuation buses", ResourceType::Transport, 12)
            .with_location("transit yard")
            .with_deployment_time(20)
            .with_capacity_per_unit(40.0),
        Resource::new("ex-1", "Excavators", ResourceType::Excavator, 2)
            .with_location("public works depot")
            .with_deployment_time(50)
            .with_constraint("road-access"),
    ]
}

/// Three concurrent emergencies exercising each need profile in one region.
fn sample_incidents(region: &RegionId) -> Vec<IncidentReport> {
    vec![
        IncidentReport {
            affected_population: Some(5000),
            analysis: Some(IncidentAnalysis {
                causes: vec!["levee overtopping after sustained rainfall".to_string()],
                recommendations: vec!["prioritize boat extraction of cut-off blocks".to_string()],
            }),
            ..IncidentReport::new(
                IncidentType::Flood,
                Severity::Critical,
                &region.0,
                "river bend settlement",
            )
        },
        IncidentReport {
            affected_population: Some(900),
            ..IncidentReport::new(
                IncidentType::Landslide,
                Severity::Medium,
                &region.0,
                "terrace road slip",
            )
        },
        IncidentReport {
            affected_population: Some(2600),
            ..IncidentReport::new(
                IncidentType::Evacuation,
                Severity::High,
                &region.0,
                "hillside ward",
            )
        },
    ]
}
