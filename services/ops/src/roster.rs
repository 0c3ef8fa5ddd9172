use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use response_coord::error::AppError;
use response_coord::operations::resources::{ResourceStatus, ResourceType};
use response_coord::operations::roster::RosterImporter;

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster CSV to validate
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_roster_check(args: RosterArgs) -> Result<(), AppError> {
    let resources = RosterImporter::from_path(&args.csv)?;

    let mut per_type: BTreeMap<ResourceType, (usize, u64)> = BTreeMap::new();
    let mut deployable_units = 0u64;
    for resource in &resources {
        let entry = per_type.entry(resource.kind.clone()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(resource.quantity);
        if resource.status == ResourceStatus::Available {
            deployable_units += u64::from(resource.quantity);
        }
    }

    println!("Roster check: {}", args.csv.display());
    println!(
        "{} record(s), {} deployable unit(s)",
        resources.len(),
        deployable_units
    );
    println!("\nBy type");
    for (kind, (records, units)) in &per_type {
        println!("- {}: {} record(s), {} unit(s)", kind, records, units);
    }

    Ok(())
}
