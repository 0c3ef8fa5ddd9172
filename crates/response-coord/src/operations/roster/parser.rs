use std::collections::BTreeMap;
use std::io::Read;

use chrono::Utc;
use serde::{Deserialize, Deserializer};

use super::normalizer::normalize_type_label;
use super::RosterImportError;
use crate::operations::resources::{Resource, ResourceId, ResourceStatus, ResourceType};

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    quantity: u32,
    #[serde(default)]
    location: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    capacity_per_unit: Option<f64>,
    status: String,
    deployment_time_minutes: u32,
    #[serde(default)]
    capabilities: String,
    #[serde(default)]
    constraints: String,
}

pub(crate) fn parse_roster<R: Read>(reader: R) -> Result<Vec<Resource>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut resources = Vec::new();
    for (index, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let record = index + 1;
        let row = row?;
        resources.push(resource_from_row(row, record)?);
    }
    Ok(resources)
}

fn resource_from_row(row: RosterRow, record: usize) -> Result<Resource, RosterImportError> {
    if row.id.trim().is_empty() {
        return Err(RosterImportError::BlankId { record });
    }

    let status = match row.status.trim().to_ascii_lowercase().as_str() {
        "available" => ResourceStatus::Available,
        "deployed" => ResourceStatus::Deployed,
        "maintenance" => ResourceStatus::Maintenance,
        _ => {
            return Err(RosterImportError::UnknownStatus {
                record,
                value: row.status,
            })
        }
    };

    let kind = ResourceType::from(normalize_type_label(&row.kind));

    let mut capabilities = BTreeMap::new();
    for capability in split_list(&row.capabilities) {
        capabilities.insert(capability, true);
    }

    Ok(Resource {
        id: ResourceId(row.id),
        name: row.name,
        kind,
        quantity: row.quantity,
        location: row.location,
        capacity_per_unit: row.capacity_per_unit,
        status,
        deployment_time_minutes: row.deployment_time_minutes,
        capabilities,
        constraints: split_list(&row.constraints),
        last_updated: Utc::now(),
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| value.trim().parse::<f64>().map_err(serde::de::Error::custom))
        .transpose()
}
