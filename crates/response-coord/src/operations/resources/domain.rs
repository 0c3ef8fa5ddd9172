use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered resources.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub String);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of a deployable asset. The set is open: roster feeds may
/// carry categories this crate has no special handling for, and those survive
/// as `Other` rather than being rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    RescueTeam,
    Boat,
    WaterPump,
    MedicalKit,
    ShelterKit,
    FoodSupply,
    Transport,
    Excavator,
    Other(String),
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::RescueTeam => "rescue_team",
            ResourceType::Boat => "boat",
            ResourceType::WaterPump => "water_pump",
            ResourceType::MedicalKit => "medical_kit",
            ResourceType::ShelterKit => "shelter_kit",
            ResourceType::FoodSupply => "food_supply",
            ResourceType::Transport => "transport",
            ResourceType::Excavator => "excavator",
            ResourceType::Other(label) => label,
        }
    }
}

impl From<String> for ResourceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "rescue_team" => ResourceType::RescueTeam,
            "boat" => ResourceType::Boat,
            "water_pump" => ResourceType::WaterPump,
            "medical_kit" => ResourceType::MedicalKit,
            "shelter_kit" => ResourceType::ShelterKit,
            "food_supply" => ResourceType::FoodSupply,
            "transport" => ResourceType::Transport,
            "excavator" => ResourceType::Excavator,
            _ => ResourceType::Other(value),
        }
    }
}

impl From<ResourceType> for String {
    fn from(value: ResourceType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment state of an asset. Unknown states are rejected at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Available,
    Deployed,
    Maintenance,
}

impl ResourceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ResourceStatus::Available => "available",
            ResourceStatus::Deployed => "deployed",
            ResourceStatus::Maintenance => "maintenance",
        }
    }
}

/// A deployable response asset tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub quantity: u32,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_per_unit: Option<f64>,
    pub status: ResourceStatus,
    pub deployment_time_minutes: u32,
    #[serde(default)]
    pub capabilities: BTreeMap<String, bool>,
    #[serde(default)]
    pub constraints: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl Resource {
    /// A fresh, available asset with no location or capability detail yet.
    pub fn new(id: &str, name: &str, kind: ResourceType, quantity: u32) -> Self {
        Self {
            id: ResourceId(id.to_string()),
            name: name.to_string(),
            kind,
            quantity,
            location: String::new(),
            capacity_per_unit: None,
            status: ResourceStatus::Available,
            deployment_time_minutes: 0,
            capabilities: BTreeMap::new(),
            constraints: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_status(mut self, status: ResourceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_deployment_time(mut self, minutes: u32) -> Self {
        self.deployment_time_minutes = minutes;
        self
    }

    pub fn with_capacity_per_unit(mut self, capacity: f64) -> Self {
        self.capacity_per_unit = Some(capacity);
        self
    }

    pub fn with_capability(mut self, capability: &str) -> Self {
        self.capabilities.insert(capability.to_string(), true);
        self
    }

    pub fn with_constraint(mut self, constraint: &str) -> Self {
        self.constraints.push(constraint.to_string());
        self
    }
}

/// Partial update merged into an existing registry record. Absent fields are
/// left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ResourceType>,
    pub quantity: Option<u32>,
    pub location: Option<String>,
    pub capacity_per_unit: Option<f64>,
    pub status: Option<ResourceStatus>,
    pub deployment_time_minutes: Option<u32>,
    pub capabilities: Option<BTreeMap<String, bool>>,
    pub constraints: Option<Vec<String>>,
}
