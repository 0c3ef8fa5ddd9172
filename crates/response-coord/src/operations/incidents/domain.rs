use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::operations::resources::ResourceId;

/// Identifier wrapper for recorded incidents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IncidentId(pub String);

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for administrative response regions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub String);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of an emergency event. Open like the resource type
/// enumeration: unlisted categories fall back to `Other` and receive the
/// default need profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IncidentType {
    Flood,
    Landslide,
    Evacuation,
    Other(String),
}

impl IncidentType {
    pub fn as_str(&self) -> &str {
        match self {
            IncidentType::Flood => "flood",
            IncidentType::Landslide => "landslide",
            IncidentType::Evacuation => "evacuation",
            IncidentType::Other(label) => label,
        }
    }
}

impl From<String> for IncidentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "flood" => IncidentType::Flood,
            "landslide" => IncidentType::Landslide,
            "evacuation" => IncidentType::Evacuation,
            _ => IncidentType::Other(value),
        }
    }
}

impl From<IncidentType> for String {
    fn from(value: IncidentType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity grading driving the need estimator's scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Integer scale applied to every need formula: low=1, medium=2, high=3,
    /// critical=5.
    pub const fn scale(self) -> u32 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Lifecycle state of an incident. No transition graph is enforced; upstream
/// collaborators advance it at will.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Active,
    Contained,
    Resolved,
}

impl IncidentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            IncidentStatus::Active => "active",
            IncidentStatus::Contained => "contained",
            IncidentStatus::Resolved => "resolved",
        }
    }
}

impl Default for IncidentStatus {
    fn default() -> Self {
        IncidentStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where the incident is unfolding. The description doubles as the
/// destination printed on allocation items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoCoordinates>,
    pub description: String,
}

impl IncidentLocation {
    pub fn described(description: &str) -> Self {
        Self {
            coordinates: None,
            description: description.to_string(),
        }
    }
}

/// Free-text situation assessment attached by analysts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentAnalysis {
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// A recorded emergency event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    #[serde(rename = "type")]
    pub kind: IncidentType,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
    pub location: IncidentLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_population: Option<u32>,
    pub status: IncidentStatus,
    pub region_id: RegionId,
    #[serde(default)]
    pub response_teams: Vec<ResourceId>,
    #[serde(default)]
    pub resources: Vec<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<IncidentAnalysis>,
}

/// Intake shape for [`super::store::IncidentStore::record`]: id and report
/// time are optional and normalized on recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    #[serde(default)]
    pub id: Option<IncidentId>,
    #[serde(rename = "type")]
    pub kind: IncidentType,
    pub severity: Severity,
    #[serde(default)]
    pub reported_at: Option<DateTime<Utc>>,
    pub location: IncidentLocation,
    #[serde(default)]
    pub affected_population: Option<u32>,
    #[serde(default)]
    pub status: IncidentStatus,
    pub region_id: RegionId,
    #[serde(default)]
    pub response_teams: Vec<ResourceId>,
    #[serde(default)]
    pub resources: Vec<ResourceId>,
    #[serde(default)]
    pub analysis: Option<IncidentAnalysis>,
}

impl IncidentReport {
    /// A minimal active report for the given region; callers fill in the rest
    /// through struct update syntax.
    pub fn new(kind: IncidentType, severity: Severity, region: &str, description: &str) -> Self {
        Self {
            id: None,
            kind,
            severity,
            reported_at: None,
            location: IncidentLocation::described(description),
            affected_population: None,
            status: IncidentStatus::Active,
            region_id: RegionId(region.to_string()),
            response_teams: Vec::new(),
            resources: Vec::new(),
            analysis: None,
        }
    }
}
