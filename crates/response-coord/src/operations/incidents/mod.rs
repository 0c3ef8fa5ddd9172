pub mod domain;
pub mod store;

pub use domain::{
    GeoCoordinates, Incident, IncidentAnalysis, IncidentId, IncidentLocation, IncidentReport,
    IncidentStatus, IncidentType, RegionId, Severity,
};
pub use store::{IncidentStore, StoreError};
