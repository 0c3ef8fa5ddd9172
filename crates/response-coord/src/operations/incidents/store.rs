use std::collections::BTreeMap;

use chrono::Utc;

use super::domain::{Incident, IncidentId, IncidentReport, IncidentStatus, RegionId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("unknown incident '{0}'")]
    UnknownIncident(IncidentId),
}

/// Authoritative table of active and historical incidents. Iteration order is
/// id order; generated ids are sequential, so recording order is preserved
/// for reports that arrive without one.
#[derive(Debug, Clone, Default)]
pub struct IncidentStore {
    incidents: BTreeMap<IncidentId, Incident>,
    sequence: u64,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and insert a report: a blank or missing id is replaced by a
    /// generated one, a missing report time defaults to now. Returns the id
    /// under which the incident was stored.
    pub fn record(&mut self, report: IncidentReport) -> IncidentId {
        let id = match report.id.filter(|id| !id.0.trim().is_empty()) {
            Some(id) => id,
            None => self.next_id(),
        };

        let incident = Incident {
            id: id.clone(),
            kind: report.kind,
            severity: report.severity,
            reported_at: report.reported_at.unwrap_or_else(Utc::now),
            location: report.location,
            affected_population: report.affected_population,
            status: report.status,
            region_id: report.region_id,
            response_teams: report.response_teams,
            resources: report.resources,
            analysis: report.analysis,
        };
        self.incidents.insert(id.clone(), incident);
        id
    }

    fn next_id(&mut self) -> IncidentId {
        self.sequence += 1;
        IncidentId(format!("inc-{:06}", self.sequence))
    }

    pub fn get(&self, id: &IncidentId) -> Option<&Incident> {
        self.incidents.get(id)
    }

    /// Incidents that still demand a response in the region: everything not
    /// yet resolved.
    pub fn active_in_region<'a>(
        &'a self,
        region: &'a RegionId,
    ) -> impl Iterator<Item = &'a Incident> + 'a {
        self.incidents.values().filter(move |incident| {
            incident.status != IncidentStatus::Resolved && &incident.region_id == region
        })
    }

    /// Advance an incident's lifecycle state. Any transition is permitted.
    pub fn set_status(&mut self, id: &IncidentId, status: IncidentStatus) -> Result<(), StoreError> {
        let incident = self
            .incidents
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownIncident(id.clone()))?;
        incident.status = status;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.values()
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }
}
