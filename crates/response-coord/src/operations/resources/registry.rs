use std::collections::BTreeMap;

use chrono::Utc;

use super::domain::{Resource, ResourceId, ResourceStatus, ResourceType, ResourceUpdate};

/// Error enumeration for registry mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("resource record is missing an id")]
    MissingId,
    #[error("unknown resource '{0}'")]
    UnknownResource(ResourceId),
}

/// Failure modes of an inventory commitment against a single resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("unknown resource '{0}'")]
    UnknownResource(ResourceId),
    #[error("insufficient inventory for '{id}': requested {requested}, available {available}")]
    Insufficient {
        id: ResourceId,
        requested: u32,
        available: u32,
    },
}

/// Authoritative table of response assets. Owns the only mutable view of
/// resource inventory; iteration order is id order, which keeps repeated
/// reads deterministic.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    resources: BTreeMap<ResourceId, Resource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a record, restamping `last_updated`. Records with
    /// a blank id are rejected and leave the registry untouched.
    pub fn register(&mut self, mut resource: Resource) -> Result<ResourceId, RegistryError> {
        if resource.id.0.trim().is_empty() {
            return Err(RegistryError::MissingId);
        }
        resource.last_updated = Utc::now();
        let id = resource.id.clone();
        self.resources.insert(id.clone(), resource);
        Ok(id)
    }

    /// Register every element of a sequence, skipping invalid records.
    /// Returns the number of successful registrations.
    pub fn register_many(&mut self, resources: impl IntoIterator<Item = Resource>) -> usize {
        resources
            .into_iter()
            .filter_map(|resource| self.register(resource).ok())
            .count()
    }

    /// Merge a partial update into an existing record and restamp it.
    pub fn update(&mut self, id: &ResourceId, update: ResourceUpdate) -> Result<(), RegistryError> {
        let resource = self
            .resources
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownResource(id.clone()))?;

        if let Some(name) = update.name {
            resource.name = name;
        }
        if let Some(kind) = update.kind {
            resource.kind = kind;
        }
        if let Some(quantity) = update.quantity {
            resource.quantity = quantity;
        }
        if let Some(location) = update.location {
            resource.location = location;
        }
        if let Some(capacity) = update.capacity_per_unit {
            resource.capacity_per_unit = Some(capacity);
        }
        if let Some(status) = update.status {
            resource.status = status;
        }
        if let Some(minutes) = update.deployment_time_minutes {
            resource.deployment_time_minutes = minutes;
        }
        if let Some(capabilities) = update.capabilities {
            resource.capabilities = capabilities;
        }
        if let Some(constraints) = update.constraints {
            resource.constraints = constraints;
        }
        resource.last_updated = Utc::now();
        Ok(())
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// All resources with status `available`, optionally narrowed to one type.
    pub fn available<'a>(
        &'a self,
        kind: Option<&'a ResourceType>,
    ) -> impl Iterator<Item = &'a Resource> + 'a {
        self.resources.values().filter(move |resource| {
            resource.status == ResourceStatus::Available
                && kind.map_or(true, |wanted| &resource.kind == wanted)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Decrement inventory for a commitment. The decrement is all-or-nothing:
    /// an insufficient balance leaves the record untouched. A resource drained
    /// to zero flips to `deployed`. Returns the remaining quantity.
    pub fn consume(&mut self, id: &ResourceId, requested: u32) -> Result<u32, InventoryError> {
        let resource = self
            .resources
            .get_mut(id)
            .ok_or_else(|| InventoryError::UnknownResource(id.clone()))?;

        if resource.quantity < requested {
            return Err(InventoryError::Insufficient {
                id: id.clone(),
                requested,
                available: resource.quantity,
            });
        }

        resource.quantity -= requested;
        if resource.quantity == 0 {
            resource.status = ResourceStatus::Deployed;
        }
        resource.last_updated = Utc::now();
        Ok(resource.quantity)
    }
}
