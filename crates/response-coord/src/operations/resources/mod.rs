pub mod domain;
pub mod registry;

pub use domain::{Resource, ResourceId, ResourceStatus, ResourceType, ResourceUpdate};
pub use registry::{InventoryError, RegistryError, ResourceRegistry};
