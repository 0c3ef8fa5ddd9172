//! Operational domains of the coordination core: the asset registry, the
//! incident store, the allocation pipeline built on top of both, and the
//! roster ingestion used to seed the registry.

pub mod allocation;
pub mod incidents;
pub mod resources;
pub mod roster;
