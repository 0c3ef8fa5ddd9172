//! Coordination core for emergency-response operations.
//!
//! The crate keeps an in-memory picture of deployable response assets and
//! active incidents, estimates per-incident resource needs, and produces
//! scored allocation recommendations that operators can commit against the
//! live inventory. Everything is held in process; persistence and transport
//! belong to the surrounding services.

pub mod config;
pub mod error;
pub mod operations;
pub mod telemetry;
