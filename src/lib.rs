//! Taskboard: domain core for a small project and task tracking backend.
//!
//! Projects contain tasks; tasks move through a guarded status workflow and
//! expose a priority score computed by a pluggable strategy.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: entities, the status machine, and priority strategies, with
//!   no infrastructure dependencies
//! - **Ports**: repository traits the services persist through
//! - **Adapters**: concrete repository implementations
//! - **Services**: orchestration used by transport adapters, including error
//!   classification
//!
//! # Modules
//!
//! - [`domain`]: [`domain::Project`], [`domain::Task`] and their invariants
//! - [`ports`]: repository contracts
//! - [`adapters`]: in-memory repositories
//! - [`services`]: project and task services

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
