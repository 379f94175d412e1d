//! Domain layer for campaigns: entities, retrieval policy, presentation

pub mod entities;
pub mod error;
pub mod formatter;
pub mod retrieval;
