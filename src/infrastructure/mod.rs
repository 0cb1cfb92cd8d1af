//! Infrastructure layer: database and analytics integrations.

pub mod analytics;
pub mod persistence;
