//! Application layer: issuance/resolution services and the event bus.

pub mod events;
pub mod services;
