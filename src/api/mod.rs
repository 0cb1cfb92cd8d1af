//! REST API layer: handlers, DTOs, middleware, and route definitions.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
