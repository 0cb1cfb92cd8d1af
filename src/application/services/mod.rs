//! Application services.

mod issue_service;
mod resolve_service;

pub use issue_service::{IssueRequest, IssueService, IssuedLink};
pub use resolve_service::ResolveService;
