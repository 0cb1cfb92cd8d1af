//! Shared utilities for URL sanitization, alias handling, and code generation.

pub mod alias;
pub mod code_generator;
pub mod url_sanitizer;
