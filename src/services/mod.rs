//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod author_service;

// Re-export for convenience
pub use author_service::*;
