//! Shared types and models for Bloom & Grow
//!
//! This crate contains the domain model shared between the core services
//! and any presentation shell built on top of them.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
