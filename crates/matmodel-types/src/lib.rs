//! # matmodel-types
//!
//! Shared identifier, category and error types for the material model
//! registry.
//!
//! This crate has zero registry data. It defines the vocabulary that the
//! registry, export and CLI crates share.

pub mod category;
pub mod error;
pub mod ids;

pub use category::ModelCategory;
pub use error::{MatModelError, MatModelResult};
pub use ids::ModelUuid;
