//! # matmodel-io
//!
//! Export contract, binding descriptors and validation for the model
//! registry.
//!
//! Defines the boundary types that external systems (binding generators,
//! CLI, asset pipeline) use to consume the registry.

pub mod bindings;
pub mod config;
pub mod contract;
pub mod validator;

pub use bindings::{BindingDescriptor, PropertyBinding};
pub use config::{ExportConfig, ExportFormat};
pub use contract::{ModelEntry, RegistryExport};
