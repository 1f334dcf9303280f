//! # matmodel-registry
//!
//! Fixed registry of material model UUIDs.
//!
//! ## Design
//!
//! Every known model is a [`ModelKind`] variant. The variant carries its
//! scripting attribute name, UUID constant, category and documentation
//! string, all generated from one declaration table so the four can never
//! drift apart. The raw strings are also exported as `const` items in
//! [`uuids`] for callers that need them at compile time.
//!
//! [`ModelUuids`] is the name-keyed lookup table built once per process.
//! It exposes reads only.

pub mod kind;
pub mod registry;

pub use kind::{uuids, ModelKind};
pub use registry::ModelUuids;
