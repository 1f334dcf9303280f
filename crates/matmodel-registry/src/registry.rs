//! Name-keyed lookup table over the declared models.
//!
//! The table is built once from [`ModelKind::ALL`] and never mutated.
//! All accessors take `&self`, so the process-wide instance returned by
//! [`ModelUuids::global`] can be read from any thread without locking.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use matmodel_types::{MatModelError, MatModelResult, ModelCategory, ModelUuid};

use crate::kind::ModelKind;

static GLOBAL: Lazy<ModelUuids> = Lazy::new(ModelUuids::builtin);

/// Read-only registry of material model UUIDs.
///
/// Models are looked up by scripting name (e.g. `"Density"`,
/// `"RenderCycles"`). There is no way to add, replace or remove entries.
#[derive(Debug, Clone)]
pub struct ModelUuids {
    by_name: HashMap<&'static str, ModelKind>,
    by_uuid: HashMap<ModelUuid, ModelKind>,
}

impl ModelUuids {
    /// Returns the process-wide registry, building it on first use.
    pub fn global() -> &'static ModelUuids {
        &GLOBAL
    }

    /// Builds a fresh registry from the declared models.
    pub fn builtin() -> Self {
        let mut by_name = HashMap::with_capacity(ModelKind::ALL.len());
        let mut by_uuid = HashMap::with_capacity(ModelKind::ALL.len());

        for &kind in ModelKind::ALL {
            let prev = by_name.insert(kind.name(), kind);
            debug_assert!(prev.is_none(), "duplicate model name {}", kind.name());

            match kind.uuid() {
                Ok(id) => {
                    let prev = by_uuid.insert(id, kind);
                    debug_assert!(prev.is_none(), "duplicate model UUID {}", kind.uuid_str());
                }
                Err(e) => tracing::warn!(model = kind.name(), error = %e, "unparseable model UUID"),
            }
        }

        tracing::debug!(models = by_name.len(), "model registry built");
        Self { by_name, by_uuid }
    }

    /// Looks up the UUID string for a model name.
    ///
    /// Fails with [`MatModelError::UnknownModel`] if `name` is not declared.
    pub fn get(&self, name: &str) -> MatModelResult<&'static str> {
        self.kind(name).map(ModelKind::uuid_str)
    }

    /// Looks up the parsed UUID for a model name.
    pub fn get_uuid(&self, name: &str) -> MatModelResult<ModelUuid> {
        self.kind(name)?.uuid()
    }

    /// Looks up the [`ModelKind`] for a model name.
    pub fn kind(&self, name: &str) -> MatModelResult<ModelKind> {
        self.by_name.get(name).copied().ok_or_else(|| {
            tracing::debug!(name, "unknown model name");
            MatModelError::unknown(name)
        })
    }

    /// Looks up the documentation string for a model name.
    pub fn doc(&self, name: &str) -> MatModelResult<&'static str> {
        self.kind(name).map(ModelKind::doc)
    }

    /// Returns true if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Reverse lookup: which model does this UUID identify?
    ///
    /// Any spelling that parses as a UUID is accepted. Returns `None` for
    /// unknown or malformed input.
    pub fn find_by_uuid(&self, uuid: &str) -> Option<ModelKind> {
        let id = ModelUuid::parse(uuid).ok()?;
        self.by_uuid.get(&id).copied()
    }

    /// Declared names in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        ModelKind::ALL.iter().map(|k| k.name()).collect()
    }

    /// `(kind, uuid)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ModelKind, &'static str)> + '_ {
        ModelKind::ALL.iter().map(|&k| (k, k.uuid_str()))
    }

    /// Models of one category, in declaration order.
    pub fn by_category(&self, category: ModelCategory) -> Vec<ModelKind> {
        self.iter()
            .map(|(k, _)| k)
            .filter(|k| k.category() == category)
            .collect()
    }

    /// Names that look like a mistyped `name`.
    ///
    /// Matches case-insensitively on substring.
    pub fn suggestions(&self, name: &str) -> Vec<&'static str> {
        let needle = name.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.names()
            .into_iter()
            .filter(|n| n.to_ascii_lowercase().contains(&needle))
            .collect()
    }

    /// Returns the number of declared models.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if no models are declared.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for ModelUuids {
    fn default() -> Self {
        Self::builtin()
    }
}
