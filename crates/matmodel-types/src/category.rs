//! Model families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatModelError;

/// The family a material model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelCategory {
    /// Pre-model material card layout.
    Legacy,
    /// Density, hardness, elasticity and hyperelasticity laws.
    Mechanical,
    Fluid,
    Thermal,
    Electromagnetic,
    Architectural,
    Costs,
    /// Appearance models used by the 3D view.
    Rendering,
    /// Shader parameters for external render engines.
    RenderEngine,
    /// Models only used by the test suite.
    Test,
}

impl ModelCategory {
    /// Returns all categories in display order.
    pub fn all() -> &'static [ModelCategory] {
        &[
            Self::Legacy,
            Self::Mechanical,
            Self::Fluid,
            Self::Thermal,
            Self::Electromagnetic,
            Self::Architectural,
            Self::Costs,
            Self::Rendering,
            Self::RenderEngine,
            Self::Test,
        ]
    }

    /// Returns the snake_case name used in config files and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Mechanical => "mechanical",
            Self::Fluid => "fluid",
            Self::Thermal => "thermal",
            Self::Electromagnetic => "electromagnetic",
            Self::Architectural => "architectural",
            Self::Costs => "costs",
            Self::Rendering => "rendering",
            Self::RenderEngine => "render_engine",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelCategory {
    type Err = MatModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .ok_or_else(|| {
                let available: Vec<&str> = Self::all().iter().map(|c| c.name()).collect();
                MatModelError::InvalidConfig(format!(
                    "Unknown category: '{s}'. Available: {}",
                    available.join(", ")
                ))
            })
    }
}
