//! Layer model: the six canonical FSD layers and their ordering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::ConfigError;

/// One of the six canonical Feature-Sliced Design layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Reusable infrastructure with no business logic.
    Shared,
    /// Business entities.
    Entities,
    /// User-facing interactions.
    Features,
    /// Composite UI blocks.
    Widgets,
    /// Full pages.
    Pages,
    /// App-wide setup, providers, routing.
    App,
}

impl Layer {
    /// All layers from most foundational to most specialized.
    pub const ALL: [Self; 6] = [
        Self::Shared,
        Self::Entities,
        Self::Features,
        Self::Widgets,
        Self::Pages,
        Self::App,
    ];

    /// Canonical directory name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Entities => "entities",
            Self::Features => "features",
            Self::Widgets => "widgets",
            Self::Pages => "pages",
            Self::App => "app",
        }
    }

    /// Parses an exact directory name. No case folding.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == segment)
    }

    /// Built-in level (shared = 1 … app = 6).
    #[must_use]
    pub fn default_level(self) -> u32 {
        match self {
            Self::Shared => 1,
            Self::Entities => 2,
            Self::Features => 3,
            Self::Widgets => 4,
            Self::Pages => 5,
            Self::App => 6,
        }
    }

    /// Whether modules in this layer must expose an `index` entry.
    #[must_use]
    pub fn requires_public_api(self) -> bool {
        matches!(
            self,
            Self::Shared | Self::Entities | Self::Features | Self::Widgets
        )
    }

    /// Comma-separated list of canonical names, for messages.
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level assignment for layers, with optional configured overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerOrder {
    levels: [u32; 6],
}

impl Default for LayerOrder {
    fn default() -> Self {
        Self {
            levels: Layer::ALL.map(Layer::default_level),
        }
    }
}

impl LayerOrder {
    /// Builds an ordering from `name -> level` overrides merged over the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLayer`] if an override names a layer
    /// that is not canonical.
    pub fn with_overrides(overrides: &BTreeMap<String, u32>) -> Result<Self, ConfigError> {
        let mut order = Self::default();
        for (name, level) in overrides {
            let layer = Layer::from_segment(name).ok_or_else(|| ConfigError::UnknownLayer {
                name: name.clone(),
            })?;
            order.levels[layer as usize] = *level;
        }
        Ok(order)
    }

    /// Level of a layer.
    #[must_use]
    pub fn level(&self, layer: Layer) -> u32 {
        self.levels[layer as usize]
    }
}
