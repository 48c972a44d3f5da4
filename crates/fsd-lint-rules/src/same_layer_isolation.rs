//! Rule forbidding imports between sibling slices of one layer.
//!
//! `features/user-profile` may not import `features/product-list`. Shared
//! code belongs in a lower layer. The isolated layers default to
//! `features`, `widgets` and `pages` and can be set in configuration:
//!
//! ```toml
//! [rules.same-layer-isolation]
//! layers = ["features", "widgets"]
//! ```

use fsd_lint_core::{Finding, ImportContext, ImportRule, Layer, RuleConfig, Severity};
use tracing::warn;

/// Rule code for same-layer-isolation.
pub const CODE: &str = "FSD002";

/// Rule name for same-layer-isolation.
pub const NAME: &str = "same-layer-isolation";

/// Forbids cross-slice imports within an isolated layer.
#[derive(Debug, Clone)]
pub struct SameLayerIsolation {
    /// Severity level.
    pub severity: Severity,
    /// Layers whose slices must not import one another.
    pub layers: Vec<Layer>,
}

impl Default for SameLayerIsolation {
    fn default() -> Self {
        Self::new()
    }
}

impl SameLayerIsolation {
    /// Creates a new rule isolating `features`, `widgets` and `pages`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            layers: vec![Layer::Features, Layer::Widgets, Layer::Pages],
        }
    }

    /// Creates the rule from its `[rules.same-layer-isolation]` table.
    ///
    /// Unknown layer names are logged and ignored.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let mut rule = Self::new();
        if let Some(names) = config.and_then(|c| c.get_str_array("layers")) {
            rule.layers = names
                .iter()
                .filter_map(|name| {
                    let layer = Layer::from_segment(name);
                    if layer.is_none() {
                        warn!("{NAME}: ignoring unknown layer '{name}'");
                    }
                    layer
                })
                .collect();
        }
        rule
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the isolated layers.
    #[must_use]
    pub fn layers(mut self, layers: impl IntoIterator<Item = Layer>) -> Self {
        self.layers = layers.into_iter().collect();
        self
    }
}

impl ImportRule for SameLayerIsolation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids imports between sibling slices of the same layer"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_import(&self, ctx: &ImportContext<'_>) -> Vec<Finding> {
        let current = ctx.current();
        let imported = ctx.imported;

        let Some(layer) = current.layer else {
            return vec![];
        };
        if imported.layer != Some(layer) || !self.layers.contains(&layer) {
            return vec![];
        }
        if current.slice == imported.slice {
            return vec![];
        }

        let from = qualified(layer, current.slice.as_deref());
        let to = qualified(layer, imported.slice.as_deref());
        vec![Finding::new(
            CODE,
            NAME,
            self.severity,
            ctx.import.location.clone(),
            format!("Slice '{from}' must not import sibling slice '{to}'"),
        )]
    }
}

/// `layer/slice`, or the bare layer when the path stops at it.
fn qualified(layer: Layer, slice: Option<&str>) -> String {
    match slice {
        Some(slice) => format!("{layer}/{slice}"),
        None => layer.to_string(),
    }
}
