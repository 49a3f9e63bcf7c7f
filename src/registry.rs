use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::error::RenderError;
use crate::strategy::{RenderStrategy, BOOTSTRAP2, BOOTSTRAP3};

/// Name-to-strategy dispatch table.
///
/// Registration happens during setup; afterwards the table is only read.
#[derive(Debug, Clone, Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, RenderStrategy>,
}

impl RendererRegistry {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with `bootstrap2` and `bootstrap3` registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BOOTSTRAP2.name, BOOTSTRAP2);
        registry.register(BOOTSTRAP3.name, BOOTSTRAP3);
        registry
    }

    /// Binds `name` to `strategy`, returning the binding it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        strategy: RenderStrategy,
    ) -> Option<RenderStrategy> {
        let name = name.into();
        debug!(renderer = %name, strategy = strategy.name, "registering renderer");
        self.renderers.insert(name, strategy)
    }

    pub fn resolve(&self, name: &str) -> Result<&RenderStrategy, RenderError> {
        self.renderers
            .get(name)
            .ok_or_else(|| RenderError::UnknownRenderer(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

static DEFAULT_REGISTRY: Lazy<RendererRegistry> = Lazy::new(RendererRegistry::with_defaults);

/// Process-wide table holding the built-in strategies.
pub fn default_registry() -> &'static RendererRegistry {
    &DEFAULT_REGISTRY
}
