use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::renderer::traits::LinkResolver;

/// Uses every target verbatim as the link destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl LinkResolver for PassThrough {
    fn resolve(&self, target: &str) -> String {
        target.to_string()
    }
}

/// Maps symbolic route names to URLs; unknown targets pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) -> &mut Self {
        self.routes.insert(name.into(), url.into());
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Reads a flat JSON object of `route name -> url`.
    pub fn from_json(json: &str) -> Result<Self> {
        let routes: HashMap<String, String> =
            serde_json::from_str(json).context("routes must be a JSON object of strings")?;
        Ok(Self { routes })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read routes file {}", path.display()))?;
        Self::from_json(&json)
    }
}

impl LinkResolver for RouteTable {
    fn resolve(&self, target: &str) -> String {
        self.routes
            .get(target)
            .cloned()
            .unwrap_or_else(|| target.to_string())
    }
}
