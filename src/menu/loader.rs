use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::menu::types::NavigationContainer;

/// Parses a navigation tree from its JSON form.
///
/// A bare array is accepted as shorthand for a container with no dom attributes.
pub fn parse_menu(json: &str) -> Result<NavigationContainer> {
    let value: serde_json::Value = serde_json::from_str(json).context("menu is not valid JSON")?;

    let container = if value.is_array() {
        NavigationContainer::new(serde_json::from_value(value).context("invalid menu item list")?)
    } else {
        serde_json::from_value::<NavigationContainer>(value).context("invalid menu container")?
    };

    debug!(items = container.items.len(), "parsed navigation menu");
    Ok(container)
}

pub fn load_menu(path: &Path) -> Result<NavigationContainer> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read menu file {}", path.display()))?;
    parse_menu(&json).with_context(|| format!("failed to parse menu file {}", path.display()))
}
