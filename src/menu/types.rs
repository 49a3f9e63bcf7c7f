use crate::error::RenderError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Root of a navigation tree, rendered as the top-level list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NavigationContainer {
    #[serde(default)]
    pub dom_id: Option<String>,
    #[serde(default)]
    pub dom_class: Option<String>,
    #[serde(default)]
    pub items: Vec<NavigationItem>,
}

impl NavigationContainer {
    pub fn new(items: Vec<NavigationItem>) -> Self {
        Self {
            dom_id: None,
            dom_class: None,
            items,
        }
    }

    pub fn with_dom_id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = Some(dom_id.into());
        self
    }

    pub fn with_dom_class(mut self, dom_class: impl Into<String>) -> Self {
        self.dom_class = Some(dom_class.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One entry of the menu tree.
///
/// Depth is never stored here; the renderer threads it through the walk.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavigationItem {
    pub key: String,
    pub label: Label,
    pub target: String,
    #[serde(default)]
    pub options: ItemOptions,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    pub fn new(key: impl Into<String>, label: impl Into<Label>, target: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            target: target.into(),
            options: ItemOptions::default(),
            selected: false,
            children: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: ItemOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_children(mut self, children: Vec<NavigationItem>) -> Self {
        self.children = children;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Per-item flags and pass-through attributes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItemOptions {
    pub header: bool,
    pub split: bool,
    pub divider: bool,
    pub navbar_text: bool,
    pub class: Option<String>,
    pub id: Option<String>,
    /// Extra attributes placed on the list entry.
    pub attributes: BTreeMap<String, String>,
    /// Extra attributes placed on the item's link.
    pub link_attributes: BTreeMap<String, String>,
}

impl ItemOptions {
    pub fn header() -> Self {
        Self {
            header: true,
            ..Self::default()
        }
    }

    pub fn split() -> Self {
        Self {
            split: true,
            ..Self::default()
        }
    }

    pub fn divider() -> Self {
        Self {
            divider: true,
            ..Self::default()
        }
    }

    pub fn navbar_text() -> Self {
        Self {
            navbar_text: true,
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_link_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.link_attributes.insert(name.into(), value.into());
        self
    }
}

/// Item label: either literal text or an icon/text descriptor.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Label {
    Plain(String),
    Structured(StructuredLabel),
}

impl Label {
    /// Builds a structured label, rejecting one with neither text nor icon.
    pub fn structured(
        icon: Option<&str>,
        title: Option<&str>,
        text: Option<&str>,
    ) -> Result<Self, RenderError> {
        let label = StructuredLabel {
            icon: icon.map(str::to_string),
            title: title.map(str::to_string),
            text: text.map(str::to_string),
        };
        label.validate()?;
        Ok(Label::Structured(label))
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Plain(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Plain(text)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StructuredLabel {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl StructuredLabel {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.icon.is_none() && self.text.is_none() {
            return Err(RenderError::InvalidHash);
        }
        Ok(())
    }
}
