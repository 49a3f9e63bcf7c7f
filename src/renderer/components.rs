use std::collections::BTreeMap;
use tracing::warn;

/// Escape special HTML characters in text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Whether `name` is safe to emit as an attribute name: `[A-Za-z_:][A-Za-z0-9_:.-]*`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-'))
}

/// Ordered, space-joined `class` attribute value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class; blank input is ignored.
    pub fn push(&mut self, class: &str) -> &mut Self {
        let class = class.trim();
        if !class.is_empty() {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn push_opt(&mut self, class: Option<&str>) -> &mut Self {
        if let Some(class) = class {
            self.push(class);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn value(&self) -> String {
        self.classes.join(" ")
    }
}

/// Builder for a single HTML element.
#[derive(Debug, Clone)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(String, String)>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn attr_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Sets `class`, omitting the attribute entirely when the list is empty.
    pub fn classes(self, classes: &ClassList) -> Self {
        if classes.is_empty() {
            self
        } else {
            self.attr("class", &classes.value())
        }
    }

    /// Appends pass-through attributes, dropping any with an unsafe name.
    pub fn attrs(mut self, attributes: &BTreeMap<String, String>) -> Self {
        for (name, value) in attributes {
            if !is_valid_attribute_name(name) {
                warn!(attribute = %name, element = self.name, "skipping attribute with invalid name");
                continue;
            }
            self.attributes.push((name.clone(), value.clone()));
        }
        self
    }

    pub fn open_tag(&self) -> String {
        let mut tag = format!("<{}", self.name);
        for (name, value) in &self.attributes {
            tag.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        tag.push('>');
        tag
    }

    pub fn close_tag(&self) -> String {
        format!("</{}>", self.name)
    }

    /// Wraps already-rendered markup.
    pub fn wrap(&self, content: &str) -> String {
        format!("{}{}{}", self.open_tag(), content, self.close_tag())
    }

    pub fn empty(&self) -> String {
        self.wrap("")
    }
}
