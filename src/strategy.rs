//! Framework-specific class names consumed by the renderer.
//!
//! A strategy is plain data: the renderer never branches on which framework
//! it is targeting, it only reads the names below.

/// Immutable naming record for one CSS framework version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStrategy {
    pub name: &'static str,
    /// Framework-family class on the top-level list.
    pub nav_class: &'static str,
    /// Version-specific class added next to `nav_class`, if any.
    pub navbar_class: Option<&'static str>,
    pub menu_class: &'static str,
    pub pull_right_class: &'static str,
    pub toggle_class: &'static str,
    pub caret_class: &'static str,
    pub header_class: &'static str,
    pub divider_class: &'static str,
    pub vertical_divider_class: &'static str,
    pub navbar_text_class: &'static str,
    /// List-entry class of a first-level submenu parent.
    pub submenu_class: &'static str,
    /// List-entry class of a submenu parent nested inside another submenu.
    pub nested_submenu_class: &'static str,
    pub split_left_class: &'static str,
    pub split_right_class: &'static str,
    pub active_class: &'static str,
}

pub const BOOTSTRAP3: RenderStrategy = RenderStrategy {
    name: "bootstrap3",
    nav_class: "nav",
    navbar_class: Some("navbar-nav"),
    menu_class: "dropdown-menu",
    pull_right_class: "pull-right",
    toggle_class: "dropdown-toggle",
    caret_class: "caret",
    header_class: "dropdown-header",
    divider_class: "divider",
    vertical_divider_class: "divider-vertical",
    navbar_text_class: "navbar-text",
    submenu_class: "dropdown",
    nested_submenu_class: "dropdown-submenu",
    split_left_class: "dropdown-split-left",
    split_right_class: "dropdown-split-right",
    active_class: "active",
};

pub const BOOTSTRAP2: RenderStrategy = RenderStrategy {
    name: "bootstrap2",
    navbar_class: None,
    header_class: "nav-header",
    ..BOOTSTRAP3
};

impl RenderStrategy {
    /// Classes of the top-level list, without any container `dom_class`.
    pub fn root_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![self.nav_class];
        classes.extend(self.navbar_class);
        classes
    }
}
