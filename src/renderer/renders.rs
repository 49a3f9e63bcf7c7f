use tracing::{debug, trace};

use crate::error::RenderError;
use crate::menu::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

impl Render for Label {
    fn render(&self, context: &RenderContext) -> Result<String, RenderError> {
        match self {
            Label::Plain(text) => Ok(escape_html(text)),
            Label::Structured(label) => label.render(context),
        }
    }
}

impl Render for StructuredLabel {
    fn render(&self, _context: &RenderContext) -> Result<String, RenderError> {
        self.validate()?;

        let mut output = String::new();

        if let Some(icon) = &self.icon {
            let mut classes = ClassList::new();
            classes.push(icon);
            output.push_str(
                &Element::new("span")
                    .classes(&classes)
                    .attr_opt("title", self.title.as_deref())
                    .empty(),
            );
        }

        if let Some(text) = &self.text {
            if self.icon.is_some() {
                output.push(' ');
            }
            output.push_str(&escape_html(text));
        }

        Ok(output)
    }
}

/// Markup shape chosen for one item at one depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemShape {
    Divider,
    Header,
    NavbarText,
    Split,
    Dropdown,
    Link,
}

impl NavigationItem {
    /// Whether this item's children are rendered under the given context.
    pub fn expands(&self, context: &RenderContext) -> bool {
        self.has_children()
            && context.allows_nesting()
            && (context.options.expand_all || self.selected)
    }

    pub fn shape(&self, context: &RenderContext) -> ItemShape {
        let options = &self.options;

        if options.divider {
            return ItemShape::Divider;
        }

        // Top-level headers fall through and render like ordinary items.
        if options.header && !context.is_top_level() {
            if self.has_children() {
                debug!(key = %self.key, depth = context.depth, "children of header item not rendered");
            }
            return ItemShape::Header;
        }

        if options.navbar_text {
            return ItemShape::NavbarText;
        }

        if !self.expands(context) {
            return ItemShape::Link;
        }

        if options.split {
            if context.is_top_level() {
                return ItemShape::Split;
            }
            debug!(key = %self.key, depth = context.depth, "split ignored below the first level");
        }

        ItemShape::Dropdown
    }

    fn entry_classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.push_opt(self.options.class.as_deref());
        classes
    }

    fn entry(&self, classes: &ClassList) -> Element {
        Element::new("li")
            .classes(classes)
            .attr_opt("id", self.options.id.as_deref())
            .attrs(&self.options.attributes)
    }

    fn mark_active(&self, classes: &mut ClassList, context: &RenderContext) {
        if self.selected {
            classes.push(context.strategy.active_class);
        }
    }

    fn link(&self, label: &str, context: &RenderContext) -> String {
        Element::new("a")
            .attr("href", &context.links.resolve(&self.target))
            .attrs(&self.options.link_attributes)
            .wrap(label)
    }
}

fn toggle(href: &str, content: &str, context: &RenderContext) -> String {
    let mut classes = ClassList::new();
    classes.push(context.strategy.toggle_class);

    Element::new("a")
        .attr("href", href)
        .classes(&classes)
        .attr("data-toggle", "dropdown")
        .attr("data-target", "#")
        .wrap(content)
}

fn caret(context: &RenderContext) -> String {
    let mut classes = ClassList::new();
    classes.push(context.strategy.caret_class);
    Element::new("b").classes(&classes).empty()
}

/// Renders sibling items in stored order.
pub fn render_items(items: &[NavigationItem], context: &RenderContext) -> Result<String, RenderError> {
    let mut output = String::new();
    for item in items {
        output.push_str(&item.render(context)?);
    }
    Ok(output)
}

/// Renders `items` as a dropdown list at `context.depth`.
///
/// Only lists directly under a first-level item float right.
pub fn render_submenu(items: &[NavigationItem], context: &RenderContext) -> Result<String, RenderError> {
    let strategy = context.strategy;
    let mut classes = ClassList::new();
    classes.push(strategy.menu_class);
    if context.depth == 2 {
        classes.push(strategy.pull_right_class);
    }

    let content = render_items(items, context)?;
    Ok(Element::new("ul").classes(&classes).wrap(&content))
}

impl Render for NavigationItem {
    fn render(&self, context: &RenderContext) -> Result<String, RenderError> {
        let strategy = context.strategy;
        let shape = self.shape(context);
        trace!(key = %self.key, depth = context.depth, ?shape, "rendering item");

        let mut classes = self.entry_classes();

        let output = match shape {
            ItemShape::Divider => {
                if context.is_top_level() {
                    classes.push(strategy.vertical_divider_class);
                } else {
                    classes.push(strategy.divider_class);
                }
                self.entry(&classes).empty()
            }
            ItemShape::Header => {
                classes.push(strategy.header_class);
                let label = self.label.render(context)?;
                self.entry(&classes).wrap(&label)
            }
            ItemShape::NavbarText => {
                self.mark_active(&mut classes, context);
                let label = self.label.render(context)?;
                let mut text_classes = ClassList::new();
                text_classes.push(strategy.navbar_text_class);
                let text = Element::new("p").classes(&text_classes).wrap(&label);
                self.entry(&classes).wrap(&text)
            }
            ItemShape::Split => {
                let label = self.label.render(context)?;
                let submenu = render_submenu(&self.children, &context.nested())?;

                classes.push(strategy.split_left_class);
                self.mark_active(&mut classes, context);
                let left = self.entry(&classes).wrap(&self.link(&label, context));

                let mut right_classes = ClassList::new();
                right_classes
                    .push(strategy.submenu_class)
                    .push(strategy.split_right_class);
                let right_content = format!("{}{}", toggle("#", &caret(context), context), submenu);
                let right = Element::new("li").classes(&right_classes).wrap(&right_content);

                format!("{}{}", left, right)
            }
            ItemShape::Dropdown => {
                let label = self.label.render(context)?;
                let submenu = render_submenu(&self.children, &context.nested())?;

                // Nested parents keep their own destination; first-level ones only toggle.
                let href = if context.is_top_level() {
                    classes.push(strategy.submenu_class);
                    "#".to_string()
                } else {
                    classes.push(strategy.nested_submenu_class);
                    context.links.resolve(&self.target)
                };
                self.mark_active(&mut classes, context);

                let toggle_content = format!("{} {}", label, caret(context));
                let content = format!("{}{}", toggle(&href, &toggle_content, context), submenu);
                self.entry(&classes).wrap(&content)
            }
            ItemShape::Link => {
                self.mark_active(&mut classes, context);
                let label = self.label.render(context)?;
                self.entry(&classes).wrap(&self.link(&label, context))
            }
        };

        Ok(output)
    }
}
