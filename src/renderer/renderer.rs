use tracing::debug;

use crate::error::RenderError;
use crate::menu::*;
use crate::renderer::components::*;
use crate::renderer::links::PassThrough;
use crate::renderer::renders::render_items;
use crate::renderer::traits::*;
use crate::strategy::RenderStrategy;

static PASS_THROUGH: PassThrough = PassThrough;

impl Render for NavigationContainer {
    fn render(&self, context: &RenderContext) -> Result<String, RenderError> {
        if context.options.skip_if_empty && self.is_empty() {
            return Ok(String::new());
        }

        let mut classes = ClassList::new();
        classes.push_opt(self.dom_class.as_deref());
        for class in context.strategy.root_classes() {
            classes.push(class);
        }

        let content = render_items(&self.items, context)?;

        Ok(Element::new("ul")
            .classes(&classes)
            .attr_opt("id", self.dom_id.as_deref())
            .wrap(&content))
    }
}

/// Renders whole navigation trees with one strategy and link resolver.
pub struct MenuRenderer<'a> {
    strategy: &'a RenderStrategy,
    links: &'a dyn LinkResolver,
}

impl<'a> MenuRenderer<'a> {
    /// A renderer that uses link targets verbatim.
    pub fn new(strategy: &'a RenderStrategy) -> Self {
        Self {
            strategy,
            links: &PASS_THROUGH,
        }
    }

    pub fn with_links(mut self, links: &'a dyn LinkResolver) -> Self {
        self.links = links;
        self
    }

    pub fn render(
        &self,
        root: &NavigationContainer,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        debug!(
            strategy = self.strategy.name,
            items = root.items.len(),
            expand_all = options.expand_all,
            "rendering navigation"
        );

        let context = RenderContext::new(self.strategy, options, self.links);
        root.render(&context)
    }
}

/// Renders `root` with `strategy`, passing link targets through unchanged.
pub fn render(
    root: &NavigationContainer,
    strategy: &RenderStrategy,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    MenuRenderer::new(strategy).render(root, options)
}
