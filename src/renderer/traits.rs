use crate::error::RenderError;
use crate::strategy::RenderStrategy;
use serde::Deserialize;

/// Caller-supplied rendering switches
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderOptions {
    /// Render every submenu, not only those below selected items.
    pub expand_all: bool,
    /// Deepest level whose items are rendered; `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Render an empty root container as an empty string.
    pub skip_if_empty: bool,
}

impl RenderOptions {
    pub fn expanded() -> Self {
        Self {
            expand_all: true,
            ..Self::default()
        }
    }
}

/// Turns a link target (URL or symbolic route) into an `href` value.
#[cfg_attr(test, mockall::automock)]
pub trait LinkResolver {
    fn resolve(&self, target: &str) -> String;
}

/// Per-call rendering state. Depth is 1-based and travels with the context.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub depth: usize,
    pub strategy: &'a RenderStrategy,
    pub options: &'a RenderOptions,
    pub links: &'a dyn LinkResolver,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        strategy: &'a RenderStrategy,
        options: &'a RenderOptions,
        links: &'a dyn LinkResolver,
    ) -> Self {
        Self {
            depth: 1,
            strategy,
            options,
            links,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth, ..*self }
    }

    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn is_top_level(&self) -> bool {
        self.depth == 1
    }

    /// Whether items one level below the current depth may be rendered.
    pub fn allows_nesting(&self) -> bool {
        self.options
            .max_depth
            .map_or(true, |max_depth| self.depth < max_depth)
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("depth", &self.depth)
            .field("strategy", &self.strategy.name)
            .field("options", self.options)
            .finish_non_exhaustive()
    }
}

/// Core rendering trait for menu nodes
pub trait Render {
    fn render(&self, context: &RenderContext) -> Result<String, RenderError>;
}
