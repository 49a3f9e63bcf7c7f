//! # navmarkup
//!
//! Renders navigation menu trees into Bootstrap 2/3 navbar markup.
//!
//! ```
//! use navmarkup::{default_registry, render, NavigationContainer, NavigationItem, RenderOptions};
//!
//! let menu = NavigationContainer::new(vec![
//!     NavigationItem::new("home", "Home", "/").selected(true),
//! ]);
//! let strategy = default_registry().resolve("bootstrap3").unwrap();
//! let html = render(&menu, strategy, &RenderOptions::default()).unwrap();
//!
//! assert_eq!(
//!     html,
//!     r#"<ul class="nav navbar-nav"><li class="active"><a href="/">Home</a></li></ul>"#
//! );
//! ```

pub mod error;
pub mod menu;
pub mod registry;
pub mod renderer;
pub mod strategy;


pub use error::RenderError;
pub use menu::*;
pub use registry::*;
pub use renderer::*;
pub use strategy::*;
