use thiserror::Error;

/// Failures surfaced while resolving a renderer or rendering a menu.
///
/// Both variants abort the whole render call; no partial markup is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A structured label carried neither `text` nor `icon`.
    #[error("Hash does not contain any of parameters: 'text', 'icon'")]
    InvalidHash,
    /// No strategy is registered under the requested name.
    #[error("unknown renderer: {0}")]
    UnknownRenderer(String),
}
