//! Error types for attaching helpers to the DOM.

use thiserror::Error;
use vesper_core::ConfigError;

/// Errors surfaced while wiring a helper to the document.
///
/// Construction is the fail-fast boundary; once attached, event handlers
/// degrade to logged no-ops instead of erroring.
#[derive(Debug, Error)]
pub enum AttachError {
    /// Helper configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// No `window` global; the helper only runs inside a browser page.
    #[error("browser window is not available")]
    NoWindow,
    /// The window exists but carries no document.
    #[error("browser document is not available")]
    NoDocument,
    /// The supplied node is not part of a document.
    #[error("target node is detached from any document")]
    DetachedNode,
    /// The browser refused a DOM call while building the widget markup.
    #[error("DOM operation '{operation}' failed")]
    Dom {
        /// The DOM call that failed.
        operation: &'static str,
    },
    /// `matchMedia` is unsupported or rejected the color-scheme query.
    #[error("media query '{query}' is not available")]
    MediaQuery {
        /// The rejected query string.
        query: &'static str,
    },
}

/// Convenience alias for attach results.
pub type AttachResult<T> = Result<T, AttachError>;
